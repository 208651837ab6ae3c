//! Directory-wide document rewriting
//!
//! The processor walks every document under a root, substitutes each
//! placeholder with its formatted snippet and persists the result. The
//! snippet catalog is scanned on the first placeholder and reused for every
//! later document; a run whose documents hold no placeholders never reads a
//! source file.

use similar::TextDiff;
use snippet_blocks::{find_placeholders, rewrite_placeholders};
use snippet_fs::{NormalizedPath, io, walk};

use crate::{Error, LazyCatalog, Result, SnippetCatalog, SnippetConfig};

/// Whether a run persists its rewrites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProcessMode {
    /// Write documents whose text changed
    #[default]
    Write,
    /// Write nothing; report documents that would change
    Check,
}

/// What happened to one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    /// No placeholders; the file was not touched
    NoPlaceholders,
    /// Placeholders resolved to the text already present
    UpToDate,
    /// Rewritten on disk
    Updated,
    /// Out of date, left as is because the run is a check
    Stale,
}

/// Outcome for a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReport {
    pub path: NormalizedPath,
    pub status: DocumentStatus,
    /// Placeholders substituted in this document
    pub replaced: usize,
    /// Unified diff of the pending change, for stale documents
    pub diff: Option<String>,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessReport {
    pub root: NormalizedPath,
    pub mode: ProcessMode,
    pub documents: Vec<DocumentReport>,
    /// Snippets in the catalog, or `None` if no placeholder needed it
    /// and the source tree was never scanned
    pub snippets_discovered: Option<usize>,
}

impl ProcessReport {
    pub fn with_status(&self, status: DocumentStatus) -> impl Iterator<Item = &DocumentReport> {
        self.documents.iter().filter(move |doc| doc.status == status)
    }

    pub fn updated_count(&self) -> usize {
        self.with_status(DocumentStatus::Updated).count()
    }

    pub fn stale_count(&self) -> usize {
        self.with_status(DocumentStatus::Stale).count()
    }

    pub fn replaced_count(&self) -> usize {
        self.documents.iter().map(|doc| doc.replaced).sum()
    }
}

/// Rewrites snippet placeholders in every document under a root.
#[derive(Debug)]
pub struct DirectoryProcessor {
    root: NormalizedPath,
    config: SnippetConfig,
    catalog: LazyCatalog,
}

impl DirectoryProcessor {
    /// Create a processor whose catalog is scanned from `root` on first use.
    pub fn new(root: impl Into<NormalizedPath>, config: SnippetConfig) -> Self {
        let root = root.into();
        let catalog = LazyCatalog::new(root.clone(), &config);
        Self {
            root,
            config,
            catalog,
        }
    }

    /// Create a processor resolving against a prepared catalog.
    pub fn with_catalog(root: impl Into<NormalizedPath>, config: SnippetConfig, catalog: SnippetCatalog) -> Self {
        Self {
            root: root.into(),
            config,
            catalog: LazyCatalog::ready(catalog),
        }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Build the catalog now instead of on the first placeholder.
    pub fn catalog(&mut self) -> Result<&SnippetCatalog> {
        self.catalog.get()
    }

    /// Process every document under the root.
    ///
    /// Stops at the first error; documents already written stay written.
    pub fn process(&mut self, mode: ProcessMode) -> Result<ProcessReport> {
        let documents = walk::find_files(&self.root, &self.config.document_filter())?;

        let mut reports = Vec::with_capacity(documents.len());
        for path in documents {
            reports.push(self.process_document(&path, mode)?);
        }

        Ok(ProcessReport {
            root: self.root.clone(),
            mode,
            documents: reports,
            snippets_discovered: self.catalog.built().map(SnippetCatalog::len),
        })
    }

    /// Rewrite a single document.
    pub fn process_document(&mut self, path: &NormalizedPath, mode: ProcessMode) -> Result<DocumentReport> {
        tracing::info!(document = %path, "Processing");

        let original = io::read_text(path)?;
        let placeholders = find_placeholders(&original).map_err(|source| Error::MalformedPlaceholder {
            path: path.to_native(),
            source,
        })?;
        let rewrite = rewrite_placeholders(&original, &placeholders, |name| -> Result<String> {
            let snippet = self.catalog.get()?.resolve(name)?;
            tracing::info!(snippet = %snippet.name, origin = %snippet.location(), "Replaced");
            Ok(snippet.formatted())
        })?;

        let (status, diff) = if !rewrite.changed() {
            (DocumentStatus::NoPlaceholders, None)
        } else if rewrite.content == original {
            tracing::debug!(document = %path, "Already up to date");
            (DocumentStatus::UpToDate, None)
        } else {
            match mode {
                ProcessMode::Write => {
                    io::write_text(path, &rewrite.content)?;
                    (DocumentStatus::Updated, None)
                }
                ProcessMode::Check => {
                    let label = path.relative_to(&self.root).unwrap_or(path.as_str());
                    (DocumentStatus::Stale, Some(unified_diff(label, &original, &rewrite.content)))
                }
            }
        };

        Ok(DocumentReport {
            path: path.clone(),
            status,
            replaced: rewrite.replaced,
            diff,
        })
    }
}

fn unified_diff(label: &str, old: &str, new: &str) -> String {
    let diff = TextDiff::from_lines(old, new);
    diff.unified_diff()
        .context_radius(3)
        .header(&format!("a/{label}"), &format!("b/{label}"))
        .to_string()
}
