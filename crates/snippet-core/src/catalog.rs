//! Snippet discovery across a source tree

use std::collections::HashMap;

use snippet_blocks::snippet_regions;
use snippet_fs::{FileFilter, NormalizedPath, io, walk};

use crate::{Error, Result, Snippet, SnippetConfig};

/// Extracts the snippets defined in one source file.
pub fn extract_snippets(path: &NormalizedPath, content: &str) -> Result<Vec<Snippet>> {
    let regions = snippet_regions(content).map_err(|source| Error::MalformedRegion {
        path: path.to_native(),
        source,
    })?;

    Ok(regions
        .into_iter()
        .inspect(|region| {
            tracing::debug!(
                path = %path,
                label = %region.label,
                lines = %format!("{}-{}", region.start_line, region.end_line),
                "Found snippet region"
            );
        })
        .map(|region| Snippet::from_region(region, path))
        .collect())
}

/// Every snippet found under a root directory, indexed by name.
///
/// Duplicate names are kept: they only become an error when a placeholder
/// asks for one of them through [`SnippetCatalog::resolve`].
#[derive(Debug, Clone)]
pub struct SnippetCatalog {
    root: NormalizedPath,
    snippets: Vec<Snippet>,
    by_name: HashMap<String, Vec<usize>>,
}

impl SnippetCatalog {
    /// Build a catalog from snippets already in hand.
    pub fn new(root: impl Into<NormalizedPath>, snippets: Vec<Snippet>) -> Self {
        let mut by_name: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, snippet) in snippets.iter().enumerate() {
            by_name.entry(snippet.name.clone()).or_default().push(idx);
        }

        Self {
            root: root.into(),
            snippets,
            by_name,
        }
    }

    /// Scan every source file under `root` selected by `filter`.
    pub fn build(root: &NormalizedPath, filter: &FileFilter) -> Result<Self> {
        let mut snippets = Vec::new();
        for path in walk::find_files(root, filter)? {
            let content = io::read_text(&path)?;
            snippets.extend(extract_snippets(&path, &content)?);
        }

        tracing::info!(root = %root, count = snippets.len(), "Discovered snippets");
        for snippet in &snippets {
            tracing::info!(snippet = %snippet.name, origin = %snippet.location(), "Discovered snippet");
        }

        Ok(Self::new(root.clone(), snippets))
    }

    /// Resolve a placeholder key to its single defining snippet.
    ///
    /// # Errors
    ///
    /// [`Error::SnippetNotFound`] when no region carries `name`, and
    /// [`Error::DuplicateSnippetName`] when more than one does.
    pub fn resolve(&self, name: &str) -> Result<&Snippet> {
        let matches = self.matching(name);
        match matches.as_slice() {
            [single] => Ok(*single),
            [] => Err(Error::SnippetNotFound {
                name: name.to_string(),
                root: self.root.to_native(),
            }),
            many => Err(Error::DuplicateSnippetName {
                name: name.to_string(),
                root: self.root.to_native(),
                locations: many.iter().map(|s| s.location()).collect(),
            }),
        }
    }

    /// All snippets named `name`, in discovery order.
    pub fn matching(&self, name: &str) -> Vec<&Snippet> {
        self.by_name
            .get(name)
            .map(|indices| indices.iter().map(|&idx| &self.snippets[idx]).collect())
            .unwrap_or_default()
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

/// A catalog built on first use and kept for the rest of the run.
#[derive(Debug)]
pub struct LazyCatalog {
    root: NormalizedPath,
    filter: FileFilter,
    catalog: Option<SnippetCatalog>,
}

impl LazyCatalog {
    pub fn new(root: NormalizedPath, config: &SnippetConfig) -> Self {
        Self {
            root,
            filter: config.source_filter(),
            catalog: None,
        }
    }

    /// Wrap an already-built catalog; [`get`](Self::get) never scans.
    pub fn ready(catalog: SnippetCatalog) -> Self {
        Self {
            root: catalog.root().clone(),
            filter: FileFilter::default(),
            catalog: Some(catalog),
        }
    }

    /// The catalog, scanning the source tree on the first call only.
    pub fn get(&mut self) -> Result<&SnippetCatalog> {
        match self.catalog {
            Some(ref catalog) => Ok(catalog),
            None => {
                let catalog = SnippetCatalog::build(&self.root, &self.filter)?;
                Ok(self.catalog.insert(catalog))
            }
        }
    }

    /// The catalog if it has been built.
    pub fn built(&self) -> Option<&SnippetCatalog> {
        self.catalog.as_ref()
    }

    pub fn is_built(&self) -> bool {
        self.catalog.is_some()
    }
}
