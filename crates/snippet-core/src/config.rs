//! Run configuration
//!
//! Read from `.snippetgen.toml` at the processed root when present:
//!
//! ```toml
//! source_extensions = ["cs", "rs"]
//! document_extensions = ["md"]
//! exclude = ["target", "node_modules"]
//! ```

use serde::{Deserialize, Serialize};
use snippet_fs::{ConfigStore, FileFilter, NormalizedPath};

use crate::Result;

fn default_source_extensions() -> Vec<String> {
    vec!["cs".to_string()]
}

fn default_document_extensions() -> Vec<String> {
    vec!["md".to_string()]
}

/// Which files a run scans for snippets and which it rewrites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnippetConfig {
    /// Extensions of files scanned for `#region` snippets
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,

    /// Extensions of documents whose placeholders are rewritten
    #[serde(default = "default_document_extensions")]
    pub document_extensions: Vec<String>,

    /// Directory names skipped for both sources and documents
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            source_extensions: default_source_extensions(),
            document_extensions: default_document_extensions(),
            exclude: Vec::new(),
        }
    }
}

impl SnippetConfig {
    /// Config file looked up at the root of a run.
    pub const FILE_NAME: &'static str = ".snippetgen.toml";

    /// Load `root/.snippetgen.toml`, falling back to defaults when absent.
    pub fn discover(root: &NormalizedPath) -> Result<Self> {
        let path = root.join(Self::FILE_NAME);
        let config = ConfigStore::new().load_optional(&path)?;
        if config.is_some() {
            tracing::debug!(path = %path, "Loaded configuration");
        }
        Ok(config.unwrap_or_default())
    }

    /// Load an explicit config file; TOML, JSON and YAML are accepted.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    /// Filter selecting source files.
    pub fn source_filter(&self) -> FileFilter {
        FileFilter::new(self.source_extensions.iter().cloned()).excluding(self.exclude.iter().cloned())
    }

    /// Filter selecting documents.
    pub fn document_filter(&self) -> FileFilter {
        FileFilter::new(self.document_extensions.iter().cloned()).excluding(self.exclude.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: SnippetConfig = toml::from_str("exclude = [\"bin\", \"obj\"]").unwrap();
        assert_eq!(config.source_extensions, vec!["cs".to_string()]);
        assert_eq!(config.document_extensions, vec!["md".to_string()]);
        assert_eq!(config.exclude, vec!["bin".to_string(), "obj".to_string()]);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: std::result::Result<SnippetConfig, _> = toml::from_str("extensions = [\"cs\"]");
        assert!(result.is_err());
    }

    #[test]
    fn test_filters_share_exclusions() {
        let config = SnippetConfig {
            exclude: vec!["target".into()],
            ..Default::default()
        };
        assert_eq!(config.source_filter().exclude, vec!["target".to_string()]);
        assert_eq!(config.document_filter().extensions, vec!["md".to_string()]);
    }
}
