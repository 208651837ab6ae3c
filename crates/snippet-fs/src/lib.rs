//! Filesystem glue for snippetgen
//!
//! Provides normalized paths, BOM-free text I/O, recursive file discovery
//! and format-agnostic configuration loading.

pub mod config;
pub mod error;
pub mod io;
pub mod path;
pub mod walk;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use walk::FileFilter;
