use pretty_assertions::assert_eq;
use snippet_fs::walk::{FileFilter, find_files};
use snippet_fs::NormalizedPath;
use std::fs;
use tempfile::TempDir;

fn touch(root: &std::path::Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

fn relative(root: &NormalizedPath, files: &[NormalizedPath]) -> Vec<String> {
    files
        .iter()
        .map(|f| f.relative_to(root).unwrap().to_string())
        .collect()
}

#[test]
fn test_find_files_recurses_and_filters_by_extension() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "README.md");
    touch(temp.path(), "src/Program.cs");
    touch(temp.path(), "src/deep/Nested.cs");
    touch(temp.path(), "src/notes.txt");

    let root = NormalizedPath::new(temp.path());
    let files = find_files(&root, &FileFilter::new(["cs"])).unwrap();

    assert_eq!(
        relative(&root, &files),
        vec!["src/Program.cs".to_string(), "src/deep/Nested.cs".to_string()]
    );
}

#[test]
fn test_find_files_is_sorted() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "b.md");
    touch(temp.path(), "a.md");
    touch(temp.path(), "c/a.md");

    let root = NormalizedPath::new(temp.path());
    let files = find_files(&root, &FileFilter::new(["md"])).unwrap();

    assert_eq!(
        relative(&root, &files),
        vec!["a.md".to_string(), "b.md".to_string(), "c/a.md".to_string()]
    );
}

#[test]
fn test_find_files_prunes_excluded_directories() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "docs/guide.md");
    touch(temp.path(), "target/doc/generated.md");
    touch(temp.path(), "node_modules/pkg/README.md");

    let root = NormalizedPath::new(temp.path());
    let filter = FileFilter::new(["md"]).excluding(["target", "node_modules"]);
    let files = find_files(&root, &filter).unwrap();

    assert_eq!(relative(&root, &files), vec!["docs/guide.md".to_string()]);
}

#[test]
fn test_find_files_missing_root_is_error() {
    let root = NormalizedPath::new("/nonexistent/snippet-root");
    let result = find_files(&root, &FileFilter::new(["md"]));
    assert!(matches!(result, Err(snippet_fs::Error::Walk { .. })));
}
