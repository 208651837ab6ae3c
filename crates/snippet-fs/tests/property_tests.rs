use proptest::prelude::*;
use snippet_fs::NormalizedPath;

proptest! {
    #[test]
    fn test_normalized_path_has_no_backslashes(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        prop_assert!(!path.as_str().contains('\\'));
    }

    #[test]
    fn test_join_then_relative_to_recovers_segment(
        base in "[a-z]{1,8}(/[a-z]{1,8}){0,3}",
        segment in "[a-z]{1,8}(/[a-z]{1,8}){0,2}\\.md",
    ) {
        let root = NormalizedPath::new(&base);
        let joined = root.join(&segment);
        prop_assert_eq!(joined.relative_to(&root), Some(segment.as_str()));
    }
}
