//! Property-based tests for path manipulation functions.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::path::{compile_pattern, glob_match, mirror_destination, relative_to};
    use proptest::prelude::*;
    use std::ffi::OsStr;
    use std::path::{Path, PathBuf};

    fn components() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-zA-Z0-9_.-]{1,12}", 1..6)
            .prop_filter("no dot-only components", |parts| {
                parts.iter().all(|p| p != "." && p != "..")
            })
    }

    fn join(base: &Path, parts: &[String]) -> PathBuf {
        parts.iter().fold(base.to_path_buf(), |acc, p| acc.join(p))
    }

    // ============================================================================
    // relative_to property tests
    // ============================================================================

    proptest! {
        /// Property: joining the relative path back onto the root reproduces the input
        #[test]
        fn relative_to_round_trips_through_join(root in components(), rest in components()) {
            let root = join(Path::new("/"), &root);
            let full = join(&root, &rest);

            let rel = relative_to(&full, &root).unwrap();
            prop_assert!(rel.is_relative());
            prop_assert_eq!(root.join(&rel), full);
        }

        /// Property: a sibling whose name merely extends the root's last component is rejected
        #[test]
        fn relative_to_rejects_sibling_with_shared_prefix(
            root in components(),
            suffix in "[a-z0-9]{1,4}",
            rest in components(),
        ) {
            let root = join(Path::new("/"), &root);
            let mut sibling = root.clone().into_os_string();
            sibling.push(&suffix);
            let path = join(Path::new(&sibling), &rest);

            prop_assert!(relative_to(&path, &root).is_err());
        }

        /// Property: mirrored destinations always live under the output directory
        #[test]
        fn mirror_destination_stays_under_output(out in components(), rest in components()) {
            let out = join(Path::new("/"), &out);
            let rel = join(Path::new(""), &rest);
            let dest = mirror_destination(&out, &rel);

            prop_assert!(dest.starts_with(&out));
            prop_assert_eq!(relative_to(&dest, &out).unwrap(), rel);
        }
    }

    // ============================================================================
    // glob_match property tests
    // ============================================================================

    proptest! {
        /// Property: "*.abilist" matches every name ending in ".abilist"
        #[test]
        fn abilist_pattern_matches_suffix(stem in "[a-zA-Z0-9_-]{1,16}") {
            let name = format!("{}.abilist", stem);
            let pattern = compile_pattern("*.abilist").unwrap();
            prop_assert!(glob_match(&pattern, OsStr::new(&name)));
        }

        /// Property: names with a different extension never match
        #[test]
        fn abilist_pattern_rejects_other_extensions(
            stem in "[a-zA-Z0-9_-]{1,16}",
            ext in "[a-z]{1,8}",
        ) {
            prop_assume!(ext != "abilist");
            let name = format!("{}.{}", stem, ext);
            let pattern = compile_pattern("*.abilist").unwrap();
            prop_assert!(!glob_match(&pattern, OsStr::new(&name)));
        }
    }
}
