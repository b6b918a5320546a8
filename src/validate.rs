//! Category validation
//!
//! Every discovered tuple must cover the experiment's declared categories
//! exactly: same cardinality, no extras, no gaps, no duplicates. Comparison
//! is set-based; file enumeration order never changes the outcome. The first
//! failing tuple aborts the whole run.

use std::collections::BTreeSet;
use std::path::Path;

use crate::{Error, Result};

/// Check a tuple's derived categories against the experiment's declared set.
///
/// `found` is the tuple's derived labels in directory-listing order; `dir`
/// names the tuple directory in diagnostics.
///
/// # Errors
///
/// [`Error::DuplicateCategory`] when two files reduce to the same label,
/// [`Error::CategoryMismatch`] when the sets differ; the mismatch carries
/// the sorted symmetric difference for diagnosability.
pub fn check_tuple_categories(declared: &[String], found: &[String], dir: &Path) -> Result<()> {
    let mut seen = BTreeSet::new();
    for category in found {
        if !seen.insert(category.as_str()) {
            return Err(Error::DuplicateCategory {
                dir: dir.to_path_buf(),
                category: category.clone(),
            });
        }
    }

    let declared_set: BTreeSet<&str> = declared.iter().map(String::as_str).collect();
    if declared_set == seen {
        return Ok(());
    }

    let missing = declared_set
        .difference(&seen)
        .map(ToString::to_string)
        .collect();
    let unexpected = seen
        .difference(&declared_set)
        .map(ToString::to_string)
        .collect();
    Err(Error::CategoryMismatch {
        dir: dir.to_path_buf(),
        missing,
        unexpected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats(labels: &[&str]) -> Vec<String> {
        labels.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_exact_match_passes() {
        let declared = cats(&["a", "b"]);
        let found = cats(&["b", "a"]);
        assert!(check_tuple_categories(&declared, &found, Path::new("t1")).is_ok());
    }

    #[test]
    fn test_duplicate_category_fails() {
        let declared = cats(&["a", "b"]);
        let found = cats(&["a", "a"]);
        let err = check_tuple_categories(&declared, &found, Path::new("t1")).unwrap_err();
        match err {
            Error::DuplicateCategory { category, dir } => {
                assert_eq!(category, "a");
                assert_eq!(dir, Path::new("t1"));
            }
            other => panic!("expected DuplicateCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_mismatch_reports_symmetric_difference() {
        let declared = cats(&["a", "b", "c"]);
        let found = cats(&["a", "d"]);
        let err = check_tuple_categories(&declared, &found, Path::new("t1")).unwrap_err();
        match err {
            Error::CategoryMismatch {
                missing,
                unexpected,
                ..
            } => {
                assert_eq!(missing, vec!["b", "c"]);
                assert_eq!(unexpected, vec!["d"]);
            }
            other => panic!("expected CategoryMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_takes_precedence_over_mismatch() {
        // a duplicate always reports as DuplicateCategory even though the
        // multiset also fails set equality
        let declared = cats(&["a", "b"]);
        let found = cats(&["b", "b"]);
        let err = check_tuple_categories(&declared, &found, Path::new("t1")).unwrap_err();
        assert!(matches!(err, Error::DuplicateCategory { .. }));
    }

    #[test]
    fn test_subset_fails() {
        let declared = cats(&["a", "b"]);
        let found = cats(&["a"]);
        let err = check_tuple_categories(&declared, &found, Path::new("t1")).unwrap_err();
        assert!(matches!(err, Error::CategoryMismatch { .. }));
    }

    #[test]
    fn test_superset_fails() {
        let declared = cats(&["a", "b"]);
        let found = cats(&["a", "b", "c"]);
        let err = check_tuple_categories(&declared, &found, Path::new("t1")).unwrap_err();
        assert!(matches!(err, Error::CategoryMismatch { .. }));
    }
}
