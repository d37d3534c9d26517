use kebabize::{kebab_case, validate_kebab};
use proptest::prelude::*;

proptest! {
    #[test]
    fn output_restricted_to_kebab_charset(s in any::<String>()) {
        let out = kebab_case(&s);
        prop_assert!(out
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn no_edge_hyphens(s in any::<String>()) {
        let out = kebab_case(&s);
        prop_assert!(!out.starts_with('-'));
        prop_assert!(!out.ends_with('-'));
    }

    #[test]
    fn no_doubled_hyphens(s in any::<String>()) {
        prop_assert!(!kebab_case(&s).contains("--"));
    }

    #[test]
    fn conversion_is_idempotent(s in any::<String>()) {
        let once = kebab_case(&s);
        prop_assert_eq!(kebab_case(&once), once);
    }

    #[test]
    fn nonempty_output_passes_validation(s in any::<String>()) {
        let out = kebab_case(&s);
        if !out.is_empty() {
            prop_assert!(validate_kebab(&out).is_ok());
        }
    }
}
