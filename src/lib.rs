//! Kebab-case string conversion.
//!
//! Converts arbitrary strings into lowercase, hyphen-separated form with
//! accented characters folded to their base letters. Useful for generating
//! URL-friendly slugs and CSS class names.
//!
//! ```
//! use kebabize::kebab_case;
//!
//! assert_eq!(kebab_case("Hello World"), "hello-world");
//! assert_eq!(kebab_case("C'est un éléphant"), "c-est-un-elephant");
//! ```

pub mod case;
pub mod error;

pub use case::{kebab_case, validate_kebab, CaseFn};
pub use error::Error;
