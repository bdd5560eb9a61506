//! Pure helpers used wherever text comparison or ordering is needed.

pub mod ordering;
pub mod text;

pub use ordering::max;
pub use text::{normalize_string, NormalizedString, TextInput};
