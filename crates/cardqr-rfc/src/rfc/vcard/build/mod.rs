//! vCard 3.0 serialization.
//!
//! ## Features
//!
//! - Fixed property order, declared once in a rule table
//! - Text escaping per RFC 2426 §4 (backslash, semicolon, comma, newline)
//! - `REV` stamped from an injectable [`Clock`](crate::clock::Clock)
//! - Filesystem-safe download names

mod escape;
mod filename;
mod serializer;

pub use escape::{escape_text, unescape_text};
pub use filename::filename;
pub use serializer::{property_names, serialize, serialize_with_clock};
