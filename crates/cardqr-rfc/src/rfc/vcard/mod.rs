//! vCard 3.0 contact cards.
//!
//! This module provides the contact model, a serializer that renders it as a
//! vCard 3.0 document, and the query-string codec behind share links.
//!
//! ## Usage
//!
//! ```rust
//! use cardqr_rfc::rfc::vcard::{ContactRecord, filename, serialize};
//!
//! let record = ContactRecord::new("Jane", "Doe")
//!     .unwrap()
//!     .with_email("jane@example.com");
//!
//! let output = serialize(&record);
//! assert!(output.starts_with("BEGIN:VCARD\r\nVERSION:3.0\r\n"));
//! assert!(output.contains("EMAIL;TYPE=INTERNET:jane@example.com"));
//! assert_eq!(filename(&record), "Jane_Doe.vcf");
//! ```
//!
//! ## Output Stability
//!
//! Property lines are emitted in a fixed order. Two serializations of the
//! same record differ only in the `REV` line; inject a
//! [`FixedClock`](crate::clock::FixedClock) through [`serialize_with_clock`]
//! for byte-identical output.
//!
//! ## Submodules
//!
//! - [`core`] - Contact types (`ContactRecord`, `PostalAddress`, `ContactInput`)
//! - [`build`] - Serialization, escaping, and filename derivation
//! - [`query`] - Share-link query parameters

pub mod build;
pub mod core;
pub mod query;


// Re-export commonly used types
pub use build::{
    escape_text, filename, property_names, serialize, serialize_with_clock, unescape_text,
};
pub use core::{ContactInput, ContactRecord, PostalAddress};
pub use query::{share_query, share_url};
