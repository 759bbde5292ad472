//! Core contact types.

mod contact;
mod input;

pub use contact::{ContactRecord, PostalAddress};
pub use input::ContactInput;
