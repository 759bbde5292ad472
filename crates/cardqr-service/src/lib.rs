//! Card generation and QR rendering for cardqr.

pub mod card;
pub mod error;
pub mod qr;
