//! vCard 3.0 contact model and serializer for cardqr.

pub mod clock;
pub mod error;
pub mod rfc;
