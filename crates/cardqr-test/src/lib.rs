//! cardqr vCard/QR server - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `cardqr_test::` paths.

pub mod component {
    pub use cardqr_core::constants;
    pub use cardqr_service::{card, qr};

    pub mod error {
        pub use cardqr_app::error::*;
        pub use cardqr_core::error::CoreError;
        pub use cardqr_rfc::error::RfcError;
        pub use cardqr_service::error::ServiceError;
    }

    // Re-export config from both core and app
    pub mod config {
        pub use cardqr_app::config::ConfigHandler;
        pub use cardqr_core::config::*;
    }
}

pub mod app {
    pub use cardqr_app::*;

    pub mod api {
        pub use cardqr_app::app::api::*;
    }
}

pub use cardqr_rfc as rfc;
