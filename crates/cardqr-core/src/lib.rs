//! Shared configuration, errors, and route constants for the cardqr workspace.

pub mod config;
pub mod constants;
pub mod error;
