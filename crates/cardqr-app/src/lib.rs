//! HTTP layer for cardqr.

pub mod app;
pub mod card_handler;
pub mod config;
pub mod error;
