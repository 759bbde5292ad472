//! Router fixtures for handler tests.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use config::Config;
use salvo::Service;

use cardqr_core::config::Settings;
use cardqr_rfc::clock::FixedClock;
use cardqr_service::card::CardService;
use cardqr_service::qr::DefaultQrRenderer;

pub const BASE: &str = "http://127.0.0.1:5800";

pub fn settings(toml: &str) -> Settings {
    Settings::load_from(
        Config::builder().add_source(config::File::from_str(toml, config::FileFormat::Toml)),
    )
    .unwrap()
}

pub fn card_service() -> CardService {
    let clock = FixedClock(Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 45).unwrap());
    CardService::new(Arc::new(clock), Arc::new(DefaultQrRenderer::default()))
}

/// Full router on a fixed clock with settings from `toml`.
pub fn service_with(toml: &str) -> Service {
    Service::new(super::router(settings(toml), card_service()))
}

pub fn service() -> Service {
    service_with("[server]\nserve_origin = \"https://cards.example.com\"\n")
}
