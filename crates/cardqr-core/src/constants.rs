/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const VCARD_ROUTE_COMPONENT: &str = "vcard";
pub const VCARD_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", VCARD_ROUTE_COMPONENT);

pub const QR_ROUTE_COMPONENT: &str = "qr";
pub const QR_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", QR_ROUTE_COMPONENT);

/// Media type of the downloadable contact file.
pub const VCARD_CONTENT_TYPE: &str = "text/vcard; charset=utf-8";

/// Prefix for environment variable overrides, e.g. `CARDQR_SERVER__PORT`.
pub const ENV_PREFIX: &str = "CARDQR";

/// Upper bound on a JSON contact body; an embedded photo is the usual bulk.
pub const MAX_CONTACT_BODY_BYTES: usize = 1_048_576;
