//! QR rendering parameters.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use cardqr_core::config::QrConfig;
use cardqr_core::error::{CoreError, CoreResult};

use crate::error::{ServiceError, ServiceResult};

/// Error correction level of the QR symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    Low,
    #[default]
    Medium,
    Quartile,
    High,
}

impl ErrorCorrection {
    pub(crate) const fn level(self) -> qrcode::EcLevel {
        match self {
            Self::Low => qrcode::EcLevel::L,
            Self::Medium => qrcode::EcLevel::M,
            Self::Quartile => qrcode::EcLevel::Q,
            Self::High => qrcode::EcLevel::H,
        }
    }
}

impl FromStr for ErrorCorrection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(Self::Low),
            "m" | "medium" => Ok(Self::Medium),
            "q" | "quartile" => Ok(Self::Quartile),
            "h" | "high" => Ok(Self::High),
            other => Err(CoreError::ConfigError(format!(
                "unknown error correction level `{other}`"
            ))),
        }
    }
}

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Self = Self([0x00, 0x00, 0x00]);
    pub const WHITE: Self = Self([0xFF, 0xFF, 0xFF]);
}

/// Parses `#RRGGBB` (the `#` is optional).
impl FromStr for Rgb {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let mut bytes = [0_u8; 3];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| CoreError::ConfigError(format!("invalid color `{s}`: {e}")))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.0))
    }
}

/// Requested output shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QrFormat {
    /// PNG embedded in a `data:` URI.
    #[default]
    DataUrl,
    Png,
    Svg,
}

impl QrFormat {
    /// Maps a `format` query value; unknown or missing values mean [`QrFormat::DataUrl`].
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::to_ascii_lowercase).as_deref() {
            Some("png") => Self::Png,
            Some("svg") => Self::Svg,
            _ => Self::DataUrl,
        }
    }
}

/// Rendering parameters.
///
/// `width` is the target image side in pixels; the module scale is the
/// largest integer that fits the symbol plus `margin` quiet modules on each
/// side, and never less than one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrOptions {
    pub error_correction: ErrorCorrection,
    pub width: u32,
    pub margin: u32,
    pub dark: Rgb,
    pub light: Rgb,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            error_correction: ErrorCorrection::Medium,
            width: 400,
            margin: 2,
            dark: Rgb::BLACK,
            light: Rgb::WHITE,
        }
    }
}

/// Accepted `qr.width`, in pixels.
pub const WIDTH_RANGE: RangeInclusive<u32> = 1..=4096;

/// Accepted `qr.margin`, in modules.
pub const MARGIN_RANGE: RangeInclusive<u32> = 0..=64;

fn bounded(name: &str, value: u32, range: &RangeInclusive<u32>) -> CoreResult<u32> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(CoreError::ConfigError(format!(
            "{name} must be between {} and {}, got {value}",
            range.start(),
            range.end()
        )))
    }
}

impl TryFrom<&QrConfig> for QrOptions {
    type Error = ServiceError;

    fn try_from(config: &QrConfig) -> ServiceResult<Self> {
        Ok(Self {
            error_correction: config.error_correction.parse()?,
            width: bounded("qr.width", config.width, &WIDTH_RANGE)?,
            margin: bounded("qr.margin", config.margin, &MARGIN_RANGE)?,
            dark: config.dark_color.parse()?,
            light: config.light_color.parse()?,
        })
    }
}
