//! Raster and vector output for QR symbols.

use std::fmt::Write as _;
use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, RgbImage};
use qrcode::QrCode;

use super::{QrFormat, QrOptions, QrRenderer, RenderedQr};
use crate::error::{ServiceError, ServiceResult};

/// Renders with the `qrcode` encoder and draws the module grid itself.
#[derive(Debug, Clone, Default)]
pub struct DefaultQrRenderer {
    options: QrOptions,
}

impl DefaultQrRenderer {
    #[must_use]
    pub const fn new(options: QrOptions) -> Self {
        Self { options }
    }

    fn png(&self, grid: &ModuleGrid) -> ServiceResult<Vec<u8>> {
        let layout = Layout::new(grid, &self.options);
        let side = layout.side();
        let dark = image::Rgb(self.options.dark.0);
        let light = image::Rgb(self.options.light.0);

        let image = RgbImage::from_fn(side, side, |x, y| {
            if layout.is_dark_pixel(grid, x, y) {
                dark
            } else {
                light
            }
        });

        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| ServiceError::Rendering(e.to_string()))?;
        Ok(bytes)
    }

    fn svg(&self, grid: &ModuleGrid) -> String {
        let layout = Layout::new(grid, &self.options);
        let side = layout.side();
        let modules = layout.total_modules;

        let mut svg = String::new();
        write!(
            svg,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" \
             width=\"{side}\" height=\"{side}\" viewBox=\"0 0 {modules} {modules}\" \
             shape-rendering=\"crispEdges\">\
             <rect width=\"{modules}\" height=\"{modules}\" fill=\"{}\"/>\
             <path fill=\"{}\" d=\"",
            self.options.light, self.options.dark
        )
        .ok();

        for (x, y) in grid.dark_modules() {
            write!(
                svg,
                "M{} {}h1v1h-1z",
                x + layout.margin,
                y + layout.margin
            )
            .ok();
        }

        svg.push_str("\"/></svg>");
        svg
    }
}

impl QrRenderer for DefaultQrRenderer {
    #[tracing::instrument(skip(self, payload), fields(payload_bytes = payload.len()))]
    fn render(&self, payload: &str, format: QrFormat) -> ServiceResult<RenderedQr> {
        let grid = ModuleGrid::encode(payload, &self.options)?;
        tracing::debug!(modules = grid.width, "Encoded QR symbol");

        match format {
            QrFormat::Png => Ok(RenderedQr::Png(self.png(&grid)?)),
            QrFormat::Svg => Ok(RenderedQr::Svg(self.svg(&grid))),
            QrFormat::DataUrl => {
                let png = self.png(&grid)?;
                Ok(RenderedQr::DataUrl(format!(
                    "data:image/png;base64,{}",
                    STANDARD.encode(png)
                )))
            }
        }
    }
}

/// Dark/light modules of one symbol, row-major, without quiet zone.
struct ModuleGrid {
    width: u32,
    dark: Vec<bool>,
}

impl ModuleGrid {
    fn encode(payload: &str, options: &QrOptions) -> ServiceResult<Self> {
        let code = QrCode::with_error_correction_level(
            payload.as_bytes(),
            options.error_correction.level(),
        )
        .map_err(|e| ServiceError::Rendering(e.to_string()))?;

        let width = u32::try_from(code.width())
            .map_err(|e| ServiceError::Rendering(e.to_string()))?;
        let dark = code
            .to_colors()
            .into_iter()
            .map(|color| color == qrcode::Color::Dark)
            .collect();

        Ok(Self { width, dark })
    }

    fn is_dark(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.width {
            return false;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        self.dark.get(index).copied().unwrap_or(false)
    }

    fn dark_modules(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.width)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.is_dark(x, y))
    }
}

/// Placement of the grid inside the output image.
struct Layout {
    margin: u32,
    total_modules: u32,
    scale: u32,
}

impl Layout {
    fn new(grid: &ModuleGrid, options: &QrOptions) -> Self {
        let total_modules = grid.width.saturating_add(options.margin.saturating_mul(2));
        let scale = (options.width / total_modules.max(1)).max(1);
        Self {
            margin: options.margin,
            total_modules,
            scale,
        }
    }

    fn side(&self) -> u32 {
        self.total_modules.saturating_mul(self.scale)
    }

    fn is_dark_pixel(&self, grid: &ModuleGrid, x: u32, y: u32) -> bool {
        let (mx, my) = (x / self.scale, y / self.scale);
        match (mx.checked_sub(self.margin), my.checked_sub(self.margin)) {
            (Some(gx), Some(gy)) => grid.is_dark(gx, gy),
            _ => false,
        }
    }
}
