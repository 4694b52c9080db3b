//! World-map heatmap: a raster decoded once at startup and queried by
//! normalized texture coordinate.
//!
//! The decoded image is drawn at the origin of a fixed-size canvas (pixels the
//! image does not cover stay fully transparent). Lookups scale the clamped
//! coordinate by a separate lookup size which is smaller than the canvas.

use crate::constants::*;
use crate::error::GlobeError;

/// Which part of a pixel is reported as intensity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntensityChannel {
    #[default]
    Alpha,
    /// Sum of the red, green and blue channels (0..=765)
    RgbSum,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapConfig {
    /// Image URL (web) or path (native)
    pub source: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub lookup_width: f64,
    pub lookup_height: f64,
    pub channel: IntensityChannel,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            source: HEATMAP_SOURCE.to_string(),
            canvas_width: HEATMAP_CANVAS_WIDTH,
            canvas_height: HEATMAP_CANVAS_HEIGHT,
            lookup_width: HEATMAP_LOOKUP_WIDTH,
            lookup_height: HEATMAP_LOOKUP_HEIGHT,
            channel: IntensityChannel::Alpha,
        }
    }
}

impl HeatmapConfig {
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    pub fn with_lookup(mut self, width: f64, height: f64) -> Self {
        self.lookup_width = width;
        self.lookup_height = height;
        self
    }

    pub fn with_channel(mut self, channel: IntensityChannel) -> Self {
        self.channel = channel;
        self
    }
}

/// Decoded RGBA8 image, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RasterImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, GlobeError> {
        if width == 0 || height == 0 {
            return Err(GlobeError::EmptyImage);
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(GlobeError::ImageSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image filled with a single color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: rgba.repeat(count),
        }
    }
}

/// Immutable intensity field built from a [`RasterImage`].
#[derive(Clone, Debug)]
pub struct Heatmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    lookup_width: f64,
    lookup_height: f64,
    channel: IntensityChannel,
}

impl Heatmap {
    pub fn from_image(config: &HeatmapConfig, image: &RasterImage) -> Result<Self, GlobeError> {
        let (cw, ch) = (config.canvas_width, config.canvas_height);
        if cw == 0 || ch == 0 {
            return Err(GlobeError::EmptyImage);
        }
        let expected = image.width as usize * image.height as usize * 4;
        if image.pixels.len() != expected {
            return Err(GlobeError::ImageSize {
                expected,
                actual: image.pixels.len(),
            });
        }
        let mut pixels = vec![0u8; cw as usize * ch as usize * 4];
        let copy_w = image.width.min(cw) as usize;
        let rows = image.height.min(ch) as usize;
        for row in 0..rows {
            let src = row * image.width as usize * 4;
            let dst = row * cw as usize * 4;
            pixels[dst..dst + copy_w * 4].copy_from_slice(&image.pixels[src..src + copy_w * 4]);
        }
        Ok(Self {
            width: cw,
            height: ch,
            pixels,
            lookup_width: config.lookup_width,
            lookup_height: config.lookup_height,
            channel: config.channel,
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Intensity at normalized `(x, y)`; each coordinate is clamped to [0, 1].
    pub fn get_color(&self, x: f64, y: f64) -> u32 {
        let px = (clamp01(x) * self.lookup_width) as u32;
        let py = (clamp01(y) * self.lookup_height) as u32;
        self.pixel_intensity(px, py)
    }

    fn pixel_intensity(&self, px: u32, py: u32) -> u32 {
        if px >= self.width || py >= self.height {
            return 0;
        }
        let i = (py as usize * self.width as usize + px as usize) * 4;
        let p = &self.pixels[i..i + 4];
        match self.channel {
            IntensityChannel::Alpha => p[3] as u32,
            IntensityChannel::RgbSum => p[0] as u32 + p[1] as u32 + p[2] as u32,
        }
    }
}

#[inline]
fn clamp01(v: f64) -> f64 {
    // NaN maps to 0 like the canvas lookup it replaces
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeatmapState {
    Pending,
    Ready,
    Failed,
}

#[derive(Debug)]
enum LoadStatus {
    Pending,
    Ready(Heatmap),
    Failed(GlobeError),
}

/// Load-state wrapper around [`Heatmap`]. Sampling returns 0 until a load
/// has completed successfully, and keeps returning 0 after a failed one.
#[derive(Debug)]
pub struct HeatmapSampler {
    config: HeatmapConfig,
    status: LoadStatus,
}

impl HeatmapSampler {
    pub fn new(config: HeatmapConfig) -> Self {
        Self {
            config,
            status: LoadStatus::Pending,
        }
    }

    pub fn config(&self) -> &HeatmapConfig {
        &self.config
    }

    /// Record the outcome of the asynchronous image load.
    pub fn finish_load(&mut self, result: Result<RasterImage, GlobeError>) -> HeatmapState {
        let built = result.and_then(|image| Heatmap::from_image(&self.config, &image));
        self.status = match built {
            Ok(heatmap) => {
                let (w, h) = heatmap.dimensions();
                log::info!("[heatmap] loaded {} into {}x{}", self.config.source, w, h);
                LoadStatus::Ready(heatmap)
            }
            Err(e) => {
                log::warn!("[heatmap] {} unavailable, globe will be empty: {}", self.config.source, e);
                LoadStatus::Failed(e)
            }
        };
        self.state()
    }

    pub fn state(&self) -> HeatmapState {
        match self.status {
            LoadStatus::Pending => HeatmapState::Pending,
            LoadStatus::Ready(_) => HeatmapState::Ready,
            LoadStatus::Failed(_) => HeatmapState::Failed,
        }
    }

    pub fn error(&self) -> Option<&GlobeError> {
        match &self.status {
            LoadStatus::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn get_color(&self, x: f64, y: f64) -> u32 {
        match &self.status {
            LoadStatus::Ready(heatmap) => heatmap.get_color(x, y),
            _ => 0,
        }
    }
}
