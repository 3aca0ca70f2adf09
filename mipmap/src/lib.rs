use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::path::Path;

mod density;
mod generate;

pub use density::{IconSpec, DEFAULT_ICON, DEFAULT_RES_DIR, IC_LAUNCHER, IC_LAUNCHER_PNG};
pub use generate::{mipmap_ic_launcher, GeneratedIcon, IconGenerator, MissingSource};

pub struct Scaler {
    img: DynamicImage,
}

impl Scaler {
    /// Decodes the image at `path`. The format is detected from the file
    /// contents rather than its extension.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = ImageReader::open(path)
            .with_context(|| format!("failed to open `{}`", path.display()))?
            .with_guessed_format()?
            .decode()
            .with_context(|| format!("failed to decode `{}`", path.display()))?;
        let (width, height) = img.dimensions();
        if width != height {
            tracing::warn!("{} is {}x{}, icons will be stretched", path.display(), width, height);
        }
        Ok(Self { img })
    }

    fn dimensions(&self) -> (u32, u32) {
        self.img.dimensions()
    }

    /// Whether producing a `size x size` icon enlarges the source.
    pub fn upscales(&self, size: u32) -> bool {
        let (width, height) = self.dimensions();
        width.min(height) < size
    }

    /// Drops color or alpha channels that carry no information. The bit
    /// depth is kept, float images are left alone.
    pub fn optimize(&mut self) {
        let wide = match self.img.color() {
            ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => false,
            ColorType::L16 | ColorType::La16 | ColorType::Rgb16 | ColorType::Rgba16 => true,
            color => {
                tracing::info!("not optimizing {:?} icon", color);
                return;
            }
        };
        let rgba = self.img.to_rgba16();
        let is_grayscale = rgba.pixels().all(|p| p[0] == p[1] && p[1] == p[2]);
        let is_opaque = rgba.pixels().all(|p| p[3] == u16::MAX);
        self.img = match (is_grayscale, is_opaque, wide) {
            (true, true, false) => DynamicImage::ImageLuma8(self.img.to_luma8()),
            (true, false, false) => DynamicImage::ImageLumaA8(self.img.to_luma_alpha8()),
            (false, true, false) => DynamicImage::ImageRgb8(self.img.to_rgb8()),
            (true, true, true) => DynamicImage::ImageLuma16(self.img.to_luma16()),
            (true, false, true) => DynamicImage::ImageLumaA16(self.img.to_luma_alpha16()),
            (false, true, true) => DynamicImage::ImageRgb16(self.img.to_rgb16()),
            (false, false, _) => return,
        };
        tracing::info!("optimized icon color type to {:?}", self.img.color());
    }

    pub fn resize(&self, size: u32) -> DynamicImage {
        self.img.resize_exact(size, size, FilterType::Lanczos3)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P, size: u32) -> Result<()> {
        let path = path.as_ref();
        self.resize(size)
            .save_with_format(path, ImageFormat::Png)
            .with_context(|| format!("failed to write `{}`", path.display()))?;
        Ok(())
    }
}
