//! Asset locations and loading: tone clips and the battery decal.
//!
//! Tones are looked up relative to the working directory's parent
//! (`../res/`), the decal under the user's home directory (`~/res/`).
//! Loading never aborts the simulator; callers log the [`AssetError`] and
//! carry on without the asset.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cluster_common::Tone;
use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use thiserror::Error;

const RES_DIR: &str = "res";
const BLINKER_CLIP: &str = "car-blinker.wav";
const HAZARD_CLIP: &str = "squeaky.wav";
const DECAL_IMAGE: &str = "battery_0_bar.png";

/// Decal pixels with alpha below this are treated as transparent.
const ALPHA_CUTOFF: u8 = 128;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("home directory could not be determined")]
    NoHome,

    #[error("failed to decode {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("no audio output device: {0}")]
    Stream(#[from] rodio::StreamError),

    #[error("failed to start playback: {0}")]
    Play(#[from] rodio::PlayError),

    #[error("failed to decode {tone} tone: {source}")]
    Decode {
        tone: &'static str,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}

// =============================================================================
// Paths
// =============================================================================

/// Where each asset is expected on disk.
#[derive(Clone, Debug)]
pub struct AssetPaths {
    pub blinker: PathBuf,
    pub hazard: PathBuf,
    /// `None` when there is no home directory.
    pub decal: Option<PathBuf>,
}

impl AssetPaths {
    /// Resolve asset paths against the current working directory and home.
    pub fn resolve() -> Result<Self, AssetError> {
        let cwd = std::env::current_dir().map_err(|source| AssetError::Io {
            path: PathBuf::from("."),
            source,
        })?;
        let home = directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        Ok(Self::rooted_at(&cwd, home.as_deref()))
    }

    pub fn rooted_at(
        cwd: &Path,
        home: Option<&Path>,
    ) -> Self {
        let sounds = cwd.join("..").join(RES_DIR);
        Self {
            blinker: sounds.join(BLINKER_CLIP),
            hazard: sounds.join(HAZARD_CLIP),
            decal: home.map(|h| h.join(RES_DIR).join(DECAL_IMAGE)),
        }
    }

    pub fn tone(
        &self,
        tone: Tone,
    ) -> &Path {
        match tone {
            Tone::Blinker => &self.blinker,
            Tone::Hazard => &self.hazard,
        }
    }
}

// =============================================================================
// Tone Clips
// =============================================================================

/// Raw bytes of a tone file, shared with every decoder that plays it.
pub fn read_clip(path: &Path) -> Result<Arc<[u8]>, AssetError> {
    std::fs::read(path).map(Arc::from).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// =============================================================================
// Decal
// =============================================================================

/// A static image converted once to opaque Rgb565 pixels.
#[derive(Clone, Debug, Default)]
pub struct Decal {
    pixels: Vec<Pixel<Rgb565>>,
    size: Size,
}

impl Decal {
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let image = image::open(path).map_err(|source| AssetError::Image {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_rgba(&image.to_rgba8()))
    }

    pub fn from_rgba(image: &image::RgbaImage) -> Self {
        let pixels = image
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0[3] >= ALPHA_CUTOFF)
            .map(|(x, y, p)| {
                let [r, g, b, _] = p.0;
                Pixel(Point::new(x as i32, y as i32), Rgb888::new(r, g, b).into())
            })
            .collect();
        Self {
            pixels,
            size: Size::new(image.width(), image.height()),
        }
    }

    pub fn size(&self) -> Size { self.size }

    pub fn opaque_pixels(&self) -> usize { self.pixels.len() }
}

impl Drawable for Decal {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(
        &self,
        target: &mut D,
    ) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        target.draw_iter(self.pixels.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    #[test]
    fn test_paths_layout() {
        let paths = AssetPaths::rooted_at(Path::new("/work/app"), Some(Path::new("/home/me")));
        assert_eq!(paths.tone(Tone::Blinker), Path::new("/work/app/../res/car-blinker.wav"));
        assert_eq!(paths.tone(Tone::Hazard), Path::new("/work/app/../res/squeaky.wav"));
        assert_eq!(paths.decal.as_deref(), Some(Path::new("/home/me/res/battery_0_bar.png")));
    }

    #[test]
    fn test_paths_without_home() {
        let paths = AssetPaths::rooted_at(Path::new("/work"), None);
        assert!(paths.decal.is_none());
    }

    #[test]
    fn test_missing_clip_is_io_error() {
        let err = read_clip(Path::new("/definitely/not/here.wav")).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }

    #[test]
    fn test_decal_skips_transparent_pixels() {
        let mut image = RgbaImage::new(4, 2);
        image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        image.put_pixel(3, 1, Rgba([255, 255, 255, 200]));
        image.put_pixel(1, 1, Rgba([0, 255, 0, 10]));

        let decal = Decal::from_rgba(&image);
        assert_eq!(decal.size(), Size::new(4, 2));
        assert_eq!(decal.opaque_pixels(), 2);
        assert_eq!(decal.pixels[0], Pixel(Point::new(0, 0), Rgb565::RED));
        assert_eq!(decal.pixels[1], Pixel(Point::new(3, 1), Rgb565::WHITE));
    }
}
