use std::fs;
use std::path::{Path, PathBuf};

use create_pwa_core::{SizeSpec, ICONS, LAUNCH_SCREENS};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use log::debug;

use crate::error::{CreateError, Result};

/// The one image operation generators need. Injected so generators can run
/// against a fake in tests.
pub trait Resizer {
    /// Return `source` scaled to exactly `width` x `height`.
    fn resize(&self, source: &DynamicImage, width: u32, height: u32) -> DynamicImage;
}

/// `image` crate backend. Scales to cover the target and crops the overflow
/// around the centre, so launch screens keep the artwork's aspect ratio.
#[derive(Debug, Clone, Copy)]
pub struct ImageResizer {
    pub filter: FilterType,
}

impl Default for ImageResizer {
    fn default() -> Self {
        Self { filter: FilterType::Lanczos3 }
    }
}

impl Resizer for ImageResizer {
    fn resize(&self, source: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        if source.dimensions() == (width, height) {
            return source.clone();
        }
        source.resize_to_fill(width, height, self.filter)
    }
}

pub fn parse_filter(s: &str) -> Option<FilterType> {
    match s.trim().to_ascii_lowercase().as_str() {
        "nearest" => Some(FilterType::Nearest),
        "triangle" => Some(FilterType::Triangle),
        "catmullrom" => Some(FilterType::CatmullRom),
        "gaussian" => Some(FilterType::Gaussian),
        "lanczos3" => Some(FilterType::Lanczos3),
        _ => None,
    }
}

/// One source image, one output directory, one catalog.
#[derive(Debug, Clone)]
pub struct GenerationJob {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub catalog: &'static [SizeSpec],
}

impl GenerationJob {
    /// Decode the source once, then write every catalog entry in order.
    /// Stops at the first failure.
    pub fn run(self, resizer: &dyn Resizer) -> Result<Vec<PathBuf>> {
        let source = image::open(&self.source).map_err(|e| CreateError::Decode {
            path: self.source.clone(),
            source: e,
        })?;
        fs::create_dir_all(&self.destination).map_err(CreateError::io(&self.destination))?;

        let mut written = Vec::with_capacity(self.catalog.len());
        for spec in self.catalog {
            let resized = resizer.resize(&source, spec.width, spec.height);
            let path = self.destination.join(spec.filename);
            resized
                .save(&path)
                .map_err(|e| CreateError::Encode { path: path.clone(), source: e })?;
            debug!("wrote {} ({})", path.display(), spec.describe());
            written.push(path);
        }
        Ok(written)
    }
}

fn generate(
    resizer: &dyn Resizer,
    source: &Path,
    destination: &Path,
    catalog: &'static [SizeSpec],
) -> Result<Vec<PathBuf>> {
    if source.as_os_str().is_empty() {
        return Ok(Vec::new());
    }
    GenerationJob {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        catalog,
    }
    .run(resizer)
}

/// Write the icon catalog into `destination`. An empty `source` writes nothing.
pub fn generate_icons(resizer: &dyn Resizer, source: &Path, destination: &Path) -> Result<Vec<PathBuf>> {
    generate(resizer, source, destination, ICONS)
}

/// Write the launch-screen catalog into `destination`. An empty `source`
/// writes nothing.
pub fn generate_launch_screens(
    resizer: &dyn Resizer,
    source: &Path,
    destination: &Path,
) -> Result<Vec<PathBuf>> {
    generate(resizer, source, destination, LAUNCH_SCREENS)
}
