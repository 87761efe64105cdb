use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use egui::{ColorImage, Context, TextureHandle, TextureOptions};

use crate::error::{BoardError, BoardResult};

/// Resolves background names to textures, loading each image at most once.
///
/// A background whose file is missing or unreadable is remembered as failed
/// and the caller falls back to a plain fill.
pub struct BackgroundTextures {
    asset_dir: PathBuf,
    texture_cache: HashMap<String, TextureHandle>,
    failed: HashSet<String>,
}

impl std::fmt::Debug for BackgroundTextures {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackgroundTextures")
            .field("asset_dir", &self.asset_dir)
            .field("cached", &self.texture_cache.len())
            .field("failed", &self.failed)
            .finish()
    }
}

impl BackgroundTextures {
    pub fn new(asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_dir: asset_dir.into(),
            texture_cache: HashMap::new(),
            failed: HashSet::new(),
        }
    }

    /// Path of the image file backing `name`
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.asset_dir.join(format!("{}.png", name))
    }

    /// Gets or loads the texture for `name`. Returns None if it cannot be loaded.
    pub fn texture_for(&mut self, ctx: &Context, name: &str) -> Option<&TextureHandle> {
        if self.failed.contains(name) {
            return None;
        }

        if !self.texture_cache.contains_key(name) {
            let path = self.path_for(name);
            match load_color_image(name, &path) {
                Ok(image) => {
                    log::info!("Loaded background {:?} from {}", name, path.display());
                    let handle = ctx.load_texture(format!("background_{}", name), image, TextureOptions::LINEAR);
                    self.texture_cache.insert(name.to_string(), handle);
                }
                Err(err) => {
                    log::warn!("{}; using a plain fill instead", err);
                    self.failed.insert(name.to_string());
                    return None;
                }
            }
        }

        self.texture_cache.get(name)
    }

    pub fn is_failed(&self, name: &str) -> bool {
        self.failed.contains(name)
    }
}

/// Decode an image file into an egui image
pub fn load_color_image(name: &str, path: &Path) -> BoardResult<ColorImage> {
    let image = image::open(path).map_err(|source| BoardError::Asset {
        name: name.to_string(),
        source,
    })?;
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
