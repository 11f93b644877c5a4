//! Integration points for behavior that has no real backing yet.
//!
//! The gallery talks to these traits instead of doing persistence, file
//! transfer or OS wallpaper changes itself. The shipped implementations only
//! acknowledge the request.

use std::collections::HashSet;

use crate::error::Result;

/// Stores favorite flags across restarts
pub trait FavoriteStore {
    /// Ids that should start out as favorites
    fn load_favorites(&self) -> Result<HashSet<String>>;
    fn save_favorite(&mut self, id: &str, favorite: bool) -> Result<()>;
}

/// Saves a wallpaper image to local storage
pub trait Downloader {
    fn download(&mut self, image_url: &str) -> Result<()>;
}

/// Applies an image as the system wallpaper
pub trait WallpaperSetter {
    fn set_as_wallpaper(&mut self, image_url: &str) -> Result<()>;
}

/// Favorites that only live as long as the process
#[derive(Debug, Default)]
pub struct EphemeralFavorites;

impl FavoriteStore for EphemeralFavorites {
    fn load_favorites(&self) -> Result<HashSet<String>> {
        Ok(HashSet::new())
    }

    fn save_favorite(&mut self, id: &str, favorite: bool) -> Result<()> {
        tracing::debug!(id, favorite, "favorite not persisted (no store configured)");
        Ok(())
    }
}

/// Accepts download and set-wallpaper requests without doing anything
#[derive(Debug, Default)]
pub struct AcknowledgeOnly;

impl Downloader for AcknowledgeOnly {
    fn download(&mut self, image_url: &str) -> Result<()> {
        tracing::info!(image_url, "download requested (placeholder)");
        Ok(())
    }
}

impl WallpaperSetter for AcknowledgeOnly {
    fn set_as_wallpaper(&mut self, image_url: &str) -> Result<()> {
        tracing::info!(image_url, "set as wallpaper requested (placeholder)");
        Ok(())
    }
}

/// The collaborators a gallery is wired to
pub struct Extensions {
    pub favorites: Box<dyn FavoriteStore>,
    pub downloader: Box<dyn Downloader>,
    pub wallpaper_setter: Box<dyn WallpaperSetter>,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            favorites: Box::new(EphemeralFavorites),
            downloader: Box::new(AcknowledgeOnly),
            wallpaper_setter: Box::new(AcknowledgeOnly),
        }
    }
}

impl std::fmt::Debug for Extensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extensions").finish_non_exhaustive()
    }
}
