use super::data::Wallpaper;
use super::extension::Extensions;

/// Number of tiles per grid row
pub const COLUMNS: usize = 2;

/// Everything a user can do on the gallery screen.
///
/// Tiles and the preview modal emit these; `Gallery::apply` is the only
/// place the collection or the selection changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    /// Tile body clicked: open the preview for this id
    TileActivated(String),
    /// Heart clicked: the tile requests the flag flip, it never decides it
    FavoriteToggled(String, bool),
    /// Tile body right-clicked (reserved for a context menu)
    LongPressed(String),
    /// Close button in the preview
    ClosePreview,
    /// Escape key or backdrop click while previewing
    DismissRequested,
    /// Download button in the preview
    Download,
    /// "Set as wallpaper" button in the preview
    SetAsWallpaper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryMode {
    Browsing,
    Previewing,
}

/// User-visible notice produced by a placeholder action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub title: &'static str,
    pub body: String,
}

/// Owns the wallpaper collection and the preview selection
#[derive(Debug)]
pub struct Gallery {
    wallpapers: Vec<Wallpaper>,
    selected_id: Option<String>,
    modal_visible: bool,
    extensions: Extensions,
}

impl Gallery {
    /// Build the gallery from a catalog, applying any stored favorites.
    pub fn new(catalog: Vec<Wallpaper>, extensions: Extensions) -> Self {
        let mut wallpapers = catalog;

        match extensions.favorites.load_favorites() {
            Ok(favorites) => {
                for wallpaper in &mut wallpapers {
                    if favorites.contains(&wallpaper.id) {
                        wallpaper.is_favorite = true;
                    }
                }
            }
            Err(err) => tracing::warn!("⚠️  Could not load favorites: {}", err),
        }

        tracing::info!("🖼️  Gallery ready with {} wallpapers", wallpapers.len());

        Self {
            wallpapers,
            selected_id: None,
            modal_visible: false,
            extensions,
        }
    }

    /// All wallpapers in catalog order
    pub fn wallpapers(&self) -> &[Wallpaper] {
        &self.wallpapers
    }

    /// Wallpapers grouped into grid rows, preserving order
    pub fn rows(&self) -> impl Iterator<Item = &[Wallpaper]> {
        self.wallpapers.chunks(COLUMNS)
    }

    #[cfg(test)]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn mode(&self) -> GalleryMode {
        if self.modal_visible {
            GalleryMode::Previewing
        } else {
            GalleryMode::Browsing
        }
    }

    /// The wallpaper to show in the preview, if the modal is visible and the
    /// selection resolves. Anything else renders no preview at all.
    pub fn preview(&self) -> Option<&Wallpaper> {
        if !self.modal_visible {
            return None;
        }
        let id = self.selected_id.as_deref()?;
        self.find(id)
    }

    fn find(&self, id: &str) -> Option<&Wallpaper> {
        self.wallpapers.iter().find(|w| w.id == id)
    }

    /// Apply one user event. Placeholder actions return the notice to show.
    pub fn apply(&mut self, event: GalleryEvent) -> Option<Acknowledgement> {
        tracing::debug!(?event, "gallery event");

        match event {
            GalleryEvent::TileActivated(id) => {
                if self.find(&id).is_none() {
                    tracing::warn!("⚠️  Ignoring activation of unknown wallpaper {:?}", id);
                    return None;
                }
                self.selected_id = Some(id);
                self.modal_visible = true;
                None
            }
            GalleryEvent::LongPressed(id) => {
                tracing::debug!(id, "context menu not available yet");
                None
            }
            GalleryEvent::FavoriteToggled(id, next) => {
                let Some(wallpaper) = self.wallpapers.iter_mut().find(|w| w.id == id) else {
                    tracing::warn!("⚠️  Ignoring favorite toggle for unknown wallpaper {:?}", id);
                    return None;
                };
                wallpaper.is_favorite = next;

                // The in-memory flag stays as requested even if the store fails
                if let Err(err) = self.extensions.favorites.save_favorite(&id, next) {
                    tracing::warn!("⚠️  Could not save favorite {}: {}", id, err);
                }
                None
            }
            GalleryEvent::ClosePreview | GalleryEvent::DismissRequested => {
                self.modal_visible = false;
                None
            }
            GalleryEvent::Download => {
                let image_url = self.preview()?.image_url.clone();
                let result = self.extensions.downloader.download(&image_url);
                Some(acknowledge("Download", "Downloading image...", result))
            }
            GalleryEvent::SetAsWallpaper => {
                let image_url = self.preview()?.image_url.clone();
                let result = self.extensions.wallpaper_setter.set_as_wallpaper(&image_url);
                Some(acknowledge("Set as wallpaper", "Setting wallpaper...", result))
            }
        }
    }
}

fn acknowledge(
    title: &'static str,
    body: &str,
    result: crate::error::Result<()>,
) -> Acknowledgement {
    let body = match result {
        Ok(()) => body.to_string(),
        Err(err) => {
            tracing::warn!("⚠️  {}", err);
            err.to_string()
        }
    };
    Acknowledgement { title, body }
}
