/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the gallery controller and the UI layer.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Fixed sample set shown on the Latest Updates screen
const SAMPLE_CATALOG: &str = include_str!("catalog.json");

/// Represents a single wallpaper in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Wallpaper {
    /// Stable identity within the collection (e.g., "3")
    pub id: String,
    /// Remote image reference, handed as-is to the image loader
    pub image_url: String,
    /// Optional caption shown over the thumbnail
    #[serde(default)]
    pub title: Option<String>,
    /// The only field mutated at runtime
    #[serde(default)]
    pub is_favorite: bool,
}

/// Parse the embedded sample catalog
pub fn sample_catalog() -> Result<Vec<Wallpaper>> {
    parse_catalog(SAMPLE_CATALOG)
}

fn parse_catalog(json: &str) -> Result<Vec<Wallpaper>> {
    let wallpapers: Vec<Wallpaper> =
        serde_json::from_str(json).map_err(|e| Error::Catalog(e.to_string()))?;

    // Duplicate ids would make selection ambiguous
    for (index, wallpaper) in wallpapers.iter().enumerate() {
        if wallpapers[..index].iter().any(|w| w.id == wallpaper.id) {
            return Err(Error::Catalog(format!("duplicate id {:?}", wallpaper.id)));
        }
    }

    Ok(wallpapers)
}
