/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures and the sample catalog (data.rs)
/// - The gallery controller: favorites, selection, preview (gallery.rs)
/// - Drawer routes, header and search state (shell.rs)
/// - Interfaces for persistence, download and wallpaper setting (extension.rs)

pub mod data;
pub mod extension;
pub mod gallery;
pub mod shell;
