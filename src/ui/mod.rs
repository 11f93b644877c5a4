/// User interface module
///
/// Pure view functions over the application state:
/// - Theme, colors and the UI font (theme.rs)
/// - Wallpaper tile (tile.rs)
/// - Latest Updates grid and preview modal (gallery.rs)
/// - Header, drawer and placeholder screens (shell.rs)
/// - Acknowledgement toasts (toast.rs)

pub mod gallery;
pub mod shell;
pub mod theme;
pub mod tile;
pub mod toast;
