/// User interface module
///
/// - What to show for a model (layout.rs)
/// - How it is drawn with iced widgets (gallery.rs)
/// - Downloaded and rendered pixels backing the widgets (canvas.rs)

pub mod canvas;
pub mod gallery;
pub mod layout;
