/// State management module
///
/// This module handles all gallery state, including:
/// - Shared data structures (data.rs)
/// - Decoding and fetching the photo list (photos.rs)
/// - The model itself (model.rs)
/// - Projecting sliders onto renderer filters (filters.rs)
/// - The message-driven update step (update.rs)

pub mod data;
pub mod filters;
pub mod model;
pub mod photos;
pub mod update;
