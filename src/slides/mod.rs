/// Deck rendering and rasterization.
pub mod deck;
/// Markdown segmentation into per-slide text.
pub mod segment;
