//! # Gallery loading
//!
//! Turns a loosely typed image column into a displayable, lazily loaded grid:
//!
//! - [`sanitize`]: the pure clean-up pipeline (strip quotes, trim, keep
//!   `http…` and `/…` sources, preserve order).
//! - [`GalleryLoader`]: per-gallery state: one-shot activation, per-image
//!   load state, aggregate loading flag, viewer position.
//! - [`PreloadPlan`]: which images to fetch ahead of display, and when.
//! - [`Viewer`]: the full-screen viewer's wrap-around navigation.

mod loader;
mod preload;
pub mod sanitize;
mod viewer;

pub use loader::{GalleryImage, GalleryLoader, LoadState};
pub use preload::{PreloadPlan, PreloadRequest};
pub use viewer::{Viewer, ViewerKey};
