use std::time::Duration;

use store::config::GalleryConfig;

use super::loader::GalleryImage;

/// A single image fetch to start `delay` after activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreloadRequest {
    pub index: usize,
    pub url: String,
    pub delay: Duration,
}

/// How many leading images to preload and how far apart to start them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreloadPlan {
    count: usize,
    stagger: Duration,
}

impl Default for PreloadPlan {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(100))
    }
}

impl PreloadPlan {
    pub fn new(count: usize, stagger: Duration) -> Self {
        Self { count, stagger }
    }

    pub fn from_config(config: &GalleryConfig) -> Self {
        Self::new(config.preload_count, Duration::from_millis(config.preload_stagger_ms))
    }

    /// Requests for the first `count` images, in list order, `stagger` apart.
    pub fn requests(&self, images: &[GalleryImage]) -> Vec<PreloadRequest> {
        images
            .iter()
            .take(self.count)
            .enumerate()
            .map(|(n, image)| PreloadRequest {
                index: image.index,
                url: image.url.clone(),
                delay: self.stagger * n as u32,
            })
            .collect()
    }
}
