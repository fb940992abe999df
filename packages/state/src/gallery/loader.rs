use serde_json::Value;

use super::preload::{PreloadPlan, PreloadRequest};
use super::sanitize::{validate_sources, validate_values};
use super::viewer::Viewer;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded,
    Errored,
}

/// One validated image of a gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    /// Position in the validated list.
    pub index: usize,
    pub url: String,
    pub state: LoadState,
    /// Whether the tile may request its source yet.
    pub requested: bool,
}

/// State of one gallery instance.
///
/// Images resolve independently and in any order; each tile depends only on
/// its own [`LoadState`].
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryLoader {
    images: Vec<GalleryImage>,
    visible: bool,
    plan: PreloadPlan,
    viewer: Viewer,
}

impl GalleryLoader {
    /// Build from already-sanitized URLs. Inputs are re-validated.
    pub fn new<I, S>(sources: I, plan: PreloadPlan) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_urls(validate_sources(sources), plan)
    }

    /// Build from a raw JSON image column.
    pub fn from_values(raw: &[Value], plan: PreloadPlan) -> Self {
        Self::from_urls(validate_values(raw), plan)
    }

    fn from_urls(urls: Vec<String>, plan: PreloadPlan) -> Self {
        let images: Vec<GalleryImage> = urls
            .into_iter()
            .enumerate()
            .map(|(index, url)| GalleryImage {
                index,
                url,
                state: LoadState::Pending,
                requested: false,
            })
            .collect();
        let viewer = Viewer::new(images.len());
        Self {
            images,
            visible: false,
            plan,
            viewer,
        }
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    pub fn image(&self, index: usize) -> Option<&GalleryImage> {
        self.images.get(index)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// No displayable images: render the empty state instead of a grid.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Mark the gallery as near the viewport. The first call returns the
    /// preload schedule; later calls return nothing.
    ///
    /// No tile is released here. Preloaded tiles are released one by one
    /// through [`request`](Self::request) as their delay fires, the rest
    /// through [`release_remaining`](Self::release_remaining) once the
    /// schedule is done.
    pub fn activate(&mut self) -> Vec<PreloadRequest> {
        if self.visible {
            return Vec::new();
        }
        self.visible = true;
        let requests = self.plan.requests(&self.images);
        if requests.is_empty() {
            self.release_remaining();
        }
        tracing::debug!(images = self.images.len(), preloads = requests.len(), "gallery activated");
        requests
    }

    /// Release one tile. Returns `false` if it was already released or
    /// does not exist.
    pub fn request(&mut self, index: usize) -> bool {
        match self.images.get_mut(index) {
            Some(image) if !image.requested => {
                image.requested = true;
                true
            }
            _ => false,
        }
    }

    /// Release every tile not yet requested.
    pub fn release_remaining(&mut self) {
        for image in &mut self.images {
            image.requested = true;
        }
    }

    /// The tile should render its `<img>`: the gallery is active and the
    /// image has been released.
    pub fn is_displayable(&self, index: usize) -> bool {
        self.visible && self.image(index).is_some_and(|i| i.requested)
    }

    fn resolve(&mut self, index: usize, to: LoadState) -> bool {
        match self.images.get_mut(index) {
            Some(image) if image.state == LoadState::Pending => {
                image.state = to;
                true
            }
            _ => false,
        }
    }

    /// `pending → loaded`. Returns `false` if the image had already resolved.
    pub fn mark_loaded(&mut self, index: usize) -> bool {
        self.resolve(index, LoadState::Loaded)
    }

    /// `pending → errored`. The image keeps its placeholder for good.
    pub fn mark_errored(&mut self, index: usize) -> bool {
        let changed = self.resolve(index, LoadState::Errored);
        if changed {
            tracing::warn!(url = %self.images[index].url, "gallery image failed to load");
        }
        changed
    }

    fn count(&self, state: LoadState) -> usize {
        self.images.iter().filter(|i| i.state == state).count()
    }

    pub fn loaded_count(&self) -> usize {
        self.count(LoadState::Loaded)
    }

    pub fn errored_count(&self) -> usize {
        self.count(LoadState::Errored)
    }

    /// Aggregate indicator: shown until every image has loaded or errored.
    pub fn is_loading(&self) -> bool {
        self.loaded_count() + self.errored_count() < self.images.len()
    }

    pub fn shows_placeholder(&self, index: usize) -> bool {
        self.image(index)
            .is_some_and(|i| i.state == LoadState::Errored)
    }

    pub fn open_viewer_at(&mut self, index: usize) -> bool {
        self.viewer.open_at(index)
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut Viewer {
        &mut self.viewer
    }

    /// Image under the open viewer.
    pub fn viewed_image(&self) -> Option<&GalleryImage> {
        self.viewer.current().and_then(|i| self.image(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use serde_json::json;

    fn five() -> GalleryLoader {
        GalleryLoader::new(
            ["/1.jpg", "/2.jpg", "/3.jpg", "/4.jpg", "/5.jpg"],
            PreloadPlan::default(),
        )
    }

    #[test]
    fn test_partial_failures_clear_indicator() {
        let mut gallery = five();
        gallery.activate();
        assert!(gallery.is_loading());

        // Completion order is arbitrary.
        for index in [4, 1, 0, 3] {
            if index == 1 || index == 3 {
                gallery.mark_errored(index);
            } else {
                gallery.mark_loaded(index);
            }
            assert!(gallery.is_loading());
        }
        gallery.mark_loaded(2);
        assert!(!gallery.is_loading());

        assert!(gallery.shows_placeholder(1));
        assert!(gallery.shows_placeholder(3));
        assert!(!gallery.shows_placeholder(0));

        // Errored images are never retried or flipped.
        assert!(!gallery.mark_loaded(1));
        assert!(gallery.shows_placeholder(1));
        assert_eq!(gallery.loaded_count(), 3);
        assert_eq!(gallery.errored_count(), 2);
    }

    #[test]
    fn test_all_errors_still_clear_indicator() {
        let mut gallery = GalleryLoader::new(["/a.jpg", "/b.jpg"], PreloadPlan::default());
        gallery.mark_errored(0);
        gallery.mark_errored(1);
        assert!(!gallery.is_loading());
    }

    #[test]
    fn test_empty_gallery() {
        let gallery = GalleryLoader::from_values(&[json!(""), json!("nope"), json!(7)], PreloadPlan::default());
        assert!(gallery.is_empty());
        assert!(!gallery.is_loading());
    }

    #[test]
    fn test_activation_is_one_shot() {
        let mut gallery = five();
        assert!(!gallery.is_visible());

        let requests = gallery.activate();
        assert!(gallery.is_visible());
        let plan: Vec<(usize, &str, Duration)> = requests
            .iter()
            .map(|r| (r.index, r.url.as_str(), r.delay))
            .collect();
        assert_eq!(
            plan,
            vec![
                (0, "/1.jpg", Duration::ZERO),
                (1, "/2.jpg", Duration::from_millis(100)),
                (2, "/3.jpg", Duration::from_millis(200)),
            ]
        );

        assert!(gallery.activate().is_empty());
        assert!(gallery.is_visible());
    }

    #[test]
    fn test_tiles_released_on_schedule() {
        let mut gallery = five();
        assert!(!gallery.is_displayable(0));

        let requests = gallery.activate();
        assert_eq!(requests.len(), 3);
        // Nothing renders until its preload fires.
        assert!((0..5).all(|i| !gallery.is_displayable(i)));

        assert!(gallery.request(0));
        assert!(!gallery.request(0));
        assert!(gallery.is_displayable(0));
        assert!(!gallery.is_displayable(1));

        gallery.request(1);
        gallery.request(2);
        assert!(!gallery.is_displayable(3));
        assert!(!gallery.is_displayable(4));

        gallery.release_remaining();
        assert!((0..5).all(|i| gallery.is_displayable(i)));
    }

    #[test]
    fn test_no_preloads_releases_everything() {
        let mut gallery = GalleryLoader::new(
            ["/a.jpg", "/b.jpg"],
            PreloadPlan::new(0, Duration::from_millis(100)),
        );
        assert!(gallery.activate().is_empty());
        assert!(gallery.is_displayable(0));
        assert!(gallery.is_displayable(1));
    }

    #[test]
    fn test_short_gallery_preloads_what_it_has() {
        let mut gallery = GalleryLoader::new(["http://x/only.jpg"], PreloadPlan::default());
        assert_eq!(gallery.activate().len(), 1);
    }

    #[test]
    fn test_viewer_opens_at_tile() {
        let mut gallery = five();
        assert!(gallery.open_viewer_at(4));
        gallery.viewer_mut().next();
        assert_eq!(gallery.viewed_image().map(|i| i.url.as_str()), Some("/1.jpg"));
        gallery.viewer_mut().previous();
        assert_eq!(gallery.viewer().current(), Some(4));
        assert!(!gallery.open_viewer_at(5));
    }

    #[test]
    fn test_out_of_range_resolution_ignored() {
        let mut gallery = five();
        assert!(!gallery.mark_loaded(9));
        assert!(!gallery.mark_errored(9));
        assert!(!gallery.shows_placeholder(9));
    }
}
