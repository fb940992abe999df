/// Keyboard command understood by the full-screen viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerKey {
    Previous,
    Next,
    Close,
}

impl ViewerKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(ViewerKey::Previous),
            "ArrowRight" => Some(ViewerKey::Next),
            "Escape" => Some(ViewerKey::Close),
            _ => None,
        }
    }
}

/// Position of the full-screen viewer over a list of `len` images.
///
/// Navigation wraps around; every command is a no-op while closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewer {
    len: usize,
    current: Option<usize>,
}

impl Viewer {
    pub fn new(len: usize) -> Self {
        Self { len, current: None }
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `false` if `index` is out of range.
    pub fn open_at(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.current = Some(index);
        true
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn next(&mut self) {
        if let Some(i) = self.current {
            self.current = Some((i + 1) % self.len);
        }
    }

    pub fn previous(&mut self) {
        if let Some(i) = self.current {
            self.current = Some((i + self.len - 1) % self.len);
        }
    }

    pub fn handle_key(&mut self, key: ViewerKey) {
        match key {
            ViewerKey::Previous => self.previous(),
            ViewerKey::Next => self.next(),
            ViewerKey::Close => self.close(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut viewer = Viewer::new(4);
        assert!(viewer.open_at(3));
        viewer.next();
        assert_eq!(viewer.current(), Some(0));
        viewer.previous();
        assert_eq!(viewer.current(), Some(3));
    }

    #[test]
    fn test_single_image_stays_put() {
        let mut viewer = Viewer::new(1);
        viewer.open_at(0);
        viewer.next();
        viewer.previous();
        assert_eq!(viewer.current(), Some(0));
    }

    #[test]
    fn test_closed_viewer_ignores_commands() {
        let mut viewer = Viewer::new(3);
        viewer.next();
        viewer.previous();
        viewer.close();
        viewer.handle_key(ViewerKey::Next);
        assert!(!viewer.is_open());

        assert!(!viewer.open_at(3));
        assert!(!viewer.is_open());
    }

    #[test]
    fn test_keys() {
        let mut viewer = Viewer::new(3);
        viewer.open_at(1);
        for name in ["ArrowRight", "ArrowRight"] {
            viewer.handle_key(ViewerKey::from_key_name(name).unwrap());
        }
        assert_eq!(viewer.current(), Some(0));
        viewer.handle_key(ViewerKey::from_key_name("ArrowLeft").unwrap());
        assert_eq!(viewer.current(), Some(2));
        assert_eq!(ViewerKey::from_key_name("Enter"), None);
        viewer.handle_key(ViewerKey::from_key_name("Escape").unwrap());
        assert!(!viewer.is_open());
    }
}
