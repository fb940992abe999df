/// Autoplay position of the hero carousel.
///
/// The timer lives in the component that owns this value; `tick` is what it calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Slideshow {
    len: usize,
    index: usize,
    paused: bool,
}

impl Slideshow {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            paused: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance one slide unless paused. A slideshow with fewer than two slides never moves.
    pub fn tick(&mut self) {
        if !self.paused && self.len > 1 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_wraps() {
        let mut show = Slideshow::new(3);
        show.tick();
        show.tick();
        assert_eq!(show.index(), 2);
        show.tick();
        assert_eq!(show.index(), 0);
    }

    #[test]
    fn test_pause_holds_position() {
        let mut show = Slideshow::new(3);
        show.go_to(1);
        show.pause();
        show.tick();
        assert_eq!(show.index(), 1);
        show.resume();
        show.tick();
        assert_eq!(show.index(), 2);
    }

    #[test]
    fn test_empty_never_advances() {
        let mut show = Slideshow::new(0);
        show.tick();
        assert_eq!(show.index(), 0);
        assert!(!show.go_to(0));
    }
}
