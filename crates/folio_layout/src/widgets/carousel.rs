//! Image carousel for the project details modal

/// Cycles through a project's images with wraparound
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carousel {
    images: Vec<String>,
    index: usize,
}

impl Carousel {
    pub fn new(images: Vec<String>) -> Self {
        Self { images, index: 0 }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Image currently on screen
    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    /// Arrows and indicator dots only appear with more than one image
    pub fn has_navigation(&self) -> bool {
        self.images.len() > 1
    }

    pub fn next(&mut self) {
        if self.has_navigation() {
            self.index = (self.index + 1) % self.images.len();
        }
    }

    pub fn prev(&mut self) {
        if self.has_navigation() {
            let len = self.images.len();
            self.index = (self.index + len - 1) % len;
        }
    }

    /// Jump to an indicator dot. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.images.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Replace the images and return to the first one
    pub fn reset(&mut self, images: Vec<String>) {
        self.images = images;
        self.index = 0;
    }
}
