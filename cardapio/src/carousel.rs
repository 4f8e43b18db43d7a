//! Image carousel
//!
//! Cursor over a product's image list. Both directions wrap around, and
//! every move reports the now-current image's display metadata so the
//! product card can show the in-focus variant's name and price instead
//! of the base product's.

use shared::catalog::ProductImage;

pub struct Carousel {
    images: Vec<ProductImage>,
    index: usize,
}

impl Carousel {
    /// A carousel needs at least one image; empty input is a caller bug
    pub fn new(images: Vec<ProductImage>) -> Self {
        debug_assert!(!images.is_empty());
        Self { images, index: 0 }
    }

    pub fn current(&self) -> &ProductImage {
        &self.images[self.index]
    }

    /// Navigation controls are hidden entirely for single-image products
    pub fn has_controls(&self) -> bool {
        self.images.len() > 1
    }

    /// Advance one image, wrapping at the end
    pub fn next(&mut self) -> &ProductImage {
        self.index = (self.index + 1) % self.images.len();
        self.current()
    }

    /// Go back one image, wrapping at the start
    pub fn previous(&mut self) -> &ProductImage {
        self.index = (self.index + self.images.len() - 1) % self.images.len();
        self.current()
    }
}
