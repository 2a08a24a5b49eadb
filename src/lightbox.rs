use crate::{
    error::InteractionError,
    overlay::{OverlayKind, ScrollLock},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageLightbox {
    images: Vec<GalleryImage>,
    current: Option<usize>,
}

impl ImageLightbox {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self {
            images,
            current: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_image(&self) -> Option<&GalleryImage> {
        self.current.and_then(|index| self.images.get(index))
    }

    /// "current / total" label, 1-based.
    pub fn position_label(&self) -> Option<String> {
        self.current
            .map(|index| format!("{} / {}", index + 1, self.images.len()))
    }

    pub fn open(&mut self, index: usize, lock: &mut ScrollLock) -> Result<(), InteractionError> {
        if self.images.is_empty() {
            return Err(InteractionError::EmptyGallery);
        }

        if index >= self.images.len() {
            return Err(InteractionError::IndexOutOfRange {
                index,
                len: self.images.len(),
            });
        }

        lock.acquire(OverlayKind::Lightbox)?;
        self.current = Some(index);
        Ok(())
    }

    pub fn next(&mut self, lock: &mut ScrollLock) -> Result<(), InteractionError> {
        match self.current {
            Some(index) => self.open(next_index(index, self.images.len()), lock),
            None => Ok(()),
        }
    }

    pub fn prev(&mut self, lock: &mut ScrollLock) -> Result<(), InteractionError> {
        match self.current {
            Some(index) => self.open(prev_index(index, self.images.len()), lock),
            None => Ok(()),
        }
    }

    pub fn close(&mut self, lock: &mut ScrollLock) -> bool {
        if self.current.take().is_none() {
            return false;
        }

        lock.release(OverlayKind::Lightbox);
        true
    }
}

pub fn next_index(index: usize, len: usize) -> usize {
    (index + 1) % len
}

pub fn prev_index(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lightbox(count: usize) -> ImageLightbox {
        ImageLightbox::new(
            (0..count)
                .map(|n| GalleryImage {
                    src: format!("/images/adventure-{n}.jpg"),
                    alt: format!("Adventure {n}"),
                })
                .collect(),
        )
    }

    #[test]
    fn open_shows_image_and_position() {
        let mut lock = ScrollLock::default();
        let mut lightbox = lightbox(7);

        lightbox.open(2, &mut lock).expect("index in range");

        assert_eq!(
            lightbox.current_image().map(|image| image.src.as_str()),
            Some("/images/adventure-2.jpg")
        );
        assert_eq!(lightbox.position_label().as_deref(), Some("3 / 7"));
        assert!(lock.is_locked());
    }

    #[test]
    fn navigation_wraps_around() {
        let mut lock = ScrollLock::default();
        let mut lightbox = lightbox(3);

        lightbox.open(0, &mut lock).expect("index in range");
        lightbox.prev(&mut lock).expect("wraps backwards");
        assert_eq!(lightbox.index(), Some(2));

        lightbox.next(&mut lock).expect("wraps forwards");
        assert_eq!(lightbox.index(), Some(0));
    }

    #[test]
    fn next_then_prev_is_identity() {
        for len in 1..=6 {
            for start in 0..len {
                assert_eq!(prev_index(next_index(start, len), len), start);
                assert_eq!(next_index(prev_index(start, len), len), start);
            }
        }
    }

    #[test]
    fn closed_lightbox_ignores_navigation() {
        let mut lock = ScrollLock::default();
        let mut lightbox = lightbox(3);

        lightbox.next(&mut lock).expect("no-op while closed");
        assert!(!lightbox.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn invalid_open_requests_are_rejected() {
        let mut lock = ScrollLock::default();

        assert_eq!(
            lightbox(0).open(0, &mut lock),
            Err(InteractionError::EmptyGallery)
        );
        assert_eq!(
            lightbox(2).open(2, &mut lock),
            Err(InteractionError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert!(!lock.is_locked());
    }

    #[test]
    fn close_releases_lock_and_reopen_resets_index() {
        let mut lock = ScrollLock::default();
        let mut lightbox = lightbox(4);

        lightbox.open(3, &mut lock).expect("index in range");
        assert!(lightbox.close(&mut lock));
        assert!(!lock.is_locked());
        assert_eq!(lightbox.position_label(), None);

        lightbox.open(1, &mut lock).expect("index in range");
        assert_eq!(lightbox.index(), Some(1));
    }
}
