use crate::{
    error::InteractionError,
    lightbox::{GalleryImage, ImageLightbox},
    modal::{ProjectModal, SkillModal},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayKind {
    ProjectModal,
    SkillModal,
    Lightbox,
}

impl OverlayKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProjectModal => "project_modal",
            Self::SkillModal => "skill_modal",
            Self::Lightbox => "lightbox",
        }
    }

    pub fn element_id(self) -> &'static str {
        match self {
            Self::ProjectModal => "projectModal",
            Self::SkillModal => "skillModal",
            Self::Lightbox => "imageLightbox",
        }
    }
}

/// Document-wide scroll lock with a single owning overlay.
///
/// Only the holder may release it, and a different overlay cannot acquire it
/// until then. Re-acquiring by the current holder is a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollLock {
    holder: Option<OverlayKind>,
}

impl ScrollLock {
    pub fn acquire(&mut self, owner: OverlayKind) -> Result<(), InteractionError> {
        match self.holder {
            Some(holder) if holder != owner => Err(InteractionError::OverlayBusy {
                requested: owner,
                holder,
            }),
            _ => {
                self.holder = Some(owner);
                Ok(())
            }
        }
    }

    pub fn release(&mut self, owner: OverlayKind) -> bool {
        if self.holder != Some(owner) {
            return false;
        }

        self.holder = None;
        true
    }

    pub fn holder(&self) -> Option<OverlayKind> {
        self.holder
    }

    pub fn is_locked(&self) -> bool {
        self.holder.is_some()
    }

    /// Value for the body's `overflow` style property.
    pub fn body_overflow(&self) -> &'static str {
        if self.is_locked() {
            "hidden"
        } else {
            ""
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl OverlayKey {
    pub fn from_key(key: &str) -> Self {
        match key {
            "Escape" => Self::Escape,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum OverlayAction {
    OpenProject(String),
    OpenSkill(String),
    OpenImage(usize),
    NextImage,
    PrevImage,
    Close(OverlayKind),
    Key(OverlayKey),
}

/// Every overlay on the page plus the lock they share.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayState {
    lock: ScrollLock,
    pub project: ProjectModal,
    pub skill: SkillModal,
    pub lightbox: ImageLightbox,
}

impl OverlayState {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self {
            lock: ScrollLock::default(),
            project: ProjectModal::default(),
            skill: SkillModal::default(),
            lightbox: ImageLightbox::new(images),
        }
    }

    pub fn lock(&self) -> ScrollLock {
        self.lock
    }

    pub fn active(&self) -> Option<OverlayKind> {
        self.lock.holder()
    }

    pub fn apply(&mut self, action: OverlayAction) -> Result<(), InteractionError> {
        match action {
            OverlayAction::OpenProject(id) => self.project.open(&id, &mut self.lock),
            OverlayAction::OpenSkill(name) => self.skill.open(&name, &mut self.lock),
            OverlayAction::OpenImage(index) => self.lightbox.open(index, &mut self.lock),
            OverlayAction::NextImage => self.lightbox.next(&mut self.lock),
            OverlayAction::PrevImage => self.lightbox.prev(&mut self.lock),
            OverlayAction::Close(kind) => {
                self.close(kind);
                Ok(())
            }
            OverlayAction::Key(key) => self.on_key(key),
        }
    }

    fn close(&mut self, kind: OverlayKind) -> bool {
        match kind {
            OverlayKind::ProjectModal => self.project.close(&mut self.lock),
            OverlayKind::SkillModal => self.skill.close(&mut self.lock),
            OverlayKind::Lightbox => self.lightbox.close(&mut self.lock),
        }
    }

    fn on_key(&mut self, key: OverlayKey) -> Result<(), InteractionError> {
        let Some(active) = self.active() else {
            return Ok(());
        };

        match (key, active) {
            (OverlayKey::Escape, kind) => {
                self.close(kind);
                Ok(())
            }
            (OverlayKey::ArrowLeft, OverlayKind::Lightbox) => self.lightbox.prev(&mut self.lock),
            (OverlayKey::ArrowRight, OverlayKind::Lightbox) => self.lightbox.next(&mut self.lock),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery() -> Vec<GalleryImage> {
        (1..=3)
            .map(|n| GalleryImage {
                src: format!("/images/gallery-{n}.jpg"),
                alt: format!("Gallery image {n}"),
            })
            .collect()
    }

    #[test]
    fn lock_rejects_a_second_owner() {
        let mut lock = ScrollLock::default();
        lock.acquire(OverlayKind::ProjectModal)
            .expect("free lock can be acquired");

        let err = lock
            .acquire(OverlayKind::Lightbox)
            .expect_err("held lock rejects another overlay");
        assert_eq!(
            err,
            InteractionError::OverlayBusy {
                requested: OverlayKind::Lightbox,
                holder: OverlayKind::ProjectModal,
            }
        );
        assert_eq!(lock.holder(), Some(OverlayKind::ProjectModal));
    }

    #[test]
    fn only_the_holder_releases() {
        let mut lock = ScrollLock::default();
        lock.acquire(OverlayKind::SkillModal)
            .expect("free lock can be acquired");

        assert!(!lock.release(OverlayKind::ProjectModal));
        assert_eq!(lock.body_overflow(), "hidden");

        assert!(lock.release(OverlayKind::SkillModal));
        assert_eq!(lock.body_overflow(), "");
        assert!(!lock.release(OverlayKind::SkillModal));
    }

    #[test]
    fn second_overlay_is_rejected_while_first_is_open() {
        let mut state = OverlayState::new(gallery());
        state
            .apply(OverlayAction::OpenProject("idialysis".to_string()))
            .expect("project opens");

        let err = state
            .apply(OverlayAction::OpenSkill("PHP".to_string()))
            .expect_err("skill modal must wait");
        assert_eq!(err.as_str(), "overlay_busy");
        assert!(!state.skill.is_open());

        state
            .apply(OverlayAction::Close(OverlayKind::SkillModal))
            .expect("closing a closed overlay is harmless");
        assert_eq!(state.active(), Some(OverlayKind::ProjectModal));

        state
            .apply(OverlayAction::Key(OverlayKey::Escape))
            .expect("escape closes");
        assert_eq!(state.active(), None);
        assert!(!state.lock().is_locked());
    }

    #[test]
    fn arrow_keys_only_drive_an_open_lightbox() {
        let mut state = OverlayState::new(gallery());
        state
            .apply(OverlayAction::Key(OverlayKey::ArrowRight))
            .expect("ignored when nothing is open");
        assert!(!state.lightbox.is_open());

        state.apply(OverlayAction::OpenImage(2)).expect("image opens");
        state
            .apply(OverlayAction::Key(OverlayKey::ArrowRight))
            .expect("next wraps");
        assert_eq!(state.lightbox.index(), Some(0));

        state
            .apply(OverlayAction::Key(OverlayKey::ArrowLeft))
            .expect("prev wraps");
        assert_eq!(state.lightbox.index(), Some(2));

        state
            .apply(OverlayAction::Key(OverlayKey::Escape))
            .expect("escape closes");
        assert!(!state.lightbox.is_open());
        assert!(!state.lock().is_locked());
    }

    #[test]
    fn arrow_keys_do_not_affect_modals() {
        let mut state = OverlayState::new(gallery());
        state
            .apply(OverlayAction::OpenSkill("Git".to_string()))
            .expect("skill opens");
        state
            .apply(OverlayAction::Key(OverlayKey::ArrowLeft))
            .expect("ignored");

        assert!(state.skill.is_open());
        assert!(!state.lightbox.is_open());
    }

    #[test]
    fn key_names_map_to_overlay_keys() {
        assert_eq!(OverlayKey::from_key("Escape"), OverlayKey::Escape);
        assert_eq!(OverlayKey::from_key("ArrowRight"), OverlayKey::ArrowRight);
        assert_eq!(OverlayKey::from_key("Enter"), OverlayKey::Other);
    }
}
