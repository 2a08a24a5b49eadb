use crate::{
    catalog::{self, LinkKind, ProjectEntry, SKILL_FALLBACK},
    error::InteractionError,
    overlay::{OverlayKind, ScrollLock},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectLink {
    pub href: &'static str,
    pub kind: LinkKind,
}

impl ProjectLink {
    pub fn for_entry(entry: &ProjectEntry) -> Option<Self> {
        entry.link.map(|href| Self {
            href,
            kind: LinkKind::classify(href),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectModal {
    current: Option<&'static ProjectEntry>,
}

impl ProjectModal {
    /// Unknown ids leave the modal untouched.
    pub fn open(&mut self, id: &str, lock: &mut ScrollLock) -> Result<(), InteractionError> {
        let entry =
            catalog::project(id).ok_or_else(|| InteractionError::UnknownProject(id.to_string()))?;
        lock.acquire(OverlayKind::ProjectModal)?;
        self.current = Some(entry);
        Ok(())
    }

    pub fn close(&mut self, lock: &mut ScrollLock) -> bool {
        if self.current.take().is_none() {
            return false;
        }

        lock.release(OverlayKind::ProjectModal);
        true
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn entry(&self) -> Option<&'static ProjectEntry> {
        self.current
    }

    pub fn link(&self) -> Option<ProjectLink> {
        self.current.and_then(ProjectLink::for_entry)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillDetails {
    pub name: String,
    pub description: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkillModal {
    current: Option<SkillDetails>,
}

impl SkillModal {
    pub fn open(&mut self, name: &str, lock: &mut ScrollLock) -> Result<(), InteractionError> {
        lock.acquire(OverlayKind::SkillModal)?;
        self.current = Some(SkillDetails {
            name: name.to_string(),
            description: catalog::skill_description(name).unwrap_or(SKILL_FALLBACK),
        });
        Ok(())
    }

    pub fn close(&mut self, lock: &mut ScrollLock) -> bool {
        if self.current.take().is_none() {
            return false;
        }

        lock.release(OverlayKind::SkillModal);
        true
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn details(&self) -> Option<&SkillDetails> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idialysis_shows_a_website_link() {
        let mut lock = ScrollLock::default();
        let mut modal = ProjectModal::default();

        modal.open("idialysis", &mut lock).expect("known project");

        let entry = modal.entry().expect("modal is populated");
        assert_eq!(entry.title, "iDialysis - PD Patient Management System");
        assert_eq!(entry.features.len(), 4);

        let link = modal.link().expect("idialysis has a link");
        assert!(!link.kind.is_source());
        assert_eq!(link.kind.label(), "Visit Site");
        assert_eq!(link.kind.icon(), "fas fa-external-link-alt");
        assert_eq!(lock.holder(), Some(OverlayKind::ProjectModal));
    }

    #[test]
    fn hospital_db_hides_the_link() {
        let mut lock = ScrollLock::default();
        let mut modal = ProjectModal::default();

        modal.open("hospital-db", &mut lock).expect("known project");

        assert!(modal.is_open());
        assert!(modal.link().is_none());
    }

    #[test]
    fn github_projects_use_source_styling() {
        let mut lock = ScrollLock::default();
        let mut modal = ProjectModal::default();

        modal.open("portfolio", &mut lock).expect("known project");

        let link = modal.link().expect("portfolio has a link");
        assert!(link.kind.is_source());
        assert_eq!(link.kind.label(), "View on GitHub");
    }

    #[test]
    fn unknown_project_is_a_no_op() {
        let mut lock = ScrollLock::default();
        let mut modal = ProjectModal::default();

        let err = modal
            .open("does-not-exist", &mut lock)
            .expect_err("unknown id");
        assert_eq!(err, InteractionError::UnknownProject("does-not-exist".to_string()));
        assert!(!modal.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn unknown_project_keeps_previous_content() {
        let mut lock = ScrollLock::default();
        let mut modal = ProjectModal::default();
        modal.open("hospital-db", &mut lock).expect("known project");

        assert!(modal.open("nope", &mut lock).is_err());
        assert_eq!(modal.entry().map(|entry| entry.id), Some("hospital-db"));
    }

    #[test]
    fn reopening_replaces_content_and_keeps_lock() {
        let mut lock = ScrollLock::default();
        let mut modal = ProjectModal::default();
        modal.open("idialysis", &mut lock).expect("known project");
        modal.open("hospital-db", &mut lock).expect("same overlay may repopulate");

        assert_eq!(modal.entry().map(|entry| entry.id), Some("hospital-db"));
        assert!(modal.close(&mut lock));
        assert!(!lock.is_locked());
        assert!(!modal.close(&mut lock));
    }

    #[test]
    fn unknown_skill_uses_fallback_text() {
        let mut lock = ScrollLock::default();
        let mut modal = SkillModal::default();

        modal.open("Unknown Skill", &mut lock).expect("skills never fail");

        let details = modal.details().expect("modal is populated");
        assert_eq!(details.name, "Unknown Skill");
        assert_eq!(
            details.description,
            "No additional details available for this skill yet."
        );
    }

    #[test]
    fn known_skill_uses_catalog_text() {
        let mut lock = ScrollLock::default();
        let mut modal = SkillModal::default();

        modal.open("MySQL", &mut lock).expect("skills never fail");

        assert_ne!(modal.details().map(|d| d.description), Some(SKILL_FALLBACK));
        assert!(modal.close(&mut lock));
        assert!(!lock.is_locked());
    }

    #[test]
    fn skill_modal_waits_for_project_modal() {
        let mut lock = ScrollLock::default();
        let mut project = ProjectModal::default();
        let mut skill = SkillModal::default();
        project.open("idialysis", &mut lock).expect("known project");

        assert!(skill.open("PHP", &mut lock).is_err());
        assert!(!skill.close(&mut lock));
        assert_eq!(lock.holder(), Some(OverlayKind::ProjectModal));
    }
}
