use crate::config::InteractionConfig;

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const REVEALED_OPACITY: &str = "1";
pub const REVEALED_TRANSFORM: &str = "translateY(0)";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SectionVisibility {
    Hidden,
    Revealed,
}

/// One-way hidden to revealed latch per observed section.
pub struct FadeInRevealer {
    threshold: f64,
    root_margin: String,
    sections: Vec<SectionVisibility>,
}

impl FadeInRevealer {
    pub fn new(config: &InteractionConfig, section_count: usize) -> Self {
        Self {
            threshold: config.reveal_threshold,
            root_margin: format!("0px 0px -{}px 0px", config.reveal_bottom_margin),
            sections: vec![SectionVisibility::Hidden; section_count],
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn root_margin(&self) -> &str {
        &self.root_margin
    }

    /// Returns `true` only for the notification that first reveals the section.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> bool {
        let Some(section) = self.sections.get_mut(index) else {
            return false;
        };

        if !is_intersecting || *section == SectionVisibility::Revealed {
            return false;
        }

        *section = SectionVisibility::Revealed;
        true
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.sections.get(index) == Some(&SectionVisibility::Revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observer_options_follow_config() {
        let revealer = FadeInRevealer::new(&InteractionConfig::default(), 3);
        assert_eq!(revealer.threshold(), 0.1);
        assert_eq!(revealer.root_margin(), "0px 0px -100px 0px");
    }

    #[test]
    fn sections_start_hidden_and_reveal_once() {
        let mut revealer = FadeInRevealer::new(&InteractionConfig::default(), 2);
        assert!(!revealer.is_revealed(0));

        assert!(!revealer.on_intersection(0, false));
        assert!(revealer.on_intersection(0, true));
        assert!(!revealer.on_intersection(0, true));
        assert!(!revealer.on_intersection(0, false));

        assert!(revealer.is_revealed(0));
        assert!(!revealer.is_revealed(1));
    }

    #[test]
    fn unknown_section_index_is_ignored() {
        let mut revealer = FadeInRevealer::new(&InteractionConfig::default(), 1);
        assert!(!revealer.on_intersection(5, true));
        assert!(!revealer.is_revealed(5));
    }
}
