use crate::config::InteractionConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    pub navbar_scrolled: bool,
    pub progress_percent: f64,
    pub back_to_top_visible: bool,
    /// Index into the section slice whose nav link carries `active`.
    pub active_section: Option<usize>,
}

pub struct ScrollTracker {
    scrolled_threshold: f64,
    section_offset: f64,
    last_section_bottom_slack: f64,
    back_to_top_threshold: f64,
    active: Option<usize>,
}

impl ScrollTracker {
    pub fn new(config: &InteractionConfig) -> Self {
        Self {
            scrolled_threshold: config.scrolled_threshold,
            section_offset: config.section_offset,
            last_section_bottom_slack: config.last_section_bottom_slack,
            back_to_top_threshold: config.back_to_top_threshold,
            active: None,
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics, sections: &[SectionBounds]) -> ScrollFrame {
        if let Some(index) = self.locate_section(metrics, sections) {
            self.active = Some(index);
        }

        ScrollFrame {
            navbar_scrolled: metrics.scroll_top > self.scrolled_threshold,
            progress_percent: progress_percent(metrics),
            back_to_top_visible: metrics.scroll_top > self.back_to_top_threshold,
            active_section: self.active,
        }
    }

    fn locate_section(&self, metrics: ScrollMetrics, sections: &[SectionBounds]) -> Option<usize> {
        let (last, leading) = sections.split_last()?;
        let last_index = leading.len();

        let last_start = last.top - self.section_offset;
        let distance_from_bottom =
            metrics.document_height - (metrics.scroll_top + metrics.viewport_height);
        if distance_from_bottom < self.last_section_bottom_slack
            || metrics.scroll_top > last_start
        {
            return Some(last_index);
        }

        sections.iter().position(|section| {
            let start = section.top - self.section_offset;
            metrics.scroll_top >= start && metrics.scroll_top < start + section.height
        })
    }
}

/// Share of the scrollable distance already covered, as a percentage.
pub fn progress_percent(metrics: ScrollMetrics) -> f64 {
    let scrollable = metrics.document_height - metrics.viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }

    (100.0 * metrics.scroll_top / scrollable).clamp(0.0, 100.0)
}

/// Index of the nav link pointing at `#section_id`.
///
/// `None` means no link matches, and the caller leaves the current highlight in place.
pub fn nav_link_for<S: AsRef<str>>(section_id: &str, hrefs: &[Option<S>]) -> Option<usize> {
    let target = format!("#{section_id}");
    hrefs
        .iter()
        .position(|href| href.as_ref().is_some_and(|href| href.as_ref() == target))
}

/// Document offset an in-page link scrolls to, leaving room for the fixed navbar.
pub fn anchor_target(element_top: f64, scroll_top: f64, anchor_offset: f64) -> f64 {
    (element_top + scroll_top - anchor_offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        [
            ("home", 0.0, 800.0),
            ("about", 800.0, 600.0),
            ("projects", 1400.0, 1200.0),
            ("contact", 2600.0, 400.0),
        ]
        .into_iter()
        .map(|(id, top, height)| SectionBounds {
            id: id.to_string(),
            top,
            height,
        })
        .collect()
    }

    fn metrics(scroll_top: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top,
            viewport_height: 700.0,
            document_height: 3000.0,
        }
    }

    fn tracker() -> ScrollTracker {
        ScrollTracker::new(&InteractionConfig::default())
    }

    #[test]
    fn navbar_style_switches_past_threshold() {
        let mut tracker = tracker();
        assert!(!tracker.on_scroll(metrics(100.0), &sections()).navbar_scrolled);
        assert!(tracker.on_scroll(metrics(101.0), &sections()).navbar_scrolled);
    }

    #[test]
    fn back_to_top_appears_past_threshold() {
        let mut tracker = tracker();
        assert!(!tracker.on_scroll(metrics(300.0), &sections()).back_to_top_visible);
        assert!(tracker.on_scroll(metrics(301.0), &sections()).back_to_top_visible);
    }

    #[test]
    fn section_bands_are_shifted_by_offset() {
        let mut tracker = tracker();
        let sections = sections();

        assert_eq!(tracker.on_scroll(metrics(0.0), &sections).active_section, Some(0));
        assert_eq!(tracker.on_scroll(metrics(699.0), &sections).active_section, Some(0));
        assert_eq!(tracker.on_scroll(metrics(700.0), &sections).active_section, Some(1));
        assert_eq!(tracker.on_scroll(metrics(1300.0), &sections).active_section, Some(2));
    }

    #[test]
    fn last_section_wins_near_document_bottom() {
        let mut tracker = tracker();
        // 3000 - (2200 + 700) = 100, inside the 150px slack, while the
        // projects band still covers 2200.
        let frame = tracker.on_scroll(metrics(2200.0), &sections());
        assert_eq!(frame.active_section, Some(3));
    }

    #[test]
    fn last_section_wins_past_its_top() {
        let mut tracker = tracker();
        let short_document = ScrollMetrics {
            scroll_top: 2501.0,
            viewport_height: 200.0,
            document_height: 5000.0,
        };
        assert_eq!(tracker.on_scroll(short_document, &sections()).active_section, Some(3));
    }

    #[test]
    fn exactly_one_section_is_active_for_every_offset() {
        let mut tracker = tracker();
        let sections = sections();

        for step in 0..=230 {
            let frame = tracker.on_scroll(metrics(f64::from(step) * 10.0), &sections);
            let active = frame.active_section.expect("some section is always active");
            assert!(active < sections.len());
        }
    }

    #[test]
    fn previous_section_is_kept_when_nothing_matches() {
        let mut tracker = tracker();
        let sparse = vec![
            SectionBounds {
                id: "home".to_string(),
                top: 0.0,
                height: 200.0,
            },
            SectionBounds {
                id: "contact".to_string(),
                top: 5000.0,
                height: 200.0,
            },
        ];
        let tall = |scroll_top| ScrollMetrics {
            scroll_top,
            viewport_height: 700.0,
            document_height: 6000.0,
        };

        assert_eq!(tracker.on_scroll(tall(50.0), &sparse).active_section, Some(0));
        assert_eq!(tracker.on_scroll(tall(1500.0), &sparse).active_section, Some(0));
        assert_eq!(tracker.active(), Some(0));
    }

    #[test]
    fn no_sections_means_no_active_link() {
        let mut tracker = tracker();
        assert_eq!(tracker.on_scroll(metrics(500.0), &[]).active_section, None);
    }

    #[test]
    fn progress_is_zero_when_nothing_scrolls() {
        let flat = ScrollMetrics {
            scroll_top: 0.0,
            viewport_height: 900.0,
            document_height: 900.0,
        };
        assert_eq!(progress_percent(flat), 0.0);
        assert_eq!(progress_percent(metrics(1150.0)), 50.0);
    }

    #[test]
    fn anchor_target_leaves_room_for_navbar() {
        assert_eq!(anchor_target(400.0, 1000.0, 80.0), 1320.0);
        assert_eq!(anchor_target(20.0, 0.0, 80.0), 0.0);
    }

    #[test]
    fn nav_link_is_matched_by_fragment() {
        let hrefs = [Some("#home"), None, Some("#about"), Some("#contact")];

        assert_eq!(nav_link_for("about", &hrefs), Some(2));
        assert_eq!(nav_link_for("home", &hrefs), Some(0));
        assert_eq!(nav_link_for("projects", &hrefs), None);
        assert_eq!(nav_link_for("about", &[Some("about")]), None);
    }
}
