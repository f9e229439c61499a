/// Title and description served before any section has claimed the viewport.
pub const DEFAULT_TITLE: &str = "Tafara Mutsvedu | Software Developer & Data Scientist";
pub const DEFAULT_DESCRIPTION: &str = "Experienced Software Developer and Data Scientist specializing in machine learning, web development, and data analysis.";

/// Header switches to its scrolled treatment past this many pixels.
pub const HEADER_SCROLL_THRESHOLD: f64 = 10.0;

/// Home page sections, in the order the tracker scans them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Projects,
    About,
    Skills,
    Contact,
    Support,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Projects,
        Section::About,
        Section::Skills,
        Section::Contact,
        Section::Support,
    ];

    /// DOM id of the section element, shared with nav anchors.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Projects => "projects",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Contact => "contact",
            Section::Support => "support",
        }
    }

    pub fn page_title(&self) -> &'static str {
        match self {
            Section::Projects => "Projects | Tafara Mutsvedu Portfolio",
            Section::About => "About | Tafara Mutsvedu Portfolio",
            Section::Skills => "Skills | Tafara Mutsvedu Portfolio",
            Section::Contact => "Contact | Tafara Mutsvedu Portfolio",
            Section::Support => "Support | Tafara Mutsvedu Portfolio",
        }
    }

    pub fn meta_description(&self) -> &'static str {
        match self {
            Section::Projects => {
                "View my portfolio of software development and data science projects, including web applications and machine learning solutions."
            }
            Section::About => {
                "Learn about my journey as a Software Developer and Data Scientist, my education, and professional experience."
            }
            Section::Skills => {
                "Explore my technical skills in software development, data science, and machine learning technologies."
            }
            Section::Contact => {
                "Get in touch with me for collaboration, opportunities, or questions about my work."
            }
            Section::Support => {
                "Enjoying my work? Play a quick game and find a way to support what I build."
            }
        }
    }
}

/// Tracks which section currently straddles the viewport midpoint.
///
/// The selection is sticky: scrolling to a spot where no section covers the
/// midpoint keeps the previous answer rather than clearing it.
#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    current: Option<Section>,
}

impl SectionTracker {
    pub fn new() -> Self {
        SectionTracker::default()
    }

    pub fn current(&self) -> Option<Section> {
        self.current
    }

    /// Scan sections in declaration order and adopt the first whose box
    /// straddles `midpoint`. `bounds` reports `(top, bottom)` for mounted
    /// sections and `None` for ones not in the document.
    pub fn observe<F>(&mut self, midpoint: f64, bounds: F) -> Option<Section>
    where
        F: Fn(Section) -> Option<(f64, f64)>,
    {
        for section in Section::ALL {
            if let Some((top, bottom)) = bounds(section) {
                if top <= midpoint && bottom >= midpoint {
                    self.current = Some(section);
                    break;
                }
            }
        }
        self.current
    }
}

/// The back-to-top affordance appears once a full viewport has scrolled by.
pub fn scroll_button_visible(scroll_y: f64, viewport_height: f64) -> bool {
    scroll_y > viewport_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn layout(entries: &[(Section, (f64, f64))]) -> impl Fn(Section) -> Option<(f64, f64)> {
        let map: HashMap<Section, (f64, f64)> = entries.iter().copied().collect();
        move |s| map.get(&s).copied()
    }

    #[test]
    fn test_no_section_before_first_match() {
        let mut tracker = SectionTracker::new();
        assert_eq!(tracker.current(), None);
        let got = tracker.observe(400.0, layout(&[(Section::Projects, (500.0, 900.0))]));
        assert_eq!(got, None);
    }

    #[test]
    fn test_selects_section_straddling_midpoint() {
        let mut tracker = SectionTracker::new();
        let got = tracker.observe(
            400.0,
            layout(&[
                (Section::Projects, (-600.0, 100.0)),
                (Section::About, (100.0, 800.0)),
            ]),
        );
        assert_eq!(got, Some(Section::About));
    }

    #[test]
    fn test_midpoint_on_edges_counts_as_inside() {
        let mut tracker = SectionTracker::new();
        let got = tracker.observe(400.0, layout(&[(Section::Skills, (400.0, 900.0))]));
        assert_eq!(got, Some(Section::Skills));
        let got = tracker.observe(400.0, layout(&[(Section::Contact, (0.0, 400.0))]));
        assert_eq!(got, Some(Section::Contact));
    }

    #[test]
    fn test_first_in_order_wins_ties() {
        let mut tracker = SectionTracker::new();
        // Both boxes cover the midpoint; Projects is scanned first even
        // though About was declared first in the layout.
        let got = tracker.observe(
            400.0,
            layout(&[
                (Section::About, (0.0, 1000.0)),
                (Section::Projects, (300.0, 500.0)),
            ]),
        );
        assert_eq!(got, Some(Section::Projects));
    }

    #[test]
    fn test_selection_is_sticky_when_nothing_matches() {
        let mut tracker = SectionTracker::new();
        tracker.observe(400.0, layout(&[(Section::Skills, (100.0, 700.0))]));
        assert_eq!(tracker.current(), Some(Section::Skills));
        // Scrolled to a gap between sections.
        let got = tracker.observe(400.0, layout(&[(Section::Skills, (900.0, 1400.0))]));
        assert_eq!(got, Some(Section::Skills));
        // Every section unmounted entirely.
        let got = tracker.observe(400.0, layout(&[]));
        assert_eq!(got, Some(Section::Skills));
    }

    #[test]
    fn test_unmounted_sections_are_skipped() {
        let mut tracker = SectionTracker::new();
        // Projects would win the tie but reports no geometry.
        let got = tracker.observe(
            400.0,
            layout(&[
                (Section::About, (0.0, 1000.0)),
                (Section::Support, (200.0, 600.0)),
            ]),
        );
        assert_eq!(got, Some(Section::About));
    }

    #[test]
    fn test_scroll_button_threshold_is_strict() {
        assert!(!scroll_button_visible(0.0, 800.0));
        assert!(!scroll_button_visible(800.0, 800.0));
        assert!(scroll_button_visible(800.1, 800.0));
        assert!(scroll_button_visible(2000.0, 800.0));
    }

    #[test]
    fn test_section_ids_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for s in Section::ALL {
            assert!(seen.insert(s.id()));
        }
    }
}
