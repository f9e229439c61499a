use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_use::use_window_scroll;

use crate::sections::{Section, SectionTracker, DEFAULT_DESCRIPTION, DEFAULT_TITLE};

use super::about::About;
use super::contact::ContactSection;
use super::hero::Hero;
use super::projects::ProjectsSection;
use super::skills::Skills;
use super::support::SupportSection;
use super::viewport_height;

// Live geometry of a section element, None while it is not in the document.
fn section_bounds(section: Section) -> Option<(f64, f64)> {
    let el = document().get_element_by_id(section.id())?;
    let rect = el.get_bounding_client_rect();
    Some((rect.top(), rect.bottom()))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let tracker = StoredValue::new(SectionTracker::new());
    let (current, set_current) = signal(None::<Section>);
    let (_, scroll_y) = use_window_scroll();

    // Runs once after hydration and again on every scroll.
    Effect::new(move |_| {
        scroll_y.track();
        let midpoint = viewport_height() / 2.0;
        tracker.update_value(|t| {
            t.observe(midpoint, section_bounds);
        });
        let next = tracker.with_value(|t| t.current());
        if next != current.get_untracked() {
            if let Some(section) = next {
                log::debug!("section in view: {}", section.id());
            }
            set_current.set(next);
        }
    });

    let title = move || {
        current
            .get()
            .map(|s| s.page_title().to_string())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    };
    let description = move || {
        current
            .get()
            .map(|s| s.meta_description().to_string())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string())
    };

    view! {
        <Title text=title />
        <Meta name="description" content=description />

        <div class=move || {
            match current.get() {
                Some(section) => format!("section-{}", section.id()),
                None => String::new(),
            }
        }>
            <Hero />
            <About />
            <Skills />
            <ProjectsSection />
            <SupportSection />
            <ContactSection />
        </div>
    }
}
