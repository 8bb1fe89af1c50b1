use site_core::{active_section, is_scrolled, NavState, SectionBounds};

fn stacked(viewport_height: f64, scroll: f64) -> Vec<SectionBounds> {
    ["home", "about", "skills", "experience", "projects", "contact"]
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let top = i as f64 * viewport_height - scroll;
            SectionBounds::new(*id, top, top + viewport_height)
        })
        .collect()
}

#[test]
fn section_under_viewport_middle_is_active() {
    let sections = stacked(800.0, 1700.0);
    assert_eq!(active_section(&sections, 800.0), "skills");
}

#[test]
fn touching_sections_prefer_the_later_one() {
    // Boundary between "about" and "skills" sits exactly at the middle.
    let sections = stacked(800.0, 1200.0);
    assert_eq!(active_section(&sections, 800.0), "skills");
}

#[test]
fn no_section_defaults_to_home() {
    assert_eq!(active_section(&[], 800.0), "home");
    let far = vec![SectionBounds::new("contact", 5000.0, 6000.0)];
    assert_eq!(active_section(&far, 800.0), "home");
}

#[test]
fn scrolled_only_past_threshold() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(50.0));
    assert!(is_scrolled(50.5));
}

#[test]
fn nav_state_reports_changes_only() {
    let mut state = NavState::default();
    assert_eq!(state.active, "home");
    assert!(!state.scrolled);

    assert!(!state.update(&stacked(800.0, 0.0), 800.0, 0.0));
    assert!(state.update(&stacked(800.0, 10.0), 800.0, 60.0));
    assert!(state.scrolled);
    assert_eq!(state.active, "home");

    assert!(state.update(&stacked(800.0, 900.0), 800.0, 900.0));
    assert_eq!(state.active, "about");
    assert!(!state.update(&stacked(800.0, 950.0), 800.0, 950.0));
}
