use tracker_core::model::PhaseCatalog;

use super::actions::TrackerIntent;
use super::test_harness::setup_tracker_harness;

fn builtin() -> PhaseCatalog {
    PhaseCatalog::builtin().expect("builtin catalog")
}

#[test]
fn tracker_view_renders_first_phase_expanded() {
    let harness = setup_tracker_harness(builtin());
    let html = harness.render();

    assert!(html.contains("Overall Progress"), "missing header in {html}");
    assert!(html.contains("width: 0%"), "missing empty bar in {html}");
    assert_eq!(html.matches("Learning Topics").count(), 1, "{html}");
    assert!(
        html.contains("System Design Basics: scalability, reliability, availability"),
        "missing first phase topic in {html}"
    );
    assert!(
        !html.contains("Monolithic vs Microservices architecture"),
        "second phase should be collapsed in {html}"
    );
    assert!(html.contains("Interview Prep"), "missing last phase header in {html}");
    assert!(html.contains("Success Tips"), "missing tips in {html}");
    assert!(!html.contains("topic-text--done"), "nothing is complete yet: {html}");
}

#[test]
fn toggling_topics_updates_percentages_and_strikethrough() {
    let mut harness = setup_tracker_harness(builtin());
    let first = harness.catalog.topic_key(0, 0).expect("topic");
    let second = harness.catalog.topic_key(0, 1).expect("topic");

    harness.send(TrackerIntent::ToggleTopic(first));
    harness.send(TrackerIntent::ToggleTopic(second));
    let html = harness.render();

    assert_eq!(html.matches("topic-text--done").count(), 2, "{html}");
    assert!(html.contains("width: 33%"), "missing phase bar in {html}");
    assert!(html.contains("width: 7%"), "missing overall bar in {html}");
}

#[test]
fn toggling_a_topic_back_restores_the_page() {
    let mut harness = setup_tracker_harness(builtin());
    let before = harness.render();
    let key = harness.catalog.topic_key(0, 3).expect("topic");

    harness.send(TrackerIntent::ToggleTopic(key));
    assert_ne!(harness.render(), before);
    harness.send(TrackerIntent::ToggleTopic(key));
    assert_eq!(harness.render(), before);
}

#[test]
fn phase_header_collapses_and_expands_panel() {
    let mut harness = setup_tracker_harness(builtin());
    let first = harness.catalog.phase_index(0).expect("phase");
    let second = harness.catalog.phase_index(1).expect("phase");

    harness.send(TrackerIntent::TogglePhase(first));
    let html = harness.render();
    assert!(!html.contains("Learning Topics"), "panel should be closed in {html}");

    harness.send(TrackerIntent::TogglePhase(second));
    let html = harness.render();
    assert_eq!(html.matches("Learning Topics").count(), 1, "{html}");
    assert!(html.contains("Monolithic vs Microservices architecture"), "{html}");

    harness.send(TrackerIntent::TogglePhase(first));
    let html = harness.render();
    assert_eq!(html.matches("Learning Topics").count(), 2, "{html}");
}

#[test]
fn collapsed_phase_keeps_its_progress() {
    let mut harness = setup_tracker_harness(builtin());
    let first = harness.catalog.phase_index(0).expect("phase");
    let keys = harness
        .catalog
        .topics(first)
        .map(|(key, _)| key)
        .collect::<Vec<_>>();
    for key in keys {
        harness.send(TrackerIntent::ToggleTopic(key));
    }
    harness.send(TrackerIntent::TogglePhase(first));

    let html = harness.render();
    assert!(html.contains("width: 100%"), "missing full phase bar in {html}");
    assert!(html.contains("width: 20%"), "missing overall bar in {html}");
}

#[test]
fn custom_catalog_without_tips_skips_the_panel() {
    let mut raw = String::from("title = \"Rust\"\n");
    for week in 1..=5 {
        raw.push_str(&format!(
            r#"
            [[phases]]
            title = "Ownership {week}"
            period = "Week {week}"
            color = "orange"
            icon = "code"
            topics = ["moves", "borrows"]
            "#
        ));
    }
    let catalog = PhaseCatalog::from_toml_str(&raw).expect("catalog");
    let harness = setup_tracker_harness(catalog);
    let html = harness.render();

    assert!(html.contains("Ownership 5"), "{html}");
    assert!(html.contains("tone-orange"), "{html}");
    assert!(html.contains("0/2 topics"), "{html}");
    assert!(!html.contains("Success Tips"), "{html}");
    assert!(!html.contains("Phase Milestone"), "{html}");
}

#[test]
fn topic_counts_follow_completion() {
    let mut harness = setup_tracker_harness(builtin());
    assert_eq!(harness.render().matches("0/6 topics").count(), 5);

    let key = harness.catalog.topic_key(2, 4).expect("topic");
    harness.send(TrackerIntent::ToggleTopic(key));
    let html = harness.render();
    assert_eq!(html.matches("0/6 topics").count(), 4, "{html}");
    assert!(html.contains("1/6 topics"), "{html}");
}
