//! Tests for console report rendering

use std::time::Duration;

use rstest::rstest;

use cattree::cli::report::{
    forest_tree, level_breakdown, level_name, rule, tree_analysis, PerformanceSummary,
    MAX_RENDER_DEPTH, RULE_WIDTH,
};
use cattree::domain::{build_indexed, Forest, Record, Strategy};

fn summary(scan_ms: u64, indexed_ms: u64) -> PerformanceSummary {
    PerformanceSummary {
        scan_elapsed: Duration::from_millis(scan_ms),
        indexed_elapsed: Duration::from_millis(indexed_ms),
        scan_nodes: 35,
        indexed_nodes: 35,
    }
}

fn small_forest() -> Forest {
    build_indexed(&[
        Record::root(1, "Electronics", "Electronic devices"),
        Record::new(2, "Phones", "Mobile devices", Some(1)),
        Record::new(3, "Computers", "Desktop and laptop computers", Some(1)),
    ])
}

// ============================================================
// PerformanceSummary
// ============================================================

#[test]
fn given_slower_scan_when_summarizing_then_indexed_is_faster() {
    let s = summary(20, 5);

    assert_eq!(s.faster(), Some(Strategy::Indexed));
    assert!((s.difference_ms() - 15.0).abs() < 1e-9);
    assert!((s.percentage() - 75.0).abs() < 1e-9);
    assert_eq!(
        s.verdict(),
        "Projection + indexed single pass strategy is FASTER by 15.000 ms (75.00%)"
    );
}

#[test]
fn given_slower_indexed_when_summarizing_then_scan_is_faster_with_absolute_values() {
    let s = summary(10, 15);

    assert_eq!(s.faster(), Some(Strategy::Scan));
    assert!(s.difference_ms() < 0.0);
    assert_eq!(
        s.verdict(),
        "Eager join + recursive scan strategy is FASTER by 5.000 ms (50.00%)"
    );
}

#[test]
fn given_equal_times_when_summarizing_then_reports_tie() {
    let s = summary(7, 7);

    assert_eq!(s.faster(), None);
    assert_eq!(s.verdict(), "Both strategies have equal performance");
}

#[test]
fn given_zero_scan_time_when_computing_percentage_then_is_zero() {
    let s = PerformanceSummary {
        scan_elapsed: Duration::ZERO,
        indexed_elapsed: Duration::from_micros(3),
        scan_nodes: 0,
        indexed_nodes: 0,
    };

    assert_eq!(s.percentage(), 0.0);
    assert_eq!(s.faster(), Some(Strategy::Scan));
}

#[test]
fn given_sub_millisecond_times_when_summarizing_then_fractional_difference_is_kept() {
    let s = PerformanceSummary {
        scan_elapsed: Duration::from_micros(900),
        indexed_elapsed: Duration::from_micros(300),
        scan_nodes: 35,
        indexed_nodes: 35,
    };

    assert_eq!(s.faster(), Some(Strategy::Indexed));
    assert!(s.verdict().contains("FASTER by 0.600 ms"));

    let rendered = s.render();
    assert!(rendered.contains("1. Eager join + recursive scan:"));
    assert!(rendered.contains("   Execution Time: 0 ms (0.900 ms)"));
    assert!(rendered.contains("2. Projection + indexed single pass:"));
    assert!(rendered.contains("   Categories Count: 35"));
}

// ============================================================
// Tree and level reports
// ============================================================

#[test]
fn given_empty_forest_when_rendering_tree_then_prints_placeholder() {
    assert_eq!(forest_tree(&Forest::empty()), "No categories to display.");
}

#[test]
fn given_forest_when_rendering_tree_then_shows_name_and_description() {
    let text = forest_tree(&small_forest());

    assert!(text.starts_with("Electronics: Electronic devices"));
    assert!(text.contains("Computers: Desktop and laptop computers"));
    assert!(text.contains("Phones: Mobile devices"));
    let computers = text.find("Computers").unwrap();
    let phones = text.find("Phones").unwrap();
    assert!(computers < phones, "indexed children are sorted by name");
}

#[test]
fn given_chain_deeper_than_render_limit_when_rendering_tree_then_summarizes_rest() {
    // Arrange
    let records: Vec<Record> = (0..100)
        .map(|i| Record::new(i, format!("N{i}"), "link", (i > 0).then(|| i - 1)))
        .collect();
    let forest = build_indexed(&records);
    let last_drawn = MAX_RENDER_DEPTH as i64 - 1;

    // Act
    let text = forest_tree(&forest);

    // Assert
    assert!(text.contains(&format!("N{last_drawn}: link")));
    assert!(!text.contains(&format!("N{}: link", last_drawn + 1)));
    assert!(text.contains(&format!(
        "... {} more categories below",
        99 - last_drawn
    )));
}

#[test]
fn given_deep_forest_when_analyzing_and_breaking_down_then_covers_every_level() {
    let records: Vec<Record> = (0..20_000)
        .map(|i| Record::new(i, format!("N{i}"), "link", (i > 0).then(|| i - 1)))
        .collect();
    let forest = build_indexed(&records);

    assert!(tree_analysis(&forest).contains("Maximum Tree Depth: 20000 levels"));
    assert!(level_breakdown(&forest, 1).contains("Level 20000:"));
    assert!(!forest_tree(&forest).is_empty());
}

#[test]
fn given_forest_when_analyzing_then_reports_depth_and_total() {
    let text = tree_analysis(&small_forest());

    assert!(text.contains("Maximum Tree Depth: 2 levels"));
    assert!(text.contains("Total Categories: 3"));
}

#[rstest]
#[case(0, "Level 1 - Root Categories")]
#[case(1, "Level 2 - Main Subcategories")]
#[case(2, "Level 3 - Detailed Categories")]
#[case(3, "Level 4 - Specific Items")]
#[case(4, "Level 5")]
#[case(9, "Level 10")]
fn given_level_when_naming_then_uses_friendly_label(#[case] level: usize, #[case] expected: &str) {
    assert_eq!(level_name(level), expected);
}

#[test]
fn given_more_nodes_than_preview_when_breaking_down_then_elides_rest() {
    // Arrange
    let records: Vec<Record> = (1..=5)
        .map(|i| Record::root(i, format!("Root {i}"), "r"))
        .collect();
    let forest = build_indexed(&records);

    // Act
    let text = level_breakdown(&forest, 3);

    // Assert
    assert!(text.contains("Level 1 - Root Categories:"));
    assert!(text.contains("   Count: 5 items"));
    assert!(text.contains("      • Root 1"));
    assert!(text.contains("      • Root 3"));
    assert!(!text.contains("Root 4"));
    assert!(text.contains("      ... and 2 more"));
}

#[test]
fn given_preview_covering_level_when_breaking_down_then_no_ellipsis() {
    let text = level_breakdown(&small_forest(), 3);

    assert!(text.contains("Level 2 - Main Subcategories:"));
    assert!(text.contains("   Count: 2 items"));
    assert!(!text.contains("more"));
}

#[test]
fn given_char_when_building_rule_then_has_fixed_width() {
    assert_eq!(rule('=').chars().count(), RULE_WIDTH);
}
