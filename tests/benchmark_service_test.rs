//! Tests for BenchmarkService and the ServiceContainer wiring

use std::sync::Arc;

use rstest::rstest;

use cattree::application::services::BenchmarkService;
use cattree::config::Settings;
use cattree::domain::{sample_catalog, synthetic_catalog, Record, Strategy, SyntheticShape};
use cattree::infrastructure::di::ServiceContainer;
use cattree::infrastructure::{MemoryRecordStore, RecordStore, SqliteRecordStore};
use cattree::util::testing;

fn seeded_container() -> ServiceContainer {
    testing::init_test_setup();
    let store: Arc<dyn RecordStore> = Arc::new(SqliteRecordStore::in_memory().unwrap());
    let container = ServiceContainer::with_store(Settings::default(), store);
    container
        .seed_service()
        .seed(&sample_catalog(), false)
        .unwrap();
    container
}

#[test]
fn given_sample_catalog_when_comparing_then_both_forests_match() {
    // Arrange
    let container = seeded_container();

    // Act
    let comparison = container.benchmark_service().compare().unwrap();

    // Assert
    assert!(comparison.same_relationships());
    assert_eq!(
        comparison.scan.value.canonical(),
        comparison.indexed.value.canonical()
    );
    for strategy in Strategy::ALL {
        let forest = &comparison.get(strategy).value;
        assert_eq!(forest.node_count(), 35, "{strategy}");
        assert_eq!(forest.root_count(), 3, "{strategy}");
        assert_eq!(forest.max_depth(), 4, "{strategy}");
    }
}

#[test]
fn given_sample_catalog_when_building_indexed_then_roots_are_sorted_by_name() {
    let container = seeded_container();

    let timed = container
        .benchmark_service()
        .build(Strategy::Indexed)
        .unwrap();

    let roots: Vec<&str> = timed.value.roots().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(roots, vec!["Clothing", "Electronics", "Food & Beverages"]);
}

#[test]
fn given_sample_catalog_when_building_scan_then_roots_keep_insertion_order() {
    let container = seeded_container();

    let timed = container.benchmark_service().build(Strategy::Scan).unwrap();

    let roots: Vec<&str> = timed.value.roots().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(roots, vec!["Electronics", "Clothing", "Food & Beverages"]);
}

#[rstest]
#[case(Strategy::Scan)]
#[case(Strategy::Indexed)]
fn given_empty_store_when_building_then_forest_is_empty(#[case] strategy: Strategy) {
    let service = BenchmarkService::new(Arc::new(MemoryRecordStore::new()));

    let timed = service.build(strategy).unwrap();

    assert!(timed.value.is_empty());
    assert!(timed.elapsed_ms() < 1_000);
}

#[test]
fn given_store_with_orphan_when_comparing_then_both_drop_it() {
    // Arrange
    let store = MemoryRecordStore::with_records(vec![
        Record::root(1, "Root", "r"),
        Record::new(2, "Child", "c", Some(1)),
        Record::new(3, "Lost", "dangling", Some(999)),
    ]);
    let service = BenchmarkService::new(Arc::new(store));

    // Act
    let comparison = service.compare().unwrap();

    // Assert
    assert!(comparison.same_relationships());
    assert_eq!(comparison.scan.value.node_count(), 2);
    assert_eq!(comparison.indexed.value.node_count(), 2);
}

#[test]
fn given_synthetic_catalog_when_comparing_then_node_counts_match_shape() {
    // Arrange
    let shape = SyntheticShape::new(3, 4).unwrap();
    let store: Arc<dyn RecordStore> = Arc::new(SqliteRecordStore::in_memory().unwrap());
    let container = ServiceContainer::with_store(Settings::default(), store);
    container
        .seed_service()
        .seed(&synthetic_catalog(shape), false)
        .unwrap();

    // Act
    let comparison = container.benchmark_service().compare().unwrap();

    // Assert
    assert_eq!(comparison.scan.value.node_count(), shape.node_count());
    assert_eq!(comparison.indexed.value.max_depth(), 4);
    assert!(comparison.same_relationships());
}
