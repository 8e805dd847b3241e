use integration_tests::harness::{CapturedEvent, init_test_tracing, run_fixture};
use std::sync::{Arc, Mutex};

#[test]
fn scan_logs_start_and_completion() {
    // Arrange
    let events: Arc<Mutex<Vec<CapturedEvent>>> = Arc::default();
    init_test_tracing(events.clone());

    // Act
    run_fixture("sample.log", 3, |o| o);

    // Assert
    let events = events.lock().unwrap();

    let start = events
        .iter()
        .find(|e| e.message() == Some("scanning access log"))
        .expect("missing start event");
    assert_eq!(start.level, tracing::Level::INFO);
    assert_eq!(start.field("results"), Some("3"));
    assert_eq!(start.field("strategy"), Some("LastBelow"));

    let done = events
        .iter()
        .find(|e| e.message() == Some("scan complete"))
        .expect("missing completion event");
    assert_eq!(done.field("lines"), Some("8"));
    assert_eq!(done.field("issues"), Some("2"));

    let admitted = events
        .iter()
        .filter(|e| e.message() == Some("admitted"))
        .count();
    assert_eq!(admitted, 16);
}
