mod fixtures;
pub mod tracing;

pub use fixtures::{fixture_lines, fixture_path, run_fixture};
pub use tracing::{CapturedEvent, init_test_tracing};
