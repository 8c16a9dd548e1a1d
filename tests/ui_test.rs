//! Compile tests for the public API, built as an external crate.

use trybuild::TestCases;

#[test]
fn test_quantity_pass() {
    let t = TestCases::new();
    t.pass("tests/ui/quantity_pass.rs");
}
