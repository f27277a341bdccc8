// crates/shared-kernel/tests/serde_roundtrip.rs
use textfix_shared_kernel::{LineCount, TabWidth};

#[test]
fn linecount_serializes_transparently() {
    let json = serde_json::to_string(&LineCount::new(12)).unwrap();
    assert_eq!(json, "12");
    let back: LineCount = serde_json::from_str(&json).unwrap();
    assert_eq!(back, LineCount::new(12));
}

#[test]
fn tab_width_serializes_transparently() {
    let json = serde_json::to_string(&TabWidth::DEFAULT).unwrap();
    assert_eq!(json, "4");
    let back: TabWidth = serde_json::from_str(&json).unwrap();
    assert_eq!(back, TabWidth::DEFAULT);
}
