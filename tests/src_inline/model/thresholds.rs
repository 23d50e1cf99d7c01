use super::*;

#[test]
fn test_classify_boundaries_are_inclusive() {
    assert_eq!(classify(Some(100.0)), ResistanceBand::Intrinsic);
    assert_eq!(classify(Some(120.0)), ResistanceBand::Intrinsic);
    assert_eq!(classify(Some(20.0)), ResistanceBand::High);
    assert_eq!(classify(Some(99.9)), ResistanceBand::High);
    assert_eq!(classify(Some(19.9)), ResistanceBand::Medium);
    assert_eq!(classify(Some(10.0)), ResistanceBand::Medium);
    assert_eq!(classify(Some(9.9)), ResistanceBand::Low);
    assert_eq!(classify(Some(0.0)), ResistanceBand::Low);
}

#[test]
fn test_classify_missing_value() {
    assert_eq!(classify(None), ResistanceBand::NoData);
}
