// crates/shared-kernel/tests/mtime_ordering.rs
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use gorun_shared_kernel::ModificationTime;

fn at(nanos: u64) -> ModificationTime {
    ModificationTime::from(UNIX_EPOCH + Duration::from_nanos(nanos))
}

#[test]
fn ordering_is_chronological() {
    assert!(at(2_000_000_001) > at(2_000_000_000));
    assert!(at(10) < at(11));
    assert_eq!(at(42), at(42));
}

#[test]
fn system_time_roundtrip_keeps_nanos() {
    let t = UNIX_EPOCH + Duration::new(1_700_000_000, 123_456_789);
    let a = ModificationTime::from(t);
    let b = ModificationTime::from(t);
    assert_eq!(a, b);
    assert!(ModificationTime::from(t + Duration::from_nanos(1)) > a);
}

#[test]
fn now_converts_cleanly() {
    let _ = ModificationTime::from(SystemTime::now());
}
