use proclets::ids::{new_uid, next_timestamp};
use test_log::test;

#[test]
fn timestamps_strictly_increase() {
    let a = next_timestamp();
    let b = next_timestamp();
    let c = next_timestamp();
    assert!(a < b);
    assert!(b < c);
}

#[test]
fn uids_are_unique() {
    assert_ne!(new_uid(), new_uid());
}
