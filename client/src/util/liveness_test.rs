use super::*;

#[test]
fn new_guard_is_alive() {
    assert!(Liveness::new().is_alive());
}

#[test]
fn retire_is_visible_through_clones() {
    let guard = Liveness::new();
    let spawned = guard.clone();
    guard.retire();
    assert!(!spawned.is_alive());
}
