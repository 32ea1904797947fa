use super::*;

#[test]
fn fresh_scope_is_live() {
    assert!(!CancelScope::new().is_cancelled());
}

#[test]
fn cancellation_is_observed_by_clones() {
    let scope = CancelScope::new();
    let handle = scope.clone();
    scope.cancel();
    assert!(handle.is_cancelled());
}

#[test]
fn cancel_is_idempotent() {
    let scope = CancelScope::new();
    scope.cancel();
    scope.cancel();
    assert!(scope.is_cancelled());
}

#[test]
fn scopes_are_independent() {
    let a = CancelScope::new();
    let b = CancelScope::new();
    a.cancel();
    assert!(!b.is_cancelled());
}
