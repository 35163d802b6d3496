use super::*;

// =============================================================
// Queue bookkeeping
// =============================================================

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "saved");
    let b = state.push(ToastKind::Error, "failed");
    assert!(b > a);
    assert_eq!(state.toasts().len(), 2);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "one");
    let b = state.push(ToastKind::Success, "two");
    state.dismiss(a);
    let remaining: Vec<u64> = state.toasts().iter().map(|t| t.id).collect();
    assert_eq!(remaining, vec![b]);
}

#[test]
fn dismiss_unknown_id_is_a_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Error, "only");
    state.dismiss(999);
    assert_eq!(state.toasts().len(), 1);
}
