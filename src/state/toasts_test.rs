use super::*;

// =============================================================
// Push / dismiss
// =============================================================

#[test]
fn push_appends_with_distinct_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "one", true);
    let b = state.push(ToastKind::Error, "two", true);
    assert_ne!(a, b);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].message, "one");
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "keep", true);
    let b = state.push(ToastKind::Warning, "drop", true);
    state.dismiss(b);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, a);
}

#[test]
fn dismiss_unknown_id_is_a_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "keep", false);
    state.dismiss(Uuid::new_v4());
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn dismissals_are_independent_of_insertion_order() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a", true);
    let b = state.push(ToastKind::Info, "b", true);
    let c = state.push(ToastKind::Info, "c", true);
    state.dismiss(a);
    state.dismiss(c);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

// =============================================================
// ToastKind
// =============================================================

#[test]
fn kind_classes_are_distinct() {
    let kinds = [
        ToastKind::Success,
        ToastKind::Error,
        ToastKind::Warning,
        ToastKind::Info,
    ];
    for (i, a) in kinds.iter().enumerate() {
        for (j, b) in kinds.iter().enumerate() {
            if i != j {
                assert_ne!(a.class(), b.class());
            }
        }
    }
}
