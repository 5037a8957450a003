use super::*;

#[test]
fn show_sets_current_with_fresh_id() {
    let mut state = NotificationState::default();
    let first = state.show(NotificationKind::Info, "a");
    let second = state.show(NotificationKind::Error, "b");
    assert_ne!(first, second);
    let current = state.current.unwrap();
    assert_eq!(current.id, second);
    assert_eq!(current.message, "b");
    assert_eq!(current.kind, NotificationKind::Error);
}

#[test]
fn expiry_of_current_clears_it() {
    let mut state = NotificationState::default();
    let id = state.show(NotificationKind::Success, "Tersimpan");
    state.expire(id);
    assert!(state.current.is_none());
}

#[test]
fn stale_expiry_does_not_clear_newer_notification() {
    let mut state = NotificationState::default();
    let old = state.show(NotificationKind::Success, "lama");
    let new = state.show(NotificationKind::Error, "baru");
    state.expire(old);
    assert_eq!(state.current.as_ref().map(|n| n.id), Some(new));
}

#[test]
fn expiry_after_manual_dismiss_is_harmless() {
    let mut state = NotificationState::default();
    let id = state.show(NotificationKind::Info, "x");
    state.dismiss();
    state.expire(id);
    assert!(state.current.is_none());
}

#[test]
fn kinds_have_distinct_classes() {
    let classes = [
        NotificationKind::Success.css_class(),
        NotificationKind::Error.css_class(),
        NotificationKind::Info.css_class(),
    ];
    assert_ne!(classes[0], classes[1]);
    assert_ne!(classes[1], classes[2]);
}
