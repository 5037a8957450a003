use super::*;
use records::MailType;

#[test]
fn every_known_status_has_a_specific_class() {
    for mail_type in [MailType::Masuk, MailType::Keluar] {
        for label in mail_type.status_options() {
            assert_ne!(status_badge_class(label), "badge", "{label}");
        }
    }
}

#[test]
fn pending_and_done_differ() {
    assert_ne!(status_badge_class("Draf"), status_badge_class("Terkirim"));
    assert_eq!(status_badge_class("Draf"), status_badge_class("Belum Disposisi"));
}

#[test]
fn unknown_status_is_neutral() {
    assert_eq!(status_badge_class("Lainnya"), "badge");
}
