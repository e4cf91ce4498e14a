use super::*;

fn opened(topic: &str) -> ModalCore {
    let mut modal = ModalCore::new();
    modal.open(topic.to_owned());
    assert!(modal.shown());
    modal
}

// =============================================================
// Topic label
// =============================================================

#[test]
fn topic_label_prefers_data_attribute() {
    assert_eq!(topic_label(Some("Data Science"), Some("Learn data")), "Data Science");
}

#[test]
fn topic_label_falls_back_to_text_then_default() {
    assert_eq!(topic_label(None, Some("Web Dev")), "Web Dev");
    assert_eq!(topic_label(Some(""), Some("Web Dev")), "Web Dev");
    assert_eq!(topic_label(Some(""), Some("")), DEFAULT_TOPIC);
    assert_eq!(topic_label(None, None), DEFAULT_TOPIC);
}

// =============================================================
// Opening
// =============================================================

#[test]
fn open_records_topic_and_exposes_backdrop() {
    let mut modal = ModalCore::new();
    modal.open("Machine Learning".to_owned());
    assert_eq!(modal.phase(), ModalPhase::Opening);
    assert_eq!(modal.topic(), Some("Machine Learning"));
    assert!(modal.phase().backdrop_visible());
    assert!(modal.phase().exposed());
}

#[test]
fn shown_completes_opening_once() {
    let mut modal = ModalCore::new();
    modal.open("Cloud".to_owned());
    assert!(modal.shown());
    assert_eq!(modal.phase(), ModalPhase::Open);
    assert!(!modal.shown());
}

#[test]
fn shown_is_ignored_when_closed_before_the_frame() {
    let mut modal = ModalCore::new();
    modal.open("Cloud".to_owned());
    assert!(modal.close());
    assert!(!modal.shown());
    assert_eq!(modal.phase(), ModalPhase::Closing);
}

// =============================================================
// Closing
// =============================================================

#[test]
fn close_hides_from_assistive_tech_before_backdrop() {
    let mut modal = opened("Security");
    assert!(modal.close());
    assert_eq!(modal.phase(), ModalPhase::Closing);
    assert!(!modal.phase().exposed());
    assert!(modal.phase().backdrop_visible());
    assert!(modal.finish_close());
    assert_eq!(modal.phase(), ModalPhase::Closed);
    assert!(!modal.phase().backdrop_visible());
}

#[test]
fn every_close_trigger_reaches_the_same_hidden_state() {
    let triggers = [
        CloseTrigger::Escape,
        CloseTrigger::Backdrop { on_backdrop: true },
        CloseTrigger::Control,
    ];
    for trigger in triggers {
        let mut modal = opened("DevOps");
        assert!(modal.request_close(trigger));
        assert!(modal.finish_close());
        assert_eq!(modal.phase(), ModalPhase::Closed);
        assert!(!modal.phase().backdrop_visible());
    }
}

#[test]
fn clicks_inside_the_dialog_do_not_close() {
    let mut modal = opened("DevOps");
    assert!(!modal.request_close(CloseTrigger::Backdrop { on_backdrop: false }));
    assert_eq!(modal.phase(), ModalPhase::Open);
}

#[test]
fn close_when_already_closed_is_noop() {
    let mut modal = ModalCore::new();
    assert!(!modal.close());
    assert!(!modal.finish_close());
    assert_eq!(modal.phase(), ModalPhase::Closed);
}

#[test]
fn repeated_close_does_not_restart_hide() {
    let mut modal = opened("AI");
    assert!(modal.close());
    assert!(!modal.close());
}

#[test]
fn reopening_during_close_cancels_the_pending_hide() {
    let mut modal = opened("AI");
    modal.close();
    modal.open("Robotics".to_owned());
    assert!(!modal.finish_close());
    assert_eq!(modal.phase(), ModalPhase::Opening);
    assert_eq!(modal.topic(), Some("Robotics"));
}
