use pretty_assertions::assert_eq;
use shared_types::{directory, LoginPhase, LoginRequest, MSG_BAD_CREDENTIALS};

use crate::common::*;

#[test]
fn rejected_attempt_can_be_retried() {
    let bad = LoginRequest::new("Agent", "agent@example.com", "nope");
    let phase = LoginPhase::Idle.submit(&bad, directory());
    assert_eq!(phase.error().map(|e| e.message.as_str()), Some(MSG_BAD_CREDENTIALS));

    let retry = phase.clone().begin();
    assert!(retry.is_submitting());

    let good = LoginRequest::new("Agent", "agent@example.com", "agent123");
    let phase = phase.submit(&good, directory());
    assert_eq!(phase.success().map(|s| s.display_name.as_str()), Some("Ravi Verma"));
}

#[test]
fn success_does_not_restart() {
    let ok = login("Customer", "customer@example.com", "cust123").unwrap();
    let phase = LoginPhase::Success(ok.clone());
    assert_eq!(phase.clone().begin(), LoginPhase::Success(ok.clone()));

    let bad = LoginRequest::new("Customer", "customer@example.com", "wrong");
    assert_eq!(phase.submit(&bad, directory()), LoginPhase::Success(ok));
}

#[test]
fn resolve_outside_submitting_is_ignored() {
    let ok = login("Manager", "manager@example.com", "mgr123");
    assert_eq!(LoginPhase::Idle.resolve(ok), LoginPhase::Idle);
}

#[test]
fn dismissing_the_alert_returns_to_idle() {
    let bad = LoginRequest::new("", "", "");
    let phase = LoginPhase::Idle.submit(&bad, directory());
    assert!(phase.error().is_some_and(|e| e.is_validation()));
    assert_eq!(phase.reset(), LoginPhase::Idle);
}
