use pretty_assertions::assert_eq;
use shared_types::{Destination, Role, MSG_BAD_CREDENTIALS, MSG_INVALID_EMAIL, MSG_MISSING_FIELDS};

use crate::common::*;

// ── Successful logins ───────────────────────────────────────────────

#[test]
fn every_role_signs_in_with_its_own_credentials() {
    for (role, email, password, name) in ACCOUNTS {
        let ok = login(role.as_str(), email, password).unwrap();
        assert_eq!(ok.role, role);
        assert_eq!(ok.display_name, name);
        assert_eq!(ok.destination, role.destination());
    }
}

#[test]
fn agent_login_goes_to_agent_view() {
    let ok = login("Agent", "agent@example.com", "agent123").unwrap();
    assert_eq!(ok.destination, Destination::AgentView);
    assert_eq!(ok.destination.label(), "agent view");
    assert_eq!(ok.destination.path(), "/agent");
    assert_eq!(ok.display_name, "Ravi Verma");
}

// ── Authentication failures ─────────────────────────────────────────

#[test]
fn wrong_password_is_rejected_for_every_role() {
    for (role, email, password, _) in ACCOUNTS {
        let wrong = format!("{password}x");
        let err = login(role.as_str(), email, &wrong).unwrap_err();
        assert!(err.is_auth(), "{role} accepted a wrong password");
        assert_eq!(err.message, MSG_BAD_CREDENTIALS);
    }
}

#[test]
fn manager_with_wrong_password() {
    let err = login("Manager", "manager@example.com", "wrong").unwrap_err();
    assert!(err.is_auth());
}

#[test]
fn credentials_of_another_role_do_not_work() {
    let err = login("Manager", "agent@example.com", "agent123").unwrap_err();
    assert!(err.is_auth());

    let err = login("Customer", "manager@example.com", "mgr123").unwrap_err();
    assert!(err.is_auth());
}

#[test]
fn email_comparison_is_case_sensitive() {
    let err = login("Agent", "Agent@example.com", "agent123").unwrap_err();
    assert!(err.is_auth());
}

// ── Validation failures ─────────────────────────────────────────────

#[test]
fn missing_role_is_a_validation_error() {
    let err = login("", "x@y.com", "z").unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.message, MSG_MISSING_FIELDS);
    assert!(err.field("role").is_some());
    assert!(err.field("email").is_none());
}

#[test]
fn malformed_emails_fail_validation_whatever_the_password() {
    for email in ["agent.example.com", "agent@", "@example.com", "agent@example", "a b@c.com"] {
        for password in ["agent123", "nope"] {
            let err = login("Agent", email, password).unwrap_err();
            assert!(err.is_validation(), "{email:?} was not rejected as malformed");
            assert_eq!(err.field("email"), Some(MSG_INVALID_EMAIL));
        }
    }
}

#[test]
fn role_parsing_round_trips_labels() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
    assert_eq!(Role::parse("Admin"), None);
}
