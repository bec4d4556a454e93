use pretty_assertions::assert_eq;
use shared_types::{submit_support_request, IssueType, SupportRequest};

use crate::common::*;

#[test]
fn valid_request_is_confirmed() {
    let done = submit_support_request(&support_request(), "Sanjay J").unwrap();
    assert_eq!(done.greeting_name, "Meera Nair");
    assert_eq!(done.issue_type, IssueType::Billing);
}

#[test]
fn every_field_is_required() {
    let err = submit_support_request(&SupportRequest::default(), "Sanjay J").unwrap_err();
    assert!(err.is_validation());
    for field in ["name", "email", "issue_type", "description"] {
        assert!(err.field(field).is_some(), "{field} was not reported");
    }
}

#[test]
fn bad_email_is_rejected() {
    let request = SupportRequest {
        email: "meera-at-example".to_string(),
        ..support_request()
    };
    let err = submit_support_request(&request, "Sanjay J").unwrap_err();
    assert_eq!(err.field("email"), Some("Please enter a valid email address"));
    assert!(err.field("name").is_none());
}

#[test]
fn unknown_issue_type_is_rejected() {
    let request = SupportRequest {
        issue_type: "refund".to_string(),
        ..support_request()
    };
    let err = submit_support_request(&request, "Sanjay J").unwrap_err();
    assert!(err.field("issue_type").is_some());
}

#[test]
fn blank_name_falls_back_to_signed_in_user() {
    let request = SupportRequest {
        name: "   ".to_string(),
        ..support_request()
    };
    let done = submit_support_request(&request, "Sanjay J").unwrap();
    assert_eq!(done.greeting_name, "Sanjay J");
}

#[test]
fn issue_types_round_trip_their_form_values() {
    for issue in IssueType::ALL {
        assert_eq!(IssueType::from_value(issue.value()), Some(issue));
    }
}
