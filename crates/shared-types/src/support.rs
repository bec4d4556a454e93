use crate::{is_valid_email, AppError};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Category picked on the customer "Need Help?" form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IssueType {
    Technical,
    Billing,
    Feedback,
    Other,
}

impl IssueType {
    pub const ALL: [IssueType; 4] = [
        IssueType::Technical,
        IssueType::Billing,
        IssueType::Feedback,
        IssueType::Other,
    ];

    /// Form value for the `<option>`.
    pub fn value(&self) -> &'static str {
        match self {
            IssueType::Technical => "technical",
            IssueType::Billing => "billing",
            IssueType::Feedback => "feedback",
            IssueType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IssueType::Technical => "Technical Issue",
            IssueType::Billing => "Billing Query",
            IssueType::Feedback => "Feedback / Suggestion",
            IssueType::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

/// Raw values from the support request form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct SupportRequest {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Email address is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Pick an issue type"))]
    pub issue_type: String,
    #[validate(length(min = 1, message = "Describe your issue"))]
    pub description: String,
}

/// Confirmation shown after a request is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupportConfirmation {
    /// Name used in the thank-you line.
    pub greeting_name: String,
    pub issue_type: IssueType,
}

/// Validate a support request. `fallback_name` is the signed-in display
/// name, used when the form's own name field is blank after trimming.
pub fn submit_support_request(
    request: &SupportRequest,
    fallback_name: &str,
) -> Result<SupportConfirmation, AppError> {
    let mut err = match request.validate() {
        Ok(()) => None,
        Err(errors) => Some(AppError::from(errors)),
    };

    if !request.email.is_empty() && !is_valid_email(&request.email) {
        let e = err.get_or_insert_with(|| AppError::validation("Validation failed", Default::default()));
        e.field_errors
            .insert("email".to_string(), "Please enter a valid email address".to_string());
    }

    let issue_type = IssueType::from_value(&request.issue_type);
    if !request.issue_type.is_empty() && issue_type.is_none() {
        let e = err.get_or_insert_with(|| AppError::validation("Validation failed", Default::default()));
        e.field_errors
            .insert("issue_type".to_string(), "Unknown issue type".to_string());
    }

    if let Some(err) = err {
        return Err(err);
    }
    let Some(issue_type) = issue_type else {
        return Err(AppError::invalid_field("issue_type", "Pick an issue type"));
    };

    let name = request.name.trim();
    let greeting_name = if name.is_empty() { fallback_name } else { name };
    tracing::info!(issue = issue_type.value(), "support request accepted");

    Ok(SupportConfirmation {
        greeting_name: greeting_name.to_string(),
        issue_type,
    })
}
