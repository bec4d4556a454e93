use serde::{Deserialize, Serialize};

/// A support ticket as shown in the agent work list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    pub id: u32,
    pub subject: String,
    pub root_cause: String,
    pub steps: Vec<String>,
}

impl Ticket {
    fn new(id: u32, subject: &str, root_cause: &str, steps: &[&str]) -> Self {
        Self {
            id,
            subject: subject.to_string(),
            root_cause: root_cause.to_string(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Sample queue for the agent dashboard.
pub fn agent_tickets() -> Vec<Ticket> {
    vec![
        Ticket::new(
            1,
            "Cannot login to account",
            "Incorrect credentials or account locked due to multiple failed login attempts. \
             The account may also be pending verification or temporarily disabled by the \
             system admin for security reasons.",
            &[
                "Verify the username/email",
                "Check if account is locked",
                "Reset password if needed",
                "Ensure email verification is complete",
            ],
        ),
        Ticket::new(
            2,
            "Payment not processed",
            "Payment gateway timeout or failure due to connectivity issues. The transaction \
             might have been declined by the bank or flagged for review due to unusual activity.",
            &[
                "Check payment logs",
                "Retry transaction",
                "Notify customer of failure",
                "Confirm with bank if transaction was blocked",
                "Verify user payment method",
            ],
        ),
        Ticket::new(
            3,
            "App crashes on launch",
            "Corrupted cache or outdated app version. There might also be compatibility issues \
             with the operating system version or a conflict with another app running on the device.",
            &[
                "Clear app cache",
                "Update app to latest version",
                "Restart device",
            ],
        ),
        Ticket::new(
            4,
            "Unable to reset password",
            "Password reset link might have expired or the email did not reach the user's inbox \
             due to spam filters. Additionally, the account may have special security restrictions \
             requiring admin intervention.",
            &["Check email spam/junk folder", "Send a new password reset link"],
        ),
        Ticket::new(
            5,
            "Order not showing in account",
            "Order details might not have synced due to server delay or temporary database \
             inconsistencies. It could also be caused by an incomplete order submission or \
             network issues during checkout.",
            &[
                "Verify order confirmation email",
                "Check backend order logs",
                "Resync order data",
            ],
        ),
        Ticket::new(
            6,
            "Error 404 on accessing profile page",
            "The profile page URL might be incorrect, or the server routing configuration is \
             misaligned. Additionally, the user's session might have expired causing access denial.",
            &[
                "Verify URL",
                "Check server routing configuration",
                "Clear browser cache and retry",
                "Refresh session tokens",
            ],
        ),
        Ticket::new(
            7,
            "Notifications not received",
            "Push notifications may be blocked by device settings or the app may not have the \
             required permissions. There could also be delays in the notification service or \
             network connectivity issues.",
            &["Check device notification settings", "Verify app permissions"],
        ),
        Ticket::new(
            8,
            "Data export failing",
            "Export may fail due to large dataset size, insufficient user permissions, or server \
             timeout. It could also occur if there's a format mismatch or a temporary service outage.",
            &[
                "Verify user permissions",
                "Try exporting smaller dataset",
                "Check server logs for errors",
                "Ensure correct export format",
                "Retry export during off-peak hours",
            ],
        ),
    ]
}

/// Look up a ticket by id within a list.
pub fn find_ticket(tickets: &[Ticket], id: u32) -> Option<&Ticket> {
    tickets.iter().find(|t| t.id == id)
}
