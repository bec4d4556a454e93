use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{submit_support_request, IssueType, Role, SupportConfirmation, SupportRequest};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    ConfirmDialog, FormSelect, Input, PageActions, PageHeader, PageTitle, Textarea, ToastOptions,
};
use std::collections::HashMap;

use crate::routes::logout;
use crate::session::use_session;

/// Customer help centre: raise a support ticket and see it acknowledged.
#[component]
pub fn CustomerView() -> Element {
    let session = use_session();
    let greeting = session.greeting_for(Role::Customer);
    let mut logout_open = use_signal(|| false);
    let mut confirmation = use_signal(|| None::<SupportConfirmation>);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./customer.css") }

        div { class: "desk-view",
            PageHeader {
                PageTitle { "Welcome, {greeting} 👋" }
                PageActions {
                    Button {
                        variant: ButtonVariant::Ghost,
                        "aria-label": "Account",
                        onclick: move |_| logout_open.set(true),
                        Icon::<LdUser> { icon: LdUser, width: 20, height: 20 }
                    }
                }
            }

            main { class: "desk-main customer-main",
                match confirmation() {
                    Some(done) => rsx! {
                        SubmittedNotice {
                            confirmation: done,
                            on_again: move |_| confirmation.set(None),
                        }
                    },
                    None => rsx! {
                        SupportForm {
                            fallback_name: greeting.clone(),
                            on_submitted: move |done| confirmation.set(Some(done)),
                        }
                    },
                }
            }
        }

        ConfirmDialog {
            open: logout_open(),
            on_open_change: move |open: bool| logout_open.set(open),
            title: "Are you sure you want to logout?",
            description: "You will need to sign in again to raise or track tickets.",
            cancel_label: "Cancel",
            confirm_label: "Logout",
            on_confirm: move |_| logout(session),
        }
    }
}

#[component]
fn SupportForm(fallback_name: String, on_submitted: EventHandler<SupportConfirmation>) -> Element {
    let toast = use_toast();
    let mut form = use_signal(SupportRequest::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match submit_support_request(&form.read(), &fallback_name) {
            Ok(done) => {
                field_errors.set(HashMap::new());
                toast.success("Ticket submitted".to_string(), ToastOptions::new());
                on_submitted.call(done);
            }
            Err(err) => {
                tracing::info!(fields = err.field_errors.len(), "support request rejected");
                field_errors.set(err.field_errors);
            }
        }
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    rsx! {
        Card { class: "customer-card",
            CardHeader {
                CardTitle { "Need Help?" }
                CardDescription { "Submit your issue below and we'll get back to you shortly." }
            }
            CardContent {
                form { class: "customer-form", novalidate: true, onsubmit: handle_submit,
                    Input {
                        label: "Full Name",
                        required: true,
                        value: form.read().name.clone(),
                        error: error_for("name"),
                        on_input: move |e: FormEvent| form.write().name = e.value(),
                    }
                    Input {
                        label: "Email Address",
                        input_type: "email",
                        required: true,
                        value: form.read().email.clone(),
                        error: error_for("email"),
                        on_input: move |e: FormEvent| form.write().email = e.value(),
                    }
                    FormSelect {
                        label: "Issue Type",
                        required: true,
                        value: form.read().issue_type.clone(),
                        error: error_for("issue_type"),
                        onchange: move |e: FormEvent| form.write().issue_type = e.value(),
                        option { value: "", disabled: true, "Select an issue type" }
                        for issue in IssueType::ALL {
                            option { key: "{issue.value()}", value: issue.value(), "{issue.label()}" }
                        }
                    }
                    Textarea {
                        label: "Describe your issue",
                        required: true,
                        rows: 4,
                        value: form.read().description.clone(),
                        error: error_for("description"),
                        on_input: move |e: FormEvent| form.write().description = e.value(),
                    }
                    Button { class: "customer-submit", button_type: "submit", "Submit Ticket" }
                }
            }
        }
    }
}

#[component]
fn SubmittedNotice(confirmation: SupportConfirmation, on_again: EventHandler<()>) -> Element {
    rsx! {
        div { class: "customer-submitted",
            div { class: "customer-submitted-icon",
                Icon::<LdCheck> { icon: LdCheck, width: 36, height: 36 }
            }
            h2 { "Ticket Submitted Successfully 🎉" }
            span { class: "customer-submitted-type", "{confirmation.issue_type.label()}" }
            p {
                "Thanks for reaching out, {confirmation.greeting_name}! Our support team will review "
                "your request and get back to you soon."
            }
            Button { onclick: move |_| on_again.call(()), "Raise Another Ticket" }
        }
    }
}
