use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdEyeOff, LdHeadphones};
use dioxus_free_icons::Icon;
use shared_types::{directory, LoginPhase, LoginRequest, Role};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, ConfirmDialog, FormSelect,
    Input, Label,
};
use std::collections::HashMap;

use crate::routes::Route;
use crate::session::use_session;

/// Text of the blocking alert, shown while the attempt is rejected.
fn rejection_alert(phase: &LoginPhase) -> Option<String> {
    phase.error().map(|err| err.message.clone())
}

/// Sign-in page: pick a role, enter email and password, land on that
/// role's dashboard.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut role = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut phase = use_signal(LoginPhase::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let request = LoginRequest::new(role(), email(), password());
        let next = phase.peek().clone().submit(&request, directory());

        match &next {
            LoginPhase::Success(success) => {
                field_errors.set(HashMap::new());
                session.sign_in(success.clone());
                navigator().push(Route::from(success.destination));
            }
            LoginPhase::Rejected(err) => field_errors.set(err.field_errors.clone()),
            _ => {}
        }
        phase.set(next);
    };

    let alert = rejection_alert(&phase.read());
    let alert_open = alert.is_some();
    let alert_message = alert.unwrap_or_default();
    let submitting = phase.read().is_submitting();
    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            div { class: "login-brand",
                Icon::<LdHeadphones> { icon: LdHeadphones, width: 28, height: 28 }
                span { "Support Desk" }
            }
            p { class: "login-intro",
                "Please enter your username and password to access your account."
            }

            Card {
                class: "login-card",

                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Choose the account type you want to use" }
                }

                CardContent {
                    form { class: "login-form", novalidate: true, onsubmit: handle_login,
                        FormSelect {
                            id: "role",
                            label: "Select Type of User",
                            required: true,
                            value: role(),
                            error: error_for("role"),
                            onchange: move |e: FormEvent| role.set(e.value()),
                            option { value: "", disabled: true, "Select a role" }
                            for r in Role::ALL {
                                option { key: "{r}", value: r.as_str(), "{r}" }
                            }
                        }

                        div { class: "login-field",
                            Label { html_for: "email", "Email ID" span { class: "desk-required", " *" } }
                            Input {
                                id: "email",
                                input_type: "email",
                                placeholder: "Enter your email",
                                value: email(),
                                error: error_for("email"),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }

                        div { class: "login-field",
                            Label { html_for: "password", "Password" span { class: "desk-required", " *" } }
                            div { class: "login-password",
                                Input {
                                    id: "password",
                                    input_type: if show_password() { "text".to_string() } else { "password".to_string() },
                                    placeholder: "Enter your password",
                                    value: password(),
                                    error: error_for("password"),
                                    on_input: move |e: FormEvent| password.set(e.value()),
                                }
                                button {
                                    r#type: "button",
                                    class: "login-password-toggle",
                                    "aria-label": if show_password() { "Hide password" } else { "Show password" },
                                    onclick: move |_| show_password.set(!show_password()),
                                    if show_password() {
                                        Icon::<LdEyeOff> { icon: LdEyeOff, width: 16, height: 16 }
                                    } else {
                                        Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                                    }
                                }
                            }
                        }

                        Button {
                            class: "login-submit",
                            button_type: "submit",
                            loading: submitting,
                            "Login"
                        }
                    }
                }
            }
        }

        ConfirmDialog {
            open: alert_open,
            on_open_change: move |open: bool| {
                if !open {
                    let idle = phase.peek().clone().reset();
                    phase.set(idle);
                }
            },
            title: "Unable to sign in",
            description: alert_message,
        }
    }
}
