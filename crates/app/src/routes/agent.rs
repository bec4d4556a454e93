use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdTicket};
use dioxus_free_icons::Icon;
use shared_types::{agent_tickets, find_ticket, Role, Ticket};
use shared_ui::{
    Accordion, AccordionContent, AccordionItem, AccordionTrigger, Button, ButtonVariant,
    PageActions, PageHeader, PageSubtitle, PageTitle, Separator,
};

use crate::routes::logout;
use crate::session::use_session;

/// Agent workspace: ticket queue on the left, troubleshooting guide for the
/// selected ticket on the right.
#[component]
pub fn AgentView() -> Element {
    let session = use_session();
    let greeting = session.greeting_for(Role::Agent);
    let tickets = use_hook(agent_tickets);
    let first_id = tickets.first().map(|t| t.id);
    let mut selected = use_signal(move || first_id);

    let current = selected().and_then(|id| find_ticket(&tickets, id)).cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./agent.css") }

        div { class: "desk-view",
            PageHeader {
                div {
                    PageTitle { "Agent Workspace" }
                    PageSubtitle { "Welcome, {greeting}" }
                }
                PageActions {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| logout(session),
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Logout"
                    }
                }
            }

            div { class: "agent-panes",
                nav { class: "agent-ticket-list", "aria-label": "Tickets",
                    for ticket in tickets.iter() {
                        button {
                            key: "{ticket.id}",
                            r#type: "button",
                            class: "agent-ticket",
                            "aria-selected": if selected() == Some(ticket.id) { "true" } else { "false" },
                            onclick: {
                                let id = ticket.id;
                                move |_| selected.set(Some(id))
                            },
                            span { class: "agent-ticket-subject", "{ticket.subject}" }
                            span { class: "agent-ticket-id", "Ticket ID: {ticket.id}" }
                        }
                    }
                }

                section { class: "agent-ticket-detail",
                    match current {
                        Some(ticket) => rsx! {
                            TicketDetail { key: "{ticket.id}", ticket: ticket.clone() }
                        },
                        None => rsx! {
                            p { class: "agent-empty", "Select a ticket to view details" }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn TicketDetail(ticket: Ticket) -> Element {
    rsx! {
        h2 { class: "agent-detail-title",
            Icon::<LdTicket> { icon: LdTicket, width: 20, height: 20 }
            "{ticket.subject}"
        }
        Separator {}

        h3 { class: "agent-detail-heading", "Root Cause:" }
        p { class: "agent-root-cause", "{ticket.root_cause}" }

        h3 { class: "agent-detail-heading", "Troubleshooting Steps:" }
        Accordion { allow_multiple_open: true,
            for (index, step) in ticket.steps.iter().enumerate() {
                AccordionItem { key: "{index}", index: index,
                    AccordionTrigger { "Step {index + 1}" }
                    AccordionContent {
                        p { "{step}" }
                    }
                }
            }
        }
    }
}
