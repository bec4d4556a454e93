mod breaches;
mod kpis;
mod trends;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLogOut;
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::{Button, ButtonVariant, PageActions, PageHeader, PageSubtitle, PageTitle};

use crate::routes::logout;
use crate::session::use_session;
use breaches::{BreachPanel, SentimentPanel};
use kpis::KpiRow;
use trends::VolumePanel;

/// Manager dashboard: weekly KPIs, ticket volume, sentiment and SLA breaches.
#[component]
pub fn ManagerView() -> Element {
    let session = use_session();
    let greeting = session.greeting_for(Role::Manager);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./manager.css") }

        div { class: "desk-view",
            PageHeader {
                div {
                    PageTitle { "Manager Dashboard" }
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

            main { class: "desk-main manager-grid",
                KpiRow {}
                VolumePanel {}
                div { class: "manager-row",
                    SentimentPanel {}
                    BreachPanel {}
                }
            }
        }
    }
}
