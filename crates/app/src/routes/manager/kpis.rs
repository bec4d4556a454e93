use dioxus::prelude::*;
use shared_types::{kpi_cards, KpiCard};
use shared_ui::{
    Badge, BadgeVariant, Button, Card, CardContent, CardDescription, CardHeader, DialogContent,
    DialogDescription, DialogFooter, DialogRoot, DialogTitle,
};

/// CSS class colouring a KPI arrow.
fn trend_class(card: &KpiCard) -> &'static str {
    if card.is_improvement() {
        "trend-good"
    } else {
        "trend-bad"
    }
}

/// The four weekly KPI cards. Clicking one opens its week-over-week detail.
#[component]
pub fn KpiRow() -> Element {
    let cards = use_hook(kpi_cards);
    let mut selected = use_signal(|| None::<KpiCard>);

    rsx! {
        div { class: "manager-kpis",
            for card in cards.into_iter() {
                Card {
                    key: "{card.title}",
                    class: "manager-kpi",
                    onclick: {
                        let card = card.clone();
                        move |_| {
                            tracing::debug!(kpi = %card.title, "kpi detail opened");
                            selected.set(Some(card.clone()));
                        }
                    },
                    CardHeader {
                        CardDescription { "{card.title}" }
                    }
                    CardContent {
                        div { class: "manager-kpi-value",
                            span { class: "manager-kpi-arrow {trend_class(&card)}", "{card.direction().arrow()}" }
                            span { "{card.current_label()}" }
                        }
                        span { class: "manager-kpi-caption", "vs last week" }
                    }
                }
            }
        }

        KpiDetailDialog {
            card: selected(),
            on_close: move |_| selected.set(None),
        }
    }
}

#[component]
fn KpiDetailDialog(card: Option<KpiCard>, on_close: EventHandler<()>) -> Element {
    let open = card.is_some();

    rsx! {
        DialogRoot {
            open: open,
            on_open_change: move |open: bool| {
                if !open {
                    on_close.call(());
                }
            },
            DialogContent {
                if let Some(card) = card {
                    DialogTitle { "{card.title} Details" }
                    DialogDescription { "This week compared with the previous week." }
                    dl { class: "manager-kpi-detail",
                        dt { "Previous Week Value" }
                        dd { "{card.last_week_label()}" }
                        dt { "This Week Value" }
                        dd { "{card.current_label()}" }
                        dt { "Difference" }
                        dd {
                            Badge {
                                variant: BadgeVariant::for_trend(card.is_improvement()),
                                "{card.difference_label()}"
                            }
                        }
                    }
                }
                DialogFooter {
                    Button { onclick: move |_| on_close.call(()), "Close" }
                }
            }
        }
    }
}
