use dioxus::prelude::*;
use shared_types::{
    agent_breach_summaries, breach_report, format_number, sentiment_distribution,
    top_breaches, AgentBreachSummary, SentimentSlice,
};
use shared_ui::{
    BarChart, BarDatum, Button, Card, CardContent, CardDescription, CardHeader, CardTitle,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    DialogContent, DialogDescription, DialogFooter, DialogRoot, DialogTitle, DonutChart,
    DonutSlice,
};

/// Agents shown in the breach ranking.
const TOP_AGENTS: usize = 5;

pub fn donut_slices(slices: &[SentimentSlice]) -> Vec<DonutSlice> {
    slices
        .iter()
        .map(|s| DonutSlice {
            label: s.label.clone(),
            value: f64::from(s.value),
            color: s.color.clone(),
        })
        .collect()
}

/// Highest-breach agents first, at most [`TOP_AGENTS`].
pub fn breach_bars(summaries: &[AgentBreachSummary]) -> Vec<BarDatum> {
    top_breaches(summaries, TOP_AGENTS)
        .into_iter()
        .map(|s| BarDatum {
            note: Some(format!("avg delay {} h", format_number(s.avg_delay_hours))),
            label: s.agent,
            value: f64::from(s.breaches),
        })
        .collect()
}

#[component]
pub fn SentimentPanel() -> Element {
    let slices = use_hook(|| donut_slices(&sentiment_distribution()));

    rsx! {
        Card { class: "manager-sentiment",
            CardHeader {
                CardTitle { "Sentiment Distribution" }
            }
            CardContent {
                DonutChart { slices: slices }
            }
        }
    }
}

/// Breach ranking; the whole panel opens the detailed breach report.
#[component]
pub fn BreachPanel() -> Element {
    let bars = use_hook(|| breach_bars(&agent_breach_summaries()));
    let mut report_open = use_signal(|| false);

    rsx! {
        Card {
            class: "manager-breaches",
            onclick: move |_| report_open.set(true),
            CardHeader {
                CardTitle { "Top 5 SLA Breaches (By Agent)" }
                CardDescription { "Click for the breach report" }
            }
            CardContent {
                BarChart { bars: bars, title: "SLA breaches by agent" }
            }
        }

        BreachReportDialog {
            open: report_open(),
            on_close: move |_| report_open.set(false),
        }
    }
}

#[component]
fn BreachReportDialog(open: bool, on_close: EventHandler<()>) -> Element {
    let report = use_hook(breach_report);
    let total_delay = format_number(report.total_delay_hours());

    rsx! {
        DialogRoot {
            open: open,
            on_open_change: move |open: bool| {
                if !open {
                    on_close.call(());
                }
            },
            DialogContent { class: "desk-dialog-content manager-report",
                DialogTitle { "SLA Breach Details: {report.name}" }
                DialogDescription {
                    "Team: "
                    strong { "{report.team}" }
                    " · Tickets Handled: "
                    strong { "{report.tickets_handled}" }
                }
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Ticket ID" }
                        DataTableColumn { "Issue Type" }
                        DataTableColumn { "SLA Target" }
                        DataTableColumn { "Actual Resolution" }
                        DataTableColumn { numeric: true, "Delay (hrs)" }
                    }
                    DataTableBody {
                        for breach in report.breaches.iter() {
                            DataTableRow { key: "{breach.ticket_id}",
                                DataTableCell { "{breach.ticket_id}" }
                                DataTableCell { "{breach.issue}" }
                                DataTableCell { "{breach.target}" }
                                DataTableCell { "{breach.actual}" }
                                DataTableCell { numeric: true, "{format_number(breach.delay_hours)}" }
                            }
                        }
                    }
                }
                p { class: "manager-report-total", "Total delay: {total_delay} hrs" }
                DialogFooter {
                    Button { onclick: move |_| on_close.call(()), "Close" }
                }
            }
        }
    }
}
