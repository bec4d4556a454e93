use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use shared_types::{agent_breach_summaries, breach_report, format_number, sentiment_distribution, top_breaches};
use shared_ui::{
    BarChart, BarDatum, Button, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, DonutChart, DonutSlice,
};

#[test]
fn breach_ranking_renders_five_bars() {
    let bars: Vec<BarDatum> = top_breaches(&agent_breach_summaries(), 5)
        .into_iter()
        .map(|s| BarDatum {
            label: s.agent,
            value: f64::from(s.breaches),
            note: None,
        })
        .collect();

    let html = dioxus_ssr::render_element(rsx! {
        BarChart { bars: bars, title: "SLA breaches by agent" }
    });
    assert_eq!(html.matches("<rect").count(), 5);
    assert!(html.contains("John Doe"));
    assert!(html.contains("Carlos M"));
}

#[test]
fn sentiment_donut_shows_total() {
    let slices: Vec<DonutSlice> = sentiment_distribution()
        .into_iter()
        .map(|s| DonutSlice {
            label: s.label,
            value: f64::from(s.value),
            color: s.color,
        })
        .collect();

    let html = dioxus_ssr::render_element(rsx! {
        DonutChart { slices: slices }
    });
    assert!(html.contains(">248<"));
    assert!(html.contains("Negative (48)"));
}

#[test]
fn breach_table_lists_every_ticket() {
    let report = breach_report();
    let html = dioxus_ssr::render_element(rsx! {
        DataTable { caption: "SLA breaches",
            DataTableHeader {
                DataTableColumn { "Ticket ID" }
                DataTableColumn { numeric: true, "Delay (hrs)" }
            }
            DataTableBody {
                for breach in report.breaches.iter() {
                    DataTableRow {
                        DataTableCell { "{breach.ticket_id}" }
                        DataTableCell { numeric: true, "{format_number(breach.delay_hours)}" }
                    }
                }
            }
        }
    });
    for id in ["TCK-101", "TCK-102", "TCK-103"] {
        assert!(html.contains(id), "{id} missing");
    }
    assert!(html.contains(">2.5<"));
}

#[test]
fn loading_button_is_disabled_and_busy() {
    let html = dioxus_ssr::render_element(rsx! {
        Button { loading: true, button_type: "submit", "Login" }
    });
    assert!(html.contains("desk-button-spinner"));
    assert!(html.contains("aria-busy=\"true\""));
    assert!(html.contains("disabled"));
}
