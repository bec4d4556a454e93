use pretty_assertions::assert_eq;
use shared_types::{
    agent_breach_summaries, agent_tickets, breach_report, find_ticket, kpi_cards, sentiment_distribution,
    sentiment_total, top_breaches, volume_series, Granularity, KpiCard, PeriodDate, TrendDirection,
};

use crate::common::*;

fn card(title: &str) -> KpiCard {
    kpi_cards().into_iter().find(|c| c.title == title).unwrap()
}

// ── KPI cards ───────────────────────────────────────────────────────

#[test]
fn sla_breaches_falling_is_good() {
    let sla = card("SLA Breaches (Today)");
    assert_eq!(sla.direction(), TrendDirection::Down);
    assert!(sla.is_improvement());
    assert_eq!(sla.difference_label(), "↓ 3");
}

#[test]
fn total_tickets_rising_is_good() {
    let total = card("Total Tickets");
    assert_eq!(total.direction(), TrendDirection::Up);
    assert!(total.is_improvement());
    assert_eq!(total.current_label(), "248");
    assert_eq!(total.difference_label(), "↑ 28");
}

#[test]
fn csat_difference_carries_its_unit() {
    let csat = card("CSAT Score");
    assert_close(csat.difference(), 10.0);
    assert_eq!(csat.current_label(), "95%");
    assert_eq!(csat.last_week_label(), "85%");
    assert_eq!(csat.difference_label(), "↑ 10%");
}

#[test]
fn resolution_time_keeps_one_decimal() {
    let avg = card("Avg Resolution Time");
    assert_eq!(avg.current_label(), "4.6");
    assert_eq!(avg.difference_label(), "↓ 4.6");
}

// ── Breaches ────────────────────────────────────────────────────────

#[test]
fn top_breaches_are_sorted_and_capped_at_five() {
    let mut summaries = agent_breach_summaries();
    summaries.extend(agent_breach_summaries());
    let top = top_breaches(&summaries, 5);
    assert_eq!(top.len(), 5);
    assert!(top.windows(2).all(|w| w[0].breaches >= w[1].breaches));
    assert_eq!(top[0].agent, "John Doe");
}

#[test]
fn breach_report_totals_its_delays() {
    let report = breach_report();
    assert_eq!(report.name, "John Doe");
    assert_eq!(report.breaches.len(), 3);
    assert_close(report.total_delay_hours(), 7.0);
}

// ── Sentiment and volume ────────────────────────────────────────────

#[test]
fn sentiment_total_matches_ticket_count() {
    let slices = sentiment_distribution();
    assert_eq!(sentiment_total(&slices), 248);
    assert_eq!(card("Total Tickets").current, f64::from(sentiment_total(&slices)));
}

#[test]
fn every_volume_period_parses() {
    for granularity in [Granularity::Daily, Granularity::Monthly] {
        for point in volume_series(granularity) {
            assert!(PeriodDate::parse(&point.period).is_some(), "{} did not parse", point.period);
        }
    }
}

// ── Agent tickets ───────────────────────────────────────────────────

#[test]
fn tickets_are_found_by_id() {
    let tickets = agent_tickets();
    let first = &tickets[0];
    assert_eq!(find_ticket(&tickets, first.id).map(|t| &t.subject), Some(&first.subject));
    assert!(find_ticket(&tickets, u32::MAX).is_none());
    assert!(tickets.iter().all(|t| !t.steps.is_empty()));
}
