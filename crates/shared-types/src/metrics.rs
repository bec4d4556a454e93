//! Manager dashboard figures: KPI cards, ticket volume, sentiment split,
//! and SLA breach rankings. All values are fixed sample data.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Which direction of change counts as an improvement for a KPI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

/// Week-over-week arrow shown on a KPI card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
}

impl TrendDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            TrendDirection::Up => "↑",
            TrendDirection::Down => "↓",
        }
    }
}

/// A headline metric compared with the previous week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KpiCard {
    pub title: String,
    pub current: f64,
    pub last_week: f64,
    pub polarity: Polarity,
    /// Suffix appended to every displayed value, e.g. `%`.
    #[serde(default)]
    pub unit: String,
}

impl KpiCard {
    fn new(title: &str, current: f64, last_week: f64, polarity: Polarity, unit: &str) -> Self {
        Self {
            title: title.to_string(),
            current,
            last_week,
            polarity,
            unit: unit.to_string(),
        }
    }

    pub fn difference(&self) -> f64 {
        self.current - self.last_week
    }

    /// `Up` only for a strict increase; no change shows as `Down`.
    pub fn direction(&self) -> TrendDirection {
        if self.difference() > 0.0 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        }
    }

    /// Whether this week moved in the KPI's preferred direction.
    pub fn is_improvement(&self) -> bool {
        match self.polarity {
            Polarity::LowerIsBetter => self.current < self.last_week,
            Polarity::HigherIsBetter => self.current > self.last_week,
        }
    }

    pub fn current_label(&self) -> String {
        format!("{}{}", format_number(self.current), self.unit)
    }

    pub fn last_week_label(&self) -> String {
        format!("{}{}", format_number(self.last_week), self.unit)
    }

    /// Arrow plus absolute change, e.g. `↑ 10%`.
    pub fn difference_label(&self) -> String {
        format!(
            "{} {}{}",
            self.direction().arrow(),
            format_number(self.difference().abs()),
            self.unit
        )
    }
}

/// Render a figure with at most one decimal place, dropping a trailing `.0`.
pub fn format_number(value: f64) -> String {
    let rounded = format!("{:.1}", value);
    match rounded.strip_suffix(".0") {
        Some(whole) if whole == "-0" => "0".to_string(),
        Some(whole) => whole.to_string(),
        None => rounded,
    }
}

pub fn kpi_cards() -> Vec<KpiCard> {
    vec![
        KpiCard::new("SLA Breaches (Today)", 12.0, 15.0, Polarity::LowerIsBetter, ""),
        KpiCard::new("Avg Resolution Time", 4.6, 9.2, Polarity::LowerIsBetter, ""),
        KpiCard::new("Total Tickets", 248.0, 220.0, Polarity::HigherIsBetter, ""),
        KpiCard::new("CSAT Score", 95.0, 85.0, Polarity::HigherIsBetter, "%"),
    ]
}

// ---------------------------------------------------------------------------
// Ticket volume
// ---------------------------------------------------------------------------

/// Bucket size for the volume trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    #[default]
    Daily,
    Monthly,
}

impl Granularity {
    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Daily => "Date-wise",
            Granularity::Monthly => "Month-wise",
        }
    }
}

/// Ticket count for one period. `period` is `YYYY-MM-DD` or `YYYY-MM`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VolumePoint {
    pub period: String,
    pub count: u32,
}

impl VolumePoint {
    fn new(period: &str, count: u32) -> Self {
        Self {
            period: period.to_string(),
            count,
        }
    }
}

pub fn volume_series(granularity: Granularity) -> Vec<VolumePoint> {
    match granularity {
        Granularity::Daily => vec![
            VolumePoint::new("2025-09-01", 20),
            VolumePoint::new("2025-09-02", 34),
            VolumePoint::new("2025-09-03", 28),
            VolumePoint::new("2025-09-04", 45),
            VolumePoint::new("2025-09-05", 30),
            VolumePoint::new("2025-09-06", 50),
            VolumePoint::new("2025-09-07", 38),
        ],
        Granularity::Monthly => vec![
            VolumePoint::new("2025-01", 120),
            VolumePoint::new("2025-02", 180),
            VolumePoint::new("2025-03", 160),
            VolumePoint::new("2025-04", 210),
            VolumePoint::new("2025-05", 240),
            VolumePoint::new("2025-06", 200),
            VolumePoint::new("2025-07", 260),
            VolumePoint::new("2025-08", 280),
            VolumePoint::new("2025-09", 248),
        ],
    }
}

/// `num_days_from_ce` of 1970-01-01.
const UNIX_EPOCH_FROM_CE: i64 = 719_163;

/// A calendar date parsed from a volume period. Month periods resolve to
/// the first of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PeriodDate {
    date: NaiveDate,
    has_day: bool,
}

impl PeriodDate {
    /// Parse `YYYY-MM-DD` or `YYYY-MM`, picking the format from the number
    /// of `-` separated parts.
    pub fn parse(period: &str) -> Option<Self> {
        match period.split('-').count() {
            3 => NaiveDate::parse_from_str(period, "%Y-%m-%d")
                .ok()
                .map(|date| Self { date, has_day: true }),
            2 => {
                let (year, month) = period.split_once('-')?;
                NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
                    .map(|date| Self { date, has_day: false })
            }
            _ => None,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// False for `YYYY-MM` periods.
    pub fn has_day(&self) -> bool {
        self.has_day
    }

    /// Days since 1970-01-01, used as the x coordinate on time axes.
    pub fn day_number(&self) -> i64 {
        i64::from(self.date.num_days_from_ce()) - UNIX_EPOCH_FROM_CE
    }

    /// Short axis label: `Sep 3` for days, `Sep 2025` for months.
    pub fn short_label(&self) -> String {
        if self.has_day {
            self.date.format("%b %-d").to_string()
        } else {
            self.date.format("%b %Y").to_string()
        }
    }
}

// ---------------------------------------------------------------------------
// Sentiment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentimentSlice {
    pub label: String,
    pub value: u32,
    /// CSS color used for the slice and its legend swatch.
    pub color: String,
}

pub fn sentiment_distribution() -> Vec<SentimentSlice> {
    [
        ("Positive", 120, "#28a745"),
        ("Neutral", 80, "#f0ad4e"),
        ("Negative", 48, "#dc3545"),
    ]
    .into_iter()
    .map(|(label, value, color)| SentimentSlice {
        label: label.to_string(),
        value,
        color: color.to_string(),
    })
    .collect()
}

pub fn sentiment_total(slices: &[SentimentSlice]) -> u32 {
    slices.iter().map(|s| s.value).sum()
}

// ---------------------------------------------------------------------------
// SLA breaches
// ---------------------------------------------------------------------------

/// Breach count per agent for the ranking chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentBreachSummary {
    pub agent: String,
    pub breaches: u32,
    pub avg_delay_hours: f64,
}

pub fn agent_breach_summaries() -> Vec<AgentBreachSummary> {
    [
        ("John Doe", 15, 4.2),
        ("Priya Sharma", 10, 3.8),
        ("Ali Khan", 8, 5.1),
        ("Maya Singh", 6, 2.5),
        ("Carlos M", 4, 1.8),
    ]
    .into_iter()
    .map(|(agent, breaches, avg_delay_hours)| AgentBreachSummary {
        agent: agent.to_string(),
        breaches,
        avg_delay_hours,
    })
    .collect()
}

/// The `n` agents with the most breaches, highest first. Ties keep their
/// input order.
pub fn top_breaches(summaries: &[AgentBreachSummary], n: usize) -> Vec<AgentBreachSummary> {
    let mut ranked = summaries.to_vec();
    ranked.sort_by(|a, b| b.breaches.cmp(&a.breaches));
    ranked.truncate(n);
    ranked
}

/// One late ticket in an agent's breach report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BreachDetail {
    pub ticket_id: String,
    pub issue: String,
    pub target: String,
    pub actual: String,
    pub delay_hours: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentBreachReport {
    pub name: String,
    pub team: String,
    pub tickets_handled: u32,
    pub breaches: Vec<BreachDetail>,
}

impl AgentBreachReport {
    pub fn total_delay_hours(&self) -> f64 {
        self.breaches.iter().map(|b| b.delay_hours).sum()
    }
}

/// Detailed report for the agent with the most breaches.
pub fn breach_report() -> AgentBreachReport {
    let breaches = [
        ("TCK-101", "Network Downtime", "2 hrs", "4.5 hrs", 2.5),
        ("TCK-102", "Login Failure", "1 hr", "3 hrs", 2.0),
        ("TCK-103", "API Timeout", "3 hrs", "5.5 hrs", 2.5),
    ]
    .into_iter()
    .map(|(id, issue, target, actual, delay)| BreachDetail {
        ticket_id: id.to_string(),
        issue: issue.to_string(),
        target: target.to_string(),
        actual: actual.to_string(),
        delay_hours: delay,
    })
    .collect();

    AgentBreachReport {
        name: "John Doe".to_string(),
        team: "Technical Support".to_string(),
        tickets_handled: 42,
        breaches,
    }
}
