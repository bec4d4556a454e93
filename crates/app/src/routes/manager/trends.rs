use dioxus::prelude::*;
use shared_types::{volume_series, Granularity, PeriodDate, VolumePoint};
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, LineChart, SeriesPoint};

/// Place volume periods on a day-number axis. Periods that do not parse
/// as dates are dropped.
pub fn volume_points(series: &[VolumePoint]) -> Vec<SeriesPoint> {
    series
        .iter()
        .filter_map(|point| match PeriodDate::parse(&point.period) {
            Some(date) => Some(SeriesPoint {
                x: date.day_number() as f64,
                y: f64::from(point.count),
                label: date.short_label(),
            }),
            None => {
                tracing::warn!(period = %point.period, "skipping unparseable volume period");
                None
            }
        })
        .collect()
}

/// Ticket volume over time with a daily/monthly switch.
#[component]
pub fn VolumePanel() -> Element {
    let mut granularity = use_signal(Granularity::default);
    let points = use_memo(move || volume_points(&volume_series(granularity())));

    rsx! {
        Card { class: "manager-volume",
            CardHeader { class: "manager-panel-header",
                CardTitle { "Ticket Volume Trends" }
                div { class: "manager-segmented", role: "group",
                    for option in [Granularity::Daily, Granularity::Monthly] {
                        Button {
                            key: "{option.label()}",
                            variant: ButtonVariant::Outline,
                            pressed: granularity() == option,
                            onclick: move |_| granularity.set(option),
                            "{option.label()}"
                        }
                    }
                }
            }
            CardContent {
                LineChart { points: points(), title: "Ticket volume" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn daily_series_is_one_day_apart() {
        let points = volume_points(&volume_series(Granularity::Daily));
        assert_eq!(points.len(), 7);
        assert_eq!(points[0].label, "Sep 1");
        for pair in points.windows(2) {
            assert_eq!(pair[1].x - pair[0].x, 1.0);
        }
    }

    #[test]
    fn monthly_series_labels_include_year() {
        let points = volume_points(&volume_series(Granularity::Monthly));
        assert_eq!(points.len(), 9);
        assert_eq!(points[1].label, "Feb 2025");
        assert_eq!(points[1].y, 180.0);
        assert!(points.windows(2).all(|p| p[1].x > p[0].x));
    }

    #[test]
    fn bad_periods_are_skipped() {
        let series = vec![
            VolumePoint { period: "2025-13".into(), count: 5 },
            VolumePoint { period: "soon".into(), count: 5 },
            VolumePoint { period: "2025-02-28".into(), count: 7 },
        ];
        let points = volume_points(&series);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].label, "Feb 28");
    }
}
