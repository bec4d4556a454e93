use crate::chart::{donut_arcs, format_tick};
use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct DonutSlice {
    pub label: String,
    pub value: f64,
    /// Any CSS colour.
    pub color: String,
}

/// Ring chart with the grand total in the hole and a legend underneath.
#[component]
pub fn DonutChart(
    slices: Vec<DonutSlice>,
    #[props(default = 240.0)] size: f64,
    #[props(default = "Total".to_string())] center_label: String,
) -> Element {
    let outer = size / 2.0 - 4.0;
    let inner = outer * 0.6;
    let half = size / 2.0;

    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let total = format_tick(values.iter().map(|v| v.max(0.0)).sum());
    let arcs: Vec<(String, String, String)> = donut_arcs(&values, inner, outer)
        .into_iter()
        .zip(slices.iter())
        .map(|(arc, slice)| {
            let tip = format!("{}: {}", slice.label, format_tick(slice.value));
            (arc.path, slice.color.clone(), tip)
        })
        .collect();
    let legend: Vec<(String, String)> = slices
        .iter()
        .map(|s| (s.color.clone(), format!("{} ({})", s.label, format_tick(s.value))))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        figure { class: "desk-donut",
            svg {
                class: "desk-chart",
                view_box: "-{half} -{half} {size} {size}",
                role: "img",
                for (i, (d, color, tip)) in arcs.into_iter().enumerate() {
                    path { key: "{i}", class: "desk-donut-slice", d: "{d}", fill: "{color}",
                        title { "{tip}" }
                    }
                }
                text { class: "desk-donut-total", "text-anchor": "middle", y: "-2", "{total}" }
                text { class: "desk-donut-caption", "text-anchor": "middle", y: "18", "{center_label}" }
            }
            figcaption {
                ul { class: "desk-donut-legend",
                    for (i, (color, entry)) in legend.into_iter().enumerate() {
                        li { key: "{i}",
                            span { class: "desk-donut-swatch", style: "background: {color}" }
                            "{entry}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(label: &str, value: f64) -> DonutSlice {
        DonutSlice {
            label: label.into(),
            value,
            color: "#4caf50".into(),
        }
    }

    #[test]
    fn one_path_per_slice_and_total_in_centre() {
        let html = dioxus_ssr::render_element(rsx! {
            DonutChart { slices: vec![slice("Positive", 120.0), slice("Neutral", 80.0), slice("Negative", 48.0)] }
        });
        assert_eq!(html.matches("desk-donut-slice").count(), 3);
        assert!(html.contains(">248<"));
        assert!(html.contains("Positive (120)"));
        assert!(html.contains("Total"));
    }

    #[test]
    fn all_zero_values_draw_no_slices() {
        let html = dioxus_ssr::render_element(rsx! {
            DonutChart { slices: vec![slice("Positive", 0.0)] }
        });
        assert_eq!(html.matches("desk-donut-slice").count(), 0);
        assert!(html.contains("Positive (0)"));
    }
}
