use crate::chart::{format_tick, BandScale, LinearScale};
use dioxus::prelude::*;

const MARGIN_TOP: f64 = 8.0;
const MARGIN_RIGHT: f64 = 36.0;
const MARGIN_BOTTOM: f64 = 28.0;
const MARGIN_LEFT: f64 = 96.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
    /// Extra hover text, appended to `label: value`.
    pub note: Option<String>,
}

/// Horizontal bars, one band per datum in the given order, value printed at
/// the end of each bar.
#[component]
pub fn BarChart(
    bars: Vec<BarDatum>,
    #[props(default = 480.0)] width: f64,
    #[props(default = 260.0)] height: f64,
    #[props(default)] title: String,
) -> Element {
    let inner_w = (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
    let inner_h = (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);

    let max = bars.iter().map(|b| b.value).fold(0.0, f64::max).max(1.0);
    let x = LinearScale::new((0.0, max), (0.0, inner_w)).nice(4);
    let band = BandScale::new(bars.len(), (0.0, inner_h), 0.2);
    let bandwidth = band.bandwidth();

    let rows: Vec<(f64, f64, f64, f64, String, String, String)> = bars
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let top = band.position(i);
            let length = x.map(b.value.max(0.0));
            let value = format_tick(b.value);
            let tip = match &b.note {
                Some(note) => format!("{}: {} ({})", b.label, value, note),
                None => format!("{}: {}", b.label, value),
            };
            (top, top + bandwidth / 2.0, length, length + 6.0, b.label.clone(), value, tip)
        })
        .collect();
    let ticks: Vec<(f64, String)> = x.ticks(4).into_iter().map(|t| (x.map(t), format_tick(t))).collect();
    let axis_y = inner_h + 18.0;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        svg {
            class: "desk-chart desk-bar-chart",
            view_box: "0 0 {width} {height}",
            role: "img",
            "aria-label": "{title}",
            g { transform: "translate({MARGIN_LEFT},{MARGIN_TOP})",
                for (i, (at, tick)) in ticks.into_iter().enumerate() {
                    g { key: "t{i}", class: "desk-chart-grid",
                        line { x1: "{at}", x2: "{at}", y1: "0", y2: "{inner_h}" }
                        text { x: "{at}", y: "{axis_y}", "text-anchor": "middle", "{tick}" }
                    }
                }
                for (i, (top, mid, length, value_x, label, value, tip)) in rows.into_iter().enumerate() {
                    g { key: "b{i}",
                        title { "{tip}" }
                        rect { class: "desk-bar", x: "0", y: "{top}", width: "{length}", height: "{bandwidth}", rx: "3" }
                        text { class: "desk-bar-label", x: "-8", y: "{mid}", "text-anchor": "end", "dominant-baseline": "middle", "{label}" }
                        text { class: "desk-bar-value", x: "{value_x}", y: "{mid}", "dominant-baseline": "middle", "{value}" }
                    }
                }
            }
        }
    }
}
