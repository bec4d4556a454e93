use crate::chart::{area_path, format_tick, line_path, LinearScale, Point};
use dioxus::prelude::*;

const MARGIN_TOP: f64 = 16.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_BOTTOM: f64 = 36.0;
const MARGIN_LEFT: f64 = 44.0;
/// Most x-axis labels drawn before thinning kicks in.
const MAX_X_LABELS: usize = 8;

/// One observation. `x` is any monotonic number (e.g. a day index) and
/// `label` is what the axis prints for it.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

/// Area-under-line chart with a zero baseline and horizontal grid.
#[component]
pub fn LineChart(
    points: Vec<SeriesPoint>,
    #[props(default = 720.0)] width: f64,
    #[props(default = 300.0)] height: f64,
    /// Accessible name for the chart.
    #[props(default)]
    title: String,
) -> Element {
    let inner_w = (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
    let inner_h = (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);

    let x_min = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let x_max = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let x = if points.is_empty() {
        LinearScale::new((0.0, 1.0), (0.0, inner_w))
    } else {
        LinearScale::new((x_min, x_max), (0.0, inner_w))
    };

    let y_max = points.iter().map(|p| p.y).fold(0.0, f64::max);
    let y = LinearScale::new((0.0, (y_max * 1.1).max(1.0)), (inner_h, 0.0)).nice(5);

    let plotted: Vec<Point> = points
        .iter()
        .map(|p| Point::new(x.map(p.x), y.map(p.y)))
        .collect();
    let line = line_path(&plotted);
    let area = area_path(&plotted, inner_h);

    let grid: Vec<(f64, String)> = y.ticks(5).into_iter().map(|t| (y.map(t), format_tick(t))).collect();
    let every = points.len().div_ceil(MAX_X_LABELS).max(1);
    let x_labels: Vec<(f64, String)> = points
        .iter()
        .enumerate()
        .filter(|(i, _)| i % every == 0)
        .map(|(_, p)| (x.map(p.x), p.label.clone()))
        .collect();
    let markers: Vec<(f64, f64, String)> = points
        .iter()
        .zip(plotted.iter())
        .map(|(p, at)| (at.x, at.y, format!("{}: {}", p.label, p.y)))
        .collect();

    let label_y = inner_h + 22.0;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        svg {
            class: "desk-chart desk-line-chart",
            view_box: "0 0 {width} {height}",
            role: "img",
            "aria-label": "{title}",
            g { transform: "translate({MARGIN_LEFT},{MARGIN_TOP})",
                for (i, (at, tick)) in grid.into_iter().enumerate() {
                    g { key: "y{i}", class: "desk-chart-grid",
                        line { x1: "0", x2: "{inner_w}", y1: "{at}", y2: "{at}" }
                        text { x: "-8", y: "{at}", "text-anchor": "end", "dominant-baseline": "middle", "{tick}" }
                    }
                }
                path { class: "desk-line-area", d: "{area}" }
                path { class: "desk-line-stroke", d: "{line}" }
                for (i, (cx, cy, tip)) in markers.into_iter().enumerate() {
                    circle { key: "m{i}", class: "desk-line-marker", cx: "{cx}", cy: "{cy}", r: "3",
                        title { "{tip}" }
                    }
                }
                for (i, (at, label)) in x_labels.into_iter().enumerate() {
                    text {
                        key: "x{i}",
                        class: "desk-chart-axis-label",
                        x: "{at}",
                        y: "{label_y}",
                        "text-anchor": "middle",
                        "{label}"
                    }
                }
            }
        }
    }
}
