//! Scale and path helpers for the SVG chart components.
//!
//! Everything here is pure geometry so it can be tested without a renderer.

use std::f64::consts::TAU;

/// A point in SVG user space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Continuous linear mapping from a data domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value into the range. A zero-width domain maps
    /// everything to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Widen the domain outward to whole multiples of the tick step.
    pub fn nice(self, count: usize) -> Self {
        let (d0, d1) = self.domain;
        let step = tick_step(d0, d1, count);
        if step <= 0.0 {
            return self;
        }
        Self {
            domain: ((d0 / step).floor() * step, (d1 / step).ceil() * step),
            range: self.range,
        }
    }

    /// Evenly spaced round values inside the domain, about `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let step = tick_step(d0, d1, count);
        if step <= 0.0 {
            return vec![d0];
        }
        let start = (d0 / step).ceil() as i64;
        let stop = (d1 / step).floor() as i64;
        (start..=stop).map(|i| i as f64 * step).collect()
    }
}

/// Tick spacing of 1, 2 or 5 times a power of ten giving roughly `count`
/// intervals over `[start, stop]`.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let span = (stop - start).abs();
    if span == 0.0 || count == 0 || !span.is_finite() {
        return 0.0;
    }
    let raw = span / count as f64;
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    power * factor
}

/// Evenly divided categorical bands, with `padding` (0..1) of a step left
/// between bands and at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    pub count: usize,
    pub range: (f64, f64),
    pub padding: f64,
}

impl BandScale {
    pub fn new(count: usize, range: (f64, f64), padding: f64) -> Self {
        Self {
            count,
            range,
            padding: padding.clamp(0.0, 1.0),
        }
    }

    /// Distance from the start of one band to the start of the next.
    pub fn step(&self) -> f64 {
        let n = self.count as f64;
        let (r0, r1) = self.range;
        let denom = n - self.padding + 2.0 * self.padding;
        if denom <= 0.0 {
            return 0.0;
        }
        (r1 - r0) / denom
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Start coordinate of band `index`.
    pub fn position(&self, index: usize) -> f64 {
        self.range.0 + self.step() * (self.padding + index as f64)
    }
}

/// Axis label for a tick value, without float noise or trailing zeros.
pub fn format_tick(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn fmt(v: f64) -> String {
    format!("{:.2}", v)
}

/// Open polyline through the points: `M x,y L x,y ...`.
pub fn line_path(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(if i == 0 { 'M' } else { 'L' });
        out.push_str(&fmt(p.x));
        out.push(',');
        out.push_str(&fmt(p.y));
    }
    out
}

/// Closed region between the polyline and the horizontal line `y = baseline`.
pub fn area_path(points: &[Point], baseline: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    format!(
        "{} L{},{} L{},{} Z",
        line_path(points),
        fmt(last.x),
        fmt(baseline),
        fmt(first.x),
        fmt(baseline)
    )
}

/// One slice of a donut, angles in radians clockwise from 12 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSlice {
    pub start_angle: f64,
    pub end_angle: f64,
    pub path: String,
}

fn polar(radius: f64, angle: f64) -> Point {
    Point::new(radius * angle.sin(), -radius * angle.cos())
}

fn arc_segment(inner: f64, outer: f64, start: f64, end: f64) -> String {
    let large = if end - start > TAU / 2.0 { 1 } else { 0 };
    let o0 = polar(outer, start);
    let o1 = polar(outer, end);
    let i1 = polar(inner, end);
    let i0 = polar(inner, start);
    format!(
        "M{},{} A{},{} 0 {} 1 {},{} L{},{} A{},{} 0 {} 0 {},{} Z",
        fmt(o0.x),
        fmt(o0.y),
        fmt(outer),
        fmt(outer),
        large,
        fmt(o1.x),
        fmt(o1.y),
        fmt(i1.x),
        fmt(i1.y),
        fmt(inner),
        fmt(inner),
        large,
        fmt(i0.x),
        fmt(i0.y),
    )
}

/// Donut slices for `values`, in input order, centred on the origin.
///
/// Negative values count as zero. Returns nothing when the total is zero.
pub fn donut_arcs(values: &[f64], inner: f64, outer: f64) -> Vec<ArcSlice> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    values
        .iter()
        .map(|v| {
            let start = angle;
            let end = start + v.max(0.0) / total * TAU;
            angle = end;
            // A single arc command cannot draw a full circle.
            let path = if end - start >= TAU - 1e-9 {
                let mid = start + TAU / 2.0;
                format!(
                    "{} {}",
                    arc_segment(inner, outer, start, mid),
                    arc_segment(inner, outer, mid, end)
                )
            } else {
                arc_segment(inner, outer, start, end)
            };
            ArcSlice {
                start_angle: start,
                end_angle: end,
                path,
            }
        })
        .collect()
}
