//! SVG geometry for the dashboard pie and bar charts.

#[cfg(test)]
#[path = "chart_math_test.rs"]
mod chart_math_test;

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use inventory::dashboard::ChartDatum;

/// Fraction of each bar slot covered by the bar itself.
pub const BAR_FILL: f64 = 0.6;

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub path: String,
    pub color: &'static str,
    pub label: String,
    pub count: i64,
    pub percent: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub count: i64,
    pub color: &'static str,
}

fn point(center: f64, radius: f64, angle: f64) -> (f64, f64) {
    (center + radius * angle.cos(), center + radius * angle.sin())
}

/// Slices of a pie centered in a `2r x 2r` box, clockwise from 12 o'clock.
///
/// Non-positive counts are skipped; an all-zero series yields no slices.
#[allow(clippy::cast_precision_loss)]
pub fn pie_slices(data: &[ChartDatum], radius: f64) -> Vec<PieSlice> {
    let total: i64 = data.iter().map(|d| d.count.max(0)).sum();
    if total <= 0 {
        return Vec::new();
    }
    let visible: Vec<&ChartDatum> = data.iter().filter(|d| d.count > 0).collect();
    let c = radius;

    if let [only] = visible.as_slice() {
        let path = format!(
            "M {c:.2} 0.00 A {radius:.2} {radius:.2} 0 1 1 {c:.2} {bottom:.2} A {radius:.2} {radius:.2} 0 1 1 {c:.2} 0.00 Z",
            bottom = 2.0 * radius
        );
        return vec![PieSlice {
            path,
            color: only.color,
            label: only.label.clone(),
            count: only.count,
            percent: 100.0,
        }];
    }

    let mut start = -FRAC_PI_2;
    visible
        .into_iter()
        .map(|datum| {
            let share = datum.count as f64 / total as f64;
            let sweep = share * TAU;
            let end = start + sweep;
            let (x0, y0) = point(c, radius, start);
            let (x1, y1) = point(c, radius, end);
            let large = u8::from(sweep > PI);
            start = end;
            PieSlice {
                path: format!(
                    "M {c:.2} {c:.2} L {x0:.2} {y0:.2} A {radius:.2} {radius:.2} 0 {large} 1 {x1:.2} {y1:.2} Z"
                ),
                color: datum.color,
                label: datum.label.clone(),
                count: datum.count,
                percent: share * 100.0,
            }
        })
        .collect()
}

/// Vertical bars filling a `width x height` plot, scaled to the largest count.
#[allow(clippy::cast_precision_loss)]
pub fn bar_layout(data: &[ChartDatum], width: f64, height: f64) -> Vec<Bar> {
    if data.is_empty() {
        return Vec::new();
    }
    let max = data.iter().map(|d| d.count).max().unwrap_or(0);
    let slot = width / data.len() as f64;
    let bar_width = slot * BAR_FILL;

    data.iter()
        .enumerate()
        .map(|(index, datum)| {
            let bar_height = if max > 0 { height * datum.count.max(0) as f64 / max as f64 } else { 0.0 };
            Bar {
                x: slot * index as f64 + (slot - bar_width) / 2.0,
                y: height - bar_height,
                width: bar_width,
                height: bar_height,
                label: datum.label.clone(),
                count: datum.count,
                color: datum.color,
            }
        })
        .collect()
}
