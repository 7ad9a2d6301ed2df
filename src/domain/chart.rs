// Chart model for the water quality panel: fixed axes and monotone line paths
use super::telemetry::{Metric, WaterReading};
use serde::Serialize;
use std::fmt::Write as _;

/// Closed numeric range of a y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn covers(&self, low: f64, high: f64) -> bool {
        self.min <= low && high <= self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        self.covers(value, value)
    }

    /// Position of `value` in the domain as a fraction, clamped to [0, 1].
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.5;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YAxis {
    pub id: &'static str,
    pub orientation: Orientation,
    pub domain: Domain,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    pub metric: Metric,
    pub name: &'static str,
    pub color: &'static str,
    pub axis_id: &'static str,
    pub stroke_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub x_key: &'static str,
    pub y_axes: Vec<YAxis>,
    pub lines: Vec<LineSeries>,
    pub caption: &'static str,
}

/// Pixel rectangle the lines are drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotBox {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// x position of category `index` out of `count`, spread edge to edge.
    pub fn category_x(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.x + self.width / 2.0;
        }
        self.x + self.width * index as f64 / (count - 1) as f64
    }

    pub fn value_y(&self, domain: &Domain, value: f64) -> f64 {
        self.y + self.height * (1.0 - domain.normalize(value))
    }
}

pub const TEMPERATURE_DOMAIN: Domain = Domain::new(24.8, 25.8);
pub const OXYGEN_DOMAIN: Domain = Domain::new(7.0, 8.6);

/// Temperature and dissolved oxygen against time, each on its own axis.
pub fn water_quality_chart() -> ChartSpec {
    ChartSpec {
        x_key: "t",
        y_axes: vec![
            YAxis {
                id: "left",
                orientation: Orientation::Left,
                domain: TEMPERATURE_DOMAIN,
            },
            YAxis {
                id: "right",
                orientation: Orientation::Right,
                domain: OXYGEN_DOMAIN,
            },
        ],
        lines: vec![
            LineSeries {
                metric: Metric::Temperature,
                name: "温度",
                color: "#38bdf8",
                axis_id: "left",
                stroke_width: 2,
            },
            LineSeries {
                metric: Metric::DissolvedOxygen,
                name: "溶解氧",
                color: "#818cf8",
                axis_id: "right",
                stroke_width: 2,
            },
        ],
        caption: "实时水质：温度 / 溶解氧",
    }
}

impl ChartSpec {
    pub fn axis(&self, id: &str) -> Option<&YAxis> {
        self.y_axes.iter().find(|axis| axis.id == id)
    }

    /// Screen points for one line. Lines bound to an unknown axis yield nothing.
    pub fn points(
        &self,
        line: &LineSeries,
        readings: &[WaterReading],
        plot: &PlotBox,
    ) -> Vec<(f64, f64)> {
        let Some(axis) = self.axis(line.axis_id) else {
            return Vec::new();
        };
        readings
            .iter()
            .enumerate()
            .map(|(i, reading)| {
                (
                    plot.category_x(i, readings.len()),
                    plot.value_y(&axis.domain, line.metric.value(reading)),
                )
            })
            .collect()
    }

    /// SVG path data for one line inside `plot`, drawn as a monotone curve.
    pub fn path(&self, line: &LineSeries, readings: &[WaterReading], plot: &PlotBox) -> String {
        monotone_path(&self.points(line, readings, plot))
    }
}

fn linear_path(points: &[(f64, f64)]) -> String {
    let mut d = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{cmd}{x:.2},{y:.2}");
    }
    d
}

fn sign(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

/// Tangent at the middle point of three, limited so the curve never
/// overshoots its neighbours (Fritsch-Carlson style).
fn interior_slope(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    if h0 == 0.0 || h1 == 0.0 {
        return 0.0;
    }
    let s0 = (p1.1 - p0.1) / h0;
    let s1 = (p2.1 - p1.1) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let slope = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if slope.is_finite() { slope } else { 0.0 }
}

/// One-sided tangent at an end point, from its neighbour's tangent.
fn end_slope(p0: (f64, f64), p1: (f64, f64), neighbour: f64) -> f64 {
    let h = p1.0 - p0.0;
    if h == 0.0 {
        return neighbour;
    }
    (3.0 * (p1.1 - p0.1) / h - neighbour) / 2.0
}

/// Monotone cubic interpolation in x, as cubic Bezier segments.
fn monotone_path(points: &[(f64, f64)]) -> String {
    if points.len() < 3 {
        return linear_path(points);
    }

    let n = points.len();
    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        tangents[i] = interior_slope(points[i - 1], points[i], points[i + 1]);
    }
    tangents[0] = end_slope(points[0], points[1], tangents[1]);
    tangents[n - 1] = end_slope(points[n - 2], points[n - 1], tangents[n - 2]);

    let mut d = String::new();
    let (x0, y0) = points[0];
    let _ = write!(d, "M{x0:.2},{y0:.2}");
    for i in 1..n {
        let (xa, ya) = points[i - 1];
        let (xb, yb) = points[i];
        let dx = (xb - xa) / 3.0;
        let _ = write!(
            d,
            "C{:.2},{:.2},{:.2},{:.2},{xb:.2},{yb:.2}",
            xa + dx,
            ya + dx * tangents[i - 1],
            xb - dx,
            yb - dx * tangents[i],
        );
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::telemetry::WATER_QUALITY;

    const PLOT: PlotBox = PlotBox::new(40.0, 10.0, 400.0, 160.0);

    fn numbers(path: &str) -> Vec<f64> {
        path.split(|c: char| c.is_ascii_alphabetic() || c == ',')
            .filter(|s| !s.is_empty())
            .map(|s| s.parse().unwrap())
            .collect()
    }

    #[test]
    fn test_axis_domains_are_fixed() {
        let chart = water_quality_chart();
        let temp = chart.axis("left").unwrap();
        let oxygen = chart.axis("right").unwrap();
        assert!(temp.domain.covers(24.8, 25.8));
        assert!(oxygen.domain.covers(7.0, 8.6));
        assert_eq!(oxygen.orientation, Orientation::Right);
    }

    #[test]
    fn test_series_fits_inside_domains() {
        let chart = water_quality_chart();
        for line in &chart.lines {
            let domain = chart.axis(line.axis_id).unwrap().domain;
            assert!(WATER_QUALITY.iter().all(|r| domain.contains(line.metric.value(r))));
        }
    }

    #[test]
    fn test_points_map_to_plot() {
        let chart = water_quality_chart();
        let temp = &chart.lines[0];
        let points = chart.points(temp, &WATER_QUALITY, &PLOT);
        assert_eq!(points.len(), 6);
        assert_eq!(points[0].0, 40.0);
        assert_eq!(points[5].0, 440.0);
        // 25.1 sits 30% up a 24.8..25.8 axis
        assert!((points[0].1 - (10.0 + 160.0 * 0.7)).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_domain_values_clamp() {
        let domain = Domain::new(7.0, 8.6);
        assert_eq!(PLOT.value_y(&domain, 99.0), PLOT.y);
        assert_eq!(PLOT.value_y(&domain, -1.0), PLOT.y + PLOT.height);
    }

    #[test]
    fn test_monotone_path_shape() {
        let chart = water_quality_chart();
        for line in &chart.lines {
            let d = chart.path(line, &WATER_QUALITY, &PLOT);
            assert!(d.starts_with('M'));
            assert_eq!(d.matches('C').count(), WATER_QUALITY.len() - 1);
            let values = numbers(&d);
            // control points stay inside the plot for this data
            for pair in values.chunks(2) {
                assert!(pair[1] >= PLOT.y - 1e-6 && pair[1] <= PLOT.y + PLOT.height + 1e-6);
            }
        }
    }

    #[test]
    fn test_monotone_flat_at_local_extremum() {
        let points = [(0.0, 10.0), (10.0, 0.0), (20.0, 10.0)];
        assert_eq!(interior_slope(points[0], points[1], points[2]), 0.0);
        let d = monotone_path(&points);
        // control points next to the minimum share its y
        assert!(d.contains("C3.33,"), "{d}");
        assert!(d.contains("6.67,0.00,10.00,0.00"), "{d}");
    }

    #[test]
    fn test_short_series_falls_back_to_lines() {
        assert_eq!(monotone_path(&[(0.0, 1.0), (2.0, 3.0)]), "M0.00,1.00L2.00,3.00");
        assert_eq!(monotone_path(&[]), "");
    }

    #[test]
    fn test_unknown_axis_draws_nothing() {
        let chart = water_quality_chart();
        let mut stray = chart.lines[0].clone();
        stray.axis_id = "ph";
        assert!(chart.path(&stray, &WATER_QUALITY, &PLOT).is_empty());
    }
}
