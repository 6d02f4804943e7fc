//! Slider geometry: the position where a slider curve ends.
//!
//! The curve is approximated by a polyline of sampled points, then walked from the start for
//! the pixel length of the slider. A circular arc is computed exactly instead.

use std::ops::{Add, Mul, Sub};

use itertools::Itertools;

use super::model::hit_object::{CurveType, Position};

/// The number of samples taken on each segment of bezier and Catmull-Rom curves by default.
pub const DEFAULT_CURVE_DETAIL: usize = 50;

/// Computes where the curve ends after `pixel_length`, with [`DEFAULT_CURVE_DETAIL`] samples
/// per segment.
///
/// Returns `None` when the curve cannot be computed: an unknown curve type, a non-positive
/// length, a curve of zero length, or a pass-through curve on collinear points.
///
/// ```
/// use osu_rs::beatmap::{
///     curve::endpoint,
///     model::hit_object::{CurveType, Position},
/// };
///
/// let points = [Position::new(0, 0), Position::new(100, 0), Position::new(100, 100)];
/// assert_eq!(endpoint(CurveType::Linear, 150.0, &points), Some(Position::new(100, 50)));
/// ```
#[must_use]
pub fn endpoint(curve_type: CurveType, pixel_length: f64, points: &[Position]) -> Option<Position> {
    endpoint_with_detail(curve_type, pixel_length, points, DEFAULT_CURVE_DETAIL)
}

/// Computes where the curve ends after `pixel_length`, taking `detail` samples on each segment
/// of bezier and Catmull-Rom curves. See [`endpoint`].
#[must_use]
pub fn endpoint_with_detail(
    curve_type: CurveType,
    pixel_length: f64,
    points: &[Position],
    detail: usize,
) -> Option<Position> {
    if !(pixel_length > 0.0) || points.is_empty() {
        return None;
    }
    let detail = detail.max(1);
    let points: Vec<Vec2> = points.iter().copied().map(Vec2::from).collect();
    let end = match (curve_type, points.as_slice()) {
        (CurveType::Unknown, _) => None,
        (CurveType::PassThrough, &[a, b, c, ..]) => arc_end(a, b, c, pixel_length),
        (CurveType::PassThrough | CurveType::Linear, _) => walk(&points, pixel_length),
        (CurveType::Bezier, _) => {
            walk(&bezier_path(&points, detail), pixel_length)
        }
        (CurveType::Catmull, _) => walk(&catmull_path(&points, detail), pixel_length),
    }?;
    end.to_position()
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Vec2 {
    x: f64,
    y: f64,
}

impl Vec2 {
    const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    fn to_position(self) -> Option<Position> {
        let in_range = |v: f64| (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&v);
        let (x, y) = (self.x.round(), self.y.round());
        (in_range(x) && in_range(y)).then(|| Position::new(x as i32, y as i32))
    }
}

impl From<Position> for Vec2 {
    fn from(position: Position) -> Self {
        Self::new(f64::from(position.x), f64::from(position.y))
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Walks the polyline for `length`. Stops at the last point if the polyline is shorter.
fn walk(path: &[Vec2], length: f64) -> Option<Vec2> {
    let mut remaining = length;
    let mut total = 0.0;
    for (&from, &to) in path.iter().tuple_windows() {
        let segment = (to - from).length();
        if segment <= 0.0 {
            continue;
        }
        total += segment;
        if remaining <= segment {
            return Some(from + (to - from) * (remaining / segment));
        }
        remaining -= segment;
    }
    if total > 0.0 { path.last().copied() } else { None }
}

/// The end of the circular arc through `a`, `b` and `c`, walked from `a` toward `b`.
fn arc_end(a: Vec2, b: Vec2, c: Vec2, length: f64) -> Option<Vec2> {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d.abs() < 1e-6 {
        return None;
    }
    let (a2, b2, c2) = (a.length_squared(), b.length_squared(), c.length_squared());
    let center = Vec2::new(
        (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
        (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
    );
    let radius = (a - center).length();
    let direction = if (b - a).cross(c - b) > 0.0 { 1.0 } else { -1.0 };
    let start = (a.y - center.y).atan2(a.x - center.x);
    let angle = start + direction * length / radius;
    Some(center + Vec2::new(angle.cos(), angle.sin()) * radius)
}

/// Samples the bezier curves, splitting them into segments at repeated control points.
fn bezier_path(points: &[Vec2], detail: usize) -> Vec<Vec2> {
    let mut path = Vec::with_capacity(points.len() * (detail + 1));
    let mut start = 0;
    for end in 1..=points.len() {
        if end < points.len() && points[end] != points[end - 1] {
            continue;
        }
        let segment = &points[start..end];
        path.extend((0..=detail).map(|i| de_casteljau(segment, i as f64 / detail as f64)));
        start = end;
    }
    path
}

fn de_casteljau(points: &[Vec2], t: f64) -> Vec2 {
    let mut points = points.to_vec();
    for len in (1..points.len()).rev() {
        for i in 0..len {
            points[i] = points[i] * (1.0 - t) + points[i + 1] * t;
        }
    }
    points[0]
}

/// Samples the Catmull-Rom spline through every control point.
fn catmull_path(points: &[Vec2], detail: usize) -> Vec<Vec2> {
    let mut path = Vec::with_capacity(points.len() * (detail + 1));
    for i in 0..points.len().saturating_sub(1) {
        let v1 = if i > 0 { points[i - 1] } else { points[i] };
        let v2 = points[i];
        let v3 = points[i + 1];
        let v4 = points.get(i + 2).copied().unwrap_or(v3 + (v3 - v2));
        path.extend((0..=detail).map(|j| catmull_rom(v1, v2, v3, v4, j as f64 / detail as f64)));
    }
    path
}

fn catmull_rom(v1: Vec2, v2: Vec2, v3: Vec2, v4: Vec2, t: f64) -> Vec2 {
    let (t2, t3) = (t * t, t * t * t);
    (v2 * 2.0
        + (v3 - v1) * t
        + (v1 * 2.0 - v2 * 5.0 + v3 * 4.0 - v4) * t2
        + (v2 * 3.0 - v1 - v3 * 3.0 + v4) * t3)
        * 0.5
}
