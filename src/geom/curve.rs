//! Parametric curve abstraction and the rail spline.
//!
//! The simulator and the path reconstructor both consume curves through the
//! [`ParametricCurve`] capability trait; [`RailSpline`] is the concrete
//! implementation, a uniform Catmull-Rom curve interpolating a control point
//! list with an arc-length lookup table for distance/key conversion.

use super::core::{Point3, Quat, Vec3};

/// A parametric curve queried by arc length and normalized key.
///
/// The key domain is `[0, 1]`; implementations clamp out-of-range keys.
/// A degenerate curve (fewer than two points) reports zero arc length, and
/// callers are responsible for guarding divisions by it.
pub trait ParametricCurve {
    /// Total world-space length of the curve.
    #[must_use]
    fn arc_length(&self) -> f64;

    /// The key whose arc length from the start equals `distance`.
    /// Saturates at the domain ends for out-of-range distances.
    #[must_use]
    fn key_at_distance(&self, distance: f64) -> f64;

    /// World-space position at a key.
    #[must_use]
    fn position_at(&self, key: f64) -> Point3;

    /// Unit tangent at a key, or `None` if the derivative is degenerate.
    #[must_use]
    fn tangent_at(&self, key: f64) -> Option<Vec3>;

    /// Orientation at a key: forward along the tangent, up seeded from
    /// world Z (a horizontal frame).
    #[must_use]
    fn orientation_at(&self, key: f64) -> Quat;
}

// ============================================================================
// RailSpline
// ============================================================================

/// An entry in the arc-length lookup table.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ArcLengthEntry {
    key: f64,
    arc_length: f64,
}

/// A uniform Catmull-Rom spline through a list of control points.
///
/// Point management mirrors a host spline component: batch
/// [`add_point`](Self::add_point) calls followed by a single
/// [`rebuild`](Self::rebuild), which re-tessellates the arc-length table.
/// Queries on a spline whose points changed since the last rebuild use the
/// stale table.
#[derive(Debug, Clone, PartialEq)]
pub struct RailSpline {
    points: Vec<Point3>,
    closed: bool,
    table: Vec<ArcLengthEntry>,
    total_length: f64,
}

impl RailSpline {
    /// Create an empty open spline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            points: Vec::new(),
            closed: false,
            table: Vec::new(),
            total_length: 0.0,
        }
    }

    /// Create a spline from control points, rebuilt and ready to query.
    #[must_use]
    pub fn with_points(points: Vec<Point3>, closed: bool) -> Self {
        let mut spline = Self {
            points,
            closed,
            table: Vec::new(),
            total_length: 0.0,
        };
        spline.rebuild();
        spline
    }

    /// Append a control point without rebuilding the arc-length table.
    /// Call [`rebuild`](Self::rebuild) after the last point is added.
    pub fn add_point(&mut self, point: Point3) {
        self.points.push(point);
    }

    /// Remove all control points and invalidate the arc-length table.
    pub fn clear_points(&mut self) {
        self.points.clear();
        self.table.clear();
        self.total_length = 0.0;
    }

    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of Catmull-Rom segments in the current point list.
    #[must_use]
    fn segment_count(&self) -> usize {
        let n = self.points.len();
        if n < 2 {
            0
        } else if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Re-tessellate the arc-length lookup table after point edits.
    pub fn rebuild(&mut self) {
        self.table.clear();
        self.total_length = 0.0;

        let segments = self.segment_count();
        if segments == 0 {
            return;
        }

        let samples = (segments * 16).clamp(32, 4096);
        let mut prev = self.point_at(0.0);
        let mut cumulative = 0.0;
        self.table.push(ArcLengthEntry {
            key: 0.0,
            arc_length: 0.0,
        });
        for i in 1..samples {
            let key = i as f64 / (samples - 1) as f64;
            let curr = self.point_at(key);
            cumulative += curr.sub_point(prev).length();
            self.table.push(ArcLengthEntry {
                key,
                arc_length: cumulative,
            });
            prev = curr;
        }
        self.total_length = cumulative;
    }

    /// Control point lookup with endpoint clamping (open) or wrapping (closed).
    fn control_point(&self, index: isize) -> Point3 {
        let n = self.points.len() as isize;
        let clamped = if self.closed {
            index.rem_euclid(n)
        } else {
            index.clamp(0, n - 1)
        };
        self.points[clamped as usize]
    }

    /// Map a normalized key to a segment index and local parameter.
    fn segment_at(&self, key: f64) -> (isize, f64) {
        let segments = self.segment_count();
        let scaled = key.clamp(0.0, 1.0) * segments as f64;
        let index = (scaled.floor() as isize).min(segments as isize - 1).max(0);
        (index, scaled - index as f64)
    }

    /// World-space position at a normalized key.
    #[must_use]
    pub fn point_at(&self, key: f64) -> Point3 {
        match self.points.len() {
            0 => Point3::ORIGIN,
            1 => self.points[0],
            _ => {
                let (segment, u) = self.segment_at(key);
                let p0 = self.control_point(segment - 1).to_vec3();
                let p1 = self.control_point(segment).to_vec3();
                let p2 = self.control_point(segment + 1).to_vec3();
                let p3 = self.control_point(segment + 2).to_vec3();
                Point3::from(catmull_rom(p0, p1, p2, p3, u))
            }
        }
    }

    /// Derivative with respect to the normalized key.
    #[must_use]
    pub fn derivative_at(&self, key: f64) -> Vec3 {
        if self.points.len() < 2 {
            return Vec3::ZERO;
        }
        let (segment, u) = self.segment_at(key);
        let p0 = self.control_point(segment - 1).to_vec3();
        let p1 = self.control_point(segment).to_vec3();
        let p2 = self.control_point(segment + 1).to_vec3();
        let p3 = self.control_point(segment + 2).to_vec3();
        // Chain rule: the key spans segment_count() segments.
        catmull_rom_derivative(p0, p1, p2, p3, u).mul_scalar(self.segment_count() as f64)
    }
}

impl Default for RailSpline {
    fn default() -> Self {
        Self::new()
    }
}

impl ParametricCurve for RailSpline {
    fn arc_length(&self) -> f64 {
        self.total_length
    }

    fn key_at_distance(&self, distance: f64) -> f64 {
        key_at_arc_length(&self.table, distance)
    }

    fn position_at(&self, key: f64) -> Point3 {
        self.point_at(key)
    }

    fn tangent_at(&self, key: f64) -> Option<Vec3> {
        self.derivative_at(key).normalized()
    }

    fn orientation_at(&self, key: f64) -> Quat {
        let tangent = self.tangent_at(key).unwrap_or(Vec3::X);
        Quat::from_xz(tangent, Vec3::Z)
            .or_else(|| Quat::from_xz(tangent, orthogonal_unit_vector(tangent)))
            .unwrap_or(Quat::IDENTITY)
    }
}

// ============================================================================
// Catmull-Rom basis
// ============================================================================

/// Uniform Catmull-Rom interpolation between `p1` and `p2`.
fn catmull_rom(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, u: f64) -> Vec3 {
    let c1 = p2.sub(p0);
    let c2 = p0.mul_scalar(2.0)
        .sub(p1.mul_scalar(5.0))
        .add(p2.mul_scalar(4.0))
        .sub(p3);
    let c3 = p1.mul_scalar(3.0)
        .sub(p0)
        .sub(p2.mul_scalar(3.0))
        .add(p3);
    p1.add(
        c1.mul_scalar(u)
            .add(c2.mul_scalar(u * u))
            .add(c3.mul_scalar(u * u * u))
            .mul_scalar(0.5),
    )
}

/// Derivative of [`catmull_rom`] with respect to the local parameter `u`.
fn catmull_rom_derivative(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, u: f64) -> Vec3 {
    let c1 = p2.sub(p0);
    let c2 = p0.mul_scalar(2.0)
        .sub(p1.mul_scalar(5.0))
        .add(p2.mul_scalar(4.0))
        .sub(p3);
    let c3 = p1.mul_scalar(3.0)
        .sub(p0)
        .sub(p2.mul_scalar(3.0))
        .add(p3);
    c1.add(c2.mul_scalar(2.0 * u))
        .add(c3.mul_scalar(3.0 * u * u))
        .mul_scalar(0.5)
}

// ============================================================================
// Arc-length helpers
// ============================================================================

/// Find the key whose arc length from the start equals `target_length`
/// (binary search plus linear interpolation within the bracketing segment).
fn key_at_arc_length(table: &[ArcLengthEntry], target_length: f64) -> f64 {
    if table.is_empty() {
        return 0.0;
    }
    if table.len() == 1 {
        return table[0].key;
    }

    let total = table.last().map(|e| e.arc_length).unwrap_or(0.0);
    if target_length <= 0.0 {
        return 0.0;
    }
    if target_length >= total {
        return 1.0;
    }

    let idx = table
        .binary_search_by(|entry| {
            entry
                .arc_length
                .partial_cmp(&target_length)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or_else(|i| i.saturating_sub(1));

    let idx = idx.min(table.len() - 2);
    let e0 = table[idx];
    let e1 = table[idx + 1];

    let segment_length = e1.arc_length - e0.arc_length;
    if segment_length.abs() < 1e-14 {
        return e0.key;
    }

    let ratio = (target_length - e0.arc_length) / segment_length;
    e0.key + (e1.key - e0.key) * ratio.clamp(0.0, 1.0)
}

/// A unit vector orthogonal to `v` (for degenerate up-hint fallbacks).
fn orthogonal_unit_vector(v: Vec3) -> Vec3 {
    let candidate = if v.x.abs() < 0.7 { Vec3::X } else { Vec3::Y };
    v.cross(candidate)
        .normalized()
        .unwrap_or(Vec3::Z)
}
