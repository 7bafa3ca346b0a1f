//! Greedy nearest-neighbor path reconstruction.
//!
//! Landscape editing tools hand over spline interpolation points as unordered
//! per-segment runs; this module chains them back into an ordered path and
//! feeds the result into a [`RailSpline`].
//!
//! # Operations
//! - **Reconstruct**: Orders an unordered point set by greedy
//!   nearest-neighbor chaining.
//! - **Flatten**: Concatenates per-segment point runs, dropping seam
//!   duplicates.
//! - **Build**: Clear-then-append construction of a rail spline from raw
//!   segments.

use super::core::Point3;
use super::curve::{ParametricCurve, RailSpline};

/// Anything with a spatial center position.
///
/// Reconstruction only reads the center; all other fields of the implementing
/// type ride along untouched.
pub trait Centered {
    #[must_use]
    fn center(&self) -> Point3;
}

impl Centered for Point3 {
    fn center(&self) -> Point3 {
        *self
    }
}

/// A minimal spatial control point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialPoint {
    pub center: Point3,
}

impl SpatialPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            center: Point3::new(x, y, z),
        }
    }
}

impl Centered for SpatialPoint {
    fn center(&self) -> Point3 {
        self.center
    }
}

/// Errors that can occur during path reconstruction.
#[derive(Debug, thiserror::Error)]
pub enum ReconstructError {
    /// A reconstruction step failed to shrink the unvisited set by exactly
    /// one point. This is an internal-consistency failure, never an input
    /// problem.
    #[error("reconstruction step {step} failed to shrink the unvisited set ({before} -> {after})")]
    RemovalFailed {
        step: usize,
        before: usize,
        after: usize,
    },
}

/// Diagnostics for path reconstruction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconstructDiagnostics {
    /// Number of input points.
    pub input_point_count: usize,
    /// Number of output points (equals the input count on success).
    pub output_point_count: usize,
    /// Total length of the chained path (sum of consecutive center distances).
    pub chained_length: f64,
    /// Warnings generated during the operation.
    pub warnings: Vec<String>,
}

/// Orders an unordered point set into a path by greedy nearest-neighbor
/// chaining.
///
/// The first input point seeds the path; each following point is the one
/// whose center is closest to the most recently emitted point's center, with
/// ties broken toward the lower input index. The output is a permutation of
/// the input. O(n²) in the point count, which is acceptable for the expected
/// sizes (tens to low hundreds of points per landscape spline).
///
/// An empty input yields an empty path with a diagnostics warning; this is
/// part of the contract, not an error.
///
/// # Errors
/// Returns [`ReconstructError::RemovalFailed`] if a step fails to consume
/// exactly one point from the unvisited set.
pub fn reconstruct_path<T: Centered>(
    points: Vec<T>,
) -> Result<(Vec<T>, ReconstructDiagnostics), ReconstructError> {
    let mut diagnostics = ReconstructDiagnostics {
        input_point_count: points.len(),
        ..Default::default()
    };

    if points.is_empty() {
        diagnostics
            .warnings
            .push("empty input point set".to_string());
        return Ok((Vec::new(), diagnostics));
    }

    let mut remaining = points;
    let mut path = Vec::with_capacity(remaining.len());

    let seed = remaining.remove(0);
    let mut anchor = seed.center();
    path.push(seed);

    let mut step = 0;
    while !remaining.is_empty() {
        step += 1;
        let before = remaining.len();
        let nearest = find_nearest_index(&remaining, anchor);
        let chosen = remaining.remove(nearest);
        let after = remaining.len();
        if after + 1 != before {
            return Err(ReconstructError::RemovalFailed {
                step,
                before,
                after,
            });
        }

        let center = chosen.center();
        diagnostics.chained_length += anchor.distance_to(center);
        anchor = center;
        path.push(chosen);
    }

    diagnostics.output_point_count = path.len();
    log::debug!(
        "reconstructed path of {} points, chained length {:.3}",
        diagnostics.output_point_count,
        diagnostics.chained_length
    );
    Ok((path, diagnostics))
}

/// Index of the point whose center is nearest to `anchor`.
///
/// Linear scan keeping the first minimum found, so equal distances resolve
/// to the lowest index.
fn find_nearest_index<T: Centered>(points: &[T], anchor: Point3) -> usize {
    let mut nearest_index = 0;
    let mut nearest_dist_squared = f64::INFINITY;
    for (i, point) in points.iter().enumerate() {
        let dist_squared = anchor.distance_squared_to(point.center());
        if dist_squared < nearest_dist_squared {
            nearest_dist_squared = dist_squared;
            nearest_index = i;
        }
    }
    nearest_index
}

/// Concatenates per-segment point runs into one set, dropping each segment's
/// final point.
///
/// Adjacent landscape spline segments share their boundary interpolation
/// point, so every segment's last point duplicates a neighbor's first.
#[must_use]
pub fn flatten_segments<T>(segments: Vec<Vec<T>>) -> Vec<T> {
    let mut flat = Vec::new();
    for mut segment in segments {
        segment.pop();
        flat.extend(segment);
    }
    flat
}

/// Builds a [`RailSpline`] from raw per-segment point runs.
///
/// Flattens the segments, reconstructs the greedy path ordering, then appends
/// the ordered centers to a fresh spline and rebuilds it (the clear-then-
/// append flow a host spline component expects).
///
/// # Errors
/// Propagates [`ReconstructError`] from the reconstruction step.
pub fn build_rail_spline<T: Centered>(
    segments: Vec<Vec<T>>,
) -> Result<(RailSpline, ReconstructDiagnostics), ReconstructError> {
    let flat = flatten_segments(segments);
    let (ordered, diagnostics) = reconstruct_path(flat)?;

    let mut spline = RailSpline::new();
    for point in &ordered {
        spline.add_point(point.center());
    }
    spline.rebuild();
    log::debug!(
        "built rail spline from {} reconstructed points ({:.3} units long)",
        spline.point_count(),
        spline.arc_length()
    );
    Ok((spline, diagnostics))
}
