mod core;
mod curve;
mod reconstruct;

pub use core::{Point3, Quat, Tolerance, Vec3};
pub use curve::{ParametricCurve, RailSpline};
pub use reconstruct::{
    Centered, ReconstructDiagnostics, ReconstructError, SpatialPoint, build_rail_spline,
    flatten_segments, reconstruct_path,
};

#[cfg(test)]
mod tests;
