//! rail-engine - path reconstruction and rail motion over 3D splines.
//!
//! # Architecture
//!
//! Layered modules with strict inward-only dependencies:
//!
//! - **geom**: Math primitives (Vec3, Point3, Quat, Tolerance), the
//!   [`ParametricCurve`] abstraction with its [`RailSpline`] implementation,
//!   and greedy nearest-neighbor path reconstruction.
//! - **rail**: The frame-stepped motion simulator ([`RailRider`]) with its
//!   configuration surface and the [`WorldQuery`] ground-sensing capability.
//!
//! # Usage
//!
//! ```
//! use rail_engine::{
//!     CollisionChannel, Point3, RailRider, RailSpline, RayHit, RiderConfig, WorldQuery,
//! };
//!
//! struct NoGround;
//! impl WorldQuery for NoGround {
//!     fn ray_cast(
//!         &self,
//!         _from: Point3,
//!         _to: Point3,
//!         _channel: CollisionChannel,
//!     ) -> Option<RayHit> {
//!         None
//!     }
//!     fn is_interactive(&self) -> bool {
//!         false
//!     }
//! }
//!
//! let spline = RailSpline::with_points(
//!     vec![Point3::new(0.0, 0.0, 0.0), Point3::new(100.0, 0.0, 0.0)],
//!     false,
//! );
//! let mut rider = RailRider::new(spline);
//! let config = RiderConfig {
//!     speed: 10.0,
//!     acceleration: 100.0,
//!     ..RiderConfig::default()
//! };
//! rider.step(&config, &NoGround, 1.0 / 60.0, 1.0);
//! ```

pub mod geom;
pub mod rail;

// Re-export commonly used types at crate root
pub use geom::{
    Centered, ParametricCurve, Point3, Quat, RailSpline, ReconstructDiagnostics, ReconstructError,
    SpatialPoint, Tolerance, Vec3, build_rail_spline, flatten_segments, reconstruct_path,
};
pub use rail::{
    CollisionChannel, CoordinateSpace, MountTransform, RailRider, RailState, RayHit, RiderConfig,
    WorldQuery,
};
