//! World sensing capability.
//!
//! The simulator never owns scene geometry; it senses the ground through
//! this narrow trait, which a host scene/physics service implements.

use serde::{Deserialize, Serialize};

use crate::geom::{Point3, Vec3};

/// Named trace channels a world query can filter on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionChannel {
    #[default]
    Camera,
    Visibility,
    WorldStatic,
}

/// Nearest hit returned by a ray cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// World-space hit position.
    pub position: Point3,
    /// Surface normal at the hit.
    pub normal: Vec3,
}

/// Scene query service.
pub trait WorldQuery {
    /// Cast a ray from `from` to `to` on `channel`, returning the nearest
    /// hit or `None` on a miss. Synchronous and bounded by the implementor's
    /// own contract.
    fn ray_cast(&self, from: Point3, to: Point3, channel: CollisionChannel) -> Option<RayHit>;

    /// Whether this world is interactive. Non-interactive (preview) worlds
    /// skip ground resolution entirely.
    fn is_interactive(&self) -> bool {
        true
    }
}
