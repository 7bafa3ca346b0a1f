
use crate::geom::{Point3, Vec3};
use crate::rail::{CollisionChannel, RayHit, WorldQuery};

/// Non-interactive world: ground resolution must never run.
pub(crate) struct PreviewWorld;

impl WorldQuery for PreviewWorld {
    fn ray_cast(&self, _from: Point3, _to: Point3, _channel: CollisionChannel) -> Option<RayHit> {
        unreachable!("preview worlds must not be ray cast");
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Interactive world with nothing in it.
pub(crate) struct EmptyWorld;

impl WorldQuery for EmptyWorld {
    fn ray_cast(&self, _from: Point3, _to: Point3, _channel: CollisionChannel) -> Option<RayHit> {
        None
    }
}

/// Infinite horizontal ground plane at a fixed height.
pub(crate) struct FlatGround {
    pub height: f64,
}

impl WorldQuery for FlatGround {
    fn ray_cast(&self, from: Point3, to: Point3, _channel: CollisionChannel) -> Option<RayHit> {
        let dz = to.z - from.z;
        if dz.abs() < 1e-12 {
            return None;
        }
        let t = (self.height - from.z) / dz;
        if !(0.0..=1.0).contains(&t) {
            return None;
        }
        Some(RayHit {
            position: from.lerp(to, t),
            normal: Vec3::Z,
        })
    }
}

/// Ground that always reports a hit directly below the ray start, with a
/// caller-chosen surface normal.
pub(crate) struct TiltedGround {
    pub normal: Vec3,
}

impl WorldQuery for TiltedGround {
    fn ray_cast(&self, from: Point3, _to: Point3, _channel: CollisionChannel) -> Option<RayHit> {
        Some(RayHit {
            position: Point3::new(from.x, from.y, 0.0),
            normal: self.normal,
        })
    }
}
