mod config;
mod rider;
mod world;

pub use config::{CoordinateSpace, RiderConfig};
pub use rider::{MountTransform, RailRider, RailState, map_range_clamped};
pub use world::{CollisionChannel, RayHit, WorldQuery};

#[cfg(test)]
mod tests;
