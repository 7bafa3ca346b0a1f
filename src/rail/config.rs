//! Rider configuration.

use serde::{Deserialize, Serialize};

use super::world::CollisionChannel;

/// Coordinate space selector for point copying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinateSpace {
    /// Points are copied verbatim, in the source spline's own space.
    #[default]
    Local,
    /// Points are offset by the source's world origin.
    World,
}

/// Configuration for a [`RailRider`](super::RailRider).
///
/// One immutable value passed into each step call so that the update
/// functions stay pure in `(state, config, delta_time)`; hosts that expose
/// these as editable properties rebuild the value per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiderConfig {
    /// Base travel speed in world units per second. Signed: a negative value
    /// rides the rail backwards.
    pub speed: f64,
    /// Maximum speed increase per second while below the target speed.
    pub acceleration: f64,
    /// Maximum speed decrease per second while above the target speed.
    pub deceleration: f64,

    /// Reduce the target speed on curvature ahead.
    pub adjust_speed_by_turn: bool,
    /// Turn value at which speed loss starts.
    pub min_turn: f64,
    /// Turn value at which the full `turn_speed_loss` applies.
    pub max_turn: f64,
    /// Speed subtracted at `max_turn`.
    pub turn_speed_loss: f64,

    /// Adjust the target speed by the slope ahead. When set, the speed snaps
    /// to the adjusted target with no acceleration/deceleration limiting.
    pub adjust_speed_by_slope: bool,
    /// Slope value mapped to the full `slope_speed_gain`.
    pub min_slope: f64,
    /// Slope value mapped to `-turn_speed_loss`.
    pub max_slope: f64,
    /// Speed added at `min_slope`.
    pub slope_speed_gain: f64,

    /// Arc-length distance ahead of the rider at which turn and slope are
    /// sampled.
    pub turn_slope_lookahead: f64,

    /// Wrap around at the rail ends instead of stopping.
    pub looping: bool,
    /// Divide delta time by the world time-dilation factor so travel speed
    /// stays invariant under time scaling.
    pub compensate_time_scale: bool,

    /// Pull the target position toward the sensed ground hit.
    pub ground_compensation: bool,
    /// Distance above the rail position at which the ground ray starts.
    pub ground_tolerance: f64,
    /// Offset along the local up axis applied after ground snapping.
    pub ground_offset: f64,
    /// Blend factor from the rail position toward the ground hit (1 = snap).
    pub ground_compensation_scale: f64,
    /// Rotate the target orientation toward the sensed ground normal.
    pub align_to_ground_normal: bool,
    /// Blend factor toward the ground-normal-aligned orientation.
    pub normal_influence: f64,
    /// Trace channel for the ground ray.
    pub ground_channel: CollisionChannel,

    /// Exponential smoothing rate for the mount position.
    pub translation_smoothing: f64,
    /// Exponential smoothing rate for the mount rotation.
    pub rotation_smoothing: f64,
}

impl Default for RiderConfig {
    fn default() -> Self {
        Self {
            speed: 0.0,
            acceleration: 0.0,
            deceleration: 0.0,
            adjust_speed_by_turn: false,
            min_turn: 0.0,
            max_turn: 0.0,
            turn_speed_loss: 0.0,
            adjust_speed_by_slope: false,
            min_slope: 0.0,
            max_slope: 0.0,
            slope_speed_gain: 0.0,
            turn_slope_lookahead: 0.0,
            looping: false,
            compensate_time_scale: false,
            ground_compensation: false,
            ground_tolerance: 20.0,
            ground_offset: 130.0,
            ground_compensation_scale: 1.0,
            align_to_ground_normal: false,
            normal_influence: 1.0,
            ground_channel: CollisionChannel::Camera,
            translation_smoothing: 2.0,
            rotation_smoothing: 2.0,
        }
    }
}
