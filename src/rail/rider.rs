//! Rail motion simulation.
//!
//! A [`RailRider`] owns a parametric curve and advances a position along it
//! every frame: [`update_speed`](RailRider::update_speed) derives the travel
//! speed from the curvature and slope ahead, then
//! [`update_ride`](RailRider::update_ride) integrates the rail position,
//! resolves a ground-compensated target transform, and smooths the mount
//! transform toward it. [`step`](RailRider::step) is the per-frame entry
//! point and fixes the call order.

use crate::geom::{ParametricCurve, Point3, Quat, RailSpline, Tolerance, Vec3};

use super::config::{CoordinateSpace, RiderConfig};
use super::world::WorldQuery;

/// Length of the downward ground-sensing ray, in world units.
const GROUND_RAY_LENGTH: f64 = 1000.0;

/// Mutable per-rider simulation state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RailState {
    /// Fractional progress along the rail, `[0, 1]` (wrapping when looping).
    pub position_on_rail: f64,
    /// Current travel speed. Signed: the sign is the direction of travel.
    pub current_speed: f64,
    /// Accumulated traversal time derived from the rail position.
    pub current_time: f64,
    /// Turn severity sampled last step, `[0, 1]` (0 = straight).
    pub current_turn: f64,
    /// Signed vertical component of the lookahead tangent sampled last step.
    pub current_slope: f64,
}

/// The smoothed, externally observable transform of the riding object.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MountTransform {
    pub position: Point3,
    pub rotation: Quat,
}

/// Simulates an object riding continuously along a parametric curve.
///
/// Single-threaded: each instance must be stepped by one logical thread and
/// shares no state with other instances.
#[derive(Debug, Clone)]
pub struct RailRider<C> {
    curve: C,
    state: RailState,
    mount: MountTransform,
}

impl<C: ParametricCurve> RailRider<C> {
    /// Create a rider at the start of the given curve.
    #[must_use]
    pub fn new(curve: C) -> Self {
        Self {
            curve,
            state: RailState::default(),
            mount: MountTransform::default(),
        }
    }

    #[must_use]
    pub fn curve(&self) -> &C {
        &self.curve
    }

    /// Mutable curve access for setup-time edits. Per-tick code only reads.
    pub fn curve_mut(&mut self) -> &mut C {
        &mut self.curve
    }

    #[must_use]
    pub fn state(&self) -> &RailState {
        &self.state
    }

    /// Mutable state access for hosts that seed the rail position or speed.
    pub fn state_mut(&mut self) -> &mut RailState {
        &mut self.state
    }

    #[must_use]
    pub fn mount(&self) -> MountTransform {
        self.mount
    }

    /// Advance one simulation frame: speed first, then ride.
    ///
    /// The order is a contract, not an accident — the ride's traversal time
    /// is computed from the speed this frame just produced.
    pub fn step<W: WorldQuery>(
        &mut self,
        config: &RiderConfig,
        world: &W,
        delta_time: f64,
        time_dilation: f64,
    ) {
        self.update_speed(config, delta_time, time_dilation);
        self.update_ride(config, world, delta_time, time_dilation);
    }

    /// Derive the current travel speed from the curve geometry ahead.
    ///
    /// Samples the tangent at the rider and at `turn_slope_lookahead` units
    /// further along, updating `current_turn` and `current_slope`, then
    /// moves `current_speed` toward the adjusted target. With slope
    /// adjustment enabled the speed snaps to the target unsmoothed; the
    /// slope branch and the rate-limited branch are mutually exclusive.
    pub fn update_speed(&mut self, config: &RiderConfig, delta_time: f64, time_dilation: f64) {
        let effective_dt = effective_delta_time(config, delta_time, time_dilation);
        let mut target_speed = config.speed;

        let arc_length = self.curve.arc_length();
        let station = self.state.position_on_rail * arc_length;
        let current_key = self.curve.key_at_distance(station);
        let lookahead_key = self
            .curve
            .key_at_distance(station + config.turn_slope_lookahead);

        let current_dir = self.curve.tangent_at(current_key).unwrap_or(Vec3::ZERO);
        let lookahead_dir = self.curve.tangent_at(lookahead_key).unwrap_or(Vec3::ZERO);

        self.state.current_turn = 1.0 - current_dir.dot(lookahead_dir).abs();
        if config.adjust_speed_by_turn {
            target_speed -= map_range_clamped(
                self.state.current_turn,
                config.min_turn,
                config.max_turn,
                0.0,
                config.turn_speed_loss,
            );
        }

        self.state.current_slope = lookahead_dir.z;
        if config.adjust_speed_by_slope {
            target_speed += map_range_clamped(
                self.state.current_slope,
                config.min_slope,
                config.max_slope,
                config.slope_speed_gain,
                -config.turn_speed_loss,
            );
            self.state.current_speed = target_speed;
        } else if target_speed < self.state.current_speed {
            self.state.current_speed -=
                (config.deceleration * effective_dt).min(self.state.current_speed - target_speed);
        } else {
            self.state.current_speed +=
                (config.acceleration * effective_dt).min(target_speed - self.state.current_speed);
        }
    }

    /// Integrate the rail position and smooth the mount transform toward the
    /// (optionally ground-compensated) target transform.
    pub fn update_ride<W: WorldQuery>(
        &mut self,
        config: &RiderConfig,
        world: &W,
        delta_time: f64,
        time_dilation: f64,
    ) {
        let effective_dt = effective_delta_time(config, delta_time, time_dilation);

        if !self.state.position_on_rail.is_finite() {
            log::warn!("rail position is not finite, resetting to start");
            self.state.position_on_rail = 0.0;
        }

        let arc_length = self.curve.arc_length();
        let speed_magnitude = self
            .state
            .current_speed
            .abs()
            .max(Tolerance::TIME_DILATION.eps);
        let total_time = arc_length / speed_magnitude;

        // A zero-length curve or zero speed makes no progress; the transform
        // still resolves at the current position.
        if total_time.is_finite() && total_time > 0.0 {
            self.state.current_time = total_time * self.state.position_on_rail
                + direction_sign(self.state.current_speed) * effective_dt;
            let ratio = self.state.current_time / total_time;
            self.state.position_on_rail = if config.looping {
                wrap_unit(ratio)
            } else {
                ratio.clamp(0.0, 1.0)
            };
        }

        let key = self
            .curve
            .key_at_distance(self.state.position_on_rail * arc_length);
        let rail_position = self.curve.position_at(key);
        let rail_rotation = self.curve.orientation_at(key);
        let mut target = MountTransform {
            position: rail_position,
            rotation: rail_rotation,
        };

        if world.is_interactive() {
            let up = rail_rotation.up_vector();
            let from = rail_position + up * config.ground_tolerance;
            let to = rail_position - up * GROUND_RAY_LENGTH;
            match world.ray_cast(from, to, config.ground_channel) {
                Some(hit) => {
                    if config.ground_compensation {
                        target.position = rail_position
                            .lerp(hit.position, config.ground_compensation_scale)
                            + up * config.ground_offset;
                    }
                    if config.align_to_ground_normal {
                        if let Some(aligned) =
                            Quat::from_xz(rail_rotation.forward_vector(), hit.normal)
                        {
                            target.rotation =
                                Quat::slerp(rail_rotation, aligned, config.normal_influence);
                        }
                    }
                }
                None => log::warn!(
                    "ground ray missed below rail position ({:.3}, {:.3}, {:.3})",
                    rail_position.x,
                    rail_position.y,
                    rail_position.z
                ),
            }
        }

        // Mount smoothing runs on the raw delta time, independent of the
        // time-dilation compensation applied to travel.
        let translation_alpha = (config.translation_smoothing * delta_time).clamp(0.0, 1.0);
        let rotation_alpha = (config.rotation_smoothing * delta_time).clamp(0.0, 1.0);
        self.mount.position = self.mount.position.lerp(target.position, translation_alpha);
        self.mount.rotation = Quat::slerp(self.mount.rotation, target.rotation, rotation_alpha);
    }
}

impl RailRider<RailSpline> {
    /// Replace this rider's spline points with a copy of another spline's.
    ///
    /// Setup-time operation: clears the owned spline, appends every source
    /// point (offset by `source_origin` in world space, verbatim in local
    /// space), then rebuilds.
    pub fn copy_spline_points(
        &mut self,
        source: &RailSpline,
        source_origin: Vec3,
        space: CoordinateSpace,
    ) {
        self.curve.clear_points();
        for &point in source.points() {
            let copied = match space {
                CoordinateSpace::Local => point,
                CoordinateSpace::World => point + source_origin,
            };
            self.curve.add_point(copied);
        }
        self.curve.rebuild();
    }
}

/// Delta time adjusted for world time dilation, when compensation is on.
/// The dilation factor is floored to avoid division blow-up.
fn effective_delta_time(config: &RiderConfig, delta_time: f64, time_dilation: f64) -> f64 {
    if config.compensate_time_scale {
        delta_time / time_dilation.max(Tolerance::TIME_DILATION.eps)
    } else {
        delta_time
    }
}

/// Three-valued sign: -1, 0, or 1.
fn direction_sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Fractional part wrapped into `[0, 1)`, negative-safe.
fn wrap_unit(value: f64) -> f64 {
    value - value.floor()
}

/// Map `value` from `[in_min, in_max]` to `[out_min, out_max]`, clamped to
/// the output range.
#[must_use]
pub fn map_range_clamped(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = in_max - in_min;
    if span.abs() <= f64::EPSILON {
        return out_min;
    }
    let pct = ((value - in_min) / span).clamp(0.0, 1.0);
    out_min + (out_max - out_min) * pct
}
