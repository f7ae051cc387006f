//! Character domain: motion math for walking and settling.
//!
//! Everything here works in stage-local space (origin top-left, +y down) and
//! is free of ECS types so the systems stay thin.

use bevy::prelude::*;

use crate::character::Facing;
use crate::config::WidgetConfig;

// ============================================================================
// Walk
// ============================================================================

/// Facing and destination for one walk step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkPlan {
    pub facing: Facing,
    pub target_x: f32,
}

/// Turn around when within `margin` of the edge being walked toward.
pub fn bounce_facing(
    x: f32,
    facing: Facing,
    container_width: f32,
    character_width: f32,
    margin: f32,
) -> Facing {
    match facing {
        Facing::Right if x + character_width >= container_width - margin => Facing::Left,
        Facing::Left if x <= margin => Facing::Right,
        _ => facing,
    }
}

/// Plan the next walk step from the current left offset.
/// Returns `None` when the container has no room to walk in.
pub fn plan_walk_step(
    x: f32,
    facing: Facing,
    container_width: f32,
    character_width: f32,
    config: &WidgetConfig,
) -> Option<WalkPlan> {
    let max_x = container_width - character_width;
    if max_x <= 0.0 {
        return None;
    }

    let facing = bounce_facing(
        x,
        facing,
        container_width,
        character_width,
        config.edge_margin,
    );
    let target_x = match facing {
        Facing::Right => (x + config.walk_step).min(max_x),
        Facing::Left => (x - config.walk_step).max(0.0),
    };

    Some(WalkPlan { facing, target_x })
}

/// Linear interpolation of one scalar over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTween {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub elapsed: f32,
}

impl LinearTween {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.progress()
    }

    /// Step forward by `dt` seconds and return the new value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.advance_with_overflow(dt).0
    }

    /// Like `advance`, also returning the part of `dt` past the end.
    pub fn advance_with_overflow(&mut self, dt: f32) -> (f32, f32) {
        let duration = self.duration.max(0.0);
        let overflow = (self.elapsed + dt - duration).max(0.0);
        self.elapsed = (self.elapsed + dt).min(duration);
        (self.value(), overflow)
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}

// ============================================================================
// Fall
// ============================================================================

/// Resting place for a character dropped at `position`: clamped inside the
/// container horizontally, standing on the floor vertically.
pub fn settle_target(
    position: Vec2,
    container: Vec2,
    character: Vec2,
    floor_inset: f32,
) -> Vec2 {
    let max_x = (container.x - character.x).max(0.0);
    let floor_y = (container.y - character.y - floor_inset).max(0.0);
    Vec2::new(position.x.clamp(0.0, max_x), floor_y)
}

/// Damped spring coefficients plus the thresholds at which it snaps to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub rest_delta: f32,
    pub rest_speed: f32,
}

impl SpringParams {
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self {
            stiffness: config.spring_stiffness,
            damping: config.spring_damping,
            mass: config.spring_mass,
            rest_delta: config.rest_delta,
            rest_speed: config.rest_speed,
        }
    }

    /// Undamped angular frequency.
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::from_config(&WidgetConfig::default())
    }
}

/// One-dimensional spring toward a fixed target, evaluated in closed form
/// from its starting state so results do not depend on frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringMotion {
    pub target: f32,
    /// Displacement from target at t = 0.
    initial_offset: f32,
    initial_velocity: f32,
    pub elapsed: f32,
    pub params: SpringParams,
    at_rest: bool,
}

impl SpringMotion {
    pub fn new(from: f32, to: f32, velocity: f32, params: SpringParams) -> Self {
        let mut spring = Self {
            target: to,
            initial_offset: from - to,
            initial_velocity: velocity,
            elapsed: 0.0,
            params,
            at_rest: false,
        };
        spring.at_rest = spring.within_rest(from - to, velocity);
        spring
    }

    /// Position and velocity `t` seconds after the start.
    pub fn sample(&self, t: f32) -> (f32, f32) {
        let (offset, velocity) = self.offset_at(t);
        (self.target + offset, velocity)
    }

    fn offset_at(&self, t: f32) -> (f32, f32) {
        let d0 = self.initial_offset;
        let v0 = self.initial_velocity;
        let omega = self.params.natural_frequency();
        let zeta = self.params.damping_ratio();

        if (zeta - 1.0).abs() < 1e-4 {
            // Critically damped
            let b = v0 + omega * d0;
            let envelope = (-omega * t).exp();
            let offset = (d0 + b * t) * envelope;
            let velocity = (b - omega * (d0 + b * t)) * envelope;
            (offset, velocity)
        } else if zeta < 1.0 {
            // Underdamped
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let a = d0;
            let b = (v0 + zeta * omega * d0) / omega_d;
            let envelope = (-zeta * omega * t).exp();
            let (sin, cos) = (omega_d * t).sin_cos();
            let offset = envelope * (a * cos + b * sin);
            let velocity = envelope
                * ((-zeta * omega * a + omega_d * b) * cos
                    + (-zeta * omega * b - omega_d * a) * sin);
            (offset, velocity)
        } else {
            // Overdamped
            let root = omega * (zeta * zeta - 1.0).sqrt();
            let r1 = -zeta * omega + root;
            let r2 = -zeta * omega - root;
            let c2 = (v0 - r1 * d0) / (r2 - r1);
            let c1 = d0 - c2;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        }
    }

    fn within_rest(&self, offset: f32, velocity: f32) -> bool {
        offset.abs() < self.params.rest_delta && velocity.abs() < self.params.rest_speed
    }

    /// Current position and velocity.
    pub fn current(&self) -> (f32, f32) {
        if self.at_rest {
            (self.target, 0.0)
        } else {
            self.sample(self.elapsed)
        }
    }

    /// Step forward by `dt` seconds and return the new position.
    /// Snaps exactly onto the target once within the rest thresholds.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if self.at_rest {
            return self.target;
        }
        self.elapsed += dt;
        let (offset, velocity) = self.offset_at(self.elapsed);
        if self.within_rest(offset, velocity) {
            self.at_rest = true;
            return self.target;
        }
        self.target + offset
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }
}

/// A settle toward a 2D resting point, one spring per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleMotion {
    pub x: SpringMotion,
    pub y: SpringMotion,
}

impl SettleMotion {
    pub fn new(from: Vec2, to: Vec2, velocity: Vec2, params: SpringParams) -> Self {
        Self {
            x: SpringMotion::new(from.x, to.x, velocity.x, params),
            y: SpringMotion::new(from.y, to.y, velocity.y, params),
        }
    }

    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target, self.y.target)
    }

    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.x.current().1, self.y.current().1)
    }

    pub fn advance(&mut self, dt: f32) -> Vec2 {
        Vec2::new(self.x.advance(dt), self.y.advance(dt))
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }
}
