//! Pointer-velocity physics driving the "sway" and parallax effects.
//!
//! The tracker integrates nothing fancier than a clamped per-event delta and a
//! geometric decay per animation frame. It is deliberately free of `web_sys`
//! types so the numeric behaviour can be tested on the host; the wasm driver
//! owns the event wiring and the per-frame DOM writes.

/// Per-axis clamp applied to raw pointer deltas.
pub const MAX_VELOCITY: f64 = 50.0;

/// Geometric decay factor applied once per animation frame (air drag).
pub const DECAY: f64 = 0.92;

/// Below this magnitude on both axes the velocity snaps to exactly zero so
/// the frame driver can stop touching the DOM.
pub const REST_EPSILON: f64 = 0.01;

/// Velocity-to-rotation gain used by the sway transform.
pub const SWAY_GAIN: f64 = 0.5;

/// Dampening divisor for the magnetic button offset. The button follows the
/// cursor at a third of the distance, which reads as tension rather than
/// tracking.
pub const MAGNETIC_TENSION: f64 = 3.0;

/// A plain 2D vector. Screen coordinates: +x right, +y down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }
}

fn clamp_axis(v: f64) -> f64 {
    v.clamp(-MAX_VELOCITY, MAX_VELOCITY)
}

/// Samples pointer deltas and exposes a decaying velocity vector.
///
/// Lifecycle per frame: consumers call [`PointerTracker::sample`] from the
/// pointer-move handler (any number of times, last one wins) and
/// [`PointerTracker::step`] exactly once from the animation-frame callback.
#[derive(Debug)]
pub struct PointerTracker {
    last: Option<Vec2>,
    velocity: Vec2,
    enabled: bool,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        PointerTracker {
            last: None,
            velocity: Vec2::ZERO,
            enabled: true,
        }
    }

    /// Enable or disable sampling. Disabling (the reduced-motion path) clears
    /// the current velocity so no residual sway leaks out.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.velocity = Vec2::ZERO;
            self.last = None;
        }
    }

    /// Record a pointer position. The velocity becomes the clamped delta from
    /// the previous position. The very first sample only establishes the
    /// reference point; it never produces a kick from the coordinate origin.
    pub fn sample(&mut self, x: f64, y: f64) {
        if !self.enabled {
            return;
        }
        let pos = Vec2::new(x, y);
        if let Some(last) = self.last {
            self.velocity = Vec2::new(clamp_axis(pos.x - last.x), clamp_axis(pos.y - last.y));
        }
        self.last = Some(pos);
    }

    /// Advance one animation frame: decay the velocity and snap to exactly
    /// zero once both components are within [`REST_EPSILON`]. Returns the
    /// post-step velocity.
    pub fn step(&mut self) -> Vec2 {
        self.velocity.x *= DECAY;
        self.velocity.y *= DECAY;
        if self.velocity.x.abs() <= REST_EPSILON && self.velocity.y.abs() <= REST_EPSILON {
            self.velocity = Vec2::ZERO;
        }
        self.velocity
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// True once the velocity has snapped to zero; the frame driver skips
    /// DOM writes while at rest.
    pub fn at_rest(&self) -> bool {
        self.velocity == Vec2::ZERO
    }

    /// Current sway rotation in degrees: horizontal motion tilts around the
    /// Y axis, vertical motion tilts the opposite way around X.
    pub fn sway(&self) -> Vec2 {
        Vec2::new(self.velocity.x * SWAY_GAIN, self.velocity.y * -SWAY_GAIN)
    }
}

/// Offset applied to a magnetic button while the cursor hovers it: a damped
/// pull of the element toward the cursor, relative to the element center.
pub fn magnetic_offset(cursor: Vec2, center: Vec2) -> Vec2 {
    Vec2::new(
        (cursor.x - center.x) / MAGNETIC_TENSION,
        (cursor.y - center.y) / MAGNETIC_TENSION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_produces_no_velocity() {
        let mut t = PointerTracker::new();
        t.sample(900.0, 400.0);
        assert_eq!(t.velocity(), Vec2::ZERO);
    }

    #[test]
    fn disabled_tracker_ignores_samples() {
        let mut t = PointerTracker::new();
        t.sample(0.0, 0.0);
        t.sample(30.0, 30.0);
        t.set_enabled(false);
        t.sample(500.0, 500.0);
        assert_eq!(t.step(), Vec2::ZERO);
    }
}
