//! Scroll-progress mapping for the performance-lab narrative section.
//!
//! The section is tall (roughly two viewports); as it travels through the
//! viewport its bounding rect is reduced to a normalized progress value which
//! in turn selects a narrative stage. The wasm driver recomputes this
//! synchronously on every scroll and resize event.

/// Progress below which the scene is still calm.
pub const STORM_START: f64 = 0.15;

/// Progress at which the storm yields to the aftermath / time-machine scene.
pub const AFTERMATH_START: f64 = 0.6;

/// Page scroll offset past which the sticky action bar is shown
/// (approximately the hero height).
pub const ACTION_BAR_REVEAL: f64 = 800.0;

/// Opacity of the rain overlay while the storm stage is active.
pub const RAIN_OPACITY: f64 = 0.4;

/// Map the tracked section's rect to a progress value in [0, 1].
///
/// `rect_top` is the section top relative to the viewport (negative once it
/// has scrolled past), `rect_height` the section height. Values outside the
/// unit interval occur transiently while the section is off screen and are
/// clamped before use. A degenerate span yields 0 rather than NaN.
pub fn progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    let span = rect_height + viewport_height;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect_top) / span).clamp(0.0, 1.0)
}

/// Linear interpolation between `a` and `b`; `t` is clamped to [0, 1].
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Named segments of the scroll-progress range. The bands are contiguous and
/// together cover all of [0, 1]; boundaries belong to the later stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Calm,
    Storm,
    Aftermath,
}

impl Stage {
    pub fn at(progress: f64) -> Stage {
        let p = progress.clamp(0.0, 1.0);
        if p < STORM_START {
            Stage::Calm
        } else if p < AFTERMATH_START {
            Stage::Storm
        } else {
            Stage::Aftermath
        }
    }

    /// Section backdrop for this stage. Transitions between backdrops are
    /// eased at the CSS level, never swapped mid-frame by the driver.
    pub fn backdrop(self) -> &'static str {
        match self {
            Stage::Calm => "#f5f5f0",
            Stage::Storm => "#1e293b",
            Stage::Aftermath => "#1c1917",
        }
    }

    pub fn rain_opacity(self) -> f64 {
        match self {
            Stage::Storm => RAIN_OPACITY,
            _ => 0.0,
        }
    }

    /// The half-open progress interval owned by this stage.
    pub fn span(self) -> (f64, f64) {
        match self {
            Stage::Calm => (0.0, STORM_START),
            Stage::Storm => (STORM_START, AFTERMATH_START),
            Stage::Aftermath => (AFTERMATH_START, 1.0),
        }
    }
}

/// Normalized position of `p` within its stage's span, in [0, 1]. Drives the
/// continuous blends (rain fade-in and friends) inside a stage.
pub fn stage_blend(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    let (start, end) = Stage::at(p).span();
    if end <= start {
        return 0.0;
    }
    ((p - start) / (end - start)).clamp(0.0, 1.0)
}

/// Whether the sticky action bar should be visible at this scroll offset.
pub fn action_bar_visible(scroll_y: f64) -> bool {
    scroll_y > ACTION_BAR_REVEAL
}
