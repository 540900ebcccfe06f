//! Mood themes for the chameleon shade picker and the time-machine decay
//! slider. Pure lookup tables and slider math; the wasm drivers only apply
//! the resulting CSS values.

/// Time-of-day bands selected by the 0–100 daylight slider. Bands are
/// contiguous; out-of-range values clamp into the nearest band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayPhase {
    Dawn,
    Noon,
    Dusk,
    Midnight,
}

impl DayPhase {
    pub fn from_slider(value: f64) -> DayPhase {
        if value < 25.0 {
            DayPhase::Dawn
        } else if value < 60.0 {
            DayPhase::Noon
        } else if value < 85.0 {
            DayPhase::Dusk
        } else {
            DayPhase::Midnight
        }
    }

    /// CSS filter applied to the cover image. Each phase picks the
    /// complementary palette: cool morning light gets a warm cover, golden
    /// hour a deep navy, and so on.
    pub fn cover_filter(self) -> &'static str {
        match self {
            DayPhase::Dawn => "sepia(0.3) hue-rotate(10deg)",
            DayPhase::Noon => "grayscale(0.5) brightness(1.1)",
            DayPhase::Dusk => "brightness(0.7) sepia(0.5) hue-rotate(180deg) saturate(1.5)",
            DayPhase::Midnight => "grayscale(1) brightness(1.5) contrast(1.2)",
        }
    }

    /// Human-readable shade suggestion shown under the slider.
    pub fn suggestion(self) -> &'static str {
        match self {
            DayPhase::Dawn => "Morning Haze → Warm Sand",
            DayPhase::Noon => "Midday Sun → Cool Slate",
            DayPhase::Dusk => "Golden Hour → Deep Navy",
            DayPhase::Midnight => "Midnight → Ghost Silver",
        }
    }

    /// Swatch color matching the suggested shade.
    pub fn swatch(self) -> &'static str {
        match self {
            DayPhase::Dawn => "#d6d3d1",
            DayPhase::Noon => "#d6d3d1",
            DayPhase::Dusk => "#1e3a8a",
            DayPhase::Midnight => "#e2e8f0",
        }
    }

    /// Sky gradient endpoints for the backdrop behind the cover.
    pub fn sky_gradient(self) -> (&'static str, &'static str) {
        match self {
            DayPhase::Dawn => ("#ffedd5", "#bfdbfe"),
            DayPhase::Noon => ("#bae6fd", "#ffffff"),
            DayPhase::Dusk => ("#fb923c", "#312e81"),
            DayPhase::Midnight => ("#0f172a", "#000000"),
        }
    }

    /// Whether the surrounding copy should flip to its dark-backdrop colors.
    pub fn is_dark(self) -> bool {
        matches!(self, DayPhase::Midnight)
    }
}

/// Visual decay of the unprotected scene at a given simulated year.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weathering {
    /// Scene brightness multiplier, fades with age.
    pub brightness: f64,
    /// Scene saturation multiplier, fades in lockstep with brightness.
    pub saturation: f64,
    /// Opacity of the moss/mildew overlay.
    pub moss_opacity: f64,
    /// Sepia percentage applied to the decaying furniture.
    pub relic_sepia: f64,
    /// Remaining opacity of the decaying furniture.
    pub relic_opacity: f64,
}

impl Weathering {
    pub const FIRST_YEAR: f64 = 1.0;
    pub const LAST_YEAR: f64 = 10.0;

    /// Decay state at `year`, clamped into 1..=10. Year one is the unboxing:
    /// no moss, no sepia, the relic fully visible.
    pub fn at_year(year: f64) -> Weathering {
        let y = year.clamp(Self::FIRST_YEAR, Self::LAST_YEAR);
        let age = y - Self::FIRST_YEAR;
        Weathering {
            brightness: 1.0 - y * 0.05,
            saturation: 1.0 - y * 0.05,
            moss_opacity: age / 15.0,
            relic_sepia: age * 10.0,
            relic_opacity: 1.0 - age * 0.05,
        }
    }

    /// CSS filter string for the overall scene.
    pub fn scene_filter(&self) -> String {
        format!(
            "brightness({:.3}) saturate({:.3})",
            self.brightness, self.saturation
        )
    }

    /// CSS filter string for the decaying furniture.
    pub fn relic_filter(&self) -> String {
        format!("sepia({:.0}%)", self.relic_sepia)
    }
}
