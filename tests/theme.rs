#![cfg(not(target_arch = "wasm32"))]

use castaway_frames::theme::{DayPhase, Weathering};
use pretty_assertions::assert_eq;

#[test]
fn day_phases_cover_the_whole_slider() {
    let mut seen = vec![DayPhase::from_slider(0.0)];
    for i in 1..=1000 {
        let phase = DayPhase::from_slider(i as f64 / 10.0);
        if *seen.last().unwrap() != phase {
            seen.push(phase);
        }
    }
    assert_eq!(
        seen,
        vec![DayPhase::Dawn, DayPhase::Noon, DayPhase::Dusk, DayPhase::Midnight]
    );
}

#[test]
fn phase_boundaries() {
    assert_eq!(DayPhase::from_slider(24.9), DayPhase::Dawn);
    assert_eq!(DayPhase::from_slider(25.0), DayPhase::Noon);
    assert_eq!(DayPhase::from_slider(59.9), DayPhase::Noon);
    assert_eq!(DayPhase::from_slider(60.0), DayPhase::Dusk);
    assert_eq!(DayPhase::from_slider(85.0), DayPhase::Midnight);
}

#[test]
fn every_phase_yields_usable_css() {
    for phase in [DayPhase::Dawn, DayPhase::Noon, DayPhase::Dusk, DayPhase::Midnight] {
        assert!(!phase.cover_filter().is_empty());
        assert!(phase.suggestion().contains('→'));
        assert!(phase.swatch().starts_with('#'));
        let (top, bottom) = phase.sky_gradient();
        assert!(top.starts_with('#') && bottom.starts_with('#'));
    }
    assert!(DayPhase::Midnight.is_dark());
    assert!(!DayPhase::Noon.is_dark());
}

#[test]
fn year_one_is_pristine() {
    let w = Weathering::at_year(1.0);
    assert_eq!(w.moss_opacity, 0.0);
    assert_eq!(w.relic_sepia, 0.0);
    assert_eq!(w.relic_opacity, 1.0);
    assert!((w.brightness - 0.95).abs() < 1e-12);
}

#[test]
fn decay_deepens_with_age() {
    let early = Weathering::at_year(2.0);
    let late = Weathering::at_year(9.0);
    assert!(late.brightness < early.brightness);
    assert!(late.saturation < early.saturation);
    assert!(late.moss_opacity > early.moss_opacity);
    assert!(late.relic_sepia > early.relic_sepia);
    assert!(late.relic_opacity < early.relic_opacity);
}

#[test]
fn years_outside_the_dial_clamp() {
    assert_eq!(Weathering::at_year(-5.0), Weathering::at_year(1.0));
    assert_eq!(Weathering::at_year(99.0), Weathering::at_year(10.0));
}

#[test]
fn filters_render_as_css() {
    let w = Weathering::at_year(10.0);
    assert_eq!(w.relic_filter(), "sepia(90%)");
    assert!(w.scene_filter().starts_with("brightness(0.500)"));
}
