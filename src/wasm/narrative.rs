//! Scroll-driven narrative: calm patio, storm, then the time-machine
//! aftermath. Progress is recomputed synchronously on every scroll and
//! resize event; the stage blends themselves are CSS transitions, so no
//! stage is ever swapped discontinuously on screen.

use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, Event, HtmlElement, HtmlInputElement, MouseEvent};

use crate::physics::{magnetic_offset, Vec2};
use crate::scroll::{action_bar_visible, lerp, progress, stage_blend, Stage};
use crate::theme::Weathering;
use crate::wasm::require;

struct SceneNodes {
    section: HtmlElement,
    rain: HtmlElement,
    storm_copy: HtmlElement,
    ghost: HtmlElement,
    cover: HtmlElement,
    time_machine: HtmlElement,
    action_bar: HtmlElement,
}

fn apply(nodes: &SceneNodes, viewport_height: f64, scroll_y: f64) {
    let rect = nodes.section.get_bounding_client_rect();
    let p = progress(rect.top(), rect.height(), viewport_height);
    let stage = Stage::at(p);

    let _ = nodes
        .section
        .style()
        .set_property("background-color", stage.backdrop());
    // Rain ramps in over the first fifth of its stage instead of popping.
    let rain = lerp(0.0, stage.rain_opacity(), (stage_blend(p) * 5.0).min(1.0));
    let _ = nodes
        .rain
        .style()
        .set_property("opacity", &format!("{rain:.3}"));

    let stormy = stage == Stage::Storm;
    let aftermath = stage == Stage::Aftermath;

    // Headline copy slides away once the time machine takes over.
    let copy = nodes.storm_copy.style();
    let _ = copy.set_property("opacity", if aftermath { "0" } else { "1" });
    let _ = copy.set_property(
        "transform",
        if aftermath { "translateY(-50px)" } else { "none" },
    );

    // The uncovered furniture blows away in the storm; the cover stays.
    let ghost = nodes.ghost.style();
    let _ = ghost.set_property(
        "transform",
        if stormy {
            "translateX(400px) rotate(45deg)"
        } else {
            "translateX(0) rotate(0)"
        },
    );
    let _ = ghost.set_property("opacity", if stormy { "0" } else { "0.5" });
    let _ = if stormy {
        nodes.cover.class_list().add_1("wind-shake")
    } else {
        nodes.cover.class_list().remove_1("wind-shake")
    };

    let tm = nodes.time_machine.style();
    let _ = tm.set_property("opacity", if aftermath { "1" } else { "0" });
    let _ = tm.set_property("pointer-events", if aftermath { "auto" } else { "none" });

    let _ = if action_bar_visible(scroll_y) {
        nodes.action_bar.class_list().add_1("visible")
    } else {
        nodes.action_bar.class_list().remove_1("visible")
    };
}

fn wire_year_slider(document: &Document) -> Result<(), JsValue> {
    let slider: HtmlInputElement = require(document, "year-slider")?.unchecked_into();
    let label = require(document, "year-label")?;
    let scene = require(document, "patio-scene")?;
    let moss = require(document, "moss-overlay")?;
    let relic = require(document, "relic")?;

    let apply_year = move |year: f64| {
        let w = Weathering::at_year(year);
        let _ = scene.style().set_property("filter", &w.scene_filter());
        let _ = moss
            .style()
            .set_property("opacity", &format!("{:.3}", w.moss_opacity));
        let relic_style = relic.style();
        let _ = relic_style.set_property("filter", &w.relic_filter());
        let _ = relic_style.set_property("opacity", &format!("{:.3}", w.relic_opacity));
        label.set_text_content(Some(&format!("Year {}", year.floor() as i64)));
    };
    apply_year(Weathering::FIRST_YEAR);

    let closure = {
        let slider = slider.clone();
        Closure::wrap(Box::new(move |_: Event| {
            let year = slider.value().parse::<f64>().unwrap_or(Weathering::FIRST_YEAR);
            apply_year(year);
        }) as Box<dyn FnMut(Event)>)
    };
    slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn wire_magnetic_cta(document: &Document) -> Result<(), JsValue> {
    let button = require(document, "magnetic-cta")?;

    let move_closure = {
        let button = button.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            let rect = button.get_bounding_client_rect();
            let center = Vec2::new(
                rect.left() + rect.width() / 2.0,
                rect.top() + rect.height() / 2.0,
            );
            let offset = magnetic_offset(
                Vec2::new(e.client_x() as f64, e.client_y() as f64),
                center,
            );
            let _ = button.style().set_property(
                "transform",
                &format!("translate({:.2}px, {:.2}px)", offset.x, offset.y),
            );
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    button.add_event_listener_with_callback("mousemove", move_closure.as_ref().unchecked_ref())?;
    move_closure.forget();

    let leave_closure = {
        let button = button.clone();
        Closure::wrap(Box::new(move |_: MouseEvent| {
            let _ = button.style().set_property("transform", "translate(0, 0)");
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    button.add_event_listener_with_callback("mouseleave", leave_closure.as_ref().unchecked_ref())?;
    leave_closure.forget();
    Ok(())
}

pub fn start(document: &Document) -> Result<(), JsValue> {
    let nodes = Rc::new(SceneNodes {
        section: require(document, "performance-lab")?,
        rain: require(document, "rain-overlay")?,
        storm_copy: require(document, "storm-copy")?,
        ghost: require(document, "ghost-furniture")?,
        cover: require(document, "anchored-cover")?,
        time_machine: require(document, "time-machine")?,
        action_bar: require(document, "action-bar")?,
    });

    let on_scroll = {
        let nodes = nodes.clone();
        Closure::wrap(Box::new(move || {
            let Some(win) = window() else { return };
            let viewport_height = win
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let scroll_y = win.scroll_y().unwrap_or(0.0);
            apply(&nodes, viewport_height, scroll_y);
        }) as Box<dyn FnMut()>)
    };
    let win = window().ok_or("no window")?;
    win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    // Robustness for resize
    win.add_event_listener_with_callback("resize", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();

    // Initial paint before the first scroll event.
    let viewport_height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    apply(&nodes, viewport_height, win.scroll_y().unwrap_or(0.0));

    wire_year_slider(document)?;
    wire_magnetic_cta(document)?;
    Ok(())
}
