//! Pointer-velocity animation driver.
//!
//! Owns direct references to its targets and writes `--sway-x`/`--sway-y`
//! custom properties (plus the hero parallax translation) once per animation
//! frame, outside any render/diff cycle. With the reduced-motion preference
//! set, nothing is attached at all and the page stays static.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, HtmlElement, MouseEvent};

use crate::physics::PointerTracker;

/// Backdrop parallax gain, in px per unit of velocity, opposing the motion.
const PARALLAX_GAIN: f64 = -0.5;

fn reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn sway_targets(document: &Document) -> Result<Vec<HtmlElement>, JsValue> {
    let nodes = document.query_selector_all("[data-sway]")?;
    let mut targets = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            targets.push(el);
        }
    }
    Ok(targets)
}

pub fn start(document: &Document) -> Result<(), JsValue> {
    if reduced_motion() {
        return Ok(());
    }

    let targets = sway_targets(document)?;
    let backdrop = document
        .get_element_by_id("hero-backdrop")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if targets.is_empty() && backdrop.is_none() {
        return Ok(());
    }

    let tracker = Rc::new(RefCell::new(PointerTracker::new()));

    // Pointer sampling
    let move_closure = {
        let tracker = tracker.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            tracker
                .borrow_mut()
                .sample(e.client_x() as f64, e.client_y() as f64);
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    window()
        .ok_or("no window")?
        .add_event_listener_with_callback("mousemove", move_closure.as_ref().unchecked_ref())?;
    move_closure.forget();

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let velocity = tracker.borrow_mut().step();
        if !tracker.borrow().at_rest() {
            let sway = tracker.borrow().sway();
            for el in &targets {
                let style = el.style();
                let _ = style.set_property("--sway-x", &format!("{:.3}deg", sway.x));
                let _ = style.set_property("--sway-y", &format!("{:.3}deg", sway.y));
            }
            if let Some(el) = &backdrop {
                let _ = el.style().set_property(
                    "transform",
                    &format!(
                        "translate({:.2}px, {:.2}px)",
                        velocity.x * PARALLAX_GAIN,
                        velocity.y * PARALLAX_GAIN
                    ),
                );
            }
        }

        // schedule next
        window()
            .unwrap()
            .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            .unwrap();
    }) as Box<dyn FnMut()>));

    window()
        .ok_or("no window")?
        .request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;

    Ok(())
}
