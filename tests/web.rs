#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use castaway_frames::physics::PointerTracker;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn sway_custom_properties_round_trip_through_the_dom() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let body = document.body().expect("document has no body");

    let el = document
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    el.set_attribute("data-sway", "").unwrap();
    body.append_child(&el).unwrap();

    let mut tracker = PointerTracker::new();
    tracker.sample(0.0, 0.0);
    tracker.sample(20.0, -10.0);
    let sway = tracker.sway();

    let style = el.style();
    style
        .set_property("--sway-x", &format!("{:.3}deg", sway.x))
        .unwrap();
    style
        .set_property("--sway-y", &format!("{:.3}deg", sway.y))
        .unwrap();

    assert_eq!(style.get_property_value("--sway-x").unwrap(), "10.000deg");
    assert_eq!(style.get_property_value("--sway-y").unwrap(), "5.000deg");

    el.remove();
}

#[wasm_bindgen_test]
fn reduced_motion_query_is_answerable() {
    // The sway driver consults this media query before attaching anything;
    // the browser must at least answer it.
    let window = web_sys::window().unwrap();
    let mq = window
        .match_media("(prefers-reduced-motion: reduce)")
        .unwrap();
    assert!(mq.is_some());
}
