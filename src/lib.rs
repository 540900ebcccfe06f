#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Interactive storefront for the Castaway Frames cover brand: pointer-driven
//! sway physics, a scroll-driven storm/decay narrative, a static product
//! showcase with 3D/AR embeds, mood pickers, and a hosted-model concierge.
//!
//! The numeric and protocol logic is target-independent and tested on the
//! host; the `wasm` module holds the DOM/event/network glue and only
//! compiles for wasm32.

pub mod ai;
pub mod catalog;
pub mod physics;
pub mod scroll;
pub mod theme;
pub mod transcript;

// Only compile DOM-facing code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
mod entry {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        crate::wasm::mount(&document)?;
        Ok(())
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
