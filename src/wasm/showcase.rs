//! Renders the product grid from the static catalog. Each furniture option
//! gets a card with a `<model-viewer>` 3D/AR embed; the poster image covers
//! the load and any viewer failure.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::catalog::{CoverProduct, FurnitureOption, COVERS};
use crate::wasm::require;

fn option_card(option: &FurnitureOption) -> String {
    format!(
        r#"<div class="filler-card">
  <div class="filler-media">
    <model-viewer src="{model}" poster="{image}" alt="{name}" ar camera-controls
                  shadow-intensity="1"></model-viewer>
    <span class="price-tag">${price}</span>
  </div>
  <div class="filler-meta">
    <p class="material">{material}</p>
    <h4>{name}</h4>
    <p class="fit">{w} × {h} × {d}</p>
    <button class="cta-outline" type="button">Complete the Set</button>
  </div>
</div>"#,
        model = option.model_url,
        image = option.image,
        name = option.name,
        price = option.price,
        material = option.material,
        w = option.dimensions.width,
        h = option.dimensions.height,
        d = option.dimensions.depth,
    )
}

fn cover_row(cover: &CoverProduct, index: usize) -> String {
    let cards: String = cover.options.iter().map(option_card).collect();
    let orientation = if index % 2 == 1 { "reverse" } else { "forward" };
    format!(
        r#"<div class="cover-row {orientation}">
  <div class="cover-summary">
    <img src="{image}" alt="{name}" loading="lazy">
    <h3>{name}</h3>
    <p class="kind">{kind}</p>
    <p class="description">{description}</p>
  </div>
  <div class="filler-grid">
    <div class="filler-heading">Compatible Fillers</div>
    {cards}
  </div>
</div>"#,
        image = cover.cover_image,
        name = cover.name,
        kind = cover.kind.label(),
        description = cover.description,
    )
}

pub fn render(document: &Document) -> Result<(), JsValue> {
    let container = require(document, "collection")?;
    let html: String = COVERS
        .iter()
        .enumerate()
        .map(|(i, cover)| cover_row(cover, i))
        .collect();
    container.set_inner_html(&html);
    Ok(())
}
