//! Personalization studio: the photo "vibe audit", the materialize
//! (image-generation) step, and the chameleon shade picker.
//!
//! Per call the UI walks idle → in-flight → result | error; the trigger
//! control is disabled while a request is outstanding, so at most one call
//! is in flight per feature.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{console, Document, Event, FileReader, HtmlElement, HtmlInputElement};

use crate::ai::{AiError, GeminiClient};
use crate::theme::DayPhase;
use crate::wasm::require;

/// The uploaded photo, kept for the follow-up generation call.
struct Upload {
    base64: String,
    mime_type: String,
}

fn set_state(root: &HtmlElement, state: &str) {
    let _ = root.set_attribute("data-state", state);
}

/// Split a FileReader data URI into (base64 payload, MIME type).
fn split_data_uri(uri: &str) -> Option<(String, String)> {
    let rest = uri.strip_prefix("data:")?;
    let (meta, data) = rest.split_once(',')?;
    let mime = meta.strip_suffix(";base64").unwrap_or(meta);
    Some((data.to_owned(), mime.to_owned()))
}

fn wire_upload(
    document: &Document,
    client: Rc<Option<GeminiClient>>,
    upload: Rc<RefCell<Option<Upload>>>,
) -> Result<(), JsValue> {
    let root = require(document, "design-lab")?;
    let status = require(document, "lab-status")?;
    let vibe = require(document, "lab-vibe")?;
    let philosophy = require(document, "lab-philosophy")?;
    let frame = require(document, "lab-frame")?.unchecked_into::<web_sys::HtmlImageElement>();
    let prompt: HtmlInputElement = require(document, "materialize-prompt")?.unchecked_into();
    let input: HtmlInputElement = require(document, "lab-upload")?.unchecked_into();

    let on_change = {
        let input = input.clone();
        Closure::wrap(Box::new(move |_: Event| {
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            set_state(&root, "scanning");
            status.set_text_content(Some("CONTEMPLATING EXISTENCE"));

            let Ok(reader) = FileReader::new() else {
                set_state(&root, "error");
                return;
            };
            let mime_type = file.type_();
            let onload = {
                let reader = reader.clone();
                let root = root.clone();
                let status = status.clone();
                let vibe = vibe.clone();
                let philosophy = philosophy.clone();
                let frame = frame.clone();
                let prompt = prompt.clone();
                let client = client.clone();
                let upload = upload.clone();
                Closure::once_into_js(move || {
                    let Some(data_uri) = reader.result().ok().and_then(|v| v.as_string()) else {
                        set_state(&root, "error");
                        return;
                    };
                    let Some((base64, _)) = split_data_uri(&data_uri) else {
                        set_state(&root, "error");
                        return;
                    };
                    frame.set_src(&data_uri);
                    *upload.borrow_mut() = Some(Upload {
                        base64: base64.clone(),
                        mime_type: mime_type.clone(),
                    });

                    spawn_local(async move {
                        let result = match client.as_ref() {
                            Some(client) => client.analyze_patio(&base64, &mime_type).await,
                            None => Err(AiError::MissingApiKey),
                        };
                        match result {
                            Ok(analysis) => {
                                vibe.set_text_content(Some(&format!("\u{201c}{}\u{201d}", analysis.vibe)));
                                philosophy.set_text_content(Some(&analysis.philosophy));
                                prompt.set_value(&format!(
                                    "Add a luxurious, {} outdoor furniture cover. Photorealistic.",
                                    analysis.color
                                ));
                                set_state(&root, "result");
                            }
                            Err(err) => {
                                console::error_1(&JsValue::from_str(&format!(
                                    "vibe audit failed: {err}"
                                )));
                                status.set_text_content(Some("THE VOID DECLINED TO COMMENT"));
                                set_state(&root, "error");
                            }
                        }
                    });
                })
            };
            reader.set_onloadend(Some(onload.unchecked_ref()));
            if reader.read_as_data_url(&file).is_err() {
                set_state(&root, "error");
            }
        }) as Box<dyn FnMut(Event)>)
    };
    input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    Ok(())
}

fn wire_materialize(
    document: &Document,
    client: Rc<Option<GeminiClient>>,
    upload: Rc<RefCell<Option<Upload>>>,
) -> Result<(), JsValue> {
    let button = require(document, "materialize-btn")?;
    let root = require(document, "design-lab")?;
    let status = require(document, "lab-status")?;
    let frame = require(document, "lab-frame")?.unchecked_into::<web_sys::HtmlImageElement>();
    let prompt: HtmlInputElement = require(document, "materialize-prompt")?.unchecked_into();

    let on_click = {
        let button = button.clone();
        Closure::wrap(Box::new(move |_: Event| {
            let Some(stored) = upload
                .borrow()
                .as_ref()
                .map(|u| (u.base64.clone(), u.mime_type.clone()))
            else {
                return;
            };
            let user_prompt = prompt.value();
            if user_prompt.trim().is_empty() {
                return;
            }
            let _ = button.set_attribute("disabled", "");
            button.set_text_content(Some("..."));

            let button = button.clone();
            let root = root.clone();
            let status = status.clone();
            let frame = frame.clone();
            let client = client.clone();
            spawn_local(async move {
                let result = match client.as_ref() {
                    Some(client) => {
                        client
                            .generate_reality(&stored.0, &stored.1, &user_prompt)
                            .await
                    }
                    None => Err(AiError::MissingApiKey),
                };
                match result {
                    Ok(data_uri) => frame.set_src(&data_uri),
                    Err(err) => {
                        console::error_1(&JsValue::from_str(&format!(
                            "materialize failed: {err}"
                        )));
                        status.set_text_content(Some("REALITY GENERATION FAILED"));
                        set_state(&root, "error");
                    }
                }
                let _ = button.remove_attribute("disabled");
                button.set_text_content(Some("Materialize"));
            });
        }) as Box<dyn FnMut(Event)>)
    };
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

fn wire_chameleon(document: &Document) -> Result<(), JsValue> {
    let slider: HtmlInputElement = require(document, "daylight-slider")?.unchecked_into();
    let pane = require(document, "chameleon-pane")?;
    let cover = require(document, "chameleon-cover")?;
    let suggestion = require(document, "shade-suggestion")?;
    let swatch = require(document, "shade-swatch")?;

    let apply = move |value: f64| {
        let phase = DayPhase::from_slider(value);
        let _ = cover.style().set_property("filter", phase.cover_filter());
        suggestion.set_text_content(Some(phase.suggestion()));
        let _ = swatch
            .style()
            .set_property("background-color", phase.swatch());
        let (top, bottom) = phase.sky_gradient();
        let _ = pane.style().set_property(
            "background-image",
            &format!("linear-gradient(to bottom, {top}, {bottom})"),
        );
        let _ = if phase.is_dark() {
            pane.class_list().add_1("dark")
        } else {
            pane.class_list().remove_1("dark")
        };
    };
    apply(slider.value().parse().unwrap_or(50.0));

    let on_input = {
        let slider = slider.clone();
        Closure::wrap(Box::new(move |_: Event| {
            apply(slider.value().parse().unwrap_or(50.0));
        }) as Box<dyn FnMut(Event)>)
    };
    slider.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    on_input.forget();
    Ok(())
}

pub fn start(document: &Document, client: Rc<Option<GeminiClient>>) -> Result<(), JsValue> {
    let upload: Rc<RefCell<Option<Upload>>> = Rc::new(RefCell::new(None));
    wire_upload(document, client.clone(), upload.clone())?;
    wire_materialize(document, client, upload)?;
    wire_chameleon(document)?;
    Ok(())
}
