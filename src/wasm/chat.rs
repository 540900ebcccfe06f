//! The Curator chat panel. Appends to the in-memory transcript, shows a
//! thinking indicator while the single outbound call is in flight, and
//! renders grounding citations as links under the reply.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{console, Document, Element, Event, HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::ai::{AiError, GeminiClient};
use crate::transcript::{ChatMessage, Role, Transcript};
use crate::wasm::require;

/// Shown when the call itself fails (as opposed to succeeding with no text).
const SEVERED: &str =
    "My connection to the aesthetic plane has been severed. Please try again.";

fn render_message(document: &Document, log: &HtmlElement, message: &ChatMessage) {
    let Ok(bubble) = document.create_element("div") else {
        return;
    };
    let role_class = match message.role {
        Role::User => "msg user",
        Role::Model => "msg model",
    };
    bubble.set_class_name(role_class);

    if let Ok(text) = document.create_element("p") {
        text.set_text_content(Some(&message.text));
        let _ = bubble.append_child(&text);
    }

    if !message.citations.is_empty() {
        if let Ok(sources) = document.create_element("div") {
            sources.set_class_name("citations");
            for citation in &message.citations {
                if let Ok(link) = document.create_element("a") {
                    let _ = link.set_attribute("href", &citation.uri);
                    let _ = link.set_attribute("target", "_blank");
                    let _ = link.set_attribute("rel", "noopener noreferrer");
                    link.set_text_content(Some(&citation.title));
                    let _ = sources.append_child(&link);
                }
            }
            let _ = bubble.append_child(&sources);
        }
    }

    let _ = log.append_child(&bubble);
    log.set_scroll_top(log.scroll_height());
}

fn thinking_indicator(document: &Document, log: &HtmlElement) -> Option<Element> {
    let bubble = document.create_element("div").ok()?;
    bubble.set_class_name("msg model thinking");
    bubble.set_text_content(Some("Consulting the archives..."));
    log.append_child(&bubble).ok()?;
    Some(bubble)
}

fn wire_toggle(document: &Document) -> Result<(), JsValue> {
    let toggle = require(document, "chat-toggle")?;
    let panel = require(document, "chat-panel")?;

    let on_click = {
        Closure::wrap(Box::new(move |_: Event| {
            let _ = panel.class_list().toggle("open");
        }) as Box<dyn FnMut(Event)>)
    };
    toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

pub fn start(document: &Document, client: Rc<Option<GeminiClient>>) -> Result<(), JsValue> {
    wire_toggle(document)?;

    let log = require(document, "chat-log")?;
    let input: HtmlInputElement = require(document, "chat-input")?.unchecked_into();
    let send = require(document, "chat-send")?;

    let transcript = Rc::new(RefCell::new(Transcript::new()));
    for message in transcript.borrow().messages() {
        render_message(document, &log, message);
    }

    let submit = {
        let document = document.clone();
        let input = input.clone();
        let transcript = transcript.clone();
        move || {
            let text = input.value();
            let text = text.trim();
            if text.is_empty() || input.disabled() {
                return;
            }
            input.set_value("");
            input.set_disabled(true);

            // Snapshot the history first; the request carries the new message
            // separately, after the prior transcript.
            let history = transcript.borrow().clone();
            {
                let mut t = transcript.borrow_mut();
                let message = t.push(Role::User, text.to_owned(), Vec::new());
                render_message(&document, &log, message);
            }
            let thinking = thinking_indicator(&document, &log);

            let document = document.clone();
            let log = log.clone();
            let input = input.clone();
            let transcript = transcript.clone();
            let client = client.clone();
            let sent = text.to_owned();
            spawn_local(async move {
                let result = match client.as_ref() {
                    Some(client) => client.chat(&history, &sent).await,
                    None => Err(AiError::MissingApiKey),
                };
                if let Some(bubble) = thinking {
                    bubble.remove();
                }
                let mut t = transcript.borrow_mut();
                let message = match result {
                    Ok(reply) => t.push(Role::Model, reply.text, reply.citations),
                    Err(err) => {
                        console::error_1(&JsValue::from_str(&format!("chat failed: {err}")));
                        t.push(Role::Model, SEVERED.to_owned(), Vec::new())
                    }
                };
                render_message(&document, &log, message);
                input.set_disabled(false);
                let _ = input.focus();
            });
        }
    };

    let on_send = {
        let submit = submit.clone();
        Closure::wrap(Box::new(move |_: Event| submit()) as Box<dyn FnMut(Event)>)
    };
    send.add_event_listener_with_callback("click", on_send.as_ref().unchecked_ref())?;
    on_send.forget();

    let on_key = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        if e.key() == "Enter" && !e.shift_key() {
            e.prevent_default();
            submit();
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    input.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();

    Ok(())
}
