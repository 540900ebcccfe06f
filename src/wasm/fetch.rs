//! Minimal fetch transport for the AI client. One POST, no retries.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::ai::error::{AiError, Result};

fn transport(err: JsValue) -> AiError {
    AiError::Transport(
        err.as_string()
            .unwrap_or_else(|| format!("{err:?}")),
    )
}

/// POST a JSON body and return the response body text. Non-success statuses
/// become [`AiError::Status`]; anything the browser refuses to send becomes
/// [`AiError::Transport`].
pub async fn post_json(url: &str, body: &str) -> Result<String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(transport)?;

    let window = web_sys::window().ok_or_else(|| AiError::Transport("no window".into()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?
        .dyn_into()
        .map_err(transport)?;

    let text_promise = response.text().map_err(transport)?;
    let text = JsFuture::from(text_promise).await.map_err(transport)?;
    if !response.ok() {
        return Err(AiError::Status(response.status()));
    }
    Ok(text.as_string().unwrap_or_default())
}
