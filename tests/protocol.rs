#![cfg(not(target_arch = "wasm32"))]

use castaway_frames::ai::protocol::{
    analysis_request, chat_request, generation_request, parse_analysis, parse_chat,
    parse_generated_image, CHAT_FALLBACK,
};
use castaway_frames::ai::AiError;
use castaway_frames::transcript::{Role, Transcript};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn reply_with_text(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] }
        }]
    })
    .to_string()
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

#[test]
fn well_formed_analysis_yields_all_four_fields() {
    let body = reply_with_text(
        r##"{"vibe":"Liminal Concrete","dimensions":"8ft x 10ft","color":"#334455","philosophy":"The void judges you."}"##,
    );
    let analysis = parse_analysis(&body).unwrap();
    assert_eq!(analysis.vibe, "Liminal Concrete");
    assert_eq!(analysis.dimensions, "8ft x 10ft");
    assert_eq!(analysis.color, "#334455");
    assert_eq!(analysis.philosophy, "The void judges you.");
}

#[test]
fn analysis_survives_markdown_fences() {
    let body = reply_with_text(
        "Here you go:\n```json\n{\"vibe\":\"Vegetal Decay\",\"dimensions\":\"6ft x 6ft\",\
         \"color\":\"#112233\",\"philosophy\":\"Moss wins in the end.\"}\n```",
    );
    let analysis = parse_analysis(&body).unwrap();
    assert_eq!(analysis.vibe, "Vegetal Decay");
}

#[test]
fn analysis_with_no_json_is_a_parse_failure() {
    let body = reply_with_text("I am sorry, I cannot audit this vibe.");
    assert!(matches!(parse_analysis(&body), Err(AiError::Parse(_))));
}

#[test]
fn analysis_missing_a_field_is_a_parse_failure_not_a_partial() {
    let body = reply_with_text(r#"{"vibe":"Liminal Concrete","dimensions":"8ft x 10ft"}"#);
    assert!(matches!(parse_analysis(&body), Err(AiError::Parse(_))));
}

#[test]
fn analysis_with_no_text_is_an_empty_response() {
    let body = json!({ "candidates": [{ "content": { "parts": [] } }] }).to_string();
    assert!(matches!(parse_analysis(&body), Err(AiError::EmptyResponse)));

    let body = json!({ "candidates": [] }).to_string();
    assert!(matches!(parse_analysis(&body), Err(AiError::EmptyResponse)));
}

#[test]
fn garbage_transport_body_is_a_parse_failure() {
    assert!(matches!(parse_analysis("<html>504</html>"), Err(AiError::Parse(_))));
}

// ---------------------------------------------------------------------------
// Image generation
// ---------------------------------------------------------------------------

#[test]
fn image_reply_becomes_a_data_uri() {
    let body = json!({
        "candidates": [{
            "content": {
                "parts": [{ "inlineData": { "mimeType": "image/png", "data": "QUJD" } }]
            }
        }]
    })
    .to_string();
    assert_eq!(
        parse_generated_image(&body).unwrap(),
        "data:image/png;base64,QUJD"
    );
}

#[test]
fn imageless_reply_is_a_generation_failure() {
    let body = reply_with_text("Imagine a lovely cover here.");
    assert!(matches!(parse_generated_image(&body), Err(AiError::NoImage)));
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

#[test]
fn chat_reply_carries_text_and_citations() {
    let body = json!({
        "candidates": [{
            "content": { "parts": [{ "text": "It will fit. Everything fits." }] },
            "groundingMetadata": {
                "groundingChunks": [
                    { "web": { "uri": "https://example.com/applaro", "title": "Applaro specs" } },
                    { "web": { "uri": "https://example.com/untitled" } },
                    { "notWeb": true }
                ]
            }
        }]
    })
    .to_string();

    let reply = parse_chat(&body).unwrap();
    assert_eq!(reply.text, "It will fit. Everything fits.");
    assert_eq!(reply.citations.len(), 2);
    assert_eq!(reply.citations[0].uri, "https://example.com/applaro");
    assert_eq!(reply.citations[0].title, "Applaro specs");
    // Untitled sources get a placeholder title rather than being dropped.
    assert_eq!(reply.citations[1].title, "Source");
}

#[test]
fn ungrounded_chat_reply_has_empty_citations() {
    let reply = parse_chat(&reply_with_text("Covers are forever.")).unwrap();
    assert!(reply.citations.is_empty());
}

#[test]
fn empty_chat_reply_degrades_to_the_fallback_line() {
    let body = json!({ "candidates": [{ "content": { "parts": [] } }] }).to_string();
    let reply = parse_chat(&body).unwrap();
    assert_eq!(reply.text, CHAT_FALLBACK);
    assert!(reply.citations.is_empty());

    // Even a completely empty reply envelope falls back rather than erroring.
    let reply = parse_chat(&json!({}).to_string()).unwrap();
    assert_eq!(reply.text, CHAT_FALLBACK);
}

// ---------------------------------------------------------------------------
// Request builders
// ---------------------------------------------------------------------------

fn to_value<T: serde::Serialize>(req: &T) -> Value {
    serde_json::to_value(req).unwrap()
}

#[test]
fn analysis_request_has_image_prompt_and_schema() {
    let req = to_value(&analysis_request("QUJD", "image/jpeg"));

    assert_eq!(
        req.pointer("/contents/0/parts/0/inlineData/mimeType"),
        Some(&json!("image/jpeg"))
    );
    assert_eq!(
        req.pointer("/contents/0/parts/0/inlineData/data"),
        Some(&json!("QUJD"))
    );
    let prompt = req
        .pointer("/contents/0/parts/1/text")
        .and_then(Value::as_str)
        .unwrap();
    assert!(prompt.contains("Vibe Auditor"));

    assert_eq!(
        req.pointer("/generationConfig/responseMimeType"),
        Some(&json!("application/json"))
    );
    for field in ["vibe", "dimensions", "color", "philosophy"] {
        assert!(
            req.pointer(&format!("/generationConfig/responseSchema/properties/{field}"))
                .is_some(),
            "schema missing {field}"
        );
    }
    assert_eq!(
        req.pointer("/generationConfig/thinkingConfig/thinkingBudget"),
        Some(&json!(32768))
    );
    assert!(req.get("tools").is_none());
}

#[test]
fn generation_request_wraps_the_prompt_in_the_brand_filter() {
    let req = to_value(&generation_request("QUJD", "image/png", "Add a navy cover"));
    let prompt = req
        .pointer("/contents/0/parts/1/text")
        .and_then(Value::as_str)
        .unwrap();
    assert!(prompt.contains("Add a navy cover"));
    assert!(prompt.contains("Matte finish"));
    assert_eq!(
        req.pointer("/generationConfig/responseModalities"),
        Some(&json!(["IMAGE"]))
    );
}

#[test]
fn chat_request_carries_history_persona_and_search_tool() {
    let mut history = Transcript::new();
    history.push(Role::User, "Will it fit my Applaro?".into(), Vec::new());
    history.push(Role::Model, "Everything fits.".into(), Vec::new());

    let req = to_value(&chat_request(&history, "And the price?"));

    // Greeting + two turns + the new message.
    let contents = req.get("contents").and_then(Value::as_array).unwrap();
    assert_eq!(contents.len(), 4);
    assert_eq!(req.pointer("/contents/1/role"), Some(&json!("user")));
    assert_eq!(
        req.pointer("/contents/3/parts/0/text"),
        Some(&json!("And the price?"))
    );

    let system = req
        .pointer("/systemInstruction/parts/0/text")
        .and_then(Value::as_str)
        .unwrap();
    assert!(system.contains("The Curator"));
    // The knowledge base embeds the actual inventory.
    assert!(system.contains("The Solitary Sentry"));

    assert!(req.pointer("/tools/0/googleSearch").is_some());
    assert_eq!(
        req.pointer("/generationConfig/thinkingConfig/thinkingBudget"),
        Some(&json!(2048))
    );
}
