//! Wire format for the hosted `generateContent` endpoint, plus the prompt
//! templates and reply parsers. Everything here is pure and host-testable;
//! the wasm client only composes these with a fetch.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::ai::error::{AiError, Result};
use crate::catalog::{inventory_context, PERSONA};
use crate::transcript::{Citation, Transcript};

/// Model handling the structured photo analysis and the chat.
pub const REASONING_MODEL: &str = "gemini-3-pro-preview";

/// Model handling image-to-image generation.
pub const IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Literal reply used when the chat call succeeds but returns no text.
pub const CHAT_FALLBACK: &str = "The void offers no answer at this time.";

const ANALYSIS_THINKING_BUDGET: u32 = 32_768;
const CHAT_THINKING_BUDGET: u32 = 2_048;

// ---------------------------------------------------------------------------
// Request / response shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    /// Base64-encoded bytes.
    pub data: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_config: Option<ThinkingConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    pub thinking_budget: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub google_search: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
struct WebSource {
    uri: Option<String>,
    title: Option<String>,
}

// ---------------------------------------------------------------------------
// Typed results
// ---------------------------------------------------------------------------

/// Structured verdict of the photo analysis. All four fields are required;
/// a reply missing any of them is a parse failure, never a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceAnalysis {
    pub vibe: String,
    pub dimensions: String,
    pub color: String,
    pub philosophy: String,
}

/// Chat reply with the grounding metadata normalized into explicit citations
/// (empty when the service did not search).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuratorReply {
    pub text: String,
    pub citations: Vec<Citation>,
}

// ---------------------------------------------------------------------------
// Request builders
// ---------------------------------------------------------------------------

fn analysis_prompt() -> String {
    format!(
        "You are The Vibe Auditor for 'Castaway Frames', a high-end furniture cover brand.\n\
         \n\
         YOUR PERSONA: {tone}\n\
         YOUR MISSION: Analyze this outdoor space not just for objects, but for its spiritual emptiness.\n\
         \n\
         STEPS:\n\
         1. Identify the architectural style (e.g., Brutalist, Mid-Century, Suburban Despair).\n\
         2. Analyze the lighting to determine the 'mood' (e.g., Melancholy, Hopeful, Sterilized).\n\
         3. Deduce what kind of furniture *should* be there, but isn't.\n\
         \n\
         OUTPUT REQUIREMENTS:\n\
         - 'vibe': A 2-3 word abstract aesthetic description (e.g., \"Liminal Concrete\", \"Vegetal Decay\").\n\
         - 'dimensions': Estimated dimensions of the empty space suitable for a cover.\n\
         - 'color': A hex code that matches the lighting mood.\n\
         - 'philosophy': A witty, slightly absurd philosophical observation about the void in this image.\n\
         \n\
         Return ONLY the JSON object.",
        tone = PERSONA.tone
    )
}

/// Image analysis: photo plus the fixed auditor prompt, constrained to a
/// four-field JSON object.
pub fn analysis_request(image_base64: &str, mime_type: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".into()),
            parts: vec![
                Part {
                    inline_data: Some(InlineData {
                        mime_type: mime_type.into(),
                        data: image_base64.into(),
                    }),
                    ..Part::default()
                },
                Part {
                    text: Some(analysis_prompt()),
                    ..Part::default()
                },
            ],
        }],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            response_mime_type: Some("application/json".into()),
            response_schema: Some(json!({
                "type": "OBJECT",
                "properties": {
                    "vibe": { "type": "STRING" },
                    "dimensions": { "type": "STRING" },
                    "color": { "type": "STRING" },
                    "philosophy": { "type": "STRING" },
                }
            })),
            thinking_config: Some(ThinkingConfig {
                thinking_budget: ANALYSIS_THINKING_BUDGET,
            }),
            ..GenerationConfig::default()
        }),
        tools: None,
    }
}

/// Image generation: the user's prompt wrapped in the fixed brand filter so
/// the output keeps the material quality of the real product line.
pub fn generation_request(
    image_base64: &str,
    mime_type: &str,
    user_prompt: &str,
) -> GenerateContentRequest {
    let engineered = format!(
        "Photorealistic architectural rendering.\n\
         Task: {user_prompt}.\n\
         \n\
         CRITICAL MATERIAL SPECS:\n\
         - Fabric must look like {specs}\n\
         - Natural draping, heavy weight cloth physics.\n\
         - Matte finish, no plastic shine.\n\
         - Cinematic lighting matching the source image.\n\
         - High fidelity textures.\n\
         \n\
         Make it look like a high-end editorial shot for 'Castaway Frames'.",
        specs = PERSONA.material_specs
    );

    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".into()),
            parts: vec![
                Part {
                    inline_data: Some(InlineData {
                        mime_type: mime_type.into(),
                        data: image_base64.into(),
                    }),
                    ..Part::default()
                },
                Part {
                    text: Some(engineered),
                    ..Part::default()
                },
            ],
        }],
        system_instruction: None,
        generation_config: Some(GenerationConfig {
            response_modalities: Some(vec!["IMAGE".into()]),
            ..GenerationConfig::default()
        }),
        tools: None,
    }
}

fn chat_system_instruction() -> String {
    format!(
        "You are \"{name}\", the AI concierge for 'Castaway Frames'.\n\
         \n\
         YOUR DNA:\n\
         - Tone: {tone}\n\
         - Beliefs: {manifesto}\n\
         \n\
         YOUR KNOWLEDGE BASE:\n\
         {inventory}\n\
         \n\
         INSTRUCTIONS:\n\
         1. Never be overly cheerful. Be helpful, but maintain a cool, detached authority.\n\
         2. If asked about competitors, dismiss them as \"pedestrian\" or \"impermanent\".\n\
         3. If asked about price, reframe it as an investment in \"visual silence\" or \"legacy\".\n\
         4. Use Google Search ONLY if the user asks about specific 3rd party furniture dimensions \
         (e.g. \"Will this fit my IKEA Applaro?\").\n\
         5. Always imply that the cover is more valuable than the furniture inside it.",
        name = PERSONA.name,
        tone = PERSONA.tone,
        manifesto = PERSONA.manifesto,
        inventory = inventory_context(),
    )
}

/// Chat: the full prior transcript plus the new message, under the Curator
/// persona, with the search tool enabled for fit questions.
pub fn chat_request(history: &Transcript, new_message: &str) -> GenerateContentRequest {
    let mut contents: Vec<Content> = history
        .messages()
        .iter()
        .map(|m| Content {
            role: Some(m.role.wire_name().into()),
            parts: vec![Part {
                text: Some(m.text.clone()),
                ..Part::default()
            }],
        })
        .collect();
    contents.push(Content {
        role: Some("user".into()),
        parts: vec![Part {
            text: Some(new_message.into()),
            ..Part::default()
        }],
    });

    GenerateContentRequest {
        contents,
        system_instruction: Some(Content {
            role: None,
            parts: vec![Part {
                text: Some(chat_system_instruction()),
                ..Part::default()
            }],
        }),
        generation_config: Some(GenerationConfig {
            thinking_config: Some(ThinkingConfig {
                thinking_budget: CHAT_THINKING_BUDGET,
            }),
            ..GenerationConfig::default()
        }),
        tools: Some(vec![Tool {
            google_search: json!({}),
        }]),
    }
}

// ---------------------------------------------------------------------------
// Reply parsers
// ---------------------------------------------------------------------------

fn decode(body: &str) -> Result<GenerateContentResponse> {
    serde_json::from_str(body).map_err(|e| AiError::Parse(e.to_string()))
}

/// Concatenated text of the first candidate, if any.
fn response_text(resp: &GenerateContentResponse) -> Option<String> {
    let parts = &resp.candidates.first()?.content.as_ref()?.parts;
    let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
    if text.is_empty() { None } else { Some(text) }
}

/// Extract the JSON object from a reply that may be wrapped in markdown
/// fences or surrounding prose.
fn clean_json(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

/// Interpret an analysis reply. No text at all is an [`AiError::EmptyResponse`];
/// text that does not decode into the full four-field object is a
/// [`AiError::Parse`].
pub fn parse_analysis(body: &str) -> Result<SpaceAnalysis> {
    let resp = decode(body)?;
    let text = response_text(&resp).ok_or(AiError::EmptyResponse)?;
    serde_json::from_str(clean_json(&text)).map_err(|e| AiError::Parse(e.to_string()))
}

/// Interpret an image-generation reply into a `data:` URI, or
/// [`AiError::NoImage`] when no inline image part came back.
pub fn parse_generated_image(body: &str) -> Result<String> {
    let resp = decode(body)?;
    let image = resp
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .and_then(|c| c.parts.iter().find_map(|p| p.inline_data.as_ref()))
        .ok_or(AiError::NoImage)?;
    Ok(format!("data:image/png;base64,{}", image.data))
}

/// Interpret a chat reply. Missing or empty text degrades to the literal
/// [`CHAT_FALLBACK`] rather than an error; loosely-shaped grounding metadata
/// is normalized to explicit citations.
pub fn parse_chat(body: &str) -> Result<CuratorReply> {
    let resp = decode(body)?;
    let text = response_text(&resp).unwrap_or_else(|| CHAT_FALLBACK.to_owned());
    let citations = resp
        .candidates
        .first()
        .and_then(|c| c.grounding_metadata.as_ref())
        .map(|g| {
            g.grounding_chunks
                .iter()
                .filter_map(|chunk| {
                    let web = chunk.web.as_ref()?;
                    let uri = web.uri.clone()?;
                    Some(Citation {
                        title: web.title.clone().unwrap_or_else(|| "Source".to_owned()),
                        uri,
                    })
                })
                .collect()
        })
        .unwrap_or_default();
    Ok(CuratorReply { text, citations })
}
