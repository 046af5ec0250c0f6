//! Generative translation via an external model backend
//!
//! Builds a fixed instruction template embedding the design system rules
//! and the user's prompt, sends it to the backend, and normalizes the
//! response into a command batch. This strategy carries all the power
//! and all the unreliability: any failure along the way (network, auth,
//! quota, malformed output) resolves to a deterministic single-element
//! fallback batch. Nothing propagates to the caller and nothing is
//! retried.

use crate::command::schema::{Command, CommandBatch, CommandType};
use crate::core::config::BridgeConfig;
use crate::core::error::{BridgeError, Result};
use crate::translate::client::ModelClient;
use crate::translate::normalize::normalize_response;

/// Translator backed by an external text-generation API
pub struct GenerativeTranslator {
    client: ModelClient,
}

impl GenerativeTranslator {
    pub fn new(client: ModelClient) -> Self {
        Self { client }
    }

    /// Build a translator from config; `None` when no API key is set
    pub fn from_config(config: &BridgeConfig) -> Option<Self> {
        let api_key = config.api_key.clone()?;
        Some(Self::new(ModelClient::new(
            api_key,
            config.api_url.clone(),
            config.model.clone(),
        )))
    }

    /// Translate a prompt into a command batch
    ///
    /// Never fails: backend or parse failure degrades to a fallback
    /// batch carrying the error text, so the consumer's render loop
    /// always receives a valid payload.
    pub async fn translate(&self, prompt: &str) -> CommandBatch {
        match self.try_translate(prompt).await {
            Ok(batch) => batch,
            Err(e) => {
                tracing::warn!("generative translation failed, using fallback: {e}");
                fallback_batch(&e)
            }
        }
    }

    async fn try_translate(&self, prompt: &str) -> Result<CommandBatch> {
        let instruction = DESIGN_INSTRUCTION_TEMPLATE.replace("{prompt}", prompt);
        let response = self.client.complete(JSON_SYSTEM_PROMPT, &instruction).await?;
        tracing::debug!(raw = %response, "backend response");

        let batch = normalize_response(&response)?;
        if batch.is_empty() {
            return Err(BridgeError::MalformedOutput("empty command array".into()));
        }
        Ok(batch)
    }
}

/// The deterministic batch returned when translation fails
///
/// One rectangle carrying the error text: visible on the canvas, valid
/// against the schema, and renderable without any other context.
pub fn fallback_batch(error: &BridgeError) -> CommandBatch {
    let mut cmd = Command::new(CommandType::Rectangle);
    cmd.name = Some("Translation Error".into());
    cmd.x = Some(100.0);
    cmd.y = Some(100.0);
    cmd.width = Some(400.0);
    cmd.height = Some(120.0);
    cmd.color = Some("#FF4444".into());
    cmd.text = Some(format!("Error: {error}"));
    cmd.font_size = Some(24.0);
    vec![cmd]
}

/// System prompt demanding strict JSON output
const JSON_SYSTEM_PROMPT: &str =
    "You are a JSON generator. Output only a valid JSON array. No markdown, no explanations.";

/// Instruction template with the design system rules
///
/// `{prompt}` is substituted with the user's request.
const DESIGN_INSTRUCTION_TEMPLATE: &str = r#"Convert the following prompt into a JSON array of canvas elements.

Design principles (must be followed):
- Always create a top-level "Page" frame (width: 1440px, height: auto).
- Inside the Page, create section frames in vertical flow:
  Header, Hero, Content Sections (Features, Pricing, Testimonials, etc.), Footer.
- Background:
  - Use a single background color (#F9FAFB) for the Page frame.
  - Section backgrounds should be transparent or subtle variations (#FFFFFF, #F3F4F6).
  - No abrupt color breaks unless explicitly requested.
- Spacing:
  - Follow an 8px spacing system.
  - Add padding inside frames (top/bottom at least 80px per section).
  - Keep consistent margins (content max width 1200px, centered).
- Typography system:
  - H1: 48px, bold
  - H2: 32px, semi-bold
  - Body: 16px, regular
  - Buttons: 18px, bold
- Components:
  - Buttons: rectangle + centered text, cornerRadius=8, shadow, primary color (#2563EB).
  - Cards: rectangle with rounded corners, shadow, padding, include text + image.
  - Inputs: light background (#F3F4F6), border radius 6px, left-aligned placeholder text.
- Consistency:
  - Use the same font family everywhere (Inter).
  - Align elements using frame grids (never place randomly).
  - Ensure vertical rhythm: 40px-60px spacing between sections.

JSON requirements - each element must include:
- type: one of ["frame","rectangle","circle","text","image","line","ellipse","polygon","star","vector","boolean","component","instance"]
- x, y (absolute position)
- width, height
- color (hex, optional for text/images)
- text (only for type="text")
- fontSize, fontFamily, textAlign (if type="text")
- optional: name (for grouping: "Header", "Hero", "Button", "Card", etc.)
- optional: cornerRadius, stroke, shadow, opacity, padding, layoutAlign

Respond only with valid JSON. Do not include explanations or code blocks.

Prompt: {prompt}"#;
