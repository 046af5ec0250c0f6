//! The shared wire schema for canvas commands
//!
//! Every translation strategy produces [`Command`] values, and the canvas
//! plugin renders whatever it dequeues from `/next` without further
//! negotiation. The schema is strict on the `type` field (an unknown
//! element kind fails deserialization) and tolerant everywhere else:
//! optional fields are omitted from the wire when absent, and extra keys
//! emitted by a generative backend are ignored.

use serde::{Deserialize, Serialize};

/// Kinds of visual elements the canvas plugin can render
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    Frame,
    Rectangle,
    Circle,
    Ellipse,
    Line,
    Polygon,
    Star,
    Vector,
    Boolean,
    Component,
    Instance,
    Text,
    Image,
}

/// One visual element for the canvas plugin
///
/// Commands are independently renderable: no command references another,
/// so the consumer can process them one at a time in queue order. A
/// command is created by a translation strategy, queued, and dropped the
/// moment the consumer dequeues it - never revisited or mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    /// The element kind
    #[serde(rename = "type")]
    pub element_type: CommandType,

    /// Optional grouping label ("Header", "Hero", "Button", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Absolute position; absent for auto-layout elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Fill color as a hex string ("#2563EB")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,

    /// Stroke, shadow and padding come through loosely typed: backends
    /// emit anything from a bare number to a full descriptor object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_align: Option<String>,

    /// Text content (required when `type` is text)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
}

impl Command {
    /// A bare command of the given kind with every optional field unset
    pub fn new(element_type: CommandType) -> Self {
        Self {
            element_type,
            name: None,
            x: None,
            y: None,
            width: None,
            height: None,
            color: None,
            corner_radius: None,
            stroke: None,
            shadow: None,
            padding: None,
            opacity: None,
            layout_align: None,
            text: None,
            font_size: None,
            font_family: None,
            text_align: None,
        }
    }
}

/// An ordered sequence of commands from one translation call
///
/// Order carries visual stacking/reading order and is preserved through
/// the queue to the consumer.
pub type CommandBatch = Vec<Command>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_serializes_lowercase() {
        let json = serde_json::to_string(&CommandType::Rectangle).unwrap();
        assert_eq!(json, "\"rectangle\"");
    }

    #[test]
    fn test_unknown_type_rejected() {
        let result: std::result::Result<CommandType, _> = serde_json::from_str("\"hexagon\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_optional_fields_omitted_from_wire() {
        let mut cmd = Command::new(CommandType::Circle);
        cmd.width = Some(50.0);
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"circle\""));
        assert!(json.contains("\"width\":50.0"));
        assert!(!json.contains("fontSize"));
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_camel_case_wire_names() {
        let mut cmd = Command::new(CommandType::Text);
        cmd.font_size = Some(32.0);
        cmd.corner_radius = Some(8.0);
        cmd.layout_align = Some("center".into());
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"fontSize\":32.0"));
        assert!(json.contains("\"cornerRadius\":8.0"));
        assert!(json.contains("\"layoutAlign\":\"center\""));
    }

    #[test]
    fn test_extra_keys_tolerated() {
        let json = r#"{"type": "frame", "width": 1440, "autoLayout": "vertical"}"#;
        let cmd: Command = serde_json::from_str(json).unwrap();
        assert_eq!(cmd.element_type, CommandType::Frame);
        assert_eq!(cmd.width, Some(1440.0));
    }

    #[test]
    fn test_loosely_typed_style_fields() {
        let json = r##"{
            "type": "rectangle",
            "stroke": {"color": "#000000", "weight": 2},
            "shadow": true,
            "padding": 16
        }"##;
        let cmd: Command = serde_json::from_str(json).unwrap();
        assert!(cmd.stroke.is_some());
        assert!(cmd.shadow.is_some());
        assert_eq!(cmd.padding, Some(serde_json::json!(16)));
    }

    #[test]
    fn test_full_command_roundtrip() {
        let json = r##"{
            "type": "text",
            "name": "Hero Title",
            "x": 120,
            "y": 80,
            "text": "Welcome",
            "fontSize": 48,
            "fontFamily": "Inter",
            "textAlign": "center",
            "color": "#111827"
        }"##;
        let cmd: Command = serde_json::from_str(json).unwrap();
        assert_eq!(cmd.element_type, CommandType::Text);
        assert_eq!(cmd.text.as_deref(), Some("Welcome"));
        assert_eq!(cmd.font_size, Some(48.0));
        assert_eq!(cmd.font_family.as_deref(), Some("Inter"));

        let back: Command = serde_json::from_str(&serde_json::to_string(&cmd).unwrap()).unwrap();
        assert_eq!(back, cmd);
    }
}
