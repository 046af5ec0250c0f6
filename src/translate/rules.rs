//! Offline rule-based translation
//!
//! Purely syntactic extraction from the prompt text: a hex color, width
//! and height tokens, single-quoted text content, and a shape keyword.
//! This strategy never fails and never calls out of process - it is the
//! safety net guaranteeing the pipeline always terminates with a valid
//! command, even with no backend configured.

use std::sync::OnceLock;

use regex::Regex;

use crate::command::schema::{Command, CommandType};

const DEFAULT_WIDTH: f64 = 200.0;
const DEFAULT_HEIGHT: f64 = 100.0;
const DEFAULT_COLOR: &str = "#0000FF";
const DEFAULT_FONT_SIZE: f64 = 24.0;

fn hex_color_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#([0-9a-fA-F]{6})").expect("valid regex"))
}

fn width_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"width (\d+)").expect("valid regex"))
}

fn height_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"height (\d+)").expect("valid regex"))
}

fn quoted_text_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"'(.*?)'").expect("valid regex"))
}

fn font_size_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"font size (\d+)").expect("valid regex"))
}

/// Deterministic keyword/regex translator
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedTranslator;

impl RuleBasedTranslator {
    pub fn new() -> Self {
        Self
    }

    /// Extract exactly one command from the prompt
    pub fn translate(&self, prompt: &str) -> Command {
        let lower = prompt.to_lowercase();

        let color = hex_color_re()
            .find(prompt)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| DEFAULT_COLOR.into());

        let width = capture_number(width_re(), &lower).unwrap_or(DEFAULT_WIDTH);
        let height = capture_number(height_re(), &lower).unwrap_or(DEFAULT_HEIGHT);

        let text = quoted_text_re()
            .captures(prompt)
            .map(|c| c[1].to_string());

        if lower.contains("circle") {
            let mut cmd = Command::new(CommandType::Circle);
            cmd.width = Some(width);
            cmd.height = Some(height);
            cmd.color = Some(color);
            cmd
        } else if lower.contains("text") {
            let font_size = capture_number(font_size_re(), &lower).unwrap_or(DEFAULT_FONT_SIZE);
            let mut cmd = Command::new(CommandType::Text);
            cmd.text = Some(text.unwrap_or_default());
            cmd.font_size = Some(font_size);
            cmd
        } else {
            let mut cmd = Command::new(CommandType::Rectangle);
            cmd.width = Some(width);
            cmd.height = Some(height);
            cmd.color = Some(color);
            if let Some(text) = text {
                cmd.text = Some(text);
                cmd.font_size = Some(DEFAULT_FONT_SIZE);
            }
            cmd
        }
    }
}

/// First capture group of `re` in `text`, parsed as a number
fn capture_number(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text).and_then(|c| c[1].parse().ok())
}
