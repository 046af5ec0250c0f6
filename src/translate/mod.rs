//! Translation strategies: prompt text in, command batch out
//!
//! A closed set of strategies behind one tagged variant. The generative
//! strategy delegates to an external model backend; the rule-based
//! strategy is offline regex extraction. Both uphold the same contract:
//! `translate` never fails - every internal failure resolves to a
//! deterministic fallback batch.

pub mod client;
pub mod generative;
pub mod normalize;
pub mod rules;

pub use client::ModelClient;
pub use generative::GenerativeTranslator;
pub use rules::RuleBasedTranslator;

use crate::command::schema::CommandBatch;
use crate::core::config::BridgeConfig;

/// The pluggable translation strategy
pub enum Translator {
    /// Delegates to an external text-generation backend
    Generative(GenerativeTranslator),
    /// Offline regex/keyword extraction
    RuleBased(RuleBasedTranslator),
}

impl Translator {
    /// Select a strategy from config: generative when an API key is
    /// present, rule-based otherwise
    pub fn from_config(config: &BridgeConfig) -> Self {
        match GenerativeTranslator::from_config(config) {
            Some(generative) => Self::Generative(generative),
            None => Self::RuleBased(RuleBasedTranslator::new()),
        }
    }

    /// Translate a prompt into an ordered command batch; infallible
    pub async fn translate(&self, prompt: &str) -> CommandBatch {
        match self {
            Self::Generative(t) => t.translate(prompt).await,
            Self::RuleBased(t) => vec![t.translate(prompt)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::schema::CommandType;

    #[test]
    fn test_from_config_without_key_is_rule_based() {
        let config = BridgeConfig {
            bind_addr: "127.0.0.1:4000".into(),
            api_key: None,
            api_url: "https://api.example.com".into(),
            model: "test".into(),
        };
        assert!(matches!(
            Translator::from_config(&config),
            Translator::RuleBased(_)
        ));
    }

    #[test]
    fn test_from_config_with_key_is_generative() {
        let config = BridgeConfig {
            bind_addr: "127.0.0.1:4000".into(),
            api_key: Some("key".into()),
            api_url: "https://api.example.com".into(),
            model: "test".into(),
        };
        assert!(matches!(
            Translator::from_config(&config),
            Translator::Generative(_)
        ));
    }

    #[tokio::test]
    async fn test_rule_based_translate_wraps_single_command() {
        let translator = Translator::RuleBased(RuleBasedTranslator::new());
        let batch = translator.translate("draw a circle width 40").await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].element_type, CommandType::Circle);
    }
}
