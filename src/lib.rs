//! DesignGen - natural language design prompts to canvas commands
//!
//! Pipeline: prompt -> translation strategy -> normalizer -> ordered
//! command batch -> delivery queue -> polling canvas plugin.

pub mod command;
pub mod core;
pub mod server;
pub mod translate;
