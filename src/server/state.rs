//! Shared application state for the axum server

use std::sync::Arc;

use crate::command::queue::CommandQueue;
use crate::translate::Translator;

/// Shared state passed to all route handlers via axum `State`
///
/// The queue is owned here and injected into both the ingress handler
/// and the poll handler - there is no process-global queue and no
/// implicit reinitialization. The translator is stateless per call, so
/// one instance serves every request.
pub struct AppState {
    /// The translation strategy for `/translate`
    pub translator: Translator,
    /// The delivery queue drained by `/next`
    pub queue: CommandQueue,
}

impl AppState {
    /// Create application state around a chosen translation strategy
    pub fn new(translator: Translator) -> Arc<Self> {
        Arc::new(Self {
            translator,
            queue: CommandQueue::new(),
        })
    }
}
