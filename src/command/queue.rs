//! FIFO delivery queue between translation calls and the poll consumer
//!
//! Any number of ingress calls enqueue concurrently; the canvas plugin
//! drains the queue through repeated polls. Nothing here blocks: an empty
//! queue answers the poll with a sentinel (`None`) and the consumer picks
//! its own retry cadence.
//!
//! Batch insertion is deliberately a sequence of single-element enqueues
//! rather than a transaction, so commands from concurrent prompts may
//! interleave. The consumer renders each command independently, so
//! interleaving is harmless.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::command::schema::Command;

/// Unbounded FIFO of pending commands
///
/// Constructed once at startup and shared by handle; there is no global
/// instance. The mutex serializes all access to the backing storage.
#[derive(Debug, Default)]
pub struct CommandQueue {
    inner: Mutex<VecDeque<Command>>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command to the tail; never blocks, never fails
    pub fn enqueue(&self, command: Command) {
        let mut queue = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        queue.push_back(command);
    }

    /// Remove and return the head command, or `None` when empty
    ///
    /// This is a poll, not a wait: an empty queue returns immediately
    /// and leaves the queue untouched.
    pub fn dequeue_or_empty(&self) -> Option<Command> {
        let mut queue = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        queue.pop_front()
    }

    /// Number of pending commands (diagnostic only)
    pub fn len(&self) -> usize {
        let queue = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        queue.len()
    }

    /// Whether the queue is empty (diagnostic only)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
