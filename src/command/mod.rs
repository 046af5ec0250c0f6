//! Canvas command schema and delivery queue
//!
//! The shared data contract every translator produces, plus the FIFO
//! buffer that mediates between concurrent producers and the single
//! poll consumer.

pub mod queue;
pub mod schema;

pub use queue::CommandQueue;
pub use schema::{Command, CommandBatch, CommandType};
