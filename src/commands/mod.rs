//! # Command System
//!
//! Prefix command (`!`) handling for Discord messages.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod context;
pub mod dispatcher;
pub mod handler;
pub mod handlers;
pub mod prompt;
pub mod registry;

// Re-export handler infrastructure
pub use context::CommandContext;
pub use dispatcher::CommandHandler;
pub use handler::PrefixCommandHandler;
pub use registry::CommandRegistry;
