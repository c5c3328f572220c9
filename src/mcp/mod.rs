//! Tool surface: descriptors, dispatch, handlers, and the HTTP front door.

mod handlers;
mod server;
mod tools;

pub use handlers::ResearchServer;
pub use server::{router, AppState};
pub use tools::{Tool, ToolName, ToolRegistry, UnknownTool};
