//! Prompt Adapters
//!
//! Implementations of the `DecisionPrompt` port.
//!
//! - **StdioPrompt** - Interactive console
//! - **ScriptedPrompt** - Replays a fixed answer list

mod scripted_prompt;
mod stdio_prompt;

pub use scripted_prompt::ScriptedPrompt;
pub use stdio_prompt::StdioPrompt;
