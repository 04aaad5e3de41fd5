//! Agent-facing surface: the instructions handed to the LLM and the tools it
//! may call.

pub mod prompt;
pub mod tools;
