//! Console conversation with the agent.
//!
//! Stands in for the voice pipeline: typed lines are utterances, slash
//! commands play the role of the LLM filling lead fields. Entry point:
//! `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
