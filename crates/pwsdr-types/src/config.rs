//! Configuration types for the SDR agent.
//!
//! `AgentConfig` represents the `config.toml` in the data directory. It names
//! the content and leads files, carries the voice-session settings handed to
//! the external voice framework, and the HTTP bind address. Every field has
//! a default so an empty or missing file is valid.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub voice: VoiceSettings,

    #[serde(default)]
    pub server: ServerConfig,
}

/// File names (relative to the data directory, or absolute).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_content_file")]
    pub content_file: String,

    #[serde(default = "default_leads_file")]
    pub leads_file: String,
}

fn default_content_file() -> String {
    "pw_content.json".to_string()
}

fn default_leads_file() -> String {
    "pw_leads.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            content_file: default_content_file(),
            leads_file: default_leads_file(),
        }
    }
}

/// Plugin selection for the external voice-agent session.
///
/// The agent never touches audio; these values are published to the voice
/// worker so it can build its STT/LLM/TTS pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    #[serde(default = "default_stt_model")]
    pub stt_model: String,

    #[serde(default = "default_llm_model")]
    pub llm_model: String,

    #[serde(default = "default_tts_voice")]
    pub tts_voice: String,

    #[serde(default = "default_tts_style")]
    pub tts_style: String,

    #[serde(default = "default_turn_detection")]
    pub turn_detection: String,

    #[serde(default = "default_noise_cancellation")]
    pub noise_cancellation: String,

    /// Let the LLM start generating before end-of-turn is confirmed.
    #[serde(default = "default_preemptive_generation")]
    pub preemptive_generation: bool,
}

fn default_stt_model() -> String {
    "nova-3".to_string()
}

fn default_llm_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_tts_voice() -> String {
    "en-US-matthew".to_string()
}

fn default_tts_style() -> String {
    "Conversation".to_string()
}

fn default_turn_detection() -> String {
    "multilingual".to_string()
}

fn default_noise_cancellation() -> String {
    "bvc".to_string()
}

fn default_preemptive_generation() -> bool {
    true
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stt_model: default_stt_model(),
            llm_model: default_llm_model(),
            tts_voice: default_tts_voice(),
            tts_style: default_tts_style(),
            turn_detection: default_turn_detection(),
            noise_cancellation: default_noise_cancellation(),
            preemptive_generation: default_preemptive_generation(),
        }
    }
}

/// HTTP API bind address and session housekeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Sessions untouched for this many seconds are dropped, saved or not.
    /// `0` disables the sweep.
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8089
}

fn default_session_ttl_secs() -> u64 {
    1800
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            session_ttl_secs: default_session_ttl_secs(),
        }
    }
}
