//! CLI command definitions for the `pwsdr` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;
pub mod faq;
pub mod lead;
pub mod prompt;
pub mod status;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Sales-development agent core for Physics Wallah: FAQ answers and lead capture.
#[derive(Parser)]
#[command(name = "pwsdr", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer a question from the FAQ.
    Ask {
        /// The question, e.g. `pwsdr ask what courses do you offer`.
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Show the company profile and FAQ entries.
    Faq,

    /// List captured leads.
    #[command(alias = "ls")]
    Leads,

    /// Save a lead directly through the save_lead tool.
    SaveLead {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// e.g. student or parent.
        #[arg(long)]
        role: String,

        /// Exam or course of interest.
        #[arg(long)]
        interest: String,

        /// now, soon or later.
        #[arg(long)]
        timeline: Option<String>,
    },

    /// Print the agent instructions and tool definitions.
    Prompt,

    /// Run a text conversation with the agent in the terminal.
    Chat,

    /// Show data directory, files and voice settings.
    Status,

    /// Start the REST API server.
    Serve {
        /// Port to listen on (default from config.toml).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (default from config.toml).
        #[arg(long)]
        host: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
