//! Startup wiring for one agent deployment.
//!
//! Loads config, loads (or seeds) the FAQ content and makes sure the leads
//! file exists. Content problems abort startup; the agent never runs
//! without something to answer from.

use std::path::{Path, PathBuf};

use pwsdr_core::service::content::ContentService;
use pwsdr_core::service::lead::LeadService;
use pwsdr_types::config::AgentConfig;
use pwsdr_types::content::FaqContent;
use pwsdr_types::error::StartupError;

use crate::config::load_agent_config;
use crate::filesystem::LocalFileSystem;
use crate::lead::JsonFileLeadRepository;

/// Everything a CLI command or the HTTP server needs, already loaded.
pub struct Deployment {
    pub data_dir: PathBuf,
    pub config: AgentConfig,
    pub content: FaqContent,
    pub content_path: PathBuf,
    pub leads_path: PathBuf,
    pub leads: LeadService<JsonFileLeadRepository>,
}

/// Bring up a deployment rooted at `data_dir`.
pub async fn bootstrap(data_dir: &Path) -> Result<Deployment, StartupError> {
    let config = load_agent_config(data_dir).await;
    bootstrap_with_config(data_dir, config).await
}

/// Like [`bootstrap`] with an already-resolved config.
pub async fn bootstrap_with_config(
    data_dir: &Path,
    config: AgentConfig,
) -> Result<Deployment, StartupError> {
    let content_path = LocalFileSystem::content_path(data_dir, &config.storage);
    let leads_path = LocalFileSystem::leads_path(data_dir, &config.storage);

    let content = ContentService::new(LocalFileSystem::new(), content_path.clone())
        .load()
        .await?;

    let repo = JsonFileLeadRepository::new(leads_path.clone());
    repo.ensure_initialized().await?;

    tracing::info!(
        data_dir = %data_dir.display(),
        company = %content.company.name,
        faq_entries = content.faq.len(),
        "deployment ready"
    );

    Ok(Deployment {
        data_dir: data_dir.to_path_buf(),
        config,
        content,
        content_path,
        leads_path,
        leads: LeadService::new(repo),
    })
}
