//! Application state shared by CLI commands and HTTP handlers.
//!
//! Services are generic over their repository traits; `AppState` pins them
//! to the concrete infra implementations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use pwsdr_core::conversation::SessionRegistry;
use pwsdr_core::service::lead::LeadService;
use pwsdr_infra::bootstrap::{Deployment, bootstrap};
use pwsdr_infra::filesystem::resolve_data_dir;
use pwsdr_infra::lead::JsonFileLeadRepository;
use pwsdr_types::config::AgentConfig;
use pwsdr_types::content::FaqContent;

pub type ConcreteLeadService = LeadService<JsonFileLeadRepository>;

/// Loaded content, the lead service and the live sessions.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<FaqContent>,
    pub lead_service: Arc<ConcreteLeadService>,
    pub sessions: SessionRegistry,
    pub config: Arc<AgentConfig>,
    pub data_dir: PathBuf,
    pub content_path: PathBuf,
    pub leads_path: PathBuf,
}

impl AppState {
    /// Initialize from the resolved data directory.
    pub async fn init() -> anyhow::Result<Self> {
        Self::init_at(&resolve_data_dir()).await
    }

    /// Initialize rooted at `data_dir`, creating it if needed.
    pub async fn init_at(data_dir: &Path) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(data_dir).await?;
        let deployment = bootstrap(data_dir).await?;
        Ok(Self::from_deployment(deployment))
    }

    pub fn from_deployment(deployment: Deployment) -> Self {
        Self {
            content: Arc::new(deployment.content),
            lead_service: Arc::new(deployment.leads),
            sessions: SessionRegistry::new(),
            config: Arc::new(deployment.config),
            data_dir: deployment.data_dir,
            content_path: deployment.content_path,
            leads_path: deployment.leads_path,
        }
    }
}
