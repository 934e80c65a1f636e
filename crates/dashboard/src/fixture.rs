//! Preview fixtures: a session, a role policy and an organization directory
//! snapshot, used to render the shell outside the browser.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use evalboard_auth::{RolePolicy, Session};
use evalboard_navigation::{
    InMemoryOrganizationDirectory, NavigationCatalog, NavigationComposer, NavigationConfig,
    OrganizationLookup,
};
use evalboard_records::OrganizationRecord;

use crate::layout::{ShellModel, build_shell};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed fixture: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Access(#[from] evalboard_auth::AccessCheckError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreviewFixture {
    pub session: Session,
    #[serde(default)]
    pub policy: RolePolicy,
    #[serde(default)]
    pub organizations: Vec<OrganizationRecord>,
    #[serde(default = "default_path")]
    pub current_path: String,
    #[serde(default)]
    pub config: Option<NavigationConfig>,
}

fn default_path() -> String {
    "/".to_string()
}

impl PreviewFixture {
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let raw = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Render the shell for this fixture. `fallback_config` applies when the
    /// fixture carries none.
    pub async fn render(self, fallback_config: NavigationConfig) -> Result<ShellModel, FixtureError> {
        let config = self.config.unwrap_or(fallback_config);
        let composer = NavigationComposer::new(NavigationCatalog::standard(), config);
        let lookup = OrganizationLookup::new(InMemoryOrganizationDirectory::with_organizations(
            self.organizations,
        ));
        let access = self.policy.for_session(&self.session);

        tracing::debug!(
            user_id = %self.session.user_id(),
            current_path = %self.current_path,
            "rendering preview"
        );
        Ok(build_shell(&composer, &self.session, &access, &lookup, &self.current_path).await?)
    }
}
