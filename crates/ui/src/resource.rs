//! Contracts of the resource layer backing the role pages.
//!
//! Implementations live outside this crate (server client in production,
//! recording doubles in tests). Every operation is keyed by the current
//! route parameters; mutation is whole-object replacement, never a patch.

use async_trait::async_trait;
use netconsole_core::role::RoleSettings;

use crate::page::RouteParams;

/// Failure reported by the resource layer. Controllers never interpret
/// these; they propagate unchanged to the shell.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// The role collection resource.
#[async_trait]
pub trait RolesResource: Send + Sync {
    /// List all roles, in the collection's order.
    async fn list(&self, params: &RouteParams) -> Result<Vec<RoleSettings>, ResourceError>;

    /// Create a new role in the collection.
    async fn add_role(&self, params: &RouteParams, role: RoleSettings)
        -> Result<(), ResourceError>;
}

/// A single role resource, identified by the route parameters.
#[async_trait]
pub trait RoleResource: Send + Sync {
    /// Load the role's current settings.
    async fn load(&self, params: &RouteParams) -> Result<RoleSettings, ResourceError>;

    /// Replace the role's settings as a whole.
    async fn save_settings(
        &self,
        params: &RouteParams,
        settings: RoleSettings,
    ) -> Result<(), ResourceError>;

    /// Delete the role.
    async fn remove(&self, params: &RouteParams) -> Result<(), ResourceError>;
}
