//! Shared recording doubles for the role resource contracts.
//!
//! Each double stores every call it receives so tests can assert on the
//! exact parameters and payloads the controllers hand to the resource layer.

use std::sync::Mutex;

use async_trait::async_trait;
use netconsole_core::role::RoleSettings;
use netconsole_ui::page::RouteParams;
use netconsole_ui::resource::{ResourceError, RoleResource, RolesResource};

/// Collection resource double recording `add_role` calls.
#[derive(Default)]
pub struct RecordingRoles {
    pub collection: Vec<RoleSettings>,
    pub added: Mutex<Vec<(RouteParams, RoleSettings)>>,
}

#[async_trait]
impl RolesResource for RecordingRoles {
    async fn list(&self, _params: &RouteParams) -> Result<Vec<RoleSettings>, ResourceError> {
        Ok(self.collection.clone())
    }

    async fn add_role(
        &self,
        params: &RouteParams,
        role: RoleSettings,
    ) -> Result<(), ResourceError> {
        self.added.lock().unwrap().push((params.clone(), role));
        Ok(())
    }
}

/// Singleton resource double recording `save_settings` and `remove` calls.
#[derive(Default)]
pub struct RecordingRole {
    pub current: Option<RoleSettings>,
    pub saved: Mutex<Vec<(RouteParams, RoleSettings)>>,
    pub removed: Mutex<Vec<RouteParams>>,
}

#[async_trait]
impl RoleResource for RecordingRole {
    async fn load(&self, _params: &RouteParams) -> Result<RoleSettings, ResourceError> {
        self.current
            .clone()
            .ok_or(ResourceError::NotFound { entity: "role" })
    }

    async fn save_settings(
        &self,
        params: &RouteParams,
        settings: RoleSettings,
    ) -> Result<(), ResourceError> {
        self.saved.lock().unwrap().push((params.clone(), settings));
        Ok(())
    }

    async fn remove(&self, params: &RouteParams) -> Result<(), ResourceError> {
        self.removed.lock().unwrap().push(params.clone());
        Ok(())
    }
}
