//! Role administration pages.
//!
//! Wires the role list, detail/edit, add, and remove-confirmation pages to
//! the role resources and registers them in the module menu. The detail
//! page and the remove-confirmation page share one controller instance;
//! which buttons the user sees on each is a view-template concern.

use std::sync::Arc;

use async_trait::async_trait;
use netconsole_core::role::RoleSettings;
use serde_json::{json, Value};

use crate::controller::{Controller, Outcome, Page};
use crate::error::{ControllerError, ControllerResult};
use crate::menu::{Menu, ModuleMenu};
use crate::page::PageContext;
use crate::resource::{RoleResource, RolesResource};

/// Master page listing all roles.
pub const ROLES_PAGE: &str = "roles.html";
/// Detail page editing a single role.
pub const ROLE_PAGE: &str = "role.html";
/// Detail page creating a new role.
pub const NEW_ROLE_PAGE: &str = "new-role.html";
/// Detail page confirming a role removal.
pub const CONFIRM_REMOVE_PAGE: &str = "confirm-remove.html";

/// Assemble the whole-settings payload from the page's five form inputs.
fn read_role_form(cx: &PageContext) -> ControllerResult<RoleSettings> {
    Ok(RoleSettings {
        role_name: cx.input("role_name")?.value().parse()?,
        display_name: cx.input("display_name")?.value().to_string(),
        manageable: cx.input("manageable")?.is_checked(),
        plane: cx.input("plane")?.value().parse()?,
        description: cx.input("description")?.value().to_string(),
    })
}

// ---------------------------------------------------------------------------
// List page
// ---------------------------------------------------------------------------

struct RolesOverview {
    roles: Arc<dyn RolesResource>,
}

#[async_trait]
impl Page for RolesOverview {
    async fn view_model(&self, cx: &PageContext) -> ControllerResult<Value> {
        let roles = self.roles.list(cx.params()).await?;
        Ok(json!({ "roles": roles }))
    }
}

// ---------------------------------------------------------------------------
// Detail / edit page (also backs the remove confirmation)
// ---------------------------------------------------------------------------

struct RoleSettingsPage {
    role: Arc<dyn RoleResource>,
}

#[async_trait]
impl Page for RoleSettingsPage {
    async fn view_model(&self, cx: &PageContext) -> ControllerResult<Value> {
        let settings = self.role.load(cx.params()).await?;
        Ok(serde_json::to_value(settings)?)
    }

    fn buttons(&self) -> &[&'static str] {
        &["save", "remove-role"]
    }

    async fn press(&self, button: &str, cx: &mut PageContext) -> ControllerResult<Outcome> {
        match button {
            "save" => {
                let settings = read_role_form(cx)?;
                cx.update_view_model(serde_json::to_value(&settings)?);
                tracing::info!(role_name = %settings.role_name, "Saving role settings");
                self.role.save_settings(cx.params(), settings).await?;
                Ok(Outcome::Saved)
            }
            "remove-role" => {
                tracing::info!("Removing role");
                self.role.remove(cx.params()).await?;
                Ok(Outcome::Removed)
            }
            other => Err(ControllerError::UnknownButton(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Add page
// ---------------------------------------------------------------------------

struct NewRolePage {
    roles: Arc<dyn RolesResource>,
}

#[async_trait]
impl Page for NewRolePage {
    fn buttons(&self) -> &[&'static str] {
        &["save"]
    }

    async fn press(&self, button: &str, cx: &mut PageContext) -> ControllerResult<Outcome> {
        match button {
            "save" => {
                let role = read_role_form(cx)?;
                tracing::info!(role_name = %role.role_name, "Adding role");
                self.roles.add_role(cx.params(), role).await?;
                Ok(Outcome::Saved)
            }
            other => Err(ControllerError::UnknownButton(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Controllers and menu registration
// ---------------------------------------------------------------------------

/// Controller for the role list page.
pub fn roles_controller(roles: Arc<dyn RolesResource>) -> Controller {
    Controller::new(RolesOverview { roles })
}

/// Controller for the role detail page and its remove confirmation.
pub fn role_controller(role: Arc<dyn RoleResource>) -> Controller {
    Controller::new(RoleSettingsPage { role })
        .on_success(ROLES_PAGE)
        .on_removed(ROLES_PAGE)
}

/// Controller for the add-role page.
pub fn add_role_controller(roles: Arc<dyn RolesResource>) -> Controller {
    Controller::new(NewRolePage { roles }).on_success(ROLES_PAGE)
}

/// The role module's menu, registered under [`ROLES_PAGE`].
///
/// [`ROLE_PAGE`] and [`CONFIRM_REMOVE_PAGE`] are backed by the same
/// controller instance.
pub fn menu(roles: Arc<dyn RolesResource>, role: Arc<dyn RoleResource>) -> Menu {
    let detail = Arc::new(role_controller(role));
    let module = ModuleMenu::new(roles_controller(Arc::clone(&roles)))
        .detail(NEW_ROLE_PAGE, add_role_controller(roles))
        .detail(CONFIRM_REMOVE_PAGE, Arc::clone(&detail))
        .detail(ROLE_PAGE, detail);
    Menu::new([(ROLES_PAGE.to_string(), module)])
}
