//! The controller unit binding one page behavior to navigation targets.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::{ControllerError, ControllerResult};
use crate::page::PageContext;

/// Completion signal of a button action, as reported by the resource layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A create or save completed.
    Saved,
    /// A removal completed.
    Removed,
}

/// One page's behavior with its backing resource injected at construction.
///
/// Defaults model an inert page: an empty view model, no buttons, and every
/// press rejected as unknown.
#[async_trait]
pub trait Page: Send + Sync {
    /// Project the backing resource into the template's view model.
    async fn view_model(&self, cx: &PageContext) -> ControllerResult<Value> {
        let _ = cx;
        Ok(Value::Object(Map::new()))
    }

    /// Button names this page responds to.
    fn buttons(&self) -> &[&'static str] {
        &[]
    }

    /// Run a named button action.
    async fn press(&self, button: &str, cx: &mut PageContext) -> ControllerResult<Outcome> {
        let _ = cx;
        Err(ControllerError::UnknownButton(button.to_string()))
    }
}

/// Framework unit tying a [`Page`] to its follow-up navigation.
///
/// `on_success` is taken after [`Outcome::Saved`], `on_removed` after
/// [`Outcome::Removed`]; an unset target means the shell stays on the
/// current page.
pub struct Controller {
    page: Box<dyn Page>,
    on_success: Option<String>,
    on_removed: Option<String>,
}

impl Controller {
    pub fn new(page: impl Page + 'static) -> Self {
        Self {
            page: Box::new(page),
            on_success: None,
            on_removed: None,
        }
    }

    /// Navigate to `page` after a successful save or create.
    pub fn on_success(mut self, page: &str) -> Self {
        self.on_success = Some(page.to_string());
        self
    }

    /// Navigate to `page` after a completed removal.
    pub fn on_removed(mut self, page: &str) -> Self {
        self.on_removed = Some(page.to_string());
        self
    }

    /// View model for rendering this controller's page.
    pub async fn view_model(&self, cx: &PageContext) -> ControllerResult<Value> {
        self.page.view_model(cx).await
    }

    /// Button names the page declares.
    pub fn buttons(&self) -> &[&'static str] {
        self.page.buttons()
    }

    /// Run a button action and resolve the follow-up navigation target.
    pub async fn press(
        &self,
        button: &str,
        cx: &mut PageContext,
    ) -> ControllerResult<Option<&str>> {
        let outcome = self.page.press(button, cx).await?;
        Ok(match outcome {
            Outcome::Saved => self.on_success.as_deref(),
            Outcome::Removed => self.on_removed.as_deref(),
        })
    }
}
