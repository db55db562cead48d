//! Static route table mapping page names to controllers.
//!
//! Built once when a module is wired up and never mutated afterwards.
//! Controllers are reference-counted so one instance can back several
//! routes (the role detail page and its remove-confirmation page share
//! one controller).

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::controller::Controller;

/// One module's routes: a master page plus named detail pages.
pub struct ModuleMenu {
    master: Arc<Controller>,
    details: BTreeMap<String, Arc<Controller>>,
}

impl ModuleMenu {
    pub fn new(master: impl Into<Arc<Controller>>) -> Self {
        Self {
            master: master.into(),
            details: BTreeMap::new(),
        }
    }

    /// Register a detail page backed by `controller`.
    pub fn detail(mut self, page: &str, controller: impl Into<Arc<Controller>>) -> Self {
        self.details.insert(page.to_string(), controller.into());
        self
    }

    /// The controller behind the module's master page.
    pub fn master(&self) -> &Arc<Controller> {
        &self.master
    }

    /// The controller behind a named detail page.
    pub fn detail_controller(&self, page: &str) -> Option<&Arc<Controller>> {
        self.details.get(page)
    }

    /// Names of the registered detail pages, in order.
    pub fn detail_pages(&self) -> impl Iterator<Item = &str> {
        self.details.keys().map(String::as_str)
    }
}

/// Route table consumed by the application shell's router.
pub struct Menu {
    modules: BTreeMap<String, ModuleMenu>,
}

impl Menu {
    /// Build the table from `(master page, module)` entries.
    pub fn new<I>(modules: I) -> Self
    where
        I: IntoIterator<Item = (String, ModuleMenu)>,
    {
        Self {
            modules: modules.into_iter().collect(),
        }
    }

    /// The module registered under a master page name.
    pub fn module(&self, page: &str) -> Option<&ModuleMenu> {
        self.modules.get(page)
    }

    /// Resolve any page name, master or detail, to its controller.
    pub fn resolve(&self, page: &str) -> Option<&Arc<Controller>> {
        if let Some(module) = self.modules.get(page) {
            return Some(module.master());
        }
        self.modules
            .values()
            .find_map(|module| module.detail_controller(page))
    }
}
