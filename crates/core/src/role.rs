//! Role domain model.
//!
//! A role classifies what a network device does (its plane and whether the
//! platform may manage it). Settings are replaced as a whole on every write;
//! there is no partial patch and no rename of an existing role.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Upper bound on role name length, matching the inventory schema.
pub const MAX_ROLE_NAME_CHARS: usize = 64;

// ---------------------------------------------------------------------------
// RoleName
// ---------------------------------------------------------------------------

/// Unique, immutable identifier of a role.
///
/// Accepted names are non-empty, at most [`MAX_ROLE_NAME_CHARS`] characters,
/// and restricted to ASCII alphanumerics plus `-` and `_`. Surrounding
/// whitespace is trimmed on parse.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoleName(String);

impl RoleName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RoleName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation("Role name is required".to_string()));
        }
        if trimmed.chars().count() > MAX_ROLE_NAME_CHARS {
            return Err(CoreError::Validation(format!(
                "Role name must be at most {MAX_ROLE_NAME_CHARS} characters"
            )));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(CoreError::Validation(format!(
                "Role name '{trimmed}' contains invalid characters"
            )));
        }
        Ok(RoleName(trimmed.to_string()))
    }
}

impl TryFrom<String> for RoleName {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RoleName> for String {
    fn from(name: RoleName) -> Self {
        name.0
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Plane
// ---------------------------------------------------------------------------

/// Network plane a role operates in. Wire form is the lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    Control,
    Management,
    Data,
}

impl Plane {
    pub fn as_str(&self) -> &'static str {
        match self {
            Plane::Control => "control",
            Plane::Management => "management",
            Plane::Data => "data",
        }
    }
}

impl FromStr for Plane {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "control" => Ok(Plane::Control),
            "management" => Ok(Plane::Management),
            "data" => Ok(Plane::Data),
            other => Err(CoreError::Validation(format!("Unknown plane '{other}'"))),
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RoleSettings
// ---------------------------------------------------------------------------

/// The whole-settings payload of a role.
///
/// Every write replaces the full settings object; readers get the same five
/// fields back. `role_name` identifies the role and never changes after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSettings {
    pub role_name: RoleName,
    pub display_name: String,
    pub manageable: bool,
    pub plane: Plane,
    pub description: String,
}
