use netconsole_core::error::CoreError;

use crate::resource::ResourceError;

/// Error type for controller view-model projection and button actions.
///
/// Resource failures are passed through untouched; the shell decides how to
/// surface them. The remaining variants are contract violations at the page
/// boundary (bad form values, unknown buttons, missing inputs).
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// A failure reported by the resource layer.
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// A form value that does not parse into its domain type.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// A named form input the page expected but the view did not supply.
    #[error("Missing form input '{0}'")]
    MissingInput(String),

    /// A button name this controller does not declare.
    #[error("Unknown button '{0}'")]
    UnknownButton(String),

    /// A view-model patch that could not be serialized.
    #[error("View model patch failed: {0}")]
    ViewModel(#[from] serde_json::Error),
}

/// Convenience alias for controller results.
pub type ControllerResult<T> = Result<T, ControllerError>;
