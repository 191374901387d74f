/// Errors when trying to require a certain type
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RequireError {
    /// The required type is not known
    #[error("No dependency registered for type '{0}'. Make sure to register it before resolving.")]
    TypeMissing(&'static str),

    /// The binding exists but holds a different type than its key
    #[error("Failed to downcast, required: '{required_type}' actual: '{actual_type}'")]
    DowncastFailed {
        required_type: &'static str,
        actual_type: &'static str,
    },
}
