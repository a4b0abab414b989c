//! Helper functions for creating specific error types

use super::types::FolderAuthError;

impl FolderAuthError {
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn duplicate_name<S: Into<String>>(name: S) -> Self {
        Self::DuplicateName(name.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn permission_denied<S: Into<String>>(message: S) -> Self {
        Self::PermissionDenied(message.into())
    }

    pub fn invalid_state<S: Into<String>>(message: S) -> Self {
        Self::InvalidState(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Unknown role, worded the same way for missing and hidden roles
    pub fn no_such_role(name: &str) -> Self {
        Self::NotFound(format!("No folder role with name = \"{}\" exists", name))
    }
}
