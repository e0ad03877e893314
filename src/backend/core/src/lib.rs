#![allow(clippy::result_large_err)]
//! # esrest-core
//!
//! Role and privilege model for a search cluster's security API.
//!
//! ## Architecture
//!
//! - **Security**: `Role`, `IndexPrivilegeGroup`, the closed `ClusterPrivilege` /
//!   `IndexPrivilege` vocabularies and the built-in roles
//! - **Validation**: Field-level validation framework and the configurable
//!   `RoleValidator` for checking role documents at the boundary
//! - **Error**: Crate error type with codes, severities, logging and metrics
//! - **Config**: Validation policy and logging settings from file and environment
//! - **Telemetry**: Structured logging setup

pub mod config;
pub mod error;
pub mod security;
pub mod telemetry;
pub mod validation;

pub use error::{ErrorCode, ErrorContext, ErrorDetails, ErrorSeverity, EsRestError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ValidationConfig};
    pub use crate::error::{ErrorCode, ErrorContext, EsRestError, Result};
    pub use crate::security::{
        BuiltinRole, ClusterPrivilege, IndexPrivilege, IndexPrivilegeGroup, PrivilegeSet, Role,
        UnknownPrivilege,
    };
    pub use crate::validation::{RoleValidator, Validate, ValidationErrors, ValidationResult};
}
