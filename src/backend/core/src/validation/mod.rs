//! Boundary validation for role documents.
//!
//! This module provides:
//!
//! - **Validation Rules**: Pre-built rules for role fields
//!   - Required fields and non-blank entries
//!   - Name length limits
//!   - Duplicate detection in lists
//!   - Membership in the cluster / index privilege vocabularies
//!   - Index name and wildcard pattern syntax
//!
//! - **Validators**: Builders for checking a document field by field
//!   - `Validate` trait for self-checking types
//!   - `FieldValidator` for chaining rules on a single field
//!   - `RequestValidator` for whole documents, with per-entry and nested paths
//!   - `RoleValidator`, the configured pass for `Role` values
//!
//! - **Error Handling**: Field-level error tracking
//!   - Paths use the wire names (`"indices[0].privileges[1]"`)
//!   - Multiple errors per field
//!   - Serializable error reports
//!
//! # Quick Start
//!
//! ```rust
//! use esrest_core::security::{IndexPrivilegeGroup, Role};
//! use esrest_core::validation::Validate;
//!
//! let role = Role::named("read_only")
//!     .with_cluster_privilege(["monitor", "manage_securty"])
//!     .with_index_privilege_group(vec![
//!         IndexPrivilegeGroup::new().with_index(["logs-*"]).with_privilege(["read"]),
//!     ]);
//!
//! let errors = role.validate().unwrap_err();
//! assert!(errors.has_errors("cluster[1]"));
//! ```
//!
//! # Policy
//!
//! `Role::validate` uses the default policy. To relax it (for example to
//! accept privileges introduced by a newer cluster), build a
//! [`RoleValidator`] from a [`crate::config::ValidationConfig`]:
//!
//! ```rust
//! use esrest_core::config::ValidationConfig;
//! use esrest_core::security::Role;
//! use esrest_core::validation::RoleValidator;
//!
//! let validator = RoleValidator::new(ValidationConfig {
//!     strict_privileges: false,
//!     ..ValidationConfig::default()
//! });
//! let role = Role::named("ml").with_cluster_privilege(["manage_ml"]);
//! assert!(validator.validate_role(&role).is_ok());
//! ```

pub mod error;
pub mod role;
pub mod rules;
pub mod validator;

// ═══════════════════════════════════════════════════════════════════════════════
// Re-exports
// ═══════════════════════════════════════════════════════════════════════════════

pub use error::{FieldError, OptionExt, ValidationErrorKind, ValidationErrors, ValidationResult};

pub use rules::{
    validate_index_pattern, validate_privilege, validate_required, IndexPattern, MaxLength,
    OneOf, PrivilegeName, Required, UniqueItems, ValidationRule, MAX_INDEX_NAME_BYTES,
};

pub use validator::{validate_field, validate_request, FieldValidator, RequestValidator, Validate};

pub use role::{RoleValidator, DUPLICATE_ROLE_NAME};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Common imports for validation.
pub mod prelude {
    pub use super::{
        // Error types
        FieldError,
        ValidationErrorKind,
        ValidationErrors,
        ValidationResult,
        // Traits
        Validate,
        ValidationRule,
        // Builders
        FieldValidator,
        RequestValidator,
        RoleValidator,
        // Common rules
        IndexPattern,
        MaxLength,
        PrivilegeName,
        Required,
        UniqueItems,
        // Helper functions
        validate_field,
        validate_request,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Integration with the crate error type
// ═══════════════════════════════════════════════════════════════════════════════

use crate::error::EsRestError;

impl From<ValidationErrors> for EsRestError {
    fn from(errors: ValidationErrors) -> Self {
        let message = if let Some((field, error)) = errors.first_error() {
            format!("Validation failed: {} - {}", field, error.message)
        } else {
            "Validation failed".to_string()
        };

        EsRestError::validation(message).with_context("field_errors", errors.to_message_map())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════
