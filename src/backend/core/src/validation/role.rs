//! Boundary validation for role documents.
//!
//! The role model accepts any strings. `RoleValidator` is the explicit pass
//! that checks a `Role` against the privilege vocabularies and the index name
//! rules before it is handed to a transport. Error paths use the wire names
//! (`cluster[1]`, `indices[0].names[2]`).

use std::collections::HashMap;

use tracing::debug;

use crate::config::ValidationConfig;
use crate::security::{ClusterPrivilege, IndexPrivilege, IndexPrivilegeGroup, Role};
use crate::validation::error::{FieldError, ValidationErrorKind, ValidationErrors, ValidationResult};
use crate::validation::rules::{IndexPattern, MaxLength, PrivilegeName, Required, UniqueItems};
use crate::validation::validator::{validate_field, validate_request, Validate};

/// Error code attached to a role name that appears twice in one role set.
pub const DUPLICATE_ROLE_NAME: &str = "duplicate_role_name";

/// Validates roles according to a [`ValidationConfig`] policy.
#[derive(Debug, Clone, Default)]
pub struct RoleValidator {
    config: ValidationConfig,
}

impl RoleValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a single index grant.
    pub fn validate_group(&self, group: &IndexPrivilegeGroup) -> ValidationResult<()> {
        let cfg = &self.config;

        validate_request()
            .field(
                validate_field("names", &group.index)
                    .rule(Required)
                    .rule_if(cfg.reject_duplicates, UniqueItems),
            )
            .each(
                "names",
                group.index.as_deref(),
                IndexPattern::new(cfg.allow_regex_patterns),
            )
            .field(
                validate_field("privileges", &group.privilege)
                    .rule(Required)
                    .rule_if(cfg.reject_duplicates, UniqueItems),
            )
            .each(
                "privileges",
                group.privilege.as_deref().filter(|_| cfg.strict_privileges),
                PrivilegeName::<IndexPrivilege>::new(),
            )
            .field(validate_field("fields", &group.field).rule_if(cfg.reject_duplicates, UniqueItems))
            .each("fields", group.field.as_deref(), Required)
            .result()
    }

    /// Validate a role and every grant it owns.
    pub fn validate_role(&self, role: &Role) -> ValidationResult<()> {
        let cfg = &self.config;

        let result = validate_request()
            .field(
                validate_field("name", &role.name)
                    .rule(Required)
                    .rule(MaxLength(cfg.max_name_length)),
            )
            .field(
                validate_field("cluster", &role.cluster_privilege)
                    .rule_if(cfg.reject_duplicates, UniqueItems),
            )
            .each(
                "cluster",
                role.cluster_privilege.as_deref().filter(|_| cfg.strict_privileges),
                PrivilegeName::<ClusterPrivilege>::new(),
            )
            .custom(|errors| {
                for (index, group) in role.index_groups().iter().enumerate() {
                    if let Err(group_errors) = self.validate_group(group) {
                        errors.merge_array_item("indices", index, group_errors);
                    }
                }
            })
            .field(validate_field("run_as", &role.run_as).rule_if(cfg.reject_duplicates, UniqueItems))
            .each("run_as", role.run_as.as_deref(), Required)
            .result();

        debug!(
            role = role.name.as_deref().unwrap_or("<unset>"),
            groups = role.index_groups().len(),
            errors = result.as_ref().err().map_or(0, |e| e.error_count()),
            "validated role"
        );

        result
    }

    /// Validate a set of roles meant to coexist on one cluster.
    ///
    /// Each role is checked on its own under `roles[i]`; a name used by an
    /// earlier role is reported at the later role's `name`.
    pub fn validate_role_set(&self, roles: &[Role]) -> ValidationResult<()> {
        let mut errors = ValidationErrors::new();
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for (index, role) in roles.iter().enumerate() {
            if let Err(role_errors) = self.validate_role(role) {
                errors.merge_array_item("roles", index, role_errors);
            }

            if let Some(name) = role.name.as_deref() {
                if let Some(first) = seen.get(name) {
                    errors.add(
                        format!("roles[{}].name", index),
                        FieldError::with_message(
                            ValidationErrorKind::Custom {
                                code: DUPLICATE_ROLE_NAME.to_string(),
                            },
                            format!("role name {:?} already used by roles[{}]", name, first),
                        )
                        .with_code(DUPLICATE_ROLE_NAME),
                    );
                } else {
                    seen.insert(name, index);
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Validate for IndexPrivilegeGroup {
    fn validate(&self) -> ValidationResult<()> {
        RoleValidator::default().validate_group(self)
    }
}

impl Validate for Role {
    fn validate(&self) -> ValidationResult<()> {
        RoleValidator::default().validate_role(self)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::BuiltinRole;

    fn read_only() -> Role {
        Role::named("read_only")
            .with_cluster_privilege(["monitor"])
            .with_index_privilege_group(vec![IndexPrivilegeGroup::new()
                .with_index(["logs-*"])
                .with_privilege(["read"])])
    }

    #[test]
    fn test_valid_role() {
        assert!(read_only().validate().is_ok());
        assert!(read_only().is_valid());
    }

    #[test]
    fn test_name_is_required() {
        let mut role = read_only();
        role.name = None;
        assert!(role.validate().unwrap_err().has_kind("name", &ValidationErrorKind::Required));

        role.name = Some("".into());
        assert!(role.validate().unwrap_err().has_errors("name"));
    }

    #[test]
    fn test_name_length_limit() {
        let validator = RoleValidator::new(ValidationConfig {
            max_name_length: 4,
            ..ValidationConfig::default()
        });
        let errors = validator.validate_role(&read_only()).unwrap_err();
        assert!(errors.has_kind("name", &ValidationErrorKind::MaxLength { max: 4, actual: 9 }));
    }

    #[test]
    fn test_unknown_cluster_privilege_path() {
        let role = read_only().with_cluster_privilege(["monitor", "manage_securty"]);
        let errors = role.validate().unwrap_err();
        assert!(errors.has_errors("cluster[1]"));
        assert!(!errors.has_errors("cluster[0]"));
    }

    #[test]
    fn test_unknown_index_privilege_path() {
        let role = read_only().with_index_privilege_group(vec![
            IndexPrivilegeGroup::new().with_index(["a"]).with_privilege(["read"]),
            IndexPrivilegeGroup::new().with_index(["b"]).with_privilege(["read", "reed"]),
        ]);
        let errors = role.validate().unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["indices[1].privileges[1]"]);
    }

    #[test]
    fn test_group_requires_names_and_privileges() {
        let role = read_only().with_index_privilege_group(vec![IndexPrivilegeGroup::new()]);
        let errors = role.validate().unwrap_err();
        assert!(errors.has_kind("indices[0].names", &ValidationErrorKind::Required));
        assert!(errors.has_kind("indices[0].privileges", &ValidationErrorKind::Required));
        assert!(!errors.has_errors("indices[0].fields"));
    }

    #[test]
    fn test_malformed_index_pattern() {
        let role = read_only().with_index_privilege_group(vec![IndexPrivilegeGroup::new()
            .with_index(["logs-*", "Bad Index"])
            .with_privilege(["read"])]);
        let errors = role.validate().unwrap_err();
        assert!(errors.has_errors("indices[0].names[1]"));
        assert!(!errors.has_errors("indices[0].names[0]"));
    }

    #[test]
    fn test_blank_field_and_run_as_entries() {
        let role = read_only()
            .with_run_as(["alice", " "])
            .with_index_privilege_group(vec![IndexPrivilegeGroup::new()
                .with_index(["logs-*"])
                .with_privilege(["read"])
                .with_field(["", "message"])]);
        let errors = role.validate().unwrap_err();
        assert!(errors.has_errors("run_as[1]"));
        assert!(errors.has_errors("indices[0].fields[0]"));
        assert!(!errors.has_errors("indices[0].fields[1]"));
    }

    #[test]
    fn test_duplicates() {
        let role = read_only().with_cluster_privilege(["monitor", "monitor"]);
        let errors = role.validate().unwrap_err();
        assert!(errors.has_kind("cluster", &ValidationErrorKind::DuplicateItems));

        let lenient = RoleValidator::new(ValidationConfig {
            reject_duplicates: false,
            ..ValidationConfig::default()
        });
        assert!(lenient.validate_role(&role).is_ok());
    }

    #[test]
    fn test_lenient_privileges() {
        let role = read_only()
            .with_cluster_privilege(["manage_ml"])
            .with_index_privilege_group(vec![IndexPrivilegeGroup::new()
                .with_index(["logs-*"])
                .with_privilege(["maintenance"])]);
        assert!(role.validate().is_err());

        let lenient = RoleValidator::new(ValidationConfig {
            strict_privileges: false,
            ..ValidationConfig::default()
        });
        assert!(lenient.validate_role(&role).is_ok());
    }

    #[test]
    fn test_empty_lists_are_allowed_outside_groups() {
        let role = Role::named("nothing")
            .with_cluster_privilege(Vec::<String>::new())
            .with_index_privilege_group(vec![])
            .with_run_as(Vec::<String>::new());
        assert!(role.validate().is_ok());
    }

    #[test]
    fn test_builtin_roles_are_valid() {
        for role in BuiltinRole::all_roles() {
            assert!(role.validate().is_ok(), "{:?} failed validation", role.name);
        }
    }

    #[test]
    fn test_role_set_duplicate_names() {
        let roles = vec![read_only(), BuiltinRole::User.to_role(), read_only()];
        let errors = RoleValidator::default().validate_role_set(&roles).unwrap_err();
        assert_eq!(errors.field_count(), 1);
        let error = &errors.get("roles[2].name").unwrap()[0];
        assert_eq!(error.code.as_deref(), Some(DUPLICATE_ROLE_NAME));
        assert!(error.message.contains("roles[0]"));
    }

    #[test]
    fn test_role_set_prefixes_member_errors() {
        let roles = vec![Role::new()];
        let errors = RoleValidator::default().validate_role_set(&roles).unwrap_err();
        assert!(errors.has_errors("roles[0].name"));
    }
}
