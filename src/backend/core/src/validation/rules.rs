//! Validation rules for role documents.
//!
//! This module provides:
//! - Required field validation
//! - String length constraints
//! - Collection uniqueness
//! - Set membership, including privilege vocabularies
//! - Index name / pattern syntax

use crate::security::PrivilegeSet;
use crate::validation::error::{FieldError, ValidationErrorKind, ValidationErrors, ValidationResult};
use regex::Regex;
use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::LazyLock;

/// Maximum index name length in bytes.
pub const MAX_INDEX_NAME_BYTES: usize = 255;

/// Characters the cluster refuses in index names, plus control characters.
/// `*` is absent: it is the wildcard in patterns.
static FORBIDDEN_INDEX_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[\\/?"<>|,#\s\p{Cc}]"#).expect("Invalid index character regex")
});

/// Uppercase letters (index names are lowercase only).
static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{Lu}").expect("Invalid uppercase regex")
});

// ═══════════════════════════════════════════════════════════════════════════════
// Validation Rule Trait
// ═══════════════════════════════════════════════════════════════════════════════

/// A validation rule that can be applied to a value.
pub trait ValidationRule<T: ?Sized> {
    /// Validate the value and return any error.
    fn validate(&self, value: &T) -> Option<FieldError>;

    /// Get a description of this rule.
    fn description(&self) -> String;
}

// ═══════════════════════════════════════════════════════════════════════════════
// Required Field Rule
// ═══════════════════════════════════════════════════════════════════════════════

/// Rule that validates a field is present and non-empty.
///
/// Strings must contain a non-whitespace character; lists must have at least
/// one entry; options must be `Some` with a non-empty payload.
#[derive(Debug, Clone)]
pub struct Required;

impl ValidationRule<String> for Required {
    fn validate(&self, value: &String) -> Option<FieldError> {
        if value.trim().is_empty() {
            Some(FieldError::new(ValidationErrorKind::Required))
        } else {
            None
        }
    }

    fn description(&self) -> String {
        "field is required".to_string()
    }
}

impl ValidationRule<Option<String>> for Required {
    fn validate(&self, value: &Option<String>) -> Option<FieldError> {
        match value {
            Some(s) => <Required as ValidationRule<String>>::validate(self, s),
            None => Some(FieldError::new(ValidationErrorKind::Required)),
        }
    }

    fn description(&self) -> String {
        "field is required and must not be empty".to_string()
    }
}

impl<T> ValidationRule<Vec<T>> for Required {
    fn validate(&self, value: &Vec<T>) -> Option<FieldError> {
        if value.is_empty() {
            Some(FieldError::new(ValidationErrorKind::Required))
        } else {
            None
        }
    }

    fn description(&self) -> String {
        "field is required".to_string()
    }
}

impl<T> ValidationRule<Option<Vec<T>>> for Required {
    fn validate(&self, value: &Option<Vec<T>>) -> Option<FieldError> {
        match value {
            Some(items) => <Required as ValidationRule<Vec<T>>>::validate(self, items),
            None => Some(FieldError::new(ValidationErrorKind::Required)),
        }
    }

    fn description(&self) -> String {
        "field is required and must not be empty".to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// String Length Rule
// ═══════════════════════════════════════════════════════════════════════════════

/// Rule that validates string maximum length in characters.
#[derive(Debug, Clone)]
pub struct MaxLength(pub usize);

impl ValidationRule<String> for MaxLength {
    fn validate(&self, value: &String) -> Option<FieldError> {
        let len = value.chars().count();
        if len > self.0 {
            Some(FieldError::new(ValidationErrorKind::MaxLength {
                max: self.0,
                actual: len,
            }))
        } else {
            None
        }
    }

    fn description(&self) -> String {
        format!("maximum length: {}", self.0)
    }
}

impl ValidationRule<Option<String>> for MaxLength {
    fn validate(&self, value: &Option<String>) -> Option<FieldError> {
        match value {
            Some(s) => <MaxLength as ValidationRule<String>>::validate(self, s),
            None => None,
        }
    }

    fn description(&self) -> String {
        format!("maximum length: {}", self.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Collection Rules
// ═══════════════════════════════════════════════════════════════════════════════

/// Rule that validates all items in a collection are unique.
#[derive(Debug, Clone)]
pub struct UniqueItems;

impl<T: Eq + Hash> ValidationRule<Vec<T>> for UniqueItems {
    fn validate(&self, value: &Vec<T>) -> Option<FieldError> {
        let set: HashSet<&T> = value.iter().collect();
        if set.len() != value.len() {
            Some(FieldError::new(ValidationErrorKind::DuplicateItems))
        } else {
            None
        }
    }

    fn description(&self) -> String {
        "unique items only".to_string()
    }
}

impl<T: Eq + Hash> ValidationRule<Option<Vec<T>>> for UniqueItems {
    fn validate(&self, value: &Option<Vec<T>>) -> Option<FieldError> {
        match value {
            Some(items) => <UniqueItems as ValidationRule<Vec<T>>>::validate(self, items),
            None => None,
        }
    }

    fn description(&self) -> String {
        "unique items only".to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Set Membership Rules
// ═══════════════════════════════════════════════════════════════════════════════

/// Rule that validates a value is in a predefined set.
#[derive(Debug, Clone)]
pub struct OneOf<T> {
    allowed: Vec<T>,
}

impl<T> OneOf<T> {
    pub fn new(allowed: Vec<T>) -> Self {
        Self { allowed }
    }
}

impl<T: PartialEq + ToString> ValidationRule<T> for OneOf<T> {
    fn validate(&self, value: &T) -> Option<FieldError> {
        if self.allowed.contains(value) {
            None
        } else {
            Some(FieldError::new(ValidationErrorKind::NotInSet {
                allowed: self.allowed.iter().map(|v| v.to_string()).collect(),
            }))
        }
    }

    fn description(&self) -> String {
        format!(
            "one of: {:?}",
            self.allowed.iter().map(|v| v.to_string()).collect::<Vec<_>>()
        )
    }
}

/// Rule that validates a string names a member of privilege vocabulary `P`.
///
/// The comparison is exact and case-sensitive.
#[derive(Debug, Clone, Copy)]
pub struct PrivilegeName<P> {
    _vocabulary: PhantomData<P>,
}

impl<P> PrivilegeName<P> {
    pub fn new() -> Self {
        Self {
            _vocabulary: PhantomData,
        }
    }
}

impl<P> Default for PrivilegeName<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PrivilegeSet> ValidationRule<String> for PrivilegeName<P> {
    fn validate(&self, value: &String) -> Option<FieldError> {
        if P::is_member(value) {
            None
        } else {
            let allowed: Vec<String> = P::member_names().into_iter().map(String::from).collect();
            Some(FieldError::with_message(
                ValidationErrorKind::NotInSet {
                    allowed: allowed.clone(),
                },
                format!(
                    "unknown {} privilege {:?}; must be one of: {}",
                    P::VOCABULARY,
                    value,
                    allowed.join(", ")
                ),
            ))
        }
    }

    fn description(&self) -> String {
        format!("{} privilege", P::VOCABULARY)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Index Pattern Rule
// ═══════════════════════════════════════════════════════════════════════════════

/// Rule that validates an index name or wildcard pattern.
///
/// A name wrapped in slashes (`/logs-[0-9]+/`) is a Lucene regular
/// expression; it is accepted when `allow_regex` is set and the body is a
/// non-empty expression that compiles, and is otherwise rejected.
#[derive(Debug, Clone)]
pub struct IndexPattern {
    pub allow_regex: bool,
}

impl IndexPattern {
    pub fn new(allow_regex: bool) -> Self {
        Self { allow_regex }
    }

    fn check(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Err("must not be empty".to_string());
        }

        if value.len() >= 2 && value.starts_with('/') && value.ends_with('/') {
            if !self.allow_regex {
                return Err("regular expression patterns are not allowed".to_string());
            }
            if value.len() == 2 {
                return Err("regular expression must not be empty".to_string());
            }
            return match Regex::new(&value[1..value.len() - 1]) {
                Ok(_) => Ok(()),
                Err(regex::Error::CompiledTooBig(_)) => Err("regular expression is too large".to_string()),
                Err(_) => Err("malformed regular expression".to_string()),
            };
        }

        if value.len() > MAX_INDEX_NAME_BYTES {
            return Err(format!(
                "must be at most {} bytes (got {})",
                MAX_INDEX_NAME_BYTES,
                value.len()
            ));
        }
        if value == "." || value == ".." {
            return Err(format!("{:?} is reserved", value));
        }
        if let Some(first) = value.chars().next() {
            if matches!(first, '-' | '_' | '+') {
                return Err(format!("must not start with {:?}", first));
            }
        }
        if UPPERCASE.is_match(value) {
            return Err("must be lowercase".to_string());
        }
        if let Some(m) = FORBIDDEN_INDEX_CHARS.find(value) {
            return Err(format!("must not contain {:?}", m.as_str()));
        }
        Ok(())
    }
}

impl Default for IndexPattern {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ValidationRule<String> for IndexPattern {
    fn validate(&self, value: &String) -> Option<FieldError> {
        self.check(value)
            .err()
            .map(|reason| FieldError::new(ValidationErrorKind::InvalidIndexPattern { reason }))
    }

    fn description(&self) -> String {
        "index name or pattern".to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════════════

fn single(field: &str, error: Option<FieldError>) -> ValidationResult<()> {
    match error {
        None => Ok(()),
        Some(error) => {
            let mut errors = ValidationErrors::new();
            errors.add(field, error);
            Err(errors)
        }
    }
}

/// Validate that a string field is present and non-blank.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    single(field, Required.validate(&value.to_string()))
}

/// Validate an index name or pattern, allowing regular expressions.
pub fn validate_index_pattern(field: &str, value: &str) -> ValidationResult<()> {
    single(field, IndexPattern::default().validate(&value.to_string()))
}

/// Validate that a string names a member of vocabulary `P`.
pub fn validate_privilege<P: PrivilegeSet>(field: &str, value: &str) -> ValidationResult<()> {
    single(field, PrivilegeName::<P>::new().validate(&value.to_string()))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::{ClusterPrivilege, IndexPrivilege};

    fn pattern_ok(value: &str) -> bool {
        IndexPattern::default().validate(&value.to_string()).is_none()
    }

    #[test]
    fn test_required_string() {
        assert!(Required.validate(&"read_only".to_string()).is_none());
        assert!(Required.validate(&"".to_string()).is_some());
        assert!(Required.validate(&"   ".to_string()).is_some());
    }

    #[test]
    fn test_required_option() {
        let none: Option<String> = None;
        assert!(Required.validate(&none).is_some());
        assert!(Required.validate(&Some("x".to_string())).is_none());

        let unset: Option<Vec<String>> = None;
        assert!(Required.validate(&unset).is_some());
        assert!(Required.validate(&Some(Vec::<String>::new())).is_some());
        assert!(Required.validate(&Some(vec!["a".to_string()])).is_none());
    }

    #[test]
    fn test_max_length() {
        let rule = MaxLength(4);
        assert!(rule.validate(&"four".to_string()).is_none());
        let err = rule.validate(&"fives".to_string()).unwrap();
        assert_eq!(err.kind, ValidationErrorKind::MaxLength { max: 4, actual: 5 });
        assert!(rule.validate(&None::<String>).is_none());
    }

    #[test]
    fn test_unique_items() {
        let rule = UniqueItems;
        assert!(rule.validate(&vec!["read", "write"]).is_none());
        assert!(rule.validate(&vec!["read", "read"]).is_some());
        assert!(rule.validate(&None::<Vec<String>>).is_none());
    }

    #[test]
    fn test_one_of() {
        let rule = OneOf::new(vec!["json", "yaml"]);
        assert!(rule.validate(&"json").is_none());
        assert!(rule.validate(&"toml").is_some());
    }

    #[test]
    fn test_privilege_name() {
        let cluster = PrivilegeName::<ClusterPrivilege>::new();
        assert!(cluster.validate(&"manage_security".to_string()).is_none());

        let err = cluster.validate(&"manage_securty".to_string()).unwrap();
        assert!(err.message.contains("unknown cluster privilege"));
        match err.kind {
            ValidationErrorKind::NotInSet { allowed } => assert_eq!(allowed.len(), 6),
            other => panic!("unexpected kind: {:?}", other),
        }

        let index = PrivilegeName::<IndexPrivilege>::new();
        assert!(index.validate(&"read".to_string()).is_none());
        assert!(index.validate(&"transport_client".to_string()).is_some());
    }

    #[test]
    fn test_index_pattern_accepts() {
        assert!(pattern_ok("logs-*"));
        assert!(pattern_ok("*"));
        assert!(pattern_ok(".kibana"));
        assert!(pattern_ok("logstash-2016.01.01"));
        assert!(pattern_ok("/logs-[0-9]+/"));
        assert!(pattern_ok(&"a".repeat(255)));
    }

    #[test]
    fn test_index_pattern_rejects() {
        assert!(!pattern_ok(""));
        assert!(!pattern_ok("."));
        assert!(!pattern_ok(".."));
        assert!(!pattern_ok("-logs"));
        assert!(!pattern_ok("_logs"));
        assert!(!pattern_ok("+logs"));
        assert!(!pattern_ok("Logs"));
        assert!(!pattern_ok("logs,metrics"));
        assert!(!pattern_ok("logs metrics"));
        assert!(!pattern_ok("logs#1"));
        assert!(!pattern_ok("a/b"));
        assert!(!pattern_ok("//"));
        assert!(!pattern_ok("/[/"));
        assert!(!pattern_ok("/logs-(/"));
        assert!(!pattern_ok("logs\0"));
        assert!(!pattern_ok("logs\u{7f}"));
        assert!(!pattern_ok(&"a".repeat(256)));
    }

    #[test]
    fn test_malformed_regex_reason() {
        let err = IndexPattern::default().validate(&"/[/".to_string()).unwrap();
        assert_eq!(
            err.kind,
            ValidationErrorKind::InvalidIndexPattern {
                reason: "malformed regular expression".to_string()
            }
        );
    }

    #[test]
    fn test_index_pattern_regex_can_be_disabled() {
        let rule = IndexPattern::new(false);
        let err = rule.validate(&"/logs-.*/".to_string()).unwrap();
        assert!(err.message.contains("regular expression"));
    }

    #[test]
    fn test_convenience_functions() {
        assert!(validate_required("name", "admin").is_ok());
        assert!(validate_required("name", "").unwrap_err().has_errors("name"));

        assert!(validate_index_pattern("names[0]", "logs-*").is_ok());
        assert!(validate_index_pattern("names[0]", "LOGS").is_err());

        assert!(validate_privilege::<IndexPrivilege>("p", "create_index").is_ok());
        assert!(validate_privilege::<ClusterPrivilege>("p", "create_index").is_err());
    }
}
