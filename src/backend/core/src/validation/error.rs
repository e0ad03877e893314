//! Validation error types with field-level error support.
//!
//! Errors are keyed by field path, using the role document's wire names
//! (e.g. `"cluster[2]"`, `"indices[0].names[1]"`).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════════════
// Validation Error Types
// ═══════════════════════════════════════════════════════════════════════════════

/// The kind of validation error that occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// Field is required but was missing or empty.
    Required,
    /// String length exceeds the maximum.
    MaxLength { max: usize, actual: usize },
    /// Value is not in the allowed set.
    NotInSet { allowed: Vec<String> },
    /// Value is not a usable index name or pattern.
    InvalidIndexPattern { reason: String },
    /// Collection contains duplicate items.
    DuplicateItems,
    /// Custom validation failed.
    Custom { code: String },
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "field is required"),
            Self::MaxLength { max, actual } => {
                write!(f, "must be at most {} characters (got {})", max, actual)
            }
            Self::NotInSet { allowed } => {
                write!(f, "must be one of: {}", allowed.join(", "))
            }
            Self::InvalidIndexPattern { reason } => {
                write!(f, "invalid index name or pattern: {}", reason)
            }
            Self::DuplicateItems => write!(f, "must not contain duplicate items"),
            Self::Custom { code } => write!(f, "validation failed: {}", code),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Field Error
// ═══════════════════════════════════════════════════════════════════════════════

/// A single validation error for a specific field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The kind of validation error.
    pub kind: ValidationErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Optional machine-readable code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(kind: ValidationErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            code: None,
        }
    }

    /// Create a new field error with a custom message.
    pub fn with_message(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Field Path
// ═══════════════════════════════════════════════════════════════════════════════

/// A field path such as `indices[10].names[2]`.
///
/// Paths order with index runs compared as numbers, so `indices[2]` sorts
/// before `indices[10]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
struct FieldPath(String);

impl Ord for FieldPath {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_paths(&self.0, &other.0)
    }
}

impl PartialOrd for FieldPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn split_run(s: &str, digits: bool) -> (&str, &str) {
    let end = s
        .find(|c: char| c.is_ascii_digit() != digits)
        .unwrap_or(s.len());
    s.split_at(end)
}

/// Compare two paths run by run; digit runs compare by value, then by
/// length so `01` and `1` stay distinct.
fn compare_paths(mut a: &str, mut b: &str) -> Ordering {
    loop {
        match (a.is_empty(), b.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        let a_digits = a.starts_with(|c: char| c.is_ascii_digit());
        let b_digits = b.starts_with(|c: char| c.is_ascii_digit());
        let (a_run, a_rest) = split_run(a, a_digits);
        let (b_run, b_rest) = split_run(b, b_digits);

        let ord = if a_digits && b_digits {
            let a_num = a_run.trim_start_matches('0');
            let b_num = b_run.trim_start_matches('0');
            a_num
                .len()
                .cmp(&b_num.len())
                .then_with(|| a_num.cmp(b_num))
                .then_with(|| a_run.len().cmp(&b_run.len()))
        } else {
            a_run.cmp(b_run)
        };

        if ord != Ordering::Equal {
            return ord;
        }
        a = a_rest;
        b = b_rest;
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Validation Errors Collection
// ═══════════════════════════════════════════════════════════════════════════════

/// A collection of validation errors organized by field path.
///
/// Paths are kept sorted, list indices numerically, so reports are stable
/// and follow document order within each list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    #[serde(flatten)]
    errors: BTreeMap<FieldPath, Vec<FieldError>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of errors across all fields.
    pub fn error_count(&self) -> usize {
        self.errors.values().map(|v| v.len()).sum()
    }

    /// Number of fields with errors.
    pub fn field_count(&self) -> usize {
        self.errors.len()
    }

    /// Add an error for a specific field.
    pub fn add(&mut self, field: impl Into<String>, error: FieldError) {
        self.errors.entry(FieldPath(field.into())).or_default().push(error);
    }

    /// Add an error with just the kind (auto-generates message).
    pub fn add_error(&mut self, field: impl Into<String>, kind: ValidationErrorKind) {
        self.add(field, FieldError::new(kind));
    }

    pub fn add_required(&mut self, field: impl Into<String>) {
        self.add_error(field, ValidationErrorKind::Required);
    }

    /// Get errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<FieldError>> {
        self.errors.get(&FieldPath(field.to_string()))
    }

    /// Check if a specific field has errors.
    pub fn has_errors(&self, field: &str) -> bool {
        self.get(field).map(|v| !v.is_empty()).unwrap_or(false)
    }

    /// Check if a field has an error of the given kind.
    pub fn has_kind(&self, field: &str, kind: &ValidationErrorKind) -> bool {
        self.get(field)
            .map(|v| v.iter().any(|e| &e.kind == kind))
            .unwrap_or(false)
    }

    /// Merge errors with a field prefix (for nested validation).
    ///
    /// Index suffixes such as `[3]` attach without a dot.
    pub fn merge_with_prefix(&mut self, prefix: &str, other: ValidationErrors) {
        for (FieldPath(field), errors) in other.errors {
            let prefixed_field = if field.is_empty() {
                prefix.to_string()
            } else if field.starts_with('[') {
                format!("{}{}", prefix, field)
            } else {
                format!("{}.{}", prefix, field)
            };
            self.errors
                .entry(FieldPath(prefixed_field))
                .or_default()
                .extend(errors);
        }
    }

    /// Merge errors for array items.
    pub fn merge_array_item(&mut self, field: &str, index: usize, other: ValidationErrors) {
        let prefix = format!("{}[{}]", field, index);
        self.merge_with_prefix(&prefix, other);
    }

    /// All field paths that have errors, in path order.
    pub fn fields(&self) -> impl Iterator<Item = &String> {
        self.errors.keys().map(|path| &path.0)
    }

    /// Convert to a simple map of field -> error messages.
    pub fn to_message_map(&self) -> BTreeMap<String, Vec<String>> {
        self.errors
            .iter()
            .map(|(field, errors)| {
                (
                    field.0.clone(),
                    errors.iter().map(|e| e.message.clone()).collect(),
                )
            })
            .collect()
    }

    /// The first error in path order.
    pub fn first_error(&self) -> Option<(&String, &FieldError)> {
        self.errors
            .iter()
            .next()
            .and_then(|(field, errors)| errors.first().map(|error| (&field.0, error)))
    }

    /// Flat list of `"field: message"` strings.
    pub fn to_flat_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| format!("{}: {}", field.0, e.message))
            })
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_flat_messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

// ═══════════════════════════════════════════════════════════════════════════════
// Validation Result Type
// ═══════════════════════════════════════════════════════════════════════════════

/// Result type for validation operations.
pub type ValidationResult<T> = std::result::Result<T, ValidationErrors>;

/// Extension trait for converting Option to ValidationResult.
pub trait OptionExt<T> {
    /// Convert None to a required field error.
    fn required(self, field: &str) -> ValidationResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn required(self, field: &str) -> ValidationResult<T> {
        match self {
            Some(value) => Ok(value),
            None => {
                let mut errors = ValidationErrors::new();
                errors.add_required(field);
                Err(errors)
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════
