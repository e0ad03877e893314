//! Validator trait and builders.
//!
//! This module provides:
//! - `Validate` trait for types that check themselves
//! - `FieldValidator` for building field-level validation chains
//! - `RequestValidator` for collecting the results of a whole document

use crate::validation::error::{FieldError, ValidationErrors, ValidationResult};
use crate::validation::rules::ValidationRule;

// ═══════════════════════════════════════════════════════════════════════════════
// Validate Trait
// ═══════════════════════════════════════════════════════════════════════════════

/// Trait for types that can be validated.
///
/// # Example
///
/// ```rust
/// use esrest_core::validation::{validate_field, validate_request, Required, Validate, ValidationResult};
///
/// struct RoleMapping {
///     role: String,
/// }
///
/// impl Validate for RoleMapping {
///     fn validate(&self) -> ValidationResult<()> {
///         validate_request()
///             .field(validate_field("role", &self.role).rule(Required))
///             .result()
///     }
/// }
///
/// assert!(!RoleMapping { role: String::new() }.is_valid());
/// ```
pub trait Validate {
    /// Validate this object and return any validation errors.
    fn validate(&self) -> ValidationResult<()>;

    /// Check if this object is valid without returning detailed errors.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validate and return self if valid, otherwise return errors.
    fn validated(self) -> ValidationResult<Self>
    where
        Self: Sized,
    {
        self.validate()?;
        Ok(self)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Field Validator
// ═══════════════════════════════════════════════════════════════════════════════

/// A builder for validating a single field with multiple rules.
pub struct FieldValidator<'a, T: ?Sized> {
    field_name: &'a str,
    value: &'a T,
    errors: Vec<FieldError>,
    stop_on_first_error: bool,
}

impl<'a, T: ?Sized> FieldValidator<'a, T> {
    pub fn new(field_name: &'a str, value: &'a T) -> Self {
        Self {
            field_name,
            value,
            errors: Vec::new(),
            stop_on_first_error: false,
        }
    }

    /// Stop validation on the first error (fail-fast mode).
    pub fn stop_on_first(mut self) -> Self {
        self.stop_on_first_error = true;
        self
    }

    /// Apply a validation rule.
    pub fn rule<R: ValidationRule<T>>(mut self, rule: R) -> Self {
        if self.stop_on_first_error && !self.errors.is_empty() {
            return self;
        }

        if let Some(error) = rule.validate(self.value) {
            self.errors.push(error);
        }
        self
    }

    /// Apply a rule only when `condition` holds.
    pub fn rule_if<R: ValidationRule<T>>(self, condition: bool, rule: R) -> Self {
        if condition {
            self.rule(rule)
        } else {
            self
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Add the field's errors to a ValidationErrors collection.
    pub fn collect_into(self, errors: &mut ValidationErrors) {
        for error in self.errors {
            errors.add(self.field_name, error);
        }
    }

    pub fn result(self) -> ValidationResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            let mut validation_errors = ValidationErrors::new();
            self.collect_into(&mut validation_errors);
            Err(validation_errors)
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Request Validator
// ═══════════════════════════════════════════════════════════════════════════════

/// A builder for validating a whole document field by field.
pub struct RequestValidator {
    errors: ValidationErrors,
    stop_on_first_error: bool,
}

impl RequestValidator {
    pub fn new() -> Self {
        Self {
            errors: ValidationErrors::new(),
            stop_on_first_error: false,
        }
    }

    /// Stop validation on the first error.
    pub fn stop_on_first(mut self) -> Self {
        self.stop_on_first_error = true;
        self
    }

    fn halted(&self) -> bool {
        self.stop_on_first_error && !self.errors.is_empty()
    }

    /// Validate a field and collect any errors.
    pub fn field<T: ?Sized>(mut self, validator: FieldValidator<'_, T>) -> Self {
        if self.halted() {
            return self;
        }

        validator.collect_into(&mut self.errors);
        self
    }

    /// Apply `rule` to every entry of a list, reporting errors at `field[i]`.
    ///
    /// An unset list is skipped.
    pub fn each<T, R>(mut self, field: &str, items: Option<&[T]>, rule: R) -> Self
    where
        R: ValidationRule<T>,
    {
        for (index, item) in items.unwrap_or_default().iter().enumerate() {
            if self.halted() {
                break;
            }

            if let Some(error) = rule.validate(item) {
                self.errors.add(format!("{}[{}]", field, index), error);
            }
        }
        self
    }

    /// Validate a nested object.
    pub fn nested<V: Validate>(mut self, prefix: &str, value: &V) -> Self {
        if self.halted() {
            return self;
        }

        if let Err(nested_errors) = value.validate() {
            self.errors.merge_with_prefix(prefix, nested_errors);
        }
        self
    }

    /// Validate items in a collection with their own `Validate` impl.
    pub fn items<V: Validate>(mut self, field: &str, items: &[V]) -> Self {
        for (index, item) in items.iter().enumerate() {
            if self.halted() {
                break;
            }

            if let Err(item_errors) = item.validate() {
                self.errors.merge_array_item(field, index, item_errors);
            }
        }
        self
    }

    /// Apply a custom validation function.
    pub fn custom<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut ValidationErrors),
    {
        if self.halted() {
            return self;
        }

        f(&mut self.errors);
        self
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    pub fn result(self) -> ValidationResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a FieldValidator for a field.
pub fn validate_field<'a, T: ?Sized>(field_name: &'a str, value: &'a T) -> FieldValidator<'a, T> {
    FieldValidator::new(field_name, value)
}

/// Create a new RequestValidator.
pub fn validate_request() -> RequestValidator {
    RequestValidator::new()
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════
