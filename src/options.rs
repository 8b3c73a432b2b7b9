//! Form options: per-field validators and extra attributes
//!
//! The normalizer merges user-declared options with empty defaults so the
//! rest of the engine never deals with absent halves.

use crate::value::{FieldValue, FieldValues};
use std::collections::BTreeMap;
use std::fmt;

/// Per-field validation predicate. `Some(message)` flags a failure,
/// `None` passes. The second argument is the cross-field context the
/// caller is handed (defaults snapshot on the per-field update path,
/// live values under `validate_all`).
pub type Validator = Box<dyn Fn(&FieldValue, &FieldValues) -> Option<String> + Send + Sync>;

/// Extra attributes merged into a synthesized descriptor
pub type AttributeBag = BTreeMap<String, String>;

/// Raw, partially-declared controlled options
#[derive(Default)]
pub struct RawFormOptions {
    pub validators: BTreeMap<String, Validator>,
    pub extra_attributes: BTreeMap<String, AttributeBag>,
}

impl RawFormOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a validator for one field
    pub fn validator<F>(mut self, field: impl Into<String>, validator: F) -> Self
    where
        F: Fn(&FieldValue, &FieldValues) -> Option<String> + Send + Sync + 'static,
    {
        self.validators.insert(field.into(), Box::new(validator));
        self
    }

    /// Declare one extra attribute for one field
    pub fn attribute(
        mut self,
        field: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.extra_attributes
            .entry(field.into())
            .or_default()
            .insert(name.into(), value.into());
        self
    }
}

/// Fully-populated controlled options
pub struct FormOptions {
    validators: BTreeMap<String, Validator>,
    extra_attributes: BTreeMap<String, AttributeBag>,
}

impl FormOptions {
    /// Merge declared options with empty defaults. Pure and total; absent
    /// input yields fully-empty options.
    pub fn normalize(raw: Option<RawFormOptions>) -> Self {
        let raw = raw.unwrap_or_default();
        Self {
            validators: raw.validators,
            extra_attributes: raw.extra_attributes,
        }
    }

    pub fn validator(&self, field: &str) -> Option<&Validator> {
        self.validators.get(field)
    }

    pub fn attributes(&self, field: &str) -> Option<&AttributeBag> {
        self.extra_attributes.get(field)
    }

    pub fn has_validators(&self) -> bool {
        !self.validators.is_empty()
    }
}

impl fmt::Debug for FormOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormOptions")
            .field("validators", &self.validators.keys().collect::<Vec<_>>())
            .field("extra_attributes", &self.extra_attributes)
            .finish()
    }
}

/// Raw, partially-declared uncontrolled options (no validation concept
/// in uncontrolled mode)
#[derive(Default)]
pub struct RawUncontrolledOptions {
    pub extra_attributes: BTreeMap<String, AttributeBag>,
}

impl RawUncontrolledOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(
        mut self,
        field: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.extra_attributes
            .entry(field.into())
            .or_default()
            .insert(name.into(), value.into());
        self
    }
}

/// Fully-populated uncontrolled options
#[derive(Debug, Default)]
pub struct UncontrolledOptions {
    extra_attributes: BTreeMap<String, AttributeBag>,
}

impl UncontrolledOptions {
    pub fn normalize(raw: Option<RawUncontrolledOptions>) -> Self {
        let raw = raw.unwrap_or_default();
        Self {
            extra_attributes: raw.extra_attributes,
        }
    }

    pub fn attributes(&self, field: &str) -> Option<&AttributeBag> {
        self.extra_attributes.get(field)
    }
}
