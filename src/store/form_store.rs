//! The stateful form core
//!
//! One `FormStore` exists per provider activation and is exclusively owned
//! by it: all mutation is synchronous, single-threaded, and serialized by
//! the owning runtime. A new default-value object means a new activation
//! and a fresh store; nothing persists across deactivation.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{FormError, Result};
use crate::event::{is_file_list, FileEntry};
use crate::fields::{make_field, FieldDescriptor};
use crate::options::FormOptions;
use crate::value::{FieldValue, FieldValues};

use super::form_data::FormData;

/// Bound update handle for one declared field. Cheap to clone; applying
/// it routes through the owning store's validating update path and only
/// ever touches its own field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSetter {
    name: String,
}

impl FieldSetter {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Route a new value for this field through the owning store
    pub fn set(&self, store: &mut FormStore, value: FieldValue) -> Result<()> {
        store.update(&self.name, value)
    }
}

/// Per-activation form state: current values, per-field errors, and
/// out-of-band file references for every declared field.
///
/// `values`, `errors` and `setters` always share exactly the key set of
/// the activation defaults. `errors[k]` is always present; the empty
/// string is the canonical "no error" sentinel. `files` only ever holds
/// fields whose change was driven through the file handler.
#[derive(Debug)]
pub struct FormStore {
    options: Arc<FormOptions>,
    defaults: FieldValues,
    values: FieldValues,
    errors: BTreeMap<String, String>,
    files: BTreeMap<String, Vec<FileEntry>>,
    setters: BTreeMap<String, FieldSetter>,
}

impl FormStore {
    pub(crate) fn new(options: Arc<FormOptions>, defaults: FieldValues) -> Self {
        let errors = defaults.keys().map(|key| (key.clone(), String::new())).collect();
        let setters = defaults
            .keys()
            .map(|key| (key.clone(), FieldSetter { name: key.clone() }))
            .collect();
        tracing::debug!(fields = defaults.len(), "form store activated");
        Self {
            options,
            values: defaults.clone(),
            defaults,
            errors,
            files: BTreeMap::new(),
            setters,
        }
    }

    /// Set one field's value. If the field has a registered validator it
    /// runs first, against the activation-defaults snapshot as cross-field
    /// context, and its outcome replaces the field's error.
    pub fn update(&mut self, key: &str, value: FieldValue) -> Result<()> {
        if !self.values.contains_key(key) {
            return Err(FormError::UnknownField(key.to_string()));
        }
        if let Some(validator) = self.options.validator(key) {
            let error = validator(&value, &self.defaults).unwrap_or_default();
            self.errors.insert(key.to_string(), error);
        }
        tracing::trace!(field = key, "field updated");
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    /// Run every registered validator against the live value set, replace
    /// the whole error mapping atomically, and return it. Fields without
    /// a validator map to the empty string.
    ///
    /// The async signature is an API-uniformity boundary; the body
    /// completes synchronously.
    pub async fn validate_all(&mut self) -> BTreeMap<String, String> {
        let errors: BTreeMap<String, String> = self
            .values
            .iter()
            .map(|(key, value)| {
                let error = self
                    .options
                    .validator(key)
                    .and_then(|validator| validator(value, &self.values))
                    .unwrap_or_default();
                (key.clone(), error)
            })
            .collect();
        let failing = errors.values().filter(|error| !error.is_empty()).count();
        tracing::debug!(failing, "validated all fields");
        self.errors = errors.clone();
        errors
    }

    /// Force-set one field's error independent of any validator; `None`
    /// clears it. Used for externally sourced errors such as server
    /// responses.
    pub fn set_error(&mut self, key: &str, error: Option<&str>) -> Result<()> {
        if !self.errors.contains_key(key) {
            return Err(FormError::UnknownField(key.to_string()));
        }
        self.errors
            .insert(key.to_string(), error.unwrap_or_default().to_string());
        Ok(())
    }

    /// Restore one field's value from the activation snapshot; its error
    /// and file reference are untouched.
    pub fn reset(&mut self, key: &str) -> Result<()> {
        let default = self
            .defaults
            .get(key)
            .ok_or_else(|| FormError::UnknownField(key.to_string()))?
            .clone();
        self.values.insert(key.to_string(), default);
        Ok(())
    }

    /// Restore every value from the activation snapshot and clear the
    /// file map entirely; errors are untouched.
    pub fn reset_all(&mut self) {
        tracing::debug!("form store reset to activation defaults");
        self.values = self.defaults.clone();
        self.files.clear();
    }

    /// A shallow object snapshot of the current values
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .values
            .iter()
            .map(|(key, value)| {
                let json = serde_json::to_value(value).unwrap_or(serde_json::Value::Null);
                (key.clone(), json)
            })
            .collect();
        serde_json::Value::Object(map)
    }

    /// One all-string entry per declared field. File collections are not
    /// embedded; callers needing raw files consult [`FormStore::get_files`].
    pub fn to_form_data(&self) -> FormData {
        let mut data = FormData::new();
        for (key, value) in &self.values {
            data.set(key, value.display_string());
        }
        data
    }

    /// The store half of the file adapter: record the collection, then
    /// mirror the comma-joined file names into the field's text value.
    /// The mirror write is a raw value write; per-field validation does
    /// not run on this path.
    pub fn handle_file_event(&mut self, key: &str, files: Vec<FileEntry>) -> Result<()> {
        if !self.values.contains_key(key) {
            return Err(FormError::UnknownField(key.to_string()));
        }
        let joined = if is_file_list(&files) {
            files
                .iter()
                .map(|file| file.name.as_str())
                .collect::<Vec<_>>()
                .join(",")
        } else {
            String::new()
        };
        tracing::trace!(field = key, count = files.len(), "file collection recorded");
        self.files.insert(key.to_string(), files);
        self.values.insert(key.to_string(), FieldValue::Text(joined));
        Ok(())
    }

    /// The most recently observed file collection for a field, if its
    /// change was ever driven through the file handler
    pub fn get_files(&self, key: &str) -> Result<Option<&[FileEntry]>> {
        if !self.values.contains_key(key) {
            return Err(FormError::UnknownField(key.to_string()));
        }
        Ok(self.files.get(key).map(Vec::as_slice))
    }

    /// Synthesize the current descriptor for one declared field, merging
    /// any normalized extra attributes
    pub fn field(&self, key: &str) -> Result<FieldDescriptor> {
        let value = self
            .values
            .get(key)
            .ok_or_else(|| FormError::UnknownField(key.to_string()))?;
        let attrs = self.options.attributes(key).cloned().unwrap_or_default();
        Ok(make_field(key, value, &attrs))
    }

    /// Synthesize descriptors for every declared field
    pub fn fields(&self) -> BTreeMap<String, FieldDescriptor> {
        self.values
            .iter()
            .map(|(key, value)| {
                let attrs = self.options.attributes(key).cloned().unwrap_or_default();
                (key.clone(), make_field(key, value, &attrs))
            })
            .collect()
    }

    /// The bound setter for one declared field
    pub fn setter(&self, key: &str) -> Result<FieldSetter> {
        self.setters
            .get(key)
            .cloned()
            .ok_or_else(|| FormError::UnknownField(key.to_string()))
    }

    pub fn setters(&self) -> &BTreeMap<String, FieldSetter> {
        &self.setters
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn defaults(&self) -> &FieldValues {
        &self.defaults
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }
}
