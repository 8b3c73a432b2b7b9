//! Form handles and provider activation
//!
//! A `Form` is the declared form: options normalized once at creation.
//! Activation hands out an explicitly owned store instead of an ambient
//! context; passing a different defaults object means a new activation
//! and therefore a fresh store.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::fields::{make_uncontrolled_field, UncontrolledFieldDescriptor};
use crate::options::{FormOptions, RawFormOptions, RawUncontrolledOptions, UncontrolledOptions};
use crate::store::FormStore;
use crate::value::FieldValues;

/// A declared controlled form
#[derive(Debug)]
pub struct Form {
    options: Arc<FormOptions>,
}

impl Form {
    /// Declare a form; absent options normalize to empty validators and
    /// empty extra attributes.
    pub fn new(options: Option<RawFormOptions>) -> Self {
        Self {
            options: Arc::new(FormOptions::normalize(options)),
        }
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    /// Provider activation: a fresh store seeded from `defaults`, scoped
    /// to the activation's lifetime. Values and errors are seeded for
    /// every declared field; the file map starts empty.
    pub fn activate(&self, defaults: FieldValues) -> FormStore {
        FormStore::new(Arc::clone(&self.options), defaults)
    }
}

/// A declared uncontrolled form. Activation synthesizes the full seed
/// descriptor map once; there is no store and no handlers, because the
/// platform's native change tracking owns subsequent state.
#[derive(Debug)]
pub struct UncontrolledForm {
    options: UncontrolledOptions,
}

impl UncontrolledForm {
    pub fn new(options: Option<RawUncontrolledOptions>) -> Self {
        Self {
            options: UncontrolledOptions::normalize(options),
        }
    }

    pub fn options(&self) -> &UncontrolledOptions {
        &self.options
    }

    pub fn activate(&self, defaults: &FieldValues) -> BTreeMap<String, UncontrolledFieldDescriptor> {
        defaults
            .iter()
            .map(|(key, value)| {
                let attrs = self.options.attributes(key).cloned().unwrap_or_default();
                (key.clone(), make_uncontrolled_field(key, value, &attrs))
            })
            .collect()
    }
}
