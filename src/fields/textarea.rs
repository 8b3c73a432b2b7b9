//! Textarea adapter
//!
//! Textarea content travels as element children rather than a value
//! attribute, so the adapter splits the value out of the descriptor and
//! hands it back separately next to a value-less field.

use crate::error::{FormError, Result};
use crate::event::ChangeEvent;
use crate::options::AttributeBag;
use crate::store::FormStore;
use crate::value::FieldValue;

use super::descriptor::{FieldControl, FieldDescriptor};

/// A text field with its value split off for child-content rendering
#[derive(Debug, Clone, PartialEq)]
pub struct TextAreaField {
    pub id: String,
    pub name: String,
    pub attrs: AttributeBag,
}

/// Split a synthesized text field into a value-less textarea descriptor
/// and its current content.
pub fn to_textarea_field(field: &FieldDescriptor) -> Result<(TextAreaField, String)> {
    match &field.control {
        FieldControl::Text { value } => Ok((
            TextAreaField {
                id: field.id.clone(),
                name: field.name.clone(),
                attrs: field.attrs.clone(),
            },
            value.clone(),
        )),
        _ => Err(FormError::UnsupportedControl {
            field: field.name.clone(),
            adapter: "textarea",
        }),
    }
}

impl TextAreaField {
    /// Forward the incoming textual content verbatim
    pub fn on_change(&self, event: &ChangeEvent, store: &mut FormStore) -> Result<()> {
        match event {
            ChangeEvent::Input(raw) => store.update(&self.name, FieldValue::Text(raw.clone())),
            _ => Err(FormError::EventMismatch {
                field: self.name.clone(),
            }),
        }
    }
}
