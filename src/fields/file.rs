//! File-backed field adapter
//!
//! File inputs reject programmatic values, so the adapter drops the
//! controlled value entirely and substitutes a handler that records the
//! native file collection out-of-band while mirroring the joined file
//! names into the field's text value.

use crate::error::{FormError, Result};
use crate::event::ChangeEvent;
use crate::options::AttributeBag;
use crate::store::FormStore;

use super::descriptor::{FieldControl, FieldDescriptor};

/// A file-backed field: id/name/attrs survive, the controlled value does
/// not, and `input_type` is pinned to `"file"`.
#[derive(Debug, Clone, PartialEq)]
pub struct FileField {
    pub id: String,
    pub name: String,
    pub attrs: AttributeBag,
    pub input_type: &'static str,
}

/// Derive a file field from a synthesized text field. Only text-backed
/// fields can carry a file control.
pub fn to_file_field(field: &FieldDescriptor) -> Result<FileField> {
    if !matches!(field.control, FieldControl::Text { .. }) {
        return Err(FormError::UnsupportedControl {
            field: field.name.clone(),
            adapter: "file",
        });
    }
    Ok(FileField {
        id: field.id.clone(),
        name: field.name.clone(),
        attrs: field.attrs.clone(),
        input_type: "file",
    })
}

impl FileField {
    /// Record the selected file collection and mirror the comma-joined
    /// file names into the field's text value. Only file-collection
    /// notifications match this control.
    pub fn on_change(&self, event: &ChangeEvent, store: &mut FormStore) -> Result<()> {
        match event {
            ChangeEvent::Files(files) => store.handle_file_event(&self.name, files.clone()),
            _ => Err(FormError::EventMismatch {
                field: self.name.clone(),
            }),
        }
    }
}
