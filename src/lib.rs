//! formstate - a form-state engine for interactive input controls
//!
//! Binds primitive typed values (text, numbers, booleans) to input
//! controls: a declared default-value shape seeds a per-activation store,
//! the store synthesizes type-correct field descriptors and change
//! handlers, adapters derive select/radio/file/textarea variants, and the
//! whole store serializes to a JSON object or an all-string form payload.
//!
//! Rendering is out of scope; this crate owns only the state machine and
//! data transformations behind the controls.
//!
//! ```
//! use formstate::{ChangeEvent, FieldValues, Form, RawFormOptions};
//!
//! let form = Form::new(Some(RawFormOptions::new().validator(
//!     "email",
//!     |value, _| match value.as_text() {
//!         Some(text) if text.is_empty() => Some("Email cannot be empty".to_string()),
//!         _ => None,
//!     },
//! )));
//! let mut store = form.activate(FieldValues::from([
//!     ("email".to_string(), "".into()),
//!     ("session".to_string(), false.into()),
//! ]));
//!
//! let email = store.field("email").unwrap();
//! email.on_change(&ChangeEvent::input("a@b.com"), &mut store).unwrap();
//! assert_eq!(store.to_form_data().get("email"), Some("a@b.com"));
//! ```

mod error;
mod event;
mod fields;
mod form;
mod options;
mod store;
mod value;

pub use error::*;
pub use event::*;
pub use fields::*;
pub use form::*;
pub use options::*;
pub use store::*;
pub use value::*;
