//! Field descriptor synthesis
//!
//! A descriptor is the minimal attribute/handler bundle for one declared
//! field: `{id, name}` (both the declared key), merged extra attributes,
//! and a kind-specific control. Synthesis dispatches once on the value's
//! tag; the control kind is never re-inferred afterwards.

use crate::error::{FormError, Result};
use crate::event::ChangeEvent;
use crate::options::AttributeBag;
use crate::store::FormStore;
use crate::value::{parse_base10_int, FieldValue};

/// Kind-specific control surface of a synthesized field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldControl {
    /// Boolean fields expose a checked state
    Checkbox { checked: bool },
    /// Number fields expose a numeric value; their handler parses input
    /// as a base-10 integer (malformed input becomes NaN, stored as-is)
    Number { value: f64 },
    /// The text fallback: everything that is neither boolean nor number
    Text { value: String },
}

/// The controlled descriptor for one declared field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub id: String,
    pub name: String,
    pub attrs: AttributeBag,
    pub control: FieldControl,
}

/// Synthesize the controlled descriptor for one field. Booleans route to a
/// checked-style control, numbers to a numeric value control, everything
/// else to a text control.
pub fn make_field(name: &str, value: &FieldValue, attrs: &AttributeBag) -> FieldDescriptor {
    let control = match value {
        FieldValue::Bool(checked) => FieldControl::Checkbox { checked: *checked },
        FieldValue::Number(value) => FieldControl::Number { value: *value },
        FieldValue::Text(value) => FieldControl::Text { value: value.clone() },
    };
    FieldDescriptor {
        id: name.to_string(),
        name: name.to_string(),
        attrs: attrs.clone(),
        control,
    }
}

impl FieldDescriptor {
    /// Apply an incoming change notification through the owning store.
    /// Updates exactly this field: checkbox controls forward the toggle
    /// state verbatim, number controls parse the input as a base-10
    /// integer, text controls forward the input verbatim.
    pub fn on_change(&self, event: &ChangeEvent, store: &mut FormStore) -> Result<()> {
        let next = match (&self.control, event) {
            (FieldControl::Checkbox { .. }, ChangeEvent::Toggle(state)) => {
                FieldValue::Bool(*state)
            }
            (FieldControl::Number { .. }, ChangeEvent::Input(raw)) => {
                FieldValue::Number(parse_base10_int(raw))
            }
            (FieldControl::Text { .. }, ChangeEvent::Input(raw)) => {
                FieldValue::Text(raw.clone())
            }
            _ => {
                return Err(FormError::EventMismatch {
                    field: self.name.clone(),
                })
            }
        };
        store.update(&self.name, next)
    }

    /// The field value this descriptor was synthesized from
    pub fn current_value(&self) -> FieldValue {
        match &self.control {
            FieldControl::Checkbox { checked } => FieldValue::Bool(*checked),
            FieldControl::Number { value } => FieldValue::Number(*value),
            FieldControl::Text { value } => FieldValue::Text(value.clone()),
        }
    }
}

/// Kind-specific declarative seed of an uncontrolled field
#[derive(Debug, Clone, PartialEq)]
pub enum UncontrolledSeed {
    DefaultChecked(bool),
    DefaultNumber(f64),
    DefaultText(String),
}

/// The uncontrolled counterpart: the same three-way dispatch, but the
/// descriptor is a pure declarative seed consumed once at activation.
/// It carries no handler; the platform's native change tracking owns
/// subsequent state.
#[derive(Debug, Clone, PartialEq)]
pub struct UncontrolledFieldDescriptor {
    pub id: String,
    pub name: String,
    pub attrs: AttributeBag,
    pub seed: UncontrolledSeed,
}

pub fn make_uncontrolled_field(
    name: &str,
    value: &FieldValue,
    attrs: &AttributeBag,
) -> UncontrolledFieldDescriptor {
    let seed = match value {
        FieldValue::Bool(checked) => UncontrolledSeed::DefaultChecked(*checked),
        FieldValue::Number(value) => UncontrolledSeed::DefaultNumber(*value),
        FieldValue::Text(value) => UncontrolledSeed::DefaultText(value.clone()),
    };
    UncontrolledFieldDescriptor {
        id: name.to_string(),
        name: name.to_string(),
        attrs: attrs.clone(),
        seed,
    }
}

impl UncontrolledFieldDescriptor {
    /// The default value this seed was synthesized from
    pub fn default_value(&self) -> FieldValue {
        match &self.seed {
            UncontrolledSeed::DefaultChecked(checked) => FieldValue::Bool(*checked),
            UncontrolledSeed::DefaultNumber(value) => FieldValue::Number(*value),
            UncontrolledSeed::DefaultText(value) => FieldValue::Text(value.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Form;
    use crate::value::FieldValues;

    fn login_store() -> crate::store::FormStore {
        let defaults = FieldValues::from([
            ("email".to_string(), "".into()),
            ("age".to_string(), 0.into()),
            ("session".to_string(), false.into()),
        ]);
        Form::new(None).activate(defaults)
    }

    mod routing {
        use super::*;

        #[test]
        fn test_boolean_routes_to_checkbox() {
            let field = make_field("session", &FieldValue::Bool(true), &AttributeBag::new());
            assert_eq!(field.control, FieldControl::Checkbox { checked: true });
            assert_eq!(field.id, "session");
            assert_eq!(field.name, "session");
        }

        #[test]
        fn test_number_routes_to_numeric_control() {
            let field = make_field("age", &FieldValue::Number(7.0), &AttributeBag::new());
            assert_eq!(field.control, FieldControl::Number { value: 7.0 });
        }

        #[test]
        fn test_non_finite_numbers_still_route_numeric() {
            let nan = make_field("age", &FieldValue::Number(f64::NAN), &AttributeBag::new());
            assert!(matches!(nan.control, FieldControl::Number { value } if value.is_nan()));
            let inf = make_field("age", &FieldValue::Number(f64::INFINITY), &AttributeBag::new());
            assert!(matches!(inf.control, FieldControl::Number { value } if value.is_infinite()));
        }

        #[test]
        fn test_everything_else_routes_to_text() {
            let field = make_field("email", &FieldValue::Text("a@b".to_string()), &AttributeBag::new());
            assert_eq!(field.control, FieldControl::Text { value: "a@b".to_string() });
        }

        #[test]
        fn test_extra_attributes_are_carried() {
            let attrs = AttributeBag::from([("type".to_string(), "email".to_string())]);
            let field = make_field("email", &FieldValue::Text(String::new()), &attrs);
            assert_eq!(field.attrs.get("type").map(String::as_str), Some("email"));
        }
    }

    mod handlers {
        use super::*;

        #[test]
        fn test_text_handler_forwards_verbatim() {
            let mut store = login_store();
            let field = store.field("email").unwrap();
            field
                .on_change(&ChangeEvent::input("foo@bar.com"), &mut store)
                .unwrap();
            assert_eq!(store.values()["email"], "foo@bar.com".into());
        }

        #[test]
        fn test_toggle_handler_forwards_state() {
            let mut store = login_store();
            let field = store.field("session").unwrap();
            field.on_change(&ChangeEvent::Toggle(true), &mut store).unwrap();
            assert_eq!(store.values()["session"], true.into());
        }

        #[test]
        fn test_number_handler_parses_base10_integer() {
            let mut store = login_store();
            let field = store.field("age").unwrap();
            field.on_change(&ChangeEvent::input("42"), &mut store).unwrap();
            assert_eq!(store.values()["age"], 42.into());
        }

        #[test]
        fn test_number_handler_stores_nan_for_malformed_input() {
            let mut store = login_store();
            let field = store.field("age").unwrap();
            field.on_change(&ChangeEvent::input("abc"), &mut store).unwrap();
            let stored = store.values()["age"].as_number().unwrap();
            assert!(stored.is_nan());
        }

        #[test]
        fn test_handler_updates_only_its_own_field() {
            let mut store = login_store();
            let field = store.field("email").unwrap();
            field.on_change(&ChangeEvent::input("x"), &mut store).unwrap();
            assert_eq!(store.values()["age"], 0.into());
            assert_eq!(store.values()["session"], false.into());
        }

        #[test]
        fn test_mismatched_event_fails_fast() {
            let mut store = login_store();
            let field = store.field("email").unwrap();
            let err = field
                .on_change(&ChangeEvent::Toggle(true), &mut store)
                .unwrap_err();
            assert_eq!(err, FormError::EventMismatch { field: "email".to_string() });
        }
    }

    mod uncontrolled {
        use super::*;

        #[test]
        fn test_seeds_follow_the_same_dispatch() {
            let attrs = AttributeBag::new();
            let flag = make_uncontrolled_field("session", &FieldValue::Bool(true), &attrs);
            assert_eq!(flag.seed, UncontrolledSeed::DefaultChecked(true));
            let count = make_uncontrolled_field("age", &FieldValue::Number(3.0), &attrs);
            assert_eq!(count.seed, UncontrolledSeed::DefaultNumber(3.0));
            let text = make_uncontrolled_field("email", &FieldValue::Text("a".to_string()), &attrs);
            assert_eq!(text.seed, UncontrolledSeed::DefaultText("a".to_string()));
        }

        #[test]
        fn test_default_value_round_trips() {
            let attrs = AttributeBag::new();
            let field = make_uncontrolled_field("age", &FieldValue::Number(3.0), &attrs);
            assert_eq!(field.default_value(), FieldValue::Number(3.0));
        }
    }
}
