//! Select-list and radio-group derivation
//!
//! Option lists are derived fresh on every call so selection state always
//! reflects the latest field value. Selection uses strict equality: the
//! option's value must match the field's current value in both tag and
//! payload (NaN therefore never selects).

use crate::error::{FormError, Result};
use crate::options::AttributeBag;
use crate::store::FormStore;
use crate::value::FieldValue;

use super::descriptor::{FieldControl, FieldDescriptor, UncontrolledFieldDescriptor};

/// One declared option of a select list or radio group
#[derive(Debug, Clone, PartialEq)]
pub struct MultiOption {
    pub label: String,
    pub value: FieldValue,
}

impl MultiOption {
    pub fn new(label: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A declared option with derived select-list state
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub label: String,
    pub value: FieldValue,
    pub selected: bool,
}

/// A declared option with derived radio-group state. All options of a
/// group share the one handler on the owning [`RadioField`].
#[derive(Debug, Clone, PartialEq)]
pub struct RadioOption {
    pub label: String,
    pub value: FieldValue,
    pub checked: bool,
}

/// Select-list descriptor. Its handler forwards the chosen option's
/// already-typed value straight to the store, bypassing the generic
/// text/number parse path.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectField {
    pub id: String,
    pub name: String,
    pub attrs: AttributeBag,
    value: FieldValue,
}

impl SelectField {
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Report the chosen option to the owning store
    pub fn choose(&self, option: &MultiOption, store: &mut FormStore) -> Result<()> {
        store.update(&self.name, option.value.clone())
    }
}

/// Radio-group descriptor; [`RadioField::choose`] is the one handler the
/// whole group shares, per standard radio semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioField {
    pub id: String,
    pub name: String,
    pub attrs: AttributeBag,
    value: FieldValue,
}

impl RadioField {
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Report the picked option's value through the shared group handler
    pub fn choose(&self, option: &MultiOption, store: &mut FormStore) -> Result<()> {
        store.update(&self.name, option.value.clone())
    }
}

/// Derive a select-list field from a synthesized text or number field.
/// Checkbox-backed fields cannot be select lists.
pub fn to_select_field(field: &FieldDescriptor) -> Result<SelectField> {
    if matches!(field.control, FieldControl::Checkbox { .. }) {
        return Err(FormError::UnsupportedControl {
            field: field.name.clone(),
            adapter: "select",
        });
    }
    Ok(SelectField {
        id: field.id.clone(),
        name: field.name.clone(),
        attrs: field.attrs.clone(),
        value: field.current_value(),
    })
}

/// Derive a radio-group field from a synthesized text or number field
pub fn to_radio_field(field: &FieldDescriptor) -> Result<RadioField> {
    if matches!(field.control, FieldControl::Checkbox { .. }) {
        return Err(FormError::UnsupportedControl {
            field: field.name.clone(),
            adapter: "radio",
        });
    }
    Ok(RadioField {
        id: field.id.clone(),
        name: field.name.clone(),
        attrs: field.attrs.clone(),
        value: field.current_value(),
    })
}

/// Derive `selected` state for every declared option. Options sharing an
/// equal value are all marked selected; that is a caller declaration
/// error this layer does not detect.
pub fn select_options(field: &SelectField, options: &[MultiOption]) -> Vec<SelectOption> {
    options
        .iter()
        .map(|option| SelectOption {
            label: option.label.clone(),
            value: option.value.clone(),
            selected: option.value == field.value,
        })
        .collect()
}

/// Derive `checked` state for every declared option of a radio group
pub fn radio_options(field: &RadioField, options: &[MultiOption]) -> Vec<RadioOption> {
    options
        .iter()
        .map(|option| RadioOption {
            label: option.label.clone(),
            value: option.value.clone(),
            checked: option.value == field.value,
        })
        .collect()
}

/// An uncontrolled radio option: per-option id, shared group name, and a
/// derived default-checked seed
#[derive(Debug, Clone, PartialEq)]
pub struct UncontrolledRadioOption {
    pub id: String,
    pub input_type: &'static str,
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub default_checked: bool,
}

/// An uncontrolled select option with a derived default-selected seed
#[derive(Debug, Clone, PartialEq)]
pub struct UncontrolledSelectOption {
    pub label: String,
    pub value: FieldValue,
    pub default_selected: bool,
}

/// Derive uncontrolled radio options; each option gets its own id of the
/// form `{field.id}-option-{value}` while sharing the group name.
pub fn uncontrolled_radio_options(
    field: &UncontrolledFieldDescriptor,
    options: &[MultiOption],
) -> Vec<UncontrolledRadioOption> {
    let default = field.default_value();
    options
        .iter()
        .map(|option| UncontrolledRadioOption {
            id: format!("{}-option-{}", field.id, option.value.display_string()),
            input_type: "radio",
            name: field.name.clone(),
            label: option.label.clone(),
            value: option.value.clone(),
            default_checked: option.value == default,
        })
        .collect()
}

/// Derive uncontrolled select options against the field's default value
pub fn uncontrolled_select_options(
    field: &UncontrolledFieldDescriptor,
    options: &[MultiOption],
) -> Vec<UncontrolledSelectOption> {
    let default = field.default_value();
    options
        .iter()
        .map(|option| UncontrolledSelectOption {
            label: option.label.clone(),
            value: option.value.clone(),
            default_selected: option.value == default,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::descriptor::{make_field, make_uncontrolled_field};
    use crate::form::Form;
    use crate::value::FieldValues;

    fn text_field(value: &str) -> FieldDescriptor {
        make_field("plan", &FieldValue::Text(value.to_string()), &AttributeBag::new())
    }

    fn plan_options() -> Vec<MultiOption> {
        vec![MultiOption::new("Plan A", "A"), MultiOption::new("Plan B", "B")]
    }

    mod select {
        use super::*;

        #[test]
        fn test_exactly_the_matching_option_is_selected() {
            let select = to_select_field(&text_field("A")).unwrap();
            let derived = select_options(&select, &plan_options());
            assert!(derived[0].selected);
            assert!(!derived[1].selected);
        }

        #[test]
        fn test_no_match_selects_nothing() {
            let select = to_select_field(&text_field("C")).unwrap();
            let derived = select_options(&select, &plan_options());
            assert!(derived.iter().all(|option| !option.selected));
        }

        #[test]
        fn test_duplicate_values_are_all_selected() {
            let select = to_select_field(&text_field("A")).unwrap();
            let options = vec![MultiOption::new("First", "A"), MultiOption::new("Second", "A")];
            let derived = select_options(&select, &options);
            assert!(derived[0].selected && derived[1].selected);
        }

        #[test]
        fn test_numeric_match_is_exact() {
            let field = make_field("count", &FieldValue::Number(2.0), &AttributeBag::new());
            let select = to_select_field(&field).unwrap();
            let derived = select_options(
                &select,
                &[MultiOption::new("One", 1), MultiOption::new("Two", 2)],
            );
            assert!(!derived[0].selected);
            assert!(derived[1].selected);
        }

        #[test]
        fn test_nan_field_value_selects_nothing() {
            let field = make_field("count", &FieldValue::Number(f64::NAN), &AttributeBag::new());
            let select = to_select_field(&field).unwrap();
            let derived = select_options(&select, &[MultiOption::new("NaN", f64::NAN)]);
            assert!(!derived[0].selected);
        }

        #[test]
        fn test_checkbox_field_is_rejected() {
            let field = make_field("flag", &FieldValue::Bool(false), &AttributeBag::new());
            let err = to_select_field(&field).unwrap_err();
            assert_eq!(
                err,
                FormError::UnsupportedControl { field: "flag".to_string(), adapter: "select" }
            );
        }

        #[test]
        fn test_choose_forwards_typed_value() {
            let defaults = FieldValues::from([("count".to_string(), 1.into())]);
            let mut store = Form::new(None).activate(defaults);
            let select = to_select_field(&store.field("count").unwrap()).unwrap();
            select
                .choose(&MultiOption::new("Two", 2), &mut store)
                .unwrap();
            // The option's value lands as a number, not as parsed text
            assert_eq!(store.values()["count"], FieldValue::Number(2.0));
        }
    }

    mod radio {
        use super::*;

        #[test]
        fn test_exactly_the_matching_option_is_checked() {
            let radio = to_radio_field(&text_field("B")).unwrap();
            let derived = radio_options(&radio, &plan_options());
            assert!(!derived[0].checked);
            assert!(derived[1].checked);
        }

        #[test]
        fn test_shared_handler_reports_picked_option() {
            let defaults = FieldValues::from([("plan".to_string(), "A".into())]);
            let mut store = Form::new(None).activate(defaults);
            let radio = to_radio_field(&store.field("plan").unwrap()).unwrap();
            radio
                .choose(&MultiOption::new("Plan B", "B"), &mut store)
                .unwrap();
            assert_eq!(store.values()["plan"], "B".into());
        }

        #[test]
        fn test_checkbox_field_is_rejected() {
            let field = make_field("flag", &FieldValue::Bool(true), &AttributeBag::new());
            assert!(to_radio_field(&field).is_err());
        }
    }

    mod uncontrolled {
        use super::*;

        #[test]
        fn test_radio_options_derive_ids_and_default_checked() {
            let field =
                make_uncontrolled_field("plan", &FieldValue::Text("A".to_string()), &AttributeBag::new());
            let derived = uncontrolled_radio_options(&field, &plan_options());
            assert_eq!(derived[0].id, "plan-option-A");
            assert_eq!(derived[0].input_type, "radio");
            assert_eq!(derived[0].name, "plan");
            assert!(derived[0].default_checked);
            assert!(!derived[1].default_checked);
        }

        #[test]
        fn test_select_options_derive_default_selected() {
            let field =
                make_uncontrolled_field("plan", &FieldValue::Text("B".to_string()), &AttributeBag::new());
            let derived = uncontrolled_select_options(&field, &plan_options());
            assert!(!derived[0].default_selected);
            assert!(derived[1].default_selected);
        }
    }
}
