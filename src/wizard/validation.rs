use super::form::{FieldKind, FormDefinition, FormValues};
use super::state::Step;

/// Outcome of checking one step's required inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepValidation {
    pub step: Step,
    /// Required text/textarea fields whose trimmed value is empty.
    pub missing_fields: Vec<&'static str>,
    /// Required radio groups with no checked member.
    pub missing_groups: Vec<&'static str>,
}

impl StepValidation {
    pub fn is_valid(&self) -> bool {
        self.missing_fields.is_empty() && self.missing_groups.is_empty()
    }
}

pub fn validate_step(form: &FormDefinition, values: &FormValues, step: Step) -> StepValidation {
    let mut result = StepValidation {
        step,
        missing_fields: Vec::new(),
        missing_groups: Vec::new(),
    };

    let Some(definition) = form.step(step) else {
        return result;
    };

    for field in definition.fields.iter().filter(|f| f.required && f.visible) {
        match field.kind {
            FieldKind::Text(_) | FieldKind::Textarea => {
                let filled = values.get(field.name).is_some_and(|v| !v.trim().is_empty());
                if !filled {
                    result.missing_fields.push(field.name);
                }
            }
            FieldKind::RadioGroup(_) => {
                if !values.has_selection(field.name) {
                    result.missing_groups.push(field.name);
                }
            }
            FieldKind::Checkbox(_) => {}
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::form::OTHER_DETAIL_FIELD;

    fn setup() -> (FormDefinition, FormValues) {
        let form = FormDefinition::diagnostic();
        let values = FormValues::for_form(&form, "diagnostico");
        (form, values)
    }

    fn step(n: u8) -> Step {
        Step::new(n).unwrap()
    }

    #[test]
    fn whitespace_only_text_is_missing() {
        let (form, mut values) = setup();
        values.set("nombre", "   ");
        values.set("organizacion", "Acme");
        values.set("email", "a@b.com");

        let result = validate_step(&form, &values, step(1));
        assert!(!result.is_valid());
        assert_eq!(result.missing_fields, vec!["nombre"]);
        assert!(result.missing_groups.is_empty());
    }

    #[test]
    fn optional_fields_do_not_block() {
        let (form, mut values) = setup();
        values.set("nombre", "Ana");
        values.set("organizacion", "Acme");
        values.set("email", "a@b.com");

        assert!(validate_step(&form, &values, step(1)).is_valid());
    }

    #[test]
    fn radio_groups_need_one_selection() {
        let (form, mut values) = setup();
        values.set("sector", "Privado");

        let result = validate_step(&form, &values, step(2));
        assert_eq!(result.missing_groups, vec!["tamano"]);
        assert!(result.missing_fields.is_empty());

        values.set("tamano", "11 a 50");
        assert!(validate_step(&form, &values, step(2)).is_valid());
    }

    #[test]
    fn companion_field_is_required_only_while_shown() {
        let (mut form, mut values) = setup();
        values.set("desafio", "Alinear al directorio");
        values.set("horizonte", "Inmediato");
        assert!(validate_step(&form, &values, step(3)).is_valid());

        form.set_other_detail(true);
        let result = validate_step(&form, &values, step(3));
        assert_eq!(result.missing_fields, vec![OTHER_DETAIL_FIELD]);

        values.set(OTHER_DETAIL_FIELD, "Sucesión");
        assert!(validate_step(&form, &values, step(3)).is_valid());

        values.set(OTHER_DETAIL_FIELD, "");
        form.set_other_detail(false);
        assert!(validate_step(&form, &values, step(3)).is_valid());
    }

    #[test]
    fn terminal_step_has_nothing_required() {
        let (form, values) = setup();
        assert!(validate_step(&form, &values, Step::TERMINAL).is_valid());
    }
}
