//! Shape of the diagnostic form and the answers collected for it.
//!
//! The definition is static for this site; the only mutable part of it is the
//! visibility and `required` flag of the "other" companion field.

use super::state::Step;

pub const FORM_NAME_FIELD: &str = "form-name";
pub const HONEYPOT_FIELD: &str = "bot-field";
pub const CONFIRMATION_FIELD: &str = "confirmacion";
pub const OTHER_DETAIL_FIELD: &str = "otro-detalle";

/// The checkbox (field name, option value) that reveals `OTHER_DETAIL_FIELD`.
pub const OTHER_TRIGGER: (&str, &str) = ("areas", "Otro");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line input; the payload is the HTML `type` attribute.
    Text(&'static str),
    Textarea,
    RadioGroup(&'static [&'static str]),
    Checkbox(&'static [&'static str]),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub visible: bool,
}

impl FormField {
    const fn new(name: &'static str, kind: FieldKind, required: bool) -> Self {
        Self { name, kind, required, visible: true }
    }

    const fn hidden(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Text("text"), required: false, visible: false }
    }

    pub fn is_text_like(&self) -> bool {
        matches!(self.kind, FieldKind::Text(_) | FieldKind::Textarea)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDefinition {
    pub step: Step,
    pub title: &'static str,
    pub fields: Vec<FormField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDefinition {
    pub steps: Vec<StepDefinition>,
}

impl FormDefinition {
    /// The four-step consulting diagnostic used on the contact section.
    pub fn diagnostic() -> Self {
        use FieldKind::*;

        let layouts = vec![
            ("Datos de contacto", vec![
                FormField::new("nombre", Text("text"), true),
                FormField::new("organizacion", Text("text"), true),
                FormField::new("cargo", Text("text"), false),
                FormField::new("email", Text("email"), true),
                FormField::new("telefono", Text("tel"), false),
            ]),
            ("Su organización", vec![
                FormField::new(
                    "sector",
                    RadioGroup(&["Público", "Privado", "Tercer sector", "Académico"]),
                    true,
                ),
                FormField::new(
                    "tamano",
                    RadioGroup(&["1 a 10", "11 a 50", "51 a 250", "Más de 250"]),
                    true,
                ),
            ]),
            ("Su desafío", vec![
                FormField::new(
                    "areas",
                    Checkbox(&[
                        "Estrategia",
                        "Gobernanza",
                        "Procesos de decisión",
                        "Cultura organizacional",
                        "Otro",
                    ]),
                    false,
                ),
                FormField::hidden(OTHER_DETAIL_FIELD),
                FormField::new("desafio", Textarea, true),
                FormField::new(
                    "horizonte",
                    RadioGroup(&["Inmediato", "En 3 meses", "En 6 meses", "Más de un año"]),
                    true,
                ),
                FormField::new("mensaje", Textarea, false),
            ]),
            ("Resumen", vec![
                FormField::new(CONFIRMATION_FIELD, Checkbox(&["on"]), false),
            ]),
        ];

        Self {
            steps: Step::all()
                .zip(layouts)
                .map(|(step, (title, fields))| StepDefinition { step, title, fields })
                .collect(),
        }
    }

    pub fn step(&self, step: Step) -> Option<&StepDefinition> {
        self.steps.iter().find(|s| s.step == step)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        self.steps.iter().flat_map(|s| s.fields.iter())
    }

    #[cfg(test)]
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.steps.iter_mut().flat_map(|s| s.fields.iter_mut()).find(|f| f.name == name)
    }

    /// Shows and requires the companion field when `checked`, hides and
    /// un-requires it otherwise. The entered text is left untouched.
    pub fn set_other_detail(&mut self, checked: bool) {
        if let Some(field) = self.field_mut(OTHER_DETAIL_FIELD) {
            field.visible = checked;
            field.required = checked;
        }
    }
}

/// Answers for one field name. Text inputs always carry one (possibly empty)
/// value; radio groups and checkboxes carry one value per checked option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    pub name: String,
    pub values: Vec<String>,
}

/// Ordered collection of answers, in document order like a browser `FormData`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    entries: Vec<FieldValue>,
}

impl FormValues {
    /// Seeds one entry per field of `form`, preceded by the bookkeeping fields.
    pub fn for_form(form: &FormDefinition, form_name: &str) -> Self {
        let mut values = Self::default();
        values.set(FORM_NAME_FIELD, form_name);
        values.set(HONEYPOT_FIELD, "");
        for field in form.fields() {
            let initial = if field.is_text_like() { vec![String::new()] } else { Vec::new() };
            values.entries.push(FieldValue { name: field.name.to_string(), values: initial });
        }
        values
    }

    pub fn entries(&self) -> &[FieldValue] {
        &self.entries
    }

    fn entry_mut(&mut self, name: &str) -> &mut FieldValue {
        if let Some(pos) = self.entries.iter().position(|e| e.name == name) {
            &mut self.entries[pos]
        } else {
            self.entries.push(FieldValue { name: name.to_string(), values: Vec::new() });
            let last = self.entries.len() - 1;
            &mut self.entries[last]
        }
    }

    /// Replaces the value of a text input or the selection of a radio group.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.entry_mut(name).values = vec![value.into()];
    }

    pub fn set_checked(&mut self, name: &str, option: &str, checked: bool) {
        let entry = self.entry_mut(name);
        entry.values.retain(|v| v != option);
        if checked {
            entry.values.push(option.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .and_then(|e| e.values.first())
            .map(String::as_str)
    }

    pub fn is_checked(&self, name: &str, option: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.name == name && e.values.iter().any(|v| v == option))
    }

    pub fn has_selection(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name && !e.values.is_empty())
    }

    /// Flattened `(name, value)` pairs, one per value.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .flat_map(|e| e.values.iter().map(move |v| (e.name.as_str(), v.as_str())))
    }
}
