use super::form::{FormValues, CONFIRMATION_FIELD, FORM_NAME_FIELD, HONEYPOT_FIELD, OTHER_DETAIL_FIELD};

/// Fields never shown back to the visitor.
pub const HIDDEN_FROM_SUMMARY: [&str; 4] =
    [FORM_NAME_FIELD, HONEYPOT_FIELD, CONFIRMATION_FIELD, OTHER_DETAIL_FIELD];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub label: String,
    pub value: String,
}

/// Human-readable label for a field name; unknown names are returned as-is.
pub fn label_for(name: &str) -> &str {
    match name {
        "nombre" => "Nombre",
        "organizacion" => "Organización",
        "cargo" => "Cargo",
        "email" => "Correo electrónico",
        "telefono" => "Teléfono",
        "sector" => "Sector",
        "tamano" => "Tamaño de la organización",
        "areas" => "Áreas de interés",
        "desafio" => "Principal desafío",
        "horizonte" => "Horizonte de tiempo",
        "mensaje" => "Comentarios adicionales",
        other => other,
    }
}

/// One entry per non-blank, displayable field, in document order, showing
/// values exactly as they will be posted.
/// Multiple checked options of one field are joined into a single value.
pub fn build_summary(values: &FormValues) -> Vec<SummaryEntry> {
    values
        .entries()
        .iter()
        .filter(|entry| !HIDDEN_FROM_SUMMARY.contains(&entry.name.as_str()))
        .filter_map(|entry| {
            let value = entry
                .values
                .iter()
                .filter(|v| !v.trim().is_empty())
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            (!value.is_empty()).then(|| SummaryEntry {
                label: label_for(&entry.name).to_string(),
                value,
            })
        })
        .collect()
}
