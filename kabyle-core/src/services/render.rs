use log::trace;

use crate::model::person::person_label;
use crate::model::schema::{INTENSIVE_FIELDS, INTENSIVE_FORMS_KEY, VERB_FIELDS};
use crate::model::verb::{FieldValue, FormValue, IntensiveVariant, VerbRecord};

const INDENT: &str = "  ";

/// Labeled, indented text for one verb. Absent fields produce no line.
pub fn render(record: &VerbRecord) -> Vec<String> {
    let mut out: Vec<String> = vec![
        String::new(),
        format!(
            "Conjugaison du verbe '{}' (ID: {}):",
            record.name().unwrap_or("N/A"),
            record.id_text()
        ),
    ];

    for (key, label) in VERB_FIELDS {
        let Some(value) = record.field(key) else {
            continue;
        };

        if key == INTENSIVE_FORMS_KEY {
            render_intensive(&mut out, label, value, 1);
        } else {
            render_value(&mut out, label, value, 1);
        }
    }

    for line in &out {
        trace!("render: {line}");
    }

    out
}

fn render_value(out: &mut Vec<String>, label: &str, value: &FieldValue, level: usize) {
    let prefix = INDENT.repeat(level);

    match value {
        FieldValue::Keyed(forms) => {
            out.push(format!("{prefix}{label}:"));
            for (key, form) in forms {
                out.push(format!(
                    "{prefix}{INDENT}{}: {}",
                    person_label(key),
                    form_text(form)
                ));
            }
        }
        FieldValue::Variants(_) => render_intensive(out, label, value, level),
        _ => out.push(format!("{prefix}{label}: {}", inline_text(value))),
    }
}

fn render_intensive(out: &mut Vec<String>, label: &str, value: &FieldValue, level: usize) {
    let prefix = INDENT.repeat(level);
    out.push(format!("{prefix}{label}:"));

    match value {
        FieldValue::Variants(variants) => {
            for (idx, variant) in variants.iter().enumerate() {
                render_variant(out, idx + 1, variant, level + 1);
            }
        }
        // not a list of variants: shown as-is under the header
        other => out.push(format!("{prefix}{}", inline_text(other))),
    }
}

fn render_variant(out: &mut Vec<String>, index: usize, variant: &IntensiveVariant, level: usize) {
    let prefix = INDENT.repeat(level);
    out.push(format!(
        "{prefix}Variante {index}: {}",
        variant.name.as_deref().unwrap_or("N/A")
    ));

    for (key, label) in INTENSIVE_FIELDS {
        match variant.field(key) {
            Some(value) if !value.is_empty() => render_value(out, label, value, level + 1),
            _ => {}
        }
    }
}

fn form_text(form: &FormValue) -> String {
    match form {
        FormValue::Scalar(s) | FormValue::Raw(s) => s.clone(),
        FormValue::Sequence(items) => items.join(", "),
    }
}

fn inline_text(value: &FieldValue) -> String {
    match value {
        FieldValue::Scalar(s) | FieldValue::Raw(s) => s.clone(),
        FieldValue::Sequence(items) => items.join(", "),
        FieldValue::Keyed(forms) => forms
            .iter()
            .map(|(key, form)| format!("{}: {}", person_label(key), form_text(form)))
            .collect::<Vec<_>>()
            .join(", "),
        FieldValue::Variants(variants) => variants
            .iter()
            .map(|v| v.name.as_deref().unwrap_or("N/A"))
            .collect::<Vec<_>>()
            .join(", "),
    }
}
