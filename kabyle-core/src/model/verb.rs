use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::schema::INTENSIVE_FORMS_KEY;

/// One verb of the dataset. Field values are classified once, when the
/// record is deserialized, so rendering only ever matches on `FieldValue`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawVerb")]
pub struct VerbRecord {
    pub name: Option<String>,
    pub id: Option<String>,
    pub fields: HashMap<String, FieldValue>,
}

#[derive(Debug, Deserialize)]
struct RawVerb {
    #[serde(default)]
    name: Value,

    #[serde(default)]
    id: Value,

    #[serde(flatten)]
    fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Scalar(String),
    Sequence(Vec<String>),
    /// Person key -> form, in the order the dataset lists them.
    Keyed(Vec<(String, FormValue)>),
    Variants(Vec<IntensiveVariant>),
    /// Anything else, kept as its JSON text.
    Raw(String),
}

/// Value stored under a single person key of a keyed field.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Scalar(String),
    Sequence(Vec<String>),
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntensiveVariant {
    pub name: Option<String>,
    pub fields: HashMap<String, FieldValue>,
}

impl From<RawVerb> for VerbRecord {
    fn from(raw: RawVerb) -> Self {
        VerbRecord {
            name: optional_text(&raw.name),
            id: optional_text(&raw.id),
            fields: classify_fields(raw.fields),
        }
    }
}

impl VerbRecord {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn id_text(&self) -> &str {
        self.id.as_deref().unwrap_or("N/A")
    }

    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }
}

impl IntensiveVariant {
    fn from_json(item: Value) -> Self {
        match item {
            Value::Object(mut map) => {
                let name = map.remove("name").as_ref().and_then(optional_text);
                IntensiveVariant {
                    name,
                    fields: classify_fields(map),
                }
            }
            // not an object: a variant with nothing to show but its index
            _ => IntensiveVariant {
                name: None,
                fields: HashMap::new(),
            },
        }
    }

    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }
}

impl FieldValue {
    /// `None` for `null`. Only `intensiveForms` may hold variants.
    pub fn classify(key: &str, value: Value) -> Option<FieldValue> {
        if key == INTENSIVE_FORMS_KEY {
            return match value {
                Value::Null => None,
                Value::Array(items) => Some(FieldValue::Variants(
                    items.into_iter().map(IntensiveVariant::from_json).collect(),
                )),
                other => Some(FieldValue::Raw(scalar_text(&other))),
            };
        }

        match value {
            Value::Null => None,
            Value::String(s) => Some(FieldValue::Scalar(s)),
            Value::Bool(_) | Value::Number(_) => Some(FieldValue::Scalar(value.to_string())),
            Value::Array(items) => Some(FieldValue::Sequence(
                items.iter().map(scalar_text).collect(),
            )),
            Value::Object(map) => Some(FieldValue::Keyed(
                map.into_iter()
                    .map(|(k, v)| (k, FormValue::from_json(v)))
                    .collect(),
            )),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Scalar(s) | FieldValue::Raw(s) => s.is_empty(),
            FieldValue::Sequence(items) => items.is_empty(),
            FieldValue::Keyed(forms) => forms.is_empty(),
            FieldValue::Variants(variants) => variants.is_empty(),
        }
    }
}

impl FormValue {
    fn from_json(value: Value) -> Self {
        match value {
            Value::String(s) => FormValue::Scalar(s),
            Value::Bool(_) | Value::Number(_) => FormValue::Scalar(value.to_string()),
            Value::Array(items) => FormValue::Sequence(items.iter().map(scalar_text).collect()),
            Value::Object(_) | Value::Null => FormValue::Raw(value.to_string()),
        }
    }
}

fn classify_fields(map: Map<String, Value>) -> HashMap<String, FieldValue> {
    map.into_iter()
        .filter_map(|(k, v)| FieldValue::classify(&k, v).map(|fv| (k, fv)))
        .collect()
}

/// Strings verbatim, everything else as JSON text.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn optional_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        other => Some(scalar_text(other)),
    }
}
