//! Certificate records and collection validation.
//!
//! The configuration file is hand-edited, so records are read leniently:
//! each entry of `certificates` is inspected on its own and a bad entry is
//! dropped without failing the rest of the batch.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::error::PortfolioResult;

/// A validated certificate, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub name: String,
    pub issuer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Certificate kind ("Professional", "Course", ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
}

/// Why a record was left out of the gallery.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordRejection {
    #[error("record is not an object")]
    NotAnObject,
    #[error("missing required field `name`")]
    MissingName,
    #[error("missing required field `issuer`")]
    MissingIssuer,
}

/// A record that failed validation, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroppedRecord {
    /// Position in the source list
    pub index: usize,
    pub reason: RecordRejection,
    pub record: Value,
}

/// The outcome of validating a certificate list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Collection {
    /// Valid records, in source order
    pub certificates: Vec<Certificate>,
    pub dropped: Vec<DroppedRecord>,
}

impl Collection {
    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }
}

#[derive(Deserialize)]
struct Document {
    #[serde(default)]
    certificates: Value,
}

impl Certificate {
    /// Validate one raw record.
    pub fn from_value(value: &Value) -> Result<Self, RecordRejection> {
        let fields = value.as_object().ok_or(RecordRejection::NotAnObject)?;

        let name = required_field(fields, "name").ok_or(RecordRejection::MissingName)?;
        let issuer = required_field(fields, "issuer").ok_or(RecordRejection::MissingIssuer)?;

        let skills = match fields.get("skills") {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
            _ => Vec::new(),
        };

        Ok(Self {
            name,
            issuer,
            date: text_field(fields, "date"),
            kind: text_field(fields, "type"),
            image: text_field(fields, "image"),
            pdf: text_field(fields, "pdf"),
            skills,
        })
    }
}

/// Scalars read as text; absent, null and empty values read as missing.
fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(scalar_text)
        .filter(|text| !text.is_empty())
}

/// Like [`text_field`], but `false`, zero and NaN also read as missing.
fn required_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key) {
        Some(Value::Bool(false)) => None,
        Some(Value::Number(n)) if n.as_f64().map_or(false, |v| v == 0.0 || v.is_nan()) => None,
        _ => text_field(fields, key),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Parse a configuration document and return its `certificates` list.
///
/// `Ok(None)` when the field is missing or is not an array.
pub fn parse_document(body: &str) -> PortfolioResult<Option<Vec<Value>>> {
    let document: Document = serde_json::from_str(body)?;
    Ok(match document.certificates {
        Value::Array(records) => Some(records),
        _ => None,
    })
}

/// Validate every record, keeping survivors in source order.
///
/// Each dropped record is logged as a warning.
pub fn collect(records: &[Value]) -> Collection {
    let mut collection = Collection::default();

    for (index, record) in records.iter().enumerate() {
        match Certificate::from_value(record) {
            Ok(certificate) => collection.certificates.push(certificate),
            Err(reason) => {
                tracing::warn!(index, %reason, record = %record, "Certificate missing required fields");
                collection.dropped.push(DroppedRecord {
                    index,
                    reason,
                    record: record.clone(),
                });
            }
        }
    }

    collection
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record() {
        let cert = Certificate::from_value(&json!({
            "name": "Google Data Analytics",
            "issuer": "Coursera",
            "date": "2024",
            "type": "Professional",
            "image": "certificates/images/gda.png",
            "pdf": "certificates/pdfs/gda.pdf",
            "skills": ["SQL", "Tableau"]
        }))
        .unwrap();

        assert_eq!(cert.name, "Google Data Analytics");
        assert_eq!(cert.kind.as_deref(), Some("Professional"));
        assert_eq!(cert.skills, vec!["SQL", "Tableau"]);
    }

    #[test]
    fn test_minimal_record() {
        let cert = Certificate::from_value(&json!({"name": "A", "issuer": "X"})).unwrap();
        assert_eq!(cert.date, None);
        assert_eq!(cert.image, None);
        assert!(cert.skills.is_empty());
    }

    #[test]
    fn test_missing_required_fields() {
        assert_eq!(
            Certificate::from_value(&json!({"issuer": "Y"})),
            Err(RecordRejection::MissingName)
        );
        assert_eq!(
            Certificate::from_value(&json!({"name": "A"})),
            Err(RecordRejection::MissingIssuer)
        );
        assert_eq!(
            Certificate::from_value(&json!(["A", "X"])),
            Err(RecordRejection::NotAnObject)
        );
    }

    #[test]
    fn test_empty_and_null_count_as_missing() {
        assert_eq!(
            Certificate::from_value(&json!({"name": "", "issuer": "X"})),
            Err(RecordRejection::MissingName)
        );
        assert_eq!(
            Certificate::from_value(&json!({"name": "A", "issuer": null})),
            Err(RecordRejection::MissingIssuer)
        );

        let cert = Certificate::from_value(&json!({"name": "A", "issuer": "X", "type": ""})).unwrap();
        assert_eq!(cert.kind, None);
    }

    #[test]
    fn test_false_and_zero_count_as_missing() {
        assert_eq!(
            Certificate::from_value(&json!({"name": false, "issuer": "X"})),
            Err(RecordRejection::MissingName)
        );
        assert_eq!(
            Certificate::from_value(&json!({"name": 0, "issuer": "Y"})),
            Err(RecordRejection::MissingName)
        );
        assert_eq!(
            Certificate::from_value(&json!({"name": "A", "issuer": 0.0})),
            Err(RecordRejection::MissingIssuer)
        );

        let records = vec![
            json!({"name": false, "issuer": "X"}),
            json!({"name": 0, "issuer": "Y"}),
            json!({"name": "A", "issuer": "Z"}),
        ];
        let collection = collect(&records);
        assert_eq!(collection.certificates.len(), 1);
        assert_eq!(collection.certificates[0].name, "A");
        assert_eq!(collection.dropped.len(), 2);
    }

    #[test]
    fn test_scalars_are_stringified() {
        let cert = Certificate::from_value(&json!({
            "name": 101,
            "issuer": "X",
            "date": 2023,
            "skills": ["Rust", 7, true, null, {"nested": 1}]
        }))
        .unwrap();

        assert_eq!(cert.name, "101");
        assert_eq!(cert.date.as_deref(), Some("2023"));
        assert_eq!(cert.skills, vec!["Rust", "7", "true"]);
    }

    #[test]
    fn test_parse_document_shapes() {
        assert_eq!(parse_document(r#"{"certificates": []}"#).unwrap(), Some(vec![]));
        assert_eq!(parse_document(r#"{}"#).unwrap(), None);
        assert_eq!(parse_document(r#"{"certificates": {"name": "A"}}"#).unwrap(), None);
        assert!(parse_document("not json").is_err());
    }

    #[test]
    fn test_collect_keeps_order_and_reports_drops() {
        let records = vec![
            json!({"name": "A", "issuer": "X"}),
            json!({"issuer": "Y"}),
            json!({"name": "C", "issuer": "Z"}),
        ];

        let collection = collect(&records);

        let names: Vec<_> = collection.certificates.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(collection.dropped.len(), 1);
        assert_eq!(collection.dropped[0].index, 1);
        assert_eq!(collection.dropped[0].reason, RecordRejection::MissingName);
    }

    #[test]
    fn test_serialize_uses_type_key() {
        let cert = Certificate::from_value(&json!({"name": "A", "issuer": "X", "type": "Course"})).unwrap();
        let value = serde_json::to_value(&cert).unwrap();
        assert_eq!(value["type"], "Course");
        assert!(value.get("image").is_none());
    }
}
