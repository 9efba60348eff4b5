use crate::query::QueryError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One named metadata record from the `commonmetadata` block of an
/// `imageinfo` response. These are embedded-file fields (Exif and friends)
/// as the service reports them.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MetadataField {
    pub name: String,
    pub value: String,
}

fn parse_field(record: &Value) -> Option<MetadataField> {
    let name = record.get("name")?.as_str()?.to_owned();
    // The service mixes string and numeric values; non-strings keep their
    // JSON literal form.
    let value = match record.get("value")? {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    Some(MetadataField { name, value })
}

/// Extracts the `commonmetadata` record list from a page object.
///
/// A page without `imageinfo` or `commonmetadata` is a structural error,
/// not an empty list.
pub(crate) fn common_metadata(page: &Value) -> Result<Vec<MetadataField>, QueryError> {
    let records = page
        .get("imageinfo")
        .and_then(|info| info.get(0))
        .ok_or(QueryError::MissingField("imageinfo"))?
        .get("commonmetadata")
        .and_then(Value::as_array)
        .ok_or(QueryError::MissingField("commonmetadata"))?;

    Ok(records.iter().filter_map(parse_field).collect())
}

/// First-match lookup by field name; later records sharing the same name are
/// ignored.
pub fn field_value<'a>(fields: &'a [MetadataField], name: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|field| field.name == name)
        .map(|field| field.value.as_str())
}

pub(crate) fn field_message(
    fields: &[MetadataField],
    name: &str,
    prefix: &str,
    label: &str,
) -> String {
    match field_value(fields, name) {
        Some(value) => format!("{prefix}: {value}"),
        None => format!("{prefix}: *{label} Unavailable.*"),
    }
}
