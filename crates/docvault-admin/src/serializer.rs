//! JSON-safe File responses.
//!
//! `sizeBytes` may exceed the integer range a JavaScript host can represent
//! exactly, so list and show responses carry it as a decimal string.

use serde_json::{Map, Value};

/// Record parameter holding the file size.
pub const SIZE_BYTES_PARAM: &str = "sizeBytes";

/// Convert `params.sizeBytes` of a record into its decimal string.
///
/// Returns a copy of `record`. A `null` size is dropped from `params`, the
/// way an undefined field disappears from host JSON. Strings, absent values
/// and other non-numbers are left untouched, so the conversion is idempotent.
pub fn serialize_one(record: &Value) -> Value {
    let Some(fields) = record.as_object() else {
        return record.clone();
    };
    let Some(Value::Object(params)) = fields.get("params") else {
        return record.clone();
    };

    let mut record = fields.clone();
    record.insert("params".to_string(), Value::Object(serialize_params(params)));
    Value::Object(record)
}

/// Apply [`serialize_one`] to every entry of `records` in a list response.
pub fn serialize_list(response: &Value) -> Value {
    let Some(fields) = response.as_object() else {
        return response.clone();
    };
    let Some(Value::Array(records)) = fields.get("records") else {
        return response.clone();
    };

    let mut response = fields.clone();
    response.insert(
        "records".to_string(),
        Value::Array(records.iter().map(serialize_one).collect()),
    );
    Value::Object(response)
}

/// Apply [`serialize_one`] to the `record` of a show response.
pub fn serialize_show(response: &Value) -> Value {
    let Some(fields) = response.as_object() else {
        return response.clone();
    };
    let Some(record) = fields.get("record") else {
        return response.clone();
    };

    let mut response = fields.clone();
    response.insert("record".to_string(), serialize_one(record));
    Value::Object(response)
}

fn serialize_params(params: &Map<String, Value>) -> Map<String, Value> {
    let mut params = params.clone();
    match params.get(SIZE_BYTES_PARAM) {
        Some(Value::Number(n)) => {
            let digits = n.to_string();
            params.insert(SIZE_BYTES_PARAM.to_string(), Value::String(digits));
        }
        Some(Value::Null) => {
            params.remove(SIZE_BYTES_PARAM);
        }
        _ => {}
    }
    params
}
