//! # Request Extraction & Coercion
//!
//! Turns raw JSON and form bodies into [`NewRecord`]s. Both entry points
//! report the first missing field in the order `name`, `age`, `land`, `uid`.
//!
//! A JSON body that is empty (`{}`, `[]`, `null`, `""`, `0`, `false`) is
//! "No JSON data provided". Any other non-object body has none of the
//! required keys, so it reports `name` as missing.
//!
//! JSON clients historically sent `uid` and `age` either as numbers or as
//! strings, so both shapes are accepted: `uid` is kept as its decimal
//! string, `age` must be integer-valued.

use axum::extract::rejection::{FormRejection, JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::{Form, Json};
use landchain_core::{NewRecord, ValidationError};
use serde::Deserialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::error::AppError;

/// Field order used when reporting the first missing field.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "age", "land", "uid"];

/// Form body of `POST /add_record`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AddRecordForm {
    pub name: Option<String>,
    pub age: Option<String>,
    pub land: Option<String>,
    pub uid: Option<String>,
}

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`].
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Extract a query string, mapping deserialization errors to [`AppError::BadRequest`].
pub fn extract_query<T>(result: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    result
        .map(|Query(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Extract a JSON object and build a [`NewRecord`] from it.
pub fn extract_record_json(
    result: Result<Json<Value>, JsonRejection>,
) -> Result<NewRecord, AppError> {
    let body = extract_json(result)?;
    if is_empty_body(&body) {
        return Err(AppError::Validation("No JSON data provided".into()));
    }
    match body {
        Value::Object(map) => record_from_json(&map),
        _ => Err(AppError::missing_field(REQUIRED_FIELDS[0])),
    }
}

fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Build a [`NewRecord`] from a JSON object.
pub fn record_from_json(object: &Map<String, Value>) -> Result<NewRecord, AppError> {
    if let Some(missing) = REQUIRED_FIELDS.iter().find(|f| !object.contains_key(**f)) {
        return Err(AppError::missing_field(missing));
    }

    let name = json_text(object, "name")?;
    let age = json_age(&object["age"])?;
    let land = json_text(object, "land")?;
    let uid = json_uid(&object["uid"])?;

    let record = NewRecord::new(name, uid, age, land);
    record.validate()?;
    Ok(record)
}

/// Extract a form body and build a [`NewRecord`] from it.
///
/// Absent and empty fields are both rejected.
pub fn extract_record_form(
    result: Result<Form<AddRecordForm>, FormRejection>,
) -> Result<NewRecord, AppError> {
    let Form(form) = result.map_err(|err| AppError::BadRequest(err.body_text()))?;

    let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
    let fields = [&form.name, &form.age, &form.land, &form.uid];
    if let Some(i) = fields.iter().position(|v| !present(*v)) {
        return Err(AppError::Validation(format!(
            "All fields are required! Missing: {}",
            REQUIRED_FIELDS[i]
        )));
    }

    let age = parse_age(form.age.as_deref().unwrap_or_default())?;
    Ok(NewRecord::new(
        form.name.unwrap_or_default(),
        form.uid.unwrap_or_default(),
        age,
        form.land.unwrap_or_default(),
    ))
}

fn json_text(object: &Map<String, Value>, field: &'static str) -> Result<String, AppError> {
    match &object[field] {
        Value::String(s) => Ok(s.clone()),
        other => Err(invalid(field, format!("expected a string, got {other}"))),
    }
}

fn json_uid(value: &Value) -> Result<String, AppError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        other => Err(invalid("uid", format!("expected a string or integer, got {other}"))),
    }
}

fn json_age(value: &Value) -> Result<i64, AppError> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| invalid("age", format!("expected an integer, got {n}"))),
        Value::String(s) if s.is_empty() => Err(AppError::missing_field("age")),
        Value::String(s) => parse_age(s),
        other => Err(invalid("age", format!("expected an integer, got {other}"))),
    }
}

fn parse_age(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| invalid("age", format!("expected an integer, got {raw:?}")))
}

fn invalid(field: &'static str, reason: String) -> AppError {
    ValidationError::InvalidField { field, reason }.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().unwrap().clone()
    }

    #[test]
    fn full_object_builds_record() {
        let r = record_from_json(&obj(json!({
            "name": "Jane Smith", "age": 42, "land": "Parcel #456", "uid": "UID002"
        })))
        .unwrap();
        assert_eq!(r, NewRecord::new("Jane Smith", "UID002", 42, "Parcel #456"));
    }

    #[test]
    fn missing_fields_reported_in_form_order() {
        let err = record_from_json(&obj(json!({"uid": "u", "land": "l"}))).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: name");

        let err = record_from_json(&obj(json!({"name": "n", "uid": "u", "land": "l"})))
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: age");

        let err = record_from_json(&obj(json!({"name": "n", "age": 1, "land": "l"})))
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: uid");
    }

    #[test]
    fn numeric_uid_and_string_age_are_coerced() {
        let r = record_from_json(&obj(json!({
            "name": "n", "age": " 35 ", "land": "l", "uid": 1001
        })))
        .unwrap();
        assert_eq!(r.uid, "1001");
        assert_eq!(r.age, 35);
    }

    #[test]
    fn non_integer_age_is_rejected() {
        for age in [json!(3.5), json!("old"), json!(null), json!([1])] {
            let err = record_from_json(&obj(json!({
                "name": "n", "age": age, "land": "l", "uid": "u"
            })))
            .unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{err:?}");
        }
    }

    #[test]
    fn empty_strings_are_rejected_by_core_validation() {
        let err = record_from_json(&obj(json!({
            "name": "n", "age": 1, "land": "", "uid": "u"
        })))
        .unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: land");
    }

    #[test]
    fn empty_bodies_report_no_data() {
        for body in [json!({}), json!([]), json!(null), json!(""), json!(0), json!(false)] {
            let err = extract_record_json(Ok(Json(body.clone()))).unwrap_err();
            assert_eq!(err.to_string(), "No JSON data provided", "{body}");
        }
    }

    #[test]
    fn non_object_bodies_report_missing_name() {
        for body in [json!([{"name": "n"}]), json!("text"), json!(12), json!(true)] {
            let err = extract_record_json(Ok(Json(body.clone()))).unwrap_err();
            assert_eq!(err.to_string(), "Missing required field: name", "{body}");
        }
    }

    #[test]
    fn form_requires_every_field() {
        let form = AddRecordForm {
            name: Some("n".into()),
            age: Some("".into()),
            land: Some("l".into()),
            uid: Some("u".into()),
        };
        let err = extract_record_form(Ok(Form(form))).unwrap_err();
        assert!(err.to_string().contains("age"));

        let err = extract_record_form(Ok(Form(AddRecordForm::default()))).unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn form_parses_age() {
        let form = AddRecordForm {
            name: Some("n".into()),
            age: Some("27".into()),
            land: Some("l".into()),
            uid: Some("u".into()),
        };
        let r = extract_record_form(Ok(Form(form))).unwrap();
        assert_eq!(r.age, 27);
    }
}
