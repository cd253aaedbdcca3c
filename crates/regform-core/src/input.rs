//! Coercion of raw JSON field values into typed inputs.
//!
//! Every coercion is total: anything that cannot be read as the target type
//! becomes [`Input::Malformed`] and is left for the rules to reject.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A coerced field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Input<T> {
    /// Field absent or `null`.
    Missing,
    /// Field present and readable as `T`.
    Present(T),
    /// Field present but of the wrong shape; the raw value is kept for reporting.
    Malformed(Value),
}

impl<T> Input<T> {
    pub fn present(&self) -> Option<&T> {
        match self {
            Input::Present(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Input::Present(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Input::Missing)
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Input::Malformed(_))
    }
}

impl Input<String> {
    /// True when the field holds a non-empty string.
    pub fn has_text(&self) -> bool {
        self.present().is_some_and(|value| !value.is_empty())
    }

    /// True when the field holds exactly `expected`.
    pub fn is(&self, expected: &str) -> bool {
        self.present().is_some_and(|value| value == expected)
    }
}

impl Input<bool> {
    /// True only for an explicit `true`; missing and malformed read as false.
    pub fn is_true(&self) -> bool {
        matches!(self, Input::Present(true))
    }
}

/// Metadata of an uploaded file, as far as the form reports it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// Read a text field. Numbers and booleans are stringified.
pub fn text(raw: Option<&Value>) -> Input<String> {
    match raw {
        None | Some(Value::Null) => Input::Missing,
        Some(Value::String(value)) => Input::Present(value.clone()),
        Some(Value::Number(value)) => Input::Present(value.to_string()),
        Some(Value::Bool(value)) => Input::Present(value.to_string()),
        Some(other) => Input::Malformed(other.clone()),
    }
}

/// Read a finite number. Numeric strings are accepted with whitespace removed.
pub fn number(raw: Option<&Value>) -> Input<f64> {
    match raw {
        None | Some(Value::Null) => Input::Missing,
        Some(Value::Number(value)) => match value.as_f64() {
            Some(parsed) if parsed.is_finite() => Input::Present(parsed),
            _ => Input::Malformed(Value::Number(value.clone())),
        },
        Some(Value::String(value)) => match parse_numeric_str(value) {
            Some(parsed) => Input::Present(parsed),
            None => Input::Malformed(Value::String(value.clone())),
        },
        Some(other) => Input::Malformed(other.clone()),
    }
}

/// Read an integer. Floats are accepted only when they have no fraction.
pub fn integer(raw: Option<&Value>) -> Input<i64> {
    if let Some(Value::Number(value)) = raw
        && let Some(parsed) = value.as_i64()
    {
        return Input::Present(parsed);
    }

    match number(raw) {
        Input::Missing => Input::Missing,
        Input::Present(parsed) if parsed.fract() == 0.0 && fits_i64(parsed) => {
            Input::Present(parsed as i64)
        }
        Input::Present(_) | Input::Malformed(_) => {
            Input::Malformed(raw.cloned().unwrap_or(Value::Null))
        }
    }
}

/// Read a boolean. Accepts `"true"` and `"false"` in any case, `"1"`, `"0"`
/// and the numbers 1 and 0. Strings are not trimmed.
pub fn boolean(raw: Option<&Value>) -> Input<bool> {
    match raw {
        None | Some(Value::Null) => Input::Missing,
        Some(Value::Bool(value)) => Input::Present(*value),
        Some(Value::String(value)) => {
            if value == "1" || value.eq_ignore_ascii_case("true") {
                Input::Present(true)
            } else if value == "0" || value.eq_ignore_ascii_case("false") {
                Input::Present(false)
            } else {
                Input::Malformed(Value::String(value.clone()))
            }
        }
        Some(Value::Number(value)) => match value.as_i64() {
            Some(1) => Input::Present(true),
            Some(0) => Input::Present(false),
            _ => Input::Malformed(Value::Number(value.clone())),
        },
        Some(other) => Input::Malformed(other.clone()),
    }
}

/// Read a list of strings. Scalar elements are stringified; nested arrays,
/// objects and nulls make the whole list malformed.
pub fn text_list(raw: Option<&Value>) -> Input<Vec<String>> {
    match raw {
        None | Some(Value::Null) => Input::Missing,
        Some(Value::Array(items)) => {
            let mut values = Vec::with_capacity(items.len());
            for item in items {
                match text(Some(item)) {
                    Input::Present(value) => values.push(value),
                    Input::Missing | Input::Malformed(_) => {
                        return Input::Malformed(Value::Array(items.clone()));
                    }
                }
            }
            Input::Present(values)
        }
        Some(other) => Input::Malformed(other.clone()),
    }
}

/// Like [`text_list`], but a raw empty string normalizes to an empty list.
///
/// Multi-select controls submit `""` when nothing was ever picked.
pub fn text_list_or_blank(raw: Option<&Value>) -> Input<Vec<String>> {
    match raw {
        Some(Value::String(value)) if value.is_empty() => Input::Present(Vec::new()),
        other => text_list(other),
    }
}

/// Read a file reference. Any non-null value counts as a supplied file.
pub fn file(raw: Option<&Value>) -> Input<FileRef> {
    match raw {
        None | Some(Value::Null) => Input::Missing,
        Some(Value::String(name)) => Input::Present(FileRef {
            name: Some(name.clone()),
            ..FileRef::default()
        }),
        Some(value @ Value::Object(_)) => {
            Input::Present(serde_json::from_value(value.clone()).unwrap_or_default())
        }
        Some(_) => Input::Present(FileRef::default()),
    }
}

fn parse_numeric_str(value: &str) -> Option<f64> {
    let compact: String = value.chars().filter(|ch| !ch.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }
    let valid_chars = compact
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E'));
    if !valid_chars {
        return None;
    }
    compact.parse::<f64>().ok().filter(|parsed| parsed.is_finite())
}

fn fits_i64(value: f64) -> bool {
    value >= i64::MIN as f64 && value <= i64::MAX as f64
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn text_stringifies_scalars_and_rejects_containers() {
        assert_eq!(text(None), Input::Missing);
        assert_eq!(text(Some(&Value::Null)), Input::Missing);
        assert_eq!(text(Some(&json!(42))), Input::Present("42".to_string()));
        assert_eq!(text(Some(&json!(true))), Input::Present("true".to_string()));
        assert!(text(Some(&json!(["a"]))).is_malformed());
        assert!(text(Some(&json!({"a": 1}))).is_malformed());
    }

    #[test]
    fn numbers_accept_numeric_strings_only() {
        assert_eq!(number(Some(&json!(" 12 "))), Input::Present(12.0));
        assert_eq!(number(Some(&json!("1 000"))), Input::Present(1000.0));
        assert_eq!(number(Some(&json!(3.5))), Input::Present(3.5));
        assert!(number(Some(&json!(""))).is_malformed());
        assert!(number(Some(&json!("twelve"))).is_malformed());
        assert!(number(Some(&json!("NaN"))).is_malformed());
        assert!(number(Some(&json!("inf"))).is_malformed());
        assert!(number(Some(&json!(false))).is_malformed());
    }

    #[test]
    fn integers_reject_fractions() {
        assert_eq!(integer(Some(&json!(2019))), Input::Present(2019));
        assert_eq!(integer(Some(&json!(2019.0))), Input::Present(2019));
        assert_eq!(integer(Some(&json!("44"))), Input::Present(44));
        assert_eq!(integer(Some(&json!(2019.5))), Input::Malformed(json!(2019.5)));
        assert_eq!(integer(Some(&json!(""))), Input::Malformed(json!("")));
        assert_eq!(integer(None), Input::Missing);
    }

    #[test]
    fn booleans_accept_form_encodings() {
        assert_eq!(boolean(Some(&json!("true"))), Input::Present(true));
        assert_eq!(boolean(Some(&json!("0"))), Input::Present(false));
        assert_eq!(boolean(Some(&json!(1))), Input::Present(true));
        assert_eq!(boolean(Some(&json!("True"))), Input::Present(true));
        assert_eq!(boolean(Some(&json!("FALSE"))), Input::Present(false));
        assert!(boolean(Some(&json!(" true"))).is_malformed());
        assert!(boolean(Some(&json!("0 "))).is_malformed());
        assert!(boolean(Some(&json!("yes"))).is_malformed());
        assert!(boolean(Some(&json!(2))).is_malformed());
        assert!(boolean(Some(&Value::Null)).is_missing());
    }

    #[test]
    fn blank_string_becomes_empty_list() {
        assert_eq!(text_list_or_blank(Some(&json!(""))), Input::Present(Vec::new()));
        assert!(text_list(Some(&json!(""))).is_malformed());
        assert!(text_list_or_blank(Some(&json!("rust"))).is_malformed());
        assert_eq!(
            text_list(Some(&json!(["Cairo", 3]))),
            Input::Present(vec!["Cairo".to_string(), "3".to_string()])
        );
        assert!(text_list(Some(&json!(["Cairo", null]))).is_malformed());
    }

    #[test]
    fn any_non_null_value_is_a_file() {
        let decoded = file(Some(&json!({"name": "me.png", "size": 2048, "contentType": "image/png"})));
        assert_eq!(
            decoded,
            Input::Present(FileRef {
                name: Some("me.png".to_string()),
                size: Some(2048),
                content_type: Some("image/png".to_string()),
            })
        );
        assert_eq!(
            file(Some(&json!({"name": 7}))),
            Input::Present(FileRef::default())
        );
        assert!(file(Some(&json!("photo.jpg"))).is_present());
        assert!(file(Some(&Value::Null)).is_missing());
    }
}
