//! Shared helpers for binding HTML-form fields.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Deserialize an optional form field, treating an empty or blank string
/// as absent.
///
/// Browsers submit every input in the form, so "no value" arrives as `""`
/// rather than a missing key. Combine with `#[serde(default)]` so a
/// genuinely missing key also maps to `None`.
pub fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct TestForm {
        #[serde(default, deserialize_with = "super::empty_string_as_none")]
        date_of_birth: Option<NaiveDate>,
        #[serde(default, deserialize_with = "super::empty_string_as_none")]
        species: Option<String>,
    }

    #[test]
    fn test_empty_string_is_none() {
        let form: TestForm =
            serde_json::from_str(r#"{"date_of_birth": "", "species": "  "}"#).unwrap();
        assert!(form.date_of_birth.is_none());
        assert!(form.species.is_none());
    }

    #[test]
    fn test_missing_field_is_none() {
        let form: TestForm = serde_json::from_str("{}").unwrap();
        assert!(form.date_of_birth.is_none());
        assert!(form.species.is_none());
    }

    #[test]
    fn test_value_is_parsed() {
        let form: TestForm =
            serde_json::from_str(r#"{"date_of_birth": "2020-04-01", "species": "dog"}"#).unwrap();
        assert_eq!(
            form.date_of_birth,
            Some(NaiveDate::from_ymd_opt(2020, 4, 1).unwrap())
        );
        assert_eq!(form.species.as_deref(), Some("dog"));
    }

    #[test]
    fn test_unparseable_value_errors() {
        let result = serde_json::from_str::<TestForm>(r#"{"date_of_birth": "not-a-date"}"#);
        assert!(result.is_err());
    }
}
