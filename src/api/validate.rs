use std::collections::BTreeMap;

use rust_decimal::Decimal;

/// Field-level checks on an incoming DTO, run before any service call.
pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

/// Collected per-field messages keyed by the JSON field name. The first
/// failure recorded for a field wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn required(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, "This field is required");
        }
    }

    pub fn present<T>(&mut self, field: &str, value: &Option<T>) {
        if value.is_none() {
            self.add(field, "This field is required");
        }
    }

    pub fn max_len(&mut self, field: &str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.add(field, format!("Must be at most {} characters", max));
        }
    }

    pub fn email(&mut self, field: &str, value: &str) {
        if !looks_like_email(value) {
            self.add(field, "Must be a valid email address");
        }
    }

    pub fn absolute_url(&mut self, field: &str, value: &str) {
        if url::Url::parse(value).is_err() {
            self.add(field, "Must be an absolute URL");
        }
    }

    pub fn non_negative(&mut self, field: &str, value: Option<i32>) {
        if value.is_some_and(|v| v < 0) {
            self.add(field, "Must not be negative");
        }
    }

    /// Bound for NUMERIC(5, 2) columns.
    pub fn decimal_5_2(&mut self, field: &str, value: Option<Decimal>) {
        if value.is_some_and(|v| v.abs() >= Decimal::ONE_THOUSAND) {
            self.add(field, "Must be between -999.99 and 999.99");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.errors
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("alice@example.com"));
        assert!(!looks_like_email("alice"));
        assert!(!looks_like_email("alice@localhost"));
        assert!(!looks_like_email("a b@example.com"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("a@@example.com"));
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let mut errors = FieldErrors::default();
        errors.required("email", "");
        errors.email("email", "");
        assert_eq!(errors.get("email"), Some("This field is required"));
    }

    #[test]
    fn test_lengths_count_characters() {
        let mut errors = FieldErrors::default();
        errors.max_len("name", "ñandú", 5);
        assert!(errors.is_empty());
        errors.max_len("name", "ñandúes", 5);
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_numeric_bounds() {
        let mut errors = FieldErrors::default();
        errors.decimal_5_2("lengthInInches", Some(Decimal::new(99999, 2)));
        errors.non_negative("mainLineTestInPounds", Some(0));
        assert!(errors.is_empty());

        errors.decimal_5_2("lengthInInches", Some(Decimal::from(1000)));
        errors.non_negative("mainLineTestInPounds", Some(-1));
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_relative_url_rejected() {
        let mut errors = FieldErrors::default();
        errors.absolute_url("videoUrl", "/videos/1");
        assert!(errors.get("videoUrl").is_some());
    }
}
