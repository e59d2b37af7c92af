use serde::{Deserialize, Deserializer};

/// One field of a partial update. Absent fields stay `Unchanged` (via
/// `#[serde(default)]` on the containing struct), explicit `null` is `Clear`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Unchanged,
    Clear,
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unchanged
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        })
    }
}

impl<T> Patch<T> {
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Patch::Set(value) => Some(value),
            _ => None,
        }
    }

    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            Patch::Unchanged => {}
            Patch::Clear => *target = None,
            Patch::Set(value) => *target = Some(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Update {
        notes: Patch<String>,
        wind_speed: Patch<i32>,
        trip_date: Patch<chrono::NaiveDate>,
    }

    #[test]
    fn test_absent_null_and_value_are_distinct() {
        let update: Update =
            serde_json::from_str(r#"{"notes": "Slow tide", "windSpeed": null}"#).unwrap();
        assert_eq!(update.notes, Patch::Set("Slow tide".to_string()));
        assert_eq!(update.wind_speed, Patch::Clear);
        assert_eq!(update.trip_date, Patch::Unchanged);
    }

    #[test]
    fn test_apply_to() {
        let mut notes = Some("before".to_string());
        Patch::Unchanged.apply_to(&mut notes);
        assert_eq!(notes.as_deref(), Some("before"));

        Patch::Set("after".to_string()).apply_to(&mut notes);
        assert_eq!(notes.as_deref(), Some("after"));

        Patch::Clear.apply_to(&mut notes);
        assert_eq!(notes, None);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(serde_json::from_str::<Update>(r#"{"windSpeed": "strong"}"#).is_err());
    }
}
