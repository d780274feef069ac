use std::collections::BTreeSet;

use serde_json::{json, Value};

use crate::{Experience, WorkMode};

pub const DEFAULT_MIN_MATCH_SCORE: u8 = 40;
pub const MAX_MATCH_SCORE: u8 = 100;

/// User-entered matching criteria.
///
/// Keyword and skill fields are kept as the raw comma-separated text the user
/// typed and parsed on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub role_keywords: String,
    pub preferred_locations: BTreeSet<String>,
    pub preferred_modes: BTreeSet<WorkMode>,
    pub experience_level: Option<Experience>,
    pub skills: String,
    pub min_match_score: u8,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            role_keywords: String::new(),
            preferred_locations: BTreeSet::new(),
            preferred_modes: BTreeSet::new(),
            experience_level: None,
            skills: String::new(),
            min_match_score: DEFAULT_MIN_MATCH_SCORE,
        }
    }
}

impl Preferences {
    /// Decodes a persisted payload field by field.
    ///
    /// Each field that is missing or has the wrong shape falls back to its
    /// default independently; unknown fields are ignored.
    pub fn from_json(value: &Value) -> Self {
        let defaults = Self::default();
        let Some(object) = value.as_object() else {
            return defaults;
        };

        let role_keywords = object
            .get("roleKeywords")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned)
            .unwrap_or(defaults.role_keywords);

        let preferred_locations = object
            .get("preferredLocations")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(ToOwned::to_owned)
                    .collect()
            })
            .unwrap_or(defaults.preferred_locations);

        let preferred_modes = object
            .get("preferredModes")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .filter_map(WorkMode::parse)
                    .collect()
            })
            .unwrap_or(defaults.preferred_modes);

        let experience_level = object
            .get("experienceLevel")
            .and_then(Value::as_str)
            .and_then(Experience::parse);

        let skills = object
            .get("skills")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned)
            .unwrap_or(defaults.skills);

        let min_match_score = object
            .get("minMatchScore")
            .and_then(decode_score)
            .unwrap_or(defaults.min_match_score);

        Self {
            role_keywords,
            preferred_locations,
            preferred_modes,
            experience_level,
            skills,
            min_match_score,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "roleKeywords": self.role_keywords,
            "preferredLocations": self.preferred_locations,
            "preferredModes": self
                .preferred_modes
                .iter()
                .map(|mode| mode.label())
                .collect::<Vec<_>>(),
            "experienceLevel": self.experience_level.map(Experience::label),
            "skills": self.skills,
            "minMatchScore": self.min_match_score,
        })
    }

    /// True once any matching dimension has been configured.
    pub fn is_active(&self) -> bool {
        !self.role_keywords().is_empty()
            || !self.preferred_locations.is_empty()
            || !self.preferred_modes.is_empty()
            || self.experience_level.is_some()
            || !self.skill_tokens().is_empty()
    }

    /// Lower-cased, trimmed, non-empty role keywords.
    pub fn role_keywords(&self) -> Vec<String> {
        parse_list(&self.role_keywords)
    }

    /// Lower-cased, trimmed, non-empty skill tokens.
    pub fn skill_tokens(&self) -> Vec<String> {
        parse_list(&self.skills)
    }

    /// Sets the threshold from control input, clamped into 0..=100.
    pub fn set_min_match_score(&mut self, value: i64) {
        self.min_match_score = value.clamp(0, i64::from(MAX_MATCH_SCORE)) as u8;
    }
}

/// Splits comma-separated text into lower-cased, trimmed, non-empty tokens.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn decode_score(value: &Value) -> Option<u8> {
    let raw = match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f.round() as i64))?,
        Value::String(text) => text.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    Some(raw.clamp(0, i64::from(MAX_MATCH_SCORE)) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_payload_yields_defaults() {
        assert_eq!(Preferences::from_json(&Value::Null), Preferences::default());
        assert_eq!(Preferences::from_json(&json!([1, 2])), Preferences::default());
        assert_eq!(Preferences::default().min_match_score, 40);
    }

    #[test]
    fn wrong_shaped_fields_default_independently() {
        let payload = json!({
            "roleKeywords": 42,
            "preferredLocations": ["Pune", 7, "Remote"],
            "preferredModes": "Remote",
            "experienceLevel": "10+",
            "skills": "rust, sql",
            "minMatchScore": "250",
            "futureField": true
        });
        let prefs = Preferences::from_json(&payload);

        assert_eq!(prefs.role_keywords, "");
        assert_eq!(
            prefs.preferred_locations,
            BTreeSet::from(["Pune".to_string(), "Remote".to_string()])
        );
        assert!(prefs.preferred_modes.is_empty());
        assert_eq!(prefs.experience_level, None);
        assert_eq!(prefs.skills, "rust, sql");
        assert_eq!(prefs.min_match_score, 100);
    }

    #[test]
    fn json_round_trip_preserves_every_field() {
        let prefs = Preferences {
            role_keywords: "Rust, Backend".to_string(),
            preferred_locations: BTreeSet::from(["Bangalore".to_string()]),
            preferred_modes: BTreeSet::from([WorkMode::Remote, WorkMode::Hybrid]),
            experience_level: Some(Experience::UpToOne),
            skills: "tokio".to_string(),
            min_match_score: 65,
        };
        assert_eq!(Preferences::from_json(&prefs.to_json()), prefs);
    }

    #[test]
    fn activity_requires_a_real_dimension() {
        let mut prefs = Preferences::default();
        assert!(!prefs.is_active());

        prefs.role_keywords = " , ,".to_string();
        assert!(!prefs.is_active());

        prefs.min_match_score = 10;
        assert!(!prefs.is_active());

        prefs.experience_level = Some(Experience::Fresher);
        assert!(prefs.is_active());
    }

    #[test]
    fn parse_list_lowercases_and_drops_blanks() {
        assert_eq!(
            parse_list(" React Developer,, Node ,"),
            vec!["react developer".to_string(), "node".to_string()]
        );
    }
}
