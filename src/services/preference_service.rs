use std::fmt;

use regex::Regex;
use uuid::Uuid;

use crate::models::preferences::{BudgetTier, RawPreferences, TripPreferences};
use crate::services::catalog::ActivityCatalog;

const DEFAULT_DURATION_DAYS: u32 = 3;

/// Normalization failure, carrying the offending field name so the caller
/// can point the traveler back at the right questionnaire step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPreferences {
    pub field: &'static str,
    message: String,
}

impl InvalidPreferences {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for InvalidPreferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for InvalidPreferences {}

pub struct PreferenceService;

impl PreferenceService {
    /// Validate and canonicalize raw questionnaire answers into the
    /// preferences the generator requires. Pure; no side effects.
    pub fn normalize(raw: &RawPreferences) -> Result<TripPreferences, InvalidPreferences> {
        let destination = raw.destination.trim();
        if destination.is_empty() {
            return Err(InvalidPreferences::new(
                "destination",
                "destination must not be empty",
            ));
        }

        let duration_days = Self::parse_duration_days(raw.duration.as_deref());

        let budget_tier = raw
            .budget
            .as_deref()
            .map(BudgetTier::from_label)
            .unwrap_or(BudgetTier::Mid);

        let selected = raw
            .vibe
            .as_ref()
            .map(|selection| selection.tags())
            .unwrap_or_default();
        if selected.iter().all(|tag| tag.trim().is_empty()) {
            return Err(InvalidPreferences::new(
                "vibe",
                "at least one vibe must be selected",
            ));
        }

        let mut vibes = Vec::with_capacity(selected.len());
        for tag in selected {
            let tag = tag.trim();
            if tag.is_empty() {
                continue;
            }
            let tag = Self::canonical_vibe_tag(tag);
            if !vibes.contains(&tag) {
                vibes.push(tag);
            }
        }

        Ok(TripPreferences {
            destination: destination.to_string(),
            duration_days,
            budget_tier,
            vibes,
        })
    }

    /// A duration range label ("3-5") yields its lower bound; anything
    /// without a leading integer yields the default of 3 days.
    fn parse_duration_days(token: Option<&str>) -> u32 {
        let Some(token) = token else {
            return DEFAULT_DURATION_DAYS;
        };

        let leading_int = Regex::new(r"^\s*(\d+)").unwrap();
        leading_int
            .captures(token)
            .and_then(|caps| caps[1].parse::<u32>().ok())
            .filter(|days| *days > 0)
            .unwrap_or(DEFAULT_DURATION_DAYS)
    }

    /// Known tags pass through; free-text custom vibes get a synthetic tag
    /// the catalog will treat as unrecognized.
    fn canonical_vibe_tag(tag: &str) -> String {
        if ActivityCatalog::is_known_vibe(tag) || tag.starts_with("custom-") {
            tag.to_string()
        } else {
            format!("custom-{}", Uuid::new_v4())
        }
    }
}
