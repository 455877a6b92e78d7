use serde::{Deserialize, Serialize};

/// Raw answers collected by the questionnaire and vibe-selection steps.
/// Only destination, duration, budget and vibe feed the engine; the other
/// fields are accepted so a full questionnaire payload deserializes cleanly.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RawPreferences {
    pub destination: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub vibe: Option<VibeSelection>,
    #[serde(default)]
    pub pace: Option<u8>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub travel_style: Option<String>,
    #[serde(default)]
    pub accommodation_type: Option<String>,
}

/// The vibe step submits either a single tag or an ordered list of tags.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(untagged)]
pub enum VibeSelection {
    One(String),
    Many(Vec<String>),
}

impl VibeSelection {
    pub fn tags(&self) -> Vec<String> {
        match self {
            VibeSelection::One(tag) => vec![tag.clone()],
            VibeSelection::Many(tags) => tags.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Budget,
    Mid,
    Luxury,
    Premium,
}

impl BudgetTier {
    /// Per-day spend in currency-agnostic units.
    pub fn per_day_spend(&self) -> u32 {
        match self {
            BudgetTier::Budget => 50,
            BudgetTier::Mid => 100,
            BudgetTier::Luxury => 200,
            BudgetTier::Premium => 400,
        }
    }

    /// Unknown labels degrade to the mid tier.
    pub fn from_label(label: &str) -> Self {
        match label {
            "budget" => BudgetTier::Budget,
            "mid" => BudgetTier::Mid,
            "luxury" => BudgetTier::Luxury,
            "premium" => BudgetTier::Premium,
            _ => BudgetTier::Mid,
        }
    }
}

/// Canonical trip preferences. Produced once per planning session by the
/// preference service and read-only afterwards.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TripPreferences {
    pub destination: String,
    pub duration_days: u32,
    pub budget_tier: BudgetTier,
    pub vibes: Vec<String>,
}
