use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Rain,
    ExtremeHeat,
    /// Conditions the engine has no rule for (sunny, cloudy, ...) land here.
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FatigueLevel {
    Low,
    Medium,
    High,
}

/// A discrete external condition change, fed to the engine one at a time.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AdjustmentEvent {
    Weather { condition: WeatherCondition },
    Traffic { delay_minutes: u32 },
    Fatigue { level: FatigueLevel },
}

/// At most one outstanding record per adjustment kind. Recording a new event
/// of a kind overwrites the previous record; this is an accumulator for the
/// "adjustments applied" banner, not a log.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppliedAdjustments {
    #[serde(default)]
    pub weather: Option<WeatherCondition>,
    #[serde(default)]
    pub traffic: Option<u32>,
    #[serde(default)]
    pub fatigue: Option<FatigueLevel>,
}

impl AppliedAdjustments {
    pub fn any_applied(&self) -> bool {
        self.weather.is_some() || self.traffic.is_some() || self.fatigue.is_some()
    }
}
