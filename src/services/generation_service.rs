use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::itinerary::{DayPlan, DaySlot, Itinerary, ScheduledActivity};
use crate::models::preferences::TripPreferences;
use crate::services::catalog::ActivityCatalog;

const MORNING_COST_RANGE: (u32, u32) = (10, 59);
const AFTERNOON_COST_RANGE: (u32, u32) = (20, 99);
const EVENING_COST_RANGE: (u32, u32) = (30, 129);

#[derive(Clone)]
pub struct GenerationConfig {
    pub morning_cost_range: (u32, u32),
    pub afternoon_cost_range: (u32, u32),
    pub evening_cost_range: (u32, u32),
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            morning_cost_range: MORNING_COST_RANGE,
            afternoon_cost_range: AFTERNOON_COST_RANGE,
            evening_cost_range: EVENING_COST_RANGE,
        }
    }
}

/// Defensive failure: the normalizer never emits a non-positive day count,
/// but the generator refuses one rather than building an empty itinerary.
#[derive(Debug, Clone)]
pub struct GenerationError {
    message: String,
}

impl GenerationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "itinerary generation failed: {}", self.message)
    }
}

impl std::error::Error for GenerationError {}

/// Builds a day-by-day schedule from normalized preferences. Structure is
/// deterministic; flavor fields (theme pick, costs, districts) come from the
/// injected randomness source so tests can seed it.
pub struct ItineraryGenerator<R: Rng> {
    rng: R,
    config: GenerationConfig,
}

impl ItineraryGenerator<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for ItineraryGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ItineraryGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            config: GenerationConfig::default(),
        }
    }

    pub fn with_config(rng: R, config: GenerationConfig) -> Self {
        Self { rng, config }
    }

    /// Generate a complete itinerary: one themed day per duration day, three
    /// timed activities per day, plus tips and alternatives.
    pub fn generate(&mut self, prefs: &TripPreferences) -> Result<Itinerary, GenerationError> {
        if prefs.duration_days == 0 {
            return Err(GenerationError::new("duration must be at least one day"));
        }

        let total_budget = prefs.budget_tier.per_day_spend() * prefs.duration_days;

        let mut days = Vec::with_capacity(prefs.duration_days as usize);
        for day in 1..=prefs.duration_days {
            days.push(self.build_day(day, prefs));
        }

        Ok(Itinerary {
            destination: prefs.destination.clone(),
            duration: format!("{} days", prefs.duration_days),
            total_budget,
            vibe: prefs.vibes.clone(),
            days,
        })
    }

    fn build_day(&mut self, day: u32, prefs: &TripPreferences) -> DayPlan {
        // A single-tag vibe set makes every day carry that tag.
        let theme = prefs
            .vibes
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| ActivityCatalog::FALLBACK_VIBE.to_string());

        let archetypes = ActivityCatalog::archetypes(&theme);

        let morning = self.build_activity(DaySlot::Morning, archetypes.first(), prefs);
        let afternoon = self.build_activity(DaySlot::Afternoon, archetypes.get(1), prefs);
        let evening = self.build_activity(DaySlot::Evening, archetypes.get(2), prefs);

        let tips = ActivityCatalog::tips(&theme)
            .iter()
            .map(|tip| tip.to_string())
            .collect();

        let alternatives = archetypes
            .iter()
            .take(2)
            .map(|archetype| format!("Alternative {}", archetype))
            .collect();

        DayPlan {
            day,
            theme,
            morning,
            afternoon,
            evening,
            tips,
            alternatives,
        }
    }

    fn build_activity(
        &mut self,
        slot: DaySlot,
        archetype: Option<&&'static str>,
        prefs: &TripPreferences,
    ) -> ScheduledActivity {
        let (min_cost, max_cost) = match slot {
            DaySlot::Morning => self.config.morning_cost_range,
            DaySlot::Afternoon => self.config.afternoon_cost_range,
            DaySlot::Evening => self.config.evening_cost_range,
        };

        let district = ActivityCatalog::district_suffixes()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("Downtown");

        ScheduledActivity {
            time: slot.nominal_start(),
            activity: archetype
                .map(|a| a.to_string())
                .unwrap_or_else(|| ActivityCatalog::slot_fallback_label(slot).to_string()),
            location: format!("{} {}", prefs.destination, district),
            duration: ActivityCatalog::slot_duration_label(slot).to_string(),
            cost: self.rng.gen_range(min_cost..=max_cost),
            description: ActivityCatalog::slot_description(slot).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::preferences::BudgetTier;

    fn prefs(destination: &str, days: u32, tier: BudgetTier, vibes: &[&str]) -> TripPreferences {
        TripPreferences {
            destination: destination.to_string(),
            duration_days: days,
            budget_tier: tier,
            vibes: vibes.iter().map(|v| v.to_string()).collect(),
        }
    }

    fn seeded() -> ItineraryGenerator<StdRng> {
        ItineraryGenerator::with_rng(StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_day_count_and_budget_match_preferences() {
        let prefs = prefs(
            "Paris",
            4,
            BudgetTier::Luxury,
            &["chill-scenic", "culture-vulture"],
        );
        let itinerary = seeded().generate(&prefs).unwrap();

        assert_eq!(itinerary.days.len(), 4);
        assert_eq!(itinerary.total_budget, 200 * 4);
        assert_eq!(itinerary.duration, "4 days");
        assert_eq!(itinerary.destination, "Paris");
        for (index, day) in itinerary.days.iter().enumerate() {
            assert_eq!(day.day, index as u32 + 1);
            assert!(prefs.vibes.contains(&day.theme));
        }
    }

    #[test]
    fn test_single_vibe_themes_every_day() {
        let prefs = prefs("Lisbon", 6, BudgetTier::Budget, &["wellness-retreat"]);
        let itinerary = seeded().generate(&prefs).unwrap();

        for day in &itinerary.days {
            assert_eq!(day.theme, "wellness-retreat");
        }
    }

    #[test]
    fn test_tokyo_adventure_scenario() {
        let prefs = prefs("Tokyo", 2, BudgetTier::Mid, &["adventure-seeker"]);
        let itinerary = seeded().generate(&prefs).unwrap();

        assert_eq!(itinerary.days.len(), 2);
        assert_eq!(itinerary.total_budget, 200);
        let archetypes = ActivityCatalog::archetypes("adventure-seeker");
        for day in &itinerary.days {
            assert_eq!(day.theme, "adventure-seeker");
            assert_eq!(day.morning.activity, archetypes[0]);
            assert_eq!(day.afternoon.activity, archetypes[1]);
            assert_eq!(day.evening.activity, archetypes[2]);
        }
    }

    #[test]
    fn test_slot_times_costs_and_locations() {
        let prefs = prefs("Oslo", 3, BudgetTier::Mid, &["nightlife-lover"]);
        let itinerary = seeded().generate(&prefs).unwrap();

        for day in &itinerary.days {
            assert_eq!(day.morning.time.to_string(), "9:00 AM");
            assert_eq!(day.afternoon.time.to_string(), "1:00 PM");
            assert_eq!(day.evening.time.to_string(), "7:00 PM");

            assert!((10..=59).contains(&day.morning.cost));
            assert!((20..=99).contains(&day.afternoon.cost));
            assert!((30..=129).contains(&day.evening.cost));

            for slot in DaySlot::ALL {
                assert!(day.slot(slot).location.starts_with("Oslo "));
            }

            assert_eq!(day.tips.len(), 2);
            assert_eq!(day.alternatives.len(), 2);
            assert!(day.alternatives[0].starts_with("Alternative "));
        }
    }

    #[test]
    fn test_unknown_theme_uses_fallback_archetypes() {
        let prefs = prefs("Quito", 2, BudgetTier::Mid, &["custom-1f2e3d4c"]);
        let itinerary = seeded().generate(&prefs).unwrap();

        let fallback = ActivityCatalog::archetypes(ActivityCatalog::FALLBACK_VIBE);
        for day in &itinerary.days {
            assert_eq!(day.morning.activity, fallback[0]);
            assert_eq!(day.afternoon.activity, fallback[1]);
            assert_eq!(day.evening.activity, fallback[2]);
        }
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        let prefs = prefs("Paris", 0, BudgetTier::Mid, &["chill-scenic"]);
        assert!(seeded().generate(&prefs).is_err());
    }

    #[test]
    fn test_same_seed_generates_same_itinerary() {
        let prefs = prefs("Rome", 5, BudgetTier::Premium, &["bougie-foodie", "culture-vulture"]);
        let first = ItineraryGenerator::with_rng(StdRng::seed_from_u64(7))
            .generate(&prefs)
            .unwrap();
        let second = ItineraryGenerator::with_rng(StdRng::seed_from_u64(7))
            .generate(&prefs)
            .unwrap();

        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }
}
