use crate::models::adjustment::{
    AdjustmentEvent, AppliedAdjustments, FatigueLevel, WeatherCondition,
};
use crate::models::itinerary::{DaySlot, Itinerary};
use crate::services::catalog::ActivityCatalog;

const RAIN_PREFIX: &str = "Indoor swap for rain: ";
const HEAT_PREFIX: &str = "Shaded pick for extreme heat: ";

const BREAK_ACTIVITY: &str = "relaxing cafe visit";
const BREAK_DURATION: &str = "1-2 hours";
const BREAK_DESCRIPTION: &str = "Take a break and recharge with a relaxing afternoon.";

/// Folds discrete external events into an existing itinerary. Each rule
/// mutates activity fields only; day count, destination, vibe set and total
/// budget are never touched. Application never fails: at worst an event is
/// recorded without a schedule change.
pub struct AdjustmentEngine;

impl AdjustmentEngine {
    pub fn apply(
        itinerary: &mut Itinerary,
        applied: &mut AppliedAdjustments,
        event: &AdjustmentEvent,
    ) {
        match event {
            AdjustmentEvent::Weather { condition } => {
                Self::apply_weather(itinerary, applied, *condition)
            }
            AdjustmentEvent::Traffic { delay_minutes } => {
                Self::apply_traffic(itinerary, applied, *delay_minutes)
            }
            AdjustmentEvent::Fatigue { level } => Self::apply_fatigue(itinerary, applied, *level),
        }
    }

    /// One-shot per itinerary lifetime: the schedule mutation runs only when
    /// no weather record exists yet, regardless of which condition set it.
    /// Later weather events still update the bookkeeping record.
    fn apply_weather(
        itinerary: &mut Itinerary,
        applied: &mut AppliedAdjustments,
        condition: WeatherCondition,
    ) {
        if applied.weather.is_none() {
            match condition {
                WeatherCondition::Rain => Self::substitute_sheltered(itinerary, RAIN_PREFIX),
                WeatherCondition::ExtremeHeat => Self::substitute_sheltered(itinerary, HEAT_PREFIX),
                WeatherCondition::Other => {}
            }
        }
        applied.weather = Some(condition);
    }

    /// Swap morning and afternoon activities for an indoor/shaded stand-in
    /// keyed by the original label; activities without a table entry stay.
    fn substitute_sheltered(itinerary: &mut Itinerary, prefix: &str) {
        for day in &mut itinerary.days {
            for slot in [DaySlot::Morning, DaySlot::Afternoon] {
                let activity = day.slot_mut(slot);
                if let Some(substitute) = ActivityCatalog::indoor_substitute(&activity.activity) {
                    activity.activity = substitute.to_string();
                    activity.description = format!("{}{}", prefix, activity.description);
                }
            }
        }
    }

    /// Cumulative: every traffic event pushes all three slots of every day
    /// forward again, modeling accumulating real-world delay.
    fn apply_traffic(itinerary: &mut Itinerary, applied: &mut AppliedAdjustments, delay_minutes: u32) {
        for day in &mut itinerary.days {
            for slot in DaySlot::ALL {
                day.slot_mut(slot).time.shift_minutes(delay_minutes as i64);
            }
        }
        applied.traffic = Some(delay_minutes);
    }

    /// High fatigue replaces every afternoon activity wholesale with a fixed
    /// recovery break, discarding the scheduled activity and its cost. The
    /// slot keeps its current (possibly traffic-shifted) time and location.
    fn apply_fatigue(
        itinerary: &mut Itinerary,
        applied: &mut AppliedAdjustments,
        level: FatigueLevel,
    ) {
        if level == FatigueLevel::High {
            for day in &mut itinerary.days {
                let afternoon = &mut day.afternoon;
                afternoon.activity = BREAK_ACTIVITY.to_string();
                afternoon.duration = BREAK_DURATION.to_string();
                afternoon.description = BREAK_DESCRIPTION.to_string();
                afternoon.cost = 0;
            }
        }
        applied.fatigue = Some(level);
    }
}
