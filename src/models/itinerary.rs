use std::fmt;

use chrono::{Duration, NaiveTime};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

const DISPLAY_FORMAT: &str = "%-I:%M %p";
const PARSE_FORMAT: &str = "%I:%M %p";

/// A clock-face time rendered on the wire as a 12-hour display string,
/// e.g. "9:00 AM". Arithmetic wraps around midnight; hour 0 renders as 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTime(NaiveTime);

impl SlotTime {
    pub fn new(hour: u32, minute: u32) -> Self {
        SlotTime(NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
    }

    /// Shift forward by the given number of minutes. Minute overflow rolls
    /// into hours and hour overflow wraps modulo 24.
    pub fn shift_minutes(&mut self, minutes: i64) {
        self.0 = self.0 + Duration::minutes(minutes);
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

impl Serialize for SlotTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&value, PARSE_FORMAT)
            .map(SlotTime)
            .map_err(de::Error::custom)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DaySlot {
    Morning,
    Afternoon,
    Evening,
}

impl DaySlot {
    pub const ALL: [DaySlot; 3] = [DaySlot::Morning, DaySlot::Afternoon, DaySlot::Evening];

    /// Nominal start time before any traffic adjustment.
    pub fn nominal_start(&self) -> SlotTime {
        match self {
            DaySlot::Morning => SlotTime::new(9, 0),
            DaySlot::Afternoon => SlotTime::new(13, 0),
            DaySlot::Evening => SlotTime::new(19, 0),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DaySlot::Morning => "morning",
            DaySlot::Afternoon => "afternoon",
            DaySlot::Evening => "evening",
        }
    }
}

/// One timed activity inside a day. Created by the generator, mutated only
/// by adjustment rules afterwards.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScheduledActivity {
    pub time: SlotTime,
    pub activity: String,
    pub location: String,
    pub duration: String,
    pub cost: u32,
    pub description: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DayPlan {
    pub day: u32,
    pub theme: String,
    pub morning: ScheduledActivity,
    pub afternoon: ScheduledActivity,
    pub evening: ScheduledActivity,
    pub tips: Vec<String>,
    pub alternatives: Vec<String>,
}

impl DayPlan {
    pub fn slot(&self, slot: DaySlot) -> &ScheduledActivity {
        match slot {
            DaySlot::Morning => &self.morning,
            DaySlot::Afternoon => &self.afternoon,
            DaySlot::Evening => &self.evening,
        }
    }

    pub fn slot_mut(&mut self, slot: DaySlot) -> &mut ScheduledActivity {
        match slot {
            DaySlot::Morning => &mut self.morning,
            DaySlot::Afternoon => &mut self.afternoon,
            DaySlot::Evening => &mut self.evening,
        }
    }
}

/// A generated multi-day schedule. Day count and total budget are fixed at
/// generation time; adjustments never touch them.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Itinerary {
    pub destination: String,
    pub duration: String,
    pub total_budget: u32,
    pub vibe: Vec<String>,
    pub days: Vec<DayPlan>,
}
