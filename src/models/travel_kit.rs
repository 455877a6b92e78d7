use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::itinerary::{DaySlot, SlotTime};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One map marker per day/slot of the itinerary.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MapPin {
    pub id: String,
    pub title: String,
    pub location: String,
    pub coordinates: Coordinates,
    pub time: SlotTime,
    pub slot: DaySlot,
}

/// Walking leg between two consecutive slots of the same day.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WalkingLeg {
    pub from: String,
    pub to: String,
    pub distance: String,
    pub steps: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SubwayInfo {
    pub available: bool,
    pub ticket_price: String,
    pub day_pass: String,
    pub stations: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BusInfo {
    pub available: bool,
    pub ticket_price: String,
    pub routes: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TaxiInfo {
    pub base_rate: String,
    pub per_mile: String,
    pub apps: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TransportSummary {
    pub subway: SubwayInfo,
    pub bus: BusInfo,
    pub taxi: TaxiInfo,
}

/// Fixed percentage split of the itinerary's total budget:
/// food 40%, activities 30%, transport 20%, shopping 10%.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BudgetBreakdown {
    pub total_budget: u32,
    pub daily_budget: u32,
    pub food: u32,
    pub activities: u32,
    pub transport: u32,
    pub shopping: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EmergencyNumbers {
    pub police: String,
    pub medical: String,
    pub fire: String,
    pub tourist: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EmergencyPack {
    pub destination: String,
    pub numbers: EmergencyNumbers,
    pub safety_tips: Vec<String>,
    pub phrases: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LanguagePack {
    pub destination: String,
    pub language: String,
    pub common_phrases: HashMap<String, String>,
    pub food_terms: HashMap<String, String>,
    pub directions_phrases: HashMap<String, String>,
    pub pronunciation_guide: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CurrencyInfo {
    pub code: String,
    pub symbol: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TipRange {
    pub min: u32,
    pub max: u32,
    pub description: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TippingGuide {
    pub restaurants: TipRange,
    pub bars: TipRange,
    pub taxis: TipRange,
    pub hotels: TipRange,
}

/// Everything a traveler needs offline, derived from a finished itinerary.
/// Derivation is stateless and idempotent; re-running it on the same
/// itinerary yields the same kit.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TravelKit {
    pub map_pins: Vec<MapPin>,
    pub walking_legs: Vec<WalkingLeg>,
    pub transport: TransportSummary,
    pub budget: BudgetBreakdown,
    pub emergency: EmergencyPack,
    pub language: LanguagePack,
    pub currency: CurrencyInfo,
    pub tipping: TippingGuide,
}
