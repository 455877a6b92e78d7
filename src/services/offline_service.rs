use std::collections::HashMap;

use crate::models::itinerary::{DaySlot, Itinerary};
use crate::models::travel_kit::{
    BudgetBreakdown, BusInfo, Coordinates, CurrencyInfo, EmergencyNumbers, EmergencyPack,
    LanguagePack, MapPin, SubwayInfo, TaxiInfo, TipRange, TippingGuide, TransportSummary,
    TravelKit, WalkingLeg,
};

// Anchor point the synthesized pin coordinates scatter around.
const BASE_LAT: f64 = 40.7589;
const BASE_LNG: f64 = -73.9851;

const BUDGET_FOOD_PCT: u32 = 40;
const BUDGET_ACTIVITIES_PCT: u32 = 30;
const BUDGET_TRANSPORT_PCT: u32 = 20;
const BUDGET_SHOPPING_PCT: u32 = 10;

/// Derives the offline travel kit from a finished itinerary. Stateless and
/// idempotent: synthesized coordinates and walking estimates are hashed from
/// the pin identity instead of sampled, so re-runs produce identical kits.
pub struct OfflineService;

impl OfflineService {
    pub fn derive(itinerary: &Itinerary) -> TravelKit {
        TravelKit {
            map_pins: Self::map_pins(itinerary),
            walking_legs: Self::walking_legs(itinerary),
            transport: Self::transport_summary(),
            budget: Self::budget_breakdown(itinerary),
            emergency: Self::emergency_pack(&itinerary.destination),
            language: Self::language_pack(&itinerary.destination),
            currency: Self::currency_info(&itinerary.destination),
            tipping: Self::tipping_guide(),
        }
    }

    /// One pin per day/slot, carrying the slot's current (possibly
    /// adjusted) time.
    fn map_pins(itinerary: &Itinerary) -> Vec<MapPin> {
        let mut pins = Vec::with_capacity(itinerary.days.len() * DaySlot::ALL.len());
        for day in &itinerary.days {
            for slot in DaySlot::ALL {
                let activity = day.slot(slot);
                let id = format!("{}-{}", day.day, slot.label());
                pins.push(MapPin {
                    coordinates: Self::synthesize_coordinates(&id, &activity.location),
                    title: activity.activity.clone(),
                    location: activity.location.clone(),
                    time: activity.time,
                    slot,
                    id,
                });
            }
        }
        pins
    }

    /// Two legs per day: morning to afternoon, afternoon to evening.
    fn walking_legs(itinerary: &Itinerary) -> Vec<WalkingLeg> {
        let mut legs = Vec::with_capacity(itinerary.days.len() * (DaySlot::ALL.len() - 1));
        for day in &itinerary.days {
            for pair in DaySlot::ALL.windows(2) {
                let from = &day.slot(pair[0]).location;
                let to = &day.slot(pair[1]).location;
                let minutes = 5 + Self::hash_label(&format!("{}->{}", from, to)) % 20;
                legs.push(WalkingLeg {
                    from: from.clone(),
                    to: to.clone(),
                    distance: format!("{} min walk", minutes),
                    steps: vec![
                        "Head north on Main Street".to_string(),
                        "Turn right on Central Avenue".to_string(),
                        "Continue for 3 blocks".to_string(),
                        "Destination will be on your left".to_string(),
                    ],
                });
            }
        }
        legs
    }

    /// Deterministic but varied coordinates near the anchor point, keyed by
    /// pin id and location label.
    fn synthesize_coordinates(id: &str, location: &str) -> Coordinates {
        let hash = Self::hash_label(&format!("{}@{}", id, location));
        Coordinates {
            lat: BASE_LAT + ((hash % 100) as f64 - 50.0) / 1000.0,
            lng: BASE_LNG + (((hash / 100) % 100) as f64 - 50.0) / 1000.0,
        }
    }

    fn hash_label(label: &str) -> u32 {
        label
            .chars()
            .fold(0u32, |acc, c| acc.wrapping_mul(31).wrapping_add(c as u32))
    }

    fn transport_summary() -> TransportSummary {
        TransportSummary {
            subway: SubwayInfo {
                available: true,
                ticket_price: "$2.75".to_string(),
                day_pass: "$33".to_string(),
                stations: vec![
                    "Central Station".to_string(),
                    "Tourist Hub".to_string(),
                    "City Center".to_string(),
                ],
            },
            bus: BusInfo {
                available: true,
                ticket_price: "$2.25".to_string(),
                routes: vec![
                    "Route 1".to_string(),
                    "Route 5".to_string(),
                    "Tourist Loop".to_string(),
                ],
            },
            taxi: TaxiInfo {
                base_rate: "$3.50".to_string(),
                per_mile: "$2.50".to_string(),
                apps: vec![
                    "Uber".to_string(),
                    "Lyft".to_string(),
                    "Local Taxi".to_string(),
                ],
            },
        }
    }

    fn budget_breakdown(itinerary: &Itinerary) -> BudgetBreakdown {
        let total = itinerary.total_budget;
        let day_count = itinerary.days.len().max(1) as u32;
        BudgetBreakdown {
            total_budget: total,
            daily_budget: total / day_count,
            food: total * BUDGET_FOOD_PCT / 100,
            activities: total * BUDGET_ACTIVITIES_PCT / 100,
            transport: total * BUDGET_TRANSPORT_PCT / 100,
            shopping: total * BUDGET_SHOPPING_PCT / 100,
        }
    }

    fn emergency_pack(destination: &str) -> EmergencyPack {
        let numbers = match destination {
            "Paris" => EmergencyNumbers {
                police: "17".to_string(),
                medical: "15".to_string(),
                fire: "18".to_string(),
                tourist: "+33 1 43 17 30 00".to_string(),
            },
            "Tokyo" => EmergencyNumbers {
                police: "110".to_string(),
                medical: "119".to_string(),
                fire: "119".to_string(),
                tourist: "+81 3 3201 3331".to_string(),
            },
            "New York" => EmergencyNumbers {
                police: "911".to_string(),
                medical: "911".to_string(),
                fire: "911".to_string(),
                tourist: "+1 212 484 1200".to_string(),
            },
            _ => EmergencyNumbers {
                police: "911".to_string(),
                medical: "911".to_string(),
                fire: "911".to_string(),
                tourist: "911".to_string(),
            },
        };

        let phrases = HashMap::from([
            ("Help".to_string(), "Help! / Au secours! / Tasukete!".to_string()),
            ("Emergency".to_string(), "Emergency / Urgence / Kyukyu".to_string()),
            ("Police".to_string(), "Police / Police / Keisatsu".to_string()),
            ("Hospital".to_string(), "Hospital / Hopital / Byoin".to_string()),
        ]);

        EmergencyPack {
            destination: destination.to_string(),
            numbers,
            safety_tips: vec![
                "Keep copies of important documents".to_string(),
                "Avoid displaying expensive items".to_string(),
                "Stay in well-lit areas at night".to_string(),
                "Keep emergency numbers easily accessible".to_string(),
            ],
            phrases,
        }
    }

    fn language_pack(destination: &str) -> LanguagePack {
        let language = match destination {
            "Paris" => "French",
            "Tokyo" => "Japanese",
            "New York" => "English",
            _ => "English",
        };

        LanguagePack {
            destination: destination.to_string(),
            language: language.to_string(),
            common_phrases: HashMap::from([
                ("Hello".to_string(), "Hello / Bonjour / Konnichiwa".to_string()),
                (
                    "Thank you".to_string(),
                    "Thank you / Merci / Arigatou gozaimasu".to_string(),
                ),
                (
                    "Please".to_string(),
                    "Please / S'il vous plait / Onegaishimasu".to_string(),
                ),
                (
                    "Excuse me".to_string(),
                    "Excuse me / Excusez-moi / Sumimasen".to_string(),
                ),
            ]),
            food_terms: HashMap::from([
                ("Menu".to_string(), "Menu / Carte / Menyu".to_string()),
                ("Bill".to_string(), "Check / Addition / Okaikei".to_string()),
                ("Water".to_string(), "Water / Eau / Mizu".to_string()),
                (
                    "Vegetarian".to_string(),
                    "Vegetarian / Vegetarien / Bejitarian".to_string(),
                ),
            ]),
            directions_phrases: HashMap::from([
                ("Where is".to_string(), "Where is / Ou est / Doko desu ka".to_string()),
                ("Left".to_string(), "Left / Gauche / Hidari".to_string()),
                ("Right".to_string(), "Right / Droite / Migi".to_string()),
                ("Straight".to_string(), "Straight / Tout droit / Massugu".to_string()),
            ]),
            pronunciation_guide: HashMap::from([
                (
                    "Hello".to_string(),
                    "[heh-LOH] / [bone-ZHOOR] / [kon-nee-chee-wah]".to_string(),
                ),
                (
                    "Thank you".to_string(),
                    "[thank-YOO] / [mer-SEE] / [ah-ree-gah-toh goh-zah-ee-mahs]".to_string(),
                ),
            ]),
        }
    }

    fn currency_info(destination: &str) -> CurrencyInfo {
        match destination {
            "Paris" => CurrencyInfo {
                code: "EUR".to_string(),
                symbol: "€".to_string(),
                name: "Euro".to_string(),
            },
            "Tokyo" => CurrencyInfo {
                code: "JPY".to_string(),
                symbol: "¥".to_string(),
                name: "Japanese Yen".to_string(),
            },
            _ => CurrencyInfo {
                code: "USD".to_string(),
                symbol: "$".to_string(),
                name: "US Dollar".to_string(),
            },
        }
    }

    fn tipping_guide() -> TippingGuide {
        TippingGuide {
            restaurants: TipRange {
                min: 15,
                max: 20,
                description: "Standard restaurant tip".to_string(),
            },
            bars: TipRange {
                min: 10,
                max: 15,
                description: "Per drink or 10-15% of bill".to_string(),
            },
            taxis: TipRange {
                min: 10,
                max: 15,
                description: "Round up to nearest dollar".to_string(),
            },
            hotels: TipRange {
                min: 2,
                max: 5,
                description: "Per bag for bellhop, per day for housekeeping".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::preferences::{BudgetTier, TripPreferences};
    use crate::services::generation_service::ItineraryGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_itinerary(destination: &str, days: u32) -> Itinerary {
        let prefs = TripPreferences {
            destination: destination.to_string(),
            duration_days: days,
            budget_tier: BudgetTier::Mid,
            vibes: vec!["urban-explorer".to_string()],
        };
        ItineraryGenerator::with_rng(StdRng::seed_from_u64(11))
            .generate(&prefs)
            .unwrap()
    }

    #[test]
    fn test_pin_and_leg_counts() {
        let itinerary = sample_itinerary("Tokyo", 3);
        let kit = OfflineService::derive(&itinerary);

        assert_eq!(kit.map_pins.len(), 9);
        assert_eq!(kit.walking_legs.len(), 6);
        assert_eq!(kit.map_pins[0].id, "1-morning");
        assert_eq!(kit.map_pins[8].id, "3-evening");
        assert_eq!(kit.map_pins[0].title, itinerary.days[0].morning.activity);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let itinerary = sample_itinerary("Paris", 2);
        let first = serde_json::to_value(OfflineService::derive(&itinerary)).unwrap();
        let second = serde_json::to_value(OfflineService::derive(&itinerary)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_budget_breakdown_split() {
        let itinerary = sample_itinerary("Tokyo", 4);
        let kit = OfflineService::derive(&itinerary);

        assert_eq!(kit.budget.total_budget, 400);
        assert_eq!(kit.budget.daily_budget, 100);
        assert_eq!(kit.budget.food, 160);
        assert_eq!(kit.budget.activities, 120);
        assert_eq!(kit.budget.transport, 80);
        assert_eq!(kit.budget.shopping, 40);
    }

    #[test]
    fn test_destination_keyed_packs_with_fallback() {
        let tokyo = OfflineService::derive(&sample_itinerary("Tokyo", 1));
        assert_eq!(tokyo.emergency.numbers.police, "110");
        assert_eq!(tokyo.language.language, "Japanese");
        assert_eq!(tokyo.currency.code, "JPY");

        let elsewhere = OfflineService::derive(&sample_itinerary("Reykjavik", 1));
        assert_eq!(elsewhere.emergency.numbers.police, "911");
        assert_eq!(elsewhere.language.language, "English");
        assert_eq!(elsewhere.currency.code, "USD");
    }

    #[test]
    fn test_pins_carry_adjusted_times() {
        use crate::models::adjustment::{AdjustmentEvent, AppliedAdjustments};
        use crate::services::adjustment_service::AdjustmentEngine;

        let mut itinerary = sample_itinerary("Tokyo", 1);
        let mut applied = AppliedAdjustments::default();
        AdjustmentEngine::apply(
            &mut itinerary,
            &mut applied,
            &AdjustmentEvent::Traffic { delay_minutes: 30 },
        );

        let kit = OfflineService::derive(&itinerary);
        assert_eq!(kit.map_pins[0].time.to_string(), "9:30 AM");
    }
}
