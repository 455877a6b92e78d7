use crate::models::itinerary::DaySlot;

const URBAN_EXPLORER_ARCHETYPES: &[&str] = &[
    "street art tours",
    "rooftop bars",
    "local neighborhoods",
    "hidden gems",
];

const GENERIC_TIPS: &[&str] = &[
    "Stay flexible and enjoy the moment",
    "Ask locals for recommendations",
];

/// Static vibe-to-activity tables. Lookup never fails: unrecognized vibe
/// tags (including synthetic custom tags) fall back to the urban-explorer
/// archetype list.
pub struct ActivityCatalog;

impl ActivityCatalog {
    pub const FALLBACK_VIBE: &'static str = "urban-explorer";

    fn known_archetypes(vibe: &str) -> Option<&'static [&'static str]> {
        match vibe {
            "chill-scenic" => Some(&[
                "scenic viewpoints",
                "peaceful gardens",
                "lakeside walks",
                "sunset spots",
            ]),
            "bougie-foodie" => Some(&[
                "michelin restaurants",
                "wine tastings",
                "cooking classes",
                "food markets",
            ]),
            "urban-explorer" => Some(URBAN_EXPLORER_ARCHETYPES),
            "adventure-seeker" => Some(&[
                "hiking trails",
                "water sports",
                "extreme activities",
                "outdoor adventures",
            ]),
            "culture-vulture" => Some(&[
                "museums",
                "historical sites",
                "art galleries",
                "cultural centers",
            ]),
            "nightlife-lover" => Some(&["clubs", "bars", "live music", "night markets"]),
            "wellness-retreat" => Some(&[
                "spas",
                "yoga classes",
                "meditation centers",
                "wellness resorts",
            ]),
            "family-fun" => Some(&[
                "family attractions",
                "kid-friendly activities",
                "parks",
                "interactive museums",
            ]),
            _ => None,
        }
    }

    /// Ordered archetype list for a vibe. The first three feed the day's
    /// slots; the head of the list also feeds the alternatives.
    pub fn archetypes(vibe: &str) -> &'static [&'static str] {
        Self::known_archetypes(vibe).unwrap_or(URBAN_EXPLORER_ARCHETYPES)
    }

    pub fn is_known_vibe(vibe: &str) -> bool {
        Self::known_archetypes(vibe).is_some()
    }

    pub fn tips(vibe: &str) -> &'static [&'static str] {
        match vibe {
            "chill-scenic" => &[
                "Bring a camera for amazing photo opportunities",
                "Pack comfortable walking shoes",
            ],
            "bougie-foodie" => &[
                "Make reservations in advance",
                "Ask locals for hidden gem recommendations",
            ],
            "urban-explorer" => &["Download offline maps", "Keep some cash for street vendors"],
            "adventure-seeker" => &[
                "Check weather conditions",
                "Bring proper gear and safety equipment",
            ],
            "culture-vulture" => &[
                "Book tickets online to avoid queues",
                "Consider guided tours for deeper insights",
            ],
            "nightlife-lover" => &[
                "Start early to hit multiple spots",
                "Stay hydrated and pace yourself",
            ],
            "wellness-retreat" => &[
                "Book spa treatments in advance",
                "Bring comfortable, breathable clothing",
            ],
            "family-fun" => &[
                "Check age restrictions",
                "Plan for rest breaks between activities",
            ],
            _ => GENERIC_TIPS,
        }
    }

    /// Indoor/shaded stand-in for an outdoor activity, keyed by the original
    /// activity label. Activities without an entry are left as they are.
    pub fn indoor_substitute(activity: &str) -> Option<&'static str> {
        match activity {
            "scenic viewpoints" => Some("art galleries with city views"),
            "outdoor markets" => Some("covered markets or shopping centers"),
            "hiking trails" => Some("museum tours"),
            "beach activities" => Some("aquarium visits"),
            _ => None,
        }
    }

    pub fn district_suffixes() -> &'static [&'static str] {
        &[
            "Downtown",
            "Old Town",
            "City Center",
            "Historic District",
            "Waterfront",
            "Arts Quarter",
        ]
    }

    /// Label used when a vibe's archetype list is too short for the slot.
    pub fn slot_fallback_label(slot: DaySlot) -> &'static str {
        match slot {
            DaySlot::Morning => "Local exploration",
            DaySlot::Afternoon => "Cultural experience",
            DaySlot::Evening => "Dinner experience",
        }
    }

    pub fn slot_description(slot: DaySlot) -> &'static str {
        match slot {
            DaySlot::Morning => {
                "Start your day with this refreshing experience that energizes you for the adventures ahead."
            }
            DaySlot::Afternoon => {
                "Perfect for the main part of your day when energy is high and you're ready to dive deep."
            }
            DaySlot::Evening => "Wind down with this relaxing activity that caps off your day beautifully.",
        }
    }

    pub fn slot_duration_label(slot: DaySlot) -> &'static str {
        match slot {
            DaySlot::Morning => "2-3 hours",
            DaySlot::Afternoon => "3-4 hours",
            DaySlot::Evening => "2-3 hours",
        }
    }
}
