pub mod adjustment;
pub mod itinerary;
pub mod preferences;
pub mod travel_kit;
