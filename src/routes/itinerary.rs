use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::models::adjustment::{AdjustmentEvent, AppliedAdjustments};
use crate::models::itinerary::Itinerary;
use crate::models::preferences::RawPreferences;
use crate::services::adjustment_service::AdjustmentEngine;
use crate::services::generation_service::ItineraryGenerator;
use crate::services::preference_service::PreferenceService;

/// Itinerary plus its adjustment record: the full state a caller persists
/// between engine calls.
#[derive(Debug, Deserialize, Serialize)]
pub struct PlanState {
    pub itinerary: Itinerary,
    pub adjustments: AppliedAdjustments,
}

#[derive(Debug, Deserialize)]
pub struct AdjustRequest {
    pub itinerary: Itinerary,
    #[serde(default)]
    pub adjustments: AppliedAdjustments,
    pub event: AdjustmentEvent,
}

/*
    /api/itineraries/generate
*/
pub async fn generate(body: web::Json<RawPreferences>) -> impl Responder {
    let prefs = match PreferenceService::normalize(&body) {
        Ok(prefs) => prefs,
        Err(err) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": err.to_string(),
                "field": err.field,
            }))
        }
    };

    match ItineraryGenerator::new().generate(&prefs) {
        Ok(itinerary) => HttpResponse::Ok().json(PlanState {
            itinerary,
            adjustments: AppliedAdjustments::default(),
        }),
        Err(err) => {
            eprintln!("Failed to generate itinerary: {}", err);
            HttpResponse::UnprocessableEntity().json(serde_json::json!({
                "error": err.to_string(),
            }))
        }
    }
}

/*
    /api/itineraries/adjust
*/
pub async fn adjust(body: web::Json<AdjustRequest>) -> impl Responder {
    let AdjustRequest {
        mut itinerary,
        mut adjustments,
        event,
    } = body.into_inner();

    AdjustmentEngine::apply(&mut itinerary, &mut adjustments, &event);

    HttpResponse::Ok().json(PlanState {
        itinerary,
        adjustments,
    })
}
