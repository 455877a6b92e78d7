use actix_web::{web, HttpResponse, Responder};

use crate::models::itinerary::Itinerary;
use crate::services::offline_service::OfflineService;

/*
    /api/itineraries/travel-kit
*/
pub async fn travel_kit(body: web::Json<Itinerary>) -> impl Responder {
    let kit = OfflineService::derive(&body);
    HttpResponse::Ok().json(kit)
}
