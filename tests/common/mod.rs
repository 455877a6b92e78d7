use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};

use planora_api::routes;

pub struct TestApp;

impl TestApp {
    pub async fn new() -> Self {
        Self
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api").service(
                    web::scope("/itineraries")
                        .route("/generate", web::post().to(routes::itinerary::generate))
                        .route("/adjust", web::post().to(routes::itinerary::adjust))
                        .route(
                            "/travel-kit",
                            web::post().to(routes::travel_kit::travel_kit),
                        ),
                ),
            )
    }
}
