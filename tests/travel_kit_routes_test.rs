mod common;

use actix_web::test;
use serde_json::json;
use serial_test::serial;

use common::TestApp;

fn tokyo_preferences() -> serde_json::Value {
    json!({
        "destination": "Tokyo",
        "duration": "3-5",
        "budget": "mid",
        "vibe": ["urban-explorer"]
    })
}

#[actix_rt::test]
#[serial]
async fn test_travel_kit_derivation() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&tokyo_preferences())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let plan: serde_json::Value = test::read_body_json(resp).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/travel-kit")
        .set_json(&plan["itinerary"])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let kit: serde_json::Value = test::read_body_json(resp).await;

    // one pin per day/slot, one fewer leg per day than slots
    assert_eq!(kit["map_pins"].as_array().unwrap().len(), 9);
    assert_eq!(kit["walking_legs"].as_array().unwrap().len(), 6);
    assert_eq!(kit["map_pins"][0]["id"], "1-morning");
    assert_eq!(kit["map_pins"][0]["time"], "9:00 AM");

    // fixed percentage split of the total budget
    assert_eq!(kit["budget"]["total_budget"], 300);
    assert_eq!(kit["budget"]["food"], 120);
    assert_eq!(kit["budget"]["activities"], 90);
    assert_eq!(kit["budget"]["transport"], 60);
    assert_eq!(kit["budget"]["shopping"], 30);

    // destination-keyed packs
    assert_eq!(kit["emergency"]["numbers"]["police"], "110");
    assert_eq!(kit["language"]["language"], "Japanese");
    assert_eq!(kit["currency"]["code"], "JPY");
    assert_eq!(kit["transport"]["subway"]["available"], true);
}

#[actix_rt::test]
#[serial]
async fn test_travel_kit_is_idempotent() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&tokyo_preferences())
        .to_request();
    let resp = test::call_service(&app, req).await;
    let plan: serde_json::Value = test::read_body_json(resp).await;

    let mut kits = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/itineraries/travel-kit")
            .set_json(&plan["itinerary"])
            .to_request();
        let resp = test::call_service(&app, req).await;
        let kit: serde_json::Value = test::read_body_json(resp).await;
        kits.push(kit);
    }

    assert_eq!(kits[0], kits[1]);
}

#[actix_rt::test]
#[serial]
async fn test_travel_kit_rejects_wrong_method() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries/travel-kit")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 405);
}
