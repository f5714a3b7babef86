//! Integration tests for the produce endpoint.

mod common;

use actix_web::{test, web, App};
use serde_json::json;

use krest_api::app;
use krest_api::routes::AppState;
use krest_core::broker::KafkaError;
use krest_infra::broker::MemoryBroker;

use common::ScriptedBroker;

#[actix_web::test]
async fn test_produce_batch_returns_offsets_in_request_order() {
    let broker = MemoryBroker::with_topic("events", 2).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::new(broker)))
            .configure(app::configure::<MemoryBroker>),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/topics/events/partitions/1")
        .set_json(json!({
            "records": [
                {"value": {"event": "created"}},
                {"key": "order-7", "value": {"event": "paid"}}
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["offsets"],
        json!([
            {"partition": 1, "offset": 0, "error_code": null, "error": null},
            {"partition": 1, "offset": 1, "error_code": null, "error": null}
        ])
    );
}

#[actix_web::test]
async fn test_failed_records_carry_their_own_error_slots() {
    let broker = ScriptedBroker {
        produce_outcome: Ok(vec![
            Ok(7),
            Err(KafkaError::Retriable("Leader not available".to_string())),
            Err(KafkaError::Broker("Record batch too large".to_string())),
            Err(KafkaError::Authorization(
                "Not authorized to access topics: [events]".to_string(),
            )),
        ]),
        ..ScriptedBroker::default()
    };
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::new(broker)))
            .configure(app::configure::<ScriptedBroker>),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/topics/events/partitions/0")
        .set_json(json!({"records": [{"value": 1}, {"value": 2}, {"value": 3}, {"value": 4}]}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // The batch reached dispatch, so the request succeeds and each record
    // reports its own classification.
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["offsets"][0]["offset"], 7);
    assert_eq!(body["offsets"][1]["error_code"], 50003);
    assert_eq!(body["offsets"][1]["error"], "Leader not available");
    assert_eq!(body["offsets"][2]["error_code"], 50002);
    assert_eq!(body["offsets"][3]["error_code"], 403);
}

#[actix_web::test]
async fn test_unclassifiable_record_failure_aborts_the_whole_request() {
    let broker = ScriptedBroker {
        produce_outcome: Ok(vec![
            Ok(0),
            Err(KafkaError::Unexpected("worker task dropped".to_string())),
        ]),
        ..ScriptedBroker::default()
    };
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::new(broker)))
            .configure(app::configure::<ScriptedBroker>),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/topics/events/partitions/0")
        .set_json(json!({"records": [{"value": 1}, {"value": 2}]}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Even though the first record was written, nothing is attributed.
    assert_eq!(resp.status(), 500);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error_code"], 500);
    assert_eq!(
        body["message"],
        "Unexpected non-Kafka-like exception returned by broker client"
    );
}

#[actix_web::test]
async fn test_out_of_range_partition_maps_to_partition_not_found() {
    let broker = MemoryBroker::with_topic("events", 3).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::new(broker)))
            .configure(app::configure::<MemoryBroker>),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/topics/events/partitions/9")
        .set_json(json!({"records": [{"value": 1}]}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // The client reports this only as message text; the sniff catches it.
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error_code"], 40402);
    assert_eq!(body["message"], "Partition not found.");
}

#[actix_web::test]
async fn test_request_level_authentication_failure_maps_to_401() {
    let broker = ScriptedBroker {
        produce_outcome: Err(KafkaError::Authentication("SASL handshake failed".to_string())),
        ..ScriptedBroker::default()
    };
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::new(broker)))
            .configure(app::configure::<ScriptedBroker>),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/topics/events/partitions/0")
        .set_json(json!({"records": [{"value": 1}]}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error_code"], 40101);
    assert_eq!(body["message"], "SASL handshake failed");
}

#[actix_web::test]
async fn test_unknown_topic_is_a_generic_broker_error_at_request_level() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::new(MemoryBroker::new())))
            .configure(app::configure::<MemoryBroker>),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/topics/events/partitions/0")
        .set_json(json!({"records": [{"value": 1}]}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Retriable failures have no dedicated branch on this path.
    assert_eq!(resp.status(), 500);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error_code"], 50002);
    assert_eq!(
        body["message"],
        "Kafka error: Topic events not present in metadata after 60000 ms."
    );
}

#[actix_web::test]
async fn test_malformed_body_is_rejected_with_422() {
    let broker = MemoryBroker::with_topic("events", 1).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::new(broker)))
            .configure(app::configure::<MemoryBroker>),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/topics/events/partitions/0")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"records\": [")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 422);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error_code"], 422);
}
