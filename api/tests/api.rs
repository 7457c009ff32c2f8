use api::route::v1::routes;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use registry::AppRegistry;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    routes().with_state(AppRegistry::in_memory())
}

fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    match body {
        Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Creates building -> floor -> room and returns the room's id and data.
async fn seed_room(app: &Router, capacity: i32) -> Value {
    let (status, building) = send(
        app,
        request(
            Method::POST,
            "/api/v1/buildings",
            Some(json!({"name": "Staff Residence", "address": "1 Compound Road"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let building_id = building["data"]["id"].as_str().unwrap().to_owned();

    let (status, floor) = send(
        app,
        request(
            Method::POST,
            &format!("/api/v1/buildings/{building_id}/floors"),
            Some(json!({"floorNumber": 1})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let floor_id = floor["data"]["id"].as_str().unwrap().to_owned();

    let (status, room) = send(
        app,
        request(
            Method::POST,
            "/api/v1/rooms",
            Some(json!({"floorId": floor_id, "roomNumber": "101", "capacity": capacity})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    room["data"].clone()
}

async fn seed_employee(app: &Router, staff_number: &str) -> String {
    let (status, employee) = send(
        app,
        request(
            Method::POST,
            "/api/v1/employees",
            Some(json!({
                "staffNumber": staff_number,
                "firstName": "Sara",
                "lastName": "Haddad",
                "nationalId": format!("NID-{staff_number}"),
                "jobTitle": "Nurse",
                "department": "Medical",
                "contractEndDate": "2027-01-01T00:00:00Z"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    employee["data"]["id"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn health_check_works() {
    let app = app();
    let (status, _) = send(&app, request(Method::GET, "/api/v1/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, request(Method::GET, "/api/v1/health/db", None)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn invalid_payload_is_rejected_with_400() {
    let app = app();
    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/v1/buildings",
            Some(json!({"name": "", "address": "1 Compound Road"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert!(body["message"].as_str().is_some());
}

#[tokio::test]
async fn created_room_starts_empty_and_available() {
    let app = app();
    let room = seed_room(&app, 2).await;
    assert_eq!(room["currentOccupancy"], 0);
    assert_eq!(room["status"], "AVAILABLE");

    let room_id = room["id"].as_str().unwrap();
    let (status, body) = send(
        &app,
        request(Method::GET, &format!("/api/v1/rooms/{room_id}"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);
    assert_eq!(body["data"]["roomNumber"], "101");
}

#[tokio::test]
async fn missing_room_returns_404_envelope() {
    let app = app();
    let (status, body) = send(
        &app,
        request(
            Method::GET,
            "/api/v1/rooms/00000000-0000-0000-0000-000000000000",
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
    assert_eq!(body["message"], "Room not found");
}

#[tokio::test]
async fn assignment_flow_over_http() {
    let app = app();
    let room = seed_room(&app, 1).await;
    let room_id = room["id"].as_str().unwrap().to_owned();
    let employee_id = seed_employee(&app, "EMP-0001").await;

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/v1/assignments",
            Some(json!({
                "employeeId": employee_id,
                "roomId": room_id,
                "checkInDate": "2026-08-01T12:00:00Z"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let assignment_id = body["data"]["id"].as_str().unwrap().to_owned();

    let (status, body) = send(
        &app,
        request(Method::GET, &format!("/api/v1/rooms/{room_id}"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["currentOccupancy"], 1);
    assert_eq!(body["data"]["status"], "OCCUPIED");

    // Second assignment for the same employee is a conflict.
    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/v1/assignments",
            Some(json!({
                "employeeId": employee_id,
                "roomId": room_id,
                "checkInDate": "2026-08-02T12:00:00Z"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Employee is already assigned to a room");

    let (status, body) = send(
        &app,
        request(
            Method::PATCH,
            &format!("/api/v1/assignments/{assignment_id}/checkout"),
            Some(json!({})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["checkOutDate"].as_str().is_some());

    let (status, body) = send(
        &app,
        request(
            Method::PATCH,
            &format!("/api/v1/assignments/{assignment_id}/checkout"),
            Some(json!({})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Active assignment not found");

    let (status, body) = send(
        &app,
        request(Method::GET, &format!("/api/v1/rooms/{room_id}"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["currentOccupancy"], 0);
    assert_eq!(body["data"]["status"], "AVAILABLE");
}

#[tokio::test]
async fn settings_round_trip_over_http() {
    let app = app();

    let (status, body) = send(&app, request(Method::GET, "/api/v1/settings", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["defaultLanguage"], "en");
    assert_eq!(body["data"]["aiSuggestionsEnabled"], false);

    let (status, body) = send(
        &app,
        request(
            Method::PUT,
            "/api/v1/settings",
            Some(json!({
                "defaultLanguage": "ar",
                "aiSuggestionsEnabled": true,
                "lastBackupTime": "2026-08-30T00:00:00Z"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["defaultLanguage"], "ar");

    let (status, body) = send(&app, request(Method::GET, "/api/v1/settings", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["aiSuggestionsEnabled"], true);
    assert_eq!(body["data"]["lastBackupTime"], "2026-08-30T00:00:00Z");

    // Clearing the backup time must stick; a later read cannot bring the
    // old timestamp back.
    let (status, body) = send(
        &app,
        request(
            Method::PUT,
            "/api/v1/settings",
            Some(json!({
                "defaultLanguage": "ar",
                "aiSuggestionsEnabled": true,
                "lastBackupTime": null
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["lastBackupTime"], Value::Null);

    let (status, body) = send(&app, request(Method::GET, "/api/v1/settings", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["lastBackupTime"], Value::Null);
}

#[tokio::test]
async fn unknown_settings_key_is_rejected() {
    let app = app();
    let (status, _) = send(
        &app,
        request(
            Method::PUT,
            "/api/v1/settings",
            Some(json!({
                "defaultLanguage": "en",
                "aiSuggestionsEnabled": false,
                "theme": "dark"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn activity_log_append_and_list() {
    let app = app();
    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/v1/activity-logs",
            Some(json!({"username": "admin", "action": "Assigned employee EMP-0001 to room 101"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, request(Method::GET, "/api/v1/activity-logs", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["items"][0]["username"], "admin");
}
