//! Integration tests for the Portfolio API router
//!
//! Requests are driven through the router with `oneshot`. Store failures
//! use a mockall mock of `PortfolioStore`.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use mockall::mock;
use portfolio_api::startup::initialize;
use portfolio_api::{create_router, AppState};
use portfolio_core::{
    ContactMessage, NewContactMessage, PortfolioData, SeedData, CONTACT_PATH, PORTFOLIO_PATH,
};
use portfolio_storage::{
    MemoryStore, PortfolioStore, SeedOutcome, SharedStore, StoreError, StoreResult,
};
use std::sync::Arc;
use tower::ServiceExt;

mock! {
    pub Store {}

    #[async_trait]
    impl PortfolioStore for Store {
        fn backend(&self) -> &'static str;
        async fn prepare_schema(&self) -> StoreResult<()>;
        async fn get_portfolio(&self) -> StoreResult<PortfolioData>;
        async fn create_contact_message(&self, input: &NewContactMessage) -> StoreResult<()>;
        async fn seed_if_empty(&self, seed: &SeedData) -> StoreResult<SeedOutcome>;
        async fn contact_messages(&self) -> StoreResult<Vec<ContactMessage>>;
    }
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router.oneshot(request).await.expect("request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is not JSON")
    };
    (status, body)
}

fn get_portfolio_request() -> Request<Body> {
    Request::builder()
        .uri(PORTFOLIO_PATH)
        .body(Body::empty())
        .unwrap()
}

fn contact_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(CONTACT_PATH)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn seeded_store() -> SharedStore {
    let store: SharedStore = Arc::new(MemoryStore::new());
    initialize(store.clone(), &SeedData::default())
        .await
        .expect("Failed to initialize store");
    store
}

#[tokio::test]
async fn test_empty_store_returns_placeholder_profile() {
    let store: SharedStore = Arc::new(MemoryStore::new());
    let (status, body) = send(create_router(AppState::new(store)), get_portfolio_request()).await;

    assert_eq!(status, StatusCode::OK);
    let profile = &body["profile"];
    assert_eq!(profile["id"], 0);
    for field in ["name", "headline", "summary", "location"] {
        assert_eq!(profile[field], "", "field {field}");
    }
    for field in [
        "email",
        "phone",
        "githubUrl",
        "linkedinUrl",
        "heroImageUrl",
        "aboutImageUrl",
    ] {
        assert!(profile[field].is_null(), "field {field}");
    }
    for list in ["experience", "education", "skills", "projects"] {
        assert_eq!(body[list], serde_json::json!([]), "list {list}");
    }
}

#[tokio::test]
async fn test_seeded_portfolio() {
    let store = seeded_store().await;
    let (status, body) = send(create_router(AppState::new(store)), get_portfolio_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["name"], "Komal Maurya");
    assert_eq!(
        body["profile"]["githubUrl"],
        "https://github.com/komal-maurya789"
    );

    let experience = body["experience"].as_array().unwrap();
    assert_eq!(experience.len(), 1);
    assert_eq!(experience[0]["title"], "Web Development Intern");
    assert_eq!(experience[0]["company"], "Prodigy InfoTech");
    assert_eq!(experience[0]["startDate"], "March 2025");

    assert_eq!(body["education"].as_array().unwrap().len(), 1);
    assert_eq!(body["skills"].as_array().unwrap().len(), 3);
    assert_eq!(body["projects"].as_array().unwrap().len(), 1);
    assert_eq!(
        body["projects"][0]["tags"],
        serde_json::json!(["Analysis", "Prediction"])
    );
}

#[tokio::test]
async fn test_seeded_profile_round_trips() {
    let mut seed = SeedData::default();
    seed.profile.name = "Zoë Ñúñez \u{1F680}".to_string();

    let store: SharedStore = Arc::new(MemoryStore::new());
    initialize(store.clone(), &seed).await.unwrap();

    let response = create_router(AppState::new(store))
        .oneshot(get_portfolio_request())
        .await
        .unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let data: PortfolioData = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(data.profile.name.as_bytes(), seed.profile.name.as_bytes());
}

#[tokio::test]
async fn test_contact_accepted_and_stored() {
    let store = seeded_store().await;
    let router = create_router(AppState::new(store.clone()));

    let (status, body) = send(
        router,
        contact_request(serde_json::json!({
            "name": "Jane",
            "email": "jane@x.com",
            "message": "Hi"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "success": true }));

    let messages = store.contact_messages().await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].name, "Jane");
    assert_eq!(messages[0].email, "jane@x.com");
    assert_eq!(messages[0].message, "Hi");
}

#[tokio::test]
async fn test_contact_missing_fields() {
    let store = seeded_store().await;
    let router = create_router(AppState::new(store.clone()));

    let (status, body) = send(router, contact_request(serde_json::json!({ "name": "Jane" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "message": "Invalid input" }));
    assert!(store.contact_messages().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_contact_each_missing_field() {
    let store = seeded_store().await;

    for missing in ["name", "email", "message"] {
        let mut payload = serde_json::json!({
            "name": "Jane",
            "email": "jane@x.com",
            "message": "Hi"
        });
        payload.as_object_mut().unwrap().remove(missing);

        let (status, body) = send(
            create_router(AppState::new(store.clone())),
            contact_request(payload),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {missing}");
        assert_eq!(body["message"], "Invalid input");
    }

    assert!(store.contact_messages().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_contact_rejects_bad_payloads() {
    let store = seeded_store().await;

    let payloads = [
        serde_json::json!({ "name": "Jane", "email": "jane@x.com", "message": 7 }),
        serde_json::json!({ "name": null, "email": "jane@x.com", "message": "Hi" }),
        serde_json::json!({ "name": "Jane", "email": ["jane@x.com"], "message": "Hi" }),
        serde_json::json!({ "name": "  ", "email": "jane@x.com", "message": "Hi" }),
        serde_json::json!({ "name": "Jane", "email": "jane@x.com", "message": "" }),
        serde_json::json!(["Jane", "jane@x.com", "Hi"]),
    ];

    for payload in payloads {
        let (status, body) = send(
            create_router(AppState::new(store.clone())),
            contact_request(payload.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload}");
        assert_eq!(body["message"], "Invalid input");
    }

    assert!(store.contact_messages().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_contact_stores_any_well_shaped_strings() {
    let store = seeded_store().await;
    let long_message = "x".repeat(5001);

    let payloads = [
        serde_json::json!({ "name": "Jane", "email": "jane", "message": "Hi" }),
        serde_json::json!({ "name": "Jane", "email": "jane@x.com", "message": long_message }),
    ];

    for payload in payloads {
        let (status, body) = send(
            create_router(AppState::new(store.clone())),
            contact_request(payload.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "payload {payload}");
        assert_eq!(body, serde_json::json!({ "success": true }));
    }

    let messages = store.contact_messages().await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].email, "jane");
    assert_eq!(messages[1].message, long_message);
}

#[tokio::test]
async fn test_contact_rejects_non_json_body() {
    let store = seeded_store().await;

    let request = Request::builder()
        .method("POST")
        .uri(CONTACT_PATH)
        .header("content-type", "text/plain")
        .body(Body::from("name=Jane"))
        .unwrap();
    let (status, body) = send(create_router(AppState::new(store.clone())), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid input");

    let request = Request::builder()
        .method("POST")
        .uri(CONTACT_PATH)
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _) = send(create_router(AppState::new(store.clone())), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(store.contact_messages().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_contact_never_reaches_store() {
    let mut mock = MockStore::new();
    mock.expect_backend().return_const("mock");
    mock.expect_create_contact_message().never();

    let (status, _) = send(
        create_router(AppState::new(Arc::new(mock))),
        contact_request(serde_json::json!({ "name": "Jane" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_portfolio_store_failure_is_generic_500() {
    let mut mock = MockStore::new();
    mock.expect_backend().return_const("mock");
    mock.expect_get_portfolio().times(1).returning(|| {
        Err(StoreError::Connection(
            "connect to postgres://admin:secret@db failed".to_string(),
        ))
    });

    let (status, body) = send(
        create_router(AppState::new(Arc::new(mock))),
        get_portfolio_request(),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "message": "Internal Server Error" }));
    assert!(!body.to_string().contains("secret"));
}

#[tokio::test]
async fn test_contact_store_failure_is_generic_500() {
    let mut mock = MockStore::new();
    mock.expect_backend().return_const("mock");
    mock.expect_create_contact_message()
        .times(1)
        .returning(|_| Err(StoreError::Constraint("null value in column".to_string())));

    let (status, body) = send(
        create_router(AppState::new(Arc::new(mock))),
        contact_request(serde_json::json!({
            "name": "Jane",
            "email": "jane@x.com",
            "message": "Hi"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, serde_json::json!({ "message": "Failed to send message" }));
}

#[tokio::test]
async fn test_seed_failure_aborts_initialize() {
    let mut mock = MockStore::new();
    mock.expect_backend().return_const("mock");
    mock.expect_prepare_schema().times(1).returning(|| Ok(()));
    mock.expect_seed_if_empty()
        .times(1)
        .returning(|_| Err(StoreError::Connection("refused".to_string())));

    let result = initialize(Arc::new(mock), &SeedData::default()).await;
    assert!(matches!(result, Err(StoreError::Connection(_))));
}

#[tokio::test]
async fn test_schema_failure_skips_seeding() {
    let mut mock = MockStore::new();
    mock.expect_backend().return_const("mock");
    mock.expect_prepare_schema()
        .times(1)
        .returning(|| Err(StoreError::Schema("permission denied".to_string())));
    mock.expect_seed_if_empty().never();

    let result = initialize(Arc::new(mock), &SeedData::default()).await;
    assert!(matches!(result, Err(StoreError::Schema(_))));
}
