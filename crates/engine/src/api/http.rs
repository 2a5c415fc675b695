//! HTTP routes.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;
use vtm_builder_domain::reference::clan_name;
use vtm_builder_domain::value_objects::{DEFAULT_DIFFICULTY, DEFAULT_POOL};
use vtm_builder_domain::{
    AbilityCategory, AttributeGroup, Clan, ConceptField, DicePoolResult, FreebieTarget,
    PrioritySlot, SheetSection, SpecialtyTarget, TraitKey,
};

use crate::app::App;
use crate::infrastructure::ports::{SessionError, StoreError};
use crate::stores::{SessionId, SessionSummary};
use crate::use_cases::{
    reference_data, ActionOutcome, BuilderAction, ImportOutcome, ReferenceData, SavedSheet,
    SessionSnapshot,
};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/reference", get(reference))
        .route("/api/sheets", get(list_saved_sheets))
        .route("/api/dice/roll", post(roll_dice))
        .route("/api/sessions", get(list_sessions).post(create_session))
        .route("/api/sessions/{id}", get(get_session).delete(delete_session))
        .route("/api/sessions/{id}/actions", post(apply_action))
        // Concept page
        .route("/api/sessions/{id}/concept/{field}", put(set_concept_field))
        .route("/api/sessions/{id}/clan", put(set_clan))
        .route("/api/sessions/{id}/generation", put(set_generation))
        // Allocation
        .route(
            "/api/sessions/{id}/priorities/attributes",
            put(set_attribute_priority),
        )
        .route(
            "/api/sessions/{id}/priorities/abilities",
            put(set_ability_priority),
        )
        .route("/api/sessions/{id}/traits/increment", post(increment))
        .route("/api/sessions/{id}/traits/decrement", post(decrement))
        .route("/api/sessions/{id}/specialties", put(set_specialty))
        .route("/api/sessions/{id}/notes", put(set_notes))
        .route("/api/sessions/{id}/merits-flaws", put(set_merits_flaws))
        .route("/api/sessions/{id}/clear/{section}", post(clear_section))
        // Freebies
        .route("/api/sessions/{id}/freebies/buy", post(buy))
        .route("/api/sessions/{id}/freebies/refund", post(refund))
        .route("/api/sessions/{id}/freebies/prime", post(prime_disciplines))
        .route(
            "/api/sessions/{id}/freebies/pool/increase",
            post(increase_pool),
        )
        .route(
            "/api/sessions/{id}/freebies/pool/decrease",
            post(decrease_pool),
        )
        // Transfer
        .route("/api/sessions/{id}/export", get(export_sheet))
        .route("/api/sessions/{id}/import", post(import_sheet))
        .route("/api/sessions/{id}/save", post(save_sheet))
        .route("/api/sessions/{id}/load/{name}", post(load_sheet))
}

async fn health() -> &'static str {
    "OK"
}

async fn reference() -> Json<ReferenceData> {
    Json(reference_data())
}

// =============================================================================
// Sessions
// =============================================================================

async fn create_session(State(app): State<Arc<App>>) -> Json<SessionSnapshot> {
    Json(app.use_cases.session.create())
}

async fn list_sessions(State(app): State<Arc<App>>) -> Json<Vec<SessionSummary>> {
    Json(app.use_cases.session.list())
}

async fn get_session(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    Ok(Json(app.use_cases.session.get(SessionId::from_uuid(id))?))
}

async fn delete_session(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    app.use_cases.session.delete(SessionId::from_uuid(id))?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Builder actions
// =============================================================================

type ActionResult = Result<Json<ActionOutcome>, ApiError>;

fn run(app: &App, id: Uuid, action: BuilderAction) -> ActionResult {
    Ok(Json(
        app.use_cases.edit.execute(SessionId::from_uuid(id), action)?,
    ))
}

async fn apply_action(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(action): Json<BuilderAction>,
) -> ActionResult {
    run(&app, id, action)
}

#[derive(Debug, Deserialize)]
struct ValueBody {
    value: String,
}

#[derive(Debug, Deserialize)]
struct TextBody {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ClanBody {
    #[serde(default, with = "clan_name")]
    clan: Option<Clan>,
}

#[derive(Debug, Deserialize)]
struct GenerationBody {
    generation: u8,
}

#[derive(Debug, Deserialize)]
struct AttributePriorityBody {
    slot: PrioritySlot,
    group: AttributeGroup,
}

#[derive(Debug, Deserialize)]
struct AbilityPriorityBody {
    slot: PrioritySlot,
    category: AbilityCategory,
}

#[derive(Debug, Deserialize)]
struct SpecialtyBody {
    target: SpecialtyTarget,
    text: String,
}

async fn set_concept_field(
    State(app): State<Arc<App>>,
    Path((id, field)): Path<(Uuid, ConceptField)>,
    Json(body): Json<ValueBody>,
) -> ActionResult {
    run(
        &app,
        id,
        BuilderAction::SetConcept {
            field,
            value: body.value,
        },
    )
}

async fn set_clan(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(body): Json<ClanBody>,
) -> ActionResult {
    run(&app, id, BuilderAction::SetClan { clan: body.clan })
}

async fn set_generation(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(body): Json<GenerationBody>,
) -> ActionResult {
    run(
        &app,
        id,
        BuilderAction::SetGeneration {
            generation: body.generation,
        },
    )
}

async fn set_attribute_priority(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(body): Json<AttributePriorityBody>,
) -> ActionResult {
    run(
        &app,
        id,
        BuilderAction::SetAttributePriority {
            slot: body.slot,
            group: body.group,
        },
    )
}

async fn set_ability_priority(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(body): Json<AbilityPriorityBody>,
) -> ActionResult {
    run(
        &app,
        id,
        BuilderAction::SetAbilityPriority {
            slot: body.slot,
            category: body.category,
        },
    )
}

async fn increment(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(key): Json<TraitKey>,
) -> ActionResult {
    run(&app, id, BuilderAction::Increment { key })
}

async fn decrement(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(key): Json<TraitKey>,
) -> ActionResult {
    run(&app, id, BuilderAction::Decrement { key })
}

async fn set_specialty(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(body): Json<SpecialtyBody>,
) -> ActionResult {
    run(
        &app,
        id,
        BuilderAction::SetSpecialty {
            target: body.target,
            text: body.text,
        },
    )
}

async fn set_notes(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(body): Json<TextBody>,
) -> ActionResult {
    run(&app, id, BuilderAction::SetNotes { text: body.text })
}

async fn set_merits_flaws(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(body): Json<TextBody>,
) -> ActionResult {
    run(&app, id, BuilderAction::SetMeritsFlaws { text: body.text })
}

async fn clear_section(
    State(app): State<Arc<App>>,
    Path((id, section)): Path<(Uuid, SheetSection)>,
) -> ActionResult {
    run(&app, id, BuilderAction::Clear { section })
}

async fn buy(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(target): Json<FreebieTarget>,
) -> ActionResult {
    run(&app, id, BuilderAction::Buy { target })
}

async fn refund(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(target): Json<FreebieTarget>,
) -> ActionResult {
    run(&app, id, BuilderAction::Refund { target })
}

async fn prime_disciplines(State(app): State<Arc<App>>, Path(id): Path<Uuid>) -> ActionResult {
    run(&app, id, BuilderAction::PrimeDisciplines)
}

async fn increase_pool(State(app): State<Arc<App>>, Path(id): Path<Uuid>) -> ActionResult {
    run(&app, id, BuilderAction::IncreasePool)
}

async fn decrease_pool(State(app): State<Arc<App>>, Path(id): Path<Uuid>) -> ActionResult {
    run(&app, id, BuilderAction::DecreasePool)
}

// =============================================================================
// Transfer
// =============================================================================

async fn export_sheet(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let document = app.use_cases.transfer.export(SessionId::from_uuid(id))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], document))
}

/// The body is the raw sheet document so the domain can report precise
/// parse errors.
async fn import_sheet(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    body: String,
) -> Result<Json<ImportOutcome>, ApiError> {
    Ok(Json(
        app.use_cases
            .transfer
            .import(SessionId::from_uuid(id), &body)?,
    ))
}

#[derive(Debug, Deserialize)]
struct SaveParams {
    name: Option<String>,
}

async fn save_sheet(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Query(params): Query<SaveParams>,
) -> Result<Json<SavedSheet>, ApiError> {
    let saved = app
        .use_cases
        .transfer
        .save(SessionId::from_uuid(id), params.name)
        .await?;
    Ok(Json(saved))
}

async fn load_sheet(
    State(app): State<Arc<App>>,
    Path((id, name)): Path<(Uuid, String)>,
) -> Result<Json<ImportOutcome>, ApiError> {
    let outcome = app
        .use_cases
        .transfer
        .load(SessionId::from_uuid(id), &name)
        .await?;
    Ok(Json(outcome))
}

async fn list_saved_sheets(State(app): State<Arc<App>>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(app.use_cases.transfer.list_saved().await?))
}

// =============================================================================
// Dice
// =============================================================================

#[derive(Debug, Deserialize)]
struct RollRequest {
    #[serde(default = "default_pool")]
    pool: u8,
    #[serde(default = "default_difficulty")]
    difficulty: u8,
    #[serde(default)]
    seed: Option<u64>,
}

fn default_pool() -> u8 {
    DEFAULT_POOL
}

fn default_difficulty() -> u8 {
    DEFAULT_DIFFICULTY
}

async fn roll_dice(
    State(app): State<Arc<App>>,
    Json(request): Json<RollRequest>,
) -> Result<Json<DicePoolResult>, ApiError> {
    let result = app
        .use_cases
        .dice
        .execute(request.pool, request.difficulty, request.seed)?;
    Ok(Json(result))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::NotFound(_) | SessionError::Store(StoreError::NotFound(_)) => {
                ApiError::NotFound
            }
            SessionError::Domain(_) | SessionError::Dice(_) => ApiError::BadRequest(e.to_string()),
            SessionError::Store(StoreError::Io { .. }) => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedClock, SeededRandom};
    use crate::infrastructure::sheet_store::FileSheetStore;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn router(sheet_dir: &std::path::Path) -> Router {
        let app = App::with_ports(
            Arc::new(FileSheetStore::new(sheet_dir)),
            Arc::new(FixedClock(Utc.with_ymd_and_hms(2026, 3, 1, 20, 0, 0).unwrap())),
            Arc::new(SeededRandom::new(7)),
        );
        routes().with_state(Arc::new(app))
    }

    async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        let response = router
            .clone()
            .oneshot(builder.body(body).expect("request"))
            .await
            .expect("response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, value)
    }

    async fn new_session(router: &Router) -> String {
        let (status, body) = send(router, Method::POST, "/api/sessions", None).await;
        assert_eq!(status, StatusCode::OK);
        body["id"].as_str().expect("id").to_string()
    }

    #[tokio::test]
    async fn health_check() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let router = router(temp_dir.path());
        let (status, body) = send(&router, Method::GET, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::String("OK".into()));
    }

    #[tokio::test]
    async fn build_flow_over_http() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let router = router(temp_dir.path());
        let id = new_session(&router).await;

        let (status, body) = send(
            &router,
            Method::POST,
            &format!("/api/sessions/{id}/traits/increment"),
            Some(json!({"kind": "attribute", "name": "Strength"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["applied"], true);
        assert_eq!(body["sheet"]["attributes"][0]["traits"][0]["total"], 2);

        let (_, body) = send(
            &router,
            Method::PUT,
            &format!("/api/sessions/{id}/clan"),
            Some(json!({"clan": "Gangrel"})),
        )
        .await;
        assert_eq!(body["sheet"]["clan"], "Gangrel");

        let (_, body) = send(
            &router,
            Method::POST,
            &format!("/api/sessions/{id}/freebies/buy"),
            Some(json!({"kind": "discipline", "name": "Protean"})),
        )
        .await;
        assert_eq!(body["applied"], true);
        assert_eq!(body["sheet"]["freebiePool"], 8);

        let (_, body) = send(
            &router,
            Method::PUT,
            &format!("/api/sessions/{id}/concept/name"),
            Some(json!({"value": "Beckett"})),
        )
        .await;
        assert_eq!(body["sheet"]["name"], "Beckett");
    }

    #[tokio::test]
    async fn refused_action_reports_not_applied() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let router = router(temp_dir.path());
        let id = new_session(&router).await;

        let (status, body) = send(
            &router,
            Method::POST,
            &format!("/api/sessions/{id}/traits/decrement"),
            Some(json!({"kind": "virtue", "name": "Courage"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["applied"], false);
    }

    #[tokio::test]
    async fn generic_action_route() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let router = router(temp_dir.path());
        let id = new_session(&router).await;

        let (_, body) = send(
            &router,
            Method::POST,
            &format!("/api/sessions/{id}/actions"),
            Some(json!({"action": "set_generation", "generation": 8})),
        )
        .await;
        assert_eq!(body["applied"], true);
        assert_eq!(body["sheet"]["generation"]["bloodPerTurn"], 3);
    }

    #[tokio::test]
    async fn unknown_session_is_404() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let router = router(temp_dir.path());
        let uri = format!("/api/sessions/{}", Uuid::nil());
        let (status, _) = send(&router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&router, Method::POST, &format!("{uri}/freebies/pool/increase"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_session() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let router = router(temp_dir.path());
        let id = new_session(&router).await;

        let (status, _) = send(&router, Method::DELETE, &format!("/api/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, list) = send(&router, Method::GET, "/api/sessions", None).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn export_import_between_sessions() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let router = router(temp_dir.path());
        let source = new_session(&router).await;
        send(
            &router,
            Method::PUT,
            &format!("/api/sessions/{source}/clan"),
            Some(json!({"clan": "Tremere"})),
        )
        .await;

        let (status, document) =
            send(&router, Method::GET, &format!("/api/sessions/{source}/export"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(document["builder"]["concept"]["clan"], "Tremere");

        let target = new_session(&router).await;
        let (status, body) = send(
            &router,
            Method::POST,
            &format!("/api/sessions/{target}/import"),
            Some(document),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["imported"]["builder"], true);
        assert_eq!(body["sheet"]["clan"], "Tremere");
    }

    #[tokio::test]
    async fn bad_import_is_400() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let router = router(temp_dir.path());
        let id = new_session(&router).await;

        let (_, mut document) =
            send(&router, Method::GET, &format!("/api/sessions/{id}/export"), None).await;
        document["builder"]["backgrounds"] = json!({"Allies": 9});
        let (status, body) = send(
            &router,
            Method::POST,
            &format!("/api/sessions/{id}/import"),
            Some(document),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.as_str().expect("message").contains("Validation failed"));
    }

    #[tokio::test]
    async fn save_and_load_through_store() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let router = router(temp_dir.path());
        let id = new_session(&router).await;
        send(
            &router,
            Method::PUT,
            &format!("/api/sessions/{id}/concept/name"),
            Some(json!({"value": "Anatole"})),
        )
        .await;

        let (status, body) =
            send(&router, Method::POST, &format!("/api/sessions/{id}/save"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Anatole");
        assert!(temp_dir.path().join("Anatole.json").exists());

        let (_, sheets) = send(&router, Method::GET, "/api/sheets", None).await;
        assert_eq!(sheets, json!(["Anatole"]));

        let other = new_session(&router).await;
        let (status, body) = send(
            &router,
            Method::POST,
            &format!("/api/sessions/{other}/load/Anatole"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sheet"]["name"], "Anatole");

        let (status, _) = send(
            &router,
            Method::POST,
            &format!("/api/sessions/{other}/load/Missing"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn dice_rolls() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let router = router(temp_dir.path());

        let request = json!({"pool": 6, "difficulty": 7, "seed": 99});
        let (status, first) = send(&router, Method::POST, "/api/dice/roll", Some(request.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["rolls"].as_array().expect("rolls").len(), 6);
        let (_, second) = send(&router, Method::POST, "/api/dice/roll", Some(request)).await;
        assert_eq!(first, second);

        let (status, _) = send(&router, Method::POST, "/api/dice/roll", Some(json!({"pool": 0}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn reference_lists_clans() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let router = router(temp_dir.path());
        let (status, body) = send(&router, Method::GET, "/api/reference", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["clans"].as_array().expect("clans").len(), 11);
    }
}
