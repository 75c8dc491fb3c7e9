//! Dashboard service and its axum router
//!
//! ## Service Lifecycle
//!
//! ```rust,ignore
//! use measles_rubella_dashboard::server::DashboardService;
//!
//! // 1. Build the shared context once from the loaded dataset
//! let context = Arc::new(DashboardContext::build(&table)?);
//!
//! // 2. Wrap it in a service and convert to an axum router
//! let router = DashboardService::new(context, &settings.sessions).into_router();
//!
//! // 3. Serve with axum
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

use crate::config::SessionSettings;
use crate::domain::context::DashboardContext;
use crate::domain::dashboard::{DashboardView, DatasetSummary};
use crate::domain::disease::{DiseaseKind, Metric};
use crate::domain::explanations::{explanations_for, MetricExplanation};
use crate::domain::session::SessionId;
use crate::server::error_response::ApiError;
use crate::server::middleware::{logging_middleware, request_id_middleware};
use crate::server::sessions::SessionRegistry;
use crate::server::types::{
    paths, DiseaseSelection, MetricSelection, SessionCreated, YearRangeSelection,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    middleware::from_fn,
    routing::{get, post, put},
    Json, Router,
};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{info, warn};
use uuid::Uuid;

/// Shared dashboard state: one immutable context, many sessions
#[derive(Debug)]
pub struct DashboardService {
    context: Arc<DashboardContext>,
    sessions: SessionRegistry,
    body_limit: usize,
}

impl DashboardService {
    pub fn new(context: Arc<DashboardContext>, settings: &SessionSettings) -> Self {
        Self {
            context,
            sessions: SessionRegistry::new(
                settings.max_sessions,
                settings.idle_timeout_secs.as_duration(),
            ),
            body_limit: *settings.max_body_bytes.as_ref(),
        }
    }

    /// Resolve the current view of one session
    fn view_of(&self, id: SessionId) -> Result<DashboardView, ApiError> {
        let state = self
            .sessions
            .get(id)
            .ok_or(ApiError::SessionNotFound(id))?;
        Ok(self.context.snapshot(&state))
    }

    /// Convert the service into an axum router with its middleware stack
    pub fn into_router(self) -> Router {
        let body_limit = self.body_limit;

        Router::new()
            .route(paths::HEALTH, get(health_handler))
            .route(paths::DATASET, get(dataset_handler))
            .route(paths::EXPLANATIONS, get(explanations_handler))
            .route(paths::SESSIONS, post(open_session_handler))
            .route(
                paths::SESSION,
                get(session_view_handler).delete(close_session_handler),
            )
            .route(paths::SESSION_DISEASE, put(select_disease_handler))
            .route(paths::SESSION_METRIC, put(select_metric_handler))
            .route(paths::SESSION_YEAR_RANGE, put(select_year_range_handler))
            .with_state(Arc::new(self))
            .layer(RequestBodyLimitLayer::new(body_limit))
            .layer(from_fn(logging_middleware))
            // Outermost so every log line and response carries the ID
            .layer(from_fn(request_id_middleware))
    }
}

type SharedService = State<Arc<DashboardService>>;

/// Path and body extractors keep their rejection so it can be reported as an
/// `ApiError` body instead of axum's plain-text default
type SessionPath = Result<Path<Uuid>, PathRejection>;
type JsonBody<T> = Result<Json<T>, JsonRejection>;

fn session_id(path: SessionPath) -> Result<SessionId, ApiError> {
    let Path(id) = path?;
    Ok(SessionId::new(id))
}

async fn health_handler() -> &'static str {
    "OK"
}

async fn dataset_handler(State(service): SharedService) -> Json<DatasetSummary> {
    Json(service.context.summary())
}

async fn explanations_handler(
    Path(disease): Path<String>,
) -> Result<Json<Vec<MetricExplanation>>, ApiError> {
    let kind: DiseaseKind = disease.parse()?;
    Ok(Json(explanations_for(kind)))
}

async fn open_session_handler(
    State(service): SharedService,
) -> Result<(StatusCode, Json<SessionCreated>), ApiError> {
    let session = service
        .sessions
        .open(service.context.new_selection())
        .inspect_err(|err| warn!(error = %err, "Refusing new session"))?;
    info!(session_id = %session.id, "Dashboard session opened");

    let view = service.context.snapshot(&session.selection);
    Ok((
        StatusCode::CREATED,
        Json(SessionCreated {
            session_id: session.id,
            view,
        }),
    ))
}

async fn session_view_handler(
    State(service): SharedService,
    path: SessionPath,
) -> Result<Json<DashboardView>, ApiError> {
    service.view_of(session_id(path)?).map(Json)
}

async fn close_session_handler(
    State(service): SharedService,
    path: SessionPath,
) -> Result<StatusCode, ApiError> {
    let id = session_id(path)?;
    if service.sessions.close(id) {
        info!(session_id = %id, "Dashboard session closed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::SessionNotFound(id))
    }
}

async fn select_disease_handler(
    State(service): SharedService,
    path: SessionPath,
    body: JsonBody<DiseaseSelection>,
) -> Result<Json<DashboardView>, ApiError> {
    let id = session_id(path)?;
    let Json(body) = body
        .inspect_err(|err| warn!(session_id = %id, error = %err, "Malformed selection body"))?;
    let state = service
        .sessions
        .update(id, |state| {
            let disease: DiseaseKind = body.disease.parse()?;
            state.set_disease(disease);
            Ok(())
        })
        .inspect_err(|err| warn!(session_id = %id, error = %err, "Disease selection rejected"))?;
    Ok(Json(service.context.snapshot(&state)))
}

async fn select_metric_handler(
    State(service): SharedService,
    path: SessionPath,
    body: JsonBody<MetricSelection>,
) -> Result<Json<DashboardView>, ApiError> {
    let id = session_id(path)?;
    let Json(body) = body
        .inspect_err(|err| warn!(session_id = %id, error = %err, "Malformed selection body"))?;
    let state = service
        .sessions
        .update(id, |state| match body.metric.as_deref() {
            Some(name) => {
                let metric: Metric = name.parse()?;
                state.set_metric(metric)
            }
            None => {
                state.clear_metric();
                Ok(())
            }
        })
        .inspect_err(|err| warn!(session_id = %id, error = %err, "Metric selection rejected"))?;
    Ok(Json(service.context.snapshot(&state)))
}

async fn select_year_range_handler(
    State(service): SharedService,
    path: SessionPath,
    body: JsonBody<YearRangeSelection>,
) -> Result<Json<DashboardView>, ApiError> {
    let id = session_id(path)?;
    let Json(body) = body
        .inspect_err(|err| warn!(session_id = %id, error = %err, "Malformed selection body"))?;
    let state = service.sessions.update(id, |state| {
        state.set_year_range(body.from, body.to);
        Ok(())
    })?;
    Ok(Json(service.context.snapshot(&state)))
}
