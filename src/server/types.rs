//! Request and response bodies of the dashboard API

use crate::domain::dashboard::DashboardView;
use crate::domain::session::SessionId;
use serde::{Deserialize, Serialize};

/// Header name for request ID used for tracing and correlation
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Route paths
pub mod paths {
    pub const HEALTH: &str = "/health";
    pub const DATASET: &str = "/api/dataset";
    pub const EXPLANATIONS: &str = "/api/explanations/{disease}";
    pub const SESSIONS: &str = "/api/sessions";
    pub const SESSION: &str = "/api/sessions/{id}";
    pub const SESSION_DISEASE: &str = "/api/sessions/{id}/disease";
    pub const SESSION_METRIC: &str = "/api/sessions/{id}/metric";
    pub const SESSION_YEAR_RANGE: &str = "/api/sessions/{id}/year-range";
}

/// Body of `PUT /api/sessions/{id}/disease`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseSelection {
    pub disease: String,
}

/// Body of `PUT /api/sessions/{id}/metric`; `null` clears the selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSelection {
    pub metric: Option<String>,
}

/// Body of `PUT /api/sessions/{id}/year-range`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearRangeSelection {
    pub from: i32,
    pub to: i32,
}

/// Response of `POST /api/sessions`
#[derive(Debug, Clone, Serialize)]
pub struct SessionCreated {
    pub session_id: SessionId,
    pub view: DashboardView,
}
