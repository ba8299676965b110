//! JSON-over-HTTP prediction service.
//!
//! Every endpoint answers with HTTP 200; failures are reported as
//! `{"error": "..."}` bodies.
//!
//! | Method | Path             | Body                         |
//! |--------|------------------|------------------------------|
//! | POST   | `/predict`       | `{"symptoms": [..]}`         |
//! | POST   | `/batch_predict` | `{"symptoms_list": [[..]]}`  |
//! | GET    | `/health`        |                              |

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::http::Method;
use axum::routing::{get, post};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::error::Result;
use crate::predictor::{PredictionResult, Predictor, clean_symptoms};

/// Shared, read-only predictor.
pub type AppState = Arc<Predictor>;

#[derive(Debug, Default, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub symptoms: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BatchPredictRequest {
    #[serde(default)]
    pub symptoms_list: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchPredictResponse {
    pub predictions: Vec<PredictionResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
}

/// Either the payload or an error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Err { error: String },
    Ok(T),
}

impl<T> ApiResponse<T> {
    fn error<S: Into<String>>(message: S) -> Json<Self> {
        Json(Self::Err {
            error: message.into(),
        })
    }
}

/// Build the application router with permissive CORS for GET and POST.
pub fn router(predictor: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/predict", post(predict))
        .route("/batch_predict", post(batch_predict))
        .route("/health", get(health))
        .layer(cors)
        .with_state(predictor)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(predictor: Predictor, addr: SocketAddr) -> Result<()> {
    if !predictor.is_loaded() {
        log::warn!("Model not loaded. Train the model first with dosha-train.");
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("dosha-server listening on http://{addr}");
    axum::serve(listener, router(Arc::new(predictor))).await?;
    Ok(())
}

pub async fn predict(
    State(predictor): State<AppState>,
    body: Bytes,
) -> Json<ApiResponse<PredictionResult>> {
    let request: PredictRequest = match parse_body(&body) {
        Ok(request) => request,
        Err(message) => return ApiResponse::error(message),
    };

    if request.symptoms.is_empty() {
        return ApiResponse::error("No symptoms provided");
    }
    let Ok(symptoms) = clean_symptoms(&request.symptoms) else {
        return ApiResponse::error("No valid symptoms provided");
    };

    match predictor.predict(&symptoms) {
        Ok(result) => Json(ApiResponse::Ok(result)),
        Err(e) => ApiResponse::error(e.to_string()),
    }
}

pub async fn batch_predict(
    State(predictor): State<AppState>,
    body: Bytes,
) -> Json<ApiResponse<BatchPredictResponse>> {
    let request: BatchPredictRequest = match parse_body(&body) {
        Ok(request) => request,
        Err(message) => return ApiResponse::error(message),
    };

    if request.symptoms_list.is_empty() {
        return ApiResponse::error("No symptoms list provided");
    }

    let symptoms_list: Vec<Vec<String>> = request
        .symptoms_list
        .iter()
        .map(|symptoms| clean_symptoms(symptoms).unwrap_or_default())
        .collect();

    match predictor.predict_batch(&symptoms_list) {
        Ok(predictions) => Json(ApiResponse::Ok(BatchPredictResponse { predictions })),
        Err(e) => ApiResponse::error(e.to_string()),
    }
}

pub async fn health(State(predictor): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        model_loaded: predictor.is_loaded(),
    })
}

/// Parse a JSON body; an empty body or `null` reads as the default request.
fn parse_body<T: DeserializeOwned + Default>(body: &[u8]) -> std::result::Result<T, String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice::<Option<T>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| format!("Invalid JSON body: {e}"))
}
