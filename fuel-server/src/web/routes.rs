//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::planner::PlanError;
use crate::routing::RouteError;
use crate::trip::TripError;

use super::dto::{ErrorResponse, TripResponse};
use super::state::AppState;

/// Message for a route provider that found no road connection.
const NO_ROUTE_MESSAGE: &str = "Could not calculate a valid route between these cities. \
    They might be too far apart or not connected by roads. \
    Please check the city names and try again.";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/trip/:start_city/:finish_city", get(plan_trip))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> AppError {
    AppError::NotFound {
        message: "no such endpoint".to_string(),
    }
}

/// Plan a trip between two city slugs.
async fn plan_trip(
    State(state): State<AppState>,
    Path((start_city, finish_city)): Path<(String, String)>,
) -> Result<Json<TripResponse>, AppError> {
    let outcome = state.planner.plan(&start_city, &finish_city).await?;
    Ok(Json(TripResponse::from(&outcome)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl From<TripError> for AppError {
    fn from(e: TripError) -> Self {
        match e {
            TripError::City(e) => AppError::BadRequest {
                message: e.to_string(),
            },
            TripError::Route(RouteError::NoRoute | RouteError::Geometry(_)) => {
                AppError::BadRequest {
                    message: NO_ROUTE_MESSAGE.to_string(),
                }
            }
            TripError::Route(e) => AppError::BadGateway {
                message: e.to_string(),
            },
            TripError::Plan(e @ PlanError::InvalidRoute { .. }) => AppError::BadRequest {
                message: e.to_string(),
            },
            TripError::Plan(e) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::cities::{CityDirectory, CityError};
    use crate::domain::{FuelStation, GeoPoint, StationId};
    use crate::planner::TripConfig;
    use crate::routing::{CachedRouter, FallbackRouter, RouteCacheConfig, RouteSource, StaticRouter};
    use crate::stations::InMemoryCatalog;
    use crate::trip::TripPlanner;

    fn pt(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn app() -> Router {
        let cities = CityDirectory::new([
            ("Houston".to_string(), pt(29.76, -95.37)),
            ("Dallas".to_string(), pt(32.78, -96.80)),
            ("Minneapolis".to_string(), pt(44.98, -93.27)),
        ]);
        let catalog = InMemoryCatalog::new(vec![
            FuelStation::new(
                StationId::parse("101").unwrap(),
                Some("I-45, EXIT 60".into()),
                3.10,
                pt(29.80, -95.35),
            )
            .unwrap(),
            FuelStation::new(StationId::parse("202").unwrap(), None, 3.30, pt(35.40, -94.30))
                .unwrap(),
            FuelStation::new(StationId::parse("303").unwrap(), None, 3.20, pt(39.60, -93.80))
                .unwrap(),
        ]);
        let router = CachedRouter::new(
            FallbackRouter::from_sources(vec![RouteSource::Straight(StaticRouter::default())]),
            &RouteCacheConfig::default(),
        );

        let planner = TripPlanner::new(router, catalog, cities, TripConfig::default(), 3.25);
        create_router(AppState::new(planner))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn health_check() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_path() {
        let (status, json) = get_json("/api/route/houston").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "no such endpoint");
    }

    #[tokio::test]
    async fn short_trip() {
        let (status, json) = get_json("/api/trip/houston/dallas").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "estimated");
        assert!(json["optimal_stations"].as_array().unwrap().is_empty());
        assert!(json["total_fuel_cost"].as_f64().unwrap() > 0.0);
        assert_eq!(json["route_map"]["coordinates"][0][0], 29.76);
    }

    #[tokio::test]
    async fn long_trip_lists_stations() {
        let (status, json) = get_json("/api/trip/houston/minneapolis").await;

        assert_eq!(status, StatusCode::OK);
        let stops = json["optimal_stations"].as_array().unwrap();
        assert!(!stops.is_empty());
        assert_eq!(stops[0]["station_id"], "101");
        assert_eq!(stops[0]["address"], "I-45, EXIT 60");

        let sum: f64 = stops.iter().map(|s| s["cost"].as_f64().unwrap()).sum();
        let total = json["total_fuel_cost"].as_f64().unwrap();
        assert!((total - sum).abs() < 0.01);
    }

    #[tokio::test]
    async fn bad_requests() {
        let (status, json) = get_json("/api/trip/Houston/dallas").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("lowercase"));

        let (status, json) = get_json("/api/trip/dallas/dallas").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], CityError::SameCity.to_string());

        let (status, json) = get_json("/api/trip/dallas/gotham").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json["error"],
            "Only cities within the United States are available."
        );
    }

    #[test]
    fn error_status_mapping() {
        let cases = [
            (
                AppError::from(TripError::Route(RouteError::AllProvidersFailed)),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::from(TripError::Route(RouteError::NoRoute)),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::from(TripError::Plan(PlanError::InvalidRoute { points: 1 })),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::from(TripError::Plan(PlanError::InvalidConfig("bad"))),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::NotFound {
                    message: "missing".into(),
                },
                StatusCode::NOT_FOUND,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
