//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::domain::{NetworkError, Route};
use crate::sample::NetworkDescription;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations).post(add_station))
        .route("/connections", post(add_connection))
        .route("/lines", get(list_lines))
        .route("/network", get(export_network))
        .route("/route/least-transfers", get(least_transfers))
        .route("/route/fastest", get(fastest_route))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All stations in registration order.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let network = state.network.read().await;
    let stations = network
        .stations()
        .map(|s| StationResult::from(s.as_ref()))
        .collect();
    Json(StationsResponse { stations })
}

/// Stations grouped by line.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let network = state.network.read().await;
    let lines = network
        .lines()
        .map(|(line, stations)| LineResult::new(line, stations))
        .collect();
    Json(LinesResponse { lines })
}

/// The whole network as a loadable description.
async fn export_network(State(state): State<AppState>) -> Json<NetworkDescription> {
    let network = state.network.read().await;
    Json(NetworkDescription::from_network(&network))
}

/// Register a station.
async fn add_station(
    State(state): State<AppState>,
    Json(req): Json<AddStationRequest>,
) -> Result<(StatusCode, Json<StationResult>), AppError> {
    let mut network = state.network.write().await;
    let station = network.add_station(req.id, req.name, req.line)?;
    info!(id = %station.id(), "station added via API");
    Ok((StatusCode::CREATED, Json(StationResult::from(station.as_ref()))))
}

/// Connect two stations.
async fn add_connection(
    State(state): State<AppState>,
    Json(req): Json<AddConnectionRequest>,
) -> Result<(StatusCode, Json<ConnectionResult>), AppError> {
    let mut network = state.network.write().await;
    network.add_connection(&req.from, &req.to, req.minutes)?;

    let connection = network
        .connection_minutes(&req.from, &req.to)
        .map(|minutes| ConnectionResult::new(&req.from, &req.to, minutes))
        .ok_or_else(|| AppError::Internal {
            message: format!("connection {} -> {} missing after insert", req.from, req.to),
        })?;

    info!(from = %req.from, to = %req.to, minutes = req.minutes, "connection added via API");
    Ok((StatusCode::CREATED, Json(connection)))
}

/// Route with the fewest connections.
async fn least_transfers(
    State(state): State<AppState>,
    Query(req): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    let network = state.network.read().await;
    let route = network.find_least_transfers(&req.from, &req.to)?;
    Ok(Json(route_response(req, route)))
}

/// Route with the least travel time.
async fn fastest_route(
    State(state): State<AppState>,
    Query(req): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    let network = state.network.read().await;
    let route = network.find_fastest_route(&req.from, &req.to)?;
    Ok(Json(route_response(req, route)))
}

fn route_response(req: RouteQuery, route: Option<Route>) -> RouteResponse {
    RouteResponse {
        from: req.from,
        to: req.to,
        route: route.as_ref().map(RouteResult::from),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        let message = e.to_string();
        match e {
            NetworkError::UnknownStation(_) => AppError::NotFound { message },
            NetworkError::DuplicateStation(_) => AppError::Conflict { message },
            NetworkError::InvalidWeight { .. } | NetworkError::InvalidConnection(_) => {
                AppError::BadRequest { message }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(status = %status, error = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::ankara_network;

    fn state() -> AppState {
        AppState::new(ankara_network().unwrap())
    }

    fn query(from: &str, to: &str) -> Query<RouteQuery> {
        Query(RouteQuery {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[tokio::test]
    async fn health_check() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn fastest_route_endpoint() {
        let Json(response) = fastest_route(State(state()), query("M1", "K4"))
            .await
            .unwrap();

        let route = response.route.unwrap();
        assert_eq!(route.total_minutes, 25);
        assert_eq!(
            route.summary,
            "ASTI -> Kizilay -> Kizilay -> Ulus -> Demetevler -> OSB"
        );
        assert_eq!(response.from, "M1");
    }

    #[tokio::test]
    async fn least_transfers_endpoint() {
        let Json(response) = least_transfers(State(state()), query("T1", "T4"))
            .await
            .unwrap();

        let route = response.route.unwrap();
        assert_eq!(route.hops, 3);
        assert_eq!(route.line_changes, 0);
    }

    #[tokio::test]
    async fn unknown_station_is_not_found() {
        let err = fastest_route(State(state()), query("M1", "NOPE"))
            .await
            .unwrap_err();
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn registration_then_query() {
        let state = state();

        let (status, Json(station)) = add_station(
            State(state.clone()),
            Json(AddStationRequest {
                id: "Y1".to_string(),
                name: "Kecioren".to_string(),
                line: "Yellow Line".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(station.line, "Yellow Line");

        // Not connected yet: a normal response with no route
        let Json(response) = fastest_route(State(state.clone()), query("M1", "Y1"))
            .await
            .unwrap();
        assert!(response.route.is_none());

        let (status, Json(connection)) = add_connection(
            State(state.clone()),
            Json(AddConnectionRequest {
                from: "T4".to_string(),
                to: "Y1".to_string(),
                minutes: 2,
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(connection.minutes, 2);

        let Json(response) = fastest_route(State(state), query("M1", "Y1"))
            .await
            .unwrap();
        assert_eq!(response.route.unwrap().total_minutes, 21);
    }

    #[tokio::test]
    async fn reconnecting_reports_replaced_time() {
        let state = state();

        let (_, Json(connection)) = add_connection(
            State(state.clone()),
            Json(AddConnectionRequest {
                from: "K2".to_string(),
                to: "K1".to_string(),
                minutes: 9,
            }),
        )
        .await
        .unwrap();
        assert_eq!(connection, ConnectionResult::new("K2", "K1", 9));
        assert_eq!(state.network.read().await.connection_minutes("K1", "K2"), Some(9));
    }

    #[tokio::test]
    async fn registration_errors_map_to_statuses() {
        let state = state();

        let err = add_station(
            State(state.clone()),
            Json(AddStationRequest {
                id: "K1".to_string(),
                name: "Kizilay".to_string(),
                line: "Red Line".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(status_of(err), StatusCode::CONFLICT);

        for (from, to, minutes, expected) in [
            ("K1", "K2", 0, StatusCode::BAD_REQUEST),
            ("K1", "K1", 3, StatusCode::BAD_REQUEST),
            ("K1", "Q1", 3, StatusCode::NOT_FOUND),
        ] {
            let err = add_connection(
                State(state.clone()),
                Json(AddConnectionRequest {
                    from: from.to_string(),
                    to: to.to_string(),
                    minutes,
                }),
            )
            .await
            .unwrap_err();
            assert_eq!(status_of(err), expected);
        }

        assert_eq!(state.network.read().await.connection_count(), 12);
    }

    #[tokio::test]
    async fn lines_and_stations_listing() {
        let state = state();

        let Json(stations) = list_stations(State(state.clone())).await;
        assert_eq!(stations.stations.len(), 12);
        assert_eq!(stations.stations[0].id, "K1");

        let Json(lines) = list_lines(State(state.clone())).await;
        let names: Vec<&str> = lines.lines.iter().map(|l| l.line.as_str()).collect();
        assert_eq!(names, vec!["Blue Line", "Orange Line", "Red Line"]);

        let Json(description) = export_network(State(state)).await;
        assert_eq!(description.connections.len(), 12);
    }
}
