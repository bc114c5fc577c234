//! Tournament state API handlers.
//!
//! - `GET /state` reports the round history and every player's scores
//! - `POST /state` records one table's result and reports the new state
//!
//! # Examples
//!
//! Read the state:
//! ```bash
//! curl http://localhost:5000/state
//! ```
//!
//! Record a score:
//! ```bash
//! curl -X POST http://localhost:5000/state \
//!   -H "Content-Type: application/json" \
//!   -d '{"North":"Ann","South":"Bob","West":"Cat","East":"Dan","NSScore":240,"WEScore":-100}'
//! ```

use axum::{
    Json,
    extract::{Extension, State, rejection::JsonRejection},
    http::StatusCode,
};
use five_hundred::tournament::{ScoreSubmission, StateSnapshot, TournamentError};
use serde::Serialize;

use super::{AppState, request_id::RequestId};
use crate::{logging, metrics};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a tournament error to its HTTP status
fn tournament_error(err: TournamentError) -> ApiError {
    let status = match err {
        TournamentError::SeatingNotFound { .. } => StatusCode::NOT_FOUND,
        TournamentError::RoundNotFinished { .. } => StatusCode::CONFLICT,
        TournamentError::ConfigurationInvalid { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// Report the full tournament state.
///
/// # Response
///
/// Returns `200 OK` with:
/// ```json
/// {
///   "Round": 2,
///   "TotalRounds": 3,
///   "Scores": [{"Player": "Ann", "Scores": [240]}],
///   "Rounds": [{"Seatings": [{"TableName": "T1", "North": "Ann", "South": "Bob",
///               "West": "Cat", "East": "Dan", "Finished": true,
///               "NSScore": 240, "WEScore": -100, "NSWins": true}]}]
/// }
/// ```
pub async fn get_state(State(state): State<AppState>) -> Json<StateSnapshot> {
    Json(state.tournament.snapshot().await)
}

/// Record a table's score.
///
/// North, South, West and East must match a seating of the current round
/// exactly, seat for seat. Re-submitting for the same seating replaces the
/// earlier result. When the last open table reports, the next round is
/// seated before the response is built.
///
/// # Response
///
/// Returns `200 OK` with the same body as [`get_state`].
///
/// # Errors
///
/// - `400 Bad Request`: Missing or malformed JSON body
/// - `404 Not Found`: No seating in the current round has these players in these seats
pub async fn post_score(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<ScoreSubmission>, JsonRejection>,
) -> Result<Json<StateSnapshot>, ApiError> {
    let Json(submission) = payload.map_err(|rejection| {
        metrics::score_rejections_total("malformed");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: rejection.body_text(),
            }),
        )
    })?;

    match state.tournament.record_score(&submission).await {
        Ok(recorded) => {
            metrics::scores_recorded_total();
            if recorded.advanced {
                metrics::rounds_advanced_total();
            }
            metrics::current_round(recorded.snapshot.round);

            tracing::info!(
                request_id = %request_id.0,
                round = recorded.snapshot.round,
                advanced = recorded.advanced,
                "Score recorded"
            );
            Ok(Json(recorded.snapshot))
        }
        Err(err) => {
            metrics::score_rejections_total(match err {
                TournamentError::SeatingNotFound { .. } => "seating_not_found",
                _ => "invalid_state",
            });
            logging::log_rejected_score(
                state.tournament.current_round_number().await,
                &err.to_string(),
            );
            Err(tournament_error(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tournament_error_status() {
        let (status, Json(body)) = tournament_error(TournamentError::SeatingNotFound {
            north: "Ann".to_string(),
            south: "Bob".to_string(),
            west: "Cat".to_string(),
            east: "Dan".to_string(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.error.contains("Ann"));

        let (status, _) = tournament_error(TournamentError::RoundNotFinished {
            round: 1,
            outstanding: 2,
        });
        assert_eq!(status, StatusCode::CONFLICT);
    }
}
