use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use mahjong_core::{score as calc_score, ScoreRequest, ScoreResult};
use serde::Serialize;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr: SocketAddr = std::env::var("MAHJONG_WEB_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{}", addr);

    axum::serve(listener, app()).await?;
    Ok(())
}

fn app() -> Router {
    Router::new()
        .route("/api/v1/mahjong/faans", post(faans))
        .layer(TraceLayer::new_for_http())
}

async fn faans(
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResult>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError(e.body_text()))?;
    info!(?req, "score request");

    let result = calc_score(&req);
    info!(total_faans = result.total_faans, "score result");
    Ok(Json(result))
}

#[derive(Debug)]
struct ApiError(String);

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: "BAD_REQUEST",
                message: self.0,
            },
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mahjong_core::WinningHandType;
    use serde_json::{json, Value};

    fn request(body: Value) -> ScoreRequest {
        serde_json::from_value(body).unwrap()
    }

    fn hand(tiles: &str) -> Vec<&str> {
        tiles.split_whitespace().collect()
    }

    #[tokio::test]
    async fn scores_a_common_hand() {
        let req = request(json!({
            "handTiles": hand("D1 D2 D3 B2 B3 B4 C1 C2 C3 C4 C5 C6 D5 D5"),
            "bonusTiles": ["F1"],
            "wind": { "prevailing": "EAST", "seat": "EAST" },
            "winningConditions": { "selfPick": true }
        }));

        let Json(result) = faans(Ok(Json(req))).await.unwrap();
        let types: Vec<WinningHandType> =
            result.winning_hands.iter().map(|h| h.hand_type).collect();
        assert_eq!(
            types,
            vec![
                WinningHandType::CommonHand,
                WinningHandType::WinFromWall,
                WinningHandType::FlowerOfOwnWind,
                WinningHandType::SelfPick,
            ]
        );
        assert_eq!(result.total_faans, 4);
    }

    #[tokio::test]
    async fn accepts_chow_start_tiles() {
        let req = request(json!({
            "handTiles": hand("B2 B3 B4 C1 C2 C3 C4 C5 C6 D5 D5"),
            "exposedMelds": { "chows": ["D1"] }
        }));

        let Json(result) = faans(Ok(Json(req))).await.unwrap();
        assert_eq!(result.winning_hands[0].hand_type, WinningHandType::CommonHand);
        assert_eq!(result.winning_hands[0].name, "Common Hand");
        assert!(!result.winning_hands[0].limit_hand);
    }

    #[test]
    fn serializes_result_in_camel_case() {
        let req = request(json!({
            "handTiles": hand("D1 D1 D1 D2 D3 D4 D5 D6 D7 D8 D9 D9 D9 D9")
        }));
        let body = serde_json::to_value(calc_score(&req)).unwrap();
        assert_eq!(body["totalFaans"], 11);
        assert_eq!(body["winningHands"][0]["type"], "NINE_GATES");
        assert_eq!(body["winningHands"][0]["limitHand"], true);
    }

    #[test]
    fn error_is_bad_request() {
        let response = ApiError("unknown tile".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
