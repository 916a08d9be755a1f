//! REST API route handlers.
//!
//! `POST /ask` answers a chat message, `POST /generate` produces an HTML
//! itinerary.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Deserializer};
use serde_json::{json, Value};
use tracing::Instrument;

use crate::domain::entities::ItineraryRequest;
use crate::infrastructure::http::state::AppState;

pub const NO_MESSAGE: &str = "No message received.";
pub const UNPROCESSED: &str = "Sorry, I couldn't process that.";
pub const MISSING_FIELDS: &str = "Missing required fields";
pub const GENERATION_FAILED: &str = "Failed to generate itinerary";

// ---------------------------------------------------------------------------
// POST /ask
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct AskPayload {
    pub message: Option<String>,
    pub lang: Option<String>,
}

pub async fn ask(State(state): State<Arc<AppState>>, Json(payload): Json<AskPayload>) -> Json<Value> {
    let span = tracing::info_span!("ask", request_id = %uuid::Uuid::new_v4());

    async move {
        let message = match payload.message.as_deref() {
            Some(m) if !m.is_empty() => m,
            _ => return Json(json!({ "reply": NO_MESSAGE })),
        };
        let lang = payload.lang.as_deref().unwrap_or(&state.default_lang);

        let reply = state.assistant.respond(message, lang).await;
        let reply = if reply.is_empty() { UNPROCESSED.to_string() } else { reply };
        Json(json!({ "reply": reply }))
    }
    .instrument(span)
    .await
}

// ---------------------------------------------------------------------------
// POST /generate
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePayload {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub num_people: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub budget: Option<String>,
    pub destination: Option<String>,
    pub preferences: Option<String>,
    pub mode: Option<String>,
    pub refinement: Option<String>,
    pub lang: Option<String>,
}

impl GeneratePayload {
    /// `None` when any of start date, end date or destination is absent
    /// or blank.
    pub fn into_request(self, default_lang: &str) -> Option<ItineraryRequest> {
        let required = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        let start = required(self.start_date)?;
        let end = required(self.end_date)?;
        let destination = required(self.destination)?;

        Some(
            ItineraryRequest::new(start, end, destination)
                .with_people(self.num_people.unwrap_or_default())
                .with_budget(self.budget.unwrap_or_default())
                .with_preferences(self.preferences.unwrap_or_default())
                .with_mode(self.mode.unwrap_or_else(|| "budget".to_string()))
                .with_refinement(self.refinement.unwrap_or_default())
                .with_lang(self.lang.unwrap_or_else(|| default_lang.to_string())),
        )
    }
}

/// Accept `"4"` and `4` alike.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GeneratePayload>,
) -> (StatusCode, Json<Value>) {
    let span = tracing::info_span!("generate", request_id = %uuid::Uuid::new_v4());

    async move {
        let Some(request) = payload.into_request(&state.default_lang) else {
            tracing::debug!("rejecting itinerary request with missing fields");
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": MISSING_FIELDS })));
        };

        match state.itinerary.generate(&request).await {
            Ok(itinerary) => (StatusCode::OK, Json(json!({ "itinerary": itinerary }))),
            Err(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": GENERATION_FAILED })),
            ),
        }
    }
    .instrument(span)
    .await
}
