//! Gemini provider tests against a local mock endpoint

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    use crate::infrastructure::llm::{
        GeminiConfig, GeminiProvider, GenerationError, GenerationOptions, Generator,
    };

    /// Echoes the key and request body back as the candidate text.
    async fn echo(
        Query(query): Query<HashMap<String, String>>,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        let key = query.get("key").cloned().unwrap_or_default();
        Json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": format!("  {}|{}  ", key, body) }] }
            }]
        }))
    }

    async fn start_mock() -> String {
        let app = Router::new()
            .route("/ok", post(echo))
            .route(
                "/status",
                post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "overloaded") }),
            )
            .route("/malformed", post(|| async { Json(json!({ "foo": 1 })) }))
            .route("/not-json", post(|| async { "<html>oops</html>" }))
            .route(
                "/blank",
                post(|| async {
                    Json(json!({ "candidates": [{ "content": { "parts": [{ "text": "   " }] } }] }))
                }),
            )
            .route(
                "/slow",
                post(|| async {
                    tokio::time::sleep(Duration::from_secs(3)).await;
                    Json(json!({}))
                }),
            );

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock");
        let addr = listener.local_addr().expect("mock addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });
        format!("http://{}", addr)
    }

    fn provider(base: &str, path: &str, key: Option<&str>) -> GeminiProvider {
        let config = GeminiConfig {
            endpoint: format!("{}{}", base, path),
            api_key: key.map(str::to_string),
            timeout_secs: 1,
            ..GeminiConfig::default()
        };
        GeminiProvider::new(&config).expect("provider")
    }

    #[tokio::test]
    async fn test_extracts_trimmed_first_text() {
        let base = start_mock().await;
        let gemini = provider(&base, "/ok", Some("secret"));

        let options = GenerationOptions::conversation();
        let text = gemini.generate("Hi there", Some(&options)).await.unwrap();

        let (key, body) = text.split_once('|').unwrap();
        assert_eq!(key, "secret");
        let body: Value = serde_json::from_str(body).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Hi there");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 500);
        assert_eq!(body["generationConfig"]["topK"], 30);
    }

    #[tokio::test]
    async fn test_defaults_when_no_options() {
        let base = start_mock().await;
        let gemini = provider(&base, "/ok", Some("k"));

        let text = gemini.generate("x", None).await.unwrap();
        let body: Value = serde_json::from_str(text.split_once('|').unwrap().1).unwrap();
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 2000);
        assert_eq!(body["generationConfig"]["topK"], 40);
    }

    #[tokio::test]
    async fn test_itinerary_options_omit_unset_fields() {
        let base = start_mock().await;
        let gemini = provider(&base, "/ok", Some("k"));

        let options = GenerationOptions::itinerary();
        let text = gemini.generate("x", Some(&options)).await.unwrap();
        let body: Value = serde_json::from_str(text.split_once('|').unwrap().1).unwrap();
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 3000);
        assert!(body["generationConfig"].get("topP").is_none());
    }

    #[tokio::test]
    async fn test_bad_status_is_tagged() {
        let base = start_mock().await;
        let err = provider(&base, "/status", Some("k"))
            .generate("x", None)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GenerationError::Status { status: 503, body: "overloaded".to_string() }
        );
    }

    #[tokio::test]
    async fn test_malformed_payloads_are_tagged() {
        let base = start_mock().await;
        for path in ["/malformed", "/not-json"] {
            let err = provider(&base, path, Some("k")).generate("x", None).await.unwrap_err();
            assert_eq!(err.kind(), "malformed", "{}: {}", path, err);
        }
        let err = provider(&base, "/blank", Some("k")).generate("x", None).await.unwrap_err();
        assert_eq!(err, GenerationError::EmptyResponse);
    }

    #[tokio::test]
    async fn test_timeout_is_tagged() {
        let base = start_mock().await;
        let err = provider(&base, "/slow", Some("k")).generate("x", None).await.unwrap_err();
        assert_eq!(err, GenerationError::Timeout);
    }

    #[tokio::test]
    async fn test_missing_key_sends_nothing() {
        // Nothing listens on port 9; any request would be a network error.
        let gemini = provider("http://127.0.0.1:9", "/ok", None);
        assert_eq!(gemini.generate("x", None).await, Err(GenerationError::MissingApiKey));

        let blank = provider("http://127.0.0.1:9", "/ok", Some(""));
        assert_eq!(blank.generate("x", None).await, Err(GenerationError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network() {
        let gemini = provider("http://127.0.0.1:9", "/ok", Some("k"));
        let err = gemini.generate("x", None).await.unwrap_err();
        assert_eq!(err.kind(), "network");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = GeminiConfig {
            api_key: Some("super-secret".to_string()),
            ..GeminiConfig::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
