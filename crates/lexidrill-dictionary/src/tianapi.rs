//! tianapi English-words dictionary client.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use lexidrill_core::error::DictionaryError;
use lexidrill_core::model::Definition;
use lexidrill_core::traits::Dictionary;

const DEFAULT_BASE_URL: &str = "https://apis.tianapi.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// API-level success code inside the JSON body.
const API_OK: i64 = 200;

/// Client for `GET {base_url}/enwords/index?key=...&word=...`.
pub struct TianapiDictionary {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl TianapiDictionary {
    pub fn new(api_key: &str, base_url: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            api_key: api_key.to_string(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client,
        }
    }
}

#[derive(Deserialize)]
struct TianapiResponse {
    code: i64,
    #[serde(default)]
    msg: String,
    #[serde(default)]
    result: Option<TianapiResult>,
}

#[derive(Deserialize)]
struct TianapiResult {
    #[serde(default)]
    word: String,
    #[serde(default)]
    content: String,
}

#[async_trait]
impl Dictionary for TianapiDictionary {
    fn name(&self) -> &str {
        "tianapi"
    }

    #[instrument(skip(self))]
    async fn lookup(&self, word: &str) -> anyhow::Result<Definition> {
        let response = self
            .client
            .get(format!("{}/enwords/index", self.base_url))
            .query(&[("key", self.api_key.as_str()), ("word", word)])
            .send()
            .await
            .map_err(|e| DictionaryError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(DictionaryError::HttpStatus { status }.into());
        }

        let body: TianapiResponse = response
            .json()
            .await
            .map_err(|e| DictionaryError::InvalidResponse(e.to_string()))?;

        if body.code != API_OK {
            return Err(DictionaryError::NotFound { message: body.msg }.into());
        }

        let result = body.result.ok_or_else(|| {
            DictionaryError::InvalidResponse("success response without result".into())
        })?;

        // The endpoint never supplies a part of speech; the field stays
        // empty rather than being guessed.
        Ok(Definition {
            word: result.word,
            part_of_speech: String::new(),
            meaning: result.content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn successful_lookup() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "code": 200,
            "msg": "success",
            "result": {"word": "run", "content": "v. to move fast"}
        });

        Mock::given(method("GET"))
            .and(path("/enwords/index"))
            .and(query_param("key", "test-key"))
            .and(query_param("word", "run"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let dictionary = TianapiDictionary::new("test-key", Some(server.uri()));
        let definition = dictionary.lookup("run").await.unwrap();

        assert_eq!(definition.word, "run");
        assert_eq!(definition.meaning, "v. to move fast");
        assert_eq!(definition.part_of_speech, "");
    }

    #[tokio::test]
    async fn api_error_surfaces_the_message() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "code": 250,
            "msg": "word error"
        });

        Mock::given(method("GET"))
            .and(path("/enwords/index"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let dictionary = TianapiDictionary::new("test-key", Some(server.uri()));
        let err = dictionary.lookup("nonsense").await.unwrap_err();

        let dict_err = err.downcast_ref::<DictionaryError>().unwrap();
        assert!(dict_err.is_not_found());
        assert!(err.to_string().contains("word error"));
    }

    #[tokio::test]
    async fn http_failure_is_not_a_hit() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/enwords/index"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let dictionary = TianapiDictionary::new("test-key", Some(server.uri()));
        let err = dictionary.lookup("run").await.unwrap_err();

        match err.downcast_ref::<DictionaryError>().unwrap() {
            DictionaryError::HttpStatus { status } => assert_eq!(*status, 500),
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/enwords/index"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let dictionary = TianapiDictionary::new("test-key", Some(server.uri()));
        let err = dictionary.lookup("run").await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<DictionaryError>().unwrap(),
            DictionaryError::InvalidResponse(_)
        ));
    }

    #[tokio::test]
    async fn success_without_result_is_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/enwords/index"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"code": 200, "msg": "success"})),
            )
            .mount(&server)
            .await;

        let dictionary = TianapiDictionary::new("test-key", Some(server.uri()));
        let err = dictionary.lookup("run").await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<DictionaryError>().unwrap(),
            DictionaryError::InvalidResponse(_)
        ));
    }
}
