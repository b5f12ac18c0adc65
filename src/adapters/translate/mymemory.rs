//! MyMemory translation API client
//!
//! Free public translation endpoint:
//! `GET {base}/get?q=<text>&langpair=en|<code>`. Responses carry their own
//! status field in addition to the HTTP status.

use super::{Language, Translator};
use crate::config::TranslationConfig;
use crate::domain::{MailbookError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use std::time::Duration;

/// MyMemory REST translator
pub struct MyMemoryTranslator {
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "responseData")]
    response_data: ResponseData,
    #[serde(rename = "responseStatus")]
    response_status: i64,
    #[serde(rename = "responseDetails", default)]
    response_details: String,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl MyMemoryTranslator {
    /// Create a new translator from configuration
    pub fn new(config: &TranslationConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                MailbookError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    async fn translate(&self, text: &str, target: Language) -> Result<String> {
        let url = format!("{}/get", self.base_url);
        let langpair = format!("en|{}", target.code());

        let response = self
            .client
            .get(url)
            .query(&[("q", text), ("langpair", &langpair)])
            .send()
            .await
            .map_err(|e| MailbookError::Translation(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MailbookError::Translation(format!(
                "translation API returned HTTP {}",
                response.status()
            )));
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| MailbookError::Translation(e.to_string()))?;

        if body.response_status != 200 {
            return Err(MailbookError::Translation(format!(
                "translation failed: {}",
                body.response_details
            )));
        }

        tracing::debug!(target = %target, "Translated text via MyMemory");
        Ok(body.response_data.translated_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "responseData": { "translatedText": "नमस्ते" },
            "responseStatus": 200
        }"#;
        let parsed: TranslateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.response_status, 200);
        assert_eq!(parsed.response_data.translated_text, "नमस्ते");
    }

    #[tokio::test]
    async fn test_api_error_status_is_translation_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/get")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{
                    "responseData": { "translatedText": "" },
                    "responseStatus": 403,
                    "responseDetails": "invalid language pair"
                }"#,
            )
            .create_async()
            .await;

        let config = TranslationConfig {
            enabled: true,
            base_url: server.url(),
            timeout_seconds: 5,
        };
        let translator = MyMemoryTranslator::new(&config).unwrap();
        let result = translator.translate("hello", Language::Hindi).await;
        assert!(matches!(result, Err(MailbookError::Translation(_))));
    }

    #[tokio::test]
    async fn test_successful_translation() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/get")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{
                    "responseData": { "translatedText": "नमस्ते" },
                    "responseStatus": 200
                }"#,
            )
            .create_async()
            .await;

        let config = TranslationConfig {
            enabled: true,
            base_url: server.url(),
            timeout_seconds: 5,
        };
        let translator = MyMemoryTranslator::new(&config).unwrap();
        let result = translator.translate("hello", Language::Hindi).await.unwrap();
        assert_eq!(result, "नमस्ते");
    }
}
