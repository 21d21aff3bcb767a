use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

/// Endpoint for paid DeepL API keys.
pub const API_ENDPOINT: &str = "https://api.deepl.com";

/// Endpoint for free-tier DeepL API keys.
pub const API_FREE_ENDPOINT: &str = "https://api-free.deepl.com";

/// One unit of text to translate.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub text: String,
    /// `None` asks the API to detect the source language.
    pub source_lang: Option<String>,
    pub target_lang: String,
}

/// A completed translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    /// Source language the API detected, when it reports one.
    pub detected_source_lang: Option<String>,
}

/// The seam between the pipelines and the translation backend.
///
/// The batch runs on a single task, so no `Send` bound is needed on the
/// returned futures.
#[allow(async_fn_in_trait)]
pub trait Translator {
    async fn translate(&self, request: &TranslationRequest) -> Result<Translation>;
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<TranslatedText>,
}

#[derive(Debug, Deserialize)]
struct TranslatedText {
    text: String,
    detected_source_language: Option<String>,
}

/// DeepL HTTP API client.
///
/// Constructed once at startup and reused for every request in the batch.
pub struct DeepLClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

/// Picks the API host for a key. Free-tier keys carry a `:fx` suffix and
/// must talk to the api-free host.
pub fn endpoint_for_key(api_key: &str) -> &'static str {
    if api_key.ends_with(":fx") {
        API_FREE_ENDPOINT
    } else {
        API_ENDPOINT
    }
}

impl DeepLClient {
    pub fn new(api_key: String, endpoint: Option<String>) -> Self {
        let endpoint = endpoint.unwrap_or_else(|| endpoint_for_key(&api_key).to_string());
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }
}

impl Translator for DeepLClient {
    async fn translate(&self, request: &TranslationRequest) -> Result<Translation> {
        let url = format!("{}/v2/translate", self.endpoint.trim_end_matches('/'));

        let mut params = vec![
            ("text", request.text.as_str()),
            ("target_lang", request.target_lang.as_str()),
        ];
        if let Some(source) = &request.source_lang {
            params.push(("source_lang", source));
        }

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .form(&params)
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("DeepL API request failed with status {status}: {body}");
        }

        let body: TranslateResponse = response
            .json()
            .await
            .context("Failed to parse DeepL API response")?;

        let translation = body
            .translations
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("DeepL API returned no translations"))?;

        Ok(Translation {
            text: translation.text,
            detected_source_lang: translation.detected_source_language,
        })
    }
}
