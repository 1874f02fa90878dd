use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::application::ports::translation_port::{
    Translation, TranslationFailure, TranslationPort,
};

pub const DEFAULT_TRANSLATION_URL: &str =
    "https://deep-translate1.p.rapidapi.com/language/translate/v2";

#[derive(Debug, Deserialize)]
struct ProviderResponse {
    data: ProviderData,
}

#[derive(Debug, Deserialize)]
struct ProviderData {
    translations: ProviderTranslations,
}

#[derive(Debug, Deserialize)]
struct ProviderTranslations {
    #[serde(rename = "translatedText")]
    translated_text: Vec<String>,
}

/// Deep Translate (RapidAPI) client.
pub struct ReqwestTranslationClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl ReqwestTranslationClient {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key,
        }
    }

    fn host(&self) -> Option<String> {
        reqwest::Url::parse(&self.endpoint)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
    }

    async fn request(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> anyhow::Result<Translation> {
        let mut req = self.client.post(&self.endpoint).json(&json!({
            "q": text,
            "source": source_lang,
            "target": target_lang,
        }));
        if let Some(key) = &self.api_key {
            req = req.header("X-RapidAPI-Key", key);
        }
        if let Some(host) = self.host() {
            req = req.header("X-RapidAPI-Host", host);
        }
        let resp = req.send().await?;
        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %body, "translation_provider_error");
            return Ok(Translation::Failed(TranslationFailure::Status(
                status.as_u16(),
            )));
        }
        let parsed: ProviderResponse = resp.json().await?;
        let first = parsed
            .data
            .translations
            .translated_text
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("provider returned no translations"))?;
        Ok(Translation::Translated(first))
    }
}

#[async_trait]
impl TranslationPort for ReqwestTranslationClient {
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Translation {
        match self.request(text, source_lang, target_lang).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(error = %e, "translation_request_failed");
                Translation::Failed(TranslationFailure::Transport(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_header_comes_from_endpoint() {
        let client = ReqwestTranslationClient::new(DEFAULT_TRANSLATION_URL, None);
        assert_eq!(client.host().as_deref(), Some("deep-translate1.p.rapidapi.com"));
    }

    #[test]
    fn failure_messages_describe_the_cause() {
        assert_eq!(
            TranslationFailure::Status(400).to_string(),
            "Translation error: 400"
        );
        assert_eq!(
            TranslationFailure::Transport("Connection error".into()).to_string(),
            "Translation failed: Connection error"
        );
    }
}
