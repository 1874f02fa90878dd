use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Translated(String),
    Failed(TranslationFailure),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslationFailure {
    #[error("Translation error: {0}")]
    Status(u16),
    #[error("Translation failed: {0}")]
    Transport(String),
}

/// Outbound text translation. Implementations never return an error: every
/// failure is reported as [`Translation::Failed`].
#[async_trait]
pub trait TranslationPort: Send + Sync {
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Translation;
}
