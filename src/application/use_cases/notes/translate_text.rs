use crate::application::ports::translation_port::{Translation, TranslationPort};

pub const DEFAULT_SOURCE_LANG: &str = "ru";
pub const DEFAULT_TARGET_LANG: &str = "en";

pub struct TranslateText<'a, T: TranslationPort + ?Sized> {
    pub translator: &'a T,
}

impl<'a, T: TranslationPort + ?Sized> TranslateText<'a, T> {
    pub async fn execute(&self, text: &str, source_lang: &str, target_lang: &str) -> Translation {
        if text.is_empty() {
            return Translation::Translated(String::new());
        }
        self.translator
            .translate(text, source_lang, target_lang)
            .await
    }
}
