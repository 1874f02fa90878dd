use std::sync::Arc;

use crate::application::ports::note_repository::NoteRepository;
use crate::application::ports::translation_port::TranslationPort;
use crate::application::ports::user_repository::UserRepository;
use crate::application::services::auth::TokenKeys;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
    token_keys: Arc<TokenKeys>,
}

#[derive(Clone)]
pub struct AppServices {
    user_repo: Arc<dyn UserRepository>,
    note_repo: Arc<dyn NoteRepository>,
    translator: Arc<dyn TranslationPort>,
}

impl AppServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        note_repo: Arc<dyn NoteRepository>,
        translator: Arc<dyn TranslationPort>,
    ) -> Self {
        Self {
            user_repo,
            note_repo,
            translator,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        let token_keys = Arc::new(cfg.token_keys());
        Self {
            cfg,
            services: Arc::new(services),
            token_keys,
        }
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn note_repo(&self) -> Arc<dyn NoteRepository> {
        self.services.note_repo.clone()
    }

    pub fn translator(&self) -> Arc<dyn TranslationPort> {
        self.services.translator.clone()
    }

    pub fn token_keys(&self) -> &TokenKeys {
        &self.token_keys
    }
}
