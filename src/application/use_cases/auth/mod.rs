pub mod login;
pub mod me;
pub mod register;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("Username already registered")]
    UsernameTaken,
    // unknown user and wrong password share this on purpose
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Could not validate credentials")]
    InvalidToken,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
