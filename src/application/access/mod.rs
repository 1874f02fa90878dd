use crate::application::ports::note_repository::NoteScope;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    User { id: i64, username: String },
    Anonymous,
}

impl Actor {
    pub fn user_id(&self) -> Option<i64> {
        match self {
            Actor::User { id, .. } => Some(*id),
            Actor::Anonymous => None,
        }
    }
}

/// How note ownership is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OwnershipPolicy {
    /// Every caller sees and mutates every note.
    #[default]
    Shared,
    /// Notes require an authenticated caller and are scoped to their owner.
    Owner,
}

impl std::str::FromStr for OwnershipPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shared" => Ok(OwnershipPolicy::Shared),
            "owner" => Ok(OwnershipPolicy::Owner),
            other => {
                anyhow::bail!("unknown ownership policy '{other}' (expected 'shared' or 'owner')")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unauthenticated;

// Presentation layer builds the Actor; this module only decides what it may touch.

pub fn note_scope(policy: OwnershipPolicy, actor: &Actor) -> Result<NoteScope, Unauthenticated> {
    match (policy, actor) {
        (OwnershipPolicy::Shared, _) => Ok(NoteScope::All),
        (OwnershipPolicy::Owner, Actor::User { id, .. }) => Ok(NoteScope::OwnedBy(*id)),
        (OwnershipPolicy::Owner, Actor::Anonymous) => Err(Unauthenticated),
    }
}

pub fn creation_owner(
    policy: OwnershipPolicy,
    actor: &Actor,
) -> Result<Option<i64>, Unauthenticated> {
    match (policy, actor) {
        (OwnershipPolicy::Owner, Actor::Anonymous) => Err(Unauthenticated),
        (_, actor) => Ok(actor.user_id()),
    }
}
