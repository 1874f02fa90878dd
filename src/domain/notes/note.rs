#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// `None` for notes created without an authenticated caller.
    pub owner_id: Option<i64>,
}
