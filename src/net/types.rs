//! Wire types shared by the API clients and the UI.

/// A note as returned by the server. Notes are owned by the remote service
/// and scoped to the caller's tenant.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Fields the client sends when creating or updating a note.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}
