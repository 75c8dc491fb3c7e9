use crate::domain::selection::SelectionState;
use nutype::nutype;
use serde::Serialize;
use uuid::Uuid;

/// Unique identifier for a dashboard session
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRef
))]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn generate() -> Self {
        // Uuid::now_v7() always generates a valid UUID
        Self::new(Uuid::now_v7())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::generate()
    }
}

/// One viewer's dashboard session, owning its selection exclusively
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub id: SessionId,
    pub selection: SelectionState,
}

impl Session {
    pub fn new(selection: SelectionState) -> Self {
        Self {
            id: SessionId::generate(),
            selection,
        }
    }
}
