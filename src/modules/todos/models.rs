use serde::{Deserialize, Serialize};

/// Shape of a todo row in the future persistence target.
///
/// Declaration only; no catalog-style operations exist for todos yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    /// Primary key
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: i32,
    #[serde(default)]
    pub complete: bool,
}
