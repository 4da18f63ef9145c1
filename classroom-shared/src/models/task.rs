/// Task model
///
/// Tasks are created in batches with caller-supplied ids. The server never
/// assigns or deduplicates ids, so two tasks may share one; lookups and
/// single deletes act on the first match.
///
/// # Wire format
///
/// ```json
/// { "id": 1, "title": "Réviser le cours", "completed": false }
/// ```

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A to-do task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Caller-supplied task ID
    pub id: i64,

    /// Short description
    pub title: String,

    /// Whether the task is done
    pub completed: bool,
}

impl Record for Task {
    type Key = i64;

    fn key(&self) -> &i64 {
        &self.id
    }
}
