/// User model and seed data
///
/// Users are static: five records seeded at startup, listed page by page,
/// never created, updated or deleted through the API.
///
/// # Wire format
///
/// ```json
/// { "id": 1, "name": "Rakoto", "email": "rakoto@example.com" }
/// ```

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A read-only user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID
    pub id: i64,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,
}

impl User {
    fn new(id: i64, name: &str, email: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    /// The fixed user list present at process start, in listing order
    pub fn seed() -> Vec<User> {
        vec![
            User::new(1, "Rakoto", "rakoto@example.com"),
            User::new(2, "Rabe", "rabe@example.com"),
            User::new(3, "Rasoa", "rasoa@example.com"),
            User::new(4, "Randria", "randria@example.com"),
            User::new(5, "Ravelo", "ravelo@example.com"),
        ]
    }
}

impl Record for User {
    type Key = i64;

    fn key(&self) -> &i64 {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_has_five_unique_users() {
        let users = User::seed();
        assert_eq!(users.len(), 5);

        let ids: HashSet<i64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), 5);

        let emails: HashSet<&str> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails.len(), 5);
    }

    #[test]
    fn test_seed_ids_follow_insertion_order() {
        let ids: Vec<i64> = User::seed().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
