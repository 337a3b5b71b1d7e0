//! User entity and the demo roster

use serde::{Deserialize, Serialize};

/// A persisted user row
#[derive(Debug, Clone, Serialize)]
pub struct User {
    #[serde(skip_serializing)]
    pub id: i64,
    pub name: String,
    pub uid: String,
}

/// A user to insert; `uid` is the unique handle
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub uid: String,
}

impl NewUser {
    pub fn new(name: &str, uid: &str) -> Self {
        Self {
            name: name.to_string(),
            uid: uid.to_string(),
        }
    }
}

/// Demo roster installed by `generate-data`
pub fn default_users() -> Vec<NewUser> {
    vec![
        NewUser::new("Thomas Edison", "toby"),
        NewUser::new("Nikola Tesla", "niko"),
        NewUser::new("Alexander Graham Bell", "lex"),
        NewUser::new("Eli Whitney", "whit"),
        NewUser::new("Grace Hopper", "hop"),
    ]
}
