//! Player entity and the demo leaderboard

use serde::{Deserialize, Serialize};

/// A persisted player row
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    #[serde(skip_serializing)]
    pub id: i64,
    pub name: String,
    pub uid: String,
    pub score: i64,
}

/// A player to insert; `uid` is the unique handle
#[derive(Debug, Clone, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub uid: String,
    #[serde(default)]
    pub score: i64,
}

impl NewPlayer {
    pub fn new(name: &str, uid: &str, score: i64) -> Self {
        Self {
            name: name.to_string(),
            uid: uid.to_string(),
            score,
        }
    }
}

/// Demo leaderboard installed by `generate-data`
pub fn default_players() -> Vec<NewPlayer> {
    vec![
        NewPlayer::new("Maria Rodriguez", "maria", 120),
        NewPlayer::new("Ken Nakamura", "ken", 95),
        NewPlayer::new("Aisha Bello", "aisha", 150),
        NewPlayer::new("Lena Fischer", "lena", 80),
    ]
}
