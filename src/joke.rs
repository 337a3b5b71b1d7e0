//! Joke entity and the seed list
//!
//! Reaction counts live on the row and are bumped by the like/jeer endpoints.

use serde::Serialize;

/// A persisted joke row with its reaction counts
#[derive(Debug, Clone, Serialize)]
pub struct Joke {
    pub id: i64,
    pub joke: String,
    pub haha: i64,
    pub boohoo: i64,
}

/// Seed jokes installed by `generate-data`; the joke text is the natural key
pub fn default_jokes() -> Vec<&'static str> {
    vec![
        "Why do programmers prefer dark mode? Because light attracts bugs.",
        "There are 10 types of people: those who understand binary and those who don't.",
        "A SQL query walks into a bar, walks up to two tables and asks: may I join you?",
        "Why do Java developers wear glasses? Because they don't C#.",
        "I would tell you a UDP joke, but you might not get it.",
        "To understand recursion, you must first understand recursion.",
    ]
}
