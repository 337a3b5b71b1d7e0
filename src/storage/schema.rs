//! Database schema definitions

/// SQL to create the quotes table
pub const CREATE_QUOTES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS quotes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    quote_text TEXT NOT NULL,
    quote_author TEXT NOT NULL,
    user_opinion TEXT NOT NULL
)
"#;

/// SQL to create the users table
pub const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    uid TEXT NOT NULL UNIQUE
)
"#;

/// SQL to create the players table
pub const CREATE_PLAYERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS players (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    uid TEXT NOT NULL UNIQUE,
    score INTEGER NOT NULL DEFAULT 0
)
"#;

/// SQL to create the jokes table
/// The joke text doubles as the natural key so seeding stays idempotent
pub const CREATE_JOKES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS jokes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    joke TEXT NOT NULL UNIQUE,
    haha INTEGER NOT NULL DEFAULT 0,
    boohoo INTEGER NOT NULL DEFAULT 0
)
"#;

/// SQL to create the covid snapshot table
pub const CREATE_COVID_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS covid (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    country TEXT NOT NULL UNIQUE,
    total_cases INTEGER NOT NULL,
    total_deaths INTEGER NOT NULL
)
"#;

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![
        CREATE_QUOTES_TABLE,
        CREATE_USERS_TABLE,
        CREATE_PLAYERS_TABLE,
        CREATE_JOKES_TABLE,
        CREATE_COVID_TABLE,
    ]
}
