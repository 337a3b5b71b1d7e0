//! SQLite storage implementation

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use super::schema;
use crate::Result;
use crate::covid::{CovidRecord, CovidSnapshot};
use crate::joke::Joke;
use crate::player::{NewPlayer, Player};
use crate::quote::{NewQuote, Quote};
use crate::user::{NewUser, User};

/// SQLite-backed storage for all quoteboard resources
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Quote Operations ==========

    /// Insert one quote; the write is committed before this returns
    pub fn insert_quote(&self, quote: &NewQuote) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO quotes (quote_text, quote_author, user_opinion) VALUES (?1, ?2, ?3)",
            params![quote.quote_text, quote.quote_author, quote.user_opinion],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Fetch every quote in storage order
    pub fn all_quotes(&self) -> Result<Vec<Quote>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, quote_text, quote_author, user_opinion FROM quotes")?;

        let quotes = stmt
            .query_map([], |row| self.row_to_quote(row))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(quotes)
    }

    /// Count all quotes
    pub fn count_quotes(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM quotes", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Helper to convert a row to a Quote
    fn row_to_quote(&self, row: &rusqlite::Row) -> rusqlite::Result<Quote> {
        Ok(Quote {
            id: row.get(0)?,
            quote_text: row.get(1)?,
            quote_author: row.get(2)?,
            user_opinion: row.get(3)?,
        })
    }

    // ========== User Operations ==========

    /// Insert one user
    pub fn insert_user(&self, user: &NewUser) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO users (name, uid) VALUES (?1, ?2)",
            params![user.name, user.uid],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Fetch every user
    pub fn all_users(&self) -> Result<Vec<User>> {
        let mut stmt = self.conn.prepare("SELECT id, name, uid FROM users")?;

        let users = stmt
            .query_map([], |row| {
                Ok(User {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    uid: row.get(2)?,
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(users)
    }

    /// Count all users
    pub fn count_users(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    // ========== Player Operations ==========

    /// Insert one player
    pub fn insert_player(&self, player: &NewPlayer) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO players (name, uid, score) VALUES (?1, ?2, ?3)",
            params![player.name, player.uid, player.score],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Fetch every player
    pub fn all_players(&self) -> Result<Vec<Player>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, uid, score FROM players")?;

        let players = stmt
            .query_map([], |row| {
                Ok(Player {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    uid: row.get(2)?,
                    score: row.get(3)?,
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(players)
    }

    /// Count all players
    pub fn count_players(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    // ========== Joke Operations ==========

    /// Fetch every joke
    pub fn all_jokes(&self) -> Result<Vec<Joke>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, joke, haha, boohoo FROM jokes")?;

        let jokes = stmt
            .query_map([], |row| self.row_to_joke(row))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(jokes)
    }

    /// Get a joke by id
    pub fn get_joke(&self, id: i64) -> Result<Option<Joke>> {
        self.conn
            .query_row(
                "SELECT id, joke, haha, boohoo FROM jokes WHERE id = ?1",
                [id],
                |row| self.row_to_joke(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Pick one joke at random
    pub fn random_joke(&self) -> Result<Option<Joke>> {
        self.conn
            .query_row(
                "SELECT id, joke, haha, boohoo FROM jokes ORDER BY RANDOM() LIMIT 1",
                [],
                |row| self.row_to_joke(row),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Bump the haha count; returns the updated joke, None for an unknown id
    pub fn like_joke(&self, id: i64) -> Result<Option<Joke>> {
        let changed = self
            .conn
            .execute("UPDATE jokes SET haha = haha + 1 WHERE id = ?1", [id])?;
        if changed == 0 {
            return Ok(None);
        }
        self.get_joke(id)
    }

    /// Bump the boohoo count; returns the updated joke, None for an unknown id
    pub fn jeer_joke(&self, id: i64) -> Result<Option<Joke>> {
        let changed = self
            .conn
            .execute("UPDATE jokes SET boohoo = boohoo + 1 WHERE id = ?1", [id])?;
        if changed == 0 {
            return Ok(None);
        }
        self.get_joke(id)
    }

    /// Count all jokes
    pub fn count_jokes(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM jokes", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Helper to convert a row to a Joke
    fn row_to_joke(&self, row: &rusqlite::Row) -> rusqlite::Result<Joke> {
        Ok(Joke {
            id: row.get(0)?,
            joke: row.get(1)?,
            haha: row.get(2)?,
            boohoo: row.get(3)?,
        })
    }

    // ========== Covid Operations ==========

    /// Fetch every snapshot row
    pub fn all_covid_records(&self) -> Result<Vec<CovidRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, country, total_cases, total_deaths FROM covid")?;

        let records = stmt
            .query_map([], |row| {
                Ok(CovidRecord {
                    id: row.get(0)?,
                    country: row.get(1)?,
                    total_cases: row.get(2)?,
                    total_deaths: row.get(3)?,
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(records)
    }

    /// Count all snapshot rows
    pub fn count_covid_records(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM covid", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    // ========== Seed Operations ==========
    //
    // All seeding is INSERT OR IGNORE keyed on the natural unique column, so
    // generate-data can run any number of times. Each returns the number of
    // rows actually inserted.

    /// Seed the demo users
    pub fn seed_users(&self, users: &[NewUser]) -> Result<usize> {
        let mut inserted = 0;
        for user in users {
            inserted += self.conn.execute(
                "INSERT OR IGNORE INTO users (name, uid) VALUES (?1, ?2)",
                params![user.name, user.uid],
            )?;
        }
        Ok(inserted)
    }

    /// Seed the demo players
    pub fn seed_players(&self, players: &[NewPlayer]) -> Result<usize> {
        let mut inserted = 0;
        for player in players {
            inserted += self.conn.execute(
                "INSERT OR IGNORE INTO players (name, uid, score) VALUES (?1, ?2, ?3)",
                params![player.name, player.uid, player.score],
            )?;
        }
        Ok(inserted)
    }

    /// Seed the joke list
    pub fn seed_jokes(&self, jokes: &[&str]) -> Result<usize> {
        let mut inserted = 0;
        for joke in jokes {
            inserted += self
                .conn
                .execute("INSERT OR IGNORE INTO jokes (joke) VALUES (?1)", [joke])?;
        }
        Ok(inserted)
    }

    /// Seed the covid snapshot
    pub fn seed_covid(&self, snapshot: &[CovidSnapshot]) -> Result<usize> {
        let mut inserted = 0;
        for entry in snapshot {
            inserted += self.conn.execute(
                "INSERT OR IGNORE INTO covid (country, total_cases, total_deaths) VALUES (?1, ?2, ?3)",
                params![entry.country, entry.total_cases, entry.total_deaths],
            )?;
        }
        Ok(inserted)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            quotes: self.count_quotes()?,
            users: self.count_users()?,
            players: self.count_players()?,
            jokes: self.count_jokes()?,
            covid: self.count_covid_records()?,
        })
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct DbStats {
    pub quotes: usize,
    pub users: usize,
    pub players: usize,
    pub jokes: usize,
    pub covid: usize,
}

impl std::fmt::Display for DbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        writeln!(f, "  Quotes: {}", self.quotes)?;
        writeln!(f, "  Users: {}", self.users)?;
        writeln!(f, "  Players: {}", self.players)?;
        writeln!(f, "  Jokes: {}", self.jokes)?;
        writeln!(f, "  Covid records: {}", self.covid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{covid, joke, player, user};

    fn sample_quote(text: &str) -> NewQuote {
        NewQuote {
            quote_text: text.to_string(),
            quote_author: "Bruce Lee".to_string(),
            user_opinion: "Inspiring".to_string(),
        }
    }

    #[test]
    fn test_quote_round_trip() {
        let store = SqliteStore::open_in_memory().unwrap();

        store.insert_quote(&sample_quote("Be water.")).unwrap();

        let quotes = store.all_quotes().unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].quote_text, "Be water.");
        assert_eq!(quotes[0].quote_author, "Bruce Lee");
        assert_eq!(quotes[0].user_opinion, "Inspiring");
    }

    #[test]
    fn test_create_is_append_only() {
        let store = SqliteStore::open_in_memory().unwrap();

        // duplicates are not deduped
        for _ in 0..3 {
            store.insert_quote(&sample_quote("same")).unwrap();
        }

        assert_eq!(store.count_quotes().unwrap(), 3);
    }

    #[test]
    fn test_list_is_non_destructive() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert_quote(&sample_quote("one")).unwrap();
        store.insert_quote(&sample_quote("two")).unwrap();

        for _ in 0..5 {
            assert_eq!(store.all_quotes().unwrap().len(), 2);
        }
        assert_eq!(store.count_quotes().unwrap(), 2);
    }

    #[test]
    fn test_schema_bootstrap_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quoteboard.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.insert_quote(&sample_quote("persisted")).unwrap();
        }

        // reopening re-runs the schema and keeps existing rows
        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.count_quotes().unwrap(), 1);
    }

    #[test]
    fn test_seeding_is_idempotent() {
        let store = SqliteStore::open_in_memory().unwrap();

        let users = user::default_users();
        assert_eq!(store.seed_users(&users).unwrap(), users.len());
        assert_eq!(store.seed_users(&users).unwrap(), 0);
        assert_eq!(store.count_users().unwrap(), users.len());

        let players = player::default_players();
        assert_eq!(store.seed_players(&players).unwrap(), players.len());
        assert_eq!(store.seed_players(&players).unwrap(), 0);

        let jokes = joke::default_jokes();
        assert_eq!(store.seed_jokes(&jokes).unwrap(), jokes.len());
        assert_eq!(store.seed_jokes(&jokes).unwrap(), 0);

        let snapshot = covid::snapshot();
        assert_eq!(store.seed_covid(&snapshot).unwrap(), snapshot.len());
        assert_eq!(store.seed_covid(&snapshot).unwrap(), 0);
    }

    #[test]
    fn test_joke_reactions() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.seed_jokes(&["a joke"]).unwrap();
        let id = store.all_jokes().unwrap()[0].id;

        let liked = store.like_joke(id).unwrap().unwrap();
        assert_eq!(liked.haha, 1);
        assert_eq!(liked.boohoo, 0);

        let jeered = store.jeer_joke(id).unwrap().unwrap();
        assert_eq!(jeered.haha, 1);
        assert_eq!(jeered.boohoo, 1);

        // unknown id mutates nothing
        assert!(store.like_joke(9999).unwrap().is_none());
        assert_eq!(store.get_joke(id).unwrap().unwrap().haha, 1);
    }

    #[test]
    fn test_random_joke_comes_from_seed() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.random_joke().unwrap().is_none());

        store.seed_jokes(&joke::default_jokes()).unwrap();
        let joke = store.random_joke().unwrap().unwrap();
        assert!(joke::default_jokes().contains(&joke.joke.as_str()));
    }

    #[test]
    fn test_duplicate_uid_rejected() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert_user(&NewUser::new("A", "dup")).unwrap();
        assert!(store.insert_user(&NewUser::new("B", "dup")).is_err());
        assert_eq!(store.count_users().unwrap(), 1);
    }
}
