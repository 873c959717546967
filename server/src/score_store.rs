use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;

use common::UserId;

#[derive(Clone, Debug)]
pub struct ScoreRecord {
    pub score: u32,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub highest_score: u32,
    pub last_played: String,
}

/// Durable score storage, one dated record per finished game.
///
/// Failures are reported as strings and treated as non-fatal by every
/// caller: a lost write costs one leaderboard entry, never a game.
pub trait ScoreStore: Send + Sync {
    fn record_score(&self, user_id: &UserId, score: u32) -> Result<(), String>;

    /// Maximum recorded score; 0 when the user has never played.
    fn fetch_high_score(&self, user_id: &UserId) -> Result<u32, String>;

    /// Best score and last-played time per user, best first.
    fn leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, String>;
}

#[derive(Clone, Default)]
pub struct InMemoryScoreStore {
    records: Arc<RwLock<HashMap<UserId, Vec<ScoreRecord>>>>,
}

impl InMemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn record_score(&self, user_id: &UserId, score: u32) -> Result<(), String> {
        let mut records = self
            .records
            .write()
            .map_err(|_| "score store lock poisoned".to_string())?;
        records.entry(user_id.clone()).or_default().push(ScoreRecord {
            score,
            recorded_at: Utc::now(),
        });
        Ok(())
    }

    fn fetch_high_score(&self, user_id: &UserId) -> Result<u32, String> {
        let records = self
            .records
            .read()
            .map_err(|_| "score store lock poisoned".to_string())?;
        Ok(records
            .get(user_id)
            .and_then(|user_records| user_records.iter().map(|r| r.score).max())
            .unwrap_or(0))
    }

    fn leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, String> {
        let records = self
            .records
            .read()
            .map_err(|_| "score store lock poisoned".to_string())?;

        let mut entries: Vec<LeaderboardEntry> = records
            .iter()
            .filter_map(|(user_id, user_records)| {
                let highest_score = user_records.iter().map(|r| r.score).max()?;
                let last_played = user_records.iter().map(|r| r.recorded_at).max()?;
                Some(LeaderboardEntry {
                    user_id: user_id.to_string(),
                    highest_score,
                    last_played: last_played.to_rfc3339(),
                })
            })
            .collect();

        entries.sort_by(|a, b| {
            b.highest_score
                .cmp(&a.highest_score)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });
        entries.truncate(limit);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserId {
        UserId::new(id.to_string())
    }

    #[test]
    fn test_unknown_user_has_zero_high_score() {
        let store = InMemoryScoreStore::new();
        assert_eq!(store.fetch_high_score(&user("nobody")), Ok(0));
    }

    #[test]
    fn test_fetch_returns_maximum_recorded_score() {
        let store = InMemoryScoreStore::new();
        let alice = user("alice");
        store.record_score(&alice, 30).unwrap();
        store.record_score(&alice, 120).unwrap();
        store.record_score(&alice, 50).unwrap();
        assert_eq!(store.fetch_high_score(&alice), Ok(120));
    }

    #[test]
    fn test_leaderboard_orders_by_best_score_and_limits() {
        let store = InMemoryScoreStore::new();
        store.record_score(&user("alice"), 40).unwrap();
        store.record_score(&user("bob"), 90).unwrap();
        store.record_score(&user("bob"), 10).unwrap();
        store.record_score(&user("carol"), 60).unwrap();

        let entries = store.leaderboard(2).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].user_id, "bob");
        assert_eq!(entries[0].highest_score, 90);
        assert_eq!(entries[1].user_id, "carol");
    }

    #[test]
    fn test_leaderboard_ties_break_by_user_id() {
        let store = InMemoryScoreStore::new();
        store.record_score(&user("zed"), 50).unwrap();
        store.record_score(&user("amy"), 50).unwrap();

        let entries = store.leaderboard(10).unwrap();
        assert_eq!(entries[0].user_id, "amy");
        assert_eq!(entries[1].user_id, "zed");
    }
}
