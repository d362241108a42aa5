use crate::extract::ErrorLedger;
use serde::Serialize;

/// Metadata and per-team figures from one box-score page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameDetail {
    pub week: String,
    pub start_time: String,
    pub stadium: String,
    pub length: String,
    pub roof: String,
    pub surface: String,
    pub spread: String,
    pub over_under: String,
    pub team_games: Vec<TeamGame>,
    pub errors: ErrorLedger,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamGame {
    pub name: String,
    pub score: String,
    pub snaps: String,
}

impl GameDetail {
    pub fn new() -> Self {
        Self::default()
    }
}
