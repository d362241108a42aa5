mod game;
mod player;

pub use game::{GameDetail, TeamGame};
pub use player::{PlayerGameLog, RosterPlayer, WeekStats, Weeks};
