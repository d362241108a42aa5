use crate::extract::ErrorLedger;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Identity and DraftKings position from a rotoguru player page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RosterPlayer {
    pub first: String,
    pub last: String,
    pub position: String,
    pub errors: ErrorLedger,
}

/// Identity plus one entry per scraped week from a pro-football-reference game log.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerGameLog {
    pub first: String,
    pub last: String,
    pub team: String,
    pub birth_year: String,
    pub birth_month: String,
    pub birth_day: String,
    pub games: Vec<WeekStats>,
    pub errors: ErrorLedger,
}

impl PlayerGameLog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeekStats {
    pub year: i32,
    pub week: u32,
    pub team: String,
    pub rush_att: String,
    pub rush_yd: String,
    pub rush_td: String,
    pub fum: String,
    pub tgt: String,
    pub rec: String,
    pub rec_yd: String,
    pub rec_td: String,
    pub pass_att: String,
    pub pass_cmp: String,
    pub pass_yd: String,
    pub pass_td: String,
    pub int: String,
    pub sacked: String,
    pub snaps: String,
}

/// Weeks requested from a game log, in request order.
///
/// A single week converts into a one-element request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weeks(Vec<u32>);

impl Weeks {
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<u32> for Weeks {
    fn from(week: u32) -> Self {
        Self(vec![week])
    }
}

impl From<Vec<u32>> for Weeks {
    fn from(weeks: Vec<u32>) -> Self {
        Self(weeks)
    }
}

impl From<&[u32]> for Weeks {
    fn from(weeks: &[u32]) -> Self {
        Self(weeks.to_vec())
    }
}

impl<const N: usize> From<[u32; N]> for Weeks {
    fn from(weeks: [u32; N]) -> Self {
        Self(weeks.to_vec())
    }
}

impl From<RangeInclusive<u32>> for Weeks {
    fn from(weeks: RangeInclusive<u32>) -> Self {
        Self(weeks.collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_week_becomes_one_element_request() {
        let weeks = Weeks::from(4);
        assert_eq!(weeks.iter().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn sequences_keep_request_order() {
        assert_eq!(Weeks::from(vec![3, 1, 2]).iter().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(Weeks::from(1..=3).len(), 3);
        assert!(Weeks::from(Vec::new()).is_empty());
    }

    #[test]
    fn empty_record_serializes_every_field() {
        let json = serde_json::to_value(RosterPlayer::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"first": "", "last": "", "position": "", "errors": []})
        );
    }
}
