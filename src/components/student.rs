//! Student Components
//!
//! The fixed-shape record for a cohort member. Students are created once by
//! the cohort setup and are immutable for the rest of the run.

use serde::{Deserialize, Serialize};

/// Interest categories a student can be assigned.
///
/// The set is closed and small; shared interests bias relationship drift in
/// the attribute-aware update rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interest {
    OnlineGames,
    History,
    BoardGames,
    MobileGames,
    TvSeries,
}

impl Interest {
    /// Every interest category, in a fixed order.
    pub const ALL: [Interest; 5] = [
        Interest::OnlineGames,
        Interest::History,
        Interest::BoardGames,
        Interest::MobileGames,
        Interest::TvSeries,
    ];
}

/// A member of the cohort.
///
/// `id` is 1-based, unique, and stable for the run. `dormitory` and
/// `interest` are only populated by the attribute-aware cohort setup; the
/// minimal setup leaves them `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub dormitory: Option<u32>,
    pub interest: Option<Interest>,
}

impl Student {
    /// Create a student with an id and no attributes.
    pub fn numbered(id: u32) -> Self {
        Self {
            id,
            dormitory: None,
            interest: None,
        }
    }

    /// True when both students have a dormitory assigned and it is the same.
    pub fn shares_dormitory(&self, other: &Student) -> bool {
        match (self.dormitory, other.dormitory) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// True when both students have an interest assigned and it is the same.
    pub fn shares_interest(&self, other: &Student) -> bool {
        match (self.interest, other.interest) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
