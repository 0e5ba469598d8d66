//! Player positions and lineup slots.

use std::fmt;

/// A player's primary position, from ESPN's `defaultPositionId`.
///
/// Note that ESPN numbers default positions differently from lineup slots:
/// `defaultPositionId` 1 is a quarterback, while lineup slot 0 is the QB slot.
///
/// # Examples
///
/// ```rust
/// use espn_mirror::Position;
///
/// assert_eq!(Position::from_default_position_id(1), Position::QB);
/// assert_eq!(Position::from_default_position_id(16).to_string(), "D/ST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    P,
    DST,
    Unknown,
}

impl Position {
    pub fn from_default_position_id(id: i32) -> Self {
        match id {
            1 => Position::QB,
            2 => Position::RB,
            3 => Position::WR,
            4 => Position::TE,
            5 => Position::K,
            7 => Position::P,
            16 => Position::DST,
            _ => Position::Unknown,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::P => "P",
            Position::DST => "D/ST",
            Position::Unknown => "UNKNOWN",
        };
        write!(f, "{}", s)
    }
}

/// Lineup slot names indexed by ESPN `lineupSlotId`.
const SLOT_NAMES: [&str; 26] = [
    "QB", "TQB", "RB", "RB/WR", "WR", "WR/TE", "TE", "OP", "DT", "DE", "LB", "DL", "CB", "S",
    "DB", "DP", "D/ST", "K", "P", "HC", "BE", "IR", "", "RB/WR/TE", "ER", "Rookie",
];

/// The lineup slot a rostered player occupies for a scoring period.
///
/// Slot 23 is the FLEX slot and keeps ESPN's `RB/WR/TE` name, which is what
/// the display widget keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineupSlot(pub u8);

impl LineupSlot {
    pub const BENCH: LineupSlot = LineupSlot(20);
    pub const INJURED_RESERVE: LineupSlot = LineupSlot(21);

    pub fn name(&self) -> &'static str {
        SLOT_NAMES.get(self.0 as usize).copied().unwrap_or("")
    }

    /// Whether points scored in this slot count toward the team total.
    pub fn is_starter(&self) -> bool {
        *self != Self::BENCH && *self != Self::INJURED_RESERVE
    }
}

impl fmt::Display for LineupSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
