//! Stat source for ESPN player stats
//!     - Actual (game results):    statSourceId = 0
//!     - Projected:                statSourceId = 1

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatSource {
    Actual,
    Projected,
}

impl StatSource {
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(StatSource::Actual),
            1 => Some(StatSource::Projected),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_source_ids() {
        assert_eq!(StatSource::from_id(0), Some(StatSource::Actual));
        assert_eq!(StatSource::from_id(1), Some(StatSource::Projected));
        assert_eq!(StatSource::from_id(2), None);
    }
}
