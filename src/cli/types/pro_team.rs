//! NFL team lookup by ESPN `proTeamId`.

use std::fmt;

/// An NFL franchise as ESPN numbers it. Id 0 is "no team" (free agents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProTeam(pub u32);

impl ProTeam {
    pub fn abbrev(&self) -> &'static str {
        match self.0 {
            1 => "ATL",
            2 => "BUF",
            3 => "CHI",
            4 => "CIN",
            5 => "CLE",
            6 => "DAL",
            7 => "DEN",
            8 => "DET",
            9 => "GB",
            10 => "TEN",
            11 => "IND",
            12 => "KC",
            13 => "LV",
            14 => "LAR",
            15 => "MIA",
            16 => "MIN",
            17 => "NE",
            18 => "NO",
            19 => "NYG",
            20 => "NYJ",
            21 => "PHI",
            22 => "ARI",
            23 => "PIT",
            24 => "LAC",
            25 => "SF",
            26 => "SEA",
            27 => "TB",
            28 => "WSH",
            29 => "CAR",
            30 => "JAX",
            33 => "BAL",
            34 => "HOU",
            _ => "None",
        }
    }
}

impl fmt::Display for ProTeam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}
