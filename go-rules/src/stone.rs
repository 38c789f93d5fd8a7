use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    /// Signed cell encoding used by flat board views: 1 black, -1 white.
    pub fn to_int(self) -> i8 {
        match self {
            Stone::Black => 1,
            Stone::White => -1,
        }
    }

    pub fn opp(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Stone::Black => 'B',
            Stone::White => 'W',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'B' | 'b' => Some(Stone::Black),
            'W' | 'w' => Some(Stone::White),
            _ => None,
        }
    }
}

impl Neg for Stone {
    type Output = Self;

    fn neg(self) -> Self {
        self.opp()
    }
}

impl std::str::FromStr for Stone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(Stone::Black),
            "white" => Ok(Stone::White),
            _ => Err(format!("invalid stone: {s}")),
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "black"),
            Stone::White => write!(f, "white"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent() {
        assert_eq!(Stone::Black.opp(), Stone::White);
        assert_eq!(Stone::White.opp(), Stone::Black);
    }

    #[test]
    fn negation() {
        assert_eq!(-Stone::Black, Stone::White);
        assert_eq!(-Stone::White, Stone::Black);
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(Stone::Black.to_string(), "black");
        assert_eq!(Stone::White.to_string(), "white");
        assert_eq!("white".parse::<Stone>(), Ok(Stone::White));
        assert!("purple".parse::<Stone>().is_err());
    }

    #[test]
    fn letters() {
        assert_eq!(Stone::from_letter('B'), Some(Stone::Black));
        assert_eq!(Stone::from_letter('w'), Some(Stone::White));
        assert_eq!(Stone::from_letter('+'), None);
        assert_eq!(Stone::Black.letter(), 'B');
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_value(Stone::Black).unwrap(), "black");
        let s: Stone = serde_json::from_str("\"white\"").unwrap();
        assert_eq!(s, Stone::White);
    }
}
