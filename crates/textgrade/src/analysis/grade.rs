use serde::{Deserialize, Serialize};
use std::fmt;

/// Quality tier assigned to a criterion or to a whole text. `A` is the best tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    E,
    D,
    C,
    B,
    A,
}

impl Grade {
    /// Integer points used by the weighted aggregation.
    pub const fn points(self) -> u8 {
        match self {
            Self::A => 5,
            Self::B => 4,
            Self::C => 3,
            Self::D => 2,
            Self::E => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "Exceptional analysis",
            Self::B => "Strong analysis",
            Self::C => "Standard analysis",
            Self::D => "Basic analysis",
            Self::E => "Poor analysis",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        };
        f.write_str(letter)
    }
}

/// Descending cut-offs for the A, B, C and D tiers. A score must be strictly above a cut-off to
/// earn that tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Thresholds {
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }
}

/// Total mapping from a raw feature score to a grade. NaN compares false everywhere and lands on
/// `E`.
pub fn map_to_grade(score: f64, thresholds: &Thresholds) -> Grade {
    if score > thresholds.a {
        Grade::A
    } else if score > thresholds.b {
        Grade::B
    } else if score > thresholds.c {
        Grade::C
    } else if score > thresholds.d {
        Grade::D
    } else {
        Grade::E
    }
}

/// Grade for a final 0-100 score.
pub fn final_grade(score: u8) -> Grade {
    match score {
        85.. => Grade::A,
        75..=84 => Grade::B,
        65..=74 => Grade::C,
        50..=64 => Grade::D,
        _ => Grade::E,
    }
}
