use crate::{CoreError, Result as CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use chrono::{Datelike, Local};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Last month (inclusive) that belongs to the spring term.
const LAST_SPRING_MONTH: u32 = 5;
/// First month (inclusive) that belongs to the fall term.
const FIRST_FALL_MONTH: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Fall,
}

impl Season {
    pub fn from_month(month: u32) -> Self {
        if month <= LAST_SPRING_MONTH {
            Self::Spring
        } else if month >= FIRST_FALL_MONTH {
            Self::Fall
        } else {
            Self::Summer
        }
    }

    pub fn code(&self) -> char {
        match self {
            Self::Spring => 's',
            Self::Summer => 'm',
            Self::Fall => 'f',
        }
    }

    fn from_code(code: char) -> Option<Self> {
        match code {
            's' => Some(Self::Spring),
            'm' => Some(Self::Summer),
            'f' => Some(Self::Fall),
            _ => None,
        }
    }
}

/// Semester label such as `f26`, used to scope memberships and to name course databases.
///
/// A batch computes its term once and hands the same value to every group, so a run that
/// crosses a month boundary keeps syncing against the term it started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Term {
    season: Season,
    year: u8,
}

impl Term {
    #[track_caller]
    pub fn new(season: Season, year: u8) -> CoreResult<Self> {
        if year > 99 {
            return Err(CoreError::Validation {
                message: format!("term year must be two digits, got {}", year),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { season, year })
    }

    pub fn from_date<D: Datelike>(date: &D) -> Self {
        Self {
            season: Season::from_month(date.month()),
            year: date.year().rem_euclid(100) as u8,
        }
    }

    pub fn current() -> Self {
        Self::from_date(&Local::now().date_naive())
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn year(&self) -> u8 {
        self.year
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.season.code(), self.year)
    }
}

impl FromStr for Term {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        let invalid = || CoreError::InvalidTerm {
            value: s.to_string(),
            location: ErrorLocation::from(Location::caller()),
        };

        let mut chars = s.chars();
        let season = chars
            .next()
            .and_then(Season::from_code)
            .ok_or_else(invalid)?;

        let digits = chars.as_str();
        if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year = digits.parse::<u8>().map_err(|_| invalid())?;
        Ok(Self { season, year })
    }
}

impl TryFrom<String> for Term {
    type Error = CoreError;

    fn try_from(value: String) -> CoreResult<Self> {
        value.parse()
    }
}

impl From<Term> for String {
    fn from(term: Term) -> Self {
        term.to_string()
    }
}
