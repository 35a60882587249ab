use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Response for anything that is not a whole number from 0 to 5
pub const INVALID_RESPONSE: &str = "Hmm, I didn't catch that. Please answer with a whole number from 0 to 5.";

/// A tiredness level on the closed 0-5 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
}

/// Why a piece of text did not resolve to a [`Level`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    #[error("{0} is outside the 0-5 range")]
    OutOfRange(i64),
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Zero,
        Level::One,
        Level::Two,
        Level::Three,
        Level::Four,
        Level::Five,
    ];

    pub fn value(self) -> u8 {
        match self {
            Level::Zero => 0,
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
            Level::Four => 4,
            Level::Five => 5,
        }
    }

    pub fn from_value(value: i64) -> Result<Self, LevelError> {
        match value {
            0 => Ok(Level::Zero),
            1 => Ok(Level::One),
            2 => Ok(Level::Two),
            3 => Ok(Level::Three),
            4 => Ok(Level::Four),
            5 => Ok(Level::Five),
            other => Err(LevelError::OutOfRange(other)),
        }
    }

    pub fn response(self) -> &'static str {
        match self {
            Level::Zero => "Wide awake! Go build something great.",
            Level::One => "Barely tired at all. You're good to keep going.",
            Level::Two => "A little drowsy. Maybe stretch your legs for a minute.",
            Level::Three => "Getting there. A cup of coffee might help.",
            Level::Four => "Pretty worn out. Time to wrap up what you're doing.",
            Level::Five => "Completely exhausted. Go get some sleep!",
        }
    }
}

impl FromStr for Level {
    type Err = LevelError;

    /// Surrounding whitespace (including the line terminator) is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| LevelError::NotANumber(trimmed.to_string()))?;
        Level::from_value(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// The bucket an input resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Level(Level),
    Invalid,
}

impl Classification {
    pub fn response(self) -> &'static str {
        match self {
            Classification::Level(level) => level.response(),
            Classification::Invalid => INVALID_RESPONSE,
        }
    }
}

/// Classify raw input. Non-numeric and out-of-range text both become `Invalid`.
pub fn classify(input: &str) -> Classification {
    match input.parse::<Level>() {
        Ok(level) => Classification::Level(level),
        Err(_) => Classification::Invalid,
    }
}

/// Select the response text for raw input
pub fn select_response(input: &str) -> &'static str {
    classify(input).response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_level_round_trips_through_its_digit() {
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>(), Ok(level));
        }
    }

    #[test]
    fn test_level_responses_are_distinct() {
        let responses: HashSet<&str> = Level::ALL.iter().map(|l| l.response()).collect();
        assert_eq!(responses.len(), Level::ALL.len());
        assert!(!responses.contains(INVALID_RESPONSE));
    }

    #[test]
    fn test_select_response_in_range() {
        for (i, level) in Level::ALL.iter().enumerate() {
            assert_eq!(select_response(&i.to_string()), level.response());
        }
    }

    #[test]
    fn test_select_response_boundaries() {
        assert_eq!(select_response("0"), Level::Zero.response());
        assert_eq!(select_response("5"), Level::Five.response());
        assert_eq!(select_response("6"), INVALID_RESPONSE);
        assert_eq!(select_response("-1"), INVALID_RESPONSE);
    }

    #[test]
    fn test_select_response_not_a_number() {
        for input in ["abc", "", "3.5", "two", "3a", "- 3", "0x3"] {
            assert_eq!(select_response(input), INVALID_RESPONSE, "input: {:?}", input);
        }
    }

    #[test]
    fn test_select_response_out_of_range() {
        for input in ["-1", "6", "100", "99999999999999999999999"] {
            assert_eq!(select_response(input), INVALID_RESPONSE, "input: {:?}", input);
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(classify("3\n"), Classification::Level(Level::Three));
        assert_eq!(classify("  4\r\n"), Classification::Level(Level::Four));
        assert_eq!(classify("\n"), Classification::Invalid);
    }

    #[test]
    fn test_sign_and_inner_whitespace() {
        assert_eq!(classify("+3"), Classification::Level(Level::Three));
        assert_eq!(classify("1 2"), Classification::Invalid);
    }

    #[test]
    fn test_parse_errors_distinguish_cause() {
        assert_eq!(
            "two".parse::<Level>(),
            Err(LevelError::NotANumber("two".to_string()))
        );
        assert_eq!("6".parse::<Level>(), Err(LevelError::OutOfRange(6)));
        assert_eq!(
            LevelError::OutOfRange(-1).to_string(),
            "-1 is outside the 0-5 range"
        );
    }

    #[test]
    fn test_select_response_is_idempotent() {
        for input in ["2", "6", "two", ""] {
            assert_eq!(select_response(input), select_response(input));
        }
    }
}
