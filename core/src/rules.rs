use std::fmt;

use crate::geometry::Point;
use crate::stage::{Stage, StageParseError};

pub const DEFAULT_CATCH_DELAY_MS: u32 = 2000;
pub const CATCH_DELAY_MAX_MS: u32 = 60_000;

pub const DEFAULT_TOKEN_SIZE: f64 = 40.0;
pub const TOKEN_SIZE_MIN: f64 = 8.0;
pub const TOKEN_SIZE_MAX: f64 = 200.0;

pub const DEFAULT_TARGET_SIZE: f64 = 150.0;
pub const TARGET_SIZE_MIN: f64 = 16.0;
pub const TARGET_SIZE_MAX: f64 = 600.0;

pub const FLY_COORD_LIMIT: f64 = 4096.0;

pub const DEFAULT_FLY_POSITION: Point = Point::new(100.0, 100.0);

pub const KEY_DELAY: &str = "delay";
pub const KEY_TOKEN: &str = "token";
pub const KEY_LEAF: &str = "leaf";
pub const KEY_FLY_X: &str = "fly_x";
pub const KEY_FLY_Y: &str = "fly_y";
pub const KEY_STAGE: &str = "stage";

pub const KEYS: [&str; 6] = [KEY_DELAY, KEY_TOKEN, KEY_LEAF, KEY_FLY_X, KEY_FLY_Y, KEY_STAGE];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameRules {
    pub catch_delay_ms: u32,
    pub token_size: f64,
    pub target_size: f64,
    pub default_fly: Point,
    /// Stage shown at mount. Reset always returns to waiting.
    pub initial_stage: Stage,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            catch_delay_ms: DEFAULT_CATCH_DELAY_MS,
            token_size: DEFAULT_TOKEN_SIZE,
            target_size: DEFAULT_TARGET_SIZE,
            default_fly: DEFAULT_FLY_POSITION,
            initial_stage: Stage::Waiting,
        }
    }
}

impl GameRules {
    /// Offset that centres the fly under the pointer.
    pub fn half_token(&self) -> f64 {
        self.token_size * 0.5
    }

    /// Builds rules from `key=value` pairs such as a page query string.
    /// Unknown keys are skipped; a bad value for a known key is an error.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, RulesError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut rules = GameRules::default();
        for (key, value) in pairs {
            rules.apply_pair(key.as_ref(), value.as_ref())?;
        }
        Ok(rules)
    }

    /// Returns `Ok(false)` when the key is not a rules key.
    pub fn apply_pair(&mut self, key: &str, value: &str) -> Result<bool, RulesError> {
        match key.trim() {
            KEY_DELAY => {
                let delay = parse_number(KEY_DELAY, value)?;
                check_range(KEY_DELAY, delay, 0.0, CATCH_DELAY_MAX_MS as f64)?;
                self.catch_delay_ms = delay.round() as u32;
            }
            KEY_TOKEN => {
                let size = parse_number(KEY_TOKEN, value)?;
                check_range(KEY_TOKEN, size, TOKEN_SIZE_MIN, TOKEN_SIZE_MAX)?;
                self.token_size = size;
            }
            KEY_LEAF => {
                let size = parse_number(KEY_LEAF, value)?;
                check_range(KEY_LEAF, size, TARGET_SIZE_MIN, TARGET_SIZE_MAX)?;
                self.target_size = size;
            }
            KEY_FLY_X => {
                let x = parse_number(KEY_FLY_X, value)?;
                check_range(KEY_FLY_X, x, -FLY_COORD_LIMIT, FLY_COORD_LIMIT)?;
                self.default_fly.x = x;
            }
            KEY_FLY_Y => {
                let y = parse_number(KEY_FLY_Y, value)?;
                check_range(KEY_FLY_Y, y, -FLY_COORD_LIMIT, FLY_COORD_LIMIT)?;
                self.default_fly.y = y;
            }
            KEY_STAGE => {
                self.initial_stage = Stage::parse(value).map_err(RulesError::Stage)?;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

fn parse_number(key: &'static str, value: &str) -> Result<f64, RulesError> {
    match value.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(RulesError::InvalidNumber {
            key,
            value: value.to_string(),
        }),
    }
}

fn check_range(key: &'static str, value: f64, min: f64, max: f64) -> Result<(), RulesError> {
    if value < min || value > max {
        return Err(RulesError::OutOfRange {
            key,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub enum RulesError {
    InvalidNumber {
        key: &'static str,
        value: String,
    },
    OutOfRange {
        key: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    Stage(StageParseError),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::InvalidNumber { key, value } => {
                write!(f, "'{key}' must be a number, got '{value}'")
            }
            RulesError::OutOfRange {
                key,
                value,
                min,
                max,
            } => {
                write!(f, "'{key}' must be between {min} and {max}, got {value}")
            }
            RulesError::Stage(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for RulesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RulesError::Stage(err) => Some(err),
            _ => None,
        }
    }
}
