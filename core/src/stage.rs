use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{StageCopy, STAGES};
use crate::state::FlytrapState;

/// Narrative phase shown by the illustration panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[default]
    Waiting,
    Catching,
    Digesting,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Waiting, Stage::Catching, Stage::Digesting];

    pub fn next(self) -> Stage {
        match self {
            Stage::Waiting => Stage::Catching,
            Stage::Catching => Stage::Digesting,
            Stage::Digesting => Stage::Waiting,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Stage::Waiting => 0,
            Stage::Catching => 1,
            Stage::Digesting => 2,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Stage::Waiting => "waiting",
            Stage::Catching => "catching",
            Stage::Digesting => "digesting",
        }
    }

    pub fn copy(self) -> &'static StageCopy {
        &STAGES[self.index()]
    }

    pub fn title(self) -> &'static str {
        self.copy().title
    }

    pub fn caption(self) -> &'static str {
        self.copy().caption
    }

    pub fn parse(value: &str) -> Result<Self, StageParseError> {
        let trimmed = value.trim();
        Stage::ALL
            .into_iter()
            .find(|stage| stage.slug().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| StageParseError {
                value: value.to_string(),
            })
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.slug())
    }
}

impl std::str::FromStr for Stage {
    type Err = StageParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageParseError {
    pub value: String,
}

impl fmt::Display for StageParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown stage '{}', expected one of waiting, catching, digesting",
            self.value
        )
    }
}

impl std::error::Error for StageParseError {}

pub(crate) fn select(state: &mut FlytrapState, stage: Stage) -> bool {
    if state.stage == stage {
        return false;
    }
    state.stage = stage;
    true
}

/// Cycles to the next stage. Wrapping back to waiting reopens the leaf and
/// retires any catch still waiting on its timer.
pub(crate) fn advance(state: &mut FlytrapState) -> Stage {
    let next = state.stage.next();
    if state.stage == Stage::Digesting {
        state.leaf_closed = false;
        state.catch_epoch = state.catch_epoch.wrapping_add(1);
    }
    state.stage = next;
    next
}

/// Clicking the fly is a nudge out of the waiting stage only.
pub(crate) fn nudge(state: &mut FlytrapState) -> bool {
    if state.stage != Stage::Waiting {
        return false;
    }
    state.stage = Stage::Catching;
    true
}
