use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use flytrap_core::layout::{DEFAULT_REGION_HEIGHT, DEFAULT_REGION_WIDTH};
use flytrap_core::{GameRules, Point, Rect, RulesError, SceneLayout, Stage};

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid rules: {0}")]
    Rules(#[from] RulesError),
    #[error("region must have a positive size, got {width}x{height}")]
    Region { width: f64, height: f64 },
    #[error("leaf size must be positive, got {0}")]
    Leaf(f64),
}

/// A scripted session: where the game region sits on screen, optional rule
/// overrides, and the input to feed it.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub rules: BTreeMap<String, toml::Value>,
    #[serde(default)]
    pub region: RegionSpec,
    /// Leaf placement relative to the region. Defaults to bottom-centre.
    #[serde(default)]
    pub leaf: Option<LeafSpec>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionSpec {
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
    #[serde(default = "default_region_width")]
    pub width: f64,
    #[serde(default = "default_region_height")]
    pub height: f64,
}

impl Default for RegionSpec {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: DEFAULT_REGION_WIDTH,
            height: DEFAULT_REGION_HEIGHT,
        }
    }
}

fn default_region_width() -> f64 {
    DEFAULT_REGION_WIDTH
}

fn default_region_height() -> f64 {
    DEFAULT_REGION_HEIGHT
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeafSpec {
    pub left: f64,
    pub top: f64,
    /// Falls back to the configured leaf size.
    #[serde(default)]
    pub size: Option<f64>,
}

/// One scripted input. Pointer coordinates are client coordinates, the same
/// space a browser reports.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Press,
    Move { x: f64, y: f64 },
    Release,
    Leave,
    TouchStart { x: f64, y: f64 },
    TouchMove { x: f64, y: f64 },
    TouchEnd,
    TouchCancel,
    Wait { ms: u64 },
    Select { stage: Stage },
    Advance,
    ClickFly,
    ClickToken,
    Reset,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(text)?)
    }

    /// Builds the rules from the `[rules]` table, using the same keys as the
    /// page query string.
    pub fn game_rules(&self) -> Result<GameRules, ScenarioError> {
        let pairs = self
            .rules
            .iter()
            .map(|(key, value)| (key.as_str(), value_text(value)));
        Ok(GameRules::from_pairs(pairs)?)
    }

    pub fn layout(&self, rules: &GameRules) -> Result<SceneLayout, ScenarioError> {
        let RegionSpec {
            left,
            top,
            width,
            height,
        } = self.region;
        if !(width > 0.0 && height > 0.0) {
            return Err(ScenarioError::Region { width, height });
        }
        let region = Rect::from_origin_size(Point::new(left, top), width, height);
        let layout = SceneLayout::new(region, rules);
        let Some(leaf) = self.leaf else {
            return Ok(layout);
        };
        let size = leaf.size.unwrap_or(rules.target_size);
        if !(size > 0.0) {
            return Err(ScenarioError::Leaf(size));
        }
        Ok(layout.with_target(Rect::from_origin_size(
            Point::new(leaf.left, leaf.top),
            size,
            size,
        )))
    }
}

fn value_text(value: &toml::Value) -> String {
    match value {
        toml::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
