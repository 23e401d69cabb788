use crate::geometry::Point;
use crate::rules::GameRules;
use crate::stage::Stage;

#[derive(Clone, Debug, PartialEq)]
pub struct FlytrapState {
    pub stage: Stage,
    /// Fly placement relative to the game region's top-left corner.
    pub fly: Point,
    pub dragging: bool,
    /// The current or most recent drag actually moved the fly.
    pub drag_moved: bool,
    /// Set by a successful catch; the fly is consumed while this holds.
    pub leaf_closed: bool,
    /// Bumped whenever a catch is undone so late timers can be recognised.
    pub catch_epoch: u64,
}

impl FlytrapState {
    pub fn new(rules: &GameRules) -> Self {
        Self {
            stage: rules.initial_stage,
            fly: rules.default_fly,
            dragging: false,
            drag_moved: false,
            leaf_closed: false,
            catch_epoch: 0,
        }
    }

    pub fn fly_visible(&self) -> bool {
        !self.leaf_closed
    }

    /// Matches the tuple the reset control restores.
    pub fn is_reset(&self, rules: &GameRules) -> bool {
        self.stage == Stage::Waiting
            && self.fly == rules.default_fly
            && !self.dragging
            && !self.leaf_closed
    }

    pub(crate) fn reset(&mut self, rules: &GameRules) {
        self.stage = Stage::Waiting;
        self.fly = rules.default_fly;
        self.dragging = false;
        self.drag_moved = false;
        self.leaf_closed = false;
        self.catch_epoch = self.catch_epoch.wrapping_add(1);
    }
}

impl Default for FlytrapState {
    fn default() -> Self {
        Self::new(&GameRules::default())
    }
}
