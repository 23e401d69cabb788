use std::fmt;

use flytrap_core::{
    CatchResolution, CatchTicket, CoreAction, DispatchOutcome, Effect, FlytrapGame, FlytrapState,
    GameRules, InputEvent, InputPhase, Point, SceneLayout, TimerQueue,
};

use crate::scenario::{Scenario, ScenarioError, Step};

#[derive(Clone, Debug, PartialEq)]
pub struct TimelineEntry {
    pub at_ms: u64,
    pub event: String,
    pub state: FlytrapState,
}

impl fmt::Display for TimelineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = &self.state;
        write!(
            f,
            "{:>6}ms  {:<16} stage={:<9} fly=({}, {}) dragging={} closed={}",
            self.at_ms,
            self.event,
            state.stage,
            state.fly.x,
            state.fly.y,
            state.dragging,
            state.leaf_closed
        )
    }
}

/// Drives a game against a fixed layout and a virtual clock.
pub struct Replay {
    game: FlytrapGame,
    layout: SceneLayout,
    timers: TimerQueue<CatchTicket>,
    timeline: Vec<TimelineEntry>,
}

impl Replay {
    pub fn new(rules: GameRules, layout: SceneLayout) -> Self {
        let game = FlytrapGame::new(rules);
        let timeline = vec![TimelineEntry {
            at_ms: 0,
            event: "mount".to_string(),
            state: game.state().clone(),
        }];
        Self {
            game,
            layout,
            timers: TimerQueue::new(),
            timeline,
        }
    }

    /// Sets up a replay for `scenario` without running any steps.
    /// `delay_ms` overrides the scenario's catch delay.
    pub fn for_scenario(
        scenario: &Scenario,
        delay_ms: Option<u32>,
    ) -> Result<Self, ScenarioError> {
        let mut rules = scenario.game_rules()?;
        if let Some(delay_ms) = delay_ms {
            rules.apply_pair(flytrap_core::rules::KEY_DELAY, &delay_ms.to_string())?;
        }
        let layout = scenario.layout(&rules)?;
        Ok(Self::new(rules, layout))
    }

    pub fn run(scenario: &Scenario, delay_ms: Option<u32>) -> Result<Self, ScenarioError> {
        let mut replay = Self::for_scenario(scenario, delay_ms)?;
        for step in &scenario.steps {
            replay.apply(*step);
        }
        Ok(replay)
    }

    pub fn game(&self) -> &FlytrapGame {
        &self.game
    }

    pub fn layout(&self) -> &SceneLayout {
        &self.layout
    }

    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    pub fn pending_catches(&self) -> usize {
        self.timers.len()
    }

    pub fn apply(&mut self, step: Step) {
        match step {
            Step::Press => {
                let input = InputEvent::mouse(InputPhase::Start, Point::default());
                self.input("press", input);
            }
            Step::Move { x, y } => {
                let input = InputEvent::mouse(InputPhase::Move, Point::new(x, y));
                self.input("move", input);
            }
            Step::Release => {
                let input = InputEvent::mouse(InputPhase::End, Point::default());
                self.input("release", input);
            }
            Step::Leave => {
                let input = InputEvent::mouse(InputPhase::Leave, Point::default());
                self.input("leave", input);
            }
            Step::TouchStart { x, y } => {
                let input = InputEvent::touch(InputPhase::Start, &[Point::new(x, y)]);
                self.input("touch_start", input);
            }
            Step::TouchMove { x, y } => {
                let input = InputEvent::touch(InputPhase::Move, &[Point::new(x, y)]);
                self.input("touch_move", input);
            }
            Step::TouchEnd => {
                self.input("touch_end", InputEvent::touch(InputPhase::End, &[]));
            }
            Step::TouchCancel => {
                self.input("touch_cancel", InputEvent::touch(InputPhase::Cancel, &[]));
            }
            Step::Wait { ms } => self.wait(ms),
            Step::Select { stage } => self.dispatch("select", CoreAction::SelectStage(stage)),
            Step::Advance => self.dispatch("advance", CoreAction::AdvanceStage),
            Step::ClickFly => self.dispatch("click_fly", CoreAction::ClickFly),
            Step::ClickToken => self.dispatch("click_token", CoreAction::ClickToken),
            Step::Reset => self.dispatch("reset", CoreAction::Reset),
        }
    }

    /// Moves the clock forward, redeeming any catch that comes due.
    pub fn wait(&mut self, ms: u64) {
        for (due_ms, ticket) in self.timers.advance(ms) {
            let event = match self.game.complete_catch(ticket) {
                CatchResolution::Digesting => "digest",
                CatchResolution::Stale => "stale_catch",
            };
            self.record(due_ms, event);
        }
    }

    fn input(&mut self, label: &str, input: InputEvent) {
        if let Some(action) = input.to_action() {
            self.dispatch(label, action);
        }
    }

    fn dispatch(&mut self, label: &str, action: CoreAction) {
        let outcome = self.game.dispatch(action, &self.layout);
        self.record(self.timers.now_ms(), label);
        self.run_effect(outcome);
    }

    fn run_effect(&mut self, outcome: DispatchOutcome) {
        if let Some(Effect::ScheduleCatch { ticket, delay_ms }) = outcome.effect {
            self.timers.schedule(delay_ms, ticket);
            let now = self.timers.now_ms();
            self.record(now, "catch");
        }
    }

    fn record(&mut self, at_ms: u64, event: &str) {
        self.timeline.push(TimelineEntry {
            at_ms,
            event: event.to_string(),
            state: self.game.state().clone(),
        });
    }
}
