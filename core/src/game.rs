use crate::action::CoreAction;
use crate::catch::{self, CatchResolution, CatchTicket};
use crate::drag;
use crate::geometry::Point;
use crate::layout::LayoutProbe;
use crate::rules::GameRules;
use crate::stage::{self, Stage};
use crate::state::FlytrapState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// No drag was in flight.
    Ignored,
    Missed,
    Caught(CatchTicket),
}

/// Work the host has to carry out after a dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Dispatch `CoreAction::CompleteCatch(ticket)` once `delay_ms` has passed.
    /// Dropping the timer on teardown is enough; nothing else waits on it.
    ScheduleCatch { ticket: CatchTicket, delay_ms: u32 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub changed: bool,
    pub effect: Option<Effect>,
}

impl DispatchOutcome {
    fn changed(changed: bool) -> Self {
        Self {
            changed,
            effect: None,
        }
    }
}

/// Owns the page state and applies every mutation to it.
#[derive(Clone, Debug)]
pub struct FlytrapGame {
    rules: GameRules,
    state: FlytrapState,
}

impl FlytrapGame {
    pub fn new(rules: GameRules) -> Self {
        let state = FlytrapState::new(&rules);
        Self { rules, state }
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn state(&self) -> &FlytrapState {
        &self.state
    }

    pub fn stage(&self) -> Stage {
        self.state.stage
    }

    pub fn set_stage(&mut self, stage: Stage) -> bool {
        stage::select(&mut self.state, stage)
    }

    pub fn advance_stage(&mut self) -> Stage {
        stage::advance(&mut self.state)
    }

    pub fn click_fly(&mut self) -> bool {
        stage::nudge(&mut self.state)
    }

    pub fn click_token(&mut self) -> bool {
        if self.state.dragging || !drag::click_counts(&mut self.state) {
            return false;
        }
        stage::nudge(&mut self.state)
    }

    pub fn press_start(&mut self) -> bool {
        drag::press(&mut self.state)
    }

    pub fn pointer_move<L: LayoutProbe + ?Sized>(&mut self, pointer: Point, layout: &L) -> bool {
        drag::track(&mut self.state, pointer, layout, self.rules.half_token())
    }

    pub fn release<L: LayoutProbe + ?Sized>(&mut self, layout: &L) -> ReleaseOutcome {
        if !self.state.dragging {
            return ReleaseOutcome::Ignored;
        }
        let outcome = if catch::evaluate(layout, self.state.fly) {
            ReleaseOutcome::Caught(catch::commit(&mut self.state))
        } else {
            ReleaseOutcome::Missed
        };
        self.state.dragging = false;
        outcome
    }

    pub fn complete_catch(&mut self, ticket: CatchTicket) -> CatchResolution {
        catch::resolve(&mut self.state, ticket)
    }

    pub fn reset(&mut self) {
        self.state.reset(&self.rules);
    }

    pub fn dispatch<L: LayoutProbe + ?Sized>(
        &mut self,
        action: CoreAction,
        layout: &L,
    ) -> DispatchOutcome {
        match action {
            CoreAction::SelectStage(stage) => DispatchOutcome::changed(self.set_stage(stage)),
            CoreAction::AdvanceStage => {
                self.advance_stage();
                DispatchOutcome::changed(true)
            }
            CoreAction::ClickFly => DispatchOutcome::changed(self.click_fly()),
            CoreAction::ClickToken => DispatchOutcome::changed(self.click_token()),
            CoreAction::PressStart => DispatchOutcome::changed(self.press_start()),
            CoreAction::PointerMove { x, y } => {
                DispatchOutcome::changed(self.pointer_move(Point::new(x, y), layout))
            }
            CoreAction::Release => match self.release(layout) {
                ReleaseOutcome::Ignored => DispatchOutcome::changed(false),
                ReleaseOutcome::Missed => DispatchOutcome::changed(true),
                ReleaseOutcome::Caught(ticket) => DispatchOutcome {
                    changed: true,
                    effect: Some(Effect::ScheduleCatch {
                        ticket,
                        delay_ms: self.rules.catch_delay_ms,
                    }),
                },
            },
            CoreAction::CompleteCatch(ticket) => {
                let before = self.state.stage;
                self.complete_catch(ticket);
                DispatchOutcome::changed(self.state.stage != before)
            }
            CoreAction::Reset => {
                self.reset();
                DispatchOutcome::changed(true)
            }
        }
    }
}

impl Default for FlytrapGame {
    fn default() -> Self {
        Self::new(GameRules::default())
    }
}
