use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::timers::callback::Timeout;

use flytrap_core::{
    render, CatchTicket, CoreAction, DispatchOutcome, Effect, FlytrapGame, FlytrapState,
    GameRules, LayoutProbe, SceneView, Unmounted,
};

pub(crate) type AppSubscriber = Rc<dyn Fn()>;

/// Owns the game for the lifetime of the page and fans changes out to views.
pub(crate) struct AppCore {
    game: RefCell<FlytrapGame>,
    snapshot: RefCell<AppSnapshot>,
    layout: RefCell<Rc<dyn LayoutProbe>>,
    pending: RefCell<Vec<PendingCatch>>,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
}

struct PendingCatch {
    ticket: CatchTicket,
    _timer: Timeout,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct AppSnapshot {
    pub(crate) state: FlytrapState,
    pub(crate) scene: SceneView,
}

impl AppSnapshot {
    fn from_game(game: &FlytrapGame) -> Self {
        Self {
            state: game.state().clone(),
            scene: render(game.state(), game.rules()),
        }
    }
}

impl AppCore {
    pub(crate) fn new(rules: GameRules) -> Rc<Self> {
        let game = FlytrapGame::new(rules);
        let snapshot = AppSnapshot::from_game(&game);
        Rc::new(Self {
            game: RefCell::new(game),
            snapshot: RefCell::new(snapshot),
            layout: RefCell::new(Rc::new(Unmounted)),
            pending: RefCell::new(Vec::new()),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        })
    }

    pub(crate) fn subscribe(&self, subscriber: AppSubscriber) -> AppSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        AppSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    pub(crate) fn snapshot(&self) -> AppSnapshot {
        self.snapshot.borrow().clone()
    }

    pub(crate) fn set_layout(&self, layout: Rc<dyn LayoutProbe>) {
        *self.layout.borrow_mut() = layout;
    }

    #[cfg(test)]
    pub(crate) fn pending_catches(&self) -> usize {
        self.pending.borrow().len()
    }

    pub(crate) fn apply_action(self: &Rc<Self>, action: CoreAction) {
        let layout = self.layout.borrow().clone();
        let outcome = self.game.borrow_mut().dispatch(action, layout.as_ref());
        self.log_outcome(action, &outcome);
        if let Some(effect) = outcome.effect {
            self.run_effect(effect);
        }
        self.drop_stale_timers();
        if outcome.changed {
            self.notify();
        }
    }

    /// Drops every pending timer; none of them fire after this.
    pub(crate) fn shutdown(&self) {
        self.pending.borrow_mut().clear();
    }

    fn run_effect(self: &Rc<Self>, effect: Effect) {
        match effect {
            Effect::ScheduleCatch { ticket, delay_ms } => {
                let core: Weak<Self> = Rc::downgrade(self);
                let timer = Timeout::new(delay_ms, move || {
                    let Some(core) = core.upgrade() else {
                        return;
                    };
                    core.pending
                        .borrow_mut()
                        .retain(|pending| pending.ticket != ticket);
                    core.apply_action(CoreAction::CompleteCatch(ticket));
                });
                self.pending.borrow_mut().push(PendingCatch {
                    ticket,
                    _timer: timer,
                });
            }
        }
    }

    fn drop_stale_timers(&self) {
        let epoch = self.game.borrow().state().catch_epoch;
        self.pending
            .borrow_mut()
            .retain(|pending| pending.ticket.epoch() == epoch);
    }

    fn log_outcome(&self, action: CoreAction, outcome: &DispatchOutcome) {
        let state = self.game.borrow().state().clone();
        match action {
            CoreAction::Release => match outcome.effect {
                Some(Effect::ScheduleCatch { ticket, delay_ms }) => {
                    gloo::console::log!(format!(
                        "flytrap: caught (epoch {}), digesting in {delay_ms}ms",
                        ticket.epoch()
                    ));
                }
                None if outcome.changed => {
                    gloo::console::log!(format!(
                        "flytrap: missed at ({}, {})",
                        state.fly.x, state.fly.y
                    ));
                }
                None => {}
            },
            CoreAction::CompleteCatch(ticket) => {
                if ticket.epoch() == state.catch_epoch && state.leaf_closed {
                    gloo::console::log!("flytrap: digesting");
                } else {
                    gloo::console::warn!(format!(
                        "flytrap: ignoring stale catch (epoch {}, current {})",
                        ticket.epoch(),
                        state.catch_epoch
                    ));
                }
            }
            CoreAction::Reset => {
                gloo::console::log!("flytrap: reset");
            }
            _ => {}
        }
    }

    fn notify(&self) {
        *self.snapshot.borrow_mut() = AppSnapshot::from_game(&self.game.borrow());
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }
}

pub(crate) struct AppSubscription {
    subscriber: AppSubscriber,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
}

impl Drop for AppSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}
