pub mod action;
pub mod art;
pub mod catalog;
pub mod catch;
pub mod drag;
pub mod game;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod motion;
pub mod rules;
pub mod stage;
pub mod state;
pub mod timer;
pub mod view;

pub use action::CoreAction;
pub use catch::{CatchResolution, CatchTicket};
pub use game::{DispatchOutcome, Effect, FlytrapGame, ReleaseOutcome};
pub use geometry::{rects_overlap, Point, Rect};
pub use input::{InputEvent, InputPhase, PointerKind};
pub use layout::{LayoutProbe, SceneLayout, Unmounted};
pub use rules::{GameRules, RulesError, DEFAULT_CATCH_DELAY_MS, DEFAULT_FLY_POSITION};
pub use stage::{Stage, StageParseError};
pub use state::FlytrapState;
pub use timer::{TimerId, TimerQueue};
pub use view::{render, GameView, LeafPose, PanelArt, PanelView, SceneView, TokenView};
