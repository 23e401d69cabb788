use crate::rules::GameRules;
use crate::stage::Stage;
use crate::state::FlytrapState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeafPose {
    Open,
    Closed,
}

impl LeafPose {
    fn from_closed(closed: bool) -> Self {
        if closed {
            LeafPose::Closed
        } else {
            LeafPose::Open
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelArt {
    /// Open trap with a fly buzzing around it. Clicking the fly nudges the
    /// stage forward.
    Waiting,
    /// Jaws follow the game leaf: they shut once the fly is caught.
    Catching { jaws: LeafPose },
    Digesting,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelView {
    pub stage: Stage,
    pub emphasized: bool,
    pub title: &'static str,
    pub caption: &'static str,
    pub art: PanelArt,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TokenView {
    /// Region-relative offsets, in pixels.
    pub left: f64,
    pub top: f64,
    pub size: f64,
    /// Idle wiggle; held still while dragged.
    pub wiggle: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameView {
    /// `None` once the leaf has consumed the fly.
    pub token: Option<TokenView>,
    pub leaf: LeafPose,
    pub leaf_size: f64,
    pub dragging: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneView {
    pub panels: Vec<PanelView>,
    pub game: GameView,
}

impl SceneView {
    pub fn emphasized(&self) -> Option<Stage> {
        self.panels
            .iter()
            .find(|panel| panel.emphasized)
            .map(|panel| panel.stage)
    }

    pub fn panel(&self, stage: Stage) -> &PanelView {
        &self.panels[stage.index()]
    }
}

pub fn render(state: &FlytrapState, rules: &GameRules) -> SceneView {
    let leaf = LeafPose::from_closed(state.leaf_closed);
    let panels = Stage::ALL
        .into_iter()
        .map(|stage| PanelView {
            stage,
            emphasized: stage == state.stage,
            title: stage.title(),
            caption: stage.caption(),
            art: match stage {
                Stage::Waiting => PanelArt::Waiting,
                Stage::Catching => PanelArt::Catching { jaws: leaf },
                Stage::Digesting => PanelArt::Digesting,
            },
        })
        .collect();
    let token = state.fly_visible().then(|| TokenView {
        left: state.fly.x,
        top: state.fly.y,
        size: rules.token_size,
        wiggle: !state.dragging,
    });
    SceneView {
        panels,
        game: GameView {
            token,
            leaf,
            leaf_size: rules.target_size,
            dragging: state.dragging,
        },
    }
}
