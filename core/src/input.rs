use crate::action::CoreAction;
use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputPhase {
    /// Press that began on the fly.
    Start,
    Move,
    End,
    Cancel,
    /// Pointer left the game region.
    Leave,
}

/// A mouse or touch event reduced to the one point the game cares about.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputEvent {
    pub kind: PointerKind,
    pub phase: InputPhase,
    pub client: Option<Point>,
}

impl InputEvent {
    pub fn mouse(phase: InputPhase, client: Point) -> Self {
        Self {
            kind: PointerKind::Mouse,
            phase,
            client: Some(client),
        }
    }

    /// Only the first active touch is honoured; the rest are ignored.
    pub fn touch(phase: InputPhase, touches: &[Point]) -> Self {
        Self {
            kind: PointerKind::Touch,
            phase,
            client: touches.first().copied(),
        }
    }

    pub fn to_action(&self) -> Option<CoreAction> {
        match self.phase {
            InputPhase::Start => Some(CoreAction::PressStart),
            InputPhase::Move => self
                .client
                .map(|point| CoreAction::PointerMove {
                    x: point.x,
                    y: point.y,
                }),
            InputPhase::End | InputPhase::Cancel | InputPhase::Leave => Some(CoreAction::Release),
        }
    }

    /// Touch gestures on the fly must not scroll or pan the page.
    pub fn suppresses_default(&self, dragging: bool) -> bool {
        match self.kind {
            PointerKind::Mouse => false,
            PointerKind::Touch => self.phase == InputPhase::Start || dragging,
        }
    }
}
