use crate::catch::CatchTicket;
use crate::stage::Stage;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CoreAction {
    SelectStage(Stage),
    AdvanceStage,
    /// Click on the buzzing fly in the waiting panel.
    ClickFly,
    /// Click on the draggable fly. The browser also reports one after every
    /// mouse drag, so a click ending a drag that moved is dropped.
    ClickToken,
    PressStart,
    /// Pointer position in client coordinates.
    PointerMove {
        x: f64,
        y: f64,
    },
    Release,
    CompleteCatch(CatchTicket),
    Reset,
}
