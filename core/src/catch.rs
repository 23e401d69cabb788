use crate::geometry::{rects_overlap, Point};
use crate::layout::LayoutProbe;
use crate::stage::Stage;
use crate::state::FlytrapState;

/// Issued for each successful catch. Redeeming it moves the stage to
/// digesting unless the catch was undone in the meantime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CatchTicket {
    epoch: u64,
}

impl CatchTicket {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatchResolution {
    Digesting,
    /// The leaf was reopened before the timer fired.
    Stale,
}

/// Overlap test on the rendered rects. Anything that cannot be measured is a
/// miss.
pub fn evaluate<L: LayoutProbe + ?Sized>(layout: &L, fly: Point) -> bool {
    let (Some(token), Some(target)) = (layout.token_rect(fly), layout.target_rect()) else {
        return false;
    };
    rects_overlap(&token, &target)
}

pub(crate) fn commit(state: &mut FlytrapState) -> CatchTicket {
    state.leaf_closed = true;
    CatchTicket {
        epoch: state.catch_epoch,
    }
}

pub(crate) fn resolve(state: &mut FlytrapState, ticket: CatchTicket) -> CatchResolution {
    if ticket.epoch != state.catch_epoch || !state.leaf_closed {
        return CatchResolution::Stale;
    }
    state.stage = Stage::Digesting;
    CatchResolution::Digesting
}
