use crate::geometry::Point;
use crate::layout::LayoutProbe;
use crate::state::FlytrapState;

/// Region-relative placement that puts the fly's centre under the pointer.
/// The result is not clamped to the region.
pub fn pointer_to_position(pointer: Point, region_origin: Point, half_token: f64) -> Point {
    Point::new(
        pointer.x - region_origin.x - half_token,
        pointer.y - region_origin.y - half_token,
    )
}

pub(crate) fn press(state: &mut FlytrapState) -> bool {
    if state.dragging || state.leaf_closed {
        return false;
    }
    state.dragging = true;
    state.drag_moved = false;
    true
}

/// A click on the game fly that merely ends a drag is not a click. Consumes
/// the moved marker either way.
pub(crate) fn click_counts(state: &mut FlytrapState) -> bool {
    !std::mem::take(&mut state.drag_moved)
}

pub(crate) fn track<L: LayoutProbe + ?Sized>(
    state: &mut FlytrapState,
    pointer: Point,
    layout: &L,
    half_token: f64,
) -> bool {
    if !state.dragging {
        return false;
    }
    let Some(region) = layout.region_rect() else {
        return false;
    };
    let next = pointer_to_position(pointer, region.origin(), half_token);
    if next == state.fly {
        return false;
    }
    state.fly = next;
    state.drag_moved = true;
    true
}
