use web_sys::{DomRect, Element, MouseEvent, TouchEvent};
use yew::NodeRef;

use flytrap_core::{InputEvent, InputPhase, LayoutProbe, Point, Rect};

/// Reads the game elements' client rects on demand.
#[derive(Clone, Default, PartialEq)]
pub(crate) struct DomLayout {
    pub(crate) region: NodeRef,
    pub(crate) token: NodeRef,
    pub(crate) target: NodeRef,
}

impl DomLayout {
    fn measure(node: &NodeRef) -> Option<Rect> {
        let element = node.cast::<Element>()?;
        Some(rect_from_dom(&element.get_bounding_client_rect()))
    }
}

impl LayoutProbe for DomLayout {
    fn region_rect(&self) -> Option<Rect> {
        Self::measure(&self.region)
    }

    /// Uses the element's measured size at the logical position, so a release
    /// right after a move does not see the previous frame's placement.
    fn token_rect(&self, position: Point) -> Option<Rect> {
        let token = Self::measure(&self.token)?;
        let origin = self.region_rect()?.origin();
        Some(Rect::from_origin_size(
            position.offset(origin.x, origin.y),
            token.width(),
            token.height(),
        ))
    }

    fn target_rect(&self) -> Option<Rect> {
        Self::measure(&self.target)
    }
}

fn rect_from_dom(rect: &DomRect) -> Rect {
    Rect::from_edges(rect.left(), rect.top(), rect.right(), rect.bottom())
}

pub(crate) fn mouse_input(event: &MouseEvent, phase: InputPhase) -> InputEvent {
    let client = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
    InputEvent::mouse(phase, client)
}

pub(crate) fn touch_input(event: &TouchEvent, phase: InputPhase) -> InputEvent {
    InputEvent::touch(phase, &touch_points(event))
}

fn touch_points(event: &TouchEvent) -> Vec<Point> {
    let list = event.touches();
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .map(|touch| Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
        .collect()
}
