use crate::geometry::{Point, Rect};
use crate::rules::GameRules;

pub const DEFAULT_REGION_WIDTH: f64 = 720.0;
pub const DEFAULT_REGION_HEIGHT: f64 = 384.0;
/// Gap between the leaf and the bottom edge of the game region.
pub const TARGET_BOTTOM_INSET: f64 = 32.0;

/// Measures the rendered game elements in client coordinates.
///
/// The controller asks for rects at the moment it needs them, so a host backed
/// by a live layout engine always answers with post-layout geometry. Any query
/// may return `None` while the element is not mounted.
pub trait LayoutProbe {
    /// The interactive region the fly is positioned in.
    fn region_rect(&self) -> Option<Rect>;

    /// The fly as rendered. `position` is the logical placement; hosts that can
    /// measure the element directly are free to ignore it.
    fn token_rect(&self, position: Point) -> Option<Rect>;

    /// The leaf the fly has to be dropped into.
    fn target_rect(&self) -> Option<Rect>;
}

impl<T: LayoutProbe + ?Sized> LayoutProbe for &T {
    fn region_rect(&self) -> Option<Rect> {
        (**self).region_rect()
    }

    fn token_rect(&self, position: Point) -> Option<Rect> {
        (**self).token_rect(position)
    }

    fn target_rect(&self) -> Option<Rect> {
        (**self).target_rect()
    }
}

/// Nothing is on screen yet.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unmounted;

impl LayoutProbe for Unmounted {
    fn region_rect(&self) -> Option<Rect> {
        None
    }

    fn token_rect(&self, _position: Point) -> Option<Rect> {
        None
    }

    fn target_rect(&self) -> Option<Rect> {
        None
    }
}

/// Computed layout for hosts without a layout engine: the fly is a square of
/// `token_size` at its logical position and the leaf sits at a fixed spot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneLayout {
    pub region: Rect,
    /// Leaf bounds relative to the region origin.
    pub target: Rect,
    pub token_size: f64,
}

impl SceneLayout {
    /// Places the leaf bottom-centre, the way the page lays it out.
    pub fn new(region: Rect, rules: &GameRules) -> Self {
        let size = rules.target_size;
        let left = (region.width() - size) * 0.5;
        let top = region.height() - TARGET_BOTTOM_INSET - size;
        Self {
            region,
            target: Rect::from_origin_size(Point::new(left, top), size, size),
            token_size: rules.token_size,
        }
    }

    pub fn with_default_region(rules: &GameRules) -> Self {
        let region = Rect::from_origin_size(
            Point::default(),
            DEFAULT_REGION_WIDTH,
            DEFAULT_REGION_HEIGHT,
        );
        Self::new(region, rules)
    }

    pub fn with_target(mut self, target: Rect) -> Self {
        self.target = target;
        self
    }
}

impl LayoutProbe for SceneLayout {
    fn region_rect(&self) -> Option<Rect> {
        Some(self.region)
    }

    fn token_rect(&self, position: Point) -> Option<Rect> {
        let origin = self.region.origin();
        Some(Rect::from_origin_size(
            position.offset(origin.x, origin.y),
            self.token_size,
            self.token_size,
        ))
    }

    fn target_rect(&self) -> Option<Rect> {
        Some(self.target.translate(self.region.origin()))
    }
}
