//! Inline vector art for the flytrap, the fly and the game leaf.

use crate::geometry::Point;

pub const FOLIAGE_COLOR: &str = "#4ade80";
pub const STEM_COLOR: &str = "#22c55e";
pub const JAW_STROKE: &str = "#facc15";
pub const JAW_FILL: &str = "#fef08a";
pub const TOOTH_COLOR: &str = "#ef4444";
pub const FLY_COLOR: &str = "#1f2937";
pub const FLY_EYE_COLOR: &str = "white";

pub const TOOTH_COUNT: usize = 8;
pub const TOOTH_LENGTH: f64 = 5.0;

pub fn fmt_num(value: f64) -> String {
    let text = format!("{:.3}", value);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

/// A row of bristles along one jaw. Mirrored rows walk leftwards and lean
/// right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TeethRow {
    pub start: Point,
    pub step: Point,
    pub mirrored: bool,
}

impl TeethRow {
    pub fn paths(&self) -> Vec<String> {
        let dir = if self.mirrored { -1.0 } else { 1.0 };
        (0..TOOTH_COUNT)
            .map(|i| {
                let x = self.start.x + dir * self.step.x * i as f64;
                let y = self.start.y + self.step.y * i as f64;
                format!(
                    "M{},{} L{},{}",
                    fmt_num(x),
                    fmt_num(y),
                    fmt_num(x - dir * TOOTH_LENGTH),
                    fmt_num(y - TOOTH_LENGTH)
                )
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrapArt {
    pub view_box: &'static str,
    pub stem: &'static str,
    pub stem_width: f64,
    pub jaw_left: &'static str,
    pub jaw_right: &'static str,
    pub jaw_closed: &'static str,
    pub teeth_left: TeethRow,
    pub teeth_right: TeethRow,
    pub caught_body: Circle,
    pub caught_legs: &'static str,
}

/// Trap drawn in the stage panels.
pub const PANEL_TRAP: TrapArt = TrapArt {
    view_box: "0 0 200 200",
    stem: "M100,180 L100,120",
    stem_width: 10.0,
    jaw_left: "M100,120 Q70,100 80,70",
    jaw_right: "M100,120 Q130,100 120,70",
    jaw_closed: "M100,120 Q90,90 100,70 Q110,90 100,120",
    teeth_left: TeethRow {
        start: Point::new(80.0, 70.0),
        step: Point::new(5.0, 2.0),
        mirrored: false,
    },
    teeth_right: TeethRow {
        start: Point::new(120.0, 70.0),
        step: Point::new(5.0, 2.0),
        mirrored: true,
    },
    caught_body: Circle {
        cx: 100.0,
        cy: 95.0,
        r: 8.0,
    },
    caught_legs: "M92,95 L87,92 M92,95 L87,98 M108,95 L113,92 M108,95 L113,98",
};

/// The drop target in the game region.
pub const GAME_TRAP: TrapArt = TrapArt {
    view_box: "0 0 150 150",
    stem: "M75,150 L75,100",
    stem_width: 8.0,
    jaw_left: "M75,100 Q50,80 60,50",
    jaw_right: "M75,100 Q100,80 90,50",
    jaw_closed: "M75,100 Q65,70 75,50 Q85,70 75,100",
    teeth_left: TeethRow {
        start: Point::new(60.0, 50.0),
        step: Point::new(3.5, 1.5),
        mirrored: false,
    },
    teeth_right: TeethRow {
        start: Point::new(90.0, 50.0),
        step: Point::new(3.5, 1.5),
        mirrored: true,
    },
    caught_body: Circle {
        cx: 75.0,
        cy: 75.0,
        r: 6.0,
    },
    caught_legs: "M68,75 L63,72 M68,75 L63,78 M82,75 L87,72 M82,75 L87,78",
};

/// Ground leaves around the panel trap, as `(path, stroke width)`.
pub const PANEL_FOLIAGE: [(&str, f64); 4] = [
    ("M10,180 Q50,120 90,180", 8.0),
    ("M30,180 Q70,140 110,180", 8.0),
    ("M130,180 Q170,130 190,180", 8.0),
    ("M150,180 Q180,150 170,180", 6.0),
];

pub const JUICE_INNER_PATH: &str = "M95,100 Q100,90 105,100";
pub const JUICE_OUTER_PATH: &str = "M92,105 Q100,95 108,105";

pub const FLY_VIEW_BOX: &str = "0 0 50 50";
pub const FLY_BODY: Circle = Circle {
    cx: 25.0,
    cy: 25.0,
    r: 10.0,
};
pub const FLY_LEGS: &str = "M15,25 L5,20 M15,25 L5,30 M35,25 L45,20 M35,25 L45,30";
pub const FLY_WING: &str = "M25,15 Q35,10 40,15";
pub const FLY_EYES: [Circle; 2] = [
    Circle {
        cx: 20.0,
        cy: 22.0,
        r: 2.0,
    },
    Circle {
        cx: 30.0,
        cy: 22.0,
        r: 2.0,
    },
];
