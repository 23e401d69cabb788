//! Keyframe table for the decorative animations.
//!
//! Each entry is compiled into a CSS `@keyframes` block plus a `.motion-*`
//! class, so the browser does the tweening and the game state never waits on
//! an animation.

use std::fmt::Write;

use crate::art::fmt_num;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Pixels.
    TranslateX,
    /// Pixels.
    TranslateY,
    Scale,
    /// Degrees.
    Rotate,
    Opacity,
    /// Fraction of a stroke drawn, for paths carrying `pathLength="1"`.
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    pub channel: Channel,
    pub values: &'static [f64],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Forever,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub name: &'static str,
    pub tracks: &'static [Track],
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub repeat: Repeat,
    pub easing: &'static str,
}

const EASE_IN_OUT: &str = "ease-in-out";
const EASE_OUT: &str = "ease-out";

pub const FLY_BUZZ: Motion = Motion {
    name: "fly-buzz",
    tracks: &[
        Track {
            channel: Channel::TranslateX,
            values: &[0.0, 10.0, -10.0, 5.0, -5.0, 0.0],
        },
        Track {
            channel: Channel::TranslateY,
            values: &[0.0, -5.0, 5.0, -10.0, 10.0, 0.0],
        },
    ],
    duration_ms: 8000,
    delay_ms: 0,
    repeat: Repeat::Forever,
    easing: EASE_IN_OUT,
};

pub const FLY_WIGGLE: Motion = Motion {
    name: "fly-wiggle",
    tracks: &[Track {
        channel: Channel::Rotate,
        values: &[0.0, 10.0, -10.0, 5.0, -5.0, 0.0],
    }],
    duration_ms: 5000,
    delay_ms: 0,
    repeat: Repeat::Forever,
    easing: EASE_IN_OUT,
};

pub const PLANT_BREATHE: Motion = Motion {
    name: "plant-breathe",
    tracks: &[Track {
        channel: Channel::Scale,
        values: &[0.9, 1.0, 0.9],
    }],
    duration_ms: 5000,
    delay_ms: 0,
    repeat: Repeat::Forever,
    easing: EASE_IN_OUT,
};

pub const DIGEST_PULSE: Motion = Motion {
    name: "digest-pulse",
    tracks: &[Track {
        channel: Channel::Scale,
        values: &[1.0, 1.02, 1.0],
    }],
    duration_ms: 4000,
    delay_ms: 0,
    repeat: Repeat::Forever,
    easing: EASE_IN_OUT,
};

pub const JUICE_INNER: Motion = Motion {
    name: "juice-inner",
    tracks: &[Track {
        channel: Channel::Draw,
        values: &[0.0, 1.0, 0.0],
    }],
    duration_ms: 3000,
    delay_ms: 0,
    repeat: Repeat::Forever,
    easing: EASE_IN_OUT,
};

pub const JUICE_OUTER: Motion = Motion {
    name: "juice-outer",
    tracks: &[Track {
        channel: Channel::Draw,
        values: &[0.0, 1.0, 0.0],
    }],
    duration_ms: 4000,
    delay_ms: 500,
    repeat: Repeat::Forever,
    easing: EASE_IN_OUT,
};

pub const TITLE_DROP: Motion = Motion {
    name: "title-drop",
    tracks: &[
        Track {
            channel: Channel::TranslateY,
            values: &[-50.0, 0.0],
        },
        Track {
            channel: Channel::Opacity,
            values: &[0.0, 1.0],
        },
    ],
    duration_ms: 600,
    delay_ms: 0,
    repeat: Repeat::Once,
    easing: EASE_OUT,
};

pub const CARD_RISE: Motion = Motion {
    name: "card-rise",
    tracks: &[
        Track {
            channel: Channel::TranslateY,
            values: &[50.0, 0.0],
        },
        Track {
            channel: Channel::Opacity,
            values: &[0.0, 1.0],
        },
    ],
    duration_ms: 600,
    delay_ms: 300,
    repeat: Repeat::Once,
    easing: EASE_OUT,
};

pub const FACTS_RISE: Motion = Motion {
    name: "facts-rise",
    delay_ms: 600,
    ..CARD_RISE
};

pub const HINT_FADE: Motion = Motion {
    name: "hint-fade",
    tracks: &[Track {
        channel: Channel::Opacity,
        values: &[0.0, 1.0],
    }],
    duration_ms: 400,
    delay_ms: 1000,
    repeat: Repeat::Once,
    easing: EASE_OUT,
};

pub const LEAF_SNAP: Motion = Motion {
    name: "leaf-snap",
    tracks: &[
        Track {
            channel: Channel::Scale,
            values: &[0.9, 1.0],
        },
        Track {
            channel: Channel::Opacity,
            values: &[0.0, 1.0],
        },
    ],
    duration_ms: 300,
    delay_ms: 0,
    repeat: Repeat::Once,
    easing: EASE_OUT,
};

pub const ALL: &[Motion] = &[
    FLY_BUZZ,
    FLY_WIGGLE,
    PLANT_BREATHE,
    DIGEST_PULSE,
    JUICE_INNER,
    JUICE_OUTER,
    TITLE_DROP,
    CARD_RISE,
    FACTS_RISE,
    HINT_FADE,
    LEAF_SNAP,
];

impl Motion {
    pub fn class_name(&self) -> String {
        format!("motion-{}", self.name)
    }

    fn stop_count(&self) -> usize {
        self.tracks
            .iter()
            .map(|track| track.values.len())
            .max()
            .unwrap_or(0)
    }

    fn value_at(track: &Track, index: usize) -> f64 {
        let last = track.values.len().saturating_sub(1);
        track.values.get(index.min(last)).copied().unwrap_or(0.0)
    }

    fn declarations_at(&self, index: usize) -> String {
        let mut translate: Option<(f64, f64)> = None;
        let mut transforms = Vec::new();
        let mut declarations = Vec::new();
        for track in self.tracks {
            let value = Self::value_at(track, index);
            match track.channel {
                Channel::TranslateX => translate.get_or_insert((0.0, 0.0)).0 = value,
                Channel::TranslateY => translate.get_or_insert((0.0, 0.0)).1 = value,
                Channel::Scale => transforms.push(format!("scale({})", fmt_num(value))),
                Channel::Rotate => transforms.push(format!("rotate({}deg)", fmt_num(value))),
                Channel::Opacity => declarations.push(format!("opacity: {}", fmt_num(value))),
                Channel::Draw => {
                    declarations.push(format!("stroke-dashoffset: {}", fmt_num(1.0 - value)))
                }
            }
        }
        if let Some((x, y)) = translate {
            transforms.insert(0, format!("translate({}px, {}px)", fmt_num(x), fmt_num(y)));
        }
        if !transforms.is_empty() {
            declarations.insert(0, format!("transform: {}", transforms.join(" ")));
        }
        declarations.join("; ")
    }

    pub fn keyframes_css(&self) -> String {
        let stops = self.stop_count();
        let mut css = String::new();
        let _ = writeln!(css, "@keyframes {} {{", self.name);
        for index in 0..stops {
            let percent = if stops > 1 {
                index as f64 * 100.0 / (stops - 1) as f64
            } else {
                100.0
            };
            let _ = writeln!(
                css,
                "  {}% {{ {}; }}",
                fmt_num(percent),
                self.declarations_at(index)
            );
        }
        css.push_str("}\n");
        css
    }

    pub fn animation_css(&self) -> String {
        let iterations = match self.repeat {
            Repeat::Once => "1",
            Repeat::Forever => "infinite",
        };
        format!(
            "{} {}ms {} {}ms {} both",
            self.name, self.duration_ms, self.easing, self.delay_ms, iterations
        )
    }

    pub fn class_css(&self) -> String {
        format!(
            ".{} {{ animation: {}; transform-box: fill-box; transform-origin: center; }}\n",
            self.class_name(),
            self.animation_css()
        )
    }
}

/// Every keyframe block and class rule, ready for a `<style>` element.
pub fn stylesheet() -> String {
    let mut css = String::new();
    for motion in ALL {
        css.push_str(&motion.keyframes_css());
        css.push_str(&motion.class_css());
    }
    css
}
