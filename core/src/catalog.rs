#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub game_title: &'static str,
    pub game_subtitle: &'static str,
    pub instructions: &'static str,
    pub reset_label: &'static str,
    pub next_stage_label: &'static str,
    pub facts_title: &'static str,
    pub footer_tagline: &'static str,
    pub footer_owner: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageCopy {
    pub slug: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}

include!(concat!(env!("OUT_DIR"), "/content_catalog.rs"));

pub fn footer_line(year: u32) -> String {
    format!("© {year} {}", PAGE.footer_owner)
}
