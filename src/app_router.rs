use web_sys::UrlSearchParams;

use flytrap_core::rules::KEYS;
use flytrap_core::GameRules;

/// Rules from the page query, e.g. `?delay=500&stage=catching`.
/// A bad value is reported and that key keeps its default.
pub(crate) fn load_rules() -> GameRules {
    let mut rules = GameRules::default();
    let Some(params) = search_params() else {
        return rules;
    };
    for key in KEYS {
        let Some(value) = params.get(key) else {
            continue;
        };
        if let Err(err) = rules.apply_pair(key, &value) {
            gloo::console::warn!(format!("flytrap: ignoring query value: {err}"));
        }
    }
    rules
}

fn search_params() -> Option<UrlSearchParams> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()
}
