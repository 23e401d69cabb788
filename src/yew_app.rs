use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use js_sys::Date;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Node, TouchEvent};
use yew::prelude::*;

use crate::app_core::AppCore;
use crate::app_router;
use crate::input::{mouse_input, touch_input, DomLayout};
use crate::svg_view::{FlySvg, PanelIllustration, TrapSvg};
use flytrap_core::art::GAME_TRAP;
use flytrap_core::catalog::{footer_line, FACTS, PAGE};
use flytrap_core::motion::{
    self, CARD_RISE, FACTS_RISE, FLY_WIGGLE, HINT_FADE, LEAF_SNAP, TITLE_DROP,
};
use flytrap_core::{CoreAction, InputPhase, LeafPose, Unmounted};

#[derive(Properties)]
struct AppProps {
    core: Rc<AppCore>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
    }
}

fn touch_listener(
    target: &Element,
    event_type: &'static str,
    phase: InputPhase,
    core: Rc<AppCore>,
    token: NodeRef,
) -> EventListener {
    EventListener::new_with_options(
        target,
        event_type,
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: false,
        },
        move |event: &Event| {
            let Some(event) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            if phase == InputPhase::Start && !event_hits(event, &token) {
                return;
            }
            let input = touch_input(event, phase);
            if input.suppresses_default(core.snapshot().state.dragging) {
                event.prevent_default();
            }
            if let Some(action) = input.to_action() {
                core.apply_action(action);
            }
        },
    )
}

fn event_hits(event: &TouchEvent, node: &NodeRef) -> bool {
    let Some(element) = node.cast::<Node>() else {
        return false;
    };
    let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
    element.contains(target.as_ref())
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let core = props.core.clone();
    let snapshot = use_state(|| core.snapshot());
    let layout = use_memo((), |_| DomLayout::default());
    {
        let core = core.clone();
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            let core_for_cb = core.clone();
            let subscription = core.subscribe(Rc::new(move || {
                snapshot.set(core_for_cb.snapshot());
            }));
            move || drop(subscription)
        });
    }
    {
        let core = core.clone();
        let layout = layout.clone();
        use_effect_with((), move |_| {
            core.set_layout(Rc::new((*layout).clone()));
            let mut listeners = Vec::new();
            if let Some(region) = layout.region.cast::<Element>() {
                let phases = [
                    ("touchstart", InputPhase::Start),
                    ("touchmove", InputPhase::Move),
                    ("touchend", InputPhase::End),
                    ("touchcancel", InputPhase::Cancel),
                ];
                for (event_type, phase) in phases {
                    listeners.push(touch_listener(
                        &region,
                        event_type,
                        phase,
                        core.clone(),
                        layout.token.clone(),
                    ));
                }
            }
            move || {
                drop(listeners);
                core.shutdown();
                core.set_layout(Rc::new(Unmounted));
            }
        });
    }

    let dispatch = {
        let core = core.clone();
        Callback::from(move |action: CoreAction| core.apply_action(action))
    };
    let mouse = |phase: InputPhase| {
        let dispatch = dispatch.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(action) = mouse_input(&event, phase).to_action() {
                dispatch.emit(action);
            }
        })
    };
    let on_token_down = {
        let press = mouse(InputPhase::Start);
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            press.emit(event);
        })
    };
    let on_fly_click = dispatch.reform(|_: MouseEvent| CoreAction::ClickFly);
    let on_token_click = dispatch.reform(|_: MouseEvent| CoreAction::ClickToken);
    let on_next_stage = dispatch.reform(|_: MouseEvent| CoreAction::AdvanceStage);
    let on_reset = dispatch.reform(|_: MouseEvent| CoreAction::Reset);

    let scene = &snapshot.scene;
    let game = &scene.game;

    let panels = scene.panels.iter().map(|panel| {
        let stage = panel.stage;
        let onclick = dispatch.reform(move |_: MouseEvent| CoreAction::SelectStage(stage));
        let state_class = if panel.emphasized { "active" } else { "dimmed" };
        html! {
            <div class={classes!("stage-panel", state_class)} key={stage.slug()} {onclick}>
                <PanelIllustration art={panel.art} on_fly_click={on_fly_click.clone()} />
                <h3 class="stage-title">{panel.title}</h3>
                <p class="stage-caption">{panel.caption}</p>
            </div>
        }
    });

    let token = game.token.map(|token| {
        let style = format!(
            "left: {}px; top: {}px; width: {}px; height: {}px;",
            token.left, token.top, token.size, token.size
        );
        let class = classes!(
            "fly-token",
            token.wiggle.then(|| FLY_WIGGLE.class_name()),
            game.dragging.then_some("dragging")
        );
        html! {
            <div
                ref={layout.token.clone()}
                {class}
                {style}
                onmousedown={on_token_down.clone()}
                onclick={on_token_click.clone()}
            >
                <FlySvg />
            </div>
        }
    });

    let leaf_key = match game.leaf {
        LeafPose::Open => "open",
        LeafPose::Closed => "closed",
    };
    let leaf_style = format!("width: {0}px; height: {0}px;", game.leaf_size);
    let year = Date::new_0().get_full_year();

    html! {
        <div class="flytrap-page">
            <style>{motion::stylesheet()}</style>
            <header class={classes!("page-header", TITLE_DROP.class_name())}>
                <h1>{PAGE.title}</h1>
                <p>{PAGE.subtitle}</p>
            </header>
            <section class="stage-panels">
                { for panels }
            </section>
            <div class="stage-controls">
                <button class="next-stage" onclick={on_next_stage}>{PAGE.next_stage_label}</button>
            </div>
            <section class={classes!("game-card", CARD_RISE.class_name())}>
                <h2>{PAGE.game_title}</h2>
                <p class="game-subtitle">{PAGE.game_subtitle}</p>
                <div
                    class="game-region"
                    ref={layout.region.clone()}
                    onmousemove={mouse(InputPhase::Move)}
                    onmouseup={mouse(InputPhase::End)}
                    onmouseleave={mouse(InputPhase::Leave)}
                >
                    <div class="game-leaf" ref={layout.target.clone()} style={leaf_style}>
                        <TrapSvg
                            key={leaf_key}
                            art={GAME_TRAP}
                            pose={game.leaf}
                            class={classes!("game-trap", LEAF_SNAP.class_name())}
                        />
                    </div>
                    {token}
                    <div class={classes!("hint-bubble", HINT_FADE.class_name())}>
                        {PAGE.instructions}
                    </div>
                </div>
                <button class="reset-button" onclick={on_reset}>{PAGE.reset_label}</button>
            </section>
            <section class={classes!("facts-card", FACTS_RISE.class_name())}>
                <h2>{PAGE.facts_title}</h2>
                <ol>
                    { for FACTS.iter().map(|fact| html! { <li>{*fact}</li> }) }
                </ol>
            </section>
            <footer class="page-footer">
                <p>{PAGE.footer_tagline}</p>
                <p>{footer_line(year)}</p>
            </footer>
        </div>
    }
}

pub(crate) fn run() {
    let rules = app_router::load_rules();
    gloo::console::log!(format!(
        "flytrap: start (stage {}, catch delay {}ms)",
        rules.initial_stage, rules.catch_delay_ms
    ));
    let core = AppCore::new(rules);
    let _app_handle = yew::Renderer::<App>::with_props(AppProps { core }).render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use flytrap_core::{GameRules, Rect, Stage};
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(rules: GameRules) -> (Rc<AppCore>, Element) {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        let core = AppCore::new(rules);
        let _app_handle = yew::Renderer::<App>::with_root_and_props(
            root.clone(),
            AppProps { core: core.clone() },
        )
        .render();
        (core, root)
    }

    async fn wait_for(root: &Element, selector: &str) -> Element {
        let start = Date::now();
        loop {
            if let Ok(Some(element)) = root.query_selector(selector) {
                return element;
            }
            if Date::now() - start > 5000.0 {
                panic!("{selector} not rendered after 5s");
            }
            TimeoutFuture::new(10).await;
        }
    }

    fn client_rect(element: &Element) -> Rect {
        let rect = element.get_bounding_client_rect();
        Rect::from_edges(rect.left(), rect.top(), rect.right(), rect.bottom())
    }

    async fn drag_into_leaf(core: &Rc<AppCore>, root: &Element) {
        let leaf = client_rect(&wait_for(root, ".game-leaf").await);
        TimeoutFuture::new(0).await;
        core.apply_action(CoreAction::PressStart);
        core.apply_action(CoreAction::PointerMove {
            x: leaf.left + leaf.width() * 0.5,
            y: leaf.top + leaf.height() * 0.5,
        });
        core.apply_action(CoreAction::Release);
    }

    #[wasm_bindgen_test(async)]
    async fn catch_closes_leaf_then_digests() {
        set_panic_hook();
        let rules = GameRules {
            catch_delay_ms: 50,
            ..GameRules::default()
        };
        let (core, root) = mount(rules);
        drag_into_leaf(&core, &root).await;

        let snapshot = core.snapshot();
        assert!(snapshot.state.leaf_closed);
        assert!(snapshot.scene.game.token.is_none());
        assert_eq!(snapshot.state.stage, Stage::Waiting);
        assert_eq!(core.pending_catches(), 1);

        TimeoutFuture::new(150).await;
        assert_eq!(core.snapshot().state.stage, Stage::Digesting);
        assert_eq!(core.pending_catches(), 0);
        assert!(root.query_selector(".fly-token").ok().flatten().is_none());
    }

    fn fire_mouse(target: &Element, event_type: &str, x: f64, y: f64) {
        let init = web_sys::MouseEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        init.set_client_x(x as i32);
        init.set_client_y(y as i32);
        let event = web_sys::MouseEvent::new_with_mouse_event_init_dict(event_type, &init)
            .expect("build mouse event");
        target.dispatch_event(&event).expect("dispatch mouse event");
    }

    #[wasm_bindgen_test(async)]
    async fn missed_mouse_drag_keeps_waiting() {
        set_panic_hook();
        let (core, root) = mount(GameRules::default());
        let token = wait_for(&root, ".fly-token").await;
        let region = wait_for(&root, ".game-region").await;
        TimeoutFuture::new(0).await;

        let start = client_rect(&token);
        let area = client_rect(&region);
        let (x, y) = (area.left + 20.0, area.top + 20.0);
        fire_mouse(&token, "mousedown", start.left + 5.0, start.top + 5.0);
        fire_mouse(&region, "mousemove", x, y);
        fire_mouse(&token, "mouseup", x, y);
        fire_mouse(&token, "click", x, y);
        TimeoutFuture::new(20).await;

        let snapshot = core.snapshot();
        assert_eq!(snapshot.state.stage, Stage::Waiting);
        assert!(!snapshot.state.leaf_closed);
        assert!(!snapshot.state.dragging);
        let active = wait_for(&root, ".stage-panel.active").await;
        let first = wait_for(&root, ".stage-panel").await;
        assert_eq!(active, first);
    }

    #[wasm_bindgen_test(async)]
    async fn reset_drops_pending_catch() {
        set_panic_hook();
        let rules = GameRules {
            catch_delay_ms: 50,
            ..GameRules::default()
        };
        let (core, root) = mount(rules);
        drag_into_leaf(&core, &root).await;
        assert_eq!(core.pending_catches(), 1);

        core.apply_action(CoreAction::Reset);
        assert_eq!(core.pending_catches(), 0);
        TimeoutFuture::new(150).await;
        let snapshot = core.snapshot();
        assert_eq!(snapshot.state.stage, Stage::Waiting);
        assert!(snapshot.state.is_reset(&rules));
    }

    #[wasm_bindgen_test(async)]
    async fn panel_emphasis_follows_stage() {
        set_panic_hook();
        let (core, root) = mount(GameRules::default());
        wait_for(&root, ".stage-panel.active").await;
        core.apply_action(CoreAction::SelectStage(Stage::Digesting));
        TimeoutFuture::new(20).await;

        let active = root
            .query_selector_all(".stage-panel.active")
            .expect("query panels");
        assert_eq!(active.length(), 1);
        let panels = root
            .query_selector_all(".stage-panel")
            .expect("query panels");
        let last = panels
            .item(2)
            .and_then(|node| node.dyn_into::<Element>().ok())
            .expect("third panel");
        assert!(last.class_list().contains("active"));
    }

    #[wasm_bindgen_test]
    fn wasm_smoke() {
        set_panic_hook();
        assert_eq!(footer_line(2024), format!("© 2024 {}", PAGE.footer_owner));
    }
}
