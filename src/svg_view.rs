use yew::prelude::*;

use flytrap_core::art::{
    fmt_num, Circle, TrapArt, FLY_BODY, FLY_COLOR, FLY_EYES, FLY_EYE_COLOR, FLY_LEGS,
    FLY_VIEW_BOX, FLY_WING, FOLIAGE_COLOR, JAW_FILL, JAW_STROKE, JUICE_INNER_PATH,
    JUICE_OUTER_PATH, PANEL_FOLIAGE, PANEL_TRAP, STEM_COLOR, TOOTH_COLOR,
};
use flytrap_core::motion::{DIGEST_PULSE, FLY_BUZZ, JUICE_INNER, JUICE_OUTER, PLANT_BREATHE};
use flytrap_core::{LeafPose, PanelArt};

fn circle(shape: Circle, fill: &'static str) -> Html {
    html! {
        <circle
            cx={fmt_num(shape.cx)}
            cy={fmt_num(shape.cy)}
            r={fmt_num(shape.r)}
            fill={fill}
        />
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct FlyProps {
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) onclick: Option<Callback<MouseEvent>>,
}

#[function_component(FlySvg)]
pub(crate) fn fly_svg(props: &FlyProps) -> Html {
    let onclick = props.onclick.clone();
    html! {
        <svg class={props.class.clone()} viewBox={FLY_VIEW_BOX} {onclick}>
            {circle(FLY_BODY, FLY_COLOR)}
            <path d={FLY_LEGS} stroke={FLY_COLOR} stroke-width="2" />
            <path d={FLY_WING} stroke={FLY_COLOR} stroke-width="1" fill="none" />
            { for FLY_EYES.iter().map(|eye| circle(*eye, FLY_EYE_COLOR)) }
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct TrapProps {
    pub(crate) art: TrapArt,
    pub(crate) pose: LeafPose,
    #[prop_or_default]
    pub(crate) class: Classes,
    /// Extra layers drawn over the trap.
    #[prop_or_default]
    pub(crate) children: Html,
}

#[function_component(TrapSvg)]
pub(crate) fn trap_svg(props: &TrapProps) -> Html {
    let art = props.art;
    let jaws = match props.pose {
        LeafPose::Open => {
            let teeth = art
                .teeth_left
                .paths()
                .into_iter()
                .chain(art.teeth_right.paths());
            html! {
                <>
                    <path d={art.jaw_left} stroke={JAW_STROKE} stroke-width="3" fill={JAW_FILL} />
                    <path d={art.jaw_right} stroke={JAW_STROKE} stroke-width="3" fill={JAW_FILL} />
                    { for teeth.map(|d| html! {
                        <path {d} stroke={TOOTH_COLOR} stroke-width="2" />
                    }) }
                </>
            }
        }
        LeafPose::Closed => html! {
            <>
                <path d={art.jaw_closed} stroke={JAW_STROKE} stroke-width="3" fill={JAW_FILL} />
                {circle(art.caught_body, FLY_COLOR)}
                <path d={art.caught_legs} stroke={FLY_COLOR} stroke-width="1" />
            </>
        },
    };
    html! {
        <svg class={props.class.clone()} viewBox={art.view_box}>
            <path
                d={art.stem}
                stroke={STEM_COLOR}
                stroke-width={fmt_num(art.stem_width)}
                stroke-linecap="round"
            />
            <g class="trap-jaws">{jaws}</g>
            {props.children.clone()}
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct PanelArtProps {
    pub(crate) art: PanelArt,
    pub(crate) on_fly_click: Callback<MouseEvent>,
}

/// The illustration inside one stage panel.
#[function_component(PanelIllustration)]
pub(crate) fn panel_illustration(props: &PanelArtProps) -> Html {
    let foliage = html! {
        <svg class="panel-foliage" viewBox={PANEL_TRAP.view_box}>
            { for PANEL_FOLIAGE.iter().map(|(d, width)| html! {
                <path
                    d={*d}
                    stroke={FOLIAGE_COLOR}
                    stroke-width={fmt_num(*width)}
                    fill="none"
                    stroke-linecap="round"
                />
            }) }
        </svg>
    };
    let trap = match props.art {
        PanelArt::Waiting => {
            let on_fly_click = props.on_fly_click.clone();
            let onclick = Callback::from(move |event: MouseEvent| {
                event.stop_propagation();
                on_fly_click.emit(event);
            });
            html! {
                <>
                    <TrapSvg
                        art={PANEL_TRAP}
                        pose={LeafPose::Open}
                        class={classes!("panel-trap", PLANT_BREATHE.class_name())}
                    />
                    <FlySvg
                        class={classes!("panel-fly", FLY_BUZZ.class_name())}
                        onclick={Some(onclick)}
                    />
                </>
            }
        }
        PanelArt::Catching { jaws } => html! {
            <TrapSvg art={PANEL_TRAP} pose={jaws} class="panel-trap" />
        },
        PanelArt::Digesting => html! {
            <TrapSvg
                art={PANEL_TRAP}
                pose={LeafPose::Closed}
                class={classes!("panel-trap", DIGEST_PULSE.class_name())}
            >
                <path
                    class={JUICE_INNER.class_name()}
                    d={JUICE_INNER_PATH}
                    pathLength="1"
                    stroke-dasharray="1"
                    stroke={JAW_STROKE}
                    stroke-width="2"
                    fill="none"
                />
                <path
                    class={JUICE_OUTER.class_name()}
                    d={JUICE_OUTER_PATH}
                    pathLength="1"
                    stroke-dasharray="1"
                    stroke={JAW_STROKE}
                    stroke-width="2"
                    fill="none"
                />
            </TrapSvg>
        },
    };
    html! {
        <div class="panel-art">
            {foliage}
            {trap}
        </div>
    }
}
