use std::rc::Rc;

use web_sys::{Element, HtmlMediaElement};
use yew::prelude::*;

use folio_core::{DrawerView, PageAction, StageContent};

use crate::page_core::PageCore;

const VIDEO_SHOWN: &str = "display: block; position: absolute; top: 0; left: 0; \
    width: 100%; height: 100%; object-fit: cover;";
const VIDEO_HIDDEN: &str = "display: none;";

#[derive(Properties)]
pub(crate) struct DrawerProps {
    pub(crate) core: Rc<PageCore>,
}

impl PartialEq for DrawerProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
    }
}

fn action_callback(core: &Rc<PageCore>, action: PageAction) -> Callback<MouseEvent> {
    let core = core.clone();
    Callback::from(move |_event: MouseEvent| {
        core.dispatch(action.clone());
    })
}

#[function_component(Drawer)]
pub(crate) fn drawer(props: &DrawerProps) -> Html {
    let core = props.core.clone();
    let view = use_state(|| core.drawer_view());
    let video_ref = use_node_ref();

    {
        let core = core.clone();
        let view = view.clone();
        use_effect_with((), move |_| {
            let core_for_cb = core.clone();
            let subscription = core.subscribe(Rc::new(move || {
                view.set(core_for_cb.drawer_view());
            }));
            move || drop(subscription)
        });
    }

    {
        let video_ref = video_ref.clone();
        let playing = view
            .as_ref()
            .map(|view| matches!(view.stage.content, StageContent::Video { .. }))
            .unwrap_or(false);
        let index = view.as_ref().map(|view| (view.project, view.index));
        use_effect_with((playing, index), move |(playing, _)| {
            if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                if *playing {
                    video.set_muted(true);
                    let _ = video.play();
                } else {
                    let _ = video.pause();
                }
            }
        });
    }

    let open = view.is_some();
    let overlay_class = classes!("drawer-overlay", open.then_some("visible"));
    let drawer_class = classes!("project-drawer", open.then_some("open"));
    let close = action_callback(&core, PageAction::CloseDrawer);

    html! {
        <>
            <div class={overlay_class} onclick={close.clone()}></div>
            <aside class={drawer_class}>
                <button class="drawer-close" aria-label="Close" onclick={close}>{ "×" }</button>
                { match &*view {
                    Some(view) => render_body(&core, view, &video_ref),
                    None => Html::default(),
                } }
            </aside>
        </>
    }
}

fn render_body(core: &Rc<PageCore>, view: &DrawerView, video_ref: &NodeRef) -> Html {
    let image = match &view.stage.content {
        StageContent::Image { src, alt } => html! {
            <img
                id="drawer-image"
                class="drawer-media"
                src={src.clone()}
                alt={alt.clone().unwrap_or_default()}
            />
        },
        _ => Html::default(),
    };
    let video = if view.stage.video_slot {
        let (src, style) = match &view.stage.content {
            StageContent::Video { src } => (Some(src.clone()), VIDEO_SHOWN),
            _ => (None, VIDEO_HIDDEN),
        };
        html! {
            <video
                class="drawer-media drawer-video"
                ref={video_ref.clone()}
                src={src}
                style={style}
                muted=true
                loop=true
                autoplay=true
                playsinline=true
            />
        }
    } else {
        Html::default()
    };
    let dots = view
        .dots
        .iter()
        .enumerate()
        .map(|(idx, active)| {
            let onclick = action_callback(core, PageAction::DrawerGoTo { index: idx + 1 });
            let class = classes!("drawer-dot", active.then_some("active"));
            html! {
                <span key={idx} {class} {onclick}></span>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <header class="drawer-header">
                <h2 id="drawer-title">{ view.title.clone() }</h2>
                <h3 id="drawer-subtitle">{ view.subtitle.clone() }</h3>
            </header>
            <div class="drawer-stage">
                { image }
                { video }
            </div>
            <div class="drawer-controls">
                <button
                    id="drawer-prev"
                    class="drawer-nav"
                    disabled={view.controls.previous_disabled}
                    onclick={action_callback(core, PageAction::DrawerPrevious)}
                >
                    { "‹" }
                </button>
                <div id="drawer-dots" class="drawer-dots">{ dots }</div>
                <button
                    id="drawer-next"
                    class="drawer-nav"
                    disabled={view.controls.next_disabled}
                    onclick={action_callback(core, PageAction::DrawerNext)}
                >
                    { "›" }
                </button>
            </div>
        </>
    }
}

/// Mounts the drawer on `#drawer-root`, creating the root if the page
/// does not provide one.
pub(crate) fn mount_drawer(core: Rc<PageCore>) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let root: Element = match document.get_element_by_id("drawer-root") {
        Some(root) => root,
        None => {
            let Ok(root) = document.create_element("div") else {
                return;
            };
            root.set_id("drawer-root");
            let Some(body) = document.body() else {
                return;
            };
            if body.append_child(&root).is_err() {
                return;
            }
            gloo::console::log!("drawer: created #drawer-root");
            root
        }
    };
    let _app_handle =
        yew::Renderer::<Drawer>::with_root_and_props(root, DrawerProps { core }).render();
}
