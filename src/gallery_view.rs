use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, KeyboardEvent, MouseEvent, TouchEvent};

use folio_core::{PageAction, PointerSource, ProjectId};

use crate::dom_surface::ProjectElements;
use crate::input::{focus_target, is_primary_button, mouse_point, release_point, touch_point};
use crate::page_core::PageCore;

fn active_options() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    }
}

/// Keeps the gallery's DOM listeners alive.
pub(crate) struct GalleryView {
    _listeners: Vec<EventListener>,
}

impl GalleryView {
    pub(crate) fn install(core: &Rc<PageCore>, document: &Document) -> Self {
        let mut listeners = Vec::new();
        for (project, elements) in core.project_elements() {
            install_project(core, document, project, &elements, &mut listeners);
        }
        listeners.push(install_keyboard(core, document));
        Self {
            _listeners: listeners,
        }
    }
}

fn install_project(
    core: &Rc<PageCore>,
    document: &Document,
    project: ProjectId,
    elements: &ProjectElements,
    listeners: &mut Vec<EventListener>,
) {
    let doc_target: &EventTarget = document.as_ref();

    if let Some(image_container) = &elements.image_container {
        let core_down = Rc::clone(core);
        listeners.push(EventListener::new_with_options(
            image_container,
            "mousedown",
            active_options(),
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                if !is_primary_button(event) {
                    return;
                }
                let (x, y) = mouse_point(event);
                core_down.dispatch(PageAction::PointerDown {
                    project,
                    source: PointerSource::Mouse,
                    x,
                    y,
                });
            },
        ));

        let core_touch = Rc::clone(core);
        listeners.push(EventListener::new_with_options(
            image_container,
            "touchstart",
            active_options(),
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                let Some((x, y)) = touch_point(event) else {
                    return;
                };
                core_touch.dispatch(PageAction::PointerDown {
                    project,
                    source: PointerSource::Touch,
                    x,
                    y,
                });
            },
        ));

        // Horizontal swipes inside the card must not scroll the page.
        listeners.push(EventListener::new_with_options(
            image_container,
            "touchmove",
            active_options(),
            |event: &Event| event.prevent_default(),
        ));
    }

    let core_move = Rc::clone(core);
    listeners.push(EventListener::new_with_options(
        doc_target,
        "mousemove",
        active_options(),
        move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let (x, y) = mouse_point(event);
            let out = core_move.dispatch(PageAction::PointerMove { project, x, y });
            if out.prevent_default {
                event.prevent_default();
            }
        },
    ));

    let core_up = Rc::clone(core);
    listeners.push(EventListener::new_with_options(
        doc_target,
        "mouseup",
        active_options(),
        move |event: &Event| {
            let point = event.dyn_ref::<MouseEvent>().map(mouse_point);
            core_up.dispatch(PageAction::PointerUp { project, point });
        },
    ));

    let core_touch_move = Rc::clone(core);
    listeners.push(EventListener::new_with_options(
        doc_target,
        "touchmove",
        active_options(),
        move |event: &Event| {
            let Some(touch) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let Some((x, y)) = touch_point(touch) else {
                return;
            };
            let out = core_touch_move.dispatch(PageAction::PointerMove { project, x, y });
            if out.prevent_default {
                event.prevent_default();
            }
        },
    ));

    let core_touch_end = Rc::clone(core);
    listeners.push(EventListener::new_with_options(
        doc_target,
        "touchend",
        active_options(),
        move |event: &Event| {
            let point = event.dyn_ref::<TouchEvent>().and_then(release_point);
            core_touch_end.dispatch(PageAction::PointerUp { project, point });
        },
    ));

    let core_cancel = Rc::clone(core);
    listeners.push(EventListener::new_with_options(
        doc_target,
        "touchcancel",
        active_options(),
        move |_event: &Event| {
            core_cancel.dispatch(PageAction::PointerCancel { project });
        },
    ));

    for (idx, dot) in elements.dots.iter().enumerate() {
        let core_dot = Rc::clone(core);
        let index = idx + 1;
        listeners.push(EventListener::new(dot, "click", move |event: &Event| {
            event.stop_propagation();
            core_dot.dispatch(PageAction::GoToImage { project, index });
        }));
    }

    let core_click = Rc::clone(core);
    listeners.push(EventListener::new(
        &elements.container,
        "click",
        move |_event: &Event| {
            core_click.dispatch(PageAction::ProjectClicked { project });
        },
    ));
}

fn install_keyboard(core: &Rc<PageCore>, document: &Document) -> EventListener {
    let core = Rc::clone(core);
    let document_for_focus = document.clone();
    EventListener::new_with_options(document, "keydown", active_options(), move |event: &Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let out = core.dispatch(PageAction::Key {
            key: event.key(),
            focus: focus_target(&document_for_focus),
        });
        if out.prevent_default {
            event.prevent_default();
        }
    })
}
