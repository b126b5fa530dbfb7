use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, MouseEvent};

use folio_core::{CursorTrail, PageRules};

use crate::input::mouse_point;

fn find(document: &Document, selector: &str) -> Option<HtmlElement> {
    let element = document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());
    if element.is_none() {
        gloo::console::warn!(format!("cursor: missing {selector}"));
    }
    element
}

fn place(element: &HtmlElement, [x, y]: [f32; 2]) {
    let style = element.style();
    let _ = style.set_property("left", &format!("{x}px"));
    let _ = style.set_property("top", &format!("{y}px"));
}

/// Dot-and-ring cursor that trails the real pointer. Runs its own
/// animation frame loop for the lifetime of the page.
pub(crate) struct CursorView {
    trail: RefCell<CursorTrail>,
    container: HtmlElement,
    dot: HtmlElement,
    ring: HtmlElement,
    frame_handle: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl CursorView {
    /// Returns `None` when the cursor is switched off, the viewport is too
    /// narrow, or the page lacks the cursor markup.
    pub(crate) fn install(rules: &PageRules, document: &Document) -> Option<Rc<Self>> {
        let width = web_sys::window()?
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0) as f32;
        if !rules.cursor_allowed(width) {
            return None;
        }
        let container = find(document, ".custom-cursor-container")?;
        let dot = find(document, ".custom-cursor")?;
        let ring = find(document, ".custom-cursor-large")?;
        let view = Rc::new(Self {
            trail: RefCell::new(CursorTrail::from_rules(rules)),
            container,
            dot,
            ring,
            frame_handle: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        view.install_listeners(document);
        view.trail.borrow_mut().show();
        view.set_visible(true);
        view.schedule_frame();
        Some(view)
    }

    fn set_visible(&self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        let _ = self.container.style().set_property("display", display);
    }

    fn install_listeners(self: &Rc<Self>, document: &Document) {
        let mut listeners = Vec::new();

        let view = Rc::clone(self);
        listeners.push(EventListener::new(document, "mousemove", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let (x, y) = mouse_point(event);
            if view.trail.borrow_mut().pointer_moved(x, y) {
                view.set_visible(true);
            }
        }));

        let view = Rc::clone(self);
        listeners.push(EventListener::new(document, "mouseenter", move |_event: &Event| {
            if view.trail.borrow_mut().show() {
                view.set_visible(true);
            }
        }));

        let view = Rc::clone(self);
        listeners.push(EventListener::new(document, "mouseleave", move |_event: &Event| {
            if view.trail.borrow_mut().hide() {
                view.set_visible(false);
            }
        }));

        *self.listeners.borrow_mut() = listeners;
    }

    fn schedule_frame(self: &Rc<Self>) {
        let view = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            view.frame_handle.borrow_mut().take();
            let frame = view.trail.borrow_mut().tick();
            if let Some(frame) = frame {
                place(&view.dot, frame.dot);
                place(&view.ring, frame.ring);
            }
            view.schedule_frame();
        });
        *self.frame_handle.borrow_mut() = Some(handle);
    }
}
