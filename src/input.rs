use web_sys::{Document, MouseEvent, Touch, TouchEvent};

use folio_core::FocusTarget;

/// Main mouse button, as reported by `MouseEvent.button`.
pub(crate) const PRIMARY_BUTTON: i16 = 0;

pub(crate) fn is_primary_button(event: &MouseEvent) -> bool {
    event.button() == PRIMARY_BUTTON
}

pub(crate) fn mouse_point(event: &MouseEvent) -> (f32, f32) {
    (event.client_x() as f32, event.client_y() as f32)
}

fn touch_from_event(event: &TouchEvent, use_changed: bool) -> Option<Touch> {
    let list = if use_changed {
        event.changed_touches()
    } else {
        event.touches()
    };
    list.item(0)
}

fn touch_point_of(touch: &Touch) -> (f32, f32) {
    (touch.client_x() as f32, touch.client_y() as f32)
}

/// First active touch, used while a finger is down.
pub(crate) fn touch_point(event: &TouchEvent) -> Option<(f32, f32)> {
    touch_from_event(event, false).map(|touch| touch_point_of(&touch))
}

/// Where a finger lifted. `touchend` only lists the lifted finger in
/// `changedTouches`.
pub(crate) fn release_point(event: &TouchEvent) -> Option<(f32, f32)> {
    touch_from_event(event, true)
        .or_else(|| touch_from_event(event, false))
        .map(|touch| touch_point_of(&touch))
}

pub(crate) fn focus_target(document: &Document) -> FocusTarget {
    document
        .active_element()
        .map(|element| FocusTarget::from_tag(&element.tag_name()))
        .unwrap_or(FocusTarget::Other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::{HtmlElement, MouseEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn mouse_point_uses_client_coordinates() {
        let init = MouseEventInit::new();
        init.set_client_x(120);
        init.set_client_y(45);
        init.set_button(0);
        let event = MouseEvent::new_with_mouse_event_init_dict("mousedown", &init)
            .expect("mouse event");
        assert_eq!(mouse_point(&event), (120.0, 45.0));
        assert!(is_primary_button(&event));
    }

    #[wasm_bindgen_test]
    fn focused_text_field_is_text_entry() {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let body = document.body().expect("body available");
        let field = document
            .create_element("textarea")
            .expect("create textarea")
            .dyn_into::<HtmlElement>()
            .expect("textarea is html");
        body.append_child(&field).expect("append textarea");
        field.focus().expect("focus textarea");
        assert_eq!(focus_target(&document), FocusTarget::TextEntry);
        field.blur().expect("blur textarea");
        field.remove();
        assert_eq!(focus_target(&document), FocusTarget::Other);
    }
}
