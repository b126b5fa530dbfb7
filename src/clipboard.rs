use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Event, HtmlDocument, HtmlElement, HtmlTextAreaElement};

use folio_core::PageRules;

const FEEDBACK_HTML: &str = r#"<span class="email">Copied!</span>"#;
const FEEDBACK_BACKGROUND: &str = "#4CAF50";

/// Wires the contact button to copy the contact address.
pub(crate) fn install(rules: &PageRules, document: &Document) -> Option<EventListener> {
    let button = document
        .query_selector(".contact-button")
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    let email = button
        .get_attribute("data-email")
        .filter(|email| email.contains('@'))
        .unwrap_or_else(|| rules.contact_email.clone());
    let feedback_ms = rules.copy_feedback_ms;
    let original = button.inner_html();
    let target = button.clone();
    Some(EventListener::new(&target, "click", move |_event: &Event| {
        let email = email.clone();
        let button = button.clone();
        let original = original.clone();
        spawn_local(async move {
            if copy_text(&email).await {
                show_feedback(&button, &original, feedback_ms);
            }
        });
    }))
}

/// Copies through the async clipboard API when the page is a secure
/// context, otherwise through a hidden textarea.
async fn copy_text(text: &str) -> bool {
    let secure = web_sys::window()
        .map(|window| window.is_secure_context())
        .unwrap_or(false);
    if secure {
        match write_with_clipboard_api(text).await {
            Ok(()) => return true,
            Err(err) => {
                gloo::console::error!("clipboard: write failed", err);
            }
        }
    }
    match write_with_textarea(text) {
        Ok(()) => true,
        Err(err) => {
            gloo::console::error!("clipboard: fallback copy failed", err);
            false
        }
    }
}

async fn write_with_clipboard_api(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let navigator = window.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(JsValue::from_str("navigator.clipboard unavailable"));
    }
    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?
        .dyn_into::<Function>()?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into::<Promise>()?;
    JsFuture::from(promise).await?;
    Ok(())
}

fn write_with_textarea(text: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("body unavailable"))?;
    let area = document
        .create_element("textarea")?
        .dyn_into::<HtmlTextAreaElement>()?;
    area.set_value(text);
    let style = area.style();
    style.set_property("position", "fixed")?;
    style.set_property("left", "-999999px")?;
    style.set_property("top", "-999999px")?;
    body.append_child(&area)?;
    let _ = area.focus();
    area.select();
    let copied = document
        .dyn_ref::<HtmlDocument>()
        .ok_or_else(|| JsValue::from_str("not an html document"))
        .and_then(|html| html.exec_command("copy"));
    area.remove();
    match copied? {
        true => Ok(()),
        false => Err(JsValue::from_str("copy command refused")),
    }
}

/// Restores `original`, the label captured at install time.
fn show_feedback(button: &HtmlElement, original: &str, feedback_ms: u32) {
    button.set_inner_html(FEEDBACK_HTML);
    let _ = button.style().set_property("background", FEEDBACK_BACKGROUND);
    let button = button.clone();
    let original = original.to_string();
    Timeout::new(feedback_ms, move || {
        button.set_inner_html(&original);
        let _ = button.style().remove_property("background");
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const LABEL: &str = r#"<span class="email">Say hello</span>"#;

    fn button() -> HtmlElement {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let button = document
            .create_element("button")
            .expect("create button")
            .dyn_into::<HtmlElement>()
            .expect("button is html");
        button.set_inner_html(LABEL);
        button
    }

    #[wasm_bindgen_test]
    async fn feedback_is_restored_after_timeout() {
        let button = button();

        show_feedback(&button, LABEL, 20);
        assert_eq!(button.inner_html(), FEEDBACK_HTML);
        let background = button.style().get_property_value("background-color");
        assert!(!background.unwrap_or_default().is_empty());

        TimeoutFuture::new(60).await;
        assert_eq!(button.inner_html(), LABEL);
        assert_eq!(button.style().get_property_value("background-color").unwrap_or_default(), "");
    }

    #[wasm_bindgen_test]
    async fn overlapping_copies_restore_the_label() {
        let button = button();

        show_feedback(&button, LABEL, 40);
        TimeoutFuture::new(10).await;
        show_feedback(&button, LABEL, 40);
        assert_eq!(button.inner_html(), FEEDBACK_HTML);

        TimeoutFuture::new(100).await;
        assert_eq!(button.inner_html(), LABEL);
    }
}
