use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::Document;

use folio_core::{build_registry, Page, PageRules, RegistryIssue};

use crate::clipboard;
use crate::cursor_view::CursorView;
use crate::dom_surface::{scan_page, DomSurface};
use crate::drawer_view::mount_drawer;
use crate::gallery_view::GalleryView;
use crate::page_config;
use crate::page_core::PageCore;

/// Everything that has to outlive `main`.
struct PageRuntime {
    _core: Rc<PageCore>,
    _gallery: GalleryView,
    _cursor: Option<Rc<CursorView>>,
    _clipboard: Option<EventListener>,
}

thread_local! {
    static RUNTIME: RefCell<Option<PageRuntime>> = RefCell::new(None);
}

fn report_issues(issues: &[RegistryIssue]) {
    for issue in issues {
        gloo::console::warn!(format!("registry: {issue}"));
    }
}

/// Reads the page, builds the page state and attaches every component.
/// Calling it again is a no-op.
pub(crate) fn start() {
    if RUNTIME.with(|slot| slot.borrow().is_some()) {
        return;
    }
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        gloo::console::error!("runtime: no document");
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_event| start()).forget();
        return;
    }
    let rules = page_config::load_page_rules();
    let runtime = build_runtime(&document, rules);
    RUNTIME.with(|slot| {
        *slot.borrow_mut() = Some(runtime);
    });
}

fn build_runtime(document: &Document, rules: PageRules) -> PageRuntime {
    let scanned = scan_page(document);
    let build = build_registry(scanned.records);
    report_issues(&build.issues);
    gloo::console::log!(format!(
        "runtime: {} projects registered",
        build.registry.len()
    ));

    let surface = DomSurface::new(document.clone(), scanned.elements);
    let core = PageCore::new(Page::new(build.registry, rules.clone()), surface);
    core.present_all();

    let gallery = GalleryView::install(&core, document);
    mount_drawer(Rc::clone(&core));
    let cursor = CursorView::install(&rules, document);
    let clipboard = clipboard::install(&rules, document);
    if clipboard.is_none() {
        gloo::console::log!("runtime: no .contact-button, copy disabled");
    }
    PageRuntime {
        _core: core,
        _gallery: gallery,
        _cursor: cursor,
        _clipboard: clipboard,
    }
}

#[cfg(test)]
pub(crate) fn with_core<R>(f: impl FnOnce(&Rc<PageCore>) -> R) -> Option<R> {
    RUNTIME.with(|slot| slot.borrow().as_ref().map(|runtime| f(&runtime._core)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use folio_core::{PageAction, ProjectId};
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn started_page_opens_drawer_on_card_click() {
        set_panic_hook();
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let fixture = document.create_element("div").expect("create fixture");
        fixture.set_inner_html(
            r#"
            <div class="project" data-project="1">
              <div class="project-header"><h2>Chair</h2><h3>Furniture</h3></div>
              <div class="image-container">
                <img class="project-media active" src="chair-1.jpg" alt="Chair">
                <img class="project-media" src="chair-2.jpg" alt="Chair side">
              </div>
              <span class="dot active"></span><span class="dot"></span>
            </div>
            "#,
        );
        document
            .body()
            .expect("body available")
            .append_child(&fixture)
            .expect("append fixture");

        start();
        let project = ProjectId::new(1).expect("non-zero id");
        let out = with_core(|core| core.dispatch(PageAction::ProjectClicked { project }))
            .expect("runtime started");
        assert!(out.drawer_changed);
        TimeoutFuture::new(30).await;

        let title = document
            .get_element_by_id("drawer-title")
            .and_then(|title| title.text_content());
        assert_eq!(title.as_deref(), Some("Chair"));
        let drawer = document
            .query_selector(".project-drawer")
            .ok()
            .flatten()
            .expect("drawer mounted");
        assert!(drawer.class_list().contains("open"));

        with_core(|core| core.dispatch(PageAction::CloseDrawer));
        TimeoutFuture::new(30).await;
        assert!(!drawer.class_list().contains("open"));
        fixture.remove();
    }
}
