mod clipboard;
mod cursor_view;
mod dom_surface;
mod drawer_view;
mod gallery_view;
mod input;
mod page_config;
mod page_core;
mod page_runtime;

fn main() {
    console_error_panic_hook::set_once();
    page_runtime::start();
}
