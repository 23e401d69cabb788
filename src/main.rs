mod app_core;
mod app_router;
mod input;
mod svg_view;
mod yew_app;

fn main() {
    console_error_panic_hook::set_once();
    yew_app::run();
}
