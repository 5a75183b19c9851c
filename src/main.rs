mod app;
mod components;
mod config;
mod utils;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = app::install() {
        web_sys::console::error_1(&err.to_string().into());
    }
}
