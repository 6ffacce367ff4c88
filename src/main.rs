mod app;
mod components;
mod state;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::logging::log!("runboard starting");
    leptos::mount::mount_to_body(App);
}
