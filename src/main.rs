use counter_app::app::App;
use gloo::utils::document;
use gloo_console::log;

fn main() {
    console_error_panic_hook::set_once();
    log!("counter-app: mounting");

    let root = document()
        .get_element_by_id("app")
        .expect("index.html is missing the #app mount point");
    yew::Renderer::<App>::with_root(root).render();
}
