use dioxus::prelude::*;
use portfolio::views::Home;
use portfolio::use_theme_provider;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(&format!("Logger already set: {}", e)));
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let (_, theme) = use_theme_provider();

    rsx! {
        div {
            class: theme().css_class(),
            document::Link { rel: "icon", href: FAVICON }
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            document::Link { rel: "stylesheet", href: TAILWIND_CSS }
            document::Title { "Saurav Sisodia | Portfolio" }
            Home {}
        }
    }
}
