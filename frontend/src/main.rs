mod api;
mod components;

use components::analyze::AnalyzePage;
use components::layout::render_sidebar;
use components::pages::{render_not_found, render_static_page};
use gloo_events::EventListener;
use shared::{ApiConfig, Route};
use wasm_bindgen::JsValue;
use yew::prelude::*;

pub enum Msg {
    Navigate(Route),
    LocationChanged,
}

// Application shell: sidebar navigation plus the page for the current path.
pub struct Model {
    route: Option<Route>,
    config: ApiConfig,
    popstate_listener: Option<EventListener>,
}

fn current_route() -> Option<Route> {
    match web_sys::window().and_then(|window| window.location().pathname().ok()) {
        Some(path) => Route::from_path(&path),
        None => Some(Route::Dashboard),
    }
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = ApiConfig::resolve(option_env!("API_BASE_URL"), option_env!("API_URL"));
        log::info!("Analysis API: {}", config.base_url);

        let popstate_listener = web_sys::window().map(|window| {
            let link = ctx.link().clone();
            EventListener::new(&window, "popstate", move |_| {
                link.send_message(Msg::LocationChanged);
            })
        });

        Self {
            route: current_route(),
            config,
            popstate_listener,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(route) => {
                if self.route == Some(route) {
                    return false;
                }
                if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
                    if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(route.path())) {
                        log::warn!("Failed to push history state: {:?}", e);
                    }
                }
                log::debug!("Navigating to {}", route);
                self.route = Some(route);
                true
            }
            Msg::LocationChanged => {
                let route = current_route();
                let changed = route != self.route;
                self.route = route;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-shell">
                { render_sidebar(self.route, ctx.link()) }
                <main class="main-content">
                    { self.render_page() }
                </main>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.popstate_listener.take();
    }
}

impl Model {
    fn render_page(&self) -> Html {
        match self.route {
            Some(Route::Analyze) => html! { <AnalyzePage config={self.config.clone()} /> },
            Some(route) => render_static_page(route),
            None => render_not_found(),
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("CoatVision dashboard starting...");
    yew::Renderer::<Model>::new().render();
}
