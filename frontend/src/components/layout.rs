use crate::{Model, Msg};
use shared::Route;
use strum::IntoEnumIterator;
use yew::html::Scope;
use yew::prelude::*;

/// Renders the sidebar with one link per page
pub fn render_sidebar(current: Option<Route>, link: &Scope<Model>) -> Html {
    html! {
        <nav class="sidebar">
            <h2 class="brand">{"CoatVision"}</h2>
            { for Route::iter().map(|route| render_nav_link(route, current == Some(route), link)) }
        </nav>
    }
}

fn render_nav_link(route: Route, active: bool, link: &Scope<Model>) -> Html {
    html! {
        <a
            href={route.path()}
            class={classes!("nav-link", active.then_some("active"))}
            onclick={link.callback(move |e: MouseEvent| {
                e.prevent_default();
                Msg::Navigate(route)
            })}
        >
            { route.label() }
        </a>
    }
}
