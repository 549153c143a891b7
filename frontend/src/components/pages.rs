use shared::Route;
use yew::prelude::*;

pub fn render_static_page(route: Route) -> Html {
    let description = match route {
        Route::Dashboard => "Overview of recent coating inspections.",
        Route::Jobs => "Inspection jobs and their progress.",
        Route::Agents => "Inspection agents connected to this installation.",
        Route::Reports => "Generated coating quality reports.",
        Route::Analyze => "Upload a panel image to analyze coating quality.",
    };

    html! {
        <section class="page">
            <h1>{ route.label() }</h1>
            <p class="subtitle">{ description }</p>
        </section>
    }
}

pub fn render_not_found() -> Html {
    html! {
        <section class="page">
            <h1>{"Page not found"}</h1>
        </section>
    }
}
