use super::analyze::{AnalyzePage, Msg};
use shared::ImageSource;
use yew::prelude::*;

pub fn render_preview(page: &AnalyzePage) -> Html {
    let Some(url) = page.workflow.preview() else {
        return html! {};
    };
    let name = page
        .workflow
        .image()
        .map(|image| image.name())
        .unwrap_or_default();

    html! {
        <div class="preview">
            <img id="actual-image-preview" src={url.to_string()} alt="Preview" />
            <p class="preview-name">{ name }</p>
        </div>
    }
}

/// Analyze and reset buttons, shown once an image is selected. Both are
/// disabled while a request is in flight.
pub fn render_controls(page: &AnalyzePage, ctx: &Context<AnalyzePage>) -> Html {
    if page.workflow.image().is_none() {
        return html! {};
    }

    let link = ctx.link();
    let busy = page.workflow.is_busy();

    html! {
        <div class="button-container">
            <button
                class="analyze-btn"
                onclick={link.callback(|_| Msg::Analyze)}
                disabled={busy}
            >
                { render_analyze_button_content(busy) }
            </button>
            <button
                id="reset-btn"
                class="analyze-btn secondary"
                onclick={link.callback(|_| Msg::Reset)}
                disabled={busy}
            >
                <i class="fa-solid fa-rotate-left"></i>{" Reset"}
            </button>
        </div>
    }
}

fn render_analyze_button_content(busy: bool) -> Html {
    if busy {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
    } else {
        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Analyze coating"}</> }
    }
}
