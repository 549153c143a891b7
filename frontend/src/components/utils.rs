use super::analyze::AnalyzePage;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Opens the native file picker behind the hidden input with `id`.
pub fn trigger_file_input(id: &str) {
    let input = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));

    if let Some(input) = input {
        if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
            html_input.click();
        }
    }
}

pub fn render_error_message(page: &AnalyzePage) -> Html {
    if let Some(error_msg) = page.workflow.error() {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}
