use super::analyze::{AnalyzePage, Msg};
use super::preview_area::{render_controls, render_preview};
use super::utils::trigger_file_input;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

const FILE_INPUT_ID: &str = "file-input";

pub fn render_upload_section(page: &AnalyzePage, ctx: &Context<AnalyzePage>) -> Html {
    html! {
        <div class="upload-section">
            { render_drop_zone(page, ctx) }
            { render_controls(page, ctx) }
        </div>
    }
}

fn render_drop_zone(page: &AnalyzePage, ctx: &Context<AnalyzePage>) -> Html {
    let link = ctx.link();
    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().and_then(|files| files.item(0));

        // Allows picking the same file again after a reset.
        input.set_value("");

        Msg::FilePicked(file)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::Dropped);

    let handle_click = Callback::from(|_: MouseEvent| trigger_file_input(FILE_INPUT_ID));

    // The input must not sit inside the drop zone: its synthetic click would
    // bubble into the zone's click handler and reopen the picker.
    html! {
        <>
            <input
                type="file"
                id={FILE_INPUT_ID}
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("upload-area", page.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={handle_click}
            >
                {
                    if page.workflow.preview().is_some() {
                        render_preview(page)
                    } else {
                        render_upload_prompt()
                    }
                }
            </div>
        </>
    }
}

fn render_upload_prompt() -> Html {
    html! {
        <div class="upload-placeholder">
            <i class="fa-solid fa-camera"></i>
            <p class="prompt">{"Click to choose an image, or drag and drop it here"}</p>
            <p class="file-types">{"Supports JPG, PNG and other image formats"}</p>
        </div>
    }
}
