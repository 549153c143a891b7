use super::analyze::{AnalyzePage, Msg};
use crate::api::{BrowserImage, GlooTransport};
use shared::{AnalysisClient, AnalysisError, AnalysisResult, AnalysisTicket, SelectionSource};
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

pub fn handle_file_picked(page: &mut AnalyzePage, file: Option<web_sys::File>) -> bool {
    match file {
        Some(file) => page.workflow.select_image(
            BrowserImage::from(file),
            SelectionSource::Picker,
            BrowserImage::preview,
        ),
        None => false,
    }
}

pub fn handle_drop(page: &mut AnalyzePage, event: DragEvent) -> bool {
    event.prevent_default();
    page.is_dragging = false;

    let file = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| file_list.item(0));

    if let Some(file) = file {
        page.workflow
            .select_image(BrowserImage::from(file), SelectionSource::Drop, BrowserImage::preview);
    }

    true
}

pub fn handle_analyze(page: &mut AnalyzePage, ctx: &Context<AnalyzePage>) -> bool {
    if let Some(ticket) = page.workflow.begin_analysis() {
        send_analysis_request(ctx, page.client.clone(), ticket);
    } else {
        log::warn!("Analyze requested without a selected image");
    }
    true
}

pub fn handle_analysis_finished(
    page: &mut AnalyzePage,
    token: u64,
    outcome: Result<AnalysisResult, AnalysisError>,
) -> bool {
    page.workflow.finish_analysis(token, outcome)
}

pub fn handle_reset(page: &mut AnalyzePage) -> bool {
    page.workflow.reset()
}

pub fn send_analysis_request(
    ctx: &Context<AnalyzePage>,
    client: AnalysisClient<GlooTransport>,
    ticket: AnalysisTicket<BrowserImage>,
) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let outcome = client.analyze(&ticket.image).await;
            link.send_message(Msg::AnalysisFinished(ticket.token, outcome));
        }
    });
}
