use super::handlers;
use super::results::render_results;
use super::upload_section::render_upload_section;
use super::utils::render_error_message;
use crate::api::{BrowserImage, GlooTransport};
use gloo_file::ObjectUrl;
use shared::{AnalysisClient, AnalysisError, AnalysisResult, AnalyzeWorkflow, ApiConfig};
use web_sys::DragEvent;
use yew::prelude::*;

pub enum Msg {
    FilePicked(Option<web_sys::File>),
    Dropped(DragEvent),
    SetDragging(bool),
    Analyze,
    AnalysisFinished(u64, Result<AnalysisResult, AnalysisError>),
    Reset,
}

#[derive(Properties, PartialEq)]
pub struct AnalyzePageProps {
    pub config: ApiConfig,
}

pub struct AnalyzePage {
    pub workflow: AnalyzeWorkflow<BrowserImage, ObjectUrl>,
    pub client: AnalysisClient<GlooTransport>,
    pub is_dragging: bool,
}

impl Component for AnalyzePage {
    type Message = Msg;
    type Properties = AnalyzePageProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            workflow: AnalyzeWorkflow::new(),
            client: AnalysisClient::new(ctx.props().config.clone(), GlooTransport),
            is_dragging: false,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.client = AnalysisClient::new(ctx.props().config.clone(), GlooTransport);
        false
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FilePicked(file) => handlers::handle_file_picked(self, file),
            Msg::Dropped(event) => handlers::handle_drop(self, event),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::Analyze => handlers::handle_analyze(self, ctx),
            Msg::AnalysisFinished(token, outcome) => {
                handlers::handle_analysis_finished(self, token, outcome)
            }
            Msg::Reset => handlers::handle_reset(self),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="page analyze-page">
                <h1>{"Analyze coating"}</h1>
                <p class="subtitle">{"Upload an image of a panel to analyze coating quality"}</p>

                <div class="card">
                    { render_upload_section(self, ctx) }
                    { render_error_message(self) }
                </div>

                { render_results(self) }
            </section>
        }
    }
}
