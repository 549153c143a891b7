use super::analyze::AnalyzePage;
use shared::{MetricField, MetricTier};
use yew::prelude::*;

pub fn render_results(page: &AnalyzePage) -> Html {
    let Some(result) = page.workflow.result() else {
        return html! {};
    };
    let metrics = &result.metrics;

    html! {
        <div class="results-container">
            <h2>{"Analysis results"}</h2>
            <div class="metric-cards">
                { for MetricField::present(metrics, MetricTier::Primary)
                    .into_iter()
                    .map(|(field, value)| render_metric_card(field, value)) }
            </div>
            <div class="detailed-results">
                <h3>{"Detailed metrics"}</h3>
                <div class="metric-table">
                    { for MetricField::present(metrics, MetricTier::Detail)
                        .into_iter()
                        .map(|(field, value)| render_metric_row(field, value)) }
                </div>
                {
                    match metrics.note.as_deref().filter(|note| !note.is_empty()) {
                        Some(note) => html! { <p class="metric-note">{ note }</p> },
                        None => html! {},
                    }
                }
            </div>
        </div>
    }
}

fn render_metric_card(field: MetricField, value: f64) -> Html {
    html! {
        <div class="metric-card" key={field.key()}>
            <div class="metric-subtitle">{ field.subtitle().unwrap_or_default() }</div>
            <div class="metric-value">{ field.format(value) }</div>
            <div class="metric-title">{ field.label() }</div>
        </div>
    }
}

fn render_metric_row(field: MetricField, value: f64) -> Html {
    html! {
        <div class="metric-row" key={field.key()}>
            <span class="metric-label">{ format!("{}:", field.label()) }</span>
            <span class="metric-row-value">{ field.format(value) }</span>
        </div>
    }
}
