//! Wire contract of the remote analysis service.

use crate::error::AnalysisError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

pub const ANALYZE_BASE64_PATH: &str = "/api/analyze/base64";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalyzeRequest {
    pub image: String,
}

impl AnalyzeRequest {
    /// Encodes raw image bytes so the payload can travel as JSON.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            image: STANDARD.encode(bytes),
        }
    }
}

/// Metrics computed by the service. A missing field means the service did not
/// compute it, which is not the same as zero. Null or mistyped values count as
/// missing.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Metrics {
    #[serde(deserialize_with = "lenient")]
    pub cvi: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub cqi: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub coverage: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub color_uniformity: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub smoothness: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub edge_density: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub saturation_score: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub brightness_score: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub laplacian_variance: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct AnalysisResult {
    #[serde(deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub metrics: Metrics,
}

// Falls back to the default when the value has an unexpected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Turns a raw HTTP reply from the analysis endpoint into a result.
pub fn interpret_reply(status: u16, body: &str) -> Result<AnalysisResult, AnalysisError> {
    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.detail)
            .and_then(|detail| match detail {
                serde_json::Value::String(message) if !message.trim().is_empty() => Some(message),
                _ => None,
            });
        return Err(AnalysisError::Server { status, detail });
    }

    // Any JSON body is a result; only a body that is not JSON at all is an error.
    let value = serde_json::from_str::<serde_json::Value>(body)
        .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricTier {
    Primary,
    Detail,
}

/// Display catalogue for the metrics the dashboard knows how to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum MetricField {
    Cvi,
    Cqi,
    Coverage,
    ColorUniformity,
    Smoothness,
    EdgeDensity,
    SaturationScore,
    BrightnessScore,
    LaplacianVariance,
}

impl MetricField {
    pub fn key(self) -> &'static str {
        match self {
            MetricField::Cvi => "cvi",
            MetricField::Cqi => "cqi",
            MetricField::Coverage => "coverage",
            MetricField::ColorUniformity => "color_uniformity",
            MetricField::Smoothness => "smoothness",
            MetricField::EdgeDensity => "edge_density",
            MetricField::SaturationScore => "saturation_score",
            MetricField::BrightnessScore => "brightness_score",
            MetricField::LaplacianVariance => "laplacian_variance",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MetricField::Cvi => "CVI",
            MetricField::Cqi => "CQI",
            MetricField::Coverage => "Coverage",
            MetricField::ColorUniformity => "Color uniformity",
            MetricField::Smoothness => "Smoothness",
            MetricField::EdgeDensity => "Edge density",
            MetricField::SaturationScore => "Saturation",
            MetricField::BrightnessScore => "Brightness",
            MetricField::LaplacianVariance => "Laplacian variance",
        }
    }

    /// Long name shown under the primary cards.
    pub fn subtitle(self) -> Option<&'static str> {
        match self {
            MetricField::Cvi => Some("Coating Visual Index"),
            MetricField::Cqi => Some("Coating Quality Index"),
            MetricField::Coverage => Some("Coated surface share"),
            _ => None,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            MetricField::LaplacianVariance => "",
            _ => "%",
        }
    }

    pub fn tier(self) -> MetricTier {
        match self {
            MetricField::Cvi | MetricField::Cqi | MetricField::Coverage => MetricTier::Primary,
            _ => MetricTier::Detail,
        }
    }

    pub fn value(self, metrics: &Metrics) -> Option<f64> {
        match self {
            MetricField::Cvi => metrics.cvi,
            MetricField::Cqi => metrics.cqi,
            MetricField::Coverage => metrics.coverage,
            MetricField::ColorUniformity => metrics.color_uniformity,
            MetricField::Smoothness => metrics.smoothness,
            MetricField::EdgeDensity => metrics.edge_density,
            MetricField::SaturationScore => metrics.saturation_score,
            MetricField::BrightnessScore => metrics.brightness_score,
            MetricField::LaplacianVariance => metrics.laplacian_variance,
        }
    }

    pub fn format(self, value: f64) -> String {
        format!("{}{}", value, self.unit())
    }

    /// Fields of `tier` that are present in `metrics`, paired with their values.
    pub fn present(metrics: &Metrics, tier: MetricTier) -> Vec<(MetricField, f64)> {
        MetricField::iter()
            .filter(|field| field.tier() == tier)
            .filter_map(|field| field.value(metrics).map(|value| (field, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_encodes_bytes_as_standard_base64() {
        let request = AnalyzeRequest::from_bytes(b"\x89PNG\r\n");
        assert_eq!(request.image, "iVBORw0K");

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"image":"iVBORw0K"}"#);
    }

    #[test]
    fn test_success_reply_keeps_only_present_metrics() {
        let result = interpret_reply(200, r#"{"metrics":{"cvi":87.5,"coverage":92.0}}"#).unwrap();
        assert_eq!(result.metrics.cvi, Some(87.5));
        assert_eq!(result.metrics.coverage, Some(92.0));
        assert_eq!(result.metrics.cqi, None);
        assert_eq!(result.metrics.note, None);
    }

    #[test]
    fn test_success_reply_ignores_unknown_fields() {
        let body = r#"{"status":"success","output_filename":"x.png","metrics":{"cqi":70,"note":"demo","extra":1}}"#;
        let result = interpret_reply(201, body).unwrap();
        assert_eq!(result.status.as_deref(), Some("success"));
        assert_eq!(result.metrics.cqi, Some(70.0));
        assert_eq!(result.metrics.note.as_deref(), Some("demo"));
    }

    #[test]
    fn test_success_reply_without_metrics_is_empty() {
        let result = interpret_reply(200, "{}").unwrap();
        assert_eq!(result.metrics, Metrics::default());
    }

    #[test]
    fn test_success_reply_with_null_metrics_is_empty() {
        let result = interpret_reply(200, r#"{"metrics":null}"#).unwrap();
        assert_eq!(result, AnalysisResult::default());

        let result = interpret_reply(200, r#"{"metrics":{"cvi":null,"note":null}}"#).unwrap();
        assert_eq!(result.metrics, Metrics::default());
    }

    #[test]
    fn test_success_reply_with_unexpected_shapes_keeps_what_it_can() {
        let body = r#"{"status":1,"metrics":{"cvi":"high","cqi":70,"note":["a"],"coverage":88.5}}"#;
        let result = interpret_reply(200, body).unwrap();
        assert_eq!(result.status, None);
        assert_eq!(result.metrics.cvi, None);
        assert_eq!(result.metrics.cqi, Some(70.0));
        assert_eq!(result.metrics.coverage, Some(88.5));
        assert_eq!(result.metrics.note, None);

        assert_eq!(interpret_reply(200, r#""ok""#).unwrap(), AnalysisResult::default());
        assert_eq!(interpret_reply(200, "null").unwrap(), AnalysisResult::default());
        assert_eq!(interpret_reply(200, r#"{"metrics":"n/a"}"#).unwrap(), AnalysisResult::default());
    }

    #[test]
    fn test_success_reply_that_is_not_json_is_malformed() {
        let err = interpret_reply(200, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedResponse(_)));
    }

    #[test]
    fn test_failure_reply_extracts_detail() {
        let err = interpret_reply(400, r#"{"detail":"Invalid image format"}"#).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::Server {
                status: 400,
                detail: Some("Invalid image format".into())
            }
        );
    }

    #[test]
    fn test_failure_reply_without_usable_detail() {
        let non_json = interpret_reply(502, "Bad Gateway").unwrap_err();
        assert_eq!(non_json, AnalysisError::Server { status: 502, detail: None });

        let validation = interpret_reply(422, r#"{"detail":[{"loc":["body"],"msg":"field required"}]}"#)
            .unwrap_err();
        assert_eq!(validation, AnalysisError::Server { status: 422, detail: None });

        let missing = interpret_reply(500, r#"{"error":"boom"}"#).unwrap_err();
        assert_eq!(missing, AnalysisError::Server { status: 500, detail: None });
    }

    #[test]
    fn test_metric_catalogue_tiers_and_formatting() {
        let metrics = Metrics {
            cvi: Some(87.5),
            coverage: Some(92.0),
            smoothness: Some(40.25),
            laplacian_variance: Some(131.7),
            ..Metrics::default()
        };

        let primary = MetricField::present(&metrics, MetricTier::Primary);
        assert_eq!(primary, vec![(MetricField::Cvi, 87.5), (MetricField::Coverage, 92.0)]);

        let detail = MetricField::present(&metrics, MetricTier::Detail);
        assert_eq!(
            detail,
            vec![(MetricField::Smoothness, 40.25), (MetricField::LaplacianVariance, 131.7)]
        );

        assert_eq!(MetricField::Coverage.format(92.0), "92%");
        assert_eq!(MetricField::Cvi.format(87.5), "87.5%");
        assert_eq!(MetricField::LaplacianVariance.format(131.7), "131.7");
    }

    #[test]
    fn test_metric_keys_match_wire_names() {
        let metrics: Metrics = serde_json::from_str(
            r#"{"cvi":1,"cqi":2,"coverage":3,"color_uniformity":4,"smoothness":5,
                "edge_density":6,"saturation_score":7,"brightness_score":8,"laplacian_variance":9}"#,
        )
        .unwrap();
        for (expected, field) in (1..=9).zip(MetricField::iter()) {
            assert_eq!(field.value(&metrics), Some(expected as f64), "{}", field.key());
        }
    }
}
