//! 呼び出し側へ返すレスポンス形式
//!
//! 成功: `{ "success": true, "data": { ...report, products, lipsticks, styleRecommendations } }`
//! 失敗: `{ "success": false, "error": "..." }`

use crate::catalog::Recommendations;
use crate::types::AnalysisReport;
use serde::Serialize;

/// レポート + 推薦（推薦は省略可）
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisPayload {
    #[serde(flatten)]
    pub report: AnalysisReport,

    #[serde(flatten)]
    pub recommendations: Option<Recommendations>,
}

impl AnalysisPayload {
    pub fn new(report: AnalysisReport, with_recommendations: bool) -> Self {
        let recommendations = with_recommendations.then(|| Recommendations::for_report(&report));
        Self { report, recommendations }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(message.into()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::{detect_concerns, generate_tips};
    use crate::types::{Metrics, SkinType, ToneResult, TypeResult};

    fn sample_report() -> AnalysisReport {
        let skin_type = TypeResult {
            category: SkinType::Oily,
            confidence: 0.85,
            texture_variance: 640.0,
            brightness_std: 52.0,
            local_contrast: 9.0,
        };
        let metrics = Metrics { hydration: 80, barrier_score: 72, photo_clarity: 90 };
        AnalysisReport::assemble(
            ToneResult::from_dominant([150, 120, 100]),
            &skin_type,
            metrics,
            detect_concerns(skin_type.category, &metrics),
            generate_tips(skin_type.category),
        )
    }

    #[test]
    fn test_payload_with_recommendations() {
        let payload = AnalysisPayload::new(sample_report(), true);
        let json = serde_json::to_value(ApiResponse::ok(payload)).expect("シリアライズ失敗");

        assert_eq!(json["success"], true);
        assert!(json.get("error").is_none());
        let data = &json["data"];
        assert_eq!(data["skinType"], "Oily");
        assert_eq!(data["skinTone"]["name"], "Deep");
        assert_eq!(data["products"][0]["brand"], "Biotique");
        assert_eq!(data["lipsticks"][0]["name"], "Deep Plum");
        assert!(data["styleRecommendations"]["metals"].is_string());
        assert_eq!(data["concerns"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_payload_without_recommendations() {
        let json = serde_json::to_value(AnalysisPayload::new(sample_report(), false)).unwrap();
        assert!(json.get("products").is_none());
        assert!(json.get("styleRecommendations").is_none());
        assert_eq!(json["tips"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_error_response() {
        let response: ApiResponse<AnalysisPayload> = ApiResponse::err("Analysis failed: boom");
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false, "error": "Analysis failed: boom" }));
    }
}
