use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::resume::GenerationRequest;
use crate::render::render_latex;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub template_name: String,
    pub latex: String,
}

/// POST /api/v1/generate
///
/// Renders structured resume data into a LaTeX document. No model call.
pub async fn handle_generate(
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if request.resume_data.personal_info.full_name.trim().is_empty() {
        return Err(AppError::Validation("fullName cannot be empty".to_string()));
    }

    let latex = render_latex(&request)?;
    Ok(Json(GenerateResponse {
        template_name: request.template_name,
        latex,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::fixtures::snake_case_request;

    #[tokio::test]
    async fn test_generate_renders_latex() {
        let request: GenerationRequest = serde_json::from_value(snake_case_request()).unwrap();
        let Json(response) = handle_generate(Json(request)).await.unwrap();
        assert_eq!(response.template_name, "classic");
        assert!(response.latex.contains("Jane Doe"));
    }

    #[tokio::test]
    async fn test_generate_rejects_blank_name() {
        let mut request: GenerationRequest =
            serde_json::from_value(snake_case_request()).unwrap();
        request.resume_data.personal_info.full_name = " ".to_string();
        assert!(matches!(
            handle_generate(Json(request)).await,
            Err(AppError::Validation(_))
        ));
    }
}
