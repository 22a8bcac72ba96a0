//! Axum route handlers for the four pipelines.
//!
//! Request and response field names match what the web client sends and reads.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::input;
use crate::pipeline::{
    evaluate_resume, generate_cover_letter, generate_interview_questions, tailor_resume,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorResponse {
    pub tailored_resume: String,
}

/// Shared by the evaluator and the cover letter generator.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeJobRequest {
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    pub evaluation: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterResponse {
    pub generated_cover_letter: String,
}

/// `content` is itself a JSON array, serialized as a string.
#[derive(Debug, Serialize)]
pub struct InterviewResponse {
    pub content: String,
}

fn require_both(resume: &str, job_description: &str) -> Result<(), AppError> {
    if resume.trim().is_empty() || job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Please provide both your resume and the job description.".to_string(),
        ));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/tailor
pub async fn handle_tailor(
    State(state): State<AppState>,
    Json(request): Json<TailorRequest>,
) -> Result<Json<TailorResponse>, AppError> {
    require_both(&request.resume_text, &request.job_description)?;
    info!("Tailoring resume ({} chars)", request.resume_text.len());

    let tailored_resume = tailor_resume(
        state.llm.as_ref(),
        &state.prompts,
        &request.resume_text,
        &request.job_description,
    )
    .await?;

    Ok(Json(TailorResponse { tailored_resume }))
}

/// POST /api/v1/evaluate-resume
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<ResumeJobRequest>,
) -> Result<Json<EvaluationResponse>, AppError> {
    require_both(&request.resume, &request.job_description)?;

    let evaluation = evaluate_resume(
        state.llm.as_ref(),
        &state.prompts,
        &request.resume,
        &request.job_description,
    )
    .await?;

    Ok(Json(EvaluationResponse { evaluation }))
}

/// POST /api/v1/generate-cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<ResumeJobRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    require_both(&request.resume, &request.job_description)?;

    let generated_cover_letter = generate_cover_letter(
        state.llm.as_ref(),
        &state.prompts,
        &request.resume,
        &request.job_description,
    )
    .await?;

    Ok(Json(CoverLetterResponse {
        generated_cover_letter,
    }))
}

/// POST /api/v1/interview/generate
///
/// The body is the raw job description text. A blank body yields `[]`
/// without calling the model.
pub async fn handle_interview(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<InterviewResponse>, AppError> {
    let Some(job_description) = input::single(&body) else {
        return Ok(Json(InterviewResponse {
            content: "[]".to_string(),
        }));
    };

    let content =
        generate_interview_questions(state.llm.as_ref(), &state.prompts, &job_description).await?;

    Ok(Json(InterviewResponse { content }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::llm_client::testing::ScriptedGenerator;
    use crate::routes::build_router;
    use crate::state::AppState;
    use crate::templates::PromptLibrary;

    fn app(llm: Arc<ScriptedGenerator>) -> Router {
        build_router(AppState {
            llm,
            prompts: Arc::new(PromptLibrary::builtin()),
        })
    }

    async fn post(app: Router, uri: &str, body: Body, content_type: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::post(uri)
                    .header("content-type", content_type)
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        post(app, uri, Body::from(body.to_string()), "application/json").await
    }

    #[tokio::test]
    async fn test_tailor_endpoint_returns_tailored_resume() {
        let llm = Arc::new(ScriptedGenerator::new([
            "{}",
            "{}",
            "draft",
            "\\documentclass{article}final",
        ]));
        let (status, body) = post_json(
            app(llm.clone()),
            "/api/v1/tailor",
            json!({"resumeText": "my resume", "jobDescription": "the job"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tailoredResume"], "\\documentclass{article}final");
        assert_eq!(llm.prompts().len(), 4);
    }

    #[tokio::test]
    async fn test_blank_input_is_rejected_without_model_call() {
        let llm = Arc::new(ScriptedGenerator::new(["unused"]));
        let (status, body) = post_json(
            app(llm.clone()),
            "/api/v1/evaluate-resume",
            json!({"resume": "  ", "jobDescription": "the job"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(llm.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_cover_letter_endpoint_field_names() {
        let llm = Arc::new(ScriptedGenerator::new(["{}", "{}", "draft", "Dear team"]));
        let (status, body) = post_json(
            app(llm),
            "/api/v1/generate-cover-letter",
            json!({"resume": "my resume", "jobDescription": "the job"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["generatedCoverLetter"], "Dear team");
    }

    #[tokio::test]
    async fn test_pipeline_failure_maps_to_bad_gateway() {
        let llm = Arc::new(ScriptedGenerator::new(["not json at all"]));
        let (status, body) = post_json(
            app(llm),
            "/api/v1/evaluate-resume",
            json!({"resume": "r", "jobDescription": "j"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "LLM_ERROR");
    }

    #[tokio::test]
    async fn test_interview_endpoint_takes_raw_text() {
        let llm = Arc::new(ScriptedGenerator::new([
            "{}",
            "[{\"question\": \"Q\", \"answer\": \"A\"}]",
        ]));
        let (status, body) = post(
            app(llm.clone()),
            "/api/v1/interview/generate",
            Body::from("Senior Go developer"),
            "text/plain",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let questions: Value = serde_json::from_str(body["content"].as_str().unwrap()).unwrap();
        assert_eq!(questions[0]["question"], "Q");
        assert!(llm.prompts()[0].contains("Senior Go developer"));
    }

    #[tokio::test]
    async fn test_blank_interview_body_returns_empty_list() {
        let llm = Arc::new(ScriptedGenerator::new(["unused"]));
        let (status, body) = post(
            app(llm.clone()),
            "/api/v1/interview/generate",
            Body::from("   "),
            "text/plain",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["content"], "[]");
        assert!(llm.prompts().is_empty());
    }
}
