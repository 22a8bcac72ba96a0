//! Mock interview questions: JD analysis, then question generation.

use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::pipeline::prompts::{INTERVIEW_JD_ANALYSIS, INTERVIEW_QUESTIONS};
use crate::pipeline::{Chain, Step, StepOutput};
use crate::templates::{PromptLibrary, Vars};

pub const INTERVIEW: Chain = Chain::new(
    "interview",
    &[
        Step {
            label: "JD Analysis",
            template: INTERVIEW_JD_ANALYSIS,
            output: StepOutput::Json,
            bind_as: "analysis_json",
        },
        Step {
            label: "Question Generation",
            template: INTERVIEW_QUESTIONS,
            output: StepOutput::Json,
            bind_as: "questions_json",
        },
    ],
);

/// Returns the generated questions as a compact JSON array of
/// `{"question", "answer"}` objects.
pub async fn generate_interview_questions(
    llm: &dyn TextGenerator,
    library: &PromptLibrary,
    job_description: &str,
) -> Result<String, AppError> {
    let vars = Vars::from([("job_description", job_description.to_string())]);
    let result = INTERVIEW.run(llm, library, vars).await?;

    match result.json {
        Some(questions @ Value::Array(_)) => serde_json::to_string(&questions)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize questions: {e}"))),
        _ => Err(AppError::Step {
            index: INTERVIEW.steps.len(),
            label: "Question Generation",
            source: Box::new(AppError::JsonExtraction(
                "expected a JSON array of questions".to_string(),
            )),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedGenerator;

    #[tokio::test]
    async fn test_interview_returns_compact_question_array() {
        let llm = ScriptedGenerator::new([
            "{\"technical_skills\": [\"Go\"]}",
            "```json\n[\n  {\"question\": \"Why Go?\", \"answer\": \"Concurrency\"}\n]\n```",
        ]);

        let out = generate_interview_questions(&llm, &PromptLibrary::builtin(), "Go developer")
            .await
            .unwrap();

        assert!(!out.contains('\n'));
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([{"question": "Why Go?", "answer": "Concurrency"}])
        );
        let prompts = llm.prompts();
        assert!(prompts[0].contains("Go developer"));
        assert!(prompts[1].contains("\"technical_skills\""));
    }

    #[tokio::test]
    async fn test_interview_rejects_object_instead_of_array() {
        let llm = ScriptedGenerator::new(["{}", "{\"question\": \"only one\"}"]);
        let err = generate_interview_questions(&llm, &PromptLibrary::builtin(), "jd")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Step { index: 2, .. }));
    }
}
