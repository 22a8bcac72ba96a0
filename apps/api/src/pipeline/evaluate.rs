//! ATS evaluation: structured JD and resume analyses feed a final report.

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::pipeline::prompts::{EVALUATE_ATS, EVALUATE_JD_ANALYSIS, EVALUATE_RESUME_ANALYSIS};
use crate::pipeline::{Chain, Step, StepOutput};
use crate::templates::{PromptLibrary, Vars};

pub const EVALUATE: Chain = Chain::new(
    "evaluate",
    &[
        Step {
            label: "JD Analysis",
            template: EVALUATE_JD_ANALYSIS,
            output: StepOutput::Json,
            bind_as: "job_description_json",
        },
        Step {
            label: "Resume Analysis",
            template: EVALUATE_RESUME_ANALYSIS,
            output: StepOutput::Json,
            bind_as: "resume_json",
        },
        Step {
            label: "ATS Evaluation",
            template: EVALUATE_ATS,
            output: StepOutput::Text,
            bind_as: "final_evaluation",
        },
    ],
);

/// Returns the evaluation report text, exactly as the model wrote it.
pub async fn evaluate_resume(
    llm: &dyn TextGenerator,
    library: &PromptLibrary,
    resume_content: &str,
    job_description: &str,
) -> Result<String, AppError> {
    let vars = Vars::from([
        ("resume_content", resume_content.to_string()),
        ("original_resume", resume_content.to_string()),
        ("job_description", job_description.to_string()),
    ]);

    Ok(EVALUATE.run(llm, library, vars).await?.raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedGenerator;

    #[tokio::test]
    async fn test_evaluate_feeds_both_analyses_into_report() {
        let llm = ScriptedGenerator::new([
            r#"{"hard_skills": ["Kubernetes"]}"#,
            r#"Parsed: {"candidate_name": "Jane Doe"}"#,
            "OVERALL MATCH SCORE: 72\n",
        ]);

        let report = evaluate_resume(
            &llm,
            &PromptLibrary::builtin(),
            "Jane Doe\nSRE at Acme",
            "Platform engineer, Kubernetes required",
        )
        .await
        .unwrap();

        assert_eq!(report, "OVERALL MATCH SCORE: 72\n");

        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 3);
        assert!(prompts[0].contains("Kubernetes required"));
        assert!(prompts[1].contains("SRE at Acme"));
        assert!(!prompts[1].contains("Kubernetes required"));
        assert!(prompts[2].contains("\"hard_skills\": [\n    \"Kubernetes\"\n  ]"));
        assert!(prompts[2].contains("\"candidate_name\": \"Jane Doe\""));
        assert!(prompts[2].contains("Jane Doe\nSRE at Acme"));
    }

    #[tokio::test]
    async fn test_evaluate_fails_when_resume_analysis_has_no_json() {
        let llm = ScriptedGenerator::new(["{}", "The resume looks great!"]);
        let err = evaluate_resume(&llm, &PromptLibrary::builtin(), "r", "j")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Step { index: 2, label: "Resume Analysis", .. }
        ));
    }
}
