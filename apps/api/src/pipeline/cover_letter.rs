//! Cover letter generation: analysis, outline, draft and review.

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::pipeline::prompts::{
    COVER_LETTER_ANALYSIS, COVER_LETTER_DRAFT, COVER_LETTER_OUTLINE, COVER_LETTER_REVIEW,
};
use crate::pipeline::{Chain, Step, StepOutput};
use crate::templates::{PromptLibrary, Vars};

pub const COVER_LETTER: Chain = Chain::new(
    "cover-letter",
    &[
        Step {
            label: "Analysis",
            template: COVER_LETTER_ANALYSIS,
            output: StepOutput::Json,
            bind_as: "analysis_json",
        },
        Step {
            label: "Outlining",
            template: COVER_LETTER_OUTLINE,
            output: StepOutput::Json,
            bind_as: "outline_json",
        },
        Step {
            label: "Drafting",
            template: COVER_LETTER_DRAFT,
            output: StepOutput::Text,
            bind_as: "cover_letter_draft",
        },
        Step {
            label: "Reviewing",
            template: COVER_LETTER_REVIEW,
            output: StepOutput::Text,
            bind_as: "final_cover_letter",
        },
    ],
);

pub async fn generate_cover_letter(
    llm: &dyn TextGenerator,
    library: &PromptLibrary,
    resume_content: &str,
    job_description: &str,
) -> Result<String, AppError> {
    let vars = Vars::from([
        ("resume_content", resume_content.to_string()),
        ("job_description", job_description.to_string()),
    ]);

    Ok(COVER_LETTER.run(llm, library, vars).await?.raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedGenerator;

    #[tokio::test]
    async fn test_cover_letter_chains_analysis_into_review() {
        let llm = ScriptedGenerator::new([
            r#"{"company_name": "Acme"}"#,
            r#"{"opening_hook": "Reliability at scale"}"#,
            "Dear Hiring Manager, draft.",
            "Dear Hiring Manager, final.",
        ]);

        let letter = generate_cover_letter(
            &llm,
            &PromptLibrary::builtin(),
            "Jane Doe resume",
            "Acme is hiring",
        )
        .await
        .unwrap();

        assert_eq!(letter, "Dear Hiring Manager, final.");

        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 4);
        assert!(prompts[0].contains("Acme is hiring") && prompts[0].contains("Jane Doe resume"));
        assert!(prompts[1].contains("\"company_name\": \"Acme\""));
        assert!(prompts[2].contains("\"opening_hook\": \"Reliability at scale\""));
        assert!(prompts[2].contains("Acme is hiring"));
        assert!(prompts[3].contains("Dear Hiring Manager, draft."));
        assert!(prompts[3].contains("\"company_name\": \"Acme\""));
    }
}
