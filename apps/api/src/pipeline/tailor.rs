//! Resume tailoring in four steps, ending in a LaTeX document.
//!
//! Flow: JD analysis → strategic plan → LaTeX draft → critique & refine.

use crate::errors::AppError;
use crate::llm_client::extract::clean_final_latex;
use crate::llm_client::TextGenerator;
use crate::pipeline::prompts::{
    TAILOR_DRAFTING, TAILOR_JD_ANALYSIS, TAILOR_LATEX_TEMPLATE, TAILOR_PLANNING, TAILOR_REVIEW,
};
use crate::pipeline::{Chain, Step, StepOutput};
use crate::templates::{PromptLibrary, Vars};

pub const TAILOR: Chain = Chain::new(
    "tailor",
    &[
        Step {
            label: "JD Analysis",
            template: TAILOR_JD_ANALYSIS,
            output: StepOutput::Json,
            bind_as: "jd_analysis_json",
        },
        Step {
            label: "Strategic Planning",
            template: TAILOR_PLANNING,
            output: StepOutput::Json,
            bind_as: "strategic_plan_json",
        },
        Step {
            label: "Draft Generation",
            template: TAILOR_DRAFTING,
            output: StepOutput::Text,
            bind_as: "latex_draft",
        },
        Step {
            label: "Critique and Refine",
            template: TAILOR_REVIEW,
            output: StepOutput::Text,
            bind_as: "final_latex",
        },
    ],
);

/// Produces a tailored LaTeX resume for `job_description`.
pub async fn tailor_resume(
    llm: &dyn TextGenerator,
    library: &PromptLibrary,
    resume_content: &str,
    job_description: &str,
) -> Result<String, AppError> {
    let latex_template = library.load(TAILOR_LATEX_TEMPLATE)?;

    let vars = Vars::from([
        ("resume_content", resume_content.to_string()),
        ("job_description", job_description.to_string()),
        ("DEFAULT_LATEX_TEMPLATE", latex_template.into_owned()),
    ]);

    let result = TAILOR.run(llm, library, vars).await?;
    Ok(clean_final_latex(&result.raw))
}
