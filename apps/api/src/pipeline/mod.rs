//! Prompt chaining: fixed, linear sequences of model calls.
//!
//! Each step renders its template with everything bound so far, calls the
//! model, and binds the answer under its own name for the steps after it.
//! JSON answers are extracted, parsed, and re-bound pretty-printed; text
//! answers are bound verbatim. Steps run strictly in order and the first
//! failure aborts the chain.

use serde_json::Value;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::extract::parse_json;
use crate::llm_client::TextGenerator;
use crate::templates::{render, PromptLibrary, Vars};

pub mod cover_letter;
pub mod evaluate;
pub mod handlers;
pub mod interview;
pub mod prompts;
pub mod tailor;

pub use cover_letter::generate_cover_letter;
pub use evaluate::evaluate_resume;
pub use interview::generate_interview_questions;
pub use tailor::tailor_resume;

/// What a step's answer is expected to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutput {
    /// A JSON object or array somewhere in the answer.
    Json,
    /// Free text, used as-is.
    Text,
}

/// One prompt in a chain.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub label: &'static str,
    pub template: &'static str,
    pub output: StepOutput,
    /// Variable name later templates use to refer to this step's result.
    pub bind_as: &'static str,
}

/// Result of the last step in a chain.
#[derive(Debug, Clone)]
pub struct StepResult {
    pub raw: String,
    pub json: Option<Value>,
}

/// A named, fixed list of steps.
#[derive(Debug, Clone, Copy)]
pub struct Chain {
    pub name: &'static str,
    pub steps: &'static [Step],
}

impl Chain {
    pub const fn new(name: &'static str, steps: &'static [Step]) -> Self {
        Self { name, steps }
    }

    /// Runs every step in order and returns the final step's result.
    pub async fn run(
        &self,
        llm: &dyn TextGenerator,
        library: &PromptLibrary,
        mut vars: Vars,
    ) -> Result<StepResult, AppError> {
        let total = self.steps.len();
        let mut last = None;

        for (i, step) in self.steps.iter().enumerate() {
            let index = i + 1;
            info!("{}: step {index}/{total} ({})", self.name, step.label);

            let result = run_step(step, llm, library, &vars)
                .await
                .map_err(|source| AppError::Step {
                    index,
                    label: step.label,
                    source: Box::new(source),
                })?;

            let bound = match &result.json {
                Some(value) => serde_json::to_string_pretty(value)
                    .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize step output: {e}")))?,
                None => result.raw.clone(),
            };
            vars.insert(step.bind_as, bound);
            last = Some(result);
        }

        last.ok_or_else(|| AppError::Internal(anyhow::anyhow!("chain {} has no steps", self.name)))
    }
}

async fn run_step(
    step: &Step,
    llm: &dyn TextGenerator,
    library: &PromptLibrary,
    vars: &Vars,
) -> Result<StepResult, AppError> {
    let template = library.load(step.template)?;
    let prompt = render(&template, vars);
    debug!("Prompt for {}: {} chars", step.label, prompt.len());

    let raw = llm.generate(&prompt).await?;

    let json = match step.output {
        StepOutput::Json => Some(parse_json(&raw)?),
        StepOutput::Text => None,
    };
    Ok(StepResult { raw, json })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedGenerator;
    use crate::llm_client::LlmError;

    const STEPS: &[Step] = &[
        Step {
            label: "JD Analysis",
            template: prompts::INTERVIEW_JD_ANALYSIS,
            output: StepOutput::Json,
            bind_as: "analysis_json",
        },
        Step {
            label: "Question Generation",
            template: prompts::INTERVIEW_QUESTIONS,
            output: StepOutput::Text,
            bind_as: "questions",
        },
    ];
    const CHAIN: Chain = Chain::new("test", STEPS);

    fn jd_vars() -> Vars {
        Vars::from([("job_description", "Rust engineer".to_string())])
    }

    #[tokio::test]
    async fn test_json_output_is_bound_pretty_printed() {
        let llm = ScriptedGenerator::new([
            "Sure:\n```json\n{\"technical_skills\":[\"Rust\"]}\n```",
            "done",
        ]);
        let result = CHAIN
            .run(&llm, &PromptLibrary::builtin(), jd_vars())
            .await
            .unwrap();

        assert_eq!(result.raw, "done");
        assert!(result.json.is_none());

        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].contains("Rust engineer"));
        assert!(prompts[1].contains("{\n  \"technical_skills\": [\n    \"Rust\"\n  ]\n}"));
    }

    #[tokio::test]
    async fn test_unparseable_json_step_aborts_chain() {
        let llm = ScriptedGenerator::new(["no json here", "never used"]);
        let err = CHAIN
            .run(&llm, &PromptLibrary::builtin(), jd_vars())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Step { index: 1, label: "JD Analysis", .. }
        ));
        assert!(matches!(err.root(), AppError::JsonExtraction(_)));
        assert_eq!(llm.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_llm_failure_is_reported_with_step() {
        let llm = ScriptedGenerator::new(["{\"ok\": true}"]).push_error(LlmError::Api {
            status: 500,
            message: "backend unavailable".to_string(),
        });
        let err = CHAIN
            .run(&llm, &PromptLibrary::builtin(), jd_vars())
            .await
            .unwrap_err();

        let msg = err.to_string();
        assert!(msg.starts_with("error during step 2 (Question Generation)"));
        assert!(msg.contains("backend unavailable"));
    }

    #[tokio::test]
    async fn test_missing_template_fails_before_calling_model() {
        const BROKEN: &[Step] = &[Step {
            label: "Broken",
            template: "does/not/exist.txt",
            output: StepOutput::Text,
            bind_as: "x",
        }];
        let llm = ScriptedGenerator::new(["unused"]);
        let err = Chain::new("broken", BROKEN)
            .run(&llm, &PromptLibrary::builtin(), Vars::new())
            .await
            .unwrap_err();

        assert!(matches!(err.root(), AppError::TemplateNotFound(_)));
        assert!(llm.prompts().is_empty());
    }
}
