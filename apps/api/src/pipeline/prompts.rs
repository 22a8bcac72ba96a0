// All built-in prompt templates for the four pipelines.
// Names double as relative paths inside a prompts override directory.
// Placeholders are `{snake_case}`; literal JSON braces are left untouched.

pub const TAILOR_JD_ANALYSIS: &str = "tailor/jd_analysis.txt";
pub const TAILOR_PLANNING: &str = "tailor/planning.txt";
pub const TAILOR_DRAFTING: &str = "tailor/drafting.txt";
pub const TAILOR_REVIEW: &str = "tailor/review.txt";
pub const TAILOR_LATEX_TEMPLATE: &str = "tailor/template.tex";

pub const EVALUATE_JD_ANALYSIS: &str = "evaluate/jd_analysis.txt";
pub const EVALUATE_RESUME_ANALYSIS: &str = "evaluate/resume_analysis.txt";
pub const EVALUATE_ATS: &str = "evaluate/ats_evaluation.txt";

pub const COVER_LETTER_ANALYSIS: &str = "cover_letter/analysis.txt";
pub const COVER_LETTER_OUTLINE: &str = "cover_letter/outline.txt";
pub const COVER_LETTER_DRAFT: &str = "cover_letter/draft.txt";
pub const COVER_LETTER_REVIEW: &str = "cover_letter/review.txt";

pub const INTERVIEW_JD_ANALYSIS: &str = "interview/jd_analysis.txt";
pub const INTERVIEW_QUESTIONS: &str = "interview/questions.txt";

/// Looks up a compiled-in template by name.
pub fn builtin(name: &str) -> Option<&'static str> {
    let template = match name {
        TAILOR_JD_ANALYSIS | EVALUATE_JD_ANALYSIS => JD_ANALYSIS_PROMPT,
        TAILOR_PLANNING => TAILOR_PLANNING_PROMPT,
        TAILOR_DRAFTING => TAILOR_DRAFTING_PROMPT,
        TAILOR_REVIEW => TAILOR_REVIEW_PROMPT,
        TAILOR_LATEX_TEMPLATE => DEFAULT_LATEX_TEMPLATE,
        EVALUATE_RESUME_ANALYSIS => RESUME_ANALYSIS_PROMPT,
        EVALUATE_ATS => ATS_EVALUATION_PROMPT,
        COVER_LETTER_ANALYSIS => COVER_LETTER_ANALYSIS_PROMPT,
        COVER_LETTER_OUTLINE => COVER_LETTER_OUTLINE_PROMPT,
        COVER_LETTER_DRAFT => COVER_LETTER_DRAFT_PROMPT,
        COVER_LETTER_REVIEW => COVER_LETTER_REVIEW_PROMPT,
        INTERVIEW_JD_ANALYSIS => INTERVIEW_ANALYSIS_PROMPT,
        INTERVIEW_QUESTIONS => INTERVIEW_QUESTIONS_PROMPT,
        _ => return None,
    };
    Some(template)
}

// ────────────────────────────────────────────────────────────────────────────
// Shared
// ────────────────────────────────────────────────────────────────────────────

/// Replace: {job_description}
const JD_ANALYSIS_PROMPT: &str = r#"You are an expert technical recruiter and ATS (applicant tracking system) analyst.
Analyze the job description below and extract what a screening system and a hiring manager will look for.

Return a single JSON object with this structure:
{
  "job_title": "string",
  "seniority": "junior" | "mid" | "senior" | "staff" | "principal" | "unknown",
  "hard_skills": ["string"],
  "soft_skills": ["string"],
  "required_qualifications": ["string"],
  "preferred_qualifications": ["string"],
  "responsibilities": ["string"],
  "ats_keywords": [{"keyword": "string", "importance": "high" | "medium" | "low"}]
}

Return ONLY the JSON object. No explanations.

JOB DESCRIPTION:
{job_description}"#;

// ────────────────────────────────────────────────────────────────────────────
// Tailor
// ────────────────────────────────────────────────────────────────────────────

/// Replace: {jd_analysis_json}, {resume_content}
const TAILOR_PLANNING_PROMPT: &str = r#"You are a senior resume strategist. Using the job description analysis and the candidate's resume,
plan an ATS-friendly rewrite. Never invent experience, employers, dates, degrees or metrics.

JOB DESCRIPTION ANALYSIS:
{jd_analysis_json}

ORIGINAL RESUME:
{resume_content}

Return a single JSON object with this structure:
{
  "target_summary": "2-3 sentence professional summary aimed at this role",
  "keywords_to_integrate": ["string"],
  "section_order": ["string"],
  "experience_rewrites": [
    {"original": "existing bullet", "rewrite_goal": "what to emphasize", "keywords": ["string"]}
  ],
  "skills_to_highlight": ["string"],
  "content_to_drop": ["string"],
  "gaps": ["requirement the resume does not cover"]
}

Return ONLY the JSON object."#;

/// Replace: {strategic_plan_json}, {resume_content}, {DEFAULT_LATEX_TEMPLATE}
const TAILOR_DRAFTING_PROMPT: &str = r#"You are an expert resume writer who produces clean, compilable LaTeX.
Rewrite the candidate's resume following the strategic plan exactly.

STRATEGIC PLAN:
{strategic_plan_json}

ORIGINAL RESUME:
{resume_content}

LATEX TEMPLATE (keep its preamble and macros, replace the placeholder content):
{DEFAULT_LATEX_TEMPLATE}

RULES:
1. Use only facts present in the original resume.
2. Start every bullet with a strong action verb and keep it to at most two printed lines.
3. Integrate the planned keywords naturally. Never keyword-stuff.
4. Escape LaTeX special characters (%, &, #, _, $).
5. Output the complete LaTeX document starting with \documentclass and nothing else."#;

/// Replace: {jd_analysis_json}, {strategic_plan_json}, {latex_draft}
const TAILOR_REVIEW_PROMPT: &str = r#"You are a meticulous hiring manager reviewing a tailored resume draft written in LaTeX.

JOB DESCRIPTION ANALYSIS:
{jd_analysis_json}

STRATEGIC PLAN:
{strategic_plan_json}

DRAFT:
{latex_draft}

Critique the draft silently against the analysis and the plan: missing high-importance keywords,
weak or vague bullets, inconsistent tense, formatting that an ATS cannot parse, and any claim not
supported by the plan. Then fix every issue you found.

Output ONLY the final, corrected LaTeX document starting with \documentclass. Do not include the critique."#;

/// Skeleton handed to the drafting step as {DEFAULT_LATEX_TEMPLATE}.
const DEFAULT_LATEX_TEMPLATE: &str = r#"\documentclass[11pt,letterpaper]{article}
\usepackage[margin=0.75in]{geometry}
\usepackage[hidelinks]{hyperref}
\usepackage{enumitem}
\usepackage{titlesec}
\setlist[itemize]{leftmargin=*,noitemsep,topsep=2pt}
\titleformat{\section}{\large\bfseries}{}{0em}{}[\titlerule]
\pagestyle{empty}

\begin{document}

\begin{center}
  {\LARGE\bfseries FULL NAME}\\[2pt]
  EMAIL $\cdot$ PHONE $\cdot$ LOCATION $\cdot$ LINKS
\end{center}

\section*{Summary}
SUMMARY

\section*{Experience}
\textbf{JOB TITLE} \hfill DATES\\
\textit{COMPANY} \hfill LOCATION
\begin{itemize}
  \item BULLET
\end{itemize}

\section*{Projects}
\textbf{PROJECT} $|$ \textit{TECH STACK} \hfill DATES
\begin{itemize}
  \item BULLET
\end{itemize}

\section*{Education}
\textbf{INSTITUTION} \hfill DATES\\
DEGREE

\section*{Skills}
\textbf{CATEGORY:} ITEMS

\end{document}"#;

// ────────────────────────────────────────────────────────────────────────────
// Evaluate
// ────────────────────────────────────────────────────────────────────────────

/// Replace: {resume_content}
const RESUME_ANALYSIS_PROMPT: &str = r#"You are an ATS parser. Extract the structured content of the resume below.

Return a single JSON object with this structure:
{
  "candidate_name": "string",
  "total_years_experience": number | null,
  "hard_skills": ["string"],
  "soft_skills": ["string"],
  "job_titles": ["string"],
  "education": ["string"],
  "certifications": ["string"],
  "quantified_achievements": ["string"],
  "formatting_issues": ["string"]
}

Return ONLY the JSON object.

RESUME:
{resume_content}"#;

/// Replace: {job_description_json}, {resume_json}, {original_resume}
const ATS_EVALUATION_PROMPT: &str = r#"You are a senior recruiter running a comprehensive ATS evaluation.

JOB REQUIREMENTS (structured):
{job_description_json}

RESUME (structured):
{resume_json}

ORIGINAL RESUME TEXT:
{original_resume}

Write an evaluation report in plain text with these sections:
1. OVERALL MATCH SCORE: a number from 0 to 100 with a one-line justification.
2. KEYWORD MATCH: matched keywords and missing high-importance keywords.
3. SKILLS GAP ANALYSIS: required skills the resume does not demonstrate.
4. EXPERIENCE ALIGNMENT: how the candidate's roles and seniority map to the role.
5. FORMATTING & ATS COMPATIBILITY: issues that could break automated parsing.
6. TOP 5 RECOMMENDATIONS: concrete, prioritized edits.

Be specific and honest. Do not invent qualifications."#;

// ────────────────────────────────────────────────────────────────────────────
// Cover letter
// ────────────────────────────────────────────────────────────────────────────

/// Replace: {job_description}, {resume_content}
const COVER_LETTER_ANALYSIS_PROMPT: &str = r#"You are a career coach preparing to write a cover letter.
Compare the job description with the candidate's resume.

JOB DESCRIPTION:
{job_description}

RESUME:
{resume_content}

Return a single JSON object with this structure:
{
  "company_name": "string",
  "role_title": "string",
  "hiring_manager": "string or null",
  "company_values": ["string"],
  "top_requirements": ["string"],
  "matching_achievements": [{"requirement": "string", "evidence": "string"}],
  "candidate_name": "string",
  "tone": "formal" | "warm" | "energetic"
}

Return ONLY the JSON object."#;

/// Replace: {analysis_json}
const COVER_LETTER_OUTLINE_PROMPT: &str = r#"Using the analysis below, outline a one-page cover letter.

ANALYSIS:
{analysis_json}

Return a single JSON object with this structure:
{
  "opening_hook": "string",
  "body_paragraphs": [{"theme": "string", "evidence": ["string"]}],
  "company_connection": "string",
  "closing_call_to_action": "string"
}

Return ONLY the JSON object."#;

/// Replace: {outline_json}, {resume_content}, {job_description}
const COVER_LETTER_DRAFT_PROMPT: &str = r#"Write a cover letter that follows this outline exactly.

OUTLINE:
{outline_json}

RESUME (the only source of facts):
{resume_content}

JOB DESCRIPTION:
{job_description}

RULES:
1. 250 to 400 words, three to five paragraphs.
2. Use only achievements present in the resume.
3. Address the hiring manager by name when known, otherwise "Dear Hiring Manager,".
4. Plain text only. No markdown, no placeholders in square brackets."#;

/// Replace: {cover_letter_draft}, {analysis_json}
const COVER_LETTER_REVIEW_PROMPT: &str = r#"You are an editor polishing a cover letter.

ANALYSIS OF THE ROLE AND CANDIDATE:
{analysis_json}

DRAFT:
{cover_letter_draft}

Fix clichés, passive voice, grammar, and any claim not backed by the analysis. Keep the structure
and length. Output ONLY the final cover letter text, with no commentary."#;

// ────────────────────────────────────────────────────────────────────────────
// Interview
// ────────────────────────────────────────────────────────────────────────────

/// Replace: {job_description}
const INTERVIEW_ANALYSIS_PROMPT: &str = r#"Analyze the following job description.
Identify the top 3 technical skills and the top 2 behavioral traits required.
Return the result as a valid JSON object:
{"technical_skills": ["string"], "behavioral_traits": ["string"], "role_title": "string"}

JOB DESCRIPTION:
{job_description}"#;

/// Replace: {analysis_json}
const INTERVIEW_QUESTIONS_PROMPT: &str = r#"Based on this job description analysis:
{analysis_json}

Act as an expert technical recruiter and hiring manager. Generate 10 interview questions tailored to this role:
1. Introduction & experience (1-2 questions), tailored to the role.
2. Hard skills & technical proficiency (4-5 questions) on the specific tools and languages above.
3. Behavioral & situational (3-4 questions) answerable with the STAR method.

For EACH question, give a model answer or the key talking points a strong candidate would cover.

Return a raw JSON array with exactly this structure:
[
  {"question": "The interview question", "answer": "The ideal answer or key points"}
]

Do not use markdown code fences. Return only the JSON array."#;
