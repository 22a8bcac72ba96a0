//! LaTeX rendering of a structured resume.
//!
//! Turns a [`GenerationRequest`] into a complete `.tex` document. Compiling it
//! to PDF is left to the caller.

pub mod handlers;

use std::fmt::Write;

use crate::errors::AppError;
use crate::models::resume::{GenerationRequest, ResumeData};

/// Visual style of the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeTemplate {
    Classic,
    Modern,
}

impl ResumeTemplate {
    pub const NAMES: &'static [&'static str] = &["classic", "modern"];

    /// Accepts the client's display name in any case, with spaces or underscores.
    pub fn from_name(name: &str) -> Result<Self, AppError> {
        match name.trim().to_lowercase().replace(' ', "_").as_str() {
            "" | "classic" => Ok(Self::Classic),
            "modern" => Ok(Self::Modern),
            other => Err(AppError::Validation(format!(
                "unknown template '{other}', expected one of: {}",
                Self::NAMES.join(", ")
            ))),
        }
    }

    fn preamble(self) -> &'static str {
        match self {
            Self::Classic => CLASSIC_PREAMBLE,
            Self::Modern => MODERN_PREAMBLE,
        }
    }
}

const CLASSIC_PREAMBLE: &str = r"\documentclass[11pt,letterpaper]{article}
\usepackage[margin=0.75in]{geometry}
\usepackage[hidelinks]{hyperref}
\usepackage{enumitem}
\usepackage{titlesec}
\setlist[itemize]{leftmargin=*,noitemsep,topsep=2pt}
\titleformat{\section}{\large\bfseries}{}{0em}{}[\titlerule]
\pagestyle{empty}
";

const MODERN_PREAMBLE: &str = r"\documentclass[10pt,a4paper]{article}
\usepackage[margin=0.6in]{geometry}
\usepackage[hidelinks]{hyperref}
\usepackage{enumitem}
\usepackage{titlesec}
\usepackage{xcolor}
\usepackage[sfdefault]{roboto}
\definecolor{accent}{HTML}{1F4E79}
\setlist[itemize]{leftmargin=*,noitemsep,topsep=1pt}
\titleformat{\section}{\color{accent}\large\scshape}{}{0em}{}[\color{accent}\titlerule]
\pagestyle{empty}
";

/// Escapes the characters LaTeX treats specially.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

/// URL text for `\href`/`\url`. Only braces and whitespace, which would end
/// or split the argument, are removed.
fn link_target(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, '{' | '}') && !c.is_whitespace())
        .collect()
}

/// Renders the request into a complete LaTeX document.
pub fn render_latex(request: &GenerationRequest) -> Result<String, AppError> {
    let template = ResumeTemplate::from_name(&request.template_name)?;
    let mut doc = String::from(template.preamble());
    doc.push_str("\n\\begin{document}\n\n");

    write_body(&mut doc, &request.resume_data)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to render resume: {e}")))?;

    doc.push_str("\\end{document}\n");
    Ok(doc)
}

fn write_body(doc: &mut String, data: &ResumeData) -> std::fmt::Result {
    let info = &data.personal_info;
    let e = escape_latex;

    let mut contact = vec![e(&info.email), e(&info.phone), e(&info.address)];
    // Link targets stay raw; hyperref copes with `_`, `%` and `#` there.
    if let Some(github) = &info.github_handle {
        contact.push(format!(
            r"\href{{https://github.com/{}}}{{github.com/{}}}",
            link_target(github),
            e(github)
        ));
    }
    if let Some(linkedin) = &info.linkedin_handle {
        contact.push(format!(
            r"\href{{https://www.linkedin.com/in/{}}}{{linkedin.com/in/{}}}",
            link_target(linkedin),
            e(linkedin)
        ));
    }
    if let Some(url) = &info.portfolio_url {
        contact.push(format!(r"\url{{{}}}", link_target(url)));
    }

    writeln!(doc, "\\begin{{center}}")?;
    writeln!(doc, "  {{\\LARGE\\bfseries {}}}\\\\[2pt]", e(&info.full_name))?;
    writeln!(doc, "  {}", contact.join(r" $\cdot$ "))?;
    if let Some(extra) = &info.extra_info {
        writeln!(doc, "  \\\\ {}", e(extra))?;
    }
    writeln!(doc, "\\end{{center}}\n")?;

    if !data.education.is_empty() {
        writeln!(doc, "\\section*{{Education}}")?;
        for edu in &data.education {
            writeln!(
                doc,
                "\\textbf{{{}}} \\hfill {} -- {}\\\\",
                e(&edu.institution),
                e(&edu.start_year),
                e(&edu.end_year)
            )?;
            match &edu.gpa {
                Some(gpa) => writeln!(doc, "{} \\hfill GPA: {}\n", e(&edu.degree), e(gpa))?,
                None => writeln!(doc, "{}\n", e(&edu.degree))?,
            }
        }
    }

    if !data.work_experience.is_empty() {
        writeln!(doc, "\\section*{{Experience}}")?;
        for job in &data.work_experience {
            writeln!(
                doc,
                "\\textbf{{{}}} \\hfill {} -- {}\\\\",
                e(&job.job_title),
                e(&job.start_date),
                e(&job.end_date)
            )?;
            writeln!(doc, "\\textit{{{}}} \\hfill {}", e(&job.company_name), e(&job.location))?;
            write_points(doc, &job.description_points)?;
        }
    }

    if !data.projects.is_empty() {
        writeln!(doc, "\\section*{{Projects}}")?;
        for project in &data.projects {
            writeln!(
                doc,
                "\\textbf{{{}}} $|$ \\textit{{{}}} \\hfill {} -- {}",
                e(&project.project_name),
                e(&project.tech_stack),
                e(&project.start_date),
                e(&project.end_date)
            )?;
            write_points(doc, &project.description_points)?;
        }
    }

    if !data.skills.is_empty() {
        writeln!(doc, "\\section*{{Skills}}")?;
        let lines: Vec<String> = data
            .skills
            .iter()
            .map(|s| format!("\\textbf{{{}:}} {}", e(&s.name), e(&s.value)))
            .collect();
        writeln!(doc, "{}\n", lines.join("\\\\\n"))?;
    }

    if !data.achievements.is_empty() {
        writeln!(doc, "\\section*{{Achievements}}")?;
        let points: Vec<String> = data.achievements.iter().map(|a| a.description.clone()).collect();
        write_points(doc, &points)?;
    }

    if !data.certifications.is_empty() {
        writeln!(doc, "\\section*{{Certifications}}")?;
        let points: Vec<String> = data
            .certifications
            .iter()
            .map(|c| format!("{} -- {} ({})", c.name, c.issuer, c.date))
            .collect();
        write_points(doc, &points)?;
    }

    Ok(())
}

/// Blank points are dropped; an empty list writes only a blank line.
fn write_points(doc: &mut String, points: &[String]) -> std::fmt::Result {
    let points: Vec<&String> = points.iter().filter(|p| !p.trim().is_empty()).collect();
    if points.is_empty() {
        return writeln!(doc);
    }
    writeln!(doc, "\\begin{{itemize}}")?;
    for point in points {
        writeln!(doc, "  \\item {}", escape_latex(point.trim()))?;
    }
    writeln!(doc, "\\end{{itemize}}\n")
}
