//! Resume wire schema for the generation endpoint.
//!
//! Fields serialize in camelCase. Input also accepts the snake_case spelling
//! that web clients send, so both `fullName` and `full_name` deserialize.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(alias = "full_name")]
    pub full_name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    #[serde(alias = "github_handle", default, skip_serializing_if = "Option::is_none")]
    pub github_handle: Option<String>,
    #[serde(alias = "linkedin_handle", default, skip_serializing_if = "Option::is_none")]
    pub linkedin_handle: Option<String>,
    #[serde(alias = "portfolio_url", default, skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    #[serde(alias = "extra_info", default, skip_serializing_if = "Option::is_none")]
    pub extra_info: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    #[serde(alias = "start_year")]
    pub start_year: String,
    #[serde(alias = "end_year")]
    pub end_year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    #[serde(alias = "job_title")]
    pub job_title: String,
    #[serde(alias = "company_name")]
    pub company_name: String,
    pub location: String,
    #[serde(alias = "start_date")]
    pub start_date: String,
    #[serde(alias = "end_date")]
    pub end_date: String,
    #[serde(alias = "description_points")]
    pub description_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(alias = "project_name")]
    pub project_name: String,
    #[serde(alias = "start_date")]
    pub start_date: String,
    #[serde(alias = "end_date")]
    pub end_date: String,
    #[serde(alias = "tech_stack")]
    pub tech_stack: String,
    #[serde(alias = "description_points")]
    pub description_points: Vec<String>,
}

/// A labelled skill line, e.g. `name: "Languages", value: "Rust, Go"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementItem {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationItem {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    #[serde(alias = "personal_info")]
    pub personal_info: PersonalInfo,
    pub education: Vec<Education>,
    #[serde(alias = "work_experience")]
    pub work_experience: Vec<WorkExperience>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillItem>,
    pub achievements: Vec<AchievementItem>,
    pub certifications: Vec<CertificationItem>,
}

/// Request body for `POST /api/v1/generate` and `catalyst render`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(alias = "template_name")]
    pub template_name: String,
    #[serde(alias = "resume_data")]
    pub resume_data: ResumeData,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::{json, Value};

    /// A complete request in the snake_case spelling web clients send.
    pub fn snake_case_request() -> Value {
        json!({
            "template_name": "classic",
            "resume_data": {
                "personal_info": {
                    "full_name": "Jane Doe",
                    "address": "Berlin, DE",
                    "email": "jane@example.com",
                    "phone": "+49 30 1234567",
                    "github_handle": "janedoe"
                },
                "education": [{
                    "degree": "B.Sc. Computer Science",
                    "institution": "TU Berlin",
                    "start_year": "2014",
                    "end_year": "2018",
                    "gpa": "1.3"
                }],
                "work_experience": [{
                    "job_title": "Backend Engineer",
                    "company_name": "Acme & Sons",
                    "location": "Remote",
                    "start_date": "2019",
                    "end_date": "Present",
                    "description_points": ["Cut p99 latency by 40%", "Owned the billing_service"]
                }],
                "projects": [{
                    "project_name": "tinykv",
                    "start_date": "2021",
                    "end_date": "2022",
                    "tech_stack": "Rust, Tokio",
                    "description_points": ["Raft-based KV store"]
                }],
                "skills": [{"name": "Languages", "value": "Rust, Go, SQL"}],
                "achievements": [{"description": "Speaker at RustConf"}],
                "certifications": [{"name": "CKA", "issuer": "CNCF", "date": "2023"}]
            }
        })
    }
}
