//! Career Catalyst: prompt-chained resume tailoring, evaluation, cover
//! letters and interview questions on top of the Gemini API.

pub mod config;
pub mod errors;
pub mod input;
pub mod llm_client;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod routes;
pub mod state;
pub mod templates;
