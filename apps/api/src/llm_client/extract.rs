//! Pulls machine-readable data out of free-form model responses.
//!
//! Models are told to answer with bare JSON but routinely wrap it in a code
//! fence or surround it with prose. `extract_json` finds the span; callers
//! parse it with `parse_json`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::errors::AppError;

/// Fenced block with an optional `json` tag wrapping an object or array.
static FENCED_JSON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"```(?:json)?\s*(\{[\s\S]*\}|\[[\s\S]*\])\s*```").expect("valid fenced regex")
});

/// Greedy span from the first opening bracket to the last closing one.
static BARE_JSON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[\s\S]*\}|\[[\s\S]*\]").expect("valid bare regex"));

static DIGIT_PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d)%").expect("valid percent regex"));

/// How much of an unusable response is echoed back in the error.
const ERROR_EXCERPT_CHARS: usize = 200;

/// Opening brackets tried by the balanced scan. Each try is linear in the
/// remaining text, so this bounds the scan to linear time.
const MAX_BALANCED_STARTS: usize = 64;

/// Returns the first JSON object or array embedded in `text`.
///
/// Order of preference: a fenced block, then the greedy bare span, then the
/// first balanced bracket span that parses. Every returned span is valid JSON.
pub fn extract_json(text: &str) -> Result<&str, AppError> {
    if let Some(span) = FENCED_JSON
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|s| is_json(s))
    {
        return Ok(span);
    }

    if let Some(span) = BARE_JSON
        .find(text)
        .map(|m| m.as_str())
        .filter(|s| is_json(s))
    {
        return Ok(span);
    }

    first_balanced_span(text).ok_or_else(|| AppError::JsonExtraction(excerpt(text)))
}

/// Extracts and parses the embedded JSON value.
pub fn parse_json(text: &str) -> Result<Value, AppError> {
    let span = extract_json(text)?;
    serde_json::from_str(span).map_err(|e| AppError::JsonExtraction(format!("{e}: {}", excerpt(span))))
}

fn is_json(candidate: &str) -> bool {
    serde_json::from_str::<Value>(candidate).is_ok()
}

/// Scans for bracket spans that balance (ignoring brackets inside string
/// literals) and returns the first one that parses. Only the first
/// [`MAX_BALANCED_STARTS`] opening brackets are considered.
fn first_balanced_span(text: &str) -> Option<&str> {
    text.char_indices()
        .filter(|(_, c)| matches!(c, '{' | '['))
        .take(MAX_BALANCED_STARTS)
        .filter_map(|(start, _)| balanced_end(text, start).map(|end| &text[start..end]))
        .find(|span| is_json(span))
}

/// Byte offset just past the bracket that closes the one at `start`.
fn balanced_end(text: &str, start: usize) -> Option<usize> {
    let mut stack: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => stack.push('}'),
            '[' => stack.push(']'),
            '}' | ']' => {
                if stack.pop() != Some(c) {
                    return None;
                }
                if stack.is_empty() {
                    return Some(start + offset + c.len_utf8());
                }
            }
            _ => {}
        }
    }
    None
}

fn excerpt(text: &str) -> String {
    let mut out: String = text.chars().take(ERROR_EXCERPT_CHARS).collect();
    if text.chars().count() > ERROR_EXCERPT_CHARS {
        out.push('…');
    }
    out
}

/// Tidies the LaTeX produced by the final tailoring step.
///
/// Drops any preamble chatter before `\documentclass`, normalizes typographic
/// punctuation, and escapes the `%` and `&` characters models tend to leave raw.
pub fn clean_final_latex(text: &str) -> String {
    let Some(start) = text.find(r"\documentclass") else {
        return text.trim().to_string();
    };

    let mut clean = text[start..]
        .replace('\u{2019}', "'")
        .replace(['\u{2013}', '\u{2014}', '\u{FFFD}'], "--");

    clean = DIGIT_PERCENT.replace_all(&clean, r"${1}\%").into_owned();
    clean = escape_inner_ampersands(&clean);
    clean = clean.replace("{{", "{").replace("}}", "}");

    clean.trim().to_string()
}

/// Escapes `&` only when it sits between two word characters (`R&D`), leaving
/// table column separators (` & `) alone.
fn escape_inner_ampersands(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let is_word = |c: Option<&char>| c.is_some_and(|c| c.is_alphanumeric() || *c == '_');

    let mut out = String::with_capacity(text.len());
    for (i, c) in chars.iter().enumerate() {
        let prev = i.checked_sub(1).and_then(|p| chars.get(p));
        if *c == '&' && is_word(prev) && is_word(chars.get(i + 1)) {
            out.push('\\');
        }
        out.push(*c);
    }
    out
}
