//! Config-template parameter overrides.
//!
//! Takes a JSON-like template document and a set of command-line overrides
//! (`key=value`, optionally qualified as `section:key=value`) and rewrites
//! the value paired with each requested key. Only the matched value span is
//! spliced; every other byte of the template is preserved. Exactly one
//! substitution happens per requested key, and a key that never matches is
//! reported rather than treated as an error.

use crate::error::{Error, Result};
use crate::log_status;
use crate::utils::io;
use regex::Regex;
use serde::Serialize;
use std::path::Path;

/// A single requested override, parsed from `key=value` or `section:key=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideSpec {
    pub section: Option<String>,
    pub key: String,
    pub value: String,
}

impl OverrideSpec {
    pub fn parse(raw: &str) -> Result<Self> {
        let (name, value) = raw.split_once('=').ok_or_else(|| {
            Error::validation_invalid_argument(
                "override",
                format!(
                    "Unrecognised parameter specification '{}', expecting format 'param=val'",
                    raw
                ),
                Some(raw.to_string()),
            )
        })?;

        let (section, key) = match name.split_once(':') {
            Some((sct, prm)) => (Some(sct.to_string()), prm.to_string()),
            None => (None, name.to_string()),
        };

        if key.is_empty() || section.as_deref().is_some_and(str::is_empty) {
            return Err(Error::validation_invalid_argument(
                "override",
                format!("Parameter name missing in specification '{}'", raw),
                Some(raw.to_string()),
            ));
        }

        Ok(Self {
            section,
            key,
            value: value.to_string(),
        })
    }

    /// The key as the user wrote it, including the section qualifier.
    pub fn qualified(&self) -> String {
        match &self.section {
            Some(sct) => format!("{}:{}", sct, self.key),
            None => self.key.clone(),
        }
    }
}

/// Per-key report of what `apply_all` did.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideOutcome {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub value: String,
    pub applied: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigGenResult {
    pub template_path: String,
    pub output_path: String,
    pub overrides: Vec<OverrideOutcome>,
}

/// Apply every override to the template text, in order.
///
/// Later overrides see the text produced by earlier ones.
pub fn apply_all(template: &str, specs: &[OverrideSpec]) -> (String, Vec<OverrideOutcome>) {
    let mut content = template.to_string();
    let mut outcomes = Vec::with_capacity(specs.len());

    for spec in specs {
        let applied = apply_one(&mut content, spec);
        outcomes.push(OverrideOutcome {
            key: spec.key.clone(),
            section: spec.section.clone(),
            value: spec.value.clone(),
            applied,
        });
    }

    (content, outcomes)
}

fn apply_one(content: &mut String, spec: &OverrideSpec) -> bool {
    let (lo, hi) = match &spec.section {
        Some(section) => match section_body_span(content, section) {
            Some(span) => span,
            None => return false,
        },
        None => (0, content.len()),
    };

    match value_span(&content[lo..hi], &spec.key) {
        Some((start, end)) => {
            content.replace_range(lo + start..lo + end, &spec.value);
            true
        }
        None => false,
    }
}

/// Locate the body of the first section with the given name: the text
/// between its opening brace and the matching closing brace. Depth is
/// tracked through nested objects, and braces inside string literals are
/// ignored.
fn section_body_span(content: &str, section: &str) -> Option<(usize, usize)> {
    let pattern = format!(r#""{}"\s*:\s*\{{"#, regex::escape(section));
    let re = Regex::new(&pattern).ok()?;
    let body_start = re.find(content)?.end();

    let mut depth = 1usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in content[body_start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((body_start, body_start + i));
                }
            }
            _ => {}
        }
    }

    None
}

/// Span of the value paired with the first occurrence of `key`.
///
/// Matches `"key": "value"` and `"key": value`, reporting only the value
/// characters so quoting is preserved. Values are drawn from a conservative
/// character class; anything else (objects, arrays, strings with spaces) is
/// not a match.
fn value_span(content: &str, key: &str) -> Option<(usize, usize)> {
    let pattern = format!(r#""{}"\s*:\s*"?([A-Za-z0-9./\-]*)"#, regex::escape(key));
    let re = Regex::new(&pattern).ok()?;
    let m = re.captures(content)?.get(1)?;
    Some((m.start(), m.end()))
}

/// Generate a config file from a template plus command-line overrides.
pub fn run(template: &Path, output: &Path, raw_specs: &[String]) -> Result<ConfigGenResult> {
    let specs = raw_specs
        .iter()
        .map(|raw| OverrideSpec::parse(raw))
        .collect::<Result<Vec<_>>>()?;

    io::ensure_input_file(template)?;
    io::ensure_absent(output)?;

    let content = io::read_file(template, "read template")?;
    let (mut rendered, outcomes) = apply_all(&content, &specs);

    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    io::write_new(output, &rendered, "write config")?;

    for (spec, outcome) in specs.iter().zip(&outcomes) {
        if !outcome.applied {
            log_status!(
                "config-gen",
                "Key '{}' not found in template; output unchanged for it",
                spec.qualified()
            );
        }
    }
    log_status!("config-gen", "Wrote {}", output.display());

    Ok(ConfigGenResult {
        template_path: template.display().to_string(),
        output_path: output.display().to_string(),
        overrides: outcomes,
    })
}
