//! String template rendering utilities.

pub struct TemplateVars;

impl TemplateVars {
    pub const JOB_NAME: &'static str = "jobName";
    pub const NUM_RUNS: &'static str = "numRuns";
    pub const TIME: &'static str = "time";
    pub const MEM: &'static str = "mem";
    pub const BUILD_DIR: &'static str = "buildDir";
    pub const CLASS_NAME: &'static str = "className";
    pub const HEADER_FILE: &'static str = "headerFile";
    pub const INCLUDE_GUARD: &'static str = "includeGuard";
}

pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}

pub fn is_present(template: &str, key: &str) -> bool {
    let placeholder = format!("{{{{{}}}}}", key);
    template.contains(&placeholder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_replaces_all_occurrences() {
        let out = render("{{jobName}}: {{jobName}}.out", &[(TemplateVars::JOB_NAME, "run1")]);
        assert_eq!(out, "run1: run1.out");
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        let out = render("{{time}} {{unknown}}", &[(TemplateVars::TIME, "10:00:00")]);
        assert_eq!(out, "10:00:00 {{unknown}}");
    }

    #[test]
    fn is_present_detects_placeholder() {
        assert!(is_present("--mem={{mem}}", TemplateVars::MEM));
        assert!(!is_present("--mem=4000", TemplateVars::MEM));
    }
}
