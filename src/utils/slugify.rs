//! Filename slug generation for chart titles.

/// Fold characters that are awkward in filenames into dashes.
///
/// Space, comma and bracket characters become `-`; runs of dashes collapse
/// to a single dash and leading/trailing dashes are stripped. All other
/// characters pass through unchanged, so case and dots are preserved.
pub fn slugify_title(title: &str) -> String {
    let mut out = String::new();
    let mut prev_was_dash = false;

    for ch in title.chars() {
        let mapped = match ch {
            ' ' | ',' | '(' | ')' | '[' | ']' => '-',
            _ => ch,
        };

        if mapped == '-' {
            if out.is_empty() || prev_was_dash {
                continue;
            }
            out.push('-');
            prev_was_dash = true;
        } else {
            out.push(mapped);
            prev_was_dash = false;
        }
    }

    while out.ends_with('-') {
        out.pop();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_spaces_and_commas() {
        assert_eq!(slugify_title("Constancy 0.9, size 50"), "Constancy-0.9-size-50");
    }

    #[test]
    fn collapses_dash_runs_from_brackets() {
        assert_eq!(slugify_title("run (a) [b]"), "run-a-b");
    }

    #[test]
    fn strips_leading_and_trailing_dashes() {
        assert_eq!(slugify_title(" padded "), "padded");
    }

    #[test]
    fn preserves_case_and_dots() {
        assert_eq!(slugify_title("Fixation v2.1"), "Fixation-v2.1");
    }
}
