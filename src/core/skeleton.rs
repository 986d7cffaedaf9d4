//! C++ class skeleton generation.
//!
//! Produces a matched `.h`/`.cpp` pair for a new simulator class. Both
//! files must be absent before anything is written.

use crate::error::{Error, Result};
use crate::log_status;
use crate::utils::io;
use crate::utils::template::{self, TemplateVars};
use serde::Serialize;
use std::path::Path;

const CPP_TEMPLATE: &str = "/**
 * @file
 *
 * Implementation of the {{className}} class
 */

#include \"{{headerFile}}\"

{{className}}::{{className}}() {
}
";

const HEADER_TEMPLATE: &str = "/**
 * @file
 *
 * Declaration of the {{className}} class
 */

#ifndef {{includeGuard}}
#define {{includeGuard}}

/**
 * The {{className}} class ...
 */
class {{className}} {

public:
    {{className}}();
    ~{{className}}() {}
};

#endif /* {{includeGuard}} */
";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSkeletonResult {
    pub class_name: String,
    pub header_path: String,
    pub source_path: String,
}

/// Reject anything that is not a plain C++ identifier.
pub fn validate_class_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if !valid {
        return Err(Error::validation_invalid_argument(
            "classname",
            "Class name must be a valid C++ identifier",
            Some(name.to_string()),
        ));
    }
    Ok(())
}

/// Include guard for a header filename: uppercased, dots to underscores,
/// leading underscore (`Flower.h` -> `_FLOWER_H`).
fn include_guard(header_filename: &str) -> String {
    format!("_{}", header_filename.to_uppercase().replace('.', "_"))
}

pub fn header_source(class_name: &str) -> String {
    let header_file = format!("{}.h", class_name);
    let guard = include_guard(&header_file);
    template::render(
        HEADER_TEMPLATE,
        &[
            (TemplateVars::CLASS_NAME, class_name),
            (TemplateVars::INCLUDE_GUARD, guard.as_str()),
        ],
    )
}

pub fn impl_source(class_name: &str) -> String {
    let header_file = format!("{}.h", class_name);
    template::render(
        CPP_TEMPLATE,
        &[
            (TemplateVars::CLASS_NAME, class_name),
            (TemplateVars::HEADER_FILE, header_file.as_str()),
        ],
    )
}

/// Write `<ClassName>.cpp` and `<ClassName>.h` into `dir`.
///
/// Fails before writing anything if either file already exists.
pub fn run(dir: &Path, class_name: &str) -> Result<ClassSkeletonResult> {
    validate_class_name(class_name)?;

    let header_path = dir.join(format!("{}.h", class_name));
    let source_path = dir.join(format!("{}.cpp", class_name));

    io::ensure_absent(&source_path)?;
    io::ensure_absent(&header_path)?;

    io::write_new(&source_path, &impl_source(class_name), "write class source")?;
    io::write_new(&header_path, &header_source(class_name), "write class header")?;

    log_status!(
        "new-class",
        "Wrote {} and {}",
        source_path.display(),
        header_path.display()
    );

    Ok(ClassSkeletonResult {
        class_name: class_name.to_string(),
        header_path: header_path.display().to_string(),
        source_path: source_path.display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn include_guard_uppercases_and_replaces_dots() {
        assert_eq!(include_guard("FloweringPlant.h"), "_FLOWERINGPLANT_H");
    }

    #[test]
    fn header_contains_guard_and_class() {
        let header = header_source("Pollinator");
        assert!(header.contains("#ifndef _POLLINATOR_H"));
        assert!(header.contains("#define _POLLINATOR_H"));
        assert!(header.contains("class Pollinator {"));
        assert!(header.contains("~Pollinator() {}"));
        assert!(header.contains("#endif /* _POLLINATOR_H */"));
    }

    #[test]
    fn impl_includes_header_and_defines_constructor() {
        let source = impl_source("Pollinator");
        assert!(source.contains("#include \"Pollinator.h\""));
        assert!(source.contains("Pollinator::Pollinator() {"));
    }

    #[test]
    fn validate_rejects_non_identifiers() {
        assert!(validate_class_name("Flower").is_ok());
        assert!(validate_class_name("_Private2").is_ok());
        assert!(validate_class_name("2Fast").is_err());
        assert!(validate_class_name("Bad-Name").is_err());
        assert!(validate_class_name("").is_err());
    }

    #[test]
    fn run_writes_both_files() {
        let dir = tempdir().unwrap();
        let result = run(dir.path(), "HoneyBee").unwrap();
        assert!(dir.path().join("HoneyBee.h").is_file());
        assert!(dir.path().join("HoneyBee.cpp").is_file());
        assert_eq!(result.class_name, "HoneyBee");
    }

    #[test]
    fn run_aborts_when_either_file_exists() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("HoneyBee.h"), "existing").unwrap();

        let err = run(dir.path(), "HoneyBee").unwrap_err();
        assert_eq!(err.code.as_str(), "output.file_exists");
        // nothing was created alongside the pre-existing file
        assert!(!dir.path().join("HoneyBee.cpp").exists());
    }
}
