//! pk-project: canonical input file format and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_input};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Input validation failed:\n{}", render_violations(.0))]
    Validation(Vec<ValidationError>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn render_violations(violations: &[ValidationError]) -> String {
    violations
        .iter()
        .enumerate()
        .map(|(i, v)| format!("  {}. {v}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Load an input file and validate it before handing it to the core.
///
/// Validation reports every violation found, not just the first.
pub fn load_yaml(path: &std::path::Path) -> ProjectResult<Input> {
    let content = std::fs::read_to_string(path)?;
    let input: Input = serde_yaml::from_str(&content)?;
    let violations = validate_input(&input);
    if !violations.is_empty() {
        return Err(ProjectError::Validation(violations));
    }
    Ok(input)
}

pub fn save_yaml(path: &std::path::Path, input: &Input) -> ProjectResult<()> {
    let violations = validate_input(input);
    if !violations.is_empty() {
        return Err(ProjectError::Validation(violations));
    }
    let content = serde_yaml::to_string(input)?;
    std::fs::write(path, content)?;
    Ok(())
}
