use crate::error::GenerateError;
use crate::result::CommonResult;

/// Strip a raw component name down to its ASCII letters and digits.
///
/// The result is both the generated identifier and the file stem.
pub fn sanitize_name(raw: &str) -> CommonResult<String> {
    if raw.trim().is_empty() {
        return Err(GenerateError::validation("Component name is required"));
    }

    let clean: String = raw.chars().filter(|c| c.is_ascii_alphanumeric()).collect();

    if clean.is_empty() {
        return Err(GenerateError::validation(
            "Component name must contain at least one alphanumeric character",
        ));
    }

    Ok(clean)
}
