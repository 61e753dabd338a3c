use crate::ErrorOutcome;

/// Trims the raw input and rejects it when nothing remains.
///
/// No URL syntax check happens here; malformed addresses are left for the
/// service to reject.
pub fn validate_input(raw: &str) -> Result<String, ErrorOutcome> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ErrorOutcome::validation());
    }
    Ok(trimmed.to_owned())
}
