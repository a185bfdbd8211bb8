//! Upload validation — a pure predicate over size and declared media type,
//! run before anything touches the database.

use crate::errors::AppError;

/// Upload size ceiling: 5 MiB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Declared media types accepted for resume uploads: plain text, PDF,
/// legacy Word, and OOXML Word.
pub const ALLOWED_MEDIA_TYPES: [&str; 4] = [
    "text/plain",
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Accepts or rejects an upload from its metadata alone.
///
/// The media type check trusts the client's declaration; actual file
/// signatures are not inspected.
/// TODO: sniff magic bytes instead of trusting the declared Content-Type.
pub fn validate_upload(size: usize, declared_media_type: &str) -> Result<(), AppError> {
    if size > MAX_UPLOAD_BYTES {
        return Err(AppError::PayloadTooLarge);
    }

    let media_type = essence(declared_media_type);
    if !ALLOWED_MEDIA_TYPES.contains(&media_type.as_str()) {
        return Err(AppError::UnsupportedMediaType(media_type));
    }

    Ok(())
}

/// Strips parameters ("text/plain; charset=utf-8" -> "text/plain") and
/// lowercases, per RFC 2045 case-insensitivity.
fn essence(media_type: &str) -> String {
    media_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_pdf_under_ceiling() {
        assert!(validate_upload(2 * 1024 * 1024, "application/pdf").is_ok());
    }

    #[test]
    fn test_accepts_exactly_at_ceiling() {
        assert!(validate_upload(MAX_UPLOAD_BYTES, "text/plain").is_ok());
    }

    #[test]
    fn test_rejects_one_byte_over_ceiling() {
        assert!(matches!(
            validate_upload(MAX_UPLOAD_BYTES + 1, "application/pdf"),
            Err(AppError::PayloadTooLarge)
        ));
    }

    #[test]
    fn test_size_check_runs_before_type_check() {
        // An oversized file with a bogus type reports 413, not 415.
        assert!(matches!(
            validate_upload(MAX_UPLOAD_BYTES + 1, "image/png"),
            Err(AppError::PayloadTooLarge)
        ));
    }

    #[test]
    fn test_rejects_unlisted_type() {
        assert!(matches!(
            validate_upload(100, "image/png"),
            Err(AppError::UnsupportedMediaType(_))
        ));
    }

    #[test]
    fn test_ignores_charset_parameter() {
        assert!(validate_upload(100, "text/plain; charset=utf-8").is_ok());
    }

    #[test]
    fn test_type_match_is_case_insensitive() {
        assert!(validate_upload(100, "Application/PDF").is_ok());
    }

    #[test]
    fn test_accepts_docx() {
        assert!(validate_upload(
            100,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        )
        .is_ok());
    }
}
