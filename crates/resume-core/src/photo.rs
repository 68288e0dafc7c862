//! Photo asset validation.
//!
//! Photos are stored inline as `data:` URIs. Oversized or non-image
//! values are rejected at the point of selection so the document is never
//! left holding an asset the renderers cannot show.

use thiserror::Error;

/// Maximum decoded photo size: 2 MiB, matching the upload limit shown to
/// the user.
pub const MAX_PHOTO_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhotoError {
    #[error("Photo must be less than 2MB")]
    TooLarge,

    #[error("Photo must be an image data URI")]
    NotAnImage,
}

/// Checks a candidate photo value. An empty string is valid and clears
/// the photo.
pub fn validate_photo(data_uri: &str) -> Result<(), PhotoError> {
    if data_uri.is_empty() {
        return Ok(());
    }
    let Some(rest) = data_uri.strip_prefix("data:image/") else {
        return Err(PhotoError::NotAnImage);
    };
    let Some((_, payload)) = rest.split_once(',') else {
        return Err(PhotoError::NotAnImage);
    };
    // Base64 expands by 4/3; estimating the decoded size from the
    // payload length avoids decoding the whole image.
    let decoded_len = payload.len() / 4 * 3;
    if decoded_len > MAX_PHOTO_BYTES {
        return Err(PhotoError::TooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_clears_photo() {
        assert_eq!(validate_photo(""), Ok(()));
    }

    #[test]
    fn test_small_image_accepted() {
        assert_eq!(validate_photo("data:image/png;base64,aGVsbG8="), Ok(()));
    }

    #[test]
    fn test_non_image_rejected() {
        assert_eq!(
            validate_photo("https://example.com/photo.png"),
            Err(PhotoError::NotAnImage)
        );
        assert_eq!(
            validate_photo("data:text/plain;base64,aGVsbG8="),
            Err(PhotoError::NotAnImage)
        );
        assert_eq!(
            validate_photo("data:image/png;base64"),
            Err(PhotoError::NotAnImage)
        );
    }

    #[test]
    fn test_oversized_rejected() {
        let payload = "A".repeat(MAX_PHOTO_BYTES * 4 / 3 + 8);
        let uri = format!("data:image/jpeg;base64,{payload}");
        assert_eq!(validate_photo(&uri), Err(PhotoError::TooLarge));
    }
}
