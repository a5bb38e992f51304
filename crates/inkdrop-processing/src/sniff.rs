//! Image signature detection from leading bytes.

/// Number of leading bytes needed to recognise every supported signature
pub const SNIFF_LEN: usize = 12;

/// Detect the image MIME type from the first bytes of a file.
pub fn detect_image_type(head: &[u8]) -> Option<&'static str> {
    match head {
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Some("image/png"),
        [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => Some("image/gif"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("image/webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_supported_formats() {
        assert_eq!(detect_image_type(&[0xFF, 0xD8, 0xFF, 0xE0]), Some("image/jpeg"));
        assert_eq!(
            detect_image_type(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
            Some("image/png")
        );
        assert_eq!(detect_image_type(b"GIF89a\x01\x00"), Some("image/gif"));
        assert_eq!(detect_image_type(b"GIF87a"), Some("image/gif"));
        assert_eq!(detect_image_type(b"RIFF\x24\x00\x00\x00WEBPVP8 "), Some("image/webp"));
    }

    #[test]
    fn rejects_unknown_and_truncated_input() {
        assert_eq!(detect_image_type(b""), None);
        assert_eq!(detect_image_type(b"BM\x00\x00"), None);
        assert_eq!(detect_image_type(&[0x89, 0x50, 0x4E]), None);
        assert_eq!(detect_image_type(b"RIFF\x24\x00\x00\x00WAVE"), None);
    }
}
