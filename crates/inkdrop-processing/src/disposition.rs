//! Content-Disposition filename extraction.

/// Filename used when the header carries no usable `filename` attribute
pub const UNKNOWN_FILE_NAME: &str = "unknown";

/// Extract the submitted filename from a part's Content-Disposition header.
///
/// The header is split on ';' and the first attribute starting with `filename`
/// wins (so `filename*=` is taken as-is when it comes first). The text after
/// '=' is trimmed and stripped of double quotes. A missing header, a matching
/// attribute without '=', or an empty value all yield [`UNKNOWN_FILE_NAME`].
pub fn submitted_file_name(content_disposition: Option<&str>) -> String {
    content_disposition
        .and_then(|header| {
            header
                .split(';')
                .map(str::trim)
                .find(|attribute| attribute.starts_with("filename"))
        })
        .and_then(|attribute| attribute.split_once('='))
        .map(|(_, value)| value.trim().replace('"', ""))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_FILE_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_quoted_filename() {
        assert_eq!(
            submitted_file_name(Some(r#"form-data; name="image"; filename="cat.png""#)),
            "cat.png"
        );
    }

    #[test]
    fn extracts_unquoted_filename_with_spaces() {
        assert_eq!(
            submitted_file_name(Some("form-data; name=image; filename =  my photo.jpg ")),
            "my photo.jpg"
        );
    }

    #[test]
    fn first_filename_attribute_wins() {
        assert_eq!(
            submitted_file_name(Some(
                r#"form-data; name="image"; filename*=UTF-8''a.png; filename="b.png""#
            )),
            "UTF-8''a.png"
        );
    }

    #[test]
    fn missing_or_malformed_header_falls_back() {
        assert_eq!(submitted_file_name(None), "unknown");
        assert_eq!(submitted_file_name(Some(r#"form-data; name="image""#)), "unknown");
        assert_eq!(submitted_file_name(Some("form-data; filename")), "unknown");
        assert_eq!(submitted_file_name(Some(r#"form-data; filename="""#)), "unknown");
        assert_eq!(submitted_file_name(Some("")), "unknown");
    }

    #[test]
    fn name_attribute_is_not_mistaken_for_filename() {
        assert_eq!(
            submitted_file_name(Some(r#"form-data; name="filename.png""#)),
            "unknown"
        );
    }
}
