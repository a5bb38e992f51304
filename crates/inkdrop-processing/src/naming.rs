//! Stored file naming.
//!
//! Names are `<epoch-millis>_<32 hex chars><extension>`. Nothing from the
//! client's filename survives except the extension.

use chrono::Utc;
use uuid::Uuid;

/// Extension of `filename` from its last '.' inclusive, or "" when there is none.
pub fn file_extension(filename: &str) -> &str {
    filename.rfind('.').map_or("", |idx| &filename[idx..])
}

/// Generate a unique stored filename that keeps `extension` as-is.
pub fn generate_unique_filename(extension: &str) -> String {
    format!(
        "{}_{}{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple(),
        extension
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn extension_is_taken_from_last_dot() {
        assert_eq!(file_extension("photo.png"), ".png");
        assert_eq!(file_extension("archive.tar.GZ"), ".GZ");
        assert_eq!(file_extension("trailing."), ".");
        assert_eq!(file_extension("noextension"), "");
        assert_eq!(file_extension(""), "");
    }

    #[test]
    fn generated_name_has_expected_shape() {
        let name = generate_unique_filename(".png");
        let (timestamp, rest) = name.split_once('_').unwrap();
        assert!(timestamp.parse::<i64>().unwrap() > 0);
        let (id, ext) = rest.split_at(32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(ext, ".png");
    }

    #[test]
    fn generated_name_preserves_extension_case_and_allows_empty() {
        assert!(generate_unique_filename(".JPG").ends_with(".JPG"));
        let bare = generate_unique_filename("");
        assert_eq!(bare.split_once('_').unwrap().1.len(), 32);
    }

    #[test]
    fn generated_names_do_not_repeat() {
        let names: HashSet<String> = (0..1000).map(|_| generate_unique_filename(".gif")).collect();
        assert_eq!(names.len(), 1000);
    }
}
