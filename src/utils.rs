/// Convert a record link to a filesystem-safe filename for its download
pub fn document_filename(link: &str) -> String {
    let trimmed = link
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    let name = trimmed.replace(['/', ':', '?', '&', '=', '#', '%'], "_");

    // Keep filenames within a sane length
    name.chars().take(120).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_filename_flattens_the_link() {
        assert_eq!(
            document_filename("https://www.rma.test/media/Handbook/guide.ashx?v=1"),
            "www.rma.test_media_Handbook_guide.ashx_v_1"
        );
    }

    #[test]
    fn test_document_filename_is_length_bounded() {
        let long = format!("https://catalog.test/{}", "a/".repeat(200));
        assert!(document_filename(&long).chars().count() <= 120);
    }
}
