//! Draft export as a plain-text download.

/// File name offered for a draft: whitespace runs in the title become `-`.
pub fn export_filename(title: &str) -> String {
    let mut name = String::with_capacity(title.len() + 4);
    let mut in_whitespace = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                name.push('-');
            }
            in_whitespace = true;
        } else {
            in_whitespace = false;
            name.push(c);
        }
    }
    name.push_str(".txt");
    name
}

/// `Content-Disposition` value for the download. Quotes and backslashes are
/// dropped so the name can sit inside a quoted-string.
pub fn attachment_disposition(title: &str) -> String {
    let filename: String = export_filename(title)
        .chars()
        .filter(|c| *c != '"' && *c != '\\' && !c.is_control())
        .collect();
    format!("attachment; filename=\"{filename}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_replaces_spaces() {
        assert_eq!(
            export_filename("The Complete Guide to Rust"),
            "The-Complete-Guide-to-Rust.txt"
        );
    }

    #[test]
    fn test_filename_collapses_whitespace_runs() {
        assert_eq!(export_filename("a  \t b"), "a-b.txt");
        assert_eq!(export_filename(" padded "), "-padded-.txt");
        assert_eq!(export_filename(""), ".txt");
    }

    #[test]
    fn test_disposition_strips_quotes() {
        assert_eq!(
            attachment_disposition("Say \"Hi\""),
            "attachment; filename=\"Say-Hi.txt\""
        );
    }
}
