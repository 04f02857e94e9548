//! File system utilities

/// Longest slug produced by [`slugify_title`]
pub const MAX_SLUG_LEN: usize = 100;

/// Turn a video title into a filename-safe slug.
///
/// Only ASCII word characters, whitespace and `-` survive; whitespace runs
/// become a single `-`, the result is lowercased and cut to [`MAX_SLUG_LEN`].
pub fn slugify_title(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;

    for c in title.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            slug.push(c.to_ascii_lowercase());
            in_whitespace = false;
        }
        // 其他字符直接丢弃，不打断空白序列
    }

    slug.chars().take(MAX_SLUG_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_title() {
        assert_eq!(
            slugify_title("Never Gonna Give You Up (Official Video)"),
            "never-gonna-give-you-up-official-video"
        );
        assert_eq!(slugify_title("a  \t b"), "a-b");
        assert_eq!(slugify_title("snake_case-title"), "snake_case-title");
    }

    #[test]
    fn test_slugify_drops_non_ascii_word_chars() {
        assert_eq!(slugify_title("東京 Night Walk!"), "-night-walk");
        assert_eq!(slugify_title("日本語"), "");
        // Removed characters do not split a whitespace run.
        assert_eq!(slugify_title("a ! b"), "a-b");
    }

    #[test]
    fn test_slugify_truncates() {
        let long = "x".repeat(250);
        assert_eq!(slugify_title(&long).len(), MAX_SLUG_LEN);
    }
}
