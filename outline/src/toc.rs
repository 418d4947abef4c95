//! GitHub-flavored markdown anchor/slug generation.

/// Generate a table-of-contents link to a heading.
pub fn render_toc_link(text: &str) -> String {
    format!("[`{}`](#{})", text, github_slug(text))
}

/// Generate a TOC list item.
pub fn render_toc_item(title: &str) -> String {
    format!("* {}", render_toc_link(title))
}

/// GitHub heading anchor slug:
/// - lowercase
/// - drop everything that isn't alphanumeric, space or hyphen
/// - replace spaces with hyphens
pub fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_simple() {
        assert_eq!(github_slug("hello world"), "hello-world");
    }

    #[test]
    fn slug_of_signature() {
        assert_eq!(github_slug("sum(a,b int) int"), "sumab-int-int");
        assert_eq!(github_slug("now() time"), "now-time");
    }

    #[test]
    fn slug_drops_punctuation() {
        assert_eq!(github_slug("time(string, format=..., location=...) time"), "timestring-format-location-time");
    }

    #[test]
    fn slug_uppercase() {
        assert_eq!(github_slug("Hello World"), "hello-world");
    }

    #[test]
    fn toc_item() {
        assert_eq!(
            render_toc_item("difference(a,b int) int"),
            "* [`difference(a,b int) int`](#differenceab-int-int)"
        );
    }
}
