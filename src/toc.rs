//! Anchor slugs and index links for documented files.

/// GitHub heading anchor slug.
///
/// - lowercase
/// - keep alphanumerics, spaces and hyphens; drop everything else
/// - replace spaces with hyphens
pub fn slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}

/// Markdown index entry linking to a heading anchor: `* [math](#math)`.
pub fn render_toc_item(title: &str, anchor: &str) -> String {
    format!("* [{}](#{})", title, anchor)
}

/// Give every title a slug, suffixing repeats the way GitHub does
/// (`math`, `math-1`, `math-2`).
pub fn unique_slugs<'a>(titles: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for title in titles {
        let base = slug(title);
        let mut candidate = base.clone();
        let mut n = 0;
        while seen.contains(&candidate) {
            n += 1;
            candidate = format!("{}-{}", base, n);
        }
        seen.push(candidate.clone());
        out.push(candidate);
    }
    out
}
