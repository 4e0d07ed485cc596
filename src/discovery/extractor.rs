use std::collections::HashSet;

use log::debug;

use crate::models::{Extraction, ImagePatterns};

/// Every match in scan order, duplicates included.
pub fn extract_urls<'a>(text: &'a str, patterns: &ImagePatterns) -> Vec<&'a str> {
    patterns.image_url_regex
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

/// Drops repeats; the first occurrence keeps its position.
pub fn dedup_in_order<'a, I>(matches: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    matches
        .into_iter()
        .filter(|url| seen.insert(*url))
        .map(str::to_string)
        .collect()
}

pub fn extract(text: &str, patterns: &ImagePatterns) -> Extraction {
    let raw = extract_urls(text, patterns);
    let urls = dedup_in_order(raw.iter().copied());
    debug!("{} raw matches, {} unique", raw.len(), urls.len());
    Extraction { urls }
}
