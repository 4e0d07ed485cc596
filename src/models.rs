use regex::Regex;
use serde::Serialize;

use crate::config::IMAGE_URL_PATTERN;

pub struct ImagePatterns {
    pub image_url_regex: Regex,
}

impl ImagePatterns {
    pub fn new() -> Self {
        Self {
            image_url_regex: Regex::new(IMAGE_URL_PATTERN)
                .expect("IMAGE_URL_PATTERN is a valid regex"),
        }
    }
}

impl Default for ImagePatterns {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique image URLs in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub urls: Vec<String>,
}

impl Extraction {
    pub fn count(&self) -> usize {
        self.urls.len()
    }
}
