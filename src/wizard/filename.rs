//! Local file name for a downloaded presentation.

use std::sync::OnceLock;

use regex::Regex;

const SUFFIX: &str = "_presentation.pptx";

fn non_alphanumeric() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9]").expect("literal pattern"))
}

/// `<topic>_presentation.pptx`, with every character other than an ASCII
/// letter or digit replaced by `_` and the result lowercased.
pub fn download_file_name(topic: &str) -> String {
    let stem = non_alphanumeric().replace_all(topic, "_").to_lowercase();
    format!("{}{}", stem, SUFFIX)
}
