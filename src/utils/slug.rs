//! Slug generation for document titles.

use deunicode::deunicode;

use crate::config::{SlugCase, SlugConfig, SlugMode};

/// Turn a title into a URL slug.
///
/// Runs of anything that is not alphanumeric collapse into one separator, and
/// the result never starts or ends with a separator.
///
/// ```ignore
/// slugify("Blåbær & øl", &SlugConfig::default()) == "blabaer-ol"
/// ```
pub fn slugify(text: &str, config: &SlugConfig) -> String {
    let source = match config.mode {
        SlugMode::No => return text.to_string(),
        SlugMode::Full => deunicode(text),
        SlugMode::Safe => text.to_string(),
    };
    let sep = config.separator.as_char();

    let mut out = String::with_capacity(source.len());
    let mut chars = 0;
    let mut gap = false;
    for c in source.chars() {
        if !c.is_alphanumeric() {
            gap = true;
            continue;
        }
        let word_start = gap || out.is_empty();
        if gap && !out.is_empty() {
            if chars + 1 >= config.max_len {
                break;
            }
            out.push(sep);
            chars += 1;
        }
        gap = false;
        if chars >= config.max_len {
            break;
        }
        match config.case {
            SlugCase::Lower => out.extend(c.to_lowercase()),
            SlugCase::Upper => out.extend(c.to_uppercase()),
            SlugCase::Capitalize if word_start => out.extend(c.to_uppercase()),
            SlugCase::Capitalize => out.extend(c.to_lowercase()),
            SlugCase::Preserve => out.push(c),
        }
        chars += 1;
    }
    out
}
