use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LEADING_NUMBER_RE: Regex = Regex::new(r"(\d+(\.\d+)?)").unwrap();
}

/// Maps a free-text portion descriptor onto a rough serving count.
///
/// `None` stays `None`. Blank or unrecognised text counts as one serving.
pub fn quantify_portion(portion: Option<&str>) -> Option<f64> {
    let portion = portion?;
    if portion.trim().is_empty() {
        return Some(1.0);
    }

    let lower = portion.to_lowercase();
    if lower.contains("small") {
        return Some(1.0);
    }
    if lower.contains("medium") {
        return Some(2.0);
    }
    if lower.contains("large") {
        return Some(3.0);
    }
    if lower.contains("1 cup") || lower.contains("one cup") {
        return Some(2.0);
    }
    if lower.contains("1/2 cup") || lower.contains("half cup") {
        return Some(1.0);
    }

    let amount = LEADING_NUMBER_RE
        .captures(&lower)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok());
    Some(amount.unwrap_or(1.0))
}
