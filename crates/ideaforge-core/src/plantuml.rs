//! PlantUML source clean-up and rendering URLs.

use regex::Regex;
use std::sync::OnceLock;

pub const START_MARKER: &str = "@startuml";
pub const END_MARKER: &str = "@enduml";

static FENCE_RE: OnceLock<Regex> = OnceLock::new();

/// Matches a whole fence line (```` ```plantuml ````) or a fence closing a line.
fn fence() -> &'static Regex {
    FENCE_RE.get_or_init(|| Regex::new(r"(?m)^```[^\n]*\n|```$").unwrap())
}

/// Normalise model output into a PlantUML document.
///
/// Never fails. The result starts with `@startuml`, ends with `@enduml`,
/// contains no backticks and is pure ASCII (other characters become `_`).
/// `sanitize(sanitize(x)) == sanitize(x)`.
pub fn sanitize(raw: &str) -> String {
    let unfenced = fence().replace_all(raw, "");
    let mut doc: String = unfenced.trim().chars().filter(|c| *c != '`').collect();

    if !doc.starts_with(START_MARKER) {
        doc = format!("{START_MARKER}\n{doc}");
    }
    if !doc.ends_with(END_MARKER) {
        doc.push('\n');
        doc.push_str(END_MARKER);
    }

    doc.chars()
        .map(|c| if c.is_ascii() { c } else { '_' })
        .collect()
}

/// PNG rendering URL for `source` on a PlantUML server, using the server's
/// `~h` hex encoding of the UTF-8 text.
pub fn image_url(server: &str, source: &str) -> String {
    format!(
        "{}/png/~h{}",
        server.trim_end_matches('/'),
        hex::encode(source.as_bytes())
    )
}
