use regex::Regex;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Assistant-text rendering
// ---------------------------------------------------------------------------
//
// Remote assistant text is untrusted. The renderer applies exactly the
// fixed substitution set (bold spans, link-list bullets, line breaks)
// and treats everything else as literal text. Control characters are
// stripped first so remote output can never smuggle terminal escapes.

static BOLD_RE: OnceLock<Regex> = OnceLock::new();
static LINK_ITEM_RE: OnceLock<Regex> = OnceLock::new();

fn bold_re() -> &'static Regex {
    BOLD_RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").unwrap())
}

fn link_item_re() -> &'static Regex {
    LINK_ITEM_RE.get_or_init(|| Regex::new(r"(?m)^- \[([^\]]+)\]\(([^)\s]+)\)\s*$").unwrap())
}

/// Render assistant text for a terminal.
///
/// Substitutions, in order: control characters removed (newlines kept),
/// `- [title](uri)` list items become `• title <uri>` lines, `**span**`
/// becomes an ANSI-bold span. Nothing else is interpreted.
pub fn render(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| *c == '\n' || !c.is_control())
        .collect();
    let with_links = link_item_re().replace_all(&cleaned, "  • $1 <$2>");
    bold_re()
        .replace_all(&with_links, "\x1b[1m$1\x1b[0m")
        .into_owned()
}

/// Render with no terminal styling: bold markers dropped, links kept.
/// Used for `--json` output and piping.
pub fn render_plain(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| *c == '\n' || !c.is_control())
        .collect();
    let with_links = link_item_re().replace_all(&cleaned, "  • $1 <$2>");
    bold_re().replace_all(&with_links, "$1").into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
