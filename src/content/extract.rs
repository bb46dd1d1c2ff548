//! Title and excerpt extraction from raw post bodies
//!
//! This is a line scanner, not a markdown parser: a title is the first line
//! starting with a single `#`, and the excerpt is the plain text between the
//! first heading and the next one.

/// Title returned when a body has no `# Heading` line
pub const UNTITLED: &str = "Untitled";

/// Default excerpt length in characters
pub const DEFAULT_EXCERPT_LENGTH: usize = 200;

/// Default prefix of directive lines
pub const DEFAULT_DIRECTIVE_PREFIX: &str = "import ";

/// Appended to truncated excerpts
const ELLIPSIS: char = '…';

/// Where the excerpt scan currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanPhase {
    BeforeTitle,
    AfterTitle,
    Done,
}

/// Extracts titles and excerpts, skipping directive lines
#[derive(Debug, Clone)]
pub struct TextExtractor {
    directive_prefix: String,
    excerpt_length: usize,
}

impl TextExtractor {
    /// Create an extractor with a custom directive prefix and excerpt length
    pub fn new(directive_prefix: &str, excerpt_length: usize) -> Self {
        Self {
            directive_prefix: directive_prefix.to_string(),
            excerpt_length,
        }
    }

    /// Title of a body, or [`UNTITLED`]
    pub fn title(&self, body: &str) -> String {
        body.lines()
            .filter(|line| !is_directive(line, &self.directive_prefix))
            .find_map(title_text)
            .map(str::to_string)
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    /// Excerpt using the configured length
    pub fn excerpt(&self, body: &str) -> String {
        self.excerpt_with_length(body, self.excerpt_length)
    }

    /// Plain-text excerpt of the section following the title.
    ///
    /// Collects the non-blank lines after the first heading up to the next
    /// heading, joins them with spaces and truncates to `max_length`
    /// characters on a word boundary.
    pub fn excerpt_with_length(&self, body: &str, max_length: usize) -> String {
        let mut phase = ScanPhase::BeforeTitle;
        let mut paragraphs: Vec<&str> = Vec::new();

        for line in body.lines() {
            if is_directive(line, &self.directive_prefix) {
                continue;
            }

            phase = match (phase, is_heading(line)) {
                (ScanPhase::BeforeTitle, true) => ScanPhase::AfterTitle,
                (ScanPhase::BeforeTitle, false) => ScanPhase::BeforeTitle,
                (ScanPhase::AfterTitle, true) => ScanPhase::Done,
                (ScanPhase::AfterTitle, false) => {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        paragraphs.push(trimmed);
                    }
                    ScanPhase::AfterTitle
                }
                (ScanPhase::Done, _) => ScanPhase::Done,
            };

            if phase == ScanPhase::Done {
                break;
            }
        }

        truncate_words(&paragraphs.join(" "), max_length)
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_DIRECTIVE_PREFIX, DEFAULT_EXCERPT_LENGTH)
    }
}

/// Title of a body using the default directive prefix
pub fn extract_title(body: &str) -> String {
    TextExtractor::default().title(body)
}

/// Excerpt of a body using the default directive prefix
pub fn extract_excerpt(body: &str, max_length: usize) -> String {
    TextExtractor::default().excerpt_with_length(body, max_length)
}

/// Whether a line is a directive
pub fn is_directive(line: &str, prefix: &str) -> bool {
    !prefix.is_empty() && line.starts_with(prefix)
}

/// `#`, `##`, ... followed by whitespace
fn is_heading(line: &str) -> bool {
    let rest = line.trim_start_matches('#');
    rest.len() < line.len() && rest.starts_with(char::is_whitespace)
}

/// Text of a `# Title` line, `None` for anything else
fn title_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('#')?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let title = rest.trim();
    (!title.is_empty()).then_some(title)
}

/// Cut `text` to at most `max_length` characters without splitting a word.
///
/// A cut that lands inside a word backs up to the previous whitespace. If the
/// kept part has no whitespace at all, the hard cut is used instead.
fn truncate_words(text: &str, max_length: usize) -> String {
    let cut = match text.char_indices().nth(max_length) {
        Some((idx, _)) => idx,
        None => return text.to_string(),
    };

    let head = &text[..cut];
    let mid_word = !text[cut..].starts_with(char::is_whitespace);

    let kept = if mid_word {
        match head.rfind(char::is_whitespace) {
            Some(idx) => &head[..idx],
            None => head,
        }
    } else {
        head
    };

    let mut out = kept.trim_end().to_string();
    out.push(ELLIPSIS);
    out
}
