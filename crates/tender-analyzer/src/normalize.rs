//! Text normalization for extracted document text
//!
//! Source documents arrive with mixed line endings, control characters, and
//! pathological line lengths. Normalization cleans all of that while keeping
//! double-newline paragraph boundaries intact, because the chunker splits on
//! them. Collapsing whitespace across the whole input would erase those
//! anchors, so collapsing happens per line only.

/// Cleans raw extracted text into the form the chunker expects
pub struct TextNormalizer {
    max_line_length: usize,
}

impl TextNormalizer {
    /// Create a normalizer with the given per-line length cap, in characters
    pub fn new(max_line_length: usize) -> Self {
        Self { max_line_length }
    }

    /// Normalize the given text. Infallible; the result may be empty.
    ///
    /// - Converts `\r\n` and `\r` to `\n`
    /// - Drops control characters below U+0020 except newline
    /// - Collapses whitespace runs within each line to a single space
    /// - Truncates lines longer than the configured cap
    /// - Preserves paragraph breaks as exactly one blank line
    pub fn normalize(&self, text: &str) -> String {
        let unified = text.replace("\r\n", "\n").replace('\r', "\n");

        let mut paragraphs: Vec<String> = Vec::new();
        let mut current: Vec<String> = Vec::new();

        for raw_line in unified.split('\n') {
            let line = self.clean_line(raw_line);
            if line.is_empty() {
                if !current.is_empty() {
                    paragraphs.push(current.join("\n"));
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            paragraphs.push(current.join("\n"));
        }

        paragraphs.join("\n\n")
    }

    fn clean_line(&self, raw: &str) -> String {
        // Tab survives the control-character filter so the whitespace
        // collapse below still sees it as a separator.
        let stripped: String = raw
            .chars()
            .filter(|c| (*c as u32) >= 32 || *c == '\t')
            .collect();

        let line = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

        if line.chars().count() > self.max_line_length {
            line.chars().take(self.max_line_length).collect()
        } else {
            line
        }
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(1000)
    }
}
