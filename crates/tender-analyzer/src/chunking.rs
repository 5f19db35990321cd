//! Paragraph-aligned chunking for large documents
//!
//! Chunks are bounded in size but never split mid-paragraph: a paragraph
//! that alone exceeds the maximum becomes its own oversized chunk. Cutting
//! inside a paragraph would separate a field label from its value and
//! corrupt the context the extraction model sees.

/// Splits normalized text into bounded, paragraph-aligned chunks
pub struct Chunker {
    max_chunk_size: usize,
}

impl Chunker {
    /// Create a chunker with the given maximum chunk size, in characters
    pub fn new(max_chunk_size: usize) -> Self {
        Self { max_chunk_size }
    }

    /// Chunk the given text.
    ///
    /// Pure function of its input. Paragraphs (split on `\n\n`) are greedily
    /// accumulated while the running size stays within the maximum; joining
    /// the chunks back with `\n\n` reconstructs the input. Empty input
    /// yields no chunks.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_len = 0usize;

        for paragraph in text.split("\n\n") {
            let paragraph_len = paragraph.chars().count();

            if current.is_empty() {
                current.push_str(paragraph);
                current_len = paragraph_len;
            } else if current_len + 2 + paragraph_len <= self.max_chunk_size {
                current.push_str("\n\n");
                current.push_str(paragraph);
                current_len += 2 + paragraph_len;
            } else {
                chunks.push(std::mem::take(&mut current));
                current.push_str(paragraph);
                current_len = paragraph_len;
            }
        }

        if !current.is_empty() {
            chunks.push(current);
        }

        chunks
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(2000)
    }
}
