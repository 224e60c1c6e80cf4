//! Text partitioning for carousel slides.
//!
//! Splits free-form text into a fixed number of slide-sized fragments,
//! keeping paragraphs whole. Two strategies: when there are at least as
//! many slides as paragraphs, each paragraph gets its own slide and the
//! tail is padded with empty fragments; when paragraphs outnumber
//! slides, content is spread evenly by character budget and any
//! overflow is collapsed into the last fragment.

use regex::Regex;
use std::sync::LazyLock;

/// Regex matching a paragraph delimiter (one or more newlines).
static PARAGRAPH_SPLIT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());

/// Soft per-fragment length cap, in chars. A single paragraph longer
/// than this is never split; it gets a slide to itself.
pub const MAX_CHARS_PER_SLIDE: usize = 800;

/// Tolerance over the even character split before a fragment is closed.
const TARGET_TOLERANCE: f64 = 1.3;

/// Splits text into slide-sized fragments.
#[derive(Debug, Clone, Default)]
pub struct TextSplitter;

impl TextSplitter {
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into exactly `slide_count` fragments.
    ///
    /// Fragments preserve paragraph order; a fragment may hold several
    /// paragraphs joined by blank lines, or be empty when the text is
    /// too sparse for the requested count. Lengths are measured in
    /// chars, not bytes.
    ///
    /// Returns an empty vec when the trimmed text is empty or
    /// `slide_count` is zero; every other input yields exactly
    /// `slide_count` fragments.
    pub fn split_into_slides(&self, text: &str, slide_count: usize) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        // Range validation (1..=30) is the message boundary's job; a
        // zero count reaching this far means there is nothing to render.
        if slide_count == 0 {
            return Vec::new();
        }

        let paragraphs: Vec<&str> = PARAGRAPH_SPLIT_REGEX
            .split(text)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        if paragraphs.len() <= slide_count {
            log::debug!(
                "distributing {} paragraphs across {} slides by paragraph",
                paragraphs.len(),
                slide_count
            );
            self.distribute_by_paragraphs(&paragraphs, slide_count)
        } else {
            log::debug!(
                "distributing {} paragraphs across {} slides by content",
                paragraphs.len(),
                slide_count
            );
            self.distribute_by_content(&paragraphs, slide_count)
        }
    }

    /// One paragraph per slide, then empty-string padding up to
    /// `slide_count`. Only called when paragraphs do not outnumber
    /// slides, so the budget always suffices.
    fn distribute_by_paragraphs(&self, paragraphs: &[&str], slide_count: usize) -> Vec<String> {
        let mut result: Vec<String> = paragraphs.iter().map(|p| (*p).to_string()).collect();
        result.resize(slide_count, String::new());
        result
    }

    /// Spread paragraphs across `slide_count` fragments by character
    /// budget, collapsing any overflow into the last fragment.
    fn distribute_by_content(&self, paragraphs: &[&str], slide_count: usize) -> Vec<String> {
        let total_chars: usize = paragraphs.iter().map(|p| p.chars().count()).sum();
        let target_chars_per_slide = total_chars as f64 / slide_count as f64;

        let mut result: Vec<String> = Vec::new();
        let mut current_slide = String::new();
        let mut current_chars = 0usize;
        let mut visited = 0usize;

        for paragraph in paragraphs {
            let paragraph_chars = paragraph.chars().count();
            let combined = current_chars + paragraph_chars;

            if current_chars > 0
                && (combined as f64 > target_chars_per_slide * TARGET_TOLERANCE
                    || combined > MAX_CHARS_PER_SLIDE)
            {
                result.push(std::mem::take(&mut current_slide));
                current_slide.push_str(paragraph);
                current_chars = paragraph_chars;
            } else {
                if current_chars > 0 {
                    current_slide.push_str("\n\n");
                }
                current_slide.push_str(paragraph);
                current_chars = combined;
            }

            visited += 1;

            // Reserve the final slide for whatever remains.
            if result.len() >= slide_count - 1 {
                break;
            }
        }

        if !current_slide.is_empty() {
            result.push(current_slide);
        }

        // Paragraphs the budget walk never reached become trailing
        // fragments; the collapse below folds them back into the last
        // slide so nothing is lost.
        for paragraph in &paragraphs[visited..] {
            result.push((*paragraph).to_string());
        }

        if result.len() > slide_count {
            let tail = result.split_off(slide_count - 1);
            result.push(tail.join("\n\n"));
        }

        while result.len() < slide_count {
            result.push(String::new());
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str, count: usize) -> Vec<String> {
        TextSplitter::new().split_into_slides(text, count)
    }

    #[test]
    fn test_empty_text_yields_empty_sequence() {
        assert!(split("", 5).is_empty());
        assert!(split("   \n\n  ", 5).is_empty());
        assert!(split("\t \r\n", 1).is_empty());
    }

    #[test]
    fn test_zero_slide_count_yields_empty_sequence() {
        assert!(split("Hello world", 0).is_empty());
    }

    #[test]
    fn test_single_paragraph_padded_to_count() {
        assert_eq!(split("Hello world", 3), vec!["Hello world", "", ""]);
    }

    #[test]
    fn test_one_paragraph_per_slide() {
        assert_eq!(split("A.\n\nB.\n\nC.", 3), vec!["A.", "B.", "C."]);
    }

    #[test]
    fn test_fewer_paragraphs_than_slides() {
        assert_eq!(split("A.\n\nB.", 4), vec!["A.", "B.", "", ""]);
    }

    #[test]
    fn test_single_newline_also_delimits() {
        assert_eq!(split("A.\nB.", 2), vec!["A.", "B."]);
    }

    #[test]
    fn test_paragraphs_trimmed() {
        assert_eq!(split("  A.  \n\n  B.  ", 2), vec!["A.", "B."]);
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(split("A.\r\nB.\r\n", 2), vec!["A.", "B."]);
    }

    #[test]
    fn test_length_invariant_holds() {
        let text = "First paragraph here.\n\nSecond paragraph here.\n\nThird one.";
        for count in 1..=30 {
            assert_eq!(split(text, count).len(), count, "count = {}", count);
        }
    }

    #[test]
    fn test_determinism() {
        let text = "Alpha.\n\nBeta.\n\nGamma.\n\nDelta.\n\nEpsilon.";
        assert_eq!(split(text, 2), split(text, 2));
        assert_eq!(split(text, 7), split(text, 7));
    }

    #[test]
    fn test_by_content_preserves_every_paragraph_once() {
        let fragments = split("A.\n\nB.\n\nC.\n\nD.\n\nE.", 2);
        assert_eq!(fragments.len(), 2);

        let joined = fragments.join("\n\n");
        for p in ["A.", "B.", "C.", "D.", "E."] {
            assert_eq!(joined.matches(p).count(), 1, "paragraph {}", p);
        }
    }

    #[test]
    fn test_by_content_collapses_overflow_into_last_fragment() {
        // Five equal paragraphs on a two-slide budget: the walk closes
        // the first fragment after three paragraphs, the fourth starts
        // the last slide, and the fifth folds into it.
        let fragments = split("A.\n\nB.\n\nC.\n\nD.\n\nE.", 2);
        assert_eq!(fragments, vec!["A.\n\nB.\n\nC.", "D.\n\nE."]);
    }

    #[test]
    fn test_by_content_single_slide_holds_everything() {
        let fragments = split("A.\n\nB.\n\nC.\n\nD.\n\nE.", 1);
        assert_eq!(fragments, vec!["A.\n\nB.\n\nC.\n\nD.\n\nE."]);
    }

    #[test]
    fn test_oversized_paragraph_kept_whole() {
        let long = "x".repeat(2000);
        let fragments = split(&long, 1);
        assert_eq!(fragments, vec![long]);
    }

    #[test]
    fn test_by_content_hard_cap_closes_fragment() {
        // 500 + 500 stays under the even-split tolerance (1040 chars
        // here) but breaks the 800-char hard cap, so the second
        // paragraph opens a new slide.
        let a = "a".repeat(500);
        let b = "b".repeat(500);
        let c = "c".repeat(600);
        let text = format!("{}\n\n{}\n\n{}", a, b, c);

        let fragments = split(&text, 2);
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0], a);
        assert_eq!(fragments[1], format!("{}\n\n{}", b, c));
    }

    #[test]
    fn test_by_paragraph_respects_cap_for_typical_input() {
        let paragraphs: Vec<String> = (0..5).map(|_| "p".repeat(300)).collect();
        let text = paragraphs.join("\n\n");

        let fragments = split(&text, 5);
        for fragment in &fragments {
            assert!(fragment.chars().count() <= MAX_CHARS_PER_SLIDE);
        }
    }

    #[test]
    fn test_multibyte_text_preserved() {
        let a = "あ".repeat(300);
        let b = "い".repeat(300);
        let c = "う".repeat(300);
        let text = format!("{}\n\n{}\n\n{}", a, b, c);

        let fragments = split(&text, 2);
        assert_eq!(fragments.len(), 2);

        let joined = fragments.join("\n\n");
        assert_eq!(joined.matches(&a).count(), 1);
        assert_eq!(joined.matches(&b).count(), 1);
        assert_eq!(joined.matches(&c).count(), 1);
    }

    #[test]
    fn test_many_short_paragraphs_spread_evenly() {
        let paragraphs: Vec<String> = (0..12).map(|i| format!("Paragraph number {}.", i)).collect();
        let text = paragraphs.join("\n\n");

        let fragments = split(&text, 4);
        assert_eq!(fragments.len(), 4);

        // Every paragraph appears exactly once across the output.
        let joined = fragments.join("\n\n");
        for p in &paragraphs {
            assert_eq!(joined.matches(p.as_str()).count(), 1, "paragraph {}", p);
        }

        // No fragment hoards the whole text.
        let max = fragments.iter().map(|f| f.chars().count()).max().unwrap();
        assert!(max < text.chars().count());
    }
}
