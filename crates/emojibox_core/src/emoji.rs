//! Emoji detection for submitted text.
//!
//! A fragment counts as one emoji when it is a single extended grapheme
//! cluster and every scalar in it carries both the `Emoji` and
//! `Emoji_Presentation` Unicode properties.

use unicode_properties::{EmojiStatus, UnicodeEmoji};
use unicode_segmentation::UnicodeSegmentation;

/// Whether `c` has both `Emoji` and `Emoji_Presentation` set.
pub fn has_emoji_presentation(c: char) -> bool {
    matches!(
        c.emoji_status(),
        EmojiStatus::EmojiPresentation
            | EmojiStatus::EmojiPresentationAndModifierBase
            | EmojiStatus::EmojiPresentationAndEmojiComponent
            | EmojiStatus::EmojiPresentationAndModifierAndEmojiComponent
    )
}

/// Whether every scalar in `text` renders as an emoji by default.
///
/// Returns `false` for empty input.
pub fn scalars_are_emoji(text: &str) -> bool {
    !text.is_empty() && text.chars().all(has_emoji_presentation)
}

/// Number of extended grapheme clusters in `text`.
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Return `text` when it is exactly one extended grapheme cluster.
pub fn single_grapheme(text: &str) -> Option<&str> {
    let mut graphemes = text.graphemes(true);
    match (graphemes.next(), graphemes.next()) {
        (Some(first), None) => Some(first),
        _ => None,
    }
}

/// Whether `text` is exactly one emoji glyph.
pub fn is_emoji_glyph(text: &str) -> bool {
    single_grapheme(text).is_some_and(scalars_are_emoji)
}

/// Split a seed string into its qualifying emoji glyphs.
///
/// Non-emoji clusters are skipped and repeats keep their first position.
pub fn seed_glyphs(seed: &str) -> Vec<&str> {
    let mut glyphs: Vec<&str> = Vec::new();
    for cluster in seed.graphemes(true) {
        if scalars_are_emoji(cluster) && !glyphs.contains(&cluster) {
            glyphs.push(cluster);
        }
    }
    glyphs
}
