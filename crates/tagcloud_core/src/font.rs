use std::collections::HashMap;

use crate::select::Selection;

/// Largest font-size class, given to the most frequent selected word.
pub const MAX_FONT_SIZE: u32 = 48;
/// Smallest font-size class, given to the least frequent selected word.
pub const MIN_FONT_SIZE: u32 = 11;

/// Font-size class per selected word.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontAssignment {
    sizes: HashMap<String, u32>,
}

impl FontAssignment {
    pub fn get(&self, word: &str) -> Option<u32> {
        self.sizes.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

/// Linearly interpolates `count` from `[min, max]` onto the font-size range.
///
/// When `min == max` the lower bound is shifted down by one, which keeps the
/// denominator non-zero and puts every word at [`MAX_FONT_SIZE`]. Swapped
/// bounds are reordered and `count` is clamped into them.
pub fn font_size(count: u32, min: u32, max: u32) -> u32 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    let count = i64::from(count.clamp(low, high));
    let effective_min = if low == high {
        i64::from(low) - 1
    } else {
        i64::from(low)
    };
    let span = i64::from(MAX_FONT_SIZE - MIN_FONT_SIZE);
    let scaled = span * (count - effective_min) / (i64::from(high) - effective_min);
    // 0 <= scaled <= span, so the narrowing is lossless.
    scaled as u32 + MIN_FONT_SIZE
}

pub fn map_fonts(selection: &Selection) -> FontAssignment {
    let (min, max) = (selection.min_count(), selection.max_count());
    let sizes = selection
        .entries()
        .iter()
        .map(|entry| (entry.word.clone(), font_size(entry.count, min, max)))
        .collect();
    FontAssignment { sizes }
}
