use crate::counter::WordCounts;
use crate::font::{map_fonts, FontAssignment};
use crate::select::{select_top, Selection, SelectionError};

/// One word of the cloud as handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudWord {
    pub word: String,
    pub count: u32,
    pub font_size: u32,
}

/// Selected words with their font sizes, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagCloud {
    pub requested: usize,
    pub words: Vec<CloudWord>,
}

impl TagCloud {
    pub fn from_parts(selection: &Selection, fonts: &FontAssignment) -> Self {
        let words = selection
            .entries()
            .iter()
            .filter_map(|entry| {
                fonts.get(&entry.word).map(|font_size| CloudWord {
                    word: entry.word.clone(),
                    count: entry.count,
                    font_size,
                })
            })
            .collect();
        Self {
            requested: selection.len(),
            words,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Select, then font-map: everything after counting.
pub fn build_tag_cloud(counts: &WordCounts, n: usize) -> Result<TagCloud, SelectionError> {
    let selection = select_top(counts, n)?;
    let fonts = map_fonts(&selection);
    Ok(TagCloud::from_parts(&selection, &fonts))
}
