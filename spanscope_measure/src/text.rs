// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;

/// Per-glyph horizontal advance provided by the host's text stack.
pub trait GlyphMetrics {
    /// Advance of `ch` in pixels at the label font.
    fn glyph_advance(&self, ch: char) -> f64;
}

impl<G: GlyphMetrics + ?Sized> GlyphMetrics for &G {
    fn glyph_advance(&self, ch: char) -> f64 {
        (**self).glyph_advance(ch)
    }
}

/// Estimates label widths by summing cached glyph advances.
///
/// Labels in the timeline and span bars are short and drawn from a small
/// alphabet (digits, unit suffixes), so a glyph cache hits almost always.
/// Kerning is ignored.
#[derive(Clone, Debug, Default)]
pub struct TextMeasurer {
    glyphs: HashMap<char, f64>,
}

impl TextMeasurer {
    /// Creates a measurer with an empty glyph cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of `text` in pixels.
    pub fn measure<G: GlyphMetrics>(&mut self, text: &str, metrics: &G) -> f64 {
        text.chars()
            .map(|ch| {
                *self
                    .glyphs
                    .entry(ch)
                    .or_insert_with(|| metrics.glyph_advance(ch))
            })
            .sum()
    }

    /// Width of `text` using only cached glyphs; `None` if any glyph is unknown.
    #[must_use]
    pub fn measure_cached(&self, text: &str) -> Option<f64> {
        text.chars().map(|ch| self.glyphs.get(&ch).copied()).sum()
    }

    /// Number of cached glyphs.
    #[must_use]
    pub fn cached_glyphs(&self) -> usize {
        self.glyphs.len()
    }

    /// Forgets all advances, e.g. after a font change.
    pub fn clear(&mut self) {
        self.glyphs.clear();
    }
}
