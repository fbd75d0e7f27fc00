/// Visible slice of the page, in the same units as scroll offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub offset: u32,
    pub height: u32,
}

/// Vertical placement of one page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionExtent {
    pub top: u32,
    pub height: u32,
}

impl SectionExtent {
    fn visible_in(&self, viewport: Viewport) -> u32 {
        let start = self.top.max(viewport.offset);
        let end = self
            .top
            .saturating_add(self.height)
            .min(viewport.offset.saturating_add(viewport.height));
        end.saturating_sub(start)
    }
}

/// Decides which sections have entered the viewport.
pub trait VisibilityObserver {
    /// Re-evaluates against `viewport`; returns indices revealed by this call.
    fn observe(&mut self, viewport: Viewport) -> Vec<usize>;

    fn is_revealed(&self, index: usize) -> bool;
}

/// Fade-in tracker: a section is revealed once at least `ratio` of it has
/// been on screen, and stays revealed.
#[derive(Debug, Clone)]
pub struct SectionRevealer {
    sections: Vec<SectionExtent>,
    revealed: Vec<bool>,
    ratio: f32,
}

impl SectionRevealer {
    pub fn new(sections: Vec<SectionExtent>, ratio: f32) -> Self {
        let revealed = vec![false; sections.len()];
        Self {
            sections,
            revealed,
            ratio: ratio.clamp(f32::MIN_POSITIVE, 1.0),
        }
    }

    /// Keeps sections revealed by `previous` revealed here. Used when the
    /// same sections are laid out again at a new size.
    pub fn carry_over(&mut self, previous: &SectionRevealer) {
        for (revealed, &before) in self.revealed.iter_mut().zip(&previous.revealed) {
            *revealed |= before;
        }
    }

    fn meets_ratio(&self, extent: &SectionExtent, viewport: Viewport) -> bool {
        let visible = extent.visible_in(viewport);
        if extent.height == 0 {
            return extent.top >= viewport.offset
                && extent.top < viewport.offset.saturating_add(viewport.height);
        }
        visible as f32 >= self.ratio * extent.height as f32 && visible > 0
    }
}

impl VisibilityObserver for SectionRevealer {
    fn observe(&mut self, viewport: Viewport) -> Vec<usize> {
        let mut newly = Vec::new();
        for idx in 0..self.sections.len() {
            if self.revealed[idx] {
                continue;
            }
            if self.meets_ratio(&self.sections[idx], viewport) {
                self.revealed[idx] = true;
                newly.push(idx);
            }
        }
        if !newly.is_empty() {
            tracing::trace!(?newly, "Sections revealed");
        }
        newly
    }

    fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }
}
