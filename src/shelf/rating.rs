use crate::model::MAX_RATING;

/// The five-star input of the edit form.
///
/// Keeps the committed value apart from the hover preview: hovering star `k`
/// highlights up to `k`, leaving the widget snaps the highlight back to the
/// committed value. While disabled the widget ignores clicks, hovers and
/// clears.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingWidget {
    value: u8,
    preview: Option<u8>,
    enabled: bool,
}

impl RatingWidget {
    pub fn new(value: u8, enabled: bool) -> Self {
        Self {
            value: value.min(MAX_RATING),
            preview: None,
            enabled,
        }
    }

    /// The committed rating.
    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.preview = None;
        }
    }

    /// Commits star `star` (1-indexed). Returns false if the click was ignored.
    pub fn click(&mut self, star: u8) -> bool {
        if !self.enabled || !(1..=MAX_RATING).contains(&star) {
            return false;
        }
        self.value = star;
        self.preview = None;
        true
    }

    pub fn hover(&mut self, star: u8) {
        if self.enabled && (1..=MAX_RATING).contains(&star) {
            self.preview = Some(star);
        }
    }

    pub fn leave(&mut self) {
        self.preview = None;
    }

    /// Resets the rating to 0. Ignored while disabled.
    pub fn clear(&mut self) {
        if self.enabled {
            self.reset();
        }
    }

    pub(crate) fn reset(&mut self) {
        self.value = 0;
        self.preview = None;
    }

    /// Number of stars currently lit.
    pub fn highlighted(&self) -> u8 {
        self.preview.unwrap_or(self.value)
    }

    /// Lit state of each star, left to right.
    pub fn stars(&self) -> [bool; MAX_RATING as usize] {
        let lit = self.highlighted();
        std::array::from_fn(|i| (i as u8) < lit)
    }
}
