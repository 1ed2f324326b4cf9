//! Help carousel: fixed pages and a clamped cursor.

use crate::error::GameError;
use crate::snapshot::PageSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpPage {
    pub image_ref: String,
    pub title: String,
    pub body: String,
}

impl HelpPage {
    pub fn new(
        image_ref: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            image_ref: image_ref.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Ordered pages `0..N` with a cursor that never leaves that range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpCarousel {
    pages: Vec<HelpPage>,
    cursor: usize,
}

impl HelpCarousel {
    pub fn new(pages: Vec<HelpPage>) -> Result<Self, GameError> {
        if pages.is_empty() {
            return Err(GameError::EmptyCarousel);
        }
        Ok(Self { pages, cursor: 0 })
    }

    /// The three tip pages of the reference game.
    pub fn standard() -> Self {
        Self {
            pages: vec![
                HelpPage::new(
                    "https://images.unsplash.com/photo-1473448912268-2022ce9509d8",
                    "Tip # 1",
                    "Lorem ipsum dolor sit, amet consectetur adipisicing elit. Quibusdam eveniet amet fuga ipsam inventore, ab minima nemo! Pariatur molestias eos quisquam voluptatum sit. Earum voluptatibus consectetur minima aspernatur quod consequatur!",
                ),
                HelpPage::new(
                    "https://images.unsplash.com/photo-1511497584788-876760111969",
                    "Tip # 2",
                    "Lorem ipsum dolor sit amet consectetur adipisicing elit. Eius quae voluptatem ea sint temporibus eligendi, expedita sed ipsam consequuntur aliquid.",
                ),
                HelpPage::new(
                    "https://images.unsplash.com/photo-1453791052107-5c843da62d97",
                    "Tip # 3",
                    "Lorem ipsum dolor sit amet consectetur adipisicing elit. Consectetur dolore architecto dolorem odio rem, earum deleniti. Fugit unde laudantium iusto rerum, fuga sapiente necessitatibus culpa?",
                ),
            ],
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn index(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> &HelpPage {
        &self.pages[self.cursor]
    }

    /// Advance one page. No-op on the last page; returns whether the cursor moved.
    pub fn page_up(&mut self) -> bool {
        if self.cursor + 1 >= self.pages.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Go back one page. No-op on the first page; returns whether the cursor moved.
    pub fn page_down(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Back to the first page.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    pub fn snapshot(&self) -> PageSnapshot<'_> {
        PageSnapshot::new(self.cursor, self.pages.len(), self.current())
    }
}

impl Default for HelpCarousel {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_down_at_start_is_noop() {
        let mut c = HelpCarousel::standard();
        assert!(!c.page_down());
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn page_up_clamps_at_last_page() {
        let mut c = HelpCarousel::standard();
        let n = c.len();
        for _ in 0..n - 1 {
            assert!(c.page_up());
        }
        assert_eq!(c.index(), n - 1);
        assert!(!c.page_up());
        assert_eq!(c.index(), n - 1);
        assert_eq!(c.current().title, "Tip # 3");
    }

    #[test]
    fn single_page_never_moves() {
        let mut c = HelpCarousel::new(vec![HelpPage::new("a.png", "Only", "page")]).unwrap();
        assert!(!c.page_up());
        assert!(!c.page_down());
        let snap = c.snapshot();
        assert_eq!(snap.page_index, 0);
        assert!(!snap.has_prev());
        assert!(!snap.has_next());
    }

    #[test]
    fn empty_carousel_is_rejected() {
        assert_eq!(HelpCarousel::new(Vec::new()), Err(GameError::EmptyCarousel));
    }

    #[test]
    fn snapshot_follows_cursor() {
        let mut c = HelpCarousel::standard();
        c.page_up();
        let snap = c.snapshot();
        assert_eq!(snap.page_index, 1);
        assert_eq!(snap.page_count, 3);
        assert_eq!(snap.title, "Tip # 2");
        assert!(snap.has_prev());
        assert!(snap.has_next());
        c.rewind();
        assert_eq!(c.index(), 0);
    }
}
