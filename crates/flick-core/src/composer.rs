//! Composer panel state machine
//!
//! Holds the in-progress draft (title + body as two independent fields) and
//! the panel visibility. The visibility maps to the slide animation target:
//! `Closed` parks the panel below the fold, `Open` slides it into view.

/// Panel visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Panel parked off-screen below the fold
    #[default]
    Closed,
    /// Panel slid into view
    Open,
}

impl Visibility {
    /// Animation target scalar for this visibility
    ///
    /// `1.0` is fully off-screen, `0.0` fully in view. The panel's vertical
    /// offset is this value times the panel travel distance.
    #[must_use]
    pub const fn target(self) -> f32 {
        match self {
            Self::Closed => 1.0,
            Self::Open => 0.0,
        }
    }
}

/// Composer panel: draft fields plus visibility
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    title: String,
    body: String,
    visibility: Visibility,
}

impl Composer {
    /// A closed composer with empty drafts
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the panel; any existing draft text is kept
    pub fn open(&mut self) {
        self.visibility = Visibility::Open;
    }

    /// Close the panel and discard the draft
    pub fn cancel(&mut self) {
        self.visibility = Visibility::Closed;
        self.title.clear();
        self.body.clear();
    }

    /// Close the panel and hand the draft to the caller
    ///
    /// Returns `(title, body)` and leaves both drafts empty. Empty drafts
    /// still submit; validation is not this type's concern.
    pub fn submit(&mut self) -> (String, String) {
        self.visibility = Visibility::Closed;
        (
            std::mem::take(&mut self.title),
            std::mem::take(&mut self.body),
        )
    }

    /// Replace the draft title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replace the draft body
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Current draft title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current draft body
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Current visibility
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether the panel is currently open
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.visibility, Visibility::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_closed_with_empty_drafts() {
        let composer = Composer::new();
        assert_eq!(composer.visibility(), Visibility::Closed);
        assert_eq!(composer.title(), "");
        assert_eq!(composer.body(), "");
    }

    #[test]
    fn open_then_cancel_cycles_visibility() {
        let mut composer = Composer::new();
        composer.open();
        assert!(composer.is_open());
        composer.cancel();
        assert_eq!(composer.visibility(), Visibility::Closed);
    }

    #[test]
    fn submit_returns_draft_and_clears_it() {
        let mut composer = Composer::new();
        composer.open();
        composer.set_title("Groceries");
        composer.set_body("Milk, eggs");

        let (title, body) = composer.submit();
        assert_eq!(title, "Groceries");
        assert_eq!(body, "Milk, eggs");
        assert_eq!(composer.visibility(), Visibility::Closed);
        assert_eq!(composer.title(), "");
        assert_eq!(composer.body(), "");
    }

    #[test]
    fn submit_with_empty_drafts_is_allowed() {
        let mut composer = Composer::new();
        composer.open();
        let (title, body) = composer.submit();
        assert_eq!(title, "");
        assert_eq!(body, "");
    }

    #[test]
    fn cancel_discards_the_draft() {
        let mut composer = Composer::new();
        composer.open();
        composer.set_title("half-typed");
        composer.set_body("thought");
        composer.cancel();

        composer.open();
        assert_eq!(composer.title(), "");
        assert_eq!(composer.body(), "");
    }

    #[test]
    fn visibility_targets_match_panel_positions() {
        assert_eq!(Visibility::Closed.target(), 1.0);
        assert_eq!(Visibility::Open.target(), 0.0);
    }

    #[test]
    fn submitted_draft_lands_in_the_store() {
        let mut store = crate::store::NoteStore::seeded();
        let mut composer = Composer::new();

        composer.open();
        composer.set_title("Groceries");
        composer.set_body("Milk, eggs");
        let (title, body) = composer.submit();
        let id = store.add(title, body);

        let titles: Vec<&str> = store.notes().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Important", "Groceries"]);
        assert_eq!(composer.visibility(), Visibility::Closed);

        store.dismiss(id);
        let titles: Vec<&str> = store.notes().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Important"]);
    }
}
