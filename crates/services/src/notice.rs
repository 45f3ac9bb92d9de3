use std::time::Duration;

/// How long a notice stays up before it dismisses itself.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// A toast-style failure message shown on top of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub title: &'static str,
    pub description: &'static str,
}

/// Notices waiting to be shown or dismissed.
///
/// At most one notice per title is kept; raising the same title again
/// replaces the old entry under a fresh id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    next_id: u64,
    notices: Vec<Notice>,
}

impl NoticeBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notice and return its id.
    pub fn raise(&mut self, title: &'static str, description: &'static str) -> u64 {
        self.notices.retain(|notice| notice.title != title);
        self.next_id += 1;
        let id = self.next_id;
        self.notices.push(Notice {
            id,
            title,
            description,
        });
        id
    }

    /// Returns false if the notice was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.id != id);
        self.notices.len() != before
    }

    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notices.len()
    }
}
