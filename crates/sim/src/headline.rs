use sambucks_core::Story;

/// Wraparound cursor over the story list for the breaking banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineRotator {
    stories: Vec<Story>,
    cursor: usize,
}

impl HeadlineRotator {
    pub fn new(stories: Vec<Story>) -> Self {
        Self { stories, cursor: 0 }
    }

    /// Story at the cursor, then move the cursor on. `None` only when
    /// there are no stories at all.
    pub fn advance(&mut self) -> Option<&Story> {
        if self.stories.is_empty() {
            return None;
        }
        let index = self.cursor % self.stories.len();
        self.cursor = self.cursor.wrapping_add(1);
        Some(&self.stories[index])
    }

    /// Number of rotations so far
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Story most recently returned by [`advance`](Self::advance)
    pub fn current(&self) -> Option<&Story> {
        if self.stories.is_empty() || self.cursor == 0 {
            return None;
        }
        self.stories.get((self.cursor - 1) % self.stories.len())
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }
}
