/// Set of word lengths seen among the known sample words.
/// Backed by a bitmap that grows to the longest length recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthPresence {
    present: Vec<bool>,
}

impl LengthPresence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, len: usize) {
        if len >= self.present.len() {
            self.present.resize(len + 1, false);
        }
        self.present[len] = true;
    }

    pub fn contains(&self, len: usize) -> bool {
        self.present.get(len).copied().unwrap_or(false)
    }

    /// Longest recorded length, if any
    pub fn max_len(&self) -> Option<usize> {
        self.present.iter().rposition(|&p| p)
    }

    pub fn is_empty(&self) -> bool {
        self.max_len().is_none()
    }

    /// Recorded lengths in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.present
            .iter()
            .enumerate()
            .filter_map(|(len, &p)| p.then_some(len))
    }
}

impl FromIterator<usize> for LengthPresence {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut presence = LengthPresence::new();
        for len in iter {
            presence.insert(len);
        }
        presence
    }
}
