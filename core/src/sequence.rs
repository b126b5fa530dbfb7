#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryPolicy {
    Wrap,
    Clamp,
}

/// 1-based cursor; `1 <= index <= len` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexedSequence {
    len: usize,
    index: usize,
    policy: BoundaryPolicy,
}

impl IndexedSequence {
    pub fn new(len: usize, policy: BoundaryPolicy) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            len,
            index: 1,
            policy,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    pub fn contains(&self, index: usize) -> bool {
        (1..=self.len).contains(&index)
    }

    pub fn is_at_first(&self) -> bool {
        self.index == 1
    }

    pub fn is_at_last(&self) -> bool {
        self.index == self.len
    }

    pub fn can_advance(&self) -> bool {
        match self.policy {
            BoundaryPolicy::Wrap => true,
            BoundaryPolicy::Clamp => !self.is_at_last(),
        }
    }

    pub fn can_retreat(&self) -> bool {
        match self.policy {
            BoundaryPolicy::Wrap => true,
            BoundaryPolicy::Clamp => !self.is_at_first(),
        }
    }

    pub fn next_index(&self) -> Option<usize> {
        if self.is_at_last() {
            match self.policy {
                BoundaryPolicy::Wrap => Some(1),
                BoundaryPolicy::Clamp => None,
            }
        } else {
            Some(self.index + 1)
        }
    }

    pub fn previous_index(&self) -> Option<usize> {
        if self.is_at_first() {
            match self.policy {
                BoundaryPolicy::Wrap => Some(self.len),
                BoundaryPolicy::Clamp => None,
            }
        } else {
            Some(self.index - 1)
        }
    }

    pub fn next(&mut self) -> bool {
        match self.next_index() {
            Some(index) => self.go_to(index),
            None => false,
        }
    }

    pub fn previous(&mut self) -> bool {
        match self.previous_index() {
            Some(index) => self.go_to(index),
            None => false,
        }
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        if !self.contains(index) {
            return false;
        }
        self.index = index;
        true
    }

    pub fn reset(&mut self) {
        self.index = 1;
    }
}
