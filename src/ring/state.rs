//! Mutable per-call search state.

/// The partially filled ring threaded through the recursion.
///
/// Placement is restore-on-return: the engine calls [`place`](Self::place)
/// before descending and [`unplace`](Self::unplace) after the child
/// returns, so siblings never observe each other's slots.
#[derive(Debug, Clone)]
pub(crate) struct SearchState {
    slots: Vec<usize>,
    placed: Vec<bool>,
    remaining: usize,
    score: u64,
}

impl SearchState {
    /// Fixes `anchor` at slot 0 of an `n`-slot ring.
    pub(crate) fn new(n: usize, anchor: usize) -> Self {
        let mut placed = vec![false; n];
        placed[anchor] = true;
        let mut slots = vec![usize::MAX; n];
        slots[0] = anchor;
        Self {
            slots,
            placed,
            remaining: n - 1,
            score: 0,
        }
    }

    pub(crate) fn slot(&self, pos: usize) -> usize {
        self.slots[pos]
    }

    pub(crate) fn slots(&self) -> &[usize] {
        &self.slots
    }

    /// Score of the edges placed so far (closing edge excluded).
    pub(crate) fn score(&self) -> u64 {
        self.score
    }

    /// Number of unplaced items.
    pub(crate) fn remaining_len(&self) -> usize {
        self.remaining
    }

    /// Unplaced items in ascending index order.
    pub(crate) fn remaining(&self) -> impl Iterator<Item = usize> + '_ {
        self.placed
            .iter()
            .enumerate()
            .filter(|&(_, &p)| !p)
            .map(|(i, _)| i)
    }

    pub(crate) fn place(&mut self, pos: usize, item: usize, gain: u32) {
        debug_assert!(!self.placed[item]);
        self.slots[pos] = item;
        self.placed[item] = true;
        self.remaining -= 1;
        self.score += u64::from(gain);
    }

    pub(crate) fn unplace(&mut self, pos: usize, item: usize, gain: u32) {
        debug_assert_eq!(self.slots[pos], item);
        self.slots[pos] = usize::MAX;
        self.placed[item] = false;
        self.remaining += 1;
        self.score -= u64::from(gain);
    }
}

/// Best complete arrangement seen so far.
///
/// Starts empty (the "no solution" sentinel) and only accepts strictly
/// better scores, so the first-discovered layout wins ties.
#[derive(Debug, Clone, Default)]
pub(crate) struct Incumbent {
    best: Option<(Vec<usize>, u64)>,
}

impl Incumbent {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records `slots` if `total` beats the current best. Returns whether
    /// it did.
    pub(crate) fn offer(&mut self, slots: &[usize], total: u64) -> bool {
        match &self.best {
            Some((_, score)) if total <= *score => false,
            _ => {
                self.best = Some((slots.to_vec(), total));
                true
            }
        }
    }

    pub(crate) fn score(&self) -> Option<u64> {
        self.best.as_ref().map(|(_, s)| *s)
    }

    pub(crate) fn into_order(self) -> Option<Vec<usize>> {
        self.best.map(|(order, _)| order)
    }
}
