//! Not-Recently-Used (NRU) Replacement.
//!
//! NRU approximates LRU with a single reference bit per way. The bit is set on every
//! hit and cleared for the whole cache by a periodic sweep. When a line must be
//! installed, each way in the target set is sorted into one of five classes and the
//! first way of the best class is evicted:
//!
//! | Priority | valid | reference | dirty |
//! |----------|-------|-----------|-------|
//! | 1        | 0     | -         | -     |
//! | 2        | 1     | 0         | 0     |
//! | 3        | 1     | 0         | 1     |
//! | 4        | 1     | 1         | 0     |
//! | 5        | 1     | 1         | 1     |
//!
//! Clean lines are preferred within each reference class because evicting them costs
//! no write-back.
//!
//! # Performance
//!
//! - **Time Complexity:** O(W) per victim selection, one pass over the set.
//! - **Space Complexity:** One bit per way, on top of the valid/dirty bits a write-back
//!   cache already keeps.

/// Replacement class of a single way, ordered from most to least preferred victim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NruClass {
    /// Free slot.
    Invalid,
    /// Not referenced since the last sweep, clean.
    Unreferenced,
    /// Not referenced since the last sweep, dirty.
    UnreferencedDirty,
    /// Referenced since the last sweep, clean.
    Referenced,
    /// Referenced since the last sweep, dirty.
    ReferencedDirty,
}

impl NruClass {
    /// Classifies a way from its state bits.
    pub const fn of(valid: bool, referenced: bool, dirty: bool) -> Self {
        match (valid, referenced, dirty) {
            (false, _, _) => Self::Invalid,
            (true, false, false) => Self::Unreferenced,
            (true, false, true) => Self::UnreferencedDirty,
            (true, true, false) => Self::Referenced,
            (true, true, true) => Self::ReferencedDirty,
        }
    }
}

/// Picks the victim way for a set.
///
/// Scans left to right. The first invalid way wins immediately; otherwise the first way
/// of the best class found is returned. When every way is referenced and dirty, way 0
/// is evicted.
///
/// # Arguments
///
/// * `classes` - The class of each way in the set, in way order.
pub fn select_victim(classes: impl IntoIterator<Item = NruClass>) -> usize {
    let mut best: Option<(usize, NruClass)> = None;
    for (way, class) in classes.into_iter().enumerate() {
        if class == NruClass::Invalid {
            return way;
        }
        if class != NruClass::ReferencedDirty && best.is_none_or(|(_, current)| class < current) {
            best = Some((way, class));
        }
    }
    best.map_or(0, |(way, _)| way)
}
