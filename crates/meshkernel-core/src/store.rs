//! A generic arena-of-entities with handle-returning appends and
//! deferred waste collection.
//!
//! spec.md §4.B requires that erasing an entity never invalidate a handle
//! obtained in an earlier iteration, except through an explicit
//! `clear_waste` call. We get this for free from a `Vec`-backed arena that
//! never compacts on removal: `erase` only tombstones a slot and queues it
//! for reuse; `clear_waste` is the sole point where a tombstoned slot
//! becomes eligible for a brand new entity (REDESIGN FLAGS: "Waste
//! collection becomes index compaction or a free-list").

/// Append-only (until waste-collected) arena over raw `usize` slots.
///
/// The typed wrappers in [`crate::Mesh`] (`add_vertex`, `vertex`, ...)
/// convert to/from the `VertexId`/`EdgeId`/`FacetId` newtypes; this type
/// itself only knows about slot indices.
#[derive(Clone, Debug, Default)]
pub struct Store<T> {
    items: Vec<T>,
    dead: Vec<bool>,
    waste: Vec<usize>,
    free: Vec<usize>,
}

impl<T> Store<T> {
    pub fn new() -> Self {
        Self { items: Vec::new(), dead: Vec::new(), waste: Vec::new(), free: Vec::new() }
    }

    /// Insert `value`, returning its slot index. Reuses a waste-collected
    /// slot if one is available, else appends a fresh one.
    pub fn append(&mut self, value: T) -> usize {
        if let Some(idx) = self.free.pop() {
            self.items[idx] = value;
            self.dead[idx] = false;
            idx
        } else {
            self.items.push(value);
            self.dead.push(false);
            self.items.len() - 1
        }
    }

    pub fn get(&self, idx: usize) -> &T {
        &self.items[idx]
    }

    pub fn get_mut(&mut self, idx: usize) -> &mut T {
        &mut self.items[idx]
    }

    /// `false` once `erase` has queued this slot, even before `clear_waste`
    /// runs.
    pub fn is_live(&self, idx: usize) -> bool {
        !self.dead[idx]
    }

    /// Queue `idx` for removal. The slot's value is left untouched (so any
    /// handle taken before this call keeps dereferencing to the same data)
    /// until the next `clear_waste`.
    pub fn erase(&mut self, idx: usize) {
        if !self.dead[idx] {
            self.dead[idx] = true;
            self.waste.push(idx);
        }
    }

    /// Make every queued slot eligible for reuse by a future `append`.
    pub fn clear_waste(&mut self) {
        self.free.append(&mut self.waste);
    }

    pub fn len_live(&self) -> usize {
        self.dead.iter().filter(|d| !**d).count()
    }

    pub fn capacity_len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over `(slot index, value)` for live entries, in insertion
    /// order (waste-collected-then-reused slots iterate as whatever was
    /// most recently appended into them, same as any other live entry).
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.items.iter().enumerate().filter(move |&(i, _)| !self.dead[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_returns_sequential_slots() {
        let mut s = Store::new();
        assert_eq!(s.append("a"), 0);
        assert_eq!(s.append("b"), 1);
    }

    #[test]
    fn get_returns_appended_value() {
        let mut s = Store::new();
        let idx = s.append(42);
        assert_eq!(*s.get(idx), 42);
    }

    #[test]
    fn new_slot_is_live() {
        let mut s = Store::new();
        let idx = s.append(1);
        assert!(s.is_live(idx));
    }

    #[test]
    fn erase_marks_dead_immediately() {
        let mut s = Store::new();
        let idx = s.append(1);
        s.erase(idx);
        assert!(!s.is_live(idx));
    }

    #[test]
    fn erased_slot_still_readable_before_clear_waste() {
        let mut s = Store::new();
        let idx = s.append(99);
        s.erase(idx);
        assert_eq!(*s.get(idx), 99);
    }

    #[test]
    fn erase_is_idempotent() {
        let mut s = Store::new();
        let idx = s.append(1);
        s.erase(idx);
        s.erase(idx);
        s.clear_waste();
        // Only queued once despite two erase() calls.
        assert_eq!(s.append(2), idx);
        assert_eq!(s.append(3), 1);
    }

    #[test]
    fn clear_waste_frees_slot_for_reuse() {
        let mut s = Store::new();
        let idx = s.append(1);
        s.erase(idx);
        assert_eq!(s.append(2), 1); // not reused yet
        s.clear_waste();
        assert_eq!(s.append(3), idx); // now reused
    }

    #[test]
    fn handle_taken_before_clear_waste_stays_valid_through_other_erasures() {
        let mut s = Store::new();
        let a = s.append("a");
        let b = s.append("b");
        s.erase(b);
        // `a` is unaffected by erasing a different slot.
        assert_eq!(*s.get(a), "a");
    }

    #[test]
    fn iter_skips_dead_entries() {
        let mut s = Store::new();
        let a = s.append(1);
        let b = s.append(2);
        s.erase(a);
        let live: Vec<_> = s.iter().map(|(i, v)| (i, *v)).collect();
        assert_eq!(live, vec![(b, 2)]);
    }

    #[test]
    fn len_live_excludes_erased() {
        let mut s = Store::new();
        s.append(1);
        let b = s.append(2);
        assert_eq!(s.len_live(), 2);
        s.erase(b);
        assert_eq!(s.len_live(), 1);
    }
}
