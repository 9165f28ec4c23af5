use crate::constants::FIRST_GENERATION;

/// Slot arena with generation-checked access.
/// - Insert: reuse a freed slot if any, otherwise append
/// - Remove: take the value out, bump the slot generation, push the slot on the free list
///   (a slot at `u32::MAX` is retired instead)
///
/// Stale `(index, generation)` pairs simply fail to resolve.
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,    // every slot ever allocated
    free: Vec<u32>,         // vacant slot indices, reused LIFO
    len: usize,             // occupied slots
}

struct Slot<T> {
    generation: u32,        // generation of the current (or next) occupant
    value: Option<T>,
}

impl<T> Arena<T> {
    /// Create an empty arena with room for `capacity` slots
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { slots: Vec::with_capacity(capacity), free: Vec::new(), len: 0 }
    }

    /// Insert a value built from its own `(index, generation)`
    pub(crate) fn insert_with(&mut self, build: impl FnOnce(u32, u32) -> T) -> (u32, u32) {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = Some(build(index, slot.generation));
            return (index, slot.generation);
        }
        let index = u32::try_from(self.slots.len()).expect("arena exceeded u32::MAX slots");
        self.slots.push(Slot { generation: FIRST_GENERATION, value: Some(build(index, FIRST_GENERATION)) });
        (index, FIRST_GENERATION)
    }

    #[inline]
    pub(crate) fn get(&self, index: u32, generation: u32) -> Option<&T> {
        match self.slots.get(index as usize) {
            Some(slot) if slot.generation == generation => slot.value.as_ref(),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, index: u32, generation: u32) -> Option<&mut T> {
        match self.slots.get_mut(index as usize) {
            Some(slot) if slot.generation == generation => slot.value.as_mut(),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn contains(&self, index: u32, generation: u32) -> bool {
        self.get(index, generation).is_some()
    }

    /// Take the value out of a live slot. Returns `None` for stale pairs.
    pub(crate) fn remove(&mut self, index: u32, generation: u32) -> Option<T> {
        let slot = self.slots.get_mut(index as usize)?;
        if slot.generation != generation {
            return None;
        }
        let value = slot.value.take()?;
        self.len -= 1;
        // A slot whose generation is exhausted is retired, never reused
        if let Some(next) = slot.generation.checked_add(1) {
            slot.generation = next;
            self.free.push(index);
        }
        Some(value)
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Occupied slots in index order
    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.iter().filter_map(|slot| slot.value.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove() {
        let mut arena = Arena::with_capacity(4);
        let (i, g) = arena.insert_with(|_, _| "a");
        assert_eq!(arena.get(i, g), Some(&"a"));
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.remove(i, g), Some("a"));
        assert_eq!(arena.len(), 0);
        assert!(arena.get(i, g).is_none());
    }

    #[test]
    fn reused_slot_gets_new_generation() {
        let mut arena = Arena::with_capacity(1);
        let (i1, g1) = arena.insert_with(|_, _| 1);
        arena.remove(i1, g1);
        let (i2, g2) = arena.insert_with(|_, _| 2);
        assert_eq!(i1, i2);
        assert_ne!(g1, g2);
        assert!(arena.get(i1, g1).is_none());
        assert_eq!(arena.get(i2, g2), Some(&2));
    }

    #[test]
    fn double_remove_is_none() {
        let mut arena = Arena::with_capacity(1);
        let (i, g) = arena.insert_with(|_, _| ());
        assert!(arena.remove(i, g).is_some());
        assert!(arena.remove(i, g).is_none());
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn builder_sees_its_own_slot() {
        let mut arena = Arena::with_capacity(2);
        let (i, g) = arena.insert_with(|i, g| (i, g));
        assert_eq!(arena.get(i, g), Some(&(i, g)));
        assert_eq!(arena.iter().count(), 1);
    }

    #[test]
    fn exhausted_slot_is_retired() {
        let mut arena = Arena::with_capacity(2);
        let (i, _) = arena.insert_with(|_, _| "old");
        arena.slots[i as usize].generation = u32::MAX;

        assert_eq!(arena.remove(i, u32::MAX), Some("old"));
        assert!(arena.free.is_empty());
        assert_eq!(arena.len(), 0);

        let (j, g) = arena.insert_with(|_, _| "new");
        assert_ne!(i, j);
        assert_eq!(g, FIRST_GENERATION);
        assert!(arena.get(i, u32::MAX).is_none());
        assert!(arena.get(i, FIRST_GENERATION).is_none());
        assert_eq!(arena.get(j, g), Some(&"new"));
    }
}
