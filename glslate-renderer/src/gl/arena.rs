use std::{fmt, marker::PhantomData};

/// Generation-checked index into an [`Arena`].
///
/// Handles stay `Copy` so callers can pass them around freely; a handle
/// whose slot has since been released resolves to `None` instead of
/// aliasing whatever object reuses the slot.
pub struct Handle<T> {
    index: u32,
    generation: u32,
    _kind: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    fn new(index: u32, generation: u32) -> Self {
        Self { index, generation, _kind: PhantomData }
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.generation == other.generation
    }
}

impl<T> Eq for Handle<T> {}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({}v{})", self.index, self.generation)
    }
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Arena allocator for externally owned graphics objects.
///
/// Slots are recycled after removal with a bumped generation, so stale
/// handles from a previous occupant never resolve.
#[derive(Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self { slots: Vec::new(), free: Vec::new() }
    }

    pub fn insert(&mut self, value: T) -> Handle<T> {
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.value = Some(value);
                Handle::new(index, slot.generation)
            },
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot { generation: 0, value: Some(value) });
                Handle::new(index, 0)
            },
        }
    }

    pub fn get(&self, handle: Handle<T>) -> Option<&T> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.value.as_ref())
    }

    pub fn remove(&mut self, handle: Handle<T>) -> Option<T> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }

        let value = slot.value.take()?;
        slot.generation += 1;
        self.free.push(handle.index);
        Some(value)
    }

    /// Empties every slot, invalidating all outstanding handles.
    pub fn drain(&mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len());
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let Some(value) = slot.value.take() {
                slot.generation += 1;
                self.free.push(index as u32);
                values.push(value);
            }
        }
        values
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.value.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut arena = Arena::new();
        let a = arena.insert("alpha");
        let b = arena.insert("beta");

        assert_eq!(arena.get(a), Some(&"alpha"));
        assert_eq!(arena.get(b), Some(&"beta"));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_remove_invalidates_handle() {
        let mut arena = Arena::new();
        let handle = arena.insert(7);

        assert_eq!(arena.remove(handle), Some(7));
        assert_eq!(arena.get(handle), None);
        assert_eq!(arena.remove(handle), None);
        assert!(arena.is_empty());
    }

    #[test]
    fn test_stale_handle_after_slot_reuse() {
        let mut arena = Arena::new();
        let old = arena.insert(1);
        arena.remove(old);

        // reuses the slot with a new generation
        let new = arena.insert(2);
        assert_ne!(old, new);
        assert_eq!(arena.get(old), None);
        assert_eq!(arena.get(new), Some(&2));
    }

    #[test]
    fn test_drain_empties_and_invalidates() {
        let mut arena = Arena::new();
        let a = arena.insert(10);
        let b = arena.insert(20);

        let mut values = arena.drain();
        values.sort();
        assert_eq!(values, vec![10, 20]);
        assert!(arena.is_empty());
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.get(b), None);

        // drained slots are reusable
        let c = arena.insert(30);
        assert_eq!(arena.get(c), Some(&30));
    }
}
