use std::cell::{Cell, Ref, RefCell, RefMut};
use std::collections::hash_map::DefaultHasher;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;

use log::trace;

use crate::cyclic_iterator::CyclicIterator;
use crate::errors::*;
use crate::index::*;

/// A list whose positions are addressed modulo its length.
///
/// Any `isize` index is valid on a non-empty list: `-1` is the last element, `len()` is the first
/// one again. Two lists are equal if one is a rotation of the other.
///
/// Mutation goes through `&self` so that any number of [`CyclicIterator`]s may borrow the list at
/// once and observe each other's insertions and removals immediately. Nullable entries are
/// expressed as `CyclicList<Option<U>>`.
pub struct CyclicList<T> {
    items: RefCell<Vec<T>>,
    /// bumped on every structural change, invalidates iterator pointers
    modifications: Cell<u64>,
}

impl<T> CyclicList<T> {
    pub fn new() -> CyclicList<T> {
        CyclicList::from(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Slot of the backing storage addressed by `index`.
    pub fn shift_index(&self, index: isize) -> Result<usize, CyclicListError> {
        normalize(index, self.len()).ok_or(CyclicListError::EmptyCyclicList)
    }

    /// Replaces the element at `index` and returns the previous one.
    pub fn set(&self, index: isize, value: T) -> Result<T, CyclicListError> {
        let slot = self.shift_index(index)?;
        Ok(mem::replace(&mut self.items.borrow_mut()[slot], value))
    }

    /// Inserts `value` so that it is found at `index` afterwards.
    ///
    /// The index is reduced modulo the new length, so on a list of `n` elements both `0` and `n`
    /// are distinct positions: the first prepends, the second appends.
    pub fn insert(&self, index: isize, value: T) {
        let slot = insertion_slot(index, self.len());
        self.insert_slot(slot, value);
    }

    /// Inserts all `values` in order, starting at the slot [`insert`](Self::insert) would use.
    ///
    /// Returns `true` if anything was inserted. `values` is drained before the list is borrowed,
    /// so it may iterate this very list.
    pub fn insert_all<I: IntoIterator<Item = T>>(&self, index: isize, values: I) -> bool {
        let values: Vec<T> = values.into_iter().collect();
        if values.is_empty() {
            return false;
        }
        let inserted = values.len();
        {
            let mut items = self.items.borrow_mut();
            let slot = insertion_slot(index, items.len());
            let tail = items.split_off(slot);
            items.extend(values);
            items.extend(tail);
        }
        self.touch();
        trace!("inserted {inserted} elements at {index}");
        true
    }

    pub fn remove(&self, index: isize) -> Result<T, CyclicListError> {
        let slot = self.shift_index(index)?;
        Ok(self.remove_slot(slot))
    }

    pub fn clear(&self) {
        self.items.borrow_mut().clear();
        self.touch();
    }

    /// Iterator over one full cycle, starting at `index`.
    ///
    /// On an empty list the iterator has neither first index nor current index until something
    /// is added through it.
    pub fn cyclic_iterator(&self, index: isize) -> CyclicIterator<'_, T> {
        CyclicIterator::new(self, index)
    }

    pub fn iter(&self) -> CyclicIterator<'_, T> {
        self.cyclic_iterator(0)
    }

    pub(crate) fn items(&self) -> Ref<'_, Vec<T>> {
        self.items.borrow()
    }

    pub(crate) fn items_mut(&self) -> RefMut<'_, Vec<T>> {
        self.items.borrow_mut()
    }

    pub(crate) fn modifications(&self) -> u64 {
        self.modifications.get()
    }

    pub(crate) fn insert_slot(&self, slot: usize, value: T) {
        self.items.borrow_mut().insert(slot, value);
        self.touch();
        trace!("inserted at slot {slot}, length {}", self.len());
    }

    pub(crate) fn remove_slot(&self, slot: usize) -> T {
        let removed = self.items.borrow_mut().remove(slot);
        self.touch();
        trace!("removed slot {slot}, length {}", self.len());
        removed
    }

    fn touch(&self) {
        self.modifications.set(self.modifications.get().wrapping_add(1));
    }
}

impl<T: Clone> CyclicList<T> {
    pub fn get(&self, index: isize) -> Result<T, CyclicListError> {
        let slot = self.shift_index(index)?;
        Ok(self.items.borrow()[slot].clone())
    }

    /// Unrolls the list into `len` elements starting at index 0, wrapping as often as needed.
    pub fn get_copy(&self, len: isize) -> Result<Vec<T>, CyclicListError> {
        if len < 0 {
            return Err(CyclicListError::NegativeLength(len));
        }
        let items = self.items.borrow();
        if items.is_empty() {
            return if len == 0 { Ok(Vec::new()) } else { Err(CyclicListError::EmptyCyclicList) };
        }
        Ok(items.iter().cycle().take(len as usize).cloned().collect())
    }

    /// The same elements in reverse cyclic order.
    pub fn inverse(&self) -> CyclicList<T> {
        self.items.borrow().iter().rev().cloned().collect()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    /// All elements read linearly starting at `index`.
    pub fn to_vec_from(&self, index: isize) -> Vec<T> {
        let items = self.items.borrow();
        match normalize(index, items.len()) {
            Some(slot) => items[slot..].iter().chain(&items[..slot]).cloned().collect(),
            None => Vec::new(),
        }
    }
}

impl<T: PartialEq> CyclicList<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.items.borrow().contains(value)
    }
}

/// Whether `b` is a rotation of `a`.
fn rotation_equals<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    (0..b.len()).any(|shift| a.iter().zip(b[shift..].iter().chain(&b[..shift])).all(|(x, y)| x == y))
}

impl<T> Default for CyclicList<T> {
    fn default() -> Self {
        CyclicList::new()
    }
}

impl<T> From<Vec<T>> for CyclicList<T> {
    fn from(items: Vec<T>) -> Self {
        CyclicList { items: RefCell::new(items), modifications: Cell::new(0) }
    }
}

impl<T> FromIterator<T> for CyclicList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        CyclicList::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Clone> Clone for CyclicList<T> {
    fn clone(&self) -> Self {
        CyclicList::from(self.to_vec())
    }
}

impl<T: PartialEq> PartialEq for CyclicList<T> {
    fn eq(&self, other: &Self) -> bool {
        rotation_equals(&self.items.borrow(), &other.items.borrow())
    }
}

impl<T: Eq> Eq for CyclicList<T> {}

/// Hashes the multiset of adjacent pairs, which every rotation shares.
impl<T: Hash> Hash for CyclicList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let items = self.items.borrow();
        let len = items.len();
        let pairs = (0..len).fold(0u64, |acc, i| {
            let mut pair = DefaultHasher::new();
            items[i].hash(&mut pair);
            items[(i + 1) % len].hash(&mut pair);
            acc.wrapping_add(pair.finish())
        });
        state.write_usize(len);
        state.write_u64(pairs);
    }
}

impl<T: Debug> Debug for CyclicList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.borrow().iter()).finish()
    }
}

impl<T: Display> Display for CyclicList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<")?;
        for (i, item) in self.items.borrow().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, ">")
    }
}
