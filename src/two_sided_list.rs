use std::collections::VecDeque;
use std::fmt::{Display, Formatter};
use std::iter;
use std::ops::{Index, IndexMut};

use log::trace;

use crate::direction::Direction;
use crate::errors::*;

/// A list whose logical indices start at an arbitrary `first_index` instead of 0.
///
/// Element `i` (for `first_index <= i < end_index`) lives in physical slot `i - first_index`.
/// The list grows and shrinks at both ends; operations in the middle take a [`Direction`] that
/// decides which side shifts. With `Left2Right` the left end is anchored and `first_index` stays
/// put, with `Right2Left` the right end is anchored and `first_index` absorbs the size change.
///
/// Unlike [`CyclicList`](crate::CyclicList), equality compares `first_index` too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TwoSidedList<T> {
    items: VecDeque<T>,
    first_index: isize,
}

impl<T> TwoSidedList<T> {
    pub fn new() -> TwoSidedList<T> {
        TwoSidedList::with_first_index(0)
    }

    pub fn with_first_index(first_index: isize) -> TwoSidedList<T> {
        TwoSidedList { items: VecDeque::new(), first_index }
    }

    /// `items` numbered from `first_index` on.
    pub fn starting_at<I: IntoIterator<Item = T>>(first_index: isize, items: I) -> TwoSidedList<T> {
        TwoSidedList { items: items.into_iter().collect(), first_index }
    }

    pub fn first_index(&self) -> isize {
        self.first_index
    }

    pub fn end_index(&self) -> isize {
        self.first_index + self.items.len() as isize
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.back()
    }

    fn slot(&self, index: isize) -> Option<usize> {
        if index >= self.first_index && index < self.end_index() {
            Some((index - self.first_index) as usize)
        } else {
            None
        }
    }

    pub fn get(&self, index: isize) -> Result<&T, TwoSidedListError> {
        self.slot(index).and_then(|slot| self.items.get(slot)).ok_or(TwoSidedListError::IndexOutOfRange(index))
    }

    pub fn get_mut(&mut self, index: isize) -> Result<&mut T, TwoSidedListError> {
        match self.slot(index) {
            Some(slot) => self.items.get_mut(slot).ok_or(TwoSidedListError::IndexOutOfRange(index)),
            None => Err(TwoSidedListError::IndexOutOfRange(index)),
        }
    }

    pub fn set(&mut self, index: isize, value: T) -> Result<T, TwoSidedListError> {
        Ok(std::mem::replace(self.get_mut(index)?, value))
    }

    pub fn add_first(&mut self, value: T) {
        self.items.push_front(value);
        self.first_index -= 1;
    }

    pub fn add_last(&mut self, value: T) {
        self.items.push_back(value);
    }

    pub fn remove_first(&mut self) -> Option<T> {
        let removed = self.items.pop_front()?;
        self.first_index += 1;
        Some(removed)
    }

    pub fn remove_last(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Inserts `values` in front, keeping their order. Returns `true` if anything was added.
    pub fn add_all_first<I: IntoIterator<Item = T>>(&mut self, values: I) -> bool {
        let values: Vec<T> = values.into_iter().collect();
        let count = values.len();
        values.into_iter().rev().for_each(|value| self.items.push_front(value));
        self.first_index -= count as isize;
        count > 0
    }

    /// Appends `values`, keeping their order. Returns `true` if anything was added.
    pub fn add_all_last<I: IntoIterator<Item = T>>(&mut self, values: I) -> bool {
        let len = self.items.len();
        self.items.extend(values);
        self.items.len() > len
    }

    /// Inserts `value` so that it is found at `index` afterwards.
    ///
    /// With `Left2Right` the elements from `index` on move right and `index` may range over
    /// `first_index..=end_index`. With `Right2Left` the elements up to `index` move left, `first_index`
    /// decreases, and `index` may range over `first_index - 1..end_index`.
    pub fn add(&mut self, index: isize, value: T, direction: Direction) -> Result<(), TwoSidedListError> {
        self.add_all(index, iter::once(value), direction).map(|_| ())
    }

    /// Inserts `values` in order. With `Left2Right` the block starts at `index`, with `Right2Left`
    /// it ends at `index`. Returns `true` if anything was added.
    pub fn add_all<I: IntoIterator<Item = T>>(
        &mut self,
        index: isize,
        values: I,
        direction: Direction,
    ) -> Result<bool, TwoSidedListError> {
        let boundary = match direction {
            Direction::Left2Right => index,
            Direction::Right2Left => index + 1,
        };
        if boundary < self.first_index || boundary > self.end_index() {
            return Err(TwoSidedListError::IndexOutOfRange(index));
        }

        let len = self.items.len();
        let mut tail = self.items.split_off((boundary - self.first_index) as usize);
        self.items.extend(values);
        self.items.append(&mut tail);
        let added = self.items.len() - len;

        if direction == Direction::Right2Left {
            self.first_index -= added as isize;
        }
        trace!("added {added} elements at {index} ({direction:?}), first index {}", self.first_index);
        Ok(added > 0)
    }

    /// Removes the element at `index`. The elements after it move left whatever the direction,
    /// which only steers the bulk removals.
    pub fn remove(&mut self, index: isize, _direction: Direction) -> Result<T, TwoSidedListError> {
        self.slot(index).and_then(|slot| self.items.remove(slot)).ok_or(TwoSidedListError::IndexOutOfRange(index))
    }

    /// Renumbers the elements: every logical index grows by `shift`.
    pub fn shift_right(&mut self, shift: isize) {
        self.first_index += shift;
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    pub fn indexed(&self) -> impl Iterator<Item = (isize, &T)> + '_ {
        let first_index = self.first_index;
        self.items.iter().enumerate().map(move |(slot, item)| (first_index + slot as isize, item))
    }

    /// Bidirectional iterator whose first `next` returns the element at `index`.
    pub fn list_iterator(&self, index: isize) -> Result<ListIterator<'_, T>, TwoSidedListError> {
        if index < self.first_index || index > self.end_index() {
            return Err(TwoSidedListError::IndexOutOfRange(index));
        }
        Ok(ListIterator { list: self, position: index })
    }

    fn retain_directed<F: FnMut(&T) -> bool>(&mut self, keep: F, direction: Direction) -> bool {
        let len = self.items.len();
        self.items.retain(keep);
        let removed = len - self.items.len();
        if direction == Direction::Right2Left {
            self.first_index += removed as isize;
        }
        if removed > 0 {
            trace!("removed {removed} elements ({direction:?}), first index {}", self.first_index);
        }
        removed > 0
    }
}

impl<T: PartialEq> TwoSidedList<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    pub fn index_of(&self, value: &T) -> Option<isize> {
        self.items.iter().position(|item| item == value).map(|slot| self.first_index + slot as isize)
    }

    pub fn last_index_of(&self, value: &T) -> Option<isize> {
        self.items.iter().rposition(|item| item == value).map(|slot| self.first_index + slot as isize)
    }

    /// Removes every element equal to one of `values`. Returns `true` if anything was removed.
    pub fn remove_all(&mut self, values: &[T], direction: Direction) -> bool {
        self.retain_directed(|item| !values.contains(item), direction)
    }

    /// Keeps only elements equal to one of `values`. Returns `true` if anything was removed.
    pub fn retain_all(&mut self, values: &[T], direction: Direction) -> bool {
        self.retain_directed(|item| values.contains(item), direction)
    }
}

impl<T: Clone> TwoSidedList<T> {
    /// Copy of the logical range `from..to`, keeping its numbering.
    pub fn sub_list(&self, from: isize, to: isize) -> Result<TwoSidedList<T>, TwoSidedListError> {
        if from > to || from < self.first_index || to > self.end_index() {
            return Err(TwoSidedListError::InvalidRange(from, to));
        }
        let range = (from - self.first_index) as usize..(to - self.first_index) as usize;
        Ok(TwoSidedList::starting_at(from, self.items.range(range).cloned()))
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T> From<Vec<T>> for TwoSidedList<T> {
    fn from(items: Vec<T>) -> Self {
        TwoSidedList { items: items.into(), first_index: 0 }
    }
}

impl<T> FromIterator<T> for TwoSidedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        TwoSidedList::starting_at(0, iter)
    }
}

impl<T> Index<isize> for TwoSidedList<T> {
    type Output = T;

    fn index(&self, index: isize) -> &Self::Output {
        let Ok(item) = self.get(index) else {
            panic!("index {index} out of range {}..{}", self.first_index, self.end_index());
        };
        item
    }
}

impl<T> IndexMut<isize> for TwoSidedList<T> {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        let (first_index, end_index) = (self.first_index, self.end_index());
        let Ok(item) = self.get_mut(index) else {
            panic!("index {index} out of range {first_index}..{end_index}");
        };
        item
    }
}

impl<T: Display> Display for TwoSidedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:[", self.first_index)?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

/// Bidirectional iterator over a [`TwoSidedList`], positioned between two logical indices.
#[derive(Debug, Clone)]
pub struct ListIterator<'a, T> {
    list: &'a TwoSidedList<T>,
    /// logical index of the element `next` returns
    position: isize,
}

impl<'a, T> ListIterator<'a, T> {
    pub fn has_next(&self) -> bool {
        self.position < self.list.end_index()
    }

    pub fn has_previous(&self) -> bool {
        self.position > self.list.first_index()
    }

    pub fn next_index(&self) -> isize {
        self.position
    }

    pub fn previous_index(&self) -> isize {
        self.position - 1
    }

    pub fn previous(&mut self) -> Option<&'a T> {
        let item = self.list.get(self.position - 1).ok()?;
        self.position -= 1;
        Some(item)
    }
}

impl<'a, T> Iterator for ListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let item = self.list.get(self.position).ok()?;
        self.position += 1;
        Some(item)
    }
}
