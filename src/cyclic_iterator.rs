use std::fmt::{Debug, Display, Formatter};
use std::mem;

use enum_map::{enum_map, EnumMap};
use log::trace;

use crate::cyclic_list::CyclicList;
use crate::direction::Direction;
use crate::errors::*;
use crate::index::*;

/// Bidirectional cursor over one cycle of a [`CyclicList`].
///
/// The cursor sits between two elements; [`index`](Self::index) is the slot `try_next` would return.
/// Starting at the first index, the iterator can move forward over every element exactly once,
/// and move back over what it has passed. The remaining budget per direction is its traversal
/// window; [`refresh`](Self::refresh) restarts a full window from the current position.
///
/// Several iterators may share a list. Structural changes made through any of them, or through
/// the list, are visible to all, and invalidate the set/remove pointer of every iterator. When the
/// list shrinks underneath an iterator its window shrinks with it, so it never covers more than
/// one cycle.
pub struct CyclicIterator<'a, T> {
    list: &'a CyclicList<T>,
    /// rotation origin of the current window
    first: usize,
    cursor: usize,
    window: EnumMap<Direction, usize>,
    pointer: Option<Pointer>,
}

/// The element last returned by `try_next`/`try_previous`.
#[derive(Debug, Copy, Clone)]
struct Pointer {
    slot: usize,
    moved: Direction,
    modifications: u64,
}

impl<'a, T> CyclicIterator<'a, T> {
    pub(crate) fn new(list: &'a CyclicList<T>, index: isize) -> CyclicIterator<'a, T> {
        let len = list.len();
        let first = normalize(index, len).unwrap_or(0);
        CyclicIterator { list, first, cursor: first, window: full_window(len), pointer: None }
    }

    pub fn cyclic_list(&self) -> &'a CyclicList<T> {
        self.list
    }

    /// Origin of the traversal window, `None` while the list is empty.
    pub fn first_index(&self) -> Option<usize> {
        let len = self.list.len();
        if len == 0 {
            None
        } else {
            Some(self.first % len)
        }
    }

    /// Slot of the element the next forward step returns, `None` while the list is empty.
    ///
    /// This is the slot after the element last returned by `try_next`, not that element's slot.
    pub fn index(&self) -> Option<usize> {
        let len = self.list.len();
        if len == 0 {
            None
        } else {
            Some(self.cursor % len)
        }
    }

    /// Moves the cursor to `index` (modulo the length) without touching the window.
    /// No-op on an empty list.
    pub fn set_index(&mut self, index: isize) {
        if let Some(slot) = normalize(index, self.list.len()) {
            self.cursor = slot;
            self.pointer = None;
        }
    }

    /// Restarts a full one-cycle window at the current position.
    pub fn refresh(&mut self) {
        let len = self.list.len();
        self.first = if len == 0 { 0 } else { self.cursor % len };
        self.cursor = self.first;
        self.window = full_window(len);
        trace!("refreshed window at {}, length {len}", self.first);
    }

    /// Remaining steps in each direction.
    pub fn window(&self) -> EnumMap<Direction, usize> {
        bounded(self.window, self.list.len())
    }

    pub fn has_next(&self) -> bool {
        self.has(Direction::Left2Right)
    }

    pub fn has_prev(&self) -> bool {
        self.has(Direction::Right2Left)
    }

    fn has(&self, direction: Direction) -> bool {
        self.window()[direction] > 0
    }

    /// Inserts `value` just before the cursor, so `try_previous` would return it.
    pub fn add(&mut self, value: T) {
        let list = self.list;
        let len = list.len();
        let (slot, first) = if len == 0 { (0, 0) } else { (self.cursor % len, self.first % len) };
        self.window = bounded(self.window, len);
        list.insert_slot(slot, value);

        // inserting at the origin with nothing behind the cursor makes the new element the origin
        self.first = if first > slot || (first == slot && self.window[Direction::Right2Left] > 0) {
            first + 1
        } else {
            first
        };
        self.cursor = forward(slot, 1, len + 1);
        self.window[Direction::Right2Left] += 1;
        self.pointer = None;
    }

    /// Inserts all `values` before the cursor, keeping their order.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        values.into_iter().for_each(|value| self.add(value));
    }

    /// Overwrites the element last returned and gives back the old one.
    pub fn set(&mut self, value: T) -> Result<T, CyclicListError> {
        let pointer = self.live_pointer().ok_or(CyclicListError::NoPointerToSet)?;
        Ok(mem::replace(&mut self.list.items_mut()[pointer.slot], value))
    }

    /// Removes the element last returned. The pointer is gone until the next step.
    pub fn remove(&mut self) -> Result<T, CyclicListError> {
        let pointer = self.live_pointer().ok_or(CyclicListError::NoPointerToRemove)?;
        let list = self.list;
        let old_len = list.len();
        let (cursor, first) = (self.cursor % old_len, self.first % old_len);
        self.window = bounded(self.window, old_len);

        let removed = list.remove_slot(pointer.slot);
        let len = old_len - 1;
        self.cursor = after_removal(cursor, pointer.slot, len);
        self.first = after_removal(first, pointer.slot, len);
        // the removed element is behind us with respect to the last move
        let behind = pointer.moved.reverse();
        self.window[behind] = self.window[behind].saturating_sub(1);
        self.pointer = None;
        Ok(removed)
    }

    /// Slot of the first occurrence of `value` among the elements still ahead in the window.
    pub fn get_next_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let items = self.list.items();
        self.remaining_slots(items.len()).into_iter().find(|&slot| items[slot] == *value)
    }

    /// Whether both iterators still have the same elements ahead, regardless of where they are.
    pub fn ret_equals(&self, other: &CyclicIterator<'_, T>) -> bool
    where
        T: PartialEq,
    {
        let (items, other_items) = (self.list.items(), other.list.items());
        let (slots, other_slots) = (self.remaining_slots(items.len()), other.remaining_slots(other_items.len()));
        slots.len() == other_slots.len() && slots.iter().zip(&other_slots).all(|(&a, &b)| items[a] == other_items[b])
    }

    fn remaining_slots(&self, len: usize) -> Vec<usize> {
        if len == 0 {
            return Vec::new();
        }
        (0..bounded(self.window, len)[Direction::Left2Right]).map(|offset| forward(self.cursor, offset, len)).collect()
    }

    fn live_pointer(&self) -> Option<Pointer> {
        self.pointer.filter(|pointer| pointer.modifications == self.list.modifications())
    }
}

impl<T: Clone> CyclicIterator<'_, T> {
    pub fn try_next(&mut self) -> Result<T, CyclicListError> {
        self.step(Direction::Left2Right)
    }

    pub fn try_previous(&mut self) -> Result<T, CyclicListError> {
        self.step(Direction::Right2Left)
    }

    fn step(&mut self, direction: Direction) -> Result<T, CyclicListError> {
        if !self.has(direction) {
            return Err(CyclicListError::NoSuchElement);
        }
        let list = self.list;
        let items = list.items();
        let len = items.len();
        self.window = bounded(self.window, len);
        let slot = match direction {
            Direction::Left2Right => {
                let slot = self.cursor % len;
                self.cursor = forward(slot, 1, len);
                slot
            }
            Direction::Right2Left => {
                self.cursor = backward(self.cursor, 1, len);
                self.cursor
            }
        };
        self.window[direction] -= 1;
        self.window[direction.reverse()] += 1;
        self.pointer = Some(Pointer { slot, moved: direction, modifications: list.modifications() });
        Ok(items[slot].clone())
    }
}

/// Fits a window into a list of `len` elements: steps behind the cursor come first, and the two
/// directions together never exceed `len`.
fn bounded(window: EnumMap<Direction, usize>, len: usize) -> EnumMap<Direction, usize> {
    let behind = window[Direction::Right2Left].min(len);
    enum_map! {
        Direction::Left2Right => window[Direction::Left2Right].min(len - behind),
        Direction::Right2Left => behind,
    }
}

fn full_window(len: usize) -> EnumMap<Direction, usize> {
    enum_map! {
        Direction::Left2Right => len,
        Direction::Right2Left => 0,
    }
}

impl<T: Clone> Iterator for CyclicIterator<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.window()[Direction::Left2Right];
        (remaining, Some(remaining))
    }
}

impl<T> Clone for CyclicIterator<'_, T> {
    fn clone(&self) -> Self {
        CyclicIterator {
            list: self.list,
            first: self.first,
            cursor: self.cursor,
            window: self.window,
            pointer: self.pointer,
        }
    }
}

/// Equal lists (up to rotation) with iterators at the same first index, index and window.
impl<T: PartialEq> PartialEq for CyclicIterator<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
            && self.first_index() == other.first_index()
            && self.index() == other.index()
            && self.window() == other.window()
    }
}

impl<T: Debug> Debug for CyclicIterator<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CyclicIterator")
            .field("first", &self.first_index())
            .field("index", &self.index())
            .field("window", &self.window())
            .field("list", self.list)
            .finish()
    }
}

impl<T: Display> Display for CyclicIterator<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fn slot(index: Option<usize>) -> String {
            index.map_or_else(|| "-".to_string(), |i| i.to_string())
        }

        write!(
            f,
            "CyclicIterator(first: {}, index: {}, ahead: {}, behind: {}, list: {})",
            slot(self.first_index()),
            slot(self.index()),
            self.window()[Direction::Left2Right],
            self.window()[Direction::Right2Left],
            self.list
        )
    }
}
