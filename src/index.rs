//! Index arithmetic shared by the cyclic list and its iterators.

/// Reduces an arbitrary index into `0..len`. `None` for `len == 0`.
pub(crate) fn normalize(index: isize, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        // len fits into isize for any allocated Vec
        Some(index.rem_euclid(len as isize) as usize)
    }
}

/// Slot at which an element inserted at `index` lands in a list that had `len` elements.
///
/// Reduction is modulo `len + 1`, so both `0` and `len` are reachable and the new element
/// is found at `index` afterwards.
pub(crate) fn insertion_slot(index: isize, len: usize) -> usize {
    index.rem_euclid(len as isize + 1) as usize
}

/// Where `slot` ends up once the element at `removed` is taken out, leaving `len` elements.
pub(crate) fn after_removal(slot: usize, removed: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if slot > removed {
        (slot - 1) % len
    } else {
        slot % len
    }
}

/// Slot `offset` positions after `slot`, wrapping at `len`.
pub(crate) fn forward(slot: usize, offset: usize, len: usize) -> usize {
    debug_assert_ne!(len, 0);
    (slot % len + offset % len) % len
}

/// Slot `offset` positions before `slot`, wrapping at `len`.
pub(crate) fn backward(slot: usize, offset: usize, len: usize) -> usize {
    debug_assert_ne!(len, 0);
    (slot % len + len - offset % len) % len
}
