use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::panic;

use rand::{thread_rng, Rng, RngCore, SeedableRng};
use rand_pcg::Pcg64;

use ::cyclic_list::{CyclicList, CyclicListError, Direction};

fn check<F: Fn(u64) + panic::RefUnwindSafe>(iterations: usize, property: F) {
    let mut rng = thread_rng();
    for i in 0..iterations {
        let seed = rng.next_u64();
        let result = panic::catch_unwind(|| property(seed));
        if result.is_err() {
            dbg!(i, seed);
            panic!();
        }
    }
}

fn random_list(rng: &mut Pcg64, max_len: usize) -> Vec<Option<u8>> {
    let len = rng.gen_range(0..=max_len);
    // small alphabet so that rotations of repetitive lists show up
    (0..len).map(|_| if rng.gen_bool(0.1) { None } else { Some(rng.gen_range(0..4)) }).collect()
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn rotation_invariance() {
    check(500, |seed| {
        let mut rng = Pcg64::seed_from_u64(seed);
        let list = CyclicList::from(random_list(&mut rng, 12));
        let shift = rng.gen_range(-30isize..30);

        let rotated = CyclicList::from(list.to_vec_from(shift));
        assert_eq!(list, rotated);
        assert_eq!(hash_of(&list), hash_of(&rotated));
        assert_eq!(rotated.get(0).ok(), list.get(shift).ok());
    });
}

#[test]
fn equality_matches_brute_force() {
    check(500, |seed| {
        let mut rng = Pcg64::seed_from_u64(seed);
        let len = rng.gen_range(0..6);
        let a: Vec<u8> = (0..len).map(|_| rng.gen_range(0..2)).collect();
        let b: Vec<u8> = (0..len).map(|_| rng.gen_range(0..2)).collect();

        let expected = len == 0 || (0..len).any(|k| (0..len).all(|i| a[i] == b[(i + k) % len]));
        assert_eq!(CyclicList::from(a) == CyclicList::from(b), expected);
    });
}

#[test]
fn get_copy_agrees_with_get() {
    check(300, |seed| {
        let mut rng = Pcg64::seed_from_u64(seed);
        let list = CyclicList::from(random_list(&mut rng, 8));
        let len = rng.gen_range(0..40isize);

        match list.get_copy(len) {
            Ok(copy) => {
                assert_eq!(copy.len(), len as usize);
                for (j, item) in copy.iter().enumerate() {
                    assert_eq!(Ok(*item), list.get(j as isize));
                }
            }
            Err(e) => {
                assert_eq!(e, CyclicListError::EmptyCyclicList);
                assert!(list.is_empty() && len > 0);
            }
        }
    });
}

#[test]
fn inverse_is_an_involution() {
    check(300, |seed| {
        let mut rng = Pcg64::seed_from_u64(seed);
        let list = CyclicList::from(random_list(&mut rng, 10));
        assert_eq!(list.inverse().inverse(), list);
        assert_eq!(list.inverse().len(), list.len());
    });
}

#[test]
fn one_cycle_from_any_start() {
    check(300, |seed| {
        let mut rng = Pcg64::seed_from_u64(seed);
        let list = CyclicList::from(random_list(&mut rng, 10));
        let start = rng.gen_range(-25isize..25);

        let mut it = list.cyclic_iterator(start);
        let forward: Vec<_> = it.by_ref().collect();
        assert_eq!(forward, list.to_vec_from(start));
        assert_eq!(it.try_next(), Err(CyclicListError::NoSuchElement));

        let mut backward = Vec::new();
        while it.has_prev() {
            backward.push(it.try_previous().unwrap());
        }
        backward.reverse();
        assert_eq!(backward, forward);
        assert_eq!(it.try_previous(), Err(CyclicListError::NoSuchElement));
    });
}

#[test]
fn iterator_edits_match_a_plain_vector() {
    check(300, |seed| {
        let mut rng = Pcg64::seed_from_u64(seed);
        let items: Vec<u32> = (0..rng.gen_range(0..8)).collect();
        let list = CyclicList::from(items.clone());
        let mut it = list.cyclic_iterator(0);

        // model: the unrolled window and a cursor into it
        let mut model = items;
        let mut cursor = 0usize;
        let mut last: Option<(usize, bool)> = None;
        let mut fresh = 100;

        for _ in 0..30 {
            match rng.gen_range(0..7) {
                0 => {
                    let expected = model.get(cursor).copied();
                    assert_eq!(it.try_next().ok(), expected);
                    if expected.is_some() {
                        last = Some((cursor, true));
                        cursor += 1;
                    }
                }
                1 => {
                    let expected = if cursor > 0 { model.get(cursor - 1).copied() } else { None };
                    assert_eq!(it.try_previous().ok(), expected);
                    if expected.is_some() {
                        cursor -= 1;
                        last = Some((cursor, false));
                    }
                }
                2 => {
                    it.add(fresh);
                    model.insert(cursor, fresh);
                    cursor += 1;
                    fresh += 1;
                    last = None;
                }
                // edits through the list itself
                5 if !model.is_empty() => {
                    let k = rng.gen_range(0..model.len());
                    let first = it.first_index().unwrap();
                    assert_eq!(list.set((first + k) as isize, fresh), Ok(model[k]));
                    model[k] = fresh;
                    fresh += 1;
                }
                6 if !model.is_empty() => {
                    let k = rng.gen_range(0..model.len());
                    let first = it.first_index().unwrap();
                    assert_eq!(list.remove((first + k) as isize), Ok(model.remove(k)));

                    let len = list.len();
                    assert!(it.size_hint().0 + it.window()[Direction::Right2Left] <= len);
                    assert!(it.clone().count() <= len);
                    it.refresh();
                    model = match it.first_index() {
                        Some(first) => list.to_vec_from(first as isize),
                        None => Vec::new(),
                    };
                    cursor = 0;
                    last = None;
                }
                3 => match last.take() {
                    Some((at, forward)) => {
                        assert_eq!(it.remove(), Ok(model.remove(at)));
                        if forward {
                            cursor -= 1;
                        }
                    }
                    None => assert_eq!(it.remove(), Err(CyclicListError::NoPointerToRemove)),
                },
                _ => match last {
                    Some((at, _)) => {
                        assert_eq!(it.set(fresh), Ok(model[at]));
                        model[at] = fresh;
                        fresh += 1;
                    }
                    None => assert_eq!(it.set(fresh), Err(CyclicListError::NoPointerToSet)),
                },
            }

            assert_eq!(list, CyclicList::from(model.clone()));
            assert_eq!(it.has_next(), cursor < model.len());
            assert_eq!(it.has_prev(), cursor > 0);
            if !model.is_empty() {
                assert_eq!(list.to_vec_from(it.first_index().unwrap() as isize), model);
            }
        }
    });
}
