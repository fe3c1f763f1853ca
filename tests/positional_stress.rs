// ==============================================
// POSITIONAL LIST STRESS (integration)
// ==============================================
//
// Drives a PositionalList with a long seeded random operation sequence and
// checks it against a Vec reference model after every step: same contents,
// same length, chain invariants intact, and stale positions stay dead.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use listkit::prelude::*;

struct Model {
    list: PositionalList<u32>,
    values: Vec<u32>,
    positions: Vec<Position>,
    dead: Vec<Position>,
}

impl Model {
    fn new() -> Self {
        Self {
            list: PositionalList::new(),
            values: Vec::new(),
            positions: Vec::new(),
            dead: Vec::new(),
        }
    }

    fn check(&self) {
        assert_eq!(self.list.len(), self.values.len());
        let collected: Vec<u32> = self.list.iter().copied().collect();
        assert_eq!(collected, self.values);
        self.list.debug_validate_invariants();
    }
}

#[test]
fn random_ops_match_vec_model() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    let mut model = Model::new();

    for step in 0..2_000u32 {
        let value = step;
        let op = rng.gen_range(0..6);
        match op {
            0 => {
                let p = model.list.add_first(value);
                model.values.insert(0, value);
                model.positions.insert(0, p);
            }
            1 => {
                let p = model.list.add_last(value);
                model.values.push(value);
                model.positions.push(p);
            }
            2 if !model.values.is_empty() => {
                let i = rng.gen_range(0..model.values.len());
                let p = model.list.add_before(model.positions[i], value).unwrap();
                model.values.insert(i, value);
                model.positions.insert(i, p);
            }
            3 if !model.values.is_empty() => {
                let i = rng.gen_range(0..model.values.len());
                let p = model.list.add_after(model.positions[i], value).unwrap();
                model.values.insert(i + 1, value);
                model.positions.insert(i + 1, p);
            }
            4 if !model.values.is_empty() => {
                let i = rng.gen_range(0..model.values.len());
                let removed = model.list.delete(model.positions[i]).unwrap();
                assert_eq!(removed, model.values[i]);
                model.values.remove(i);
                let p = model.positions.remove(i);
                model.dead.push(p);
            }
            5 if !model.values.is_empty() => {
                let i = rng.gen_range(0..model.values.len());
                let old = model.list.replace(model.positions[i], value).unwrap();
                assert_eq!(old, model.values[i]);
                model.values[i] = value;
            }
            _ => {}
        }

        if step % 64 == 0 {
            model.check();
            // Dead positions must stay dead no matter how the list has
            // changed since.
            for &p in &model.dead {
                assert_eq!(model.list.get(p), Err(PositionError::Stale));
            }
        }
    }

    model.check();

    // Boundary relations hold for whatever state the run ended in.
    if let Some(first) = model.list.first() {
        assert_eq!(model.list.before(first).unwrap(), None);
        let last = model.list.last().unwrap();
        assert_eq!(model.list.after(last).unwrap(), None);
    } else {
        assert!(model.list.is_empty());
    }

    // Walking via after() visits exactly len() positions.
    let mut count = 0;
    let mut cursor = model.list.first();
    while let Some(p) = cursor {
        count += 1;
        cursor = model.list.after(p).unwrap();
    }
    assert_eq!(count, model.list.len());

    // Every dead position still fails, and fails the same way twice.
    for p in model.dead.clone() {
        assert_eq!(model.list.delete(p), Err(PositionError::Stale));
        assert_eq!(model.list.delete(p), Err(PositionError::Stale));
    }
}

#[test]
fn positions_never_cross_containers() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut a: PositionalList<u32> = PositionalList::new();
    let mut b: PositionalList<u32> = PositionalList::new();

    let mut a_positions = Vec::new();
    for _ in 0..100 {
        let value = rng.gen_range(0..1_000);
        a_positions.push(a.add_last(value));
        b.add_last(value);
    }

    // Same shapes, same values, but a position minted by one list is never
    // honored by the other.
    for &p in &a_positions {
        assert_eq!(b.get(p), Err(PositionError::WrongList));
        assert_eq!(b.delete(p), Err(PositionError::WrongList));
    }
    assert_eq!(a.len(), b.len());
}
