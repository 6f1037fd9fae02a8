use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, OnceLock};

/// One winning line: the sorted cell indices of exactly `size` collinear
/// cells, in `x + y·size + z·size²` indexing.
pub(super) type WinMask = Box<[usize]>;

static MASK_CACHE: OnceLock<Mutex<HashMap<usize, Arc<[WinMask]>>>> = OnceLock::new();

/// Returns the winning lines for a cube of the given edge size.
///
/// The lines are a pure function of the size, so they are generated once per
/// distinct size and shared by every board (and clone) of that size.
pub(super) fn win_mask_set(size: usize) -> Arc<[WinMask]> {
    let cache = MASK_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut map = cache.lock().expect("win mask cache poisoned");

    map.entry(size)
        .or_insert_with(|| generate_win_masks(size).into())
        .clone()
}

/// Generates every straight run of exactly `size` cells along the 13
/// distinct 3D directions. Opposite directions and overlapping starting
/// points generate the same line; the set semantics dedupe them.
fn generate_win_masks(size: usize) -> Vec<WinMask> {
    let s = size as isize;
    let mut masks: BTreeSet<WinMask> = BTreeSet::new();

    for dx in -1..=1isize {
        for dy in -1..=1isize {
            for dz in -1..=1isize {
                if dx == 0 && dy == 0 && dz == 0 {
                    continue;
                }

                for x in 0..s {
                    for y in 0..s {
                        for z in 0..s {
                            let mut cells = BTreeSet::new();

                            // walk both ways from the start, staying inside
                            // the cube
                            for step in [1isize, -1] {
                                let mut i = 0isize;
                                loop {
                                    let nx = x + dx * i;
                                    let ny = y + dy * i;
                                    let nz = z + dz * i;
                                    if nx < 0 || nx >= s || ny < 0 || ny >= s || nz < 0 || nz >= s {
                                        break;
                                    }
                                    cells.insert((nx + ny * s + nz * s * s) as usize);
                                    i += step;
                                }
                            }

                            // runs cut short by the edge are not winning lines
                            if cells.len() == size {
                                masks.insert(cells.into_iter().collect());
                            }
                        }
                    }
                }
            }
        }
    }

    masks.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_counts() {
        // 1x1x1: the lone cell is its own line
        assert_eq!(generate_win_masks(1).len(), 1);
        // 2x2x2: every pair of distinct cells is collinear
        assert_eq!(generate_win_masks(2).len(), 28);
        // 3x3x3: 27 axis-aligned + 18 face diagonals + 4 space diagonals
        assert_eq!(generate_win_masks(3).len(), 49);
    }

    #[test]
    fn every_mask_has_exactly_size_cells() {
        for size in 1..=4 {
            for mask in generate_win_masks(size) {
                assert_eq!(mask.len(), size);
            }
        }
    }

    #[test]
    fn cache_shares_masks_per_size() {
        let a = win_mask_set(3);
        let b = win_mask_set(3);
        assert!(Arc::ptr_eq(&a, &b));
    }
}
