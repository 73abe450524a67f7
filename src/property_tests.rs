//! Property-based tests for index mapping and filling.

#[cfg(test)]
mod tests {
    use std::ops::{Range};

    use proptest::prelude::*;

    use crate::{shape, DenseArray};

    // Extents of a 3-dimensional array, allowing empty axes.
    fn sizes_strategy() -> impl Strategy<Value = [usize; 3]> {
        proptest::array::uniform3(0usize..6)
    }

    // Extents together with in-bounds ranges, some of them empty.
    fn region_strategy() -> impl Strategy<Value = ([usize; 3], [Range<usize>; 3])> {
        sizes_strategy().prop_flat_map(|sizes| {
            let range = |n: usize| (0..=n, 0..=n).prop_map(|(a, b)| a.min(b)..a.max(b));
            let ranges = (range(sizes[0]), range(sizes[1]), range(sizes[2]))
                .prop_map(|(a, b, c)| [a, b, c]);
            (Just(sizes), ranges)
        })
    }

    fn numbered(sizes: [usize; 3]) -> DenseArray<i64, 3> {
        DenseArray::from_fn(sizes, |c| shape::offset(sizes, c) as i64)
    }

    proptest! {
        #[test]
        fn prop_length_is_product(sizes in sizes_strategy()) {
            let a = numbered(sizes);
            prop_assert_eq!(a.len(), sizes[0] * sizes[1] * sizes[2]);
        }

        #[test]
        fn prop_index_is_bijective(sizes in sizes_strategy()) {
            let a = numbered(sizes);
            for i in 0..a.len() {
                let c = a.coords(i);
                prop_assert!(shape::check_coords(sizes, c).is_ok());
                prop_assert_eq!(a.index(c), i);
                prop_assert_eq!(a[c], i as i64);
            }
        }

        #[test]
        fn prop_write_then_read(sizes in sizes_strategy(), seed in any::<usize>(), v in any::<i64>()) {
            prop_assume!(sizes.iter().all(|&n| n > 0));
            let mut a = numbered(sizes);
            let before = a.clone();
            let c = a.coords(seed % a.len());
            a[c] = v;
            prop_assert_eq!(a[c], v);
            for i in 0..a.len() {
                if i != a.index(c) { prop_assert_eq!(a.as_slice()[i], before.as_slice()[i]); }
            }
        }

        #[test]
        fn prop_fill_twice(sizes in sizes_strategy(), v1 in any::<i64>(), v2 in any::<i64>()) {
            let mut a = numbered(sizes);
            a.fill(v1).fill(v2);
            prop_assert!(a.iter().all(|&x| x == v2));
        }

        #[test]
        fn prop_fill_range_matches_naive((sizes, ranges) in region_strategy(), v in any::<i64>()) {
            let mut fast = numbered(sizes);
            fast.try_fill_range(ranges.clone(), v).unwrap();

            let mut slow = numbered(sizes);
            let mut count = 0;
            for i in ranges[0].clone() {
                for j in ranges[1].clone() {
                    for k in ranges[2].clone() {
                        slow[[i, j, k]] = v;
                        count += 1;
                    }
                }
            }
            prop_assert_eq!(fast.as_slice(), slow.as_slice());
            prop_assert_eq!(fast.touched(), count);
            prop_assert_eq!(count, ranges.iter().map(|r| r.len()).product::<usize>());
        }
    }
}
