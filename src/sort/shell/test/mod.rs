//! Tests for gap sequences and Shell sort.

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::instrument::{Metric, Snapshot};
    use crate::sort::insertion::InsertionSort;
    use crate::sort::shell::*;
    use crate::sort::testing::{counting, plain, reversed};
    use crate::sort::{sort_trial, Sort};
    use proptest::prelude::*;

    fn gaps(n: usize, mode: GapMode) -> Vec<usize> {
        let mut sequence = GapSequence::new(n, mode);
        let mut gaps = vec![sequence.first()];
        loop {
            let gap = sequence.next_gap();
            gaps.push(gap);
            if gap == 0 {
                return gaps;
            }
        }
    }

    #[test]
    fn test_from_mode() {
        assert_eq!(GapMode::from_mode(3).unwrap(), GapMode::Knuth);
        for mode in GapMode::ALL {
            assert_eq!(GapMode::from_mode(mode.mode()).unwrap(), mode);
        }
        let err = GapMode::from_mode(6).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Precondition);
        assert!(GapMode::from_mode(0).is_err());
    }

    #[test]
    fn test_sedgewick_values() {
        let values: Vec<u64> = (0..6).map(sedgewick).collect();
        assert_eq!(values, vec![1, 5, 19, 41, 109, 209]);
        assert_eq!(sedgewick(-1), 0);
    }

    #[test]
    fn test_gap_sequences_for_100() {
        assert_eq!(gaps(100, GapMode::Insertion), vec![1, 0]);
        assert_eq!(gaps(100, GapMode::PowerOfTwoMinusOne), vec![63, 31, 15, 7, 3, 1, 0]);
        assert_eq!(gaps(100, GapMode::Knuth), vec![40, 13, 4, 1, 0]);
        assert_eq!(gaps(100, GapMode::Sedgewick), vec![41, 19, 5, 1, 0]);
        assert_eq!(gaps(10, GapMode::Pratt), vec![9, 8, 6, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_sedgewick_is_deterministic() {
        assert_eq!(gaps(100, GapMode::Sedgewick), gaps(100, GapMode::Sedgewick));
        let iterated: Vec<usize> = GapSequence::new(100, GapMode::Sedgewick).collect();
        assert_eq!(iterated, vec![41, 19, 5, 1]);
    }

    #[test]
    fn test_next_before_first_returns_initial_gap() {
        let mut sequence = GapSequence::new(100, GapMode::Knuth);
        assert_eq!(sequence.next_gap(), 40);
        assert_eq!(sequence.next_gap(), 13);
    }

    #[test]
    #[should_panic(expected = "cannot call first more than once")]
    fn test_first_twice_panics() {
        let mut sequence = GapSequence::new(100, GapMode::Sedgewick);
        sequence.first();
        sequence.first();
    }

    #[test]
    fn test_exhausted_sequences_stay_at_zero() {
        for mode in GapMode::ALL {
            let mut sequence = GapSequence::new(20, mode);
            let _ = sequence.by_ref().count();
            assert_eq!(sequence.next_gap(), 0, "mode {}", mode);
        }
        assert_eq!(gaps(0, GapMode::Pratt), vec![0, 0]);
    }

    #[test]
    fn test_sorts_small_array_in_every_mode() {
        for mode in GapMode::ALL {
            let mut sorter = ShellSort::new(mode, plain(4));
            let mut xs = vec![3, 4, 2, 1];
            sorter.mutating_sort(&mut xs);
            assert_eq!(xs, vec![1, 2, 3, 4], "mode {}", mode);

            let mut sorter = ShellSort::new(mode, counting(4));
            let mut xs = vec![3, 4, 2, 1];
            sort_trial(&mut sorter, &mut xs).unwrap();
            assert_eq!(xs, vec![1, 2, 3, 4], "instrumented mode {}", mode);
        }
    }

    #[test]
    fn test_gaps_larger_than_range() {
        // Hibbard's first gap for 6 elements is 7
        for mode in GapMode::ALL {
            let mut sorter = ShellSort::new(mode, counting(6));
            let mut xs = vec![6, 5, 4, 3, 2, 1];
            sort_trial(&mut sorter, &mut xs).unwrap();
            assert_eq!(xs, vec![1, 2, 3, 4, 5, 6], "mode {}", mode);
        }
    }

    fn mode_one_and_insertion(xs: &[i32]) -> (Snapshot, Snapshot) {
        let n = xs.len();
        let mut shell = ShellSort::new(GapMode::Insertion, counting(n));
        let mut ys = xs.to_vec();
        shell.mutating_sort(&mut ys);

        let mut insertion = InsertionSort::new(counting(n));
        let mut zs = xs.to_vec();
        insertion.mutating_sort(&mut zs);
        assert_eq!(ys, zs);

        (
            shell.helper().snapshot().unwrap(),
            insertion.helper().snapshot().unwrap(),
        )
    }

    #[test]
    fn test_mode_one_matches_insertion_counts() {
        for n in [2usize, 5, 10, 17, 50, 200] {
            let scrambled: Vec<i32> = (0..n as i32).map(|i| (i * 37 + 11) % 101).collect();
            for xs in [reversed(n), scrambled, (0..n as i32).collect()] {
                let (s, t) = mode_one_and_insertion(&xs);
                assert_eq!(s.compares, t.compares, "n = {}", n);
                assert_eq!(s.swaps, t.swaps, "n = {}", n);
                assert_eq!(s.fixes, t.fixes, "n = {}", n);
                // one extra read: the head of the single chain
                assert_eq!(s.hits, t.hits + 1, "n = {}", n);
                assert_eq!(s.lookups, s.compares, "n = {}", n);
                assert_eq!(t.lookups, 0);
            }
        }
    }

    #[test]
    fn test_mode_one_reversed_is_quadratic() {
        for n in [5usize, 17, 40] {
            let (s, _) = mode_one_and_insertion(&reversed(n));
            let expected = (n * (n - 1) / 2) as u64;
            assert_eq!((s.compares, s.swaps, s.fixes), (expected, expected, expected), "n = {}", n);
        }
    }

    #[test]
    fn test_plain_mode_one_matches_insertion() {
        let n = 30;
        let mut xs: Vec<i32> = (0..n).map(|i| (i * 7) % 11).collect();
        let mut ys = xs.clone();
        ShellSort::new(GapMode::Insertion, plain(n as usize)).mutating_sort(&mut xs);
        InsertionSort::new(plain(n as usize)).mutating_sort(&mut ys);
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_sorts_subrange() {
        let mut sorter = ShellSort::new(GapMode::Knuth, counting(10));
        let mut xs = vec![100, 9, 8, 7, 6, 5, 4, 3, 2, -100];
        sorter.sort(&mut xs, 1, 9);
        assert_eq!(xs, vec![100, 2, 3, 4, 5, 6, 7, 8, 9, -100]);
    }

    #[test]
    fn test_tracked_fixes_equal_inversions() {
        let n = 64;
        let mut sorter = ShellSort::new(GapMode::Sedgewick, counting(n)).with_track_inversions(true);
        let mut xs: Vec<i32> = (0..n as i32).map(|i| (i * 37 + 11) % 64).collect();
        sort_trial(&mut sorter, &mut xs).unwrap();
        let pack = sorter.helper().stat_pack().unwrap();
        assert_eq!(
            pack.mean(Metric::Fixes).unwrap(),
            pack.mean(Metric::Inversions).unwrap()
        );
        assert_eq!(sorter.description(), "Shell sort in mode 4");
    }

    proptest! {
        #[test]
        fn prop_every_mode_sorts(mode in 1u32..=5, xs in prop::collection::vec(-1000i32..1000, 0..300)) {
            let mode = GapMode::from_mode(mode).unwrap();
            let mut expected = xs.clone();
            expected.sort();

            let mut ys = xs.clone();
            ShellSort::new(mode, plain(ys.len())).mutating_sort(&mut ys);
            prop_assert_eq!(&ys, &expected);

            let mut zs = xs;
            let mut sorter = ShellSort::new(mode, counting(zs.len()));
            prop_assert!(sort_trial(&mut sorter, &mut zs).is_ok());
            prop_assert_eq!(&zs, &expected);
        }
    }
}
