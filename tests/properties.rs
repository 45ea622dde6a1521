use lazy_pipe::{Integer, Pipe};
use proptest::prelude::*;
use std::collections::HashSet;

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0..20i32, 0..40)
}

fn first_occurrences(values: &[i32]) -> Vec<i32> {
    let mut seen = HashSet::new();
    values.iter().copied().filter(|x| seen.insert(*x)).collect()
}

proptest! {
    #[test]
    fn prop_terminated_pipe_stays_terminated(a in small_vec(), n in -3i64..10) {
        let mut pipes = vec![
            Pipe::of(a.clone()).skip_last(n),
            Pipe::of(a.clone()).take_last(n),
            Pipe::of(a.clone()).distinct(),
            Pipe::of(a.clone()).except(Pipe::of(a.clone())),
            Pipe::of(a.clone()).take(n).skip(1),
        ];
        for pipe in pipes.iter_mut() {
            while pipe.pull().is_some() {}
            for _ in 0..3 {
                prop_assert_eq!(pipe.pull(), None);
            }
        }
    }

    #[test]
    fn prop_concat(a in small_vec(), b in small_vec()) {
        let res = Pipe::of(a.clone()).concat(Pipe::of(b.clone())).to_vec();
        prop_assert_eq!(res.len(), a.len() + b.len());
        prop_assert_eq!(res, a.iter().chain(b.iter()).copied().collect::<Vec<_>>());
    }

    #[test]
    fn prop_distinct(a in small_vec()) {
        prop_assert_eq!(Pipe::of(a.clone()).distinct().to_vec(), first_occurrences(&a));
    }

    #[test]
    fn prop_except(a in small_vec(), b in small_vec()) {
        let lookup: HashSet<_> = b.iter().copied().collect();
        let expected: Vec<_> = a.iter().copied().filter(|x| !lookup.contains(x)).collect();
        prop_assert_eq!(Pipe::of(a).except(Pipe::of(b)).to_vec(), expected);
    }

    #[test]
    fn prop_intersect(a in small_vec(), b in small_vec()) {
        let lookup: HashSet<_> = b.iter().copied().collect();
        let expected: Vec<_> = first_occurrences(&a).into_iter().filter(|x| lookup.contains(x)).collect();
        prop_assert_eq!(Pipe::of(a).intersect(Pipe::of(b)).to_vec(), expected);
    }

    #[test]
    fn prop_union(a in small_vec(), b in small_vec()) {
        let mut joined = a.clone();
        joined.extend(b.iter().copied());
        prop_assert_eq!(Pipe::of(a).union(Pipe::of(b)).to_vec(), first_occurrences(&joined));
    }

    #[test]
    fn prop_skip_last_take_last(a in small_vec(), n in 0usize..50) {
        let keep = a.len().saturating_sub(n);
        prop_assert_eq!(Pipe::of(a.clone()).skip_last(n as Integer).to_vec(), a[..keep].to_vec());
        let from = a.len() - a.len().min(n);
        prop_assert_eq!(Pipe::of(a.clone()).take_last(n as Integer).to_vec(), a[from..].to_vec());
    }

    #[test]
    fn prop_skip_take_composition(a in small_vec(), n in 0i64..30, m in 0i64..30) {
        let len = Pipe::of(a.clone()).take(n + m).skip(n).count() as i64;
        let expected = (a.len() as i64).min(n + m).saturating_sub(n).max(0);
        prop_assert_eq!(len, expected);
    }
}
