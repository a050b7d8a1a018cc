mod common;
use common::{counted, scripted};
use pulltools::prelude::*;
use pulltools::Error;

#[test]
fn accumulate_running_fold() {
    let sums: Vec<_> = vec![1, 2, 3, 4, 5]
        .into_iter()
        .accumulate(|a, b| a + b)
        .collect();
    assert_eq!(sums, vec![1, 3, 6, 10, 15]);
    let products: Vec<u64> = (1..6).accumulate(|a, b| a * b).collect();
    assert_eq!(products, vec![1, 2, 6, 24, 120]);
    let words: Vec<String> = vec!["a", "b", "c"]
        .into_iter()
        .map(String::from)
        .accumulate(|a, b| a + &b)
        .collect();
    assert_eq!(words, vec!["a", "ab", "abc"]);
    assert_eq!(
        vec![0.5, 0.25].into_iter().cumulative_sum().collect::<Vec<f64>>(),
        vec![0.5, 0.75]
    );
}

#[test]
fn accumulate_never_combines_without_two_elements() {
    let mut calls = 0;
    let empty: Vec<i32> = Vec::<i32>::new()
        .into_iter()
        .accumulate(|a, b| {
            calls += 1;
            a + b
        })
        .collect();
    assert!(empty.is_empty());
    let single: Vec<i32> = vec![7]
        .into_iter()
        .accumulate(|a, b| {
            calls += 1;
            a + b
        })
        .collect();
    assert_eq!(single, vec![7]);
    assert_eq!(calls, 0);
}

#[test]
fn accumulate_looks_one_element_ahead() {
    let (source, pulls) = counted(vec![1, 2, 3]);
    let mut sums = source.cumulative_sum();
    assert_eq!(pulls.get(), 0);
    assert_eq!(sums.size_hint(), (0, None));
    assert_eq!(sums.next(), Some(1));
    assert_eq!(pulls.get(), 2);
    assert_eq!(sums.next(), Some(3));
    assert_eq!(sums.next(), Some(6));
    assert_eq!(pulls.get(), 4);
    assert_eq!(sums.next(), None);
    assert_eq!(sums.next(), None);
    assert_eq!(pulls.get(), 4);
}

#[test]
fn dropwhile_drops_only_the_prefix() {
    let rest: Vec<_> = vec![1, 4, 6, 4, 1]
        .into_iter()
        .dropwhile(|&x| x < 5)
        .collect();
    assert_eq!(rest, vec![6, 4, 1]);
    assert_eq!((0..10).dropwhile(|_| true).next(), None);
    assert_eq!((0..3).dropwhile(|_| false).collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[test]
fn dropwhile_is_lazy() {
    let (source, pulls) = counted(count(0, 1));
    let mut rest = source.dropwhile(|&x| x < 3);
    assert_eq!(pulls.get(), 0);
    assert_eq!(rest.next(), Some(3));
    assert_eq!(pulls.get(), 4);
    assert_eq!(rest.next(), Some(4));
    assert_eq!(pulls.get(), 5);
}

#[test]
fn takewhile_stops_for_good() {
    let prefix: Vec<_> = vec![1, 4, 6, 4, 1]
        .into_iter()
        .takewhile(|&x| x < 5)
        .collect();
    assert_eq!(prefix, vec![1, 4]);

    let (source, pulls) = counted(vec![1, 9, 2]);
    let mut small = source.takewhile(|&x| x < 5);
    assert_eq!(small.next(), Some(1));
    assert_eq!(small.next(), None);
    assert_eq!(small.next(), None);
    assert_eq!(pulls.get(), 2);
}

#[test]
fn takewhile_over_infinite_source() {
    let squares: Vec<u64> = count(1u64, 1)
        .map(|x| x * x)
        .takewhile(|&s| s < 50)
        .collect();
    assert_eq!(squares, vec![1, 4, 9, 16, 25, 36, 49]);
}

#[test]
fn filterfalse_complements_filter() {
    let odds: Vec<_> = (0..10).filterfalse(|x| x % 2 == 0).collect();
    assert_eq!(odds, vec![1, 3, 5, 7, 9]);
    assert_eq!((0..10).filterfalse(|_| true).next(), None);
}

#[test]
fn interpose_separates() {
    assert_eq!("abc".chars().interpose(',').collect::<String>(), "a,b,c");
    assert_eq!("a".chars().interpose(',').collect::<String>(), "a");
    assert_eq!("".chars().interpose(',').collect::<String>(), "");
    let words: String = vec!["spam", "eggs"].into_iter().interpose(" and ").collect();
    assert_eq!(words, "spam and eggs");
}

#[test]
fn interpose_looks_one_element_ahead() {
    let (source, pulls) = counted(vec![1, 2, 3]);
    let mut spaced = source.interpose(0);
    assert_eq!(pulls.get(), 0);
    assert_eq!(spaced.next(), Some(1));
    assert_eq!(pulls.get(), 2);
    assert_eq!(spaced.next(), Some(0));
    assert_eq!(pulls.get(), 2);
    assert_eq!(spaced.collect::<Vec<_>>(), vec![2, 0, 3]);
    assert_eq!(pulls.get(), 4);
}

#[test]
fn interpose_size_hint() {
    let mut spaced = vec![1, 2, 3].into_iter().interpose(0);
    assert_eq!(spaced.size_hint(), (5, Some(5)));
    spaced.next();
    assert_eq!(spaced.size_hint(), (4, Some(4)));
}

#[test]
fn islice_steps_between_emissions() {
    assert_eq!((0..10).islice(2, Some(6), 2).collect::<Vec<_>>(), vec![2, 4]);
    assert_eq!((0..10).islice(0, None, 3).collect::<Vec<_>>(), vec![0, 3, 6, 9]);
    assert_eq!((0..10).islice(7, None, 1).collect::<Vec<_>>(), vec![7, 8, 9]);
    assert_eq!((0..10).islice(0, Some(3), 1).collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!((0..3).islice(1, Some(10), 1).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!((0..10).islice(6, Some(2), 1).next(), None);
    assert_eq!((0..10).islice(20, None, 1).next(), None);
}

#[test]
fn islice_consumes_no_more_than_needed() {
    let (source, pulls) = counted(0..10);
    let picked: Vec<_> = source.islice(2, Some(6), 2).collect();
    assert_eq!(picked, vec![2, 4]);
    assert_eq!(pulls.get(), 5);

    let (source, pulls) = counted(count(0, 1));
    let mut every_third = source.islice(1, None, 3);
    assert_eq!(every_third.next(), Some(1));
    assert_eq!(pulls.get(), 2);
    assert_eq!(every_third.next(), Some(4));
    assert_eq!(pulls.get(), 5);
}

#[test]
fn islice_size_hint() {
    assert_eq!((0..10).islice(2, Some(6), 2).size_hint(), (2, Some(2)));
    assert_eq!((0..10).islice(1, None, 3).size_hint(), (3, Some(3)));
    assert_eq!(count(0, 1).islice(0, Some(10), 5).size_hint().1, Some(2));
}

#[test]
fn islice_reaches_the_last_index() {
    let last = usize::MAX as u128;
    let huge_step: Vec<_> = (0u128..).islice(0, None, usize::MAX).take(2).collect();
    assert_eq!(huge_step, vec![0, last]);
    assert_eq!(
        huge_step,
        (0u128..).step_by(usize::MAX).take(2).collect::<Vec<_>>()
    );
    let mut near_end = (0u128..).islice(usize::MAX - 1, None, 1);
    assert_eq!(near_end.next(), Some(last - 1));
    assert_eq!(near_end.next(), Some(last));
    assert_eq!(near_end.next(), None);
    assert_eq!(near_end.next(), None);
}

#[test]
fn zero_step_is_rejected() {
    assert_eq!((0..10).try_islice(0, None, 0).err(), Some(Error::ZeroStep));
    assert!((0..10).try_islice(0, None, 1).is_ok());
    assert_eq!(Error::ZeroStep.to_string(), "slice step must be at least one");
}

#[test]
#[should_panic(expected = "slice step must be at least one")]
fn zero_step_panics() {
    (0..10).islice(1, Some(5), 0);
}

#[test]
fn exhausted_combinators_stay_exhausted() {
    // a source coming back to life after `None` must not resurrect anything
    let script = || scripted(vec![Some(1), None, Some(2), Some(3)]);

    let mut sums = script().cumulative_sum();
    assert_eq!(sums.by_ref().collect::<Vec<_>>(), vec![1]);
    assert_eq!(sums.next(), None);

    let mut rest = script().dropwhile(|_| false);
    assert_eq!(rest.by_ref().collect::<Vec<_>>(), vec![1]);
    assert_eq!(rest.next(), None);

    let mut prefix = script().takewhile(|_| true);
    assert_eq!(prefix.by_ref().collect::<Vec<_>>(), vec![1]);
    assert_eq!(prefix.next(), None);

    let mut spaced = script().interpose(0);
    assert_eq!(spaced.by_ref().collect::<Vec<_>>(), vec![1]);
    assert_eq!(spaced.next(), None);

    let mut sliced = script().islice(0, None, 1);
    assert_eq!(sliced.by_ref().collect::<Vec<_>>(), vec![1]);
    assert_eq!(sliced.next(), None);

    let mut kept = script().filterfalse(|_| false);
    assert_eq!(kept.by_ref().collect::<Vec<_>>(), vec![1]);
    assert_eq!(kept.next(), None);
}
