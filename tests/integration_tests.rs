use natorder::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::collections::VecDeque;

// Reference key: digit runs parsed to integers, compared as a derived tuple order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum OracleToken {
    Number(u128, usize),
    Text(String),
}

fn oracle_key(value: &str) -> Vec<OracleToken> {
    let mut key = Vec::new();
    let mut chars = value.chars().peekable();
    while let Some(&first) = chars.peek() {
        let numeric = first.is_ascii_digit();
        let mut run = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() != numeric {
                break;
            }
            run.push(c);
            chars.next();
        }
        if numeric {
            let zeros = run.chars().take_while(|&c| c == '0').count();
            key.push(OracleToken::Number(run.parse().unwrap(), zeros));
        } else {
            key.push(OracleToken::Text(run));
        }
    }
    key
}

const ALPHABET: &[char] = &['a', 'b', 'Z', '-', ' ', '.', '0', '0', '1', '2', '9', 'é'];

fn random_title(rng: &mut StdRng) -> String {
    let len = rng.random_range(0..12);
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
        .collect()
}

#[test]
fn test_natural_over_lexical() {
    let input = vec!["10".to_string(), "1".to_string()];

    let indices = natural_indices(&input, &SortOptions::default()).unwrap();
    assert_eq!(indices, vec![1, 0]);

    let mut lexical = input.clone();
    lexical.sort();
    assert_eq!(lexical, vec!["1", "10"]);
    assert_eq!(input, vec!["10", "1"]);
}

#[test]
fn test_mixed_segments() {
    let sorted = naturally_sorted_by(vec!["img2", "img10", "img1"], |s| FieldValue::Text(s)).unwrap();
    assert_eq!(sorted, vec!["img1", "img2", "img10"]);
}

#[test]
fn test_file_names_with_padding() {
    let expected = vec![
        "1 - The Beginning",
        "2 - The Continuation",
        "05 - The Beginning",
        "9 - The Beginning",
        "10 - The Continuation",
        "011 - The Conclusion",
        "012 - The End",
        "20 - The Beginning",
        "100 - The Continuation",
        "130 - The Beginning",
    ];

    let mut shuffled = expected.clone();
    shuffled.reverse();
    natural_sort_mut(&mut shuffled);

    assert_eq!(shuffled, expected);
}

#[test]
fn test_stability_of_identical_keys() {
    let records = vec![("7", 1), ("3", 2), ("7", 3), ("3", 4), ("7", 5)];
    let sorted = naturally_sorted_by(&records, |r| FieldValue::Text(r.0)).unwrap();
    let ids: Vec<i32> = sorted.iter().map(|r| r.1).collect();
    assert_eq!(ids, vec![2, 4, 1, 3, 5]);
}

#[test]
fn test_idempotence() {
    let mut rng = StdRng::seed_from_u64(7);
    let input: Vec<String> = (0..500).map(|_| random_title(&mut rng)).collect();

    let once = naturally_sorted_by(&input, |s| FieldValue::from(*s)).unwrap();
    let twice = naturally_sorted_by(once.clone(), |s| FieldValue::from(*s)).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_input_is_not_mutated() {
    let input = vec!["b10", "b9", "a"];
    let sorted = naturally_sorted_by(&input, |s| FieldValue::Text(s)).unwrap();
    assert_eq!(sorted, vec![&"a", &"b9", &"b10"]);
    assert_eq!(input, vec!["b10", "b9", "a"]);
}

#[test]
fn test_lazy_iterator_input() {
    let sorted = naturally_sorted_by((1..=12).rev().map(|n| format!("page{}", n)), |s| {
        FieldValue::from(s)
    })
    .unwrap();
    assert_eq!(sorted.first().map(String::as_str), Some("page1"));
    assert_eq!(sorted.last().map(String::as_str), Some("page12"));
    assert_eq!(sorted[8], "page9");
}

#[test]
fn test_nulls_and_direction() {
    let titles = vec![None, Some("b2"), Some("b10"), None, Some("a")];

    let asc = naturally_sorted_by(&titles, |t| FieldValue::from(**t)).unwrap();
    assert_eq!(asc, vec![&Some("a"), &Some("b2"), &Some("b10"), &None, &None]);

    let options = SortOptions::new().descending();
    let desc = naturally_sorted_with(&titles, |t| FieldValue::from(**t), &options).unwrap();
    assert_eq!(desc, vec![&Some("b10"), &Some("b2"), &Some("a"), &None, &None]);

    let options = SortOptions::new().nulls_first();
    let indices = natural_indices(
        &titles.iter().map(|t| t.unwrap_or("")).collect::<Vec<_>>(),
        &options,
    )
    .unwrap();
    // Empty strings are text, not nulls: they sort first as the smallest key.
    assert_eq!(indices, vec![0, 3, 4, 1, 2]);
}

#[test]
fn test_invalid_field_value() {
    let values = vec![FieldValue::Text("1"), FieldValue::Null, FieldValue::Float(2.5)];
    let err = naturally_sorted_by(&values, |v| **v).unwrap_err();
    assert!(matches!(
        err,
        NatSortError::InvalidFieldValue {
            index: 2,
            found: "float"
        }
    ));
}

#[test]
fn test_vec_deque() {
    let input: VecDeque<String> = VecDeque::from(vec![
        "chapter 10".to_string(),
        "chapter 2".to_string(),
        "appendix".to_string(),
    ]);

    let indices = natural_indices(&input, &SortOptions::default()).unwrap();

    let sorted: Vec<&String> = indices.iter().map(|&i| &input[i]).collect();
    assert_eq!(sorted, vec!["appendix", "chapter 2", "chapter 10"]);
}

#[test]
fn test_empty() {
    let input: Vec<String> = vec![];
    let indices = natural_indices(&input, &SortOptions::default()).unwrap();
    assert!(indices.is_empty());

    let mut data: Vec<&str> = vec![];
    natural_sort_mut(&mut data);
    assert!(data.is_empty());
}

#[test]
fn test_fuzz_against_oracle() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let count = rng.random_range(0..200);
        let mut input: Vec<String> = (0..count).map(|_| random_title(&mut rng)).collect();

        let mut expected = input.clone();
        expected.sort_by_key(|s| oracle_key(s));

        natural_sort_mut(&mut input);
        assert_eq!(input, expected);
    }
}

#[test]
fn test_fuzz_pairwise_against_oracle() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..20_000 {
        let a = random_title(&mut rng);
        let b = random_title(&mut rng);
        assert_eq!(
            natural_cmp(&a, &b),
            oracle_key(&a).cmp(&oracle_key(&b)),
            "{:?} vs {:?}",
            a,
            b
        );
        assert_eq!(natural_cmp(&a, &b) == Ordering::Equal, a == b);
    }
}
