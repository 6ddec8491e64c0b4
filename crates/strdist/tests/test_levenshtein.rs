#![allow(missing_docs)]

use float_cmp::approx_eq;
use test_case::test_case;

use strdist::{
    costs::CostModel,
    strings::{
        default_levenshtein, levenshtein, levenshtein_reported, levenshtein_safe, levenshtein_transliterated, Deunicode,
    },
    StrDistError,
};

/// Asserts that the strict distance from `x` to `y` under `costs` is `expected`.
fn check(costs: &CostModel, x: &str, y: &str, expected: f64) -> Result<(), StrDistError> {
    let actual = levenshtein(x, y, costs)?.distance;
    assert!(
        approx_eq!(f64, actual, expected, epsilon = 1e-9),
        "levenshtein({x:?}, {y:?}) == {actual}, expected {expected}"
    );
    Ok(())
}

#[test_case("1234", "1234", 0.0 ; "identical")]
#[test_case("", "1234", 4.0 ; "insert all")]
#[test_case("1234", "", 4.0 ; "delete all")]
#[test_case("", "", 0.0 ; "both empty")]
#[test_case("1234", "12", 2.0 ; "delete suffix")]
#[test_case("1234", "14", 2.0 ; "delete middle")]
#[test_case("1111", "1", 3.0 ; "delete repeats")]
fn unit_costs(x: &str, y: &str, expected: f64) -> Result<(), StrDistError> {
    check(CostModel::unit(), x, y, expected)
}

#[test_case("", "a", 5.0)]
#[test_case("a", "", 1.0)]
#[test_case("", "aa", 10.0)]
#[test_case("a", "aa", 5.0)]
#[test_case("aa", "a", 1.0)]
#[test_case("asdf", "asdf", 0.0)]
#[test_case("xyz", "abc", 3.0)]
#[test_case("xyz", "axyz", 5.0)]
#[test_case("x", "ax", 5.0)]
fn insert_cost(x: &str, y: &str, expected: f64) -> Result<(), StrDistError> {
    let costs = CostModel::<f64>::default().with_insert_cost(b'a', 5.0)?;
    check(&costs, x, y, expected)
}

#[test_case("", "z", 1.0)]
#[test_case("z", "", 7.5)]
#[test_case("xyz", "zzxz", 3.0)]
#[test_case("zzxzzz", "xyz", 18.0)]
fn delete_cost(x: &str, y: &str, expected: f64) -> Result<(), StrDistError> {
    let costs = CostModel::<f64>::default().with_delete_cost(b'z', 7.5)?;
    check(&costs, x, y, expected)
}

#[test_case("a", "z", 1.2)]
#[test_case("z", "a", 0.1)]
#[test_case("a", "", 1.0)]
#[test_case("", "a", 1.0)]
#[test_case("asdf", "zzzz", 4.2)]
#[test_case("asdf", "zz", 4.0)]
#[test_case("asdf", "zsdf", 1.2)]
#[test_case("zsdf", "asdf", 0.1)]
fn substitute_cost(x: &str, y: &str, expected: f64) -> Result<(), StrDistError> {
    let costs = CostModel::<f64>::default()
        .with_substitute_cost(b'a', b'z', 1.2)?
        .with_substitute_cost(b'z', b'a', 0.1)?;
    check(&costs, x, y, expected)
}

#[test]
fn expensive_substitution_is_avoided() -> Result<(), StrDistError> {
    // A substitution dearer than a deletion plus an insertion is never used.
    let costs = CostModel::<f64>::default().with_substitute_cost(b'a', b'b', 10.0)?;
    check(&costs, "a", "b", 2.0)?;
    check(&costs, "xax", "xbx", 2.0)
}

#[test]
fn self_substitution_is_never_read() -> Result<(), StrDistError> {
    let costs = CostModel::uniform(1.0, 1.0, 100.0);
    check(&costs, "hello", "hello", 0.0)?;
    check(&costs, "abc", "abd", 2.0)
}

#[test]
fn max_weighted() -> Result<(), StrDistError> {
    let costs = CostModel::<f64>::default()
        .with_delete_cost(b'q', 3.0)?
        .with_insert_cost(b'w', 0.5)?;

    // Deleting "qq" costs 6, inserting "www" costs 1.5.
    let d = levenshtein("qq", "www", &costs)?;
    assert!(approx_eq!(f64, d.max_weighted, 6.0));

    // Deleting "a" costs 1, inserting "wwwww" costs 2.5.
    let d = levenshtein("a", "wwwww", &costs)?;
    assert!(approx_eq!(f64, d.max_weighted, 2.5));

    assert_eq!(levenshtein("1234", "12", CostModel::unit())?.as_tuple(), (2.0, 4.0));

    let d = levenshtein("", "", &costs)?;
    assert!(approx_eq!(f64, d.distance, 0.0));
    assert!(approx_eq!(f64, d.max_weighted, 0.0));
    assert!(approx_eq!(f64, d.normalized(), 0.0));
    assert!(approx_eq!(f64, d.similarity(), 1.0));

    Ok(())
}

#[test]
fn normalized_is_clamped() -> Result<(), StrDistError> {
    // Deleting and inserting beats the substitution, and the distance exceeds
    // the larger one-sided cost.
    let costs = CostModel::<f64>::default().with_substitute_cost(b'a', b'b', 100.0)?;
    let d = levenshtein("a", "b", &costs)?;
    assert!(approx_eq!(f64, d.distance, 2.0));
    assert!(approx_eq!(f64, d.max_weighted, 1.0));
    assert!(approx_eq!(f64, d.normalized(), 1.0));
    assert!(approx_eq!(f64, d.similarity(), 0.0));

    let d = levenshtein("ab", "a", CostModel::unit())?;
    assert!(approx_eq!(f64, d.normalized(), 0.5));
    Ok(())
}

#[test]
fn asymmetric() -> Result<(), StrDistError> {
    let costs = CostModel::<f64>::default().with_insert_cost(b'x', 4.0)?;
    check(&costs, "", "x", 4.0)?;
    check(&costs, "x", "", 1.0)
}

#[test]
fn f32_costs() -> Result<(), StrDistError> {
    let costs = CostModel::<f32>::uniform(0.5, 0.25, 2.0);
    let d = levenshtein("abc", "abd", &costs)?;
    assert!(approx_eq!(f32, d.distance, 0.75));
    assert!(approx_eq!(f32, d.max_weighted, 1.5));
    Ok(())
}

#[test]
fn strict_rejects_accents() {
    let err = levenshtein("curaçao", "", CostModel::unit());
    assert_eq!(
        err,
        Err(StrDistError::SymbolOutOfRange {
            symbol: u32::from('ç'),
            position: 4
        })
    );

    let err = levenshtein("cura", "naïve", CostModel::unit());
    assert!(matches!(err, Err(StrDistError::SymbolOutOfRange { position: 2, .. })));
}

#[test]
fn tolerant_accepts_accents() {
    let d = levenshtein_safe("curaçao", "", CostModel::unit());
    assert!(approx_eq!(f64, d.distance, 7.0, epsilon = 0.01));
    assert!(approx_eq!(f64, d.max_weighted, 7.0, epsilon = 0.01));

    let d = default_levenshtein("curaçao", "curacao");
    assert!(approx_eq!(f64, d.distance, 0.0));

    let d = default_levenshtein("Zürich", "Zurich");
    assert!(approx_eq!(f64, d.distance, 0.0));
}

#[test]
fn custom_transliterator_residue_is_tolerated() {
    let keep = |s: &str| s.to_string();
    let d = levenshtein_transliterated("naïve", "nave", CostModel::unit(), &keep);
    assert!(d.distance.is_finite());
    assert!(approx_eq!(f64, d.distance, 1.0));
    assert!(approx_eq!(f64, d.max_weighted, 5.0));
}

#[test]
fn reported_transliterations() {
    let (d, [x, y]) = levenshtein_reported("curaçao", "", CostModel::unit(), &Deunicode);
    assert!(approx_eq!(f64, d.distance, 7.0));
    assert_eq!(x.text, "curacao");
    assert_eq!((x.lossy_chars, y.lossy_chars), (1, 0));
    assert!(y.is_exact());

    assert_eq!(d, levenshtein_safe("curaçao", "", CostModel::unit()));
}

#[test]
fn tolerant_matches_strict_on_ascii() -> Result<(), StrDistError> {
    let costs = CostModel::<f64>::default()
        .with_substitute_cost(b'o', b'0', 0.1)?
        .with_insert_cost(b' ', 0.2)?;

    for (x, y) in [("hello world", "hell0world"), ("", "abc"), ("kitten", "sitting")] {
        let strict = levenshtein(x, y, &costs)?;
        let tolerant = levenshtein_safe(x, y, &costs);
        assert_eq!(strict, tolerant);
    }
    Ok(())
}

#[test]
fn unit_matches_classic_examples() {
    assert!(approx_eq!(f64, default_levenshtein("kitten", "sitting").distance, 3.0));
    assert!(approx_eq!(f64, default_levenshtein("TOMEATSWHATFOODEATS", "FOODEATSWHATTOMEATS").distance, 6.0));
}
