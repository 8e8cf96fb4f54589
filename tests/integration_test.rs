// End-to-end tests for screenx
use screenx::ingest::{load_reference_csv, require_columns};
use screenx::{
    normalize, similarity, CancelToken, Error, MatchConfig, Matcher, MissingFieldPolicy, Query,
    ReferenceRecord, NAME_ADDRESS_THRESHOLD, NAME_ONLY_THRESHOLD,
};
use std::collections::HashMap;
use std::io::Write;

fn record(index: usize, pairs: &[(&str, &str)]) -> ReferenceRecord {
    let fields = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<HashMap<_, _>>();
    ReferenceRecord::new(index, fields)
}

#[test]
fn test_name_only_screening() {
    // query "Jon Smith" at 0.85: John Smith flagged, Jane Doe not
    let reference = vec![
        record(0, &[("name", "John Smith")]),
        record(1, &[("name", "Jane Doe")]),
    ];
    let query = Query::new().with_field("name", "Jon Smith");

    let matcher = Matcher::new(MatchConfig {
        threshold: NAME_ONLY_THRESHOLD,
        ..Default::default()
    })
    .unwrap();
    let results = matcher.run(&query, &reference).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].index, 0);
    assert!(results[0].composite > 0.85);
}

#[test]
fn test_name_and_address_screening() {
    // Punctuation and casing differences normalize away; composite is the
    // mean of the two field scores
    let reference = vec![record(
        0,
        &[("name", "ACME CORP."), ("address", "123 Main Street")],
    )];
    let query = Query::new()
        .with_field("name", "Acme Corp")
        .with_field("address", "123 Main St");

    let matcher = Matcher::new(MatchConfig {
        threshold: NAME_ADDRESS_THRESHOLD,
        ..Default::default()
    })
    .unwrap();
    let results = matcher.run(&query, &reference).unwrap();

    assert_eq!(results.len(), 1);
    let top = &results[0];
    assert_eq!(top.field_score("name"), Some(1.0));
    assert!(top.field_score("address").unwrap() > 0.9);

    let mean = (top.field_score("name").unwrap() + top.field_score("address").unwrap()) / 2.0;
    assert!((top.composite - mean).abs() < 1e-12);
    assert!(top.composite > 0.75);
}

#[test]
fn test_empty_reference_policies() {
    let query = Query::new().with_field("name", "John Smith");

    let strict = Matcher::new(MatchConfig::default()).unwrap();
    assert!(matches!(strict.run(&query, &[]), Err(Error::EmptyReference)));

    let permissive = Matcher::new(MatchConfig {
        allow_empty_reference: true,
        ..Default::default()
    })
    .unwrap();
    assert!(permissive.run(&query, &[]).unwrap().is_empty());
}

#[test]
fn test_row_missing_queried_field_is_excluded() {
    // Row 1 has no address column: excluded outright, not scored as zero
    let reference = vec![
        record(0, &[("name", "John Smith"), ("address", "123 Main St")]),
        record(1, &[("name", "John Smith")]),
    ];
    let query = Query::new()
        .with_field("name", "John Smith")
        .with_field("address", "123 Main St");

    let matcher = Matcher::new(MatchConfig {
        threshold: 0.0,
        ..Default::default()
    })
    .unwrap();
    let results = matcher.run(&query, &reference).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].index, 0);
}

#[test]
fn test_score_zero_policy_keeps_partial_rows() {
    let reference = vec![
        record(0, &[("name", "John Smith"), ("address", "123 Main St")]),
        record(1, &[("name", "John Smith")]),
    ];
    let query = Query::new()
        .with_field("name", "John Smith")
        .with_field("address", "123 Main St");

    let matcher = Matcher::new(MatchConfig {
        threshold: 0.0,
        missing_fields: MissingFieldPolicy::ScoreZero,
        ..Default::default()
    })
    .unwrap();
    let results = matcher.run(&query, &reference).unwrap();

    assert_eq!(results.len(), 2);
    // The complete row outranks the diluted partial row
    assert_eq!(results[0].index, 0);
    assert_eq!(results[1].field_score("address"), Some(0.0));
    assert!((results[1].composite - 0.5).abs() < 1e-12);
}

#[test]
fn test_result_determinism_across_runs_and_workers() {
    let names = [
        "Maria Gonzales", "Mario Gonzalez", "Maria Gonzalez", "Anna Schmidt",
        "M. Gonzalez", "Maria G.", "Gonzalez Maria", "Marta Gonzalez",
        "Mary Gonzales", "Marie Gonzalez", "Jane Doe", "John Smith",
    ];
    let reference: Vec<_> = names
        .iter()
        .enumerate()
        .map(|(i, n)| record(i, &[("name", *n)]))
        .collect();
    let query = Query::new().with_field("name", "Maria Gonzalez");

    let run = |workers: usize| {
        Matcher::new(MatchConfig {
            threshold: 0.6,
            worker_count: Some(workers),
            ..Default::default()
        })
        .unwrap()
        .run(&query, &reference)
        .unwrap()
    };

    let baseline = run(1);
    for workers in [2, 3, 8] {
        assert_eq!(run(workers), baseline, "workers = {workers}");
    }
    assert_eq!(run(1), baseline);
}

#[test]
fn test_top_k_after_filtering() {
    let reference = vec![
        record(0, &[("name", "zzzzz")]),
        record(1, &[("name", "John Smith")]),
        record(2, &[("name", "Jon Smith")]),
        record(3, &[("name", "Johan Smith")]),
    ];
    let query = Query::new().with_field("name", "John Smith");

    let matcher = Matcher::new(MatchConfig {
        threshold: 0.85,
        top_k: Some(2),
        ..Default::default()
    })
    .unwrap();
    let results = matcher.run(&query, &reference).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].index, 1);
    assert!(results.iter().all(|r| r.composite > 0.85));
}

#[test]
fn test_cancelled_match_returns_no_results() {
    let reference = vec![record(0, &[("name", "John Smith")])];
    let query = Query::new().with_field("name", "John Smith");
    let matcher = Matcher::new(MatchConfig::default()).unwrap();

    let cancel = CancelToken::new();
    cancel.cancel();
    assert!(matches!(
        matcher.run_with_cancel(&query, &reference, &cancel),
        Err(Error::Cancelled)
    ));
}

#[test]
fn test_csv_watchlist_end_to_end() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "name,address\n\
         ACME CORP.,123 Main Street\n\
         Jane Doe,9 Elm Rd\n\
         John Smith,42 Oak Ave\n"
    )
    .unwrap();

    let reference = load_reference_csv(file.path()).unwrap();
    require_columns(&reference, ["name", "address"]).unwrap();

    let query = Query::new()
        .with_field("name", "Acme Corp")
        .with_field("address", "123 Main St");
    let matcher = Matcher::new(MatchConfig {
        threshold: NAME_ADDRESS_THRESHOLD,
        ..Default::default()
    })
    .unwrap();

    let results = matcher.run(&query, &reference).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].index, 0);
}

#[test]
fn test_metric_properties_via_public_api() {
    let samples = ["Jon Smith", "ACME CORP.", "", "O'Brien", "123 Main St"];
    for a in samples {
        let na = normalize(a);
        assert_eq!(normalize(&na), na);
        for b in samples {
            let nb = normalize(b);
            let s = similarity(&na, &nb);
            assert!((0.0..=1.0).contains(&s));
            assert_eq!(s, similarity(&nb, &na));
        }
        if !na.is_empty() {
            assert_eq!(similarity(&na, &na), 1.0);
        }
    }
}
