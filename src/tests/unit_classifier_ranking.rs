use crate::domain::classify::classify_options;
use crate::domain::{Decision, ItineraryOption};

// build an option with a distinctive dep_hour so reorderings are visible
fn option(dep_hour: i64, market_share: f64) -> ItineraryOption {
    ItineraryOption {
        dep_hour,
        arr_hour: dep_hour + 2,
        elapsed_time: 120.0 + dep_hour as f64,
        market_share,
    }
}

// four distinct shares: ranks 1 through 4, so exactly the top three are Create
#[test]
fn test_distinct_shares_top_three_create() {
    let options = vec![
        option(6, 0.3),
        option(7, 0.1),
        option(8, 0.5),
        option(9, 0.2),
    ];

    let classified = classify_options(options);

    let decisions: Vec<Decision> = classified.iter().map(|c| c.decision).collect();
    assert_eq!(
        decisions,
        vec![
            Decision::Create,
            Decision::Create,
            Decision::Create,
            Decision::Cancel
        ]
    );

    // best share first
    assert_eq!(classified[0].dep_hour, 8);
    assert_eq!(classified[3].dep_hour, 7);
}

// two options tied at the top: ranks are 1, 1, 3 and everything is Create
#[test]
fn test_tie_at_top_all_create() {
    let options = vec![option(6, 0.5), option(7, 0.5), option(8, 0.3)];

    let classified = classify_options(options);

    assert!(classified.iter().all(|c| c.decision == Decision::Create));
}

// a tie group swallows the ranks it spans: with shares 0.5, 0.5, 0.4, 0.3 the
// ranks are 1, 1, 3, 4, so the 0.4 option still makes the cut and the 0.3
// option does not
#[test]
fn test_tie_group_skips_ranks() {
    let options = vec![
        option(6, 0.5),
        option(7, 0.5),
        option(8, 0.4),
        option(9, 0.3),
    ];

    let classified = classify_options(options);

    assert_eq!(classified[2].dep_hour, 8);
    assert_eq!(classified[2].decision, Decision::Create);
    assert_eq!(classified[3].dep_hour, 9);
    assert_eq!(classified[3].decision, Decision::Cancel);
}

#[test]
fn test_single_option_create() {
    let classified = classify_options(vec![option(10, 0.9)]);

    assert_eq!(classified.len(), 1);
    assert_eq!(classified[0].decision, Decision::Create);
}

#[test]
fn test_fewer_than_three_all_create() {
    let classified = classify_options(vec![option(6, 0.8), option(7, 0.1)]);

    assert!(classified.iter().all(|c| c.decision == Decision::Create));
}

// empty input is valid and classifies to an empty output, not an error
#[test]
fn test_empty_input_empty_output() {
    assert!(classify_options(Vec::new()).is_empty());
}

// five options all sharing one value are all tied at rank 1, so despite the
// "top 3" framing every one of them is Create
#[test]
fn test_all_tied_all_create() {
    let options = (0..5).map(|i| option(i, 0.4)).collect();

    let classified = classify_options(options);

    assert_eq!(classified.len(), 5);
    assert!(classified.iter().all(|c| c.decision == Decision::Create));
}

// the classifier only relabels and reorders: every option survives unchanged
#[test]
fn test_output_preserves_every_option() {
    let options = vec![
        option(6, 0.3),
        option(7, 0.3),
        option(8, 0.9),
        option(9, 0.1),
        option(10, 0.5),
    ];

    let classified = classify_options(options.clone());
    assert_eq!(classified.len(), options.len());

    let mut input_fields: Vec<(i64, i64, f64, f64)> = options
        .iter()
        .map(|o| (o.dep_hour, o.arr_hour, o.elapsed_time, o.market_share))
        .collect();
    let mut output_fields: Vec<(i64, i64, f64, f64)> = classified
        .iter()
        .map(|c| (c.dep_hour, c.arr_hour, c.elapsed_time, c.market_share))
        .collect();

    input_fields.sort_by(|a, b| a.partial_cmp(b).unwrap());
    output_fields.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(input_fields, output_fields);
}

// output comes back best-share-first
#[test]
fn test_output_sorted_by_market_share_descending() {
    let options = vec![
        option(6, 0.2),
        option(7, 0.7),
        option(8, 0.4),
        option(9, 0.7),
    ];

    let classified = classify_options(options);

    for pair in classified.windows(2) {
        assert!(pair[0].market_share >= pair[1].market_share);
    }
}

// the sort is stable, so tied options keep the order the store returned
#[test]
fn test_ties_keep_incoming_order() {
    let options = vec![option(14, 0.4), option(9, 0.4), option(11, 0.4)];

    let classified = classify_options(options);

    let hours: Vec<i64> = classified.iter().map(|c| c.dep_hour).collect();
    assert_eq!(hours, vec![14, 9, 11]);
}

// same input, same output, every time
#[test]
fn test_classifier_idempotent() {
    let options = vec![
        option(6, 0.5),
        option(7, 0.5),
        option(8, 0.2),
        option(9, 0.9),
    ];

    let first = classify_options(options.clone());
    let second = classify_options(options);

    assert_eq!(first, second);
}
