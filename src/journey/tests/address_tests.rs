use super::*;
use crate::testing::{address, form, StubLookup};

fn candidates() -> StubLookup {
    StubLookup::found(vec![address("1 Road"), address("2 Road")])
}

#[tokio::test]
async fn test_lookup_returns_candidates() {
    let step = resolve(
        &form(&[("action", "postcode-lookup"), ("lookup-postcode", "B14 7ED")]),
        &candidates(),
    )
    .await
    .unwrap();

    match step {
        AddressStep::Feedback(feedback) => {
            assert!(feedback.errors.is_empty());
            assert_eq!(feedback.addresses.len(), 2);
        }
        AddressStep::Chosen(address) => panic!("unexpected address {:?}", address),
    }
}

#[tokio::test]
async fn test_empty_lookup_result_is_not_an_error() {
    let step = resolve(
        &form(&[("action", "postcode-lookup"), ("lookup-postcode", "NG1")]),
        &StubLookup::found(Vec::new()),
    )
    .await
    .unwrap();

    match step {
        AddressStep::Feedback(feedback) => {
            assert!(feedback.errors.is_empty());
            assert!(feedback.addresses.is_empty());
        }
        AddressStep::Chosen(address) => panic!("unexpected address {:?}", address),
    }
}

#[tokio::test]
async fn test_bad_request_becomes_field_error() {
    let lookup = StubLookup::failing(LookupError::BadRequest("nope".to_string()));
    let step = resolve(
        &form(&[("action", "postcode-lookup"), ("lookup-postcode", "XYZ")]),
        &lookup,
    )
    .await
    .unwrap();

    match step {
        AddressStep::Feedback(feedback) => assert_eq!(
            feedback.errors.get("lookup-postcode"),
            Some(&Problem::Custom {
                label: "couldNotLookupPostcode"
            })
        ),
        AddressStep::Chosen(address) => panic!("unexpected address {:?}", address),
    }
}

#[tokio::test]
async fn test_other_lookup_failures_propagate() {
    let lookup = StubLookup::failing(LookupError::Other("service down".to_string()));
    let result = resolve(
        &form(&[("action", "postcode-lookup"), ("lookup-postcode", "B14 7ED")]),
        &lookup,
    )
    .await;

    assert!(matches!(
        result,
        Err(JourneyError::Lookup(LookupError::Other(_)))
    ));
}

#[tokio::test]
async fn test_missing_postcode_is_enter_error() {
    let step = resolve(&form(&[("action", "postcode-lookup")]), &candidates())
        .await
        .unwrap();

    match step {
        AddressStep::Feedback(feedback) => assert_eq!(
            feedback.errors.get("lookup-postcode"),
            Some(&Problem::Enter { label: "aPostcode" })
        ),
        AddressStep::Chosen(address) => panic!("unexpected address {:?}", address),
    }
}

#[tokio::test]
async fn test_select_picks_candidate_by_position() {
    let step = resolve(
        &form(&[
            ("action", "postcode-select"),
            ("lookup-postcode", "B14 7ED"),
            ("select-address", "2"),
        ]),
        &candidates(),
    )
    .await
    .unwrap();

    match step {
        AddressStep::Chosen(chosen) => assert_eq!(chosen.line1, "2 Road"),
        AddressStep::Feedback(feedback) => panic!("unexpected feedback {:?}", feedback),
    }
}

#[tokio::test]
async fn test_select_out_of_range_keeps_candidates() {
    let step = resolve(
        &form(&[
            ("action", "postcode-select"),
            ("lookup-postcode", "B14 7ED"),
            ("select-address", "3"),
        ]),
        &candidates(),
    )
    .await
    .unwrap();

    match step {
        AddressStep::Feedback(feedback) => {
            assert!(feedback.errors.has("select-address"));
            assert_eq!(feedback.addresses.len(), 2);
        }
        AddressStep::Chosen(address) => panic!("unexpected address {:?}", address),
    }
}

#[tokio::test]
async fn test_manual_address_requires_line1_and_town() {
    let step = resolve(&form(&[("action", "manual")]), &candidates())
        .await
        .unwrap();
    match step {
        AddressStep::Feedback(feedback) => {
            assert_eq!(feedback.errors.fields(), vec!["address-line-1", "address-town"]);
        }
        AddressStep::Chosen(address) => panic!("unexpected address {:?}", address),
    }

    let step = resolve(
        &form(&[
            ("action", "manual"),
            ("address-line-1", "1 New Road"),
            ("address-town", "Leeds"),
            ("address-postcode", "ls1 1aa"),
        ]),
        &candidates(),
    )
    .await
    .unwrap();
    match step {
        AddressStep::Chosen(chosen) => {
            assert_eq!(chosen.line1, "1 New Road");
            assert_eq!(chosen.postcode, "LS1 1AA");
            assert_eq!(chosen.country, "GB");
        }
        AddressStep::Feedback(feedback) => panic!("unexpected feedback {:?}", feedback),
    }
}

#[tokio::test]
async fn test_unknown_action_is_select_error() {
    let step = resolve(&form(&[]), &candidates()).await.unwrap();
    match step {
        AddressStep::Feedback(feedback) => assert!(feedback.errors.has("action")),
        AddressStep::Chosen(address) => panic!("unexpected address {:?}", address),
    }
}
