use super::*;

#[test]
fn signature_ignores_case_and_padding() {
    let a = signature(ActorType::Attorney, ActorType::Donor, "Jane", "Doe");
    let b = signature(ActorType::Attorney, ActorType::Donor, " JANE ", "doe");
    assert_eq!(a, b);
    assert_eq!(a.len(), 16);
}

#[test]
fn signature_depends_on_roles() {
    let donor = signature(ActorType::Attorney, ActorType::Donor, "Jane", "Doe");
    let cp = signature(ActorType::Attorney, ActorType::CertificateProvider, "Jane", "Doe");
    let replacement = signature(ActorType::ReplacementAttorney, ActorType::Donor, "Jane", "Doe");
    assert_ne!(donor, cp);
    assert_ne!(donor, replacement);
}

#[test]
fn matching_acknowledgement_suppresses_warning() {
    let warning = name_warning(ActorType::Attorney, Some(ActorType::Donor), "Jane", "Doe", "")
        .expect("warning shown");
    assert_eq!(warning.matched, ActorType::Donor);

    let acknowledged = name_warning(
        ActorType::Attorney,
        Some(ActorType::Donor),
        "Jane",
        "Doe",
        &warning.signature,
    );
    assert_eq!(acknowledged, None);
}

#[test]
fn stale_acknowledgement_does_not_suppress_a_different_collision() {
    let first = SameNameWarning::new(ActorType::Attorney, ActorType::Donor, "Jane", "Doe");

    let second = name_warning(
        ActorType::Attorney,
        Some(ActorType::CertificateProvider),
        "Jane",
        "Doe",
        &first.signature,
    );
    assert_eq!(
        second.map(|w| w.matched),
        Some(ActorType::CertificateProvider)
    );
}

#[test]
fn no_match_means_no_warning() {
    assert_eq!(
        name_warning(ActorType::Attorney, None, "Jane", "Doe", ""),
        None
    );
}

#[test]
fn dob_warning_needs_its_own_key() {
    assert_eq!(
        dob_warning(Some(DobWarning::Over100), "attorneyDateOfBirthIsUnder18"),
        Some(DobWarning::Over100)
    );
    assert_eq!(
        dob_warning(Some(DobWarning::Over100), "dateOfBirthIsOver100"),
        None
    );
    assert_eq!(dob_warning(None, ""), None);
}
