use crate::tests::models::{sample_identity, sample_membership};
use crate::{AuthoritativeUser, LocalUserRecord};

#[test]
fn test_from_authoritative_flattens_identity_and_membership() {
    let user =
        AuthoritativeUser::new(sample_identity("aphacker"), sample_membership("aphacker")).unwrap();

    let record = LocalUserRecord::from_authoritative(&user);

    assert_eq!(record.user_id, "aphacker");
    assert_eq!(record.first_name, "Ada");
    assert_eq!(record.preferred_first_name.as_deref(), Some("Addie"));
    assert_eq!(record.email, "aphacker@example.edu");
    assert_eq!(record.user_group, 4);
    assert_eq!(record.registration_section.as_deref(), Some("2"));
    assert!(!record.manual_registration);
}

#[test]
fn test_identity_and_membership_split_back_out() {
    let membership = sample_membership("aphacker");
    let user = AuthoritativeUser::new(sample_identity("aphacker"), membership.clone()).unwrap();
    let record = LocalUserRecord::from_authoritative(&user);

    assert_eq!(&record.identity(), user.identity());
    assert_eq!(record.membership(&membership.group, membership.term), membership);
}
