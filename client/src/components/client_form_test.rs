use super::*;
use crate::test_support::sample_client;

#[test]
fn default_draft_is_empty_male() {
    let draft = ClientDraft::default();
    assert!(draft.full_name.is_empty());
    assert_eq!(draft.sex, Sex::Male);
}

#[test]
fn from_client_copies_editable_fields() {
    let mut client = sample_client(4, "Anna Petrova");
    client.sex = Sex::Female;
    let draft = ClientDraft::from_client(&client);
    assert_eq!(draft.full_name, "Anna Petrova");
    assert_eq!(draft.phone, "+79990000004");
    assert_eq!(draft.sex, Sex::Female);
}

#[test]
fn validate_trims_fields() {
    let draft = ClientDraft { full_name: "  Ivan  ".to_owned(), phone: " +7999 ".to_owned(), sex: Sex::Other };
    assert_eq!(
        draft.validate(),
        Ok(ClientInput { full_name: "Ivan".to_owned(), phone: "+7999".to_owned(), sex: Sex::Other })
    );
}

#[test]
fn validate_rejects_blank_name() {
    let draft = ClientDraft { full_name: "   ".to_owned(), phone: "+7999".to_owned(), sex: Sex::Male };
    assert_eq!(draft.validate(), Err("Enter the client's full name"));
}

#[test]
fn validate_rejects_blank_phone() {
    let draft = ClientDraft { full_name: "Ivan".to_owned(), phone: String::new(), sex: Sex::Male };
    assert_eq!(draft.validate(), Err("Enter the client's phone number"));
}
