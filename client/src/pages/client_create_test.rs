use super::*;
use crate::net::api::ApiError;
use crate::net::types::{ClientInput, Sex};
use crate::test_support::{Call, FakeApi};
use futures::executor::block_on;

#[test]
fn create_sends_exactly_one_request_and_goes_home() {
    let api = FakeApi::new();
    let draft = ClientDraft { full_name: "Иван Иванов".to_owned(), phone: "+79990001122".to_owned(), sex: Sex::Male };

    assert_eq!(block_on(submit_new_client(&api, &draft)), Ok("/"));
    assert_eq!(
        api.calls(),
        vec![Call::CreateClient(ClientInput {
            full_name: "Иван Иванов".to_owned(),
            phone: "+79990001122".to_owned(),
            sex: Sex::Male,
        })]
    );
}

#[test]
fn invalid_draft_sends_nothing() {
    let api = FakeApi::new();
    let draft = ClientDraft { full_name: String::new(), phone: "+7".to_owned(), sex: Sex::Male };
    assert!(block_on(submit_new_client(&api, &draft)).is_err());
    assert!(api.calls().is_empty());
}

#[test]
fn backend_rejection_surfaces_detail() {
    let api = FakeApi::failing(ApiError::Status {
        status: 400,
        detail: Some("Phone number already registered.".to_owned()),
    });
    let draft = ClientDraft { full_name: "Ivan".to_owned(), phone: "+7".to_owned(), sex: Sex::Male };
    assert_eq!(block_on(submit_new_client(&api, &draft)), Err("Phone number already registered.".to_owned()));
}

#[test]
fn transport_failure_uses_fixed_message() {
    let api = FakeApi::failing(ApiError::Transport("offline".to_owned()));
    let draft = ClientDraft { full_name: "Ivan".to_owned(), phone: "+7".to_owned(), sex: Sex::Male };
    assert_eq!(block_on(submit_new_client(&api, &draft)), Err(CREATE_FAILED.to_owned()));
}
