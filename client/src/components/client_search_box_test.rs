use super::*;
use crate::test_support::{Call, FakeApi, sample_client};
use futures::executor::block_on;

fn fake_with_clients() -> FakeApi {
    FakeApi {
        clients: vec![sample_client(1, "Иван Иванов"), sample_client(2, "Ivan Petrov"), sample_client(3, "Olga")],
        ..FakeApi::new()
    }
}

#[test]
fn rapid_typing_sends_one_request_with_final_text() {
    let api = fake_with_clients();
    let search = RwSignal::new(ClientSearchState::default());

    let timers: Vec<u64> = ["И", "Ив", "Ива", "Иван"]
        .into_iter()
        .map(|text| search.try_update(|s| s.input(text.to_owned())).unwrap_or_default())
        .collect();

    for generation in timers {
        block_on(settle_and_search(&api, search, generation)).unwrap();
    }

    assert_eq!(api.calls(), vec![Call::ListClients(ClientFilter::by_name("Иван"))]);
    let results = search.get_untracked().results;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 1);
}

#[test]
fn blank_text_sends_nothing_and_clears_results() {
    let api = fake_with_clients();
    let search = RwSignal::new(ClientSearchState::default());

    let generation = search.try_update(|s| s.input("Olga".to_owned())).unwrap_or_default();
    block_on(settle_and_search(&api, search, generation)).unwrap();
    assert_eq!(search.get_untracked().results.len(), 1);

    let generation = search.try_update(|s| s.input("   ".to_owned())).unwrap_or_default();
    block_on(settle_and_search(&api, search, generation)).unwrap();

    assert_eq!(api.calls().len(), 1);
    assert!(search.get_untracked().results.is_empty());
}

#[test]
fn failed_search_reports_error_and_keeps_state_consistent() {
    let api = FakeApi::failing(ApiError::Status { status: 500, detail: None });
    let search = RwSignal::new(ClientSearchState::default());

    let generation = search.try_update(|s| s.input("Ivan".to_owned())).unwrap_or_default();
    let err = block_on(settle_and_search(&api, search, generation)).unwrap_err();

    assert_eq!(err.user_message(SEARCH_FAILED), SEARCH_FAILED);
    assert!(search.get_untracked().results.is_empty());
}

#[test]
fn selecting_a_result_records_the_client() {
    let api = fake_with_clients();
    let search = RwSignal::new(ClientSearchState::default());

    let generation = search.try_update(|s| s.input("ivan".to_owned())).unwrap_or_default();
    block_on(settle_and_search(&api, search, generation)).unwrap();
    let picked = search.get_untracked().results[0].clone();
    search.update(|s| s.select(picked));

    let state = search.get_untracked();
    assert_eq!(state.selected_id(), Some(2));
    assert_eq!(state.text, "Ivan Petrov");
    assert!(state.results.is_empty());
}
