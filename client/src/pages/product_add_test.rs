use super::*;
use crate::components::client_search_box::settle_and_search;
use crate::net::types::ClientFilter;
use crate::test_support::{Call, FakeApi, sample_client};
use futures::executor::block_on;

#[test]
fn submit_without_selected_client_sends_nothing() {
    let api = FakeApi::new();
    let result = block_on(submit_new_product(&api, "Desk", ProductStatus::InStock, None));
    assert_eq!(result, Err(NO_CLIENT_SELECTED.to_owned()));
    assert!(api.calls().is_empty());
}

#[test]
fn submit_with_blank_name_sends_nothing() {
    let api = FakeApi::new();
    assert!(block_on(submit_new_product(&api, "  ", ProductStatus::InStock, Some(1))).is_err());
    assert!(api.calls().is_empty());
}

#[test]
fn submit_creates_product_and_goes_to_list() {
    let api = FakeApi::new();
    let result = block_on(submit_new_product(&api, " Desk ", ProductStatus::OutOfStock, Some(3)));
    assert_eq!(result, Ok(PRODUCTS_PATH));
    assert_eq!(
        api.calls(),
        vec![Call::CreateProduct(ProductInput { name: "Desk".to_owned(), status: ProductStatus::OutOfStock, client_id: 3 })]
    );
}

#[test]
fn search_then_select_then_submit() {
    let api = FakeApi { clients: vec![sample_client(8, "Иван Иванов")], ..FakeApi::new() };
    let search = RwSignal::new(ClientSearchState::default());

    let mut last = 0;
    for text in ["И", "Ив", "Иван"] {
        last = search.try_update(|s| s.input(text.to_owned())).unwrap_or_default();
    }
    block_on(settle_and_search(&api, search, last)).unwrap();
    let picked = search.get_untracked().results[0].clone();
    search.update(|s| s.select(picked));

    let client_id = search.get_untracked().selected_id();
    block_on(submit_new_product(&api, "Desk", ProductStatus::InStock, client_id)).unwrap();

    assert_eq!(
        api.calls(),
        vec![
            Call::ListClients(ClientFilter::by_name("Иван")),
            Call::CreateProduct(ProductInput { name: "Desk".to_owned(), status: ProductStatus::InStock, client_id: 8 }),
        ]
    );
}

#[test]
fn editing_search_text_clears_selection() {
    let search = RwSignal::new(ClientSearchState::default());
    search.update(|s| s.select(sample_client(8, "Иван Иванов")));
    search.update(|s| {
        s.input("Иван Ив".to_owned());
    });
    assert_eq!(product_input("Desk", ProductStatus::InStock, search.get_untracked().selected_id()), Err(NO_CLIENT_SELECTED));
}
