use super::*;
use crate::net::api::ApiError;
use crate::test_support::{Call, FakeApi};
use futures::executor::block_on;

fn desk() -> Product {
    Product { id: 4, name: "Desk".to_owned(), status: ProductStatus::InStock, client_id: 2, created_at: None }
}

#[test]
fn load_products_forwards_filter() {
    let api = FakeApi { products: vec![desk()], ..FakeApi::new() };
    let filter = ProductFilter::from_form("desk", "on_order", "2");
    assert_eq!(block_on(load_products(&api, &filter)), Ok(vec![desk()]));
    assert_eq!(api.calls(), vec![Call::ListProducts(filter)]);
}

#[test]
fn load_products_failure_uses_fixed_message() {
    let api = FakeApi::failing(ApiError::Transport("offline".to_owned()));
    assert_eq!(block_on(load_products(&api, &ProductFilter::default())), Err(LOAD_FAILED.to_owned()));
}

#[test]
fn save_product_puts_name_and_status() {
    let api = FakeApi::new();
    let update = ProductUpdate { name: "Standing desk".to_owned(), status: ProductStatus::OnOrder };
    assert_eq!(block_on(save_product(&api, 4, &update)), Ok("Product updated"));
    assert_eq!(api.calls(), vec![Call::UpdateProduct(4, update)]);
}

#[test]
fn remove_product_reports_success() {
    let api = FakeApi::new();
    assert_eq!(block_on(remove_product(&api, 4)), Ok("Product deleted"));
    assert_eq!(api.calls(), vec![Call::DeleteProduct(4)]);
}

#[test]
fn remove_product_forbidden_surfaces_detail() {
    let api = FakeApi::failing(ApiError::Status { status: 403, detail: Some("Admins only".to_owned()) });
    assert_eq!(block_on(remove_product(&api, 4)), Err("Admins only".to_owned()));
}
