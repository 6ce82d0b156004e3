//! Shared fixtures for unit tests.

use std::cell::RefCell;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::net::api::{ApiError, CrmApi};
use crate::net::types::{
    AuditLogEntry, Client, ClientFilter, ClientInput, Product, ProductFilter, ProductInput, ProductUpdate, Sex,
    TokenResponse,
};

/// Unsigned JWT carrying `claims` as its payload.
pub fn make_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}

pub fn sample_client(id: i64, full_name: &str) -> Client {
    Client {
        id,
        full_name: full_name.to_owned(),
        phone: format!("+7999{id:07}"),
        sex: Sex::Male,
        is_active: true,
        created_at: None,
        created_by_id: None,
    }
}

/// One recorded backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Login { username: String, password: String },
    ListClients(ClientFilter),
    GetClient(i64),
    CreateClient(ClientInput),
    UpdateClient(i64, ClientInput),
    DeleteClient(i64),
    SetClientActive(i64, bool),
    ListProducts(ProductFilter),
    CreateProduct(ProductInput),
    UpdateProduct(i64, ProductUpdate),
    DeleteProduct(i64),
    ListAudit,
}

/// In-memory [`CrmApi`] that records calls and returns canned data.
#[derive(Default)]
pub struct FakeApi {
    pub calls: RefCell<Vec<Call>>,
    /// When set, every call fails with this error.
    pub error: Option<ApiError>,
    pub token: String,
    pub clients: Vec<Client>,
    pub products: Vec<Product>,
    pub audit: Vec<AuditLogEntry>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: ApiError) -> Self {
        Self { error: Some(error), ..Self::default() }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl CrmApi for FakeApi {
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        self.record(Call::Login { username: username.to_owned(), password: password.to_owned() })?;
        Ok(TokenResponse { access_token: self.token.clone(), token_type: Some("bearer".to_owned()) })
    }

    async fn list_clients(&self, filter: &ClientFilter) -> Result<Vec<Client>, ApiError> {
        self.record(Call::ListClients(filter.clone()))?;
        let needle = filter.full_name.clone().unwrap_or_default().to_lowercase();
        Ok(self.clients.iter().filter(|c| c.full_name.to_lowercase().contains(&needle)).cloned().collect())
    }

    async fn get_client(&self, id: i64) -> Result<Client, ApiError> {
        self.record(Call::GetClient(id))?;
        self.clients
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(ApiError::Status { status: 404, detail: Some("Client not found".to_owned()) })
    }

    async fn create_client(&self, input: &ClientInput) -> Result<Client, ApiError> {
        self.record(Call::CreateClient(input.clone()))?;
        Ok(Client {
            id: 1,
            full_name: input.full_name.clone(),
            phone: input.phone.clone(),
            sex: input.sex,
            is_active: true,
            created_at: None,
            created_by_id: None,
        })
    }

    async fn update_client(&self, id: i64, input: &ClientInput) -> Result<Client, ApiError> {
        self.record(Call::UpdateClient(id, input.clone()))?;
        Ok(Client {
            id,
            full_name: input.full_name.clone(),
            phone: input.phone.clone(),
            sex: input.sex,
            is_active: true,
            created_at: None,
            created_by_id: None,
        })
    }

    async fn delete_client(&self, id: i64) -> Result<(), ApiError> {
        self.record(Call::DeleteClient(id))
    }

    async fn set_client_active(&self, id: i64, is_active: bool) -> Result<Client, ApiError> {
        self.record(Call::SetClientActive(id, is_active))?;
        let mut client = sample_client(id, "toggled");
        client.is_active = is_active;
        Ok(client)
    }

    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, ApiError> {
        self.record(Call::ListProducts(filter.clone()))?;
        Ok(self.products.clone())
    }

    async fn create_product(&self, input: &ProductInput) -> Result<Product, ApiError> {
        self.record(Call::CreateProduct(input.clone()))?;
        Ok(Product {
            id: 1,
            name: input.name.clone(),
            status: input.status,
            client_id: input.client_id,
            created_at: None,
        })
    }

    async fn update_product(&self, id: i64, input: &ProductUpdate) -> Result<Product, ApiError> {
        self.record(Call::UpdateProduct(id, input.clone()))?;
        Ok(Product { id, name: input.name.clone(), status: input.status, client_id: 1, created_at: None })
    }

    async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        self.record(Call::DeleteProduct(id))
    }

    async fn list_audit(&self) -> Result<Vec<AuditLogEntry>, ApiError> {
        self.record(Call::ListAudit)?;
        Ok(self.audit.clone())
    }
}
