//! Wire DTOs for the CRM REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON schema field-for-field so serde
//! round-trips stay lossless. Enumerations serialize as the backend's
//! lowercase snake-case strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Client gender as stored by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    #[default]
    Male,
    Female,
    Other,
}

impl Sex {
    pub const ALL: [Sex; 3] = [Sex::Male, Sex::Female, Sex::Other];

    /// Wire value, also used as the `<option>` value in forms.
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
            Sex::Other => "Other",
        }
    }

    /// Parse a form value; unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Product availability as stored by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    #[default]
    InStock,
    OutOfStock,
    OnOrder,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [ProductStatus::InStock, ProductStatus::OutOfStock, ProductStatus::OnOrder];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductStatus::InStock => "in_stock",
            ProductStatus::OutOfStock => "out_of_stock",
            ProductStatus::OnOrder => "on_order",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProductStatus::InStock => "In stock",
            ProductStatus::OutOfStock => "Out of stock",
            ProductStatus::OnOrder => "On order",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// A client record as returned by `/clients/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Backend primary key.
    pub id: i64,
    /// Full name (free text).
    pub full_name: String,
    /// Phone number; unique per client on the backend.
    pub phone: String,
    pub sex: Sex,
    /// Inactive clients are kept but flagged as disabled.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// ISO 8601 creation timestamp, if the backend included it.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Backend user that created the record, if included.
    #[serde(default)]
    pub created_by_id: Option<i64>,
}

fn default_active() -> bool {
    true
}

/// Payload for creating or fully updating a client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInput {
    pub full_name: String,
    pub phone: String,
    pub sex: Sex,
}

/// A product record as returned by `/products/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Backend primary key.
    pub id: i64,
    pub name: String,
    pub status: ProductStatus,
    /// Owning client.
    pub client_id: i64,
    /// ISO 8601 creation timestamp, if the backend included it.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload for creating a product attached to a client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub status: ProductStatus,
    pub client_id: i64,
}

/// Payload for editing a product's name and status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: String,
    pub status: ProductStatus,
}

/// Backend user embedded in audit entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditUser {
    #[serde(default)]
    pub id: Option<i64>,
    pub login: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// One row of the read-only audit trail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: i64,
    /// ISO 8601 timestamp in UTC without offset (backend default).
    pub timestamp: String,
    /// Action name such as `create`, `update`, `delete`, `disable`, `enable`.
    /// Kept as a string so new backend actions still render.
    pub action: String,
    pub user_id: i64,
    pub user: AuditUser,
    /// Entity kind, e.g. `"Client"` or `"Product"`.
    pub target_model: String,
    pub target_id: i64,
    /// Arbitrary structured diff.
    #[serde(default)]
    pub changes: serde_json::Value,
}

/// Response body of `POST /login/token`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Optional filters for the client list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientFilter {
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

impl ClientFilter {
    /// Build a filter from raw form input, dropping blank fields.
    pub fn from_form(full_name: &str, phone: &str) -> Self {
        Self { full_name: non_blank(full_name), phone: non_blank(phone) }
    }

    /// Name-only filter used by the client lookup on the product form.
    pub fn by_name(full_name: &str) -> Self {
        Self { full_name: non_blank(full_name), phone: None }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.full_name {
            pairs.push(("full_name", name.clone()));
        }
        if let Some(phone) = &self.phone {
            pairs.push(("phone", phone.clone()));
        }
        pairs
    }
}

/// Optional filters for the product list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub status: Option<ProductStatus>,
    pub client_id: Option<i64>,
}

impl ProductFilter {
    /// Build a filter from raw form input.
    ///
    /// A non-numeric client ID is ignored rather than sent to the backend.
    pub fn from_form(name: &str, status: &str, client_id: &str) -> Self {
        Self {
            name: non_blank(name),
            status: ProductStatus::parse(status.trim()),
            client_id: client_id.trim().parse().ok(),
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_owned()));
        }
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(client_id) = self.client_id {
            pairs.push(("client_id", client_id.to_string()));
        }
        pairs
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
