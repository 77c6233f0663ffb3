//! Product model matching the admin API wire format.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{id_string, PrincipalRef};

/// Lifecycle state of a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProductStatus {
    #[serde(rename = "activo")]
    Active,
    #[serde(rename = "inactivo")]
    Inactive,
    #[serde(rename = "completado")]
    Completed,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "activo",
            ProductStatus::Inactive => "inactivo",
            ProductStatus::Completed => "completado",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "activo" => Some(ProductStatus::Active),
            "inactivo" => Some(ProductStatus::Inactive),
            "completado" => Some(ProductStatus::Completed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
            ProductStatus::Completed => "completed",
        }
    }
}

impl Default for ProductStatus {
    fn default() -> Self {
        ProductStatus::Active
    }
}

/// A product as returned by the products endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", alias = "id", deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    /// Responsible principal, denormalized by the backend for list views
    #[serde(rename = "responsable")]
    pub responsible: PrincipalRef,
    #[serde(rename = "fecha_fin", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(rename = "estado", default)]
    pub status: ProductStatus,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Product {
    /// Calendar-date part of the end date, when present and well-formed.
    ///
    /// The backend emits full timestamps; edit forms only deal in days.
    pub fn end_date_day(&self) -> Option<NaiveDate> {
        let raw = self.end_date.as_deref()?;
        let day = raw.split('T').next().unwrap_or(raw);
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}

/// Response body of the products listing.
#[derive(Debug, Deserialize)]
pub struct ProductListResponse {
    #[serde(default)]
    pub productos: Vec<Product>,
}

/// Editable projection of a product, submitted as the mutation body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Id of the responsible principal; must not be empty on submit
    #[serde(rename = "responsable")]
    pub responsible: String,
    #[serde(rename = "fecha_fin", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "estado")]
    pub status: ProductStatus,
}

impl ProductDraft {
    /// Pre-fill a draft from an existing record for editing.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            responsible: product.responsible.id.clone(),
            end_date: product.end_date_day(),
            status: product.status,
        }
    }
}
