//! Read-only product catalog for Trellis.
//!
//! The catalog is an external collaborator of the cart core: an ordered list
//! of products grouped by category, supplied once at startup and never
//! mutated. It ships with a built-in nursery catalog and can load the same
//! shape from a TOML file:
//!
//! ```toml
//! [[section]]
//! category = "Indoor Plants"
//!
//! [[section.products]]
//! id = 1
//! name = "Snake Plant"
//! price = 120.0
//! image = "/images/snake.jpg"
//! ```

mod builtin;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use thiserror::Error;
use tracing::debug;

use trellis_types::{ProductDraft, ProductId};

/// One product as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CatalogProduct {
    /// The `add-item` payload for this product.
    #[must_use]
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            id: self.id,
            name: Some(self.name.clone()),
            price: Number::from_f64(self.price).map(Value::Number),
            image: self.image.clone(),
            quantity: None,
        }
    }
}

/// A named group of products, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSection {
    pub category: String,
    pub products: Vec<CatalogProduct>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse catalog file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
    #[error("duplicate product id {0} in catalog")]
    DuplicateId(ProductId),
    #[error("invalid price {price} for product {id}")]
    InvalidPrice { id: ProductId, price: f64 },
}

/// The full product listing, validated on construction: ids are unique
/// across all sections and every price is finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "section")]
    sections: Vec<CatalogSection>,
}

impl Catalog {
    /// The stock nursery catalog compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            sections: builtin::sections(),
        }
    }

    /// Build a catalog from sections, validating ids and prices.
    pub fn from_sections(sections: Vec<CatalogSection>) -> Result<Self, CatalogError> {
        let catalog = Self { sections };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a TOML catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog: Self = toml::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        catalog.validate()?;
        debug!(
            path = %path.display(),
            sections = catalog.sections.len(),
            products = catalog.product_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn sections(&self) -> &[CatalogSection] {
        &self.sections
    }

    /// All products in catalog order, across sections.
    pub fn products(&self) -> impl Iterator<Item = &CatalogProduct> {
        self.sections.iter().flat_map(|section| &section.products)
    }

    #[must_use]
    pub fn product_count(&self) -> usize {
        self.sections.iter().map(|s| s.products.len()).sum()
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CatalogProduct> {
        self.products().find(|product| product.id == id)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = Vec::with_capacity(self.product_count());
        for product in self.products() {
            if seen.contains(&product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    id: product.id,
                    price: product.price,
                });
            }
            seen.push(product.id);
        }
        Ok(())
    }
}
