//! Product Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, make_thing, parse_record_key};
use crate::db::models::{Product, ProductCreate};

const PRODUCT_TABLE: &str = "product";

// =============================================================================
// Product Repository
// =============================================================================

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all products, database-default order
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self.base.db().select(PRODUCT_TABLE).await?;
        Ok(products)
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let key = parse_record_key(PRODUCT_TABLE, id)?;
        let product: Option<Product> = self.base.db().select((PRODUCT_TABLE, key.as_str())).await?;
        Ok(product)
    }

    /// Create a new product
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        let product = Product {
            id: None,
            product_name: data.product_name,
            image: data.image.unwrap_or_default(),
            category: data.category,
            quantity: data.quantity.unwrap_or(0),
            price: data.price.unwrap_or(0.0),
            description: data.description,
        };

        let created: Option<Product> = self
            .base
            .db()
            .create(PRODUCT_TABLE)
            .content(product)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Adjust stock by a delta, in either direction
    ///
    /// One atomic increment at the storage layer, so concurrent adjustments
    /// never lose updates. There is no lower bound: a decrement larger than
    /// the current stock leaves the quantity negative.
    pub async fn adjust_quantity(
        &self,
        id: &str,
        delta: i64,
        increase: bool,
    ) -> RepoResult<Product> {
        let key = parse_record_key(PRODUCT_TABLE, id)?;
        let thing = make_thing(PRODUCT_TABLE, &key);
        let signed = if increase { delta } else { -delta };

        let mut result = self
            .base
            .db()
            .query("UPDATE $product SET quantity += $delta RETURN AFTER")
            .bind(("product", thing))
            .bind(("delta", signed))
            .await?;

        let products: Vec<Product> = result.take(0)?;
        products
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))
    }
}
