//! Order Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, parse_record_key};
use crate::db::models::{EnrichedOrder, Order, OrderCreate, OrderStatus};
use crate::utils::now_millis;

const ORDER_TABLE: &str = "order";

/// Enriched customer listing, as one statement.
///
/// The inner select matches the customer's orders and coerces the stored
/// productId string into a record id; the outer select follows that record
/// link to promote the product's display fields, then omits the link itself.
/// An order whose productId does not resolve keeps its enrichment fields
/// empty but still appears in the result.
const CUSTOMER_ORDERS_QUERY: &str = "\
    SELECT *, \
        product_ref.productName AS name, \
        product_ref.image AS image, \
        product_ref.category AS category \
    OMIT product_ref \
    FROM ( \
        SELECT *, type::record(productId) AS product_ref \
        FROM order WHERE customer.email = $email \
    )";

// =============================================================================
// Order Repository
// =============================================================================

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Create a new order
    ///
    /// Order creation does not touch the referenced product's stock; the
    /// quantity adjustment endpoint is a separate call.
    pub async fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        let order = Order {
            id: None,
            customer: data.customer,
            product_id: data.product_id,
            status: data.status.unwrap_or_default(),
            quantity: data.quantity.unwrap_or(1),
            price: data.price.unwrap_or(0.0),
            created_at: now_millis(),
        };

        let created: Option<Order> = self.base.db().create(ORDER_TABLE).content(order).await?;

        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let key = parse_record_key(ORDER_TABLE, id)?;
        let order: Option<Order> = self.base.db().select((ORDER_TABLE, key.as_str())).await?;
        Ok(order)
    }

    /// All orders for a customer email, enriched with product display fields
    pub async fn find_by_customer(&self, email: &str) -> RepoResult<Vec<EnrichedOrder>> {
        let mut result = self
            .base
            .db()
            .query(CUSTOMER_ORDERS_QUERY)
            .bind(("email", email.to_string()))
            .await?;
        let orders: Vec<EnrichedOrder> = result.take(0)?;
        Ok(orders)
    }

    /// Cancel an order, unless it has already been delivered
    ///
    /// The lookup handles the absent case explicitly so a missing order
    /// surfaces as NotFound rather than failing the status check.
    pub async fn cancel(&self, id: &str) -> RepoResult<Order> {
        let key = parse_record_key(ORDER_TABLE, id)?;

        let order: Option<Order> = self.base.db().select((ORDER_TABLE, key.as_str())).await?;
        let order = match order {
            Some(o) => o,
            None => return Err(RepoError::NotFound(format!("Order {id} not found"))),
        };

        if order.status == OrderStatus::Delivered {
            return Err(RepoError::Conflict(
                "Cannot cancel an order once it has been delivered".to_string(),
            ));
        }

        let deleted: Option<Order> = self.base.db().delete((ORDER_TABLE, key.as_str())).await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
    }
}
