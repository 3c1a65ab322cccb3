use chrono::Utc;
use purchases::{Purchase, PurchaseError};
use sql_connection::SqlConnect;
use tracing::instrument;

#[derive(Clone)]
pub struct PurchaseDao {
    db: SqlConnect,
}

impl PurchaseDao {
    pub fn new(db: SqlConnect) -> Self { Self { db } }

    #[instrument(skip(self))]
    pub async fn insert(
        &self, user_id: &str, product_id: &str, quantity: i32,
    ) -> Result<Purchase, PurchaseError> {
        let client = self.db.get_client().await?;
        let purchased_at = Utc::now();

        let stmt = client
            .prepare(
                "INSERT INTO purchases (user_id, product_id, quantity, \
                 purchased_at) VALUES ($1, $2, $3, $4) \
                 RETURNING id, user_id, product_id, quantity, purchased_at",
            )
            .await?;
        let row = client
            .query_one(
                &stmt,
                &[&user_id, &product_id, &quantity, &purchased_at],
            )
            .await?;

        Ok(Purchase {
            id: row.get(0),
            user_id: row.get(1),
            product_id: row.get(2),
            quantity: row.get(3),
            purchased_at: row.get(4),
        })
    }

    #[instrument(skip(self))]
    pub async fn count(&self) -> Result<i64, PurchaseError> {
        let client = self.db.get_client().await?;
        let stmt = client.prepare("SELECT COUNT(*) FROM purchases").await?;
        let row = client.query_one(&stmt, &[]).await?;

        Ok(row.get(0))
    }
}
