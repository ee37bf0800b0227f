//! Product repository.

use chrono::Utc;
use lab_core::entities::{NewProduct, Product};

use crate::error::DatabaseError;
use crate::helpers::{collect_rows, get_decimal, parse_datetime};
use crate::service::LabService;

const SELECT_COLS: &str = "id, name, description, category, price, barcode, supplier, created_on";

fn row_to_product(row: &libsql::Row) -> Result<Product, DatabaseError> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        category: row.get(3)?,
        price: get_decimal(row, 4)?,
        barcode: row.get(5)?,
        supplier: row.get(6)?,
        created_on: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl LabService {
    pub async fn create_product(&self, new: &NewProduct) -> Result<Product, DatabaseError> {
        Self::check(new)?;
        let created_on = Utc::now();
        let id = self
            .db()
            .insert(
                "INSERT INTO products (name, description, category, price, barcode, supplier, created_on)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    new.name.as_str(),
                    new.description.as_str(),
                    new.category.as_str(),
                    new.price.to_string(),
                    new.barcode.as_str(),
                    new.supplier.as_str(),
                    created_on.to_rfc3339()
                ],
            )
            .await?;
        tracing::debug!(id, name = %new.name, "product created");

        Ok(Product {
            id,
            name: new.name.clone(),
            description: new.description.clone(),
            category: new.category.clone(),
            price: new.price,
            barcode: new.barcode.clone(),
            supplier: new.supplier.clone(),
            created_on,
        })
    }

    pub async fn get_product(&self, id: i64) -> Result<Product, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM products WHERE id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("Product", id))?;
        row_to_product(&row)
    }

    /// Newest first, following the `created_on` date hierarchy.
    pub async fn list_products(&self) -> Result<Vec<Product>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM products ORDER BY created_on DESC, id DESC"),
                (),
            )
            .await?;
        collect_rows(rows, row_to_product).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use super::*;
    use crate::test_support::test_service;

    fn laptop() -> NewProduct {
        NewProduct {
            name: "Laptop".into(),
            description: "Ultrabook".into(),
            category: "Tech".into(),
            price: Decimal::new(129_999, 2),
            barcode: "5901234123457".into(),
            supplier: "Acme".into(),
        }
    }

    #[tokio::test]
    async fn create_product_roundtrip() {
        let svc = test_service().await;
        let created = svc.create_product(&laptop()).await.unwrap();
        let fetched = svc.get_product(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn price_with_too_many_digits_is_rejected() {
        let svc = test_service().await;
        let product = NewProduct {
            price: Decimal::new(1, 3),
            ..laptop()
        };
        let err = svc.create_product(&product).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));
        assert!(svc.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let svc = test_service().await;
        assert!(matches!(
            svc.get_product(42).await,
            Err(DatabaseError::NotFound { .. })
        ));
    }
}
