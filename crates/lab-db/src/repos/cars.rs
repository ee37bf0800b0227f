//! Car repository.

use lab_core::entities::{Car, CarPrice, NewCar};
use rust_decimal::Decimal;

use crate::error::DatabaseError;
use crate::helpers::{collect_rows, get_decimal};
use crate::service::LabService;

const SELECT_COLS: &str = "id, model, year, price, price_with_discount";

/// Cars newer than this year are listed by [`LabService::get_recent_cars`].
pub const RECENT_AFTER_YEAR: i64 = 2020;

fn row_to_car(row: &libsql::Row) -> Result<Car, DatabaseError> {
    Ok(Car {
        id: row.get(0)?,
        model: row.get(1)?,
        year: row.get(2)?,
        price: get_decimal(row, 3)?,
        price_with_discount: get_decimal(row, 4)?,
    })
}

impl LabService {
    pub async fn create_car(&self, new: &NewCar) -> Result<Car, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO cars (model, year, price, price_with_discount) VALUES (?1, ?2, ?3, '0')",
                libsql::params![new.model.as_str(), new.year, new.price.to_string()],
            )
            .await?;
        Ok(Car {
            id,
            model: new.model.clone(),
            year: new.year,
            price: new.price,
            price_with_discount: Decimal::ZERO,
        })
    }

    pub async fn list_cars(&self) -> Result<Vec<Car>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM cars ORDER BY id"), ())
            .await?;
        collect_rows(rows, row_to_car).await
    }

    /// Store the year-based discounted price on every car. Returns rows touched.
    pub async fn apply_discount(&self) -> Result<usize, DatabaseError> {
        let cars = self.list_cars().await?;
        for car in &cars {
            self.db()
                .execute(
                    "UPDATE cars SET price_with_discount = ?1 WHERE id = ?2",
                    libsql::params![car.discounted_price().to_string(), car.id],
                )
                .await?;
        }
        tracing::info!(count = cars.len(), "car discounts applied");
        Ok(cars.len())
    }

    pub async fn get_recent_cars(&self) -> Result<Vec<CarPrice>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT model, price_with_discount FROM cars WHERE year > ?1 ORDER BY id",
                [RECENT_AFTER_YEAR],
            )
            .await?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(CarPrice {
                model: row.get(0)?,
                price_with_discount: get_decimal(&row, 1)?,
            });
        }
        Ok(out)
    }

    /// Delete the car with the highest id. Returns whether a row was removed.
    pub async fn delete_last_car(&self) -> Result<bool, DatabaseError> {
        let removed = self
            .db()
            .execute(
                "DELETE FROM cars WHERE id = (SELECT MAX(id) FROM cars)",
                (),
            )
            .await?;
        if removed == 0 {
            tracing::warn!("no car to delete");
        }
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::test_service;

    fn car(model: &str, year: i64, price: &str) -> NewCar {
        NewCar {
            model: model.into(),
            year,
            price: price.parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn discount_uses_year_digit_sum() {
        let svc = test_service().await;
        svc.create_car(&car("Mercedes C63 AMG", 2019, "120000.00")).await.unwrap();
        svc.create_car(&car("Audi Q7 S line", 2023, "183900.00")).await.unwrap();
        assert_eq!(svc.apply_discount().await.unwrap(), 2);

        let cars = svc.list_cars().await.unwrap();
        // 2019 → 12% off, 2023 → 7% off
        assert_eq!(cars[0].price_with_discount.to_string(), "105600.00");
        assert_eq!(cars[1].price_with_discount.to_string(), "171027.00");
    }

    #[tokio::test]
    async fn recent_cars_are_after_2020() {
        let svc = test_service().await;
        svc.create_car(&car("Old", 2020, "10.00")).await.unwrap();
        svc.create_car(&car("New", 2021, "100.00")).await.unwrap();
        svc.apply_discount().await.unwrap();

        let recent = svc.get_recent_cars().await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].model, "New");
        assert_eq!(recent[0].price_with_discount.to_string(), "95.00");
    }

    #[tokio::test]
    async fn delete_last_car_removes_highest_id() {
        let svc = test_service().await;
        assert!(!svc.delete_last_car().await.unwrap());
        svc.create_car(&car("First", 2000, "1.00")).await.unwrap();
        svc.create_car(&car("Second", 2001, "1.00")).await.unwrap();
        assert!(svc.delete_last_car().await.unwrap());
        let cars = svc.list_cars().await.unwrap();
        assert_eq!(cars.len(), 1);
        assert_eq!(cars[0].model, "First");
    }
}
