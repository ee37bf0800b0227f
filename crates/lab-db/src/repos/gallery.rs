//! Artwork gallery and laptop repository.

use lab_core::entities::{Artwork, Laptop, NewArtwork, NewLaptop};

use crate::error::DatabaseError;
use crate::helpers::{collect_rows, finish_transaction, get_decimal, map_constraint_error, parse_enum};
use crate::service::LabService;

const ARTWORK_COLS: &str = "id, artist_name, art_name, rating, price";
const LAPTOP_COLS: &str = "id, brand, processor, memory, storage, operation_system, price";

const INSERT_ARTWORK_SQL: &str =
    "INSERT INTO artworks (artist_name, art_name, rating, price) VALUES (?1, ?2, ?3, ?4)";

fn artwork_params(new: &NewArtwork) -> Vec<libsql::Value> {
    vec![
        new.artist_name.clone().into(),
        new.art_name.clone().into(),
        new.rating.into(),
        new.price.to_string().into(),
    ]
}

fn artwork_with_id(id: i64, new: &NewArtwork) -> Artwork {
    Artwork {
        id,
        artist_name: new.artist_name.clone(),
        art_name: new.art_name.clone(),
        rating: new.rating,
        price: new.price,
    }
}

fn row_to_artwork(row: &libsql::Row) -> Result<Artwork, DatabaseError> {
    Ok(Artwork {
        id: row.get(0)?,
        artist_name: row.get(1)?,
        art_name: row.get(2)?,
        rating: row.get(3)?,
        price: get_decimal(row, 4)?,
    })
}

fn row_to_laptop(row: &libsql::Row) -> Result<Laptop, DatabaseError> {
    Ok(Laptop {
        id: row.get(0)?,
        brand: parse_enum(&row.get::<String>(1)?)?,
        processor: row.get(2)?,
        memory: row.get(3)?,
        storage: row.get(4)?,
        operation_system: parse_enum(&row.get::<String>(5)?)?,
        price: get_decimal(row, 6)?,
    })
}

impl LabService {
    pub async fn create_artwork(&self, new: &NewArtwork) -> Result<Artwork, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(INSERT_ARTWORK_SQL, libsql::params_from_iter(artwork_params(new)))
            .await?;
        Ok(artwork_with_id(id, new))
    }

    /// Insert both artworks in one transaction.
    pub async fn bulk_create_arts(
        &self,
        first: &NewArtwork,
        second: &NewArtwork,
    ) -> Result<Vec<Artwork>, DatabaseError> {
        Self::check(first)?;
        Self::check(second)?;
        let tx = self.db().conn().transaction().await?;
        let result = async {
            let mut created = Vec::with_capacity(2);
            for new in [first, second] {
                tx.execute(INSERT_ARTWORK_SQL, libsql::params_from_iter(artwork_params(new)))
                    .await
                    .map_err(map_constraint_error)?;
                created.push(artwork_with_id(tx.last_insert_rowid(), new));
            }
            Ok::<_, DatabaseError>(created)
        }
        .await;
        finish_transaction(tx, result).await
    }

    pub async fn list_artworks(&self) -> Result<Vec<Artwork>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(&format!("SELECT {ARTWORK_COLS} FROM artworks ORDER BY id"), ())
            .await?;
        collect_rows(rows, row_to_artwork).await
    }

    /// Highest rating wins; ties go to the oldest artwork. `None` on an empty gallery.
    pub async fn show_highest_rated_art(&self) -> Result<Option<String>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {ARTWORK_COLS} FROM artworks ORDER BY rating DESC, id ASC LIMIT 1"),
                (),
            )
            .await?;
        rows.next()
            .await?
            .map(|row| row_to_artwork(&row).map(|art| art.highest_rated_line()))
            .transpose()
    }

    pub async fn delete_negative_rated_arts(&self) -> Result<u64, DatabaseError> {
        let removed = self
            .db()
            .execute("DELETE FROM artworks WHERE rating < 0", ())
            .await?;
        tracing::info!(removed, "negative rated artworks deleted");
        Ok(removed)
    }

    pub async fn create_laptop(&self, new: &NewLaptop) -> Result<Laptop, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO laptops (brand, processor, memory, storage, operation_system, price)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    new.brand.as_str(),
                    new.processor.as_str(),
                    new.memory,
                    new.storage,
                    new.operation_system.as_str(),
                    new.price.to_string()
                ],
            )
            .await?;
        Ok(Laptop {
            id,
            brand: new.brand,
            processor: new.processor.clone(),
            memory: new.memory,
            storage: new.storage,
            operation_system: new.operation_system,
            price: new.price,
        })
    }

    pub async fn list_laptops(&self) -> Result<Vec<Laptop>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(&format!("SELECT {LAPTOP_COLS} FROM laptops ORDER BY id"), ())
            .await?;
        collect_rows(rows, row_to_laptop).await
    }

    /// Priciest laptop; ties go to the newest. `None` when there are no laptops.
    pub async fn show_the_most_expensive_laptop(&self) -> Result<Option<String>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {LAPTOP_COLS} FROM laptops
                     ORDER BY CAST(price AS NUMERIC) DESC, id DESC LIMIT 1"
                ),
                (),
            )
            .await?;
        rows.next()
            .await?
            .map(|row| row_to_laptop(&row).map(|laptop| laptop.most_expensive_line()))
            .transpose()
    }
}
