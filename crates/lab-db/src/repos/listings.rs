//! Real estate listing queries.

use lab_core::entities::{LocationCount, NewRealEstateListing, RealEstateListing};
use lab_core::enums::PropertyType;
use rust_decimal::Decimal;

use crate::error::DatabaseError;
use crate::helpers::{collect_rows, get_decimal, parse_enum};
use crate::service::LabService;

const SELECT_COLS: &str = "id, property_type, price, bedrooms, location";

/// How many locations [`LabService::popular_locations`] reports.
const POPULAR_LIMIT: i64 = 2;

fn row_to_listing(row: &libsql::Row) -> Result<RealEstateListing, DatabaseError> {
    Ok(RealEstateListing {
        id: row.get(0)?,
        property_type: parse_enum(&row.get::<String>(1)?)?,
        price: get_decimal(row, 2)?,
        bedrooms: row.get(3)?,
        location: row.get(4)?,
    })
}

impl LabService {
    pub async fn create_listing(
        &self,
        new: &NewRealEstateListing,
    ) -> Result<RealEstateListing, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO real_estate_listings (property_type, price, bedrooms, location)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    new.property_type.as_str(),
                    new.price.to_string(),
                    new.bedrooms,
                    new.location.as_str()
                ],
            )
            .await?;
        Ok(RealEstateListing {
            id,
            property_type: new.property_type,
            price: new.price,
            bedrooms: new.bedrooms,
            location: new.location.clone(),
        })
    }

    async fn listings_where(
        &self,
        predicate: &str,
        params: Vec<libsql::Value>,
    ) -> Result<Vec<RealEstateListing>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM real_estate_listings WHERE {predicate} ORDER BY id"),
                libsql::params_from_iter(params),
            )
            .await?;
        collect_rows(rows, row_to_listing).await
    }

    pub async fn by_property_type(
        &self,
        property_type: PropertyType,
    ) -> Result<Vec<RealEstateListing>, DatabaseError> {
        self.listings_where("property_type = ?1", vec![property_type.as_str().into()])
            .await
    }

    /// Listings priced within `[min, max]`, both ends included.
    pub async fn in_price_range(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> Result<Vec<RealEstateListing>, DatabaseError> {
        self.listings_where(
            "CAST(price AS NUMERIC) BETWEEN CAST(?1 AS NUMERIC) AND CAST(?2 AS NUMERIC)",
            vec![min.to_string().into(), max.to_string().into()],
        )
        .await
    }

    pub async fn with_bedrooms(&self, bedrooms: i64) -> Result<Vec<RealEstateListing>, DatabaseError> {
        self.listings_where("bedrooms = ?1", vec![bedrooms.into()]).await
    }

    /// The two locations with the most listings; ties break alphabetically.
    pub async fn popular_locations(&self) -> Result<Vec<LocationCount>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT location, COUNT(location) AS location_count FROM real_estate_listings
                 GROUP BY location ORDER BY location_count DESC, location ASC LIMIT ?1",
                [POPULAR_LIMIT],
            )
            .await?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(LocationCount {
                location: row.get(0)?,
                location_count: row.get(1)?,
            });
        }
        Ok(out)
    }
}
