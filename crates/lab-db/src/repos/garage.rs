//! Owners, vehicles and registrations.

use lab_core::entities::{
    NewOwner, NewRegistration, NewVehicle, Owner, Registration, Vehicle, car_details,
};

use crate::error::DatabaseError;
use crate::helpers::{collect_rows, format_date, parse_optional_date};
use crate::service::LabService;

const VEHICLE_COLS: &str = "id, model, year, owner_id";
const REGISTRATION_COLS: &str = "id, registration_number, registration_date, vehicle_id";

fn row_to_owner(row: &libsql::Row) -> Result<Owner, DatabaseError> {
    Ok(Owner {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

fn row_to_vehicle(row: &libsql::Row) -> Result<Vehicle, DatabaseError> {
    Ok(Vehicle {
        id: row.get(0)?,
        model: row.get(1)?,
        year: row.get(2)?,
        owner_id: row.get::<Option<i64>>(3)?,
    })
}

fn row_to_registration(row: &libsql::Row) -> Result<Registration, DatabaseError> {
    Ok(Registration {
        id: row.get(0)?,
        registration_number: row.get(1)?,
        registration_date: parse_optional_date(row.get::<Option<String>>(2)?.as_deref())?,
        vehicle_id: row.get::<Option<i64>>(3)?,
    })
}

fn optional_id(id: Option<i64>) -> libsql::Value {
    id.map_or(libsql::Value::Null, Into::into)
}

impl LabService {
    pub async fn create_owner(&self, new: &NewOwner) -> Result<Owner, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert("INSERT INTO owners (name) VALUES (?1)", [new.name.as_str()])
            .await?;
        Ok(Owner {
            id,
            name: new.name.clone(),
        })
    }

    pub async fn get_owner(&self, id: i64) -> Result<Owner, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id, name FROM owners WHERE id = ?1", [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("Owner", id))?;
        row_to_owner(&row)
    }

    /// Delete an owner; their vehicles (and those vehicles' registrations) cascade.
    pub async fn delete_owner(&self, id: i64) -> Result<(), DatabaseError> {
        let removed = self
            .db()
            .execute("DELETE FROM owners WHERE id = ?1", [id])
            .await?;
        if removed == 0 {
            return Err(DatabaseError::not_found("Owner", id));
        }
        Ok(())
    }

    pub async fn create_vehicle(&self, new: &NewVehicle) -> Result<Vehicle, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO vehicles (model, year, owner_id) VALUES (?1, ?2, ?3)",
                libsql::params![new.model.as_str(), new.year, optional_id(new.owner_id)],
            )
            .await?;
        Ok(Vehicle {
            id,
            model: new.model.clone(),
            year: new.year,
            owner_id: new.owner_id,
        })
    }

    pub async fn get_vehicle(&self, id: i64) -> Result<Vehicle, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {VEHICLE_COLS} FROM vehicles WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("Vehicle", id))?;
        row_to_vehicle(&row)
    }

    pub async fn list_vehicles(&self) -> Result<Vec<Vehicle>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(&format!("SELECT {VEHICLE_COLS} FROM vehicles ORDER BY id"), ())
            .await?;
        collect_rows(rows, row_to_vehicle).await
    }

    pub async fn create_registration(
        &self,
        new: &NewRegistration,
    ) -> Result<Registration, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO registrations (registration_number, registration_date, vehicle_id)
                 VALUES (?1, ?2, ?3)",
                libsql::params![
                    new.registration_number.as_str(),
                    new.registration_date
                        .map_or(libsql::Value::Null, |d| format_date(d).into()),
                    optional_id(new.vehicle_id)
                ],
            )
            .await?;
        Ok(Registration {
            id,
            registration_number: new.registration_number.clone(),
            registration_date: new.registration_date,
            vehicle_id: new.vehicle_id,
        })
    }

    pub async fn registration_for_vehicle(
        &self,
        vehicle_id: i64,
    ) -> Result<Option<Registration>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {REGISTRATION_COLS} FROM registrations WHERE vehicle_id = ?1"),
                [vehicle_id],
            )
            .await?;
        rows.next()
            .await?
            .map(|row| row_to_registration(&row))
            .transpose()
    }

    /// The admin `car_details` column for one vehicle.
    pub async fn vehicle_car_details(&self, vehicle: &Vehicle) -> Result<String, DatabaseError> {
        let owner = match vehicle.owner_id {
            Some(owner_id) => Some(self.get_owner(owner_id).await?),
            None => None,
        };
        let registration = self.registration_for_vehicle(vehicle.id).await?;
        Ok(car_details(owner.as_ref(), registration.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::test_service;

    #[tokio::test]
    async fn car_details_with_and_without_links() {
        let svc = test_service().await;
        let owner = svc.create_owner(&NewOwner { name: "Ivan".into() }).await.unwrap();
        let owned = svc
            .create_vehicle(&NewVehicle {
                model: "Golf".into(),
                year: 2010,
                owner_id: Some(owner.id),
            })
            .await
            .unwrap();
        svc.create_registration(&NewRegistration {
            registration_number: "CA1234AB".into(),
            registration_date: NaiveDate::from_ymd_opt(2020, 1, 2),
            vehicle_id: Some(owned.id),
        })
        .await
        .unwrap();
        let bare = svc
            .create_vehicle(&NewVehicle {
                model: "Lada".into(),
                year: 1985,
                owner_id: None,
            })
            .await
            .unwrap();

        assert_eq!(
            svc.vehicle_car_details(&owned).await.unwrap(),
            "Owner: Ivan, Registration: CA1234AB"
        );
        assert_eq!(
            svc.vehicle_car_details(&bare).await.unwrap(),
            "Owner: No owner, Registration: No registration number"
        );
    }

    #[tokio::test]
    async fn vehicle_has_at_most_one_registration() {
        let svc = test_service().await;
        let vehicle = svc
            .create_vehicle(&NewVehicle {
                model: "Golf".into(),
                year: 2010,
                owner_id: None,
            })
            .await
            .unwrap();
        let plate = |number: &str| NewRegistration {
            registration_number: number.into(),
            registration_date: None,
            vehicle_id: Some(vehicle.id),
        };
        svc.create_registration(&plate("A1")).await.unwrap();
        let err = svc.create_registration(&plate("A2")).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));
    }

    #[tokio::test]
    async fn deleting_owner_cascades_to_vehicles_and_registrations() {
        let svc = test_service().await;
        let owner = svc.create_owner(&NewOwner { name: "Ivan".into() }).await.unwrap();
        let vehicle = svc
            .create_vehicle(&NewVehicle {
                model: "Golf".into(),
                year: 2010,
                owner_id: Some(owner.id),
            })
            .await
            .unwrap();
        svc.create_registration(&NewRegistration {
            registration_number: "B2".into(),
            registration_date: None,
            vehicle_id: Some(vehicle.id),
        })
        .await
        .unwrap();

        svc.delete_owner(owner.id).await.unwrap();
        assert!(svc.list_vehicles().await.unwrap().is_empty());
        assert_eq!(svc.db().count("registrations").await.unwrap(), 0);
        assert!(matches!(
            svc.delete_owner(owner.id).await,
            Err(DatabaseError::NotFound { .. })
        ));
    }
}
