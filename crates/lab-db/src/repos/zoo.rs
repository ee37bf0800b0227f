//! Zoo repository: animals (one table, kind column) and staff.

use lab_core::entities::{
    Animal, AnimalKind, EmployeeFields, NewAnimal, NewVeterinarian, NewZooKeeper, Veterinarian,
    ZooKeeper,
};
use lab_core::fields::Availability;
use lab_core::validation::FieldError;

use crate::error::DatabaseError;
use crate::helpers::{
    collect_rows, finish_transaction, format_date, get_bool, get_date, map_constraint_error,
    parse_decimal, parse_enum,
};
use crate::service::LabService;

const ANIMAL_COLS: &str =
    "id, name, species, birth_date, sound, kind, fur_color, wing_span, scale_type";
const KEEPER_COLS: &str = "id, first_name, last_name, phone_number, specialty";
const VET_COLS: &str = "id, first_name, last_name, phone_number, license_number, availability";

fn column_text(row: &libsql::Row, idx: i32, kind: &str) -> Result<String, DatabaseError> {
    row.get::<Option<String>>(idx)?
        .ok_or_else(|| DatabaseError::Query(format!("{kind} animal is missing column {idx}")))
}

fn row_to_animal(row: &libsql::Row) -> Result<Animal, DatabaseError> {
    let kind_label: String = row.get(5)?;
    let kind = match kind_label.as_str() {
        "plain" => AnimalKind::Plain,
        "mammal" => AnimalKind::Mammal {
            fur_color: column_text(row, 6, "mammal")?,
        },
        "bird" => AnimalKind::Bird {
            wing_span: parse_decimal(&column_text(row, 7, "bird")?)?,
        },
        "reptile" => AnimalKind::Reptile {
            scale_type: column_text(row, 8, "reptile")?,
        },
        other => return Err(DatabaseError::Query(format!("Unknown animal kind '{other}'"))),
    };
    Ok(Animal {
        id: row.get(0)?,
        name: row.get(1)?,
        species: row.get(2)?,
        birth_date: get_date(row, 3)?,
        sound: row.get(4)?,
        kind,
    })
}

fn row_to_employee(row: &libsql::Row) -> Result<EmployeeFields, DatabaseError> {
    Ok(EmployeeFields {
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        phone_number: row.get(3)?,
    })
}

fn row_to_veterinarian(row: &libsql::Row) -> Result<Veterinarian, DatabaseError> {
    Ok(Veterinarian {
        id: row.get(0)?,
        employee: row_to_employee(row)?,
        license_number: row.get(4)?,
        availability: Availability(get_bool(row, 5)?),
    })
}

impl LabService {
    pub async fn create_animal(&self, new: &NewAnimal) -> Result<Animal, DatabaseError> {
        Self::check(new)?;
        let (fur_color, wing_span, scale_type) = match &new.kind {
            AnimalKind::Plain => (None, None, None),
            AnimalKind::Mammal { fur_color } => (Some(fur_color.clone()), None, None),
            AnimalKind::Bird { wing_span } => (None, Some(wing_span.to_string()), None),
            AnimalKind::Reptile { scale_type } => (None, None, Some(scale_type.clone())),
        };
        let nullable = |value: Option<String>| value.map_or(libsql::Value::Null, Into::into);
        let id = self
            .db()
            .insert(
                "INSERT INTO animals
                 (name, species, birth_date, sound, kind, fur_color, wing_span, scale_type)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                libsql::params![
                    new.name.as_str(),
                    new.species.as_str(),
                    format_date(new.birth_date),
                    new.sound.as_str(),
                    new.kind.label(),
                    nullable(fur_color),
                    nullable(wing_span),
                    nullable(scale_type)
                ],
            )
            .await?;
        Ok(Animal {
            id,
            name: new.name.clone(),
            species: new.species.clone(),
            birth_date: new.birth_date,
            sound: new.sound.clone(),
            kind: new.kind.clone(),
        })
    }

    pub async fn get_animal(&self, id: i64) -> Result<Animal, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {ANIMAL_COLS} FROM animals WHERE id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("Animal", id))?;
        row_to_animal(&row)
    }

    pub async fn list_animals(&self) -> Result<Vec<Animal>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(&format!("SELECT {ANIMAL_COLS} FROM animals ORDER BY id"), ())
            .await?;
        collect_rows(rows, row_to_animal).await
    }

    /// Store a keeper and link the animals they manage, in one transaction.
    ///
    /// The specialty is checked before anything is written.
    pub async fn create_zoo_keeper(&self, new: &NewZooKeeper) -> Result<ZooKeeper, DatabaseError> {
        Self::check(new)?;
        let specialty = new.specialty().ok_or_else(|| {
            FieldError::new("specialty", "Specialty must be a valid choice.")
        })?;
        let tx = self.db().conn().transaction().await?;
        let result = async {
            tx.execute(
                "INSERT INTO zoo_keepers (first_name, last_name, phone_number, specialty)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    new.employee.first_name.as_str(),
                    new.employee.last_name.as_str(),
                    new.employee.phone_number.as_str(),
                    specialty.as_str()
                ],
            )
            .await
            .map_err(map_constraint_error)?;
            let id = tx.last_insert_rowid();
            for animal_id in &new.managed_animal_ids {
                tx.execute(
                    "INSERT OR IGNORE INTO zoo_keeper_animals (zoo_keeper_id, animal_id)
                     VALUES (?1, ?2)",
                    libsql::params![id, *animal_id],
                )
                .await?;
            }
            Ok::<_, DatabaseError>(id)
        }
        .await;
        let id = finish_transaction(tx, result).await?;
        self.get_zoo_keeper(id).await
    }

    pub async fn get_zoo_keeper(&self, id: i64) -> Result<ZooKeeper, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {KEEPER_COLS} FROM zoo_keepers WHERE id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("ZooKeeper", id))?;
        let employee = row_to_employee(&row)?;
        let specialty = parse_enum(&row.get::<String>(4)?)?;
        Ok(ZooKeeper {
            id,
            employee,
            specialty,
            managed_animal_ids: self.managed_animal_ids(id).await?,
        })
    }

    async fn managed_animal_ids(&self, keeper_id: i64) -> Result<Vec<i64>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT animal_id FROM zoo_keeper_animals WHERE zoo_keeper_id = ?1 ORDER BY animal_id",
                [keeper_id],
            )
            .await?;
        let mut ids = Vec::new();
        while let Some(row) = rows.next().await? {
            ids.push(row.get::<i64>(0)?);
        }
        Ok(ids)
    }

    /// Animals managed by a keeper, in id order.
    pub async fn managed_animals(&self, keeper_id: i64) -> Result<Vec<Animal>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {} FROM animals a
                     JOIN zoo_keeper_animals z ON z.animal_id = a.id
                     WHERE z.zoo_keeper_id = ?1 ORDER BY a.id",
                    prefixed(ANIMAL_COLS, "a")
                ),
                [keeper_id],
            )
            .await?;
        collect_rows(rows, row_to_animal).await
    }

    pub async fn create_veterinarian(
        &self,
        new: &NewVeterinarian,
    ) -> Result<Veterinarian, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO veterinarians
                 (first_name, last_name, phone_number, license_number, availability)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    new.employee.first_name.as_str(),
                    new.employee.last_name.as_str(),
                    new.employee.phone_number.as_str(),
                    new.license_number.as_str(),
                    i64::from(new.availability.is_available())
                ],
            )
            .await?;
        Ok(Veterinarian {
            id,
            employee: new.employee.clone(),
            license_number: new.license_number.clone(),
            availability: new.availability,
        })
    }

    pub async fn list_veterinarians(&self) -> Result<Vec<Veterinarian>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(&format!("SELECT {VET_COLS} FROM veterinarians ORDER BY id"), ())
            .await?;
        collect_rows(rows, row_to_veterinarian).await
    }
}

fn prefixed(cols: &str, alias: &str) -> String {
    cols.split(", ")
        .map(|col| format!("{alias}.{col}"))
        .collect::<Vec<_>>()
        .join(", ")
}
