//! Restaurants, menus and reviews. Reviews list best rated first.

use lab_core::entities::{
    Menu, MenuReview, NewMenu, NewMenuReview, NewRestaurant, NewRestaurantReview, Restaurant,
    RestaurantReview, RestaurantReviewKind, ReviewFields,
};

use crate::error::DatabaseError;
use crate::helpers::{collect_rows, get_decimal, get_opt_string};
use crate::service::LabService;

const RESTAURANT_COLS: &str = "id, name, location, description, rating";
const RESTAURANT_REVIEW_COLS: &str =
    "id, restaurant_id, reviewer_name, review_content, rating, kind, food_critic_cuisine_area";
const MENU_REVIEW_COLS: &str = "id, menu_id, reviewer_name, review_content, rating";

fn row_to_restaurant(row: &libsql::Row) -> Result<Restaurant, DatabaseError> {
    Ok(Restaurant {
        id: row.get(0)?,
        name: row.get(1)?,
        location: row.get(2)?,
        description: get_opt_string(row, 3)?,
        rating: get_decimal(row, 4)?,
    })
}

fn row_to_menu(row: &libsql::Row) -> Result<Menu, DatabaseError> {
    Ok(Menu {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        restaurant_id: row.get(3)?,
    })
}

fn row_to_review_fields(row: &libsql::Row) -> Result<ReviewFields, DatabaseError> {
    Ok(ReviewFields {
        reviewer_name: row.get(2)?,
        review_content: row.get(3)?,
        rating: row.get(4)?,
    })
}

fn row_to_restaurant_review(row: &libsql::Row) -> Result<RestaurantReview, DatabaseError> {
    let kind = match row.get::<String>(5)?.as_str() {
        "regular" => RestaurantReviewKind::Regular,
        "food_critic" => RestaurantReviewKind::FoodCritic {
            food_critic_cuisine_area: get_opt_string(row, 6)?.unwrap_or_default(),
        },
        other => return Err(DatabaseError::Query(format!("Unknown review kind '{other}'"))),
    };
    Ok(RestaurantReview {
        id: row.get(0)?,
        restaurant_id: row.get(1)?,
        review: row_to_review_fields(row)?,
        kind,
    })
}

fn row_to_menu_review(row: &libsql::Row) -> Result<MenuReview, DatabaseError> {
    Ok(MenuReview {
        id: row.get(0)?,
        menu_id: row.get(1)?,
        review: row_to_review_fields(row)?,
    })
}

impl LabService {
    pub async fn create_restaurant(&self, new: &NewRestaurant) -> Result<Restaurant, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO restaurants (name, location, description, rating) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    new.name.as_str(),
                    new.location.as_str(),
                    new.description.clone().map_or(libsql::Value::Null, Into::into),
                    new.rating.to_string()
                ],
            )
            .await?;
        Ok(Restaurant {
            id,
            name: new.name.clone(),
            location: new.location.clone(),
            description: new.description.clone(),
            rating: new.rating,
        })
    }

    pub async fn get_restaurant(&self, id: i64) -> Result<Restaurant, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {RESTAURANT_COLS} FROM restaurants WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("Restaurant", id))?;
        row_to_restaurant(&row)
    }

    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(&format!("SELECT {RESTAURANT_COLS} FROM restaurants ORDER BY id"), ())
            .await?;
        collect_rows(rows, row_to_restaurant).await
    }

    pub async fn delete_restaurant(&self, id: i64) -> Result<(), DatabaseError> {
        let removed = self
            .db()
            .execute("DELETE FROM restaurants WHERE id = ?1", [id])
            .await?;
        if removed == 0 {
            return Err(DatabaseError::not_found("Restaurant", id));
        }
        Ok(())
    }

    pub async fn create_menu(&self, new: &NewMenu) -> Result<Menu, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO menus (name, description, restaurant_id) VALUES (?1, ?2, ?3)",
                libsql::params![new.name.as_str(), new.description.as_str(), new.restaurant_id],
            )
            .await?;
        Ok(Menu {
            id,
            name: new.name.clone(),
            description: new.description.clone(),
            restaurant_id: new.restaurant_id,
        })
    }

    pub async fn menus_for(&self, restaurant_id: i64) -> Result<Vec<Menu>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                "SELECT id, name, description, restaurant_id FROM menus
                 WHERE restaurant_id = ?1 ORDER BY id",
                [restaurant_id],
            )
            .await?;
        collect_rows(rows, row_to_menu).await
    }

    /// A reviewer may review each restaurant once, whatever the review kind.
    pub async fn create_restaurant_review(
        &self,
        new: &NewRestaurantReview,
    ) -> Result<RestaurantReview, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO restaurant_reviews
                 (restaurant_id, reviewer_name, review_content, rating, kind, food_critic_cuisine_area)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    new.restaurant_id,
                    new.review.reviewer_name.as_str(),
                    new.review.review_content.as_str(),
                    new.review.rating,
                    new.kind.label(),
                    new.kind
                        .cuisine_area()
                        .map_or(libsql::Value::Null, |area| area.to_string().into())
                ],
            )
            .await?;
        Ok(RestaurantReview {
            id,
            restaurant_id: new.restaurant_id,
            review: new.review.clone(),
            kind: new.kind.clone(),
        })
    }

    pub async fn restaurant_reviews(
        &self,
        restaurant_id: i64,
    ) -> Result<Vec<RestaurantReview>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {RESTAURANT_REVIEW_COLS} FROM restaurant_reviews
                     WHERE restaurant_id = ?1 ORDER BY rating DESC, id"
                ),
                [restaurant_id],
            )
            .await?;
        collect_rows(rows, row_to_restaurant_review).await
    }

    pub async fn create_menu_review(&self, new: &NewMenuReview) -> Result<MenuReview, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO menu_reviews (menu_id, reviewer_name, review_content, rating)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    new.menu_id,
                    new.review.reviewer_name.as_str(),
                    new.review.review_content.as_str(),
                    new.review.rating
                ],
            )
            .await?;
        Ok(MenuReview {
            id,
            menu_id: new.menu_id,
            review: new.review.clone(),
        })
    }

    pub async fn menu_reviews(&self, menu_id: i64) -> Result<Vec<MenuReview>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {MENU_REVIEW_COLS} FROM menu_reviews
                     WHERE menu_id = ?1 ORDER BY rating DESC, id"
                ),
                [menu_id],
            )
            .await?;
        collect_rows(rows, row_to_menu_review).await
    }
}
