//! Restaurants, menus and their reviews.

use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationErrors, Validator, rules};

pub const MENU_CATEGORIES: &[&str] = &["Appetizers", "Main Course", "Desserts"];
const REVIEW_RATING_MAX: i64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub rating: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewRestaurant {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    pub rating: Decimal,
}

impl Validate for NewRestaurant {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(
                rules::min_length("name", &self.name, 2)
                    .map_err(|e| e.with_message("Name must be at least 2 characters long.")),
            )
            .check(
                rules::max_length("name", &self.name, 100)
                    .map_err(|e| e.with_message("Name cannot exceed 100 characters.")),
            )
            .check(
                rules::min_length("location", &self.location, 2)
                    .map_err(|e| e.with_message("Location must be at least 2 characters long.")),
            )
            .check(
                rules::max_length("location", &self.location, 200)
                    .map_err(|e| e.with_message("Location cannot exceed 200 characters.")),
            )
            .check(
                rules::min_value("rating", self.rating, Decimal::ZERO)
                    .map_err(|e| e.with_message("Rating must be at least 0.00.")),
            )
            .check(
                rules::max_value("rating", self.rating, Decimal::new(500, 2))
                    .map_err(|e| e.with_message("Rating cannot exceed 5.00.")),
            )
            .check(rules::decimal_digits("rating", self.rating, 3, 2))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Menu {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub restaurant_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewMenu {
    pub name: String,
    pub description: String,
    pub restaurant_id: i64,
}

impl Validate for NewMenu {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::required("name", &self.name))
            .check(rules::max_length("name", &self.name, 100))
            .check(
                rules::contains_all("description", &self.description, MENU_CATEGORIES).map_err(
                    |e| {
                        e.with_message(
                            "The menu must include each of the categories \"Appetizers\", \"Main Course\", \"Desserts\".",
                        )
                    },
                ),
            )
            .finish()
    }
}

/// Columns shared by every review.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReviewFields {
    pub reviewer_name: String,
    pub review_content: String,
    pub rating: i64,
}

impl ReviewFields {
    fn check(&self, v: &mut Validator) {
        v.check(rules::required("reviewer_name", &self.reviewer_name))
            .check(rules::max_length("reviewer_name", &self.reviewer_name, 100))
            .check(rules::non_negative("rating", self.rating))
            .check(rules::max_value("rating", self.rating, REVIEW_RATING_MAX));
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RestaurantReviewKind {
    #[default]
    Regular,
    FoodCritic {
        food_critic_cuisine_area: String,
    },
}

impl RestaurantReviewKind {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::FoodCritic { .. } => "food_critic",
        }
    }

    #[must_use]
    pub const fn verbose_name(&self) -> &'static str {
        match self {
            Self::Regular => "Restaurant Review",
            Self::FoodCritic { .. } => "Food Critic Review",
        }
    }

    #[must_use]
    pub const fn verbose_name_plural(&self) -> &'static str {
        match self {
            Self::Regular => "Restaurant Reviews",
            Self::FoodCritic { .. } => "Food Critic Reviews",
        }
    }

    #[must_use]
    pub fn cuisine_area(&self) -> Option<&str> {
        match self {
            Self::Regular => None,
            Self::FoodCritic {
                food_critic_cuisine_area,
            } => Some(food_critic_cuisine_area),
        }
    }
}

/// Restaurant reviews are unique per `(reviewer_name, restaurant_id)` and
/// listed by rating, best first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RestaurantReview {
    pub id: i64,
    pub restaurant_id: i64,
    #[serde(flatten)]
    pub review: ReviewFields,
    #[serde(flatten)]
    pub kind: RestaurantReviewKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewRestaurantReview {
    pub restaurant_id: i64,
    #[serde(flatten)]
    pub review: ReviewFields,
    #[serde(flatten)]
    pub kind: RestaurantReviewKind,
}

impl Validate for NewRestaurantReview {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        self.review.check(&mut v);
        if let Some(area) = self.kind.cuisine_area() {
            v.check(rules::max_length("food_critic_cuisine_area", area, 100));
        }
        v.finish()
    }
}

/// Unique per `(reviewer_name, menu_id)`; listed best first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MenuReview {
    pub id: i64,
    pub menu_id: i64,
    #[serde(flatten)]
    pub review: ReviewFields,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewMenuReview {
    pub menu_id: i64,
    #[serde(flatten)]
    pub review: ReviewFields,
}

impl Validate for NewMenuReview {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        self.review.check(&mut v);
        v.finish()
    }
}
