//! Read-only admin metadata.
//!
//! Each registered entity declares which columns a listing shows, which ones
//! are searchable or filterable, and how the detail view groups its fields.
//! Computed columns (not stored on the row) are listed in `list_display` and
//! filled in by the caller before projection.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fieldset {
    pub title: &'static str,
    pub fields: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminSpec {
    /// Registry key, e.g. `"product"`.
    pub entity: &'static str,
    pub list_display: &'static [&'static str],
    pub search_fields: &'static [&'static str],
    pub list_filter: &'static [&'static str],
    pub fieldsets: &'static [Fieldset],
    pub date_hierarchy: Option<&'static str>,
    /// Columns in `list_display` that are derived rather than stored.
    pub computed: &'static [&'static str],
}

impl AdminSpec {
    const fn listing(entity: &'static str, list_display: &'static [&'static str]) -> Self {
        Self {
            entity,
            list_display,
            search_fields: &[],
            list_filter: &[],
            fieldsets: &[],
            date_hierarchy: None,
            computed: &[],
        }
    }

    /// Keep only the `list_display` columns of a serialized row, in order.
    ///
    /// Columns missing from `row` are rendered as `null`.
    #[must_use]
    pub fn project(&self, row: &Value) -> Vec<(&'static str, Value)> {
        self.list_display
            .iter()
            .map(|column| (*column, row.get(*column).cloned().unwrap_or(Value::Null)))
            .collect()
    }

    /// Whether `query` occurs (case-insensitively) in any search field of `row`.
    #[must_use]
    pub fn matches_search(&self, row: &Value, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.search_fields.iter().any(|field| {
            row.get(*field)
                .and_then(Value::as_str)
                .is_some_and(|text| text.to_lowercase().contains(&needle))
        })
    }
}

const PRODUCT: AdminSpec = AdminSpec {
    entity: "product",
    list_display: &["name", "category", "price", "created_on"],
    search_fields: &["name", "category", "supplier"],
    list_filter: &["category", "supplier"],
    fieldsets: &[
        Fieldset {
            title: "General Information",
            fields: &["name", "description", "price", "barcode"],
        },
        Fieldset {
            title: "Categorization",
            fields: &["category", "supplier"],
        },
    ],
    date_hierarchy: Some("created_on"),
    computed: &[],
};

const VEHICLE: AdminSpec = AdminSpec {
    computed: &["car_details"],
    ..AdminSpec::listing("vehicle", &["model", "year", "owner", "car_details"])
};

static REGISTRY: &[AdminSpec] = &[
    PRODUCT,
    AdminSpec::listing("pet", &["name", "species"]),
    AdminSpec::listing(
        "artifact",
        &["name", "origin", "age", "description", "is_magical"],
    ),
    AdminSpec::listing(
        "location",
        &["name", "region", "population", "description", "is_capital"],
    ),
    AdminSpec::listing("car", &["model", "year", "price", "price_with_discount"]),
    AdminSpec::listing("todo", &["title", "description", "due_date", "is_finished"]),
    VEHICLE,
];

/// Every registered entity, in registration order.
#[must_use]
pub fn registered() -> &'static [AdminSpec] {
    REGISTRY
}

/// Look up an entity's admin metadata by registry key.
#[must_use]
pub fn lookup(entity: &str) -> Option<&'static AdminSpec> {
    REGISTRY.iter().find(|spec| spec.entity == entity)
}
