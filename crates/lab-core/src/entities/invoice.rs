use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationErrors, Validator, rules};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BillingInfo {
    pub id: i64,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewBillingInfo {
    pub address: String,
}

impl Validate for NewBillingInfo {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::required("address", &self.address))
            .check(rules::max_length("address", &self.address, 200))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Invoice {
    pub id: i64,
    pub invoice_number: String,
    pub billing_info_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewInvoice {
    pub invoice_number: String,
    pub billing_info_id: i64,
}

impl Validate for NewInvoice {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .check(rules::required("invoice_number", &self.invoice_number))
            .check(rules::max_length("invoice_number", &self.invoice_number, 20))
            .finish()
    }
}

/// An invoice joined with its one-to-one billing record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InvoiceWithBilling {
    #[serde(flatten)]
    pub invoice: Invoice,
    pub billing_info: BillingInfo,
}
