//! Invoices and their one-to-one billing records.

use lab_core::entities::{BillingInfo, Invoice, InvoiceWithBilling, NewBillingInfo, NewInvoice};

use crate::error::DatabaseError;
use crate::helpers::collect_rows;
use crate::service::LabService;

const SELECT_COLS: &str = "id, invoice_number, billing_info_id";

fn row_to_invoice(row: &libsql::Row) -> Result<Invoice, DatabaseError> {
    Ok(Invoice {
        id: row.get(0)?,
        invoice_number: row.get(1)?,
        billing_info_id: row.get(2)?,
    })
}

impl LabService {
    pub async fn create_billing_info(
        &self,
        new: &NewBillingInfo,
    ) -> Result<BillingInfo, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO billing_infos (address) VALUES (?1)",
                [new.address.as_str()],
            )
            .await?;
        Ok(BillingInfo {
            id,
            address: new.address.clone(),
        })
    }

    /// Insert an invoice. Both the number and the billing record must be unused.
    pub async fn create_invoice(&self, new: &NewInvoice) -> Result<Invoice, DatabaseError> {
        Self::check(new)?;
        let id = self
            .db()
            .insert(
                "INSERT INTO invoices (invoice_number, billing_info_id) VALUES (?1, ?2)",
                libsql::params![new.invoice_number.as_str(), new.billing_info_id],
            )
            .await?;
        Ok(Invoice {
            id,
            invoice_number: new.invoice_number.clone(),
            billing_info_id: new.billing_info_id,
        })
    }

    /// Invoices whose number starts with `prefix` (case-sensitive).
    pub async fn get_invoices_with_prefix(
        &self,
        prefix: &str,
    ) -> Result<Vec<Invoice>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM invoices
                     WHERE substr(invoice_number, 1, length(?1)) = ?1 ORDER BY id"
                ),
                [prefix],
            )
            .await?;
        collect_rows(rows, row_to_invoice).await
    }

    pub async fn get_invoices_sorted_by_number(&self) -> Result<Vec<Invoice>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM invoices ORDER BY invoice_number"),
                (),
            )
            .await?;
        collect_rows(rows, row_to_invoice).await
    }

    pub async fn get_invoice_with_billing_info(
        &self,
        invoice_number: &str,
    ) -> Result<Option<InvoiceWithBilling>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT i.id, i.invoice_number, i.billing_info_id, b.address
                 FROM invoices i JOIN billing_infos b ON b.id = i.billing_info_id
                 WHERE i.invoice_number = ?1",
                [invoice_number],
            )
            .await?;
        let Some(row) = rows.next().await? else {
            return Ok(None);
        };
        let invoice = row_to_invoice(&row)?;
        let billing_info = BillingInfo {
            id: invoice.billing_info_id,
            address: row.get(3)?,
        };
        Ok(Some(InvoiceWithBilling {
            invoice,
            billing_info,
        }))
    }
}
