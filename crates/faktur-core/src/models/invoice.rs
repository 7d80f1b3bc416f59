use serde::{Deserialize, Serialize};

/// A complete invoice as submitted by the client.
///
/// Monetary amounts are whole rupiah — IDR has no commonly used
/// fractional unit, and the formatter always renders zero decimals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_number: String,
    /// ISO date, `YYYY-MM-DD`.
    pub invoice_date: String,
    pub customer_name: String,
    pub customer_address: String,
    pub items: Vec<InvoiceItem>,
    /// Tax rate in percent (0–100).
    pub tax_rate: f64,
    /// Company logo as a base64 `data:` URL, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price: i64,
}

impl InvoiceItem {
    pub fn line_total(&self) -> i64 {
        i64::from(self.quantity) * self.unit_price
    }
}

impl Invoice {
    pub fn subtotal(&self) -> i64 {
        self.items.iter().map(InvoiceItem::line_total).sum()
    }

    /// Tax in whole rupiah, rounded half away from zero.
    pub fn tax(&self) -> i64 {
        (self.subtotal() as f64 * self.tax_rate / 100.0).round() as i64
    }

    pub fn total(&self) -> i64 {
        self.subtotal() + self.tax()
    }
}
