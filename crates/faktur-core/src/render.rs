//! Invoice → self-contained HTML.
//!
//! Produces the same document the original preview iframe showed: the
//! embedded template with every `${{…}}` token resolved, the line items
//! expanded into an inline-styled table, and the logo inlined as a base64
//! `<img>`. The output references no external resources, so it can be
//! handed straight to the PDF converter.

use std::collections::HashMap;

use jiff::civil::Date;

use crate::error::CoreError;
use crate::models::invoice::{Invoice, InvoiceItem};
use crate::money::{format_plain, format_rupiah};
use crate::template;

/// The built-in invoice template.
pub const INVOICE_TEMPLATE: &str = include_str!("../templates/invoice.html");

/// Render an invoice against the built-in template.
pub fn render_invoice(invoice: &Invoice) -> Result<String, CoreError> {
    render_invoice_with(INVOICE_TEMPLATE, invoice)
}

/// Render an invoice against a caller-supplied template.
pub fn render_invoice_with(tpl: &str, invoice: &Invoice) -> Result<String, CoreError> {
    let values = placeholder_values(invoice)?;
    Ok(template::substitute(tpl, &values))
}

/// Build the placeholder value map for an invoice.
pub fn placeholder_values(invoice: &Invoice) -> Result<HashMap<String, String>, CoreError> {
    let date = format_date(&invoice.invoice_date)?;

    let mut values = HashMap::new();
    values.insert("invoice_number".into(), invoice.invoice_number.clone());
    values.insert("invoice_date".into(), date);
    values.insert("customer_name".into(), invoice.customer_name.clone());
    values.insert(
        "customer_address".into(),
        invoice.customer_address.clone(),
    );
    values.insert("items".into(), items_table(&invoice.items));
    values.insert("subtotal".into(), format_rupiah(invoice.subtotal()));
    values.insert("tax_rate".into(), format_tax_rate(invoice.tax_rate));
    values.insert("tax".into(), format_rupiah(invoice.tax()));
    values.insert("total".into(), format_rupiah(invoice.total()));
    values.insert("logo".into(), logo_img(invoice.logo.as_deref()));
    Ok(values)
}

/// `2025-08-17` → `17 August 2025`.
fn format_date(iso: &str) -> Result<String, CoreError> {
    let date = Date::strptime("%Y-%m-%d", iso)
        .map_err(|e| CoreError::InvalidDate(format!("{iso}: {e}")))?;
    jiff::fmt::strtime::format("%d %B %Y", date)
        .map_err(|e| CoreError::InvalidDate(format!("{iso}: {e}")))
}

fn format_tax_rate(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{}", rate as i64)
    } else {
        format!("{rate}")
    }
}

fn logo_img(logo: Option<&str>) -> String {
    match logo {
        Some(data_url) if !data_url.is_empty() => {
            format!("<img src='{data_url}' width='50' height='50'/>")
        }
        _ => String::new(),
    }
}

/// Render line items as an inline-styled table.
pub fn items_table(items: &[InvoiceItem]) -> String {
    const BORDER_RIGHT: &str = "border-right:1px solid #888;";
    const BORDER_LEFT: &str = "border-left:1px solid #888;";
    const BORDER_BOTTOM: &str = "border-bottom:1px solid #888;";

    let mut html = String::from(
        "<table style='border:1px solid #888; font-size:12px; \
         border-collapse:collapse; width:100%;'>\
         <thead><tr style='border:1px solid #888;'>",
    );
    html.push_str(&format!(
        "<th style=\"{BORDER_RIGHT} padding:5px; width:50px;\">No</th>"
    ));
    html.push_str(&format!(
        "<th style=\"{BORDER_RIGHT} padding:5px; width:400px;\">Deskripsi</th>"
    ));
    html.push_str(&format!(
        "<th style='{BORDER_RIGHT} padding:5px;'>Jumlah</th>"
    ));
    html.push_str(&format!(
        "<th style='{BORDER_RIGHT} padding:5px;'>Harga</th>"
    ));
    html.push_str("<th style='padding:5px'>Total</th>");
    html.push_str("</tr></thead><tbody>");

    for (index, item) in items.iter().enumerate() {
        html.push_str(&format!("<tr style='{BORDER_BOTTOM}'>"));
        html.push_str(&format!(
            "<td style=\"width:50px; text-align:center; {BORDER_LEFT} \
             {BORDER_RIGHT} padding:4px\">{}</td>",
            index + 1
        ));
        html.push_str(&format!(
            "<td style=\"width:400px; {BORDER_RIGHT} padding-left:10px; \
             font-weight:600; font-size:12px;\">{}</td>",
            item.description
        ));
        html.push_str(&format!(
            "<td style=\"width:80px; text-align:center; {BORDER_RIGHT} \
             padding:4px\">{}</td>",
            format_plain(i64::from(item.quantity))
        ));
        html.push_str(&format!(
            "<td style=\"width:150px; {BORDER_RIGHT} padding-left:5px\">{}</td>",
            format_rupiah(item.unit_price)
        ));
        html.push_str(&format!(
            "<td style=\"width:200px; text-align:right; {BORDER_RIGHT} \
             padding:4px\">{}</td>",
            format_rupiah(item.line_total())
        ));
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table>");
    html
}
