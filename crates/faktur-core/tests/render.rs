use faktur_core::models::invoice::{Invoice, InvoiceItem};
use faktur_core::render::{items_table, placeholder_values, render_invoice};

fn sample_invoice() -> Invoice {
    Invoice {
        invoice_number: "INV-001".to_string(),
        invoice_date: "2025-08-17".to_string(),
        customer_name: "PT. Contoh".to_string(),
        customer_address: "Jl. Contoh No. 123\nJakarta Selatan 12345".to_string(),
        items: vec![
            InvoiceItem {
                description: "Jasa desain".to_string(),
                quantity: 2,
                unit_price: 750_000,
            },
            InvoiceItem {
                description: "Hosting 1 tahun".to_string(),
                quantity: 1,
                unit_price: 1_200_000,
            },
        ],
        tax_rate: 11.0,
        logo: None,
    }
}

#[test]
fn totals() {
    let invoice = sample_invoice();
    assert_eq!(invoice.subtotal(), 2_700_000);
    assert_eq!(invoice.tax(), 297_000);
    assert_eq!(invoice.total(), 2_997_000);
}

#[test]
fn tax_rounds_half_away_from_zero() {
    let invoice = Invoice {
        items: vec![InvoiceItem {
            description: "x".to_string(),
            quantity: 1,
            unit_price: 5,
        }],
        tax_rate: 10.0,
        ..sample_invoice()
    };
    // 5 * 10% = 0.5 → rounds up to 1
    assert_eq!(invoice.tax(), 1);
}

#[test]
fn items_table_contains_all_rows() {
    let invoice = sample_invoice();
    let html = items_table(&invoice.items);
    assert!(html.contains("Deskripsi"));
    assert!(html.contains("Jasa desain"));
    assert!(html.contains("Hosting 1 tahun"));
    assert!(html.contains("Rp 750.000"));
    // line total of the first row
    assert!(html.contains("Rp 1.500.000"));
}

#[test]
fn placeholder_values_cover_template_vocabulary() {
    let values = placeholder_values(&sample_invoice()).unwrap();
    for key in [
        "invoice_number",
        "invoice_date",
        "customer_name",
        "customer_address",
        "items",
        "subtotal",
        "tax_rate",
        "tax",
        "total",
        "logo",
    ] {
        assert!(values.contains_key(key), "missing placeholder {key}");
    }
    assert_eq!(values["invoice_date"], "17 August 2025");
    assert_eq!(values["tax_rate"], "11");
    assert_eq!(values["logo"], "");
}

#[test]
fn rendered_invoice_is_fully_resolved() {
    let html = render_invoice(&sample_invoice()).unwrap();
    assert!(html.contains("PT. Contoh"));
    assert!(html.contains("INV-001"));
    assert!(html.contains("Rp 2.997.000"));
    assert!(!html.contains("${{"), "unresolved token left in output");
}

#[test]
fn logo_rendered_as_inline_img() {
    let invoice = Invoice {
        logo: Some("data:image/png;base64,iVBORw0KGgo=".to_string()),
        ..sample_invoice()
    };
    let html = render_invoice(&invoice).unwrap();
    assert!(html.contains("<img src='data:image/png;base64,iVBORw0KGgo='"));
}

#[test]
fn invalid_date_is_rejected() {
    let invoice = Invoice {
        invoice_date: "17/08/2025".to_string(),
        ..sample_invoice()
    };
    assert!(render_invoice(&invoice).is_err());
}
