//! Backend-neutral report structure.
//!
//! [`render`] selects which sections appear and what goes in them; how they
//! are drawn (HTML, terminal, JSON) is the backend's business. A section is
//! emitted only when its data resolved to something; a table cell whose
//! source value is missing renders `"-"`.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;
use serde_json::Value;

use crate::catalog::SourceImage;
use crate::core::{self, Amounts, BillingAccount, NormalizedInvoice, Party, format_currency};

/// A rendered report: ordered named sections plus an optional processing
/// time, already formatted for display.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub sections: Vec<Section>,
    /// Processing time with two decimals, unit is always milliseconds.
    pub processing_time: Option<String>,
}

/// One named report section.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title: String,
    #[serde(flatten)]
    pub body: SectionBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBody {
    /// Key-value rows, some of which may be multi-line address blocks.
    Fields { rows: Vec<FieldRow> },
    /// Tabular line items.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Embedded source image as a data URI.
    Image { data_uri: String },
    /// Verbatim pretty-printed JSON.
    Json { pretty: String },
}

/// A single labelled row: either plain text or an address block.
#[derive(Debug, Clone, Serialize)]
pub struct FieldRow {
    pub label: String,
    pub text: Option<String>,
    pub address: Option<Vec<String>>,
}

impl FieldRow {
    fn text(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            text: Some(value.into()),
            address: None,
        }
    }

    fn address(label: &str, lines: Vec<String>) -> Self {
        Self {
            label: label.to_string(),
            text: None,
            address: Some(lines),
        }
    }
}

/// Build the display structure for a normalized invoice.
///
/// `raw` is the document as read (used for the verbatim JSON dump; a
/// top-level `invoice` wrapper is unwrapped the same way normalization
/// does). `image` is the optional source image located by filename
/// convention.
pub fn render(invoice: &NormalizedInvoice, raw: &Value, image: Option<&SourceImage>) -> Report {
    let currency = invoice
        .amounts
        .as_ref()
        .and_then(|a| a.currency.clone())
        .unwrap_or_default();

    let mut sections = Vec::new();

    if let Some(image) = image {
        sections.push(Section {
            title: "Original Invoice Image".to_string(),
            body: SectionBody::Image {
                data_uri: format!(
                    "data:{};base64,{}",
                    image.media_type,
                    BASE64.encode(&image.bytes)
                ),
            },
        });
    }

    push_fields(&mut sections, "Invoice Information", header_rows(invoice));

    if let Some(party) = &invoice.own_party {
        push_fields(
            &mut sections,
            "Own Company Information",
            party_rows(party),
        );
    }
    if let Some(party) = &invoice.counterparty {
        push_fields(
            &mut sections,
            "Counterparty Information",
            party_rows(party),
        );
    }

    let mut customer_rows = Vec::new();
    if let Some(label) = &invoice.customer_label {
        customer_rows.push(FieldRow::text("Customer", label.clone()));
    }
    if let Some(account) = &invoice.billing_account {
        customer_rows.extend(billing_rows(account));
    }
    push_fields(
        &mut sections,
        "Customer / Supplier Information",
        customer_rows,
    );

    if let Some(banking) = &invoice.banking {
        let mut rows = Vec::new();
        push_text(&mut rows, "Account Number", &banking.account_number);
        push_text(&mut rows, "Bank Code", &banking.bank_code);
        push_text(&mut rows, "IBAN", &banking.iban);
        push_text(&mut rows, "BIC/SWIFT", &banking.bic);
        push_fields(&mut sections, "Banking Information", rows);
    }

    if let Some(amounts) = &invoice.amounts {
        push_fields(
            &mut sections,
            "Amount Information",
            amount_rows(amounts, &currency),
        );
    }

    if !invoice.line_items.is_empty() {
        sections.push(line_item_table(invoice, &currency));
    }

    sections.push(Section {
        title: "Raw JSON Data".to_string(),
        body: SectionBody::Json {
            pretty: pretty_json(core::unwrap_document(raw)),
        },
    });

    Report {
        sections,
        processing_time: invoice.processing_time_ms.map(|t| format!("{t:.2}")),
    }
}

fn push_fields(sections: &mut Vec<Section>, title: &str, rows: Vec<FieldRow>) {
    if !rows.is_empty() {
        sections.push(Section {
            title: title.to_string(),
            body: SectionBody::Fields { rows },
        });
    }
}

fn push_text(rows: &mut Vec<FieldRow>, label: &str, value: &Option<String>) {
    if let Some(value) = value {
        rows.push(FieldRow::text(label, value.clone()));
    }
}

fn header_rows(invoice: &NormalizedInvoice) -> Vec<FieldRow> {
    let mut rows = Vec::new();
    push_text(&mut rows, "Type", &invoice.kind);
    push_text(&mut rows, "Internal Invoice Number", &invoice.internal_number);
    push_text(&mut rows, "External Invoice Number", &invoice.external_number);
    push_text(&mut rows, "Issue Date", &invoice.issue_date);
    push_text(&mut rows, "Due Date", &invoice.due_date);
    push_text(&mut rows, "Payment Method", &invoice.payment_method);
    push_text(&mut rows, "Description", &invoice.description);
    rows
}

fn party_rows(party: &Party) -> Vec<FieldRow> {
    let mut rows = Vec::new();
    push_text(&mut rows, "Company Name", &party.name);
    push_text(&mut rows, "Identification Number", &party.identification_number);
    push_text(&mut rows, "Tax Number", &party.tax_number);
    if let Some(address) = &party.address {
        rows.push(FieldRow::address("Address", address_lines(address)));
    }
    rows
}

fn billing_rows(account: &BillingAccount) -> Vec<FieldRow> {
    let mut rows = Vec::new();
    push_text(&mut rows, "Supplier Name", &account.name);
    push_text(&mut rows, "Company ID", &account.company_id);
    push_text(&mut rows, "VAT ID", &account.vat_id);
    if let Some(address) = &account.address {
        rows.push(FieldRow::address("Address", address_lines(address)));
    }
    push_text(&mut rows, "Phone", &account.phone);
    push_text(&mut rows, "Email", &account.email);
    rows
}

/// Street / "postalcode city" / country, skipping absent parts.
fn address_lines(address: &crate::core::Address) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(street) = &address.street {
        lines.push(street.clone());
    }
    let locality = [address.postal_code.as_deref(), address.city.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    if !locality.is_empty() {
        lines.push(locality);
    }
    if let Some(country) = &address.country {
        lines.push(country.clone());
    }
    lines
}

fn amount_rows(amounts: &Amounts, currency: &str) -> Vec<FieldRow> {
    let mut rows = vec![FieldRow::text(
        "Total Amount",
        format_currency(&amounts.total, currency),
    )];
    if let Some(value) = &amounts.total_before_rounding {
        rows.push(FieldRow::text(
            "Amount Before Rounding",
            format_currency(value, currency),
        ));
    }
    if let Some(value) = &amounts.rounding {
        rows.push(FieldRow::text(
            "Rounding Amount",
            format_currency(value, currency),
        ));
    }
    if let Some(code) = &amounts.currency {
        rows.push(FieldRow::text("Currency", code.clone()));
    }
    rows
}

fn line_item_table(invoice: &NormalizedInvoice, currency: &str) -> Section {
    let mut headers: Vec<String> = [
        "Part Number",
        "Description",
        "Quantity",
        "Unit Price",
        "Total Price",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    if invoice.vat_columns {
        headers.push("VAT %".to_string());
        headers.push("Total with VAT".to_string());
    }

    let rows = invoice
        .line_items
        .iter()
        .map(|item| {
            let mut row = vec![
                cell_text(&item.identifier),
                cell_text(&item.description),
                item.quantity.as_ref().map(plain).unwrap_or_else(dash),
                cell_money(&item.unit_price, currency),
                cell_money(&item.total_price, currency),
            ];
            if invoice.vat_columns {
                row.push(
                    item.vat_percent
                        .as_ref()
                        .map(|v| format!("{}%", plain(v)))
                        .unwrap_or_else(dash),
                );
                row.push(cell_money(&item.total_with_vat, currency));
            }
            row
        })
        .collect();

    Section {
        title: "Line Items".to_string(),
        body: SectionBody::Table { headers, rows },
    }
}

fn dash() -> String {
    "-".to_string()
}

fn cell_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(dash)
}

fn cell_money(value: &Option<Value>, currency: &str) -> String {
    value
        .as_ref()
        .map(|v| format_currency(v, currency))
        .unwrap_or_else(dash)
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn pretty_json(doc: &Value) -> String {
    serde_json::to_string_pretty(doc).unwrap_or_else(|_| doc.to_string())
}
