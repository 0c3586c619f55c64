//! Invoice normalization.
//!
//! Extraction models emit several overlapping, inconsistently-named JSON
//! shapes for the same invoice. [`normalize`] maps any of them into the one
//! canonical [`NormalizedInvoice`], resolving each field through an ordered
//! fallback list of source keys. It is a total function: malformed or empty
//! input yields a view model with absent fields, never an error.

use serde_json::Value;

use super::types::{
    Address, Amounts, Banking, BillingAccount, LineItem, NormalizedInvoice, Party,
};

/// Strings the extraction service emits as typed nulls. A text field
/// carrying one of these is treated as absent.
const TEXT_NULL_SENTINELS: &[&str] = &["", "N/A", "null", "string"];

/// Map a raw extraction output into the canonical view model.
///
/// Documents wrapped in a top-level `invoice` key are unwrapped one level
/// first, so `{"invoice": {...}}` normalizes exactly like the inner object.
/// Every nested access is conditional on its parent's presence; no input
/// can make this fail.
pub fn normalize(raw: &Value) -> NormalizedInvoice {
    let doc = unwrap_document(raw);

    NormalizedInvoice {
        kind: text(doc, "type"),
        internal_number: text(doc, "internal_invoice_number"),
        external_number: text(doc, "external_invoice_number"),
        issue_date: text(doc, "issue_date"),
        due_date: text(doc, "due_date"),
        payment_method: text(doc, "payment_method"),
        description: text(doc, "description"),
        own_party: party(doc.get("own_company_info")),
        counterparty: party(doc.get("counterparty_info")),
        customer_label: text(doc, "customer"),
        billing_account: billing_account(doc.get("billing_account")),
        banking: banking(doc.get("banking_info")),
        amounts: amounts(doc),
        vat_columns: vat_probe(doc),
        line_items: line_items(doc),
        processing_time_ms: doc.get("time").and_then(number_like),
    }
}

/// One source format wraps the document in a top-level `invoice` key.
pub fn unwrap_document(raw: &Value) -> &Value {
    match raw.get("invoice") {
        Some(inner) => inner,
        None => raw,
    }
}

/// Resolve a text field: string (sentinel-scrubbed) or number rendered as
/// text. Anything else is absent.
fn text(obj: &Value, key: &str) -> Option<String> {
    scalar_text(obj.get(key)?)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            if TEXT_NULL_SENTINELS.contains(&s) {
                None
            } else {
                Some(s.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Resolve a monetary/quantity field, keeping the raw scalar. Numbers pass
/// as-is; strings pass unless empty (non-numeric text is a display concern,
/// handled by the currency formatter's pass-through).
fn scalar(obj: &Value, key: &str) -> Option<Value> {
    match obj.get(key)? {
        n @ Value::Number(_) => Some(n.clone()),
        Value::String(s) if !s.trim().is_empty() => Some(Value::String(s.clone())),
        _ => None,
    }
}

fn first_text(obj: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| text(obj, key))
}

fn first_scalar(obj: &Value, keys: &[&str]) -> Option<Value> {
    keys.iter().find_map(|key| scalar(obj, key))
}

fn number_like(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn address(parent: &Value, key: &str) -> Option<Address> {
    let obj = parent.get(key)?;
    let address = Address {
        street: text(obj, "street"),
        postal_code: text(obj, "postalcode"),
        city: text(obj, "city"),
        country: text(obj, "country"),
    };
    (!address.is_empty()).then_some(address)
}

fn party(value: Option<&Value>) -> Option<Party> {
    let obj = value?;
    let party = Party {
        name: text(obj, "company_name"),
        identification_number: text(obj, "identification_number"),
        tax_number: text(obj, "tax_number"),
        address: address(obj, "address"),
    };
    (!party.is_empty()).then_some(party)
}

fn billing_account(value: Option<&Value>) -> Option<BillingAccount> {
    let obj = value?;
    let account = BillingAccount {
        name: text(obj, "account_name"),
        company_id: text(obj, "company_id"),
        vat_id: text(obj, "vat_id"),
        // `adress` is the key actually present in produced outputs; see
        // the note on `BillingAccount`.
        address: address(obj, "adress"),
        phone: text(obj, "account_phone"),
        email: text(obj, "account_email"),
    };
    (!account.is_empty()).then_some(account)
}

fn banking(value: Option<&Value>) -> Option<Banking> {
    let obj = value?;
    let banking = Banking {
        account_number: text(obj, "account_number"),
        bank_code: text(obj, "bank_code"),
        iban: text(obj, "iban"),
        bic: text(obj, "bic"),
    };
    (!banking.is_empty()).then_some(banking)
}

/// Totals block. The rich shape wins when both are present; a rounding
/// amount of exactly 0 is dropped.
fn amounts(doc: &Value) -> Option<Amounts> {
    if let Some(total) = scalar(doc, "amount") {
        Some(Amounts {
            total,
            total_before_rounding: scalar(doc, "amount_wo_rounding"),
            rounding: scalar(doc, "amount_rounding").filter(|v| !is_zero(v)),
            currency: text(doc, "currency_id"),
        })
    } else {
        scalar(doc, "order_total_price").map(|total| Amounts {
            total,
            total_before_rounding: None,
            rounding: None,
            currency: text(doc, "order_currency"),
        })
    }
}

fn is_zero(value: &Value) -> bool {
    number_like(value) == Some(0.0)
}

/// Single probe deciding the VAT columns for the whole table: only a
/// `lines`-shaped array whose first row carries `tax_class_id` gets them.
fn vat_probe(doc: &Value) -> bool {
    doc.get("lines")
        .and_then(Value::as_array)
        .and_then(|lines| lines.first())
        .and_then(|first| first.get("tax_class_id"))
        .is_some_and(|v| !v.is_null())
}

fn line_items(doc: &Value) -> Vec<LineItem> {
    let rows = doc
        .get("lines")
        .and_then(Value::as_array)
        .or_else(|| doc.get("items").and_then(Value::as_array));

    rows.map(|rows| rows.iter().map(line_item).collect())
        .unwrap_or_default()
}

fn line_item(row: &Value) -> LineItem {
    LineItem {
        identifier: first_text(row, &["part_number", "mfr_part_no", "item_id"]),
        description: first_text(row, &["description", "name"]),
        quantity: scalar(row, "quantity"),
        unit_price: scalar(row, "unit_price"),
        total_price: first_scalar(row, &["total_price", "ext_price", "price_without_vat"]),
        vat_percent: scalar(row, "tax_class_id"),
        total_with_vat: first_scalar(row, &["total_with_vat", "price_with_vat"]),
    }
}
