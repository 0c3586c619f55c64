use serde::Serialize;
use serde_json::Value;

/// The canonical, fully-optional view model produced by [`normalize`].
///
/// Every field is independently optional: extraction models disagree on
/// field names and omit anything they could not read, so absence is the
/// normal case, never an error. Raw monetary scalars are kept as
/// [`serde_json::Value`] so the currency formatter can pass non-numeric
/// values through unchanged.
///
/// [`normalize`]: crate::core::normalize
#[derive(Debug, Clone, Default, Serialize)]
pub struct NormalizedInvoice {
    /// Document classification (source key `type`).
    pub kind: Option<String>,
    /// Internal invoice number.
    pub internal_number: Option<String>,
    /// External invoice number.
    pub external_number: Option<String>,
    /// Issue date, preserved as text — never parsed.
    pub issue_date: Option<String>,
    /// Due date, preserved as text.
    pub due_date: Option<String>,
    /// Payment method label.
    pub payment_method: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Issuing company (source key `own_company_info`).
    pub own_party: Option<Party>,
    /// Counterparty (source key `counterparty_info`).
    pub counterparty: Option<Party>,
    /// Plain-string `customer` field from the simple shape, surfaced as a
    /// label rather than a structured party.
    pub customer_label: Option<String>,
    /// Supplier record from the legacy `billing_account` shape.
    pub billing_account: Option<BillingAccount>,
    /// Bank details (source key `banking_info`).
    pub banking: Option<Banking>,
    /// Totals block, from whichever of the two competing shapes is present.
    pub amounts: Option<Amounts>,
    /// Whether the line-item table carries VAT columns. Decided once by
    /// probing `lines[0].tax_class_id`; applies to every row.
    pub vat_columns: bool,
    /// Ordered line items (`lines` preferred over `items`).
    pub line_items: Vec<LineItem>,
    /// Extraction processing time in milliseconds (source key `time`).
    pub processing_time_ms: Option<f64>,
}

/// A billing-relevant organization: name, registration IDs, address.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Party {
    pub name: Option<String>,
    /// State registration number (e.g. IČO in Czechia).
    pub identification_number: Option<String>,
    /// VAT registration number (e.g. DIČ in Czechia).
    pub tax_number: Option<String>,
    pub address: Option<Address>,
}

impl Party {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.identification_number.is_none()
            && self.tax_number.is_none()
            && self.address.is_none()
    }
}

/// Supplier record under the legacy `billing_account` shape.
///
/// The nested address lives under the source key `adress` — a typo in the
/// upstream extraction schema that is preserved for compatibility with
/// already-produced outputs, not corrected here.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BillingAccount {
    /// Supplier name (source key `account_name`).
    pub name: Option<String>,
    pub company_id: Option<String>,
    pub vat_id: Option<String>,
    pub address: Option<Address>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl BillingAccount {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.company_id.is_none()
            && self.vat_id.is_none()
            && self.address.is_none()
            && self.phone.is_none()
            && self.email.is_none()
    }
}

/// Postal address. The source key for the postal code is `postalcode`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Address {
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.street.is_none()
            && self.postal_code.is_none()
            && self.city.is_none()
            && self.country.is_none()
    }
}

/// Bank details from `banking_info`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Banking {
    pub account_number: Option<String>,
    pub bank_code: Option<String>,
    pub iban: Option<String>,
    pub bic: Option<String>,
}

impl Banking {
    pub fn is_empty(&self) -> bool {
        self.account_number.is_none()
            && self.bank_code.is_none()
            && self.iban.is_none()
            && self.bic.is_none()
    }
}

/// Invoice totals.
///
/// Populated from the rich shape (`amount` / `currency_id` /
/// `amount_wo_rounding` / `amount_rounding`) when present, else from the
/// simple shape (`order_total_price` / `order_currency`). At most one shape
/// contributes; a rounding amount of exactly 0 is dropped at normalization
/// time.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Amounts {
    pub total: Value,
    pub total_before_rounding: Option<Value>,
    pub rounding: Option<Value>,
    pub currency: Option<String>,
}

/// One billed product or service row.
///
/// Each field is resolved through an ordered list of source keys; see
/// [`normalize`](crate::core::normalize) for the fallback orders. Monetary
/// fields keep the raw scalar so non-numeric values survive to display.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LineItem {
    /// `part_number`, else `mfr_part_no`, else `item_id`.
    pub identifier: Option<String>,
    /// `description`, else `name`.
    pub description: Option<String>,
    pub quantity: Option<Value>,
    pub unit_price: Option<Value>,
    /// `total_price`, else `ext_price`, else `price_without_vat`.
    pub total_price: Option<Value>,
    /// VAT rate in percent (source key `tax_class_id`).
    pub vat_percent: Option<Value>,
    /// `total_with_vat`, else `price_with_vat`.
    pub total_with_vat: Option<Value>,
}
