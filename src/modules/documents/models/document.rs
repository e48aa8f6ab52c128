// Document aggregate
//
// The document is the single mutable value owned by an editing session.
// Every mutation goes through a method here so the derivation pipeline runs
// synchronously afterwards and the totals never drift from their inputs.

use serde::{Deserialize, Serialize};

use super::line_item::{ItemField, LineItem, LineItemStore};
use super::template_data::{TemplateData, TemplateItem};
use crate::core::AppError;
use crate::modules::documents::services::derivation::{write_if_changed, ChangeSet, DerivationEngine};

/// Terms every new document starts with
pub const DEFAULT_TERMS: [&str; 3] = [
    "Payment 100% advance against invoice",
    "Delivery charges and GST extra as applicable",
    "Warranty one year from date of delivery",
];

/// Kind of commercial document being composed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocType {
    #[default]
    Bill,
    Quotation,
    /// Delivery challan
    Challan,
}

impl std::fmt::Display for DocType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocType::Bill => write!(f, "BILL"),
            DocType::Quotation => write!(f, "QUOTATION"),
            DocType::Challan => write!(f, "CHALLAN"),
        }
    }
}

impl std::str::FromStr for DocType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BILL" => Ok(DocType::Bill),
            "QUOTATION" => Ok(DocType::Quotation),
            "CHALLAN" => Ok(DocType::Challan),
            _ => Err(AppError::validation(format!("Invalid document type: {}", s))),
        }
    }
}

/// Item table columns that can be hidden on the rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Qty,
    Price,
    Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnVisibility {
    pub show_qty: bool,
    pub show_price: bool,
    pub show_amount: bool,
}

impl Default for ColumnVisibility {
    fn default() -> Self {
        Self {
            show_qty: true,
            show_price: true,
            show_amount: true,
        }
    }
}

impl ColumnVisibility {
    pub fn toggle(&mut self, column: Column) {
        let flag = match column {
            Column::Qty => &mut self.show_qty,
            Column::Price => &mut self.show_price,
            Column::Amount => &mut self.show_amount,
        };
        *flag = !*flag;
    }

    pub fn is_visible(&self, column: Column) -> bool {
        match column {
            Column::Qty => self.show_qty,
            Column::Price => self.show_price,
            Column::Amount => self.show_amount,
        }
    }
}

/// Header and summary fields editable as free text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentField {
    RecipientName,
    RecipientAddress,
    IssueDate,
    Subtotal,
    TaxPercent,
    TaxAmount,
    AdvancePayment,
    PaymentDone,
    PaymentRemaining,
    FinalAmount,
}

impl std::str::FromStr for DocumentField {
    type Err = AppError;

    /// Accepts the template-data key for each field
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "to" => Ok(DocumentField::RecipientName),
            "toAddress" => Ok(DocumentField::RecipientAddress),
            "date" => Ok(DocumentField::IssueDate),
            "subtotal" => Ok(DocumentField::Subtotal),
            "gstPercent" => Ok(DocumentField::TaxPercent),
            "gst" => Ok(DocumentField::TaxAmount),
            "advancePayment" => Ok(DocumentField::AdvancePayment),
            "paymentDone" => Ok(DocumentField::PaymentDone),
            "paymentRemaining" => Ok(DocumentField::PaymentRemaining),
            "finalAmount" => Ok(DocumentField::FinalAmount),
            _ => Err(AppError::validation(format!("Unknown document field: {}", s))),
        }
    }
}

/// Payment summary of a document, kept as display strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub subtotal: String,
    pub tax_percent: String,
    pub tax_amount: String,
    pub advance_payment: String,
    pub payment_done: String,
    pub payment_remaining: String,
    pub final_amount: String,
}

/// A bill, quotation or challan being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    doc_type: DocType,
    recipient_name: String,
    recipient_address: String,
    issue_date: String,
    columns: ColumnVisibility,
    items: LineItemStore,
    totals: Totals,
    terms: Vec<String>,
    signature_url: Option<String>,
}

impl Default for Document {
    /// A blank bill dated today (`dd/mm/yyyy`)
    fn default() -> Self {
        Self::new(chrono::Local::now().format("%d/%m/%Y").to_string())
    }
}

impl Document {
    /// A blank bill with one empty item and the default terms
    pub fn new(issue_date: impl Into<String>) -> Self {
        Self {
            doc_type: DocType::default(),
            recipient_name: String::new(),
            recipient_address: String::new(),
            issue_date: issue_date.into(),
            columns: ColumnVisibility::default(),
            items: LineItemStore::new(),
            totals: Totals::default(),
            terms: DEFAULT_TERMS.iter().map(|term| term.to_string()).collect(),
            signature_url: None,
        }
    }

    pub fn doc_type(&self) -> DocType {
        self.doc_type
    }

    pub fn recipient_name(&self) -> &str {
        &self.recipient_name
    }

    pub fn recipient_address(&self) -> &str {
        &self.recipient_address
    }

    pub fn issue_date(&self) -> &str {
        &self.issue_date
    }

    pub fn columns(&self) -> ColumnVisibility {
        self.columns
    }

    pub fn items(&self) -> &[LineItem] {
        self.items.items()
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn signature_url(&self) -> Option<&str> {
        self.signature_url.as_deref()
    }

    pub fn set_doc_type(&mut self, doc_type: DocType) {
        self.doc_type = doc_type;
    }

    pub fn set_signature_url(&mut self, signature_url: Option<String>) {
        self.signature_url = signature_url;
    }

    /// Edit a header or summary field, then rerun the derivation pipeline.
    ///
    /// Returns the set of derivation inputs that actually changed.
    pub fn set_field(&mut self, field: DocumentField, value: impl Into<String>) -> ChangeSet {
        let value = value.into();
        let mut changes = ChangeSet::default();

        match field {
            DocumentField::RecipientName => self.recipient_name = value,
            DocumentField::RecipientAddress => self.recipient_address = value,
            DocumentField::IssueDate => self.issue_date = value,
            DocumentField::Subtotal => {
                changes.subtotal = write_if_changed(&mut self.totals.subtotal, value);
            }
            DocumentField::TaxPercent => {
                changes.tax_percent = write_if_changed(&mut self.totals.tax_percent, value);
            }
            DocumentField::TaxAmount => {
                changes.tax_amount = write_if_changed(&mut self.totals.tax_amount, value);
            }
            DocumentField::AdvancePayment => {
                changes.advance_payment = write_if_changed(&mut self.totals.advance_payment, value);
            }
            DocumentField::PaymentDone => {
                changes.payment_done = write_if_changed(&mut self.totals.payment_done, value);
            }
            // Derived outputs; a manual entry stays until an input changes
            DocumentField::PaymentRemaining => self.totals.payment_remaining = value,
            DocumentField::FinalAmount => self.totals.final_amount = value,
        }

        self.derive(changes)
    }

    /// Edit one field of an item; out-of-range indexes are ignored
    pub fn set_item_field(&mut self, index: usize, field: ItemField, value: impl Into<String>) -> bool {
        if !self.items.set_field(index, field, value) {
            return false;
        }
        self.derive(ChangeSet::items());
        true
    }

    pub fn add_item(&mut self) {
        self.items.add_item();
        self.derive(ChangeSet::items());
    }

    /// Remove an item; the document always keeps at least one
    pub fn remove_item(&mut self, index: usize) -> bool {
        if !self.items.remove_item(index) {
            return false;
        }
        self.derive(ChangeSet::items());
        true
    }

    /// Flip one column's visibility; item values are untouched
    pub fn toggle_column(&mut self, column: Column) {
        self.columns.toggle(column);
    }

    pub fn set_term(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.terms.get_mut(index) {
            Some(term) => {
                *term = value.into();
                true
            }
            None => false,
        }
    }

    pub fn add_term(&mut self) {
        self.terms.push(String::new());
    }

    /// Remove a term; unlike items, terms may become empty
    pub fn remove_term(&mut self, index: usize) -> bool {
        if index >= self.terms.len() {
            return false;
        }
        self.terms.remove(index);
        true
    }

    /// Immutable template data for the renderer.
    ///
    /// A signature set on the document wins over `default_signature`; with
    /// neither, the field is omitted.
    pub fn snapshot(&self, default_signature: Option<&str>) -> TemplateData {
        let signature_url = self
            .signature_url
            .clone()
            .filter(|url| !url.is_empty())
            .or_else(|| default_signature.map(str::to_string));

        TemplateData {
            doc_type: self.doc_type,
            to: self.recipient_name.clone(),
            to_address: self.recipient_address.clone(),
            date: self.issue_date.clone(),
            show_qty: self.columns.show_qty,
            show_price: self.columns.show_price,
            show_amount: self.columns.show_amount,
            items: self.items.items().iter().map(TemplateItem::from).collect(),
            subtotal: self.totals.subtotal.clone(),
            gst_percent: self.totals.tax_percent.clone(),
            gst: self.totals.tax_amount.clone(),
            advance_payment: self.totals.advance_payment.clone(),
            payment_done: self.totals.payment_done.clone(),
            payment_remaining: self.totals.payment_remaining.clone(),
            final_amount: self.totals.final_amount.clone(),
            terms: self.terms.clone(),
            signature_url,
        }
    }

    fn derive(&mut self, changes: ChangeSet) -> ChangeSet {
        DerivationEngine::run(&self.items, &mut self.totals, changes)
    }
}
