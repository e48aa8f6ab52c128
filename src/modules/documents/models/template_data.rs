// Template-data contract
//
// This is the JSON shape exchanged between the editing surface, the HTTP
// renderer and the HTML template. Field names are the compatibility surface
// and must not change.

use serde::{Deserialize, Serialize};

use super::document::DocType;
use super::line_item::LineItem;
use crate::core::amount::deserialize_display_string;

/// One row of the rendered item table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateItem {
    #[serde(deserialize_with = "deserialize_display_string")]
    pub description: String,
    #[serde(deserialize_with = "deserialize_display_string")]
    pub qty: String,
    #[serde(deserialize_with = "deserialize_display_string")]
    pub price: String,
    #[serde(deserialize_with = "deserialize_display_string")]
    pub amount: String,
}

impl From<&LineItem> for TemplateItem {
    fn from(item: &LineItem) -> Self {
        Self {
            description: item.description.clone(),
            qty: item.quantity.clone(),
            price: item.unit_price.clone(),
            amount: item.amount.clone(),
        }
    }
}

/// Self-contained snapshot of a document, ready to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateData {
    pub doc_type: DocType,
    pub to: String,
    pub to_address: String,
    pub date: String,
    pub show_qty: bool,
    pub show_price: bool,
    pub show_amount: bool,
    pub items: Vec<TemplateItem>,
    #[serde(deserialize_with = "deserialize_display_string")]
    pub subtotal: String,
    #[serde(deserialize_with = "deserialize_display_string")]
    pub gst_percent: String,
    #[serde(deserialize_with = "deserialize_display_string")]
    pub gst: String,
    #[serde(deserialize_with = "deserialize_display_string")]
    pub advance_payment: String,
    #[serde(deserialize_with = "deserialize_display_string")]
    pub payment_done: String,
    #[serde(deserialize_with = "deserialize_display_string")]
    pub payment_remaining: String,
    #[serde(deserialize_with = "deserialize_display_string")]
    pub final_amount: String,
    pub terms: Vec<String>,
    /// Data URI of the signature image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_url: Option<String>,
}

impl Default for TemplateData {
    fn default() -> Self {
        Self {
            doc_type: DocType::default(),
            to: String::new(),
            to_address: String::new(),
            date: String::new(),
            show_qty: true,
            show_price: true,
            show_amount: true,
            items: Vec::new(),
            subtotal: String::new(),
            gst_percent: String::new(),
            gst: String::new(),
            advance_payment: String::new(),
            payment_done: String::new(),
            payment_remaining: String::new(),
            final_amount: String::new(),
            terms: Vec::new(),
            signature_url: None,
        }
    }
}

impl TemplateData {
    /// Suggested download name without extension, e.g. `QUOTATION_Dr. Amar Sharma`
    pub fn default_file_stem(&self) -> String {
        let recipient = if self.to.is_empty() { "document" } else { &self.to };
        format!("{}_{}", self.doc_type, recipient)
    }

    /// True when no usable signature was supplied
    pub fn needs_signature(&self) -> bool {
        self.signature_url.as_deref().map_or(true, str::is_empty)
    }
}
