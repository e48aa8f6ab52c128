// Documents module: line items, the document aggregate and its derivation pipeline

pub mod models;
pub mod services;

pub use models::{
    Column, ColumnVisibility, DocType, Document, DocumentField, ItemField, LineItem,
    LineItemStore, TemplateData, TemplateItem, Totals,
};
pub use services::{ChangeSet, DerivationEngine};
