mod document;
mod line_item;
mod template_data;

pub use document::{
    Column, ColumnVisibility, DocType, Document, DocumentField, Totals, DEFAULT_TERMS,
};
pub use line_item::{ItemField, LineItem, LineItemStore};
pub use template_data::{TemplateData, TemplateItem};
