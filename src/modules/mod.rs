pub mod documents;
pub mod health;
pub mod rendering;
pub mod transport;
