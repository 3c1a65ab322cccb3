pub mod catalog;
pub mod commands;
pub mod errors;
pub mod models;
pub mod responses;

pub use catalog::{PRODUCT_CATALOG, is_catalog_product};
pub use commands::RecordPurchaseCommand;
pub use errors::PurchaseError;
pub use models::Purchase;
pub use responses::{ProductSalesResponse, PurchaseResponse};
