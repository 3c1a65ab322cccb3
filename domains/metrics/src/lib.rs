pub mod counter_keys;
pub mod errors;
pub mod responses;

pub use counter_keys::*;
pub use errors::MetricsError;
pub use responses::UsageMetricsResponse;
