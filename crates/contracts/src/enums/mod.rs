pub mod precision_type;
pub mod status;

pub use precision_type::PrecisionType;
pub use status::{Status, StatusFilter};
