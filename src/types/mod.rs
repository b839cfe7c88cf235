mod request_types;
mod result_types;

pub use request_types::*;
pub use result_types::*;
