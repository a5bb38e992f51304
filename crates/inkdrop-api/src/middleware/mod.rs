pub mod cors;
pub mod panic;

pub use cors::{cors_headers_middleware, CorsHeadersConfig};
pub use panic::panic_response;
