//! HTTP API module: route table, handlers, error mapping and listener.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

pub use handlers::AppState;
pub use routes::{api_routes, create_router, RouteEntry, RouteTable};
pub use server::serve;
