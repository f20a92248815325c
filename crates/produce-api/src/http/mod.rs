//! HTTP REST API endpoints.
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/produce` | POST | Add one record or a list of records |
//! | `/produce` | GET | Fetch every record |
//! | `/produce/{produce_code}` | GET | Fetch one record |
//! | `/produce/{produce_code}` | DELETE | Delete one record |
//! | `/health` | GET | Liveness check |

pub mod routes;
pub mod state;

pub use routes::{batch_status_code, create_router, create_router_with_body_limit, DEFAULT_BODY_LIMIT};
pub use state::AppState;
