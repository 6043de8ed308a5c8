pub mod graphql_handler;
pub mod quiz_handler;

pub use graphql_handler::{graphiql, graphql};
pub use quiz_handler::{get_state, health_check};
