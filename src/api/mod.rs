pub mod handlers;
pub mod routes;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use routes::create_router;
pub use types::ApiError;
