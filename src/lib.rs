pub mod error;
pub mod fetch;
pub mod request;
pub mod resolve;
