//! Request middleware.

pub mod stylesheet;

pub use stylesheet::sassy_middleware;
