pub mod backends;
pub mod speech;
