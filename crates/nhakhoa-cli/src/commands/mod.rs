pub mod schemas;
pub mod session;
pub mod validate;
