pub mod error;
pub mod fields;
pub mod ports;
pub mod repo;
pub mod service;
pub mod validator;

#[cfg(test)]
pub(crate) mod test_support;
