pub mod notification_store;
pub mod sign_in;
pub mod sign_out;
pub mod token_store;

#[cfg(test)]
pub(crate) mod test_support;
