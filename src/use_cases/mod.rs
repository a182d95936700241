pub mod orchestrator;
pub mod refresh_session;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
pub mod stored_token;

mod persist;

#[cfg(test)]
pub(crate) mod test_support;
