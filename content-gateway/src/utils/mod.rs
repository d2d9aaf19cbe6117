mod password;
mod validation;

pub use password::{hash_secret, verify_secret};
pub use validation::ValidatedJson;
