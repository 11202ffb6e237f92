//! Pronounceable password generation.

mod candidate;
pub mod charset;
mod entropy;
mod generate;
mod search;
mod validate;

pub use candidate::Candidate;
pub use charset::{CharClass, Charset, CharsetError};
pub use entropy::{calculate_entropy, estimate_entropy, strength};
pub use generate::generate;
pub use search::{Accepted, search};
pub use validate::is_valid;
