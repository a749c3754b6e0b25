//! Registration Validation
//!
//! Pure rule functions for the student registration form. Every function here
//! is side-effect free and answers one question about one raw value; the
//! messages and the order in which rules run live in `registration-forms`.

pub mod date;
pub mod email;
pub mod file;
pub mod numeric;
pub mod password;
pub mod phone;
pub mod string;

// Re-export all validators
pub use date::*;
pub use email::*;
pub use file::*;
pub use numeric::*;
pub use password::*;
pub use phone::*;
pub use string::*;
