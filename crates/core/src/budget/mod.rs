//! Monthly budget constraints across the six fixed spending categories.

pub mod category;
pub mod constraints;
pub mod error;
pub mod form;
pub mod input;


pub use category::BudgetCategory;
pub use constraints::{BudgetConstraints, BudgetWire};
pub use error::BudgetError;
pub use form::{BudgetForm, SUBMITTED_BANNER_DURATION};
pub use input::parse_amount_input;
