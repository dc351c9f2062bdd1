//! Parameterized queries and the builders that produce them.

mod lookup;
mod parameterized;


pub use lookup::{FIND_USER_BY_NAME, build_query};
pub use parameterized::ParameterizedQuery;
