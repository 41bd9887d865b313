pub mod derived;
pub mod descriptor;
pub mod intent;
pub mod predicate;

pub use derived::{DerivedOp, DerivedQueries, DerivedShape};
pub use descriptor::{Connective, QueryDescriptor, SortDirection, SortSpec};
pub use intent::QueryIntent;
pub use predicate::{Cmp, Predicate};
