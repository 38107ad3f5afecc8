// Sorts that keep equal elements in input order.

pub mod bubble;
pub mod merge;
