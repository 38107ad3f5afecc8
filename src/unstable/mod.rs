// Sorts that may reorder equal elements.

pub mod quick;
pub mod selection;
