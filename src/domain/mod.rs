pub mod link;
pub mod reconcile;
pub mod snapshot;
pub mod ticket;
