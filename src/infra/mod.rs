pub mod event;
pub mod github;
