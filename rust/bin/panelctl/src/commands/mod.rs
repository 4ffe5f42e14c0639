pub mod edging;
pub mod save;
pub mod show;
