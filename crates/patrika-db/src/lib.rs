pub mod admin;
pub mod certificate;
pub mod course;
pub mod event;
pub mod journal;
pub mod order;
pub mod registration;
pub mod user;
pub mod util;

pub use sea_orm;
