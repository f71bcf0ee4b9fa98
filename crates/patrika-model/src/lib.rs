pub mod admin;
pub mod certificate;
pub mod convert;
pub mod course;
pub mod event;
pub mod journal;
pub mod order;
pub mod registration;
pub mod status;
pub mod user;
