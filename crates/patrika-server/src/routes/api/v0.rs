pub(crate) mod admin;
pub(crate) mod certificate;
pub(crate) mod course;
pub(crate) mod event;
pub(crate) mod journal;
pub(crate) mod order;
pub(crate) mod registration;
pub(crate) mod status;
pub(crate) mod user;
