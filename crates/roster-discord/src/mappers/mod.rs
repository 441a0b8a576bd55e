//! Payload -> entity mappers

mod member;
mod presence;
mod user;

pub use member::members_from_payloads;
