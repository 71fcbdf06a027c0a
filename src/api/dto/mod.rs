//! Data Transfer Objects for REST request/response serialization.
//!
//! Voter-list suppression for anonymous polls happens here, at the DTO
//! boundary: the domain always tracks voters, the wire never shows them
//! when `anonymous_voting` is set.

pub mod common_dto;
pub mod poll_dto;
pub mod vote_dto;

pub use common_dto::*;
pub use poll_dto::*;
pub use vote_dto::*;
