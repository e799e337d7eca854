//! HTTP Handlers

mod company;
mod invoice;
mod ping;

pub use company::*;
pub use invoice::*;
pub use ping::*;
