// canasta-api: Async Rust client for the CABB Afición basketball-league API

pub mod client;
pub mod error;
pub mod lookup;
pub mod matches;
pub mod model;
pub mod observer;
pub mod season;
pub mod teams;
pub mod transport;

pub use client::{Client, ClientConfig};
pub use error::Error;
pub use observer::{RequestObserver, RequestRecord};
