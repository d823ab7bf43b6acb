//! basecast-core: UBX codec, coordinate scaling, NTRIP wire helpers,
//! operator commands and configuration. Nothing here touches a socket or a
//! receiver port.

pub mod command;
pub mod config;
pub mod coord;
pub mod keys;
pub mod ntrip;
pub mod ubx;

pub use command::Command;
pub use coord::{CoordError, Decomposed};
pub use ntrip::HttpError;
pub use ubx::{FramedCommand, UbxError};
