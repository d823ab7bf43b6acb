//! basecast-services: the stateful parts of the base station.
//!
//! Every service is a cheap-to-clone handle over shared state so the daemon
//! can hand copies to its tasks and to the control API.

pub mod caster;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod ingest;
pub mod mode;
pub mod mount_table;
pub mod receiver;
pub mod relay;
pub mod status;

#[cfg(test)]
mod testutil;

pub use caster::{CasterServer, ClientInfo, ClientRegistry, TcpClients};
pub use dispatch::{Dispatcher, Reply};
pub use error::StationError;
pub use events::{ChunkSink, EventBus};
pub use ingest::{CorrectionReader, StatusReader};
pub use mode::{ModeController, ReceiverMode};
pub use mount_table::MountTable;
pub use receiver::ReceiverLink;
pub use relay::{RelayClient, RelaySession};
pub use status::{RelayState, StatusKey, StatusRegistry};
