//! Session controller and the surface it exposes to renderers.

mod controller;
mod snapshot;
mod ticket;

pub use controller::SessionController;
pub use snapshot::{SessionSnapshot, Summary, SNAPSHOT_VERSION};
pub use ticket::LoadTicket;
