pub mod messages;
pub mod session;
pub mod transport;

pub use messages::{EventPayload, InboundEvent, InboundMessage, OutboundEvent, OutboundMessage};
pub use session::Session;
pub use transport::{TcpTransport, Transport};
