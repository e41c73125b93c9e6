//! Domain record types rendered by the client.

pub mod case;
