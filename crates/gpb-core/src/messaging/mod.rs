//! Messenger abstractions: the outbound port and the incoming message model.

pub mod port;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
