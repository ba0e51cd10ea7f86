pub mod decoder;
pub mod endpoint;
pub(crate) mod pipeline;
pub mod publisher;
pub mod transport;
