pub mod lookup_transport;

pub use lookup_transport::HttpLookupTransport;
