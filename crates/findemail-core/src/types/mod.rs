mod api_key;
mod envelope;
mod request;
mod search;

pub use api_key::*;
pub use envelope::*;
pub use request::*;
pub use search::*;
