//! API endpoint modules.

mod download;
mod search;
mod user;

pub use download::DownloadRequestBuilder;
pub use search::SearchApi;
pub use user::UserApi;

pub(crate) use user::USER_INFO_PATH;
