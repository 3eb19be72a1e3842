//! Client for the EmailListChecker email-verification API.
//!
//! ```no_run
//! use emaillistchecker_api::{Client, VerifyOptions};
//!
//! # async fn run() -> Result<(), emaillistchecker_api::Error> {
//! let client = Client::new("your_api_key")?;
//! let result = client.verify("test@example.com", &VerifyOptions::default()).await?;
//! println!("{}: {}", result.email, result.result);
//! # Ok(())
//! # }
//! ```
mod client;
mod errors;
mod params;
mod response;
pub mod types;
mod user_agent;
pub use self::client::{Client, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use self::errors::{Error, ErrorKind};
pub use self::params::{
    BatchOptions, BatchRequest, CompanySearch, CompanySearchRequest, DomainSearch,
    DomainSearchRequest, FindEmailRequest, HttpMethod, ResultFilter, ResultFormat, VerifyOptions,
    VerifyRequest,
};
pub use self::response::{interpret, unwrap_envelope, DEFAULT_RETRY_AFTER_SECS};
