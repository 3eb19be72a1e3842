mod batch;
mod common;
mod finder;
mod verify;
pub use self::batch::{BatchOptions, BatchRequest, ResultFilter, ResultFormat};
pub use self::common::HttpMethod;
pub use self::finder::{CompanySearch, CompanySearchRequest, DomainSearch, DomainSearchRequest, FindEmailRequest};
pub use self::verify::{VerifyOptions, VerifyRequest};
