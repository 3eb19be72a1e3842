mod account;
pub use self::account::{Credits, DeleteListResponse, Usage};

mod batch;
pub use self::batch::{BatchId, BatchJob, BatchResults, BatchStatus, ListId};

mod finder;
pub use self::finder::{CompanyEmail, CompanySearchResult, DomainEmail, DomainSearchResult, FoundEmail};

mod verification;
pub use self::verification::{VerificationResult, VerificationStatus};
