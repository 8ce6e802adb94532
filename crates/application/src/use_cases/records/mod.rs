mod additional;
pub mod address;
pub mod cname;
pub mod mx;
pub mod srv;
pub mod txt;

pub use address::{ResolveAddressRecordsUseCase, MAX_CNAME_CHAIN};
pub use cname::ResolveCnameRecordsUseCase;
pub use mx::ResolveMxRecordsUseCase;
pub use srv::ResolveSrvRecordsUseCase;
pub use txt::ResolveTxtRecordsUseCase;
