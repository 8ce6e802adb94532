pub mod records;

// Re-export use cases
pub use records::{
    ResolveAddressRecordsUseCase, ResolveCnameRecordsUseCase, ResolveMxRecordsUseCase,
    ResolveSrvRecordsUseCase, ResolveTxtRecordsUseCase,
};
