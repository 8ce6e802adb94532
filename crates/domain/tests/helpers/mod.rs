mod builders;

pub use builders::ServiceEntryBuilder;
