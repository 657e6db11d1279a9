pub mod person;
pub mod schema;
pub mod verb;
