pub mod opentdb;
pub mod source;
pub mod types;

pub use opentdb::OpenTdbSource;
pub use source::{FetchError, QuestionSource};
pub use types::Question;
