pub mod contribution;
pub mod diagnostic;
pub mod question;

pub use contribution::Contribution;
pub use diagnostic::{DiagnosticRecord, Severity};
pub use question::UnansweredQuestion;
