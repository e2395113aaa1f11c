pub mod card;
pub mod enums;
pub mod error;
pub mod processing;
pub mod project;
pub mod stat;

pub use card::{Card, StatChange};
pub use enums::{ActivationPhase, CardColor, Rarity, SimpleAmount};
pub use error::{ModelError, Result};
pub use processing::{ExportOutcome, ExportRequest, SourceFile};
pub use project::{Mod, PROJECT_EXTENSION};
pub use stat::Stat;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_serializes_with_status_tag() {
        let outcome = ExportOutcome::Failure {
            message: "build failed".to_string(),
            output: "error CS1002".to_string(),
        };
        let json = serde_json::to_value(&outcome).expect("serialize outcome");
        assert_eq!(json["status"], "failure");
        assert_eq!(json["message"], "build failed");
        assert!(!outcome.is_success());
        assert_eq!(outcome.output(), "error CS1002");
    }
}
