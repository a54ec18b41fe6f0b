// Public modules
pub mod career_path;
pub mod chat_message;
pub mod final_plan_turn;
pub mod goal;
pub mod navigator_turn;
pub mod plain_turn;
pub mod quest;
pub mod quest_outcome;
pub mod question_turn;
pub mod user_profile;

// Re-exports
pub use career_path::CareerPath;
pub use chat_message::{ChatMessage, MessageKind, Sender};
pub use final_plan_turn::FinalPlanTurn;
pub use goal::{Goal, GoalCatalog};
pub use navigator_turn::NavigatorTurn;
pub use plain_turn::PlainTurn;
pub use quest::Quest;
pub use quest_outcome::QuestOutcome;
pub use question_turn::QuestionTurn;
pub use user_profile::UserProfile;
