//! Interview policy from TOML (`[interview]` section)

use interview_domain::InterviewPolicy;
use interview_domain::config::{
    DEFAULT_MAX_FOLLOW_UPS, DEFAULT_PASS_THRESHOLD, DEFAULT_QUESTION_COUNT,
};
use serde::{Deserialize, Serialize};

/// Raw `[interview]` configuration
///
/// # Example
///
/// ```toml
/// [interview]
/// pass_threshold = 60   # minimum match score to start the interview
/// max_follow_ups = 5    # follow-ups per main question
/// question_count = 5    # main questions requested
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInterviewConfig {
    pub pass_threshold: u8,
    pub max_follow_ups: usize,
    pub question_count: usize,
}

impl Default for FileInterviewConfig {
    fn default() -> Self {
        Self {
            pass_threshold: DEFAULT_PASS_THRESHOLD,
            max_follow_ups: DEFAULT_MAX_FOLLOW_UPS,
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }
}

impl FileInterviewConfig {
    pub fn to_policy(&self) -> InterviewPolicy {
        InterviewPolicy::default()
            .with_pass_threshold(self.pass_threshold)
            .with_max_follow_ups(self.max_follow_ups)
            .with_question_count(self.question_count)
    }
}
