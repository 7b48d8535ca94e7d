use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResumePayload {
    #[validate(length(min = 1))]
    pub personal_info: String,
    #[validate(length(min = 1))]
    pub work_experience: String,
}
