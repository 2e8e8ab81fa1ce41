//! Canned reply templates, one list per category.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::intent::IntentCategory;

const GREETING: &[&str] = &[
    "Good morning! How are you feeling today?",
    "Hello there! I hope you're having a wonderful day.",
    "Hi! It's so nice to see you. How can I help you today?",
    "Good day! I'm here and ready to chat with you.",
];

const MEDICATION_REMINDER: &[&str] = &[
    "It's time for your medication. Have you taken your pills today?",
    "Don't forget about your morning medication. Shall I remind you which ones to take?",
    "Your medication reminder is here. Would you like me to go through your list?",
    "Time for your pills! Let me know when you've taken them.",
];

const APPOINTMENT_REMINDER: &[&str] = &[
    "You have an appointment coming up. Would you like me to tell you about it?",
    "Don't forget about your doctor's appointment. Shall I help you prepare?",
    "Your appointment is scheduled soon. Would you like me to book transportation?",
    "I wanted to remind you about your upcoming medical appointment.",
];

const MOOD_CHECK: &[&str] = &[
    "How are you feeling emotionally today? I'm here to listen.",
    "On a scale of 1 to 10, how would you rate your mood today?",
    "I notice you might be feeling down. Would you like to talk about it?",
    "Your emotional well-being is important to me. How are you doing?",
];

const EMERGENCY_RESPONSE: &[&str] = &[
    "I'm here to help! If this is a medical emergency, please call 911 immediately.",
    "I understand you need help. Should I contact your emergency contact?",
    "Let me assist you. Is this urgent? I can reach out to your caregiver.",
    "I'm concerned about you. What kind of help do you need right now?",
];

const ENCOURAGEMENT: &[&str] = &[
    "You're doing great! I'm proud of how well you're taking care of yourself.",
    "Remember, I'm always here for you. You're not alone.",
    "You're very important to me and your family. Keep up the good work!",
    "Every day you're getting stronger. I believe in you.",
];

const DEFAULT: &[&str] = &[
    "I understand. Is there anything specific I can help you with today?",
    "Thank you for sharing that with me. How else can I assist you?",
    "I'm here to listen and help. What would you like to talk about?",
    "That's interesting. Tell me more about how you're feeling.",
];

const CHECK_INS: &[&str] = &[
    "Good morning! How are you feeling today? I'm here if you need anything.",
    "I hope you're having a good day! Don't forget to take your medications if you haven't already.",
    "Just checking in on you. How has your day been so far?",
    "I wanted to see how you're doing. Is there anything I can help you with today?",
    "Good afternoon! Have you been staying hydrated and taking care of yourself?",
];

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Reply templates for every category. No list may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ResponseTemplates {
    #[validate(length(min = 1))]
    pub greeting: Vec<String>,
    #[validate(length(min = 1))]
    pub medication_reminder: Vec<String>,
    #[validate(length(min = 1))]
    pub appointment_reminder: Vec<String>,
    #[validate(length(min = 1))]
    pub mood_check: Vec<String>,
    #[validate(length(min = 1))]
    pub emergency_response: Vec<String>,
    #[validate(length(min = 1))]
    pub encouragement: Vec<String>,
    #[validate(length(min = 1))]
    pub default: Vec<String>,
    /// Proactive check-in openers
    #[validate(length(min = 1))]
    pub check_in: Vec<String>,
}

impl Default for ResponseTemplates {
    fn default() -> Self {
        Self {
            greeting: owned(GREETING),
            medication_reminder: owned(MEDICATION_REMINDER),
            appointment_reminder: owned(APPOINTMENT_REMINDER),
            mood_check: owned(MOOD_CHECK),
            emergency_response: owned(EMERGENCY_RESPONSE),
            encouragement: owned(ENCOURAGEMENT),
            default: owned(DEFAULT),
            check_in: owned(CHECK_INS),
        }
    }
}

impl ResponseTemplates {
    pub fn for_category(&self, category: IntentCategory) -> &[String] {
        match category {
            IntentCategory::Greeting => &self.greeting,
            IntentCategory::MedicationReminder => &self.medication_reminder,
            IntentCategory::AppointmentReminder => &self.appointment_reminder,
            IntentCategory::MoodCheck => &self.mood_check,
            IntentCategory::EmergencyResponse => &self.emergency_response,
            IntentCategory::Encouragement => &self.encouragement,
            IntentCategory::Default => &self.default,
        }
    }

    pub fn check_ins(&self) -> &[String] {
        &self.check_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let templates = ResponseTemplates::default();
        assert!(templates.validate().is_ok());
        assert_eq!(templates.for_category(IntentCategory::Greeting).len(), 4);
        assert_eq!(templates.check_ins().len(), 5);
    }

    #[test]
    fn test_empty_list_rejected() {
        let templates = ResponseTemplates {
            encouragement: vec![],
            ..ResponseTemplates::default()
        };
        let errors = templates.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("encouragement"));
    }
}
