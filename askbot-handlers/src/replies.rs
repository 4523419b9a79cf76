//! User-facing texts.

/// Label of the inline button shown under every stored question.
pub const ASK_LLM_BUTTON_LABEL: &str = "Ask LLM";

/// Sent when the button is pressed but the conversation has no stored question.
pub const NO_QUESTION_REPLY: &str = "No question provided. Send me a question first.";

pub const HELP_REPLY: &str = "Send me a question and press the \"Ask LLM\" button to get an answer!";

/// Prompt sent with the button after a question is stored.
pub fn question_prompt(question: &str) -> String {
    format!("Your question: \"{question}\"\nPress the button below to get an answer:")
}

/// Reply to `/start`. Falls back to "there" when the user has no first name.
pub fn greeting(first_name: Option<&str>) -> String {
    let name = first_name.filter(|n| !n.is_empty()).unwrap_or("there");
    format!("Hi {name}! I am your LLM assistant bot. Send me a question and I will answer it!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_prompt_quotes_question() {
        assert_eq!(
            question_prompt("What is the capital of France?"),
            "Your question: \"What is the capital of France?\"\nPress the button below to get an answer:"
        );
    }

    #[test]
    fn test_greeting_uses_first_name() {
        assert!(greeting(Some("Ann")).starts_with("Hi Ann!"));
        assert!(greeting(None).starts_with("Hi there!"));
        assert!(greeting(Some("")).starts_with("Hi there!"));
    }
}
