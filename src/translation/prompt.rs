/// System instruction given to the chat model in LLM mode.
///
/// The direction is fixed: English goes to Korean, everything else goes to
/// English.
pub const SYSTEM_INSTRUCTION: &str = "You are a language translator.\n\
     Whenever you receive a message, you will only respond with a translated version of the message.\n\
     The rules are as follows: if the message is in English, translate it into Korean, otherwise, translate it into English.\n\
     You should strive for accuracy on the meaning and not on a literal translation.\n\
     Remember: the output should only contain the translated message.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_instruction_fixes_direction() {
        assert!(SYSTEM_INSTRUCTION.contains("translate it into Korean"));
        assert!(SYSTEM_INSTRUCTION.contains("otherwise, translate it into English"));
        assert!(SYSTEM_INSTRUCTION.contains("only contain the translated message"));
    }
}
