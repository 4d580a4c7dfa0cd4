//! Prompt extraction from raw message text.

use poise::serenity_prelude::UserId;

/// Returns the prompt carried by a message.
///
/// When the bot was mentioned, the first occurrence of its mention token
/// (`<@id>` or the legacy nickname form `<@!id>`) is removed. The result is
/// trimmed in both cases.
#[must_use]
pub fn extract_prompt(raw_text: &str, self_id: UserId, mentions_self: bool) -> String {
    if !mentions_self {
        return raw_text.trim().to_string();
    }

    let plain = format!("<@{self_id}>");
    let nick = format!("<@!{self_id}>");

    let first = [plain, nick]
        .into_iter()
        .filter_map(|token| raw_text.find(&token).map(|idx| (idx, token.len())))
        .min_by_key(|(idx, _)| *idx);

    match first {
        Some((idx, len)) => {
            let mut prompt = String::with_capacity(raw_text.len() - len);
            prompt.push_str(&raw_text[..idx]);
            prompt.push_str(&raw_text[idx + len..]);
            prompt.trim().to_string()
        }
        None => raw_text.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT: UserId = UserId::new(4242);

    #[test]
    fn strips_leading_mention() {
        assert_eq!(extract_prompt("<@4242> hello", BOT, true), "hello");
    }

    #[test]
    fn strips_nickname_mention() {
        assert_eq!(extract_prompt("<@!4242>   what time is it?", BOT, true), "what time is it?");
    }

    #[test]
    fn strips_only_first_mention() {
        assert_eq!(
            extract_prompt("<@4242> say <@4242>", BOT, true),
            "say <@4242>"
        );
    }

    #[test]
    fn mention_in_the_middle_keeps_both_sides() {
        assert_eq!(extract_prompt("hey <@4242> there", BOT, true), "hey  there");
    }

    #[test]
    fn mention_only_yields_empty_prompt() {
        assert_eq!(extract_prompt("  <@4242>  ", BOT, true), "");
    }

    #[test]
    fn other_mentions_are_kept() {
        assert_eq!(extract_prompt("<@77> hi", BOT, true), "<@77> hi");
    }

    #[test]
    fn without_mention_flag_text_is_only_trimmed() {
        assert_eq!(extract_prompt(" <@4242> hi ", BOT, false), "<@4242> hi");
    }
}
