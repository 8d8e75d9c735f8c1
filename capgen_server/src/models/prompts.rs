use capgen::CaptionRequest;
use std::fmt;

use crate::models::{
    client::{CompletionRequest, GenerationConfig, Message, MessageRole},
    guides::{Guide, Length, Platform, Style},
};

/// Number of captions the model is asked for and the most that are returned.
pub const MAX_CAPTIONS: usize = 5;

/// Literal the model is told to put between captions.
pub const CAPTION_DELIMITER: &str = "---";

pub trait UserPrompt: fmt::Display {
    fn to_completion_request(&self, config: &GenerationConfig) -> CompletionRequest {
        let messages = vec![Message {
            role: MessageRole::User,
            content: self.to_string(),
        }];
        CompletionRequest::builder()
            .model(config.model.clone())
            .messages(messages)
            .temperature(config.temperature)
            .max_tokens(config.max_tokens)
            .stream(false)
            .build()
    }
}

impl<T: fmt::Display> UserPrompt for T {}

pub struct CaptionPrompt<'a> {
    pub request: &'a CaptionRequest,
}

impl fmt::Display for CaptionPrompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let CaptionRequest {
            topic,
            platform,
            style,
            length,
        } = self.request;
        write!(
            f,
            concat!(
                "Generate {count} different social media captions about: \"{topic}\"\n",
                "\n",
                "Requirements:\n",
                "- Platform: {platform} - {platform_guide}\n",
                "- Style: {style_guide}\n",
                "- Length: {length_guide}\n",
                "- Make each caption unique and engaging\n",
                "- Include appropriate emojis and hashtags where suitable\n",
                "- Each caption should be ready to post\n",
                "- Write in natural, native English\n",
                "\n",
                "Provide {count} distinct captions, separated by \"{delimiter}\"",
            ),
            count = MAX_CAPTIONS,
            topic = topic,
            platform = platform,
            platform_guide = Platform::lookup(platform),
            style_guide = Style::lookup(style),
            length_guide = Length::lookup(length),
            delimiter = CAPTION_DELIMITER,
        )
    }
}

/// Split generated text into captions. Segments are trimmed, blank ones are
/// dropped, and only the first [`MAX_CAPTIONS`] are kept.
pub fn split_captions(content: &str) -> Vec<String> {
    content
        .split(CAPTION_DELIMITER)
        .map(str::trim)
        .filter(|caption| !caption.is_empty())
        .take(MAX_CAPTIONS)
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use capgen::CaptionRequest;

    use super::{CaptionPrompt, UserPrompt, split_captions};
    use crate::models::client::{GenerationConfig, MessageRole};

    fn coffee() -> CaptionRequest {
        CaptionRequest::builder()
            .topic("coffee")
            .platform("instagram")
            .style("casual")
            .length("short")
            .build()
    }

    #[test]
    fn prompt_embeds_guides() {
        let request = coffee();
        let prompt = CaptionPrompt { request: &request }.to_string();
        assert!(prompt.contains("Include relevant hashtags and emojis. Encourage engagement."));
        assert!(prompt.contains("friendly and conversational"));
        assert!(prompt.contains("1-2 sentences"));
        assert!(prompt.contains("coffee"));
        assert_eq!(
            prompt,
            "Generate 5 different social media captions about: \"coffee\"\n\
            \n\
            Requirements:\n\
            - Platform: instagram - Include relevant hashtags and emojis. Encourage engagement.\n\
            - Style: friendly and conversational\n\
            - Length: 1-2 sentences\n\
            - Make each caption unique and engaging\n\
            - Include appropriate emojis and hashtags where suitable\n\
            - Each caption should be ready to post\n\
            - Write in natural, native English\n\
            \n\
            Provide 5 distinct captions, separated by \"---\""
        );
    }

    #[test]
    fn prompt_keeps_unknown_keys() {
        let request = CaptionRequest::builder()
            .topic("launch day")
            .platform("myspace")
            .style("sarcastic")
            .length("short")
            .build();
        let prompt = CaptionPrompt { request: &request }.to_string();
        assert!(prompt.contains("- Platform: myspace - undefined\n"));
        assert!(prompt.contains("- Style: undefined\n"));
        assert!(prompt.contains("- Length: 1-2 sentences\n"));
    }

    #[test]
    fn completion_request_shape() {
        let request = coffee();
        let completion = CaptionPrompt { request: &request }
            .to_completion_request(&GenerationConfig::default());
        assert_eq!(completion.model, "Qwen/Qwen2.5-7B-Instruct");
        assert_eq!(completion.temperature, 0.8);
        assert_eq!(completion.max_tokens, 1000);
        assert!(!completion.stream);
        assert_eq!(completion.messages.len(), 1);
        assert_eq!(completion.messages[0].role, MessageRole::User);

        let body = serde_json::to_value(&completion).expect("serializable");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["stream"], false);
    }

    #[test]
    fn splitting() {
        assert_eq!(split_captions("A --- B --- C"), ["A", "B", "C"]);
        assert_eq!(split_captions("A --- --- B"), ["A", "B"]);
        assert_eq!(split_captions("\n---\n  A  \n---\n\n"), ["A"]);
        assert_eq!(split_captions("1---2---3---4---5---6---7"), ["1", "2", "3", "4", "5"]);
        assert!(split_captions("  ---  ").is_empty());
        assert_eq!(split_captions("no delimiter at all"), ["no delimiter at all"]);
    }
}
