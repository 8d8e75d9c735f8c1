/// Phrase used when a request names a key that isn't in a guide table.
pub const UNKNOWN_GUIDE: &str = "undefined";

/// A fixed table that maps request keys onto prompt phrases.
pub trait Guide: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn key(self) -> &'static str;

    fn phrase(self) -> &'static str;

    /// Look up the phrase for a request key. Unknown keys aren't rejected;
    /// they just produce [`UNKNOWN_GUIDE`].
    fn lookup(key: &str) -> &'static str {
        Self::ALL
            .iter()
            .find(|guide| guide.key() == key)
            .map_or(UNKNOWN_GUIDE, |guide| guide.phrase())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Short,
    Medium,
    Long,
}

impl Guide for Length {
    const ALL: &'static [Self] = &[Self::Short, Self::Medium, Self::Long];

    fn key(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    fn phrase(self) -> &'static str {
        match self {
            Self::Short => "1-2 sentences",
            Self::Medium => "3-5 sentences",
            Self::Long => "6-8 sentences",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Style {
    Casual,
    Professional,
    Funny,
    Inspirational,
    Engaging,
}

impl Guide for Style {
    const ALL: &'static [Self] = &[
        Self::Casual,
        Self::Professional,
        Self::Funny,
        Self::Inspirational,
        Self::Engaging,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Professional => "professional",
            Self::Funny => "funny",
            Self::Inspirational => "inspirational",
            Self::Engaging => "engaging",
        }
    }

    fn phrase(self) -> &'static str {
        match self {
            Self::Casual => "friendly and conversational",
            Self::Professional => "polished and business-appropriate",
            Self::Funny => "humorous and entertaining",
            Self::Inspirational => "motivational and uplifting",
            Self::Engaging => "attention-grabbing with questions or calls-to-action",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Platform {
    Instagram,
    Youtube,
    Twitter,
    Facebook,
    Linkedin,
    Tiktok,
}

impl Guide for Platform {
    const ALL: &'static [Self] = &[
        Self::Instagram,
        Self::Youtube,
        Self::Twitter,
        Self::Facebook,
        Self::Linkedin,
        Self::Tiktok,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Youtube => "youtube",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::Linkedin => "linkedin",
            Self::Tiktok => "tiktok",
        }
    }

    fn phrase(self) -> &'static str {
        match self {
            Self::Instagram => "Include relevant hashtags and emojis. Encourage engagement.",
            Self::Youtube => {
                "Focus on video description style with hooks. Can include timestamp format."
            }
            Self::Twitter => "Keep it concise and impactful. Consider character limits.",
            Self::Facebook => "Conversational and community-focused.",
            Self::Linkedin => "Professional tone with industry insights.",
            Self::Tiktok => "Trendy, short, and hook-driven with popular hashtags.",
        }
    }
}
