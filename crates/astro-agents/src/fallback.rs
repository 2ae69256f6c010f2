//! Template-assembled readings for when the text model is unavailable.
//!
//! Nothing here performs I/O or returns an error; this is the path that
//! always produces a reading.

use astro_core::{pick, ZodiacSign};
use rand::Rng;

/// Sign label used when a request fails before its sign is known
pub const FALLBACK_SENTINEL_SIGN: &str = "Universal ✨";

/// Name used when a request fails before a name is available
pub const FALLBACK_DEFAULT_NAME: &str = "Seeker";

/// Question used when a request fails before a question is available
pub const FALLBACK_DEFAULT_QUESTION: &str = "guidance";

/// Questions longer than this are cut and marked with "..."
pub const QUESTION_PREVIEW_CHARS: usize = 50;

pub const DEFAULT_SIGN_INSIGHT: &str =
    "Your unique cosmic signature holds the key to your question.";

pub const GENERAL_GUIDANCE: [&str; 4] = [
    "The stars suggest this is a time of important growth and learning for you.",
    "Current planetary energies support taking thoughtful action toward your goals.",
    "Your birth chart indicates strong potential for positive transformation in this area.",
    "The cosmic timing favors trust in your inner wisdom and natural abilities.",
];

pub fn sign_insight(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "Your fiery Aries energy brings natural leadership and courage to face any challenge.",
        ZodiacSign::Taurus => "Your steady Taurus nature provides the persistence needed to manifest your desires.",
        ZodiacSign::Gemini => "Your curious Gemini spirit opens multiple pathways to explore your question.",
        ZodiacSign::Cancer => "Your intuitive Cancer nature guides you toward emotionally fulfilling solutions.",
        ZodiacSign::Leo => "Your confident Leo energy illuminates creative approaches to your situation.",
        ZodiacSign::Virgo => "Your analytical Virgo mind can break down complex situations into manageable steps.",
        ZodiacSign::Libra => "Your diplomatic Libra nature seeks harmony and balanced solutions.",
        ZodiacSign::Scorpio => "Your transformative Scorpio power helps you dive deep and emerge renewed.",
        ZodiacSign::Sagittarius => "Your adventurous Sagittarius spirit sees the bigger picture and future possibilities.",
        ZodiacSign::Capricorn => "Your ambitious Capricorn energy builds lasting foundations for success.",
        ZodiacSign::Aquarius => "Your innovative Aquarius mind brings fresh perspectives to old problems.",
        ZodiacSign::Pisces => "Your compassionate Pisces intuition connects you to deeper universal wisdom.",
    }
}

/// Insight for a sign label; unknown labels get the default sentence.
pub fn insight_for_label(zodiac_label: &str) -> &'static str {
    ZodiacSign::from_label(zodiac_label)
        .map(sign_insight)
        .unwrap_or(DEFAULT_SIGN_INSIGHT)
}

/// First 50 characters of the question, with "..." if anything was cut.
pub fn question_preview(question: &str) -> String {
    let mut preview: String = question.chars().take(QUESTION_PREVIEW_CHARS).collect();
    if question.chars().count() > QUESTION_PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}

/// Assemble a complete reading from static text. One draw from `rng`.
pub fn compose_fallback<R: Rng + ?Sized>(
    name: &str,
    zodiac_label: &str,
    question: &str,
    rng: &mut R,
) -> String {
    let insight = insight_for_label(zodiac_label);
    let guidance = pick(&GENERAL_GUIDANCE, rng);
    let preview = question_preview(question);

    format!(
        r#"Dear {name},

{insight} Regarding your question about {preview}, the cosmic energies offer this guidance:

{guidance} Your {zodiac_label} nature possesses exactly the qualities needed to navigate this situation successfully. Trust in the timing of your life's unfolding.

The universe is supporting your highest good during this period. Pay attention to synchronicities and trust your intuition as you move forward. Remember that every challenge contains the seeds of opportunity, and your birth chart shows you have the strength to transform any obstacle into growth.

This is a powerful time for manifestation and positive change. Stay open to unexpected solutions and trust that you are being guided toward your highest path.

✨ The stars are aligned in your favor, {name}. Move forward with confidence. ✨"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_leo_fallback_for_alex() {
        let question = "a".repeat(30) + &"b".repeat(50);
        assert_eq!(question.chars().count(), 80);

        let reading = compose_fallback("Alex", "Leo ♌", &question, &mut StdRng::seed_from_u64(1));

        assert!(reading.contains(sign_insight(ZodiacSign::Leo)));
        assert!(reading.matches("Alex").count() >= 2);
        assert!(reading.starts_with("Dear Alex,"));

        let truncated: String = question.chars().take(50).collect();
        assert!(reading.contains(&format!("about {}...,", truncated)));
        assert!(!reading.contains(&question));
        assert!(GENERAL_GUIDANCE.iter().any(|g| reading.contains(g)));
    }

    #[test]
    fn test_short_question_is_not_marked() {
        assert_eq!(question_preview("Will I find love?"), "Will I find love?");
        assert_eq!(question_preview(&"x".repeat(50)), "x".repeat(50));
        assert_eq!(question_preview(&"x".repeat(51)), format!("{}...", "x".repeat(50)));
    }

    #[test]
    fn test_preview_counts_characters_not_bytes() {
        let question = "✨".repeat(60);
        let preview = question_preview(&question);
        assert_eq!(preview.chars().count(), 53);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_unknown_sign_uses_default_insight() {
        let mut rng = StdRng::seed_from_u64(4);
        let sentinel = compose_fallback(
            FALLBACK_DEFAULT_NAME,
            FALLBACK_SENTINEL_SIGN,
            FALLBACK_DEFAULT_QUESTION,
            &mut rng,
        );
        assert!(sentinel.contains(DEFAULT_SIGN_INSIGHT));
        assert!(sentinel.contains("Your Universal ✨ nature"));

        let garbage = compose_fallback("", "not a sign", "", &mut rng);
        assert!(garbage.contains(DEFAULT_SIGN_INSIGHT));
    }

    #[test]
    fn test_every_sign_has_its_own_insight() {
        for sign in ZodiacSign::ALL {
            let insight = insight_for_label(&sign.label());
            assert_ne!(insight, DEFAULT_SIGN_INSIGHT);
            assert!(insight.contains(sign.name()));
        }
    }
}
