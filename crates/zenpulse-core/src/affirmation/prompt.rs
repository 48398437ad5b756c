use super::Mood;

const PREAMBLE: &str = "Сгенерируй одну короткую аффирмацию для практики осознанности.";
const STYLE: &str = "Стиль: мягко, тепло, от первого лица, одно предложение, без эмодзи.";

/// Prompt text for a mood. Depends on nothing but `mood`.
pub fn build_prompt(mood: Mood) -> String {
    format!("{PREAMBLE} {STYLE} Контекст: {}", mood.hint())
}

/// 32-bit rolling string hash, `h = h * 31 + c` over UTF-16 code units.
///
/// Overflow wraps with signed 32-bit semantics so results match any other
/// platform computing the same hash over the same code units.
pub fn hash(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}
