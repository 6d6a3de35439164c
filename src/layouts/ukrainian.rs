//! Ukrainian JCUKEN.

/// Display name used in the language selector.
pub const NAME: &str = "Українська (ЙЦУКЕН)";

/// Legend rows; each legend is `unshifted` followed by `shifted`.
pub const ROWS: &[&[&str]] = &[
    &["ґ~", "1!", "2\"", "3№", "4;", "5%", "6:", "7?", "8*", "9(", "0)", "-_", "=+", "⌫"],
    &["Tab", "йЙ", "цЦ", "уУ", "кК", "еЕ", "нН", "гГ", "шШ", "щЩ", "зЗ", "хХ", "їЇ", "\\|"],
    &["CapsLock", "фФ", "іІ", "вВ", "аА", "пП", "рР", "оО", "лЛ", "дД", "жЖ", "єЄ", "⏎"],
    &["Shift", "яЯ", "чЧ", "сС", "мМ", "иИ", "тТ", "ьЬ", "бБ", "юЮ", ".,", "Shift"],
    &["Space"],
];
