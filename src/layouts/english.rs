//! English QWERTY (US).

/// Display name used in the language selector.
pub const NAME: &str = "English (QWERTY)";

/// Legend rows; each legend is `unshifted` followed by `shifted`.
pub const ROWS: &[&[&str]] = &[
    &["`~", "1!", "2@", "3#", "4$", "5%", "6^", "7&", "8*", "9(", "0)", "-_", "=+", "⌫"],
    &["Tab", "qQ", "wW", "eE", "rR", "tT", "yY", "uU", "iI", "oO", "pP", "[{", "]}", "\\|"],
    &["CapsLock", "aA", "sS", "dD", "fF", "gG", "hH", "jJ", "kK", "lL", ";:", "'\"", "⏎"],
    &["Shift", "zZ", "xX", "cC", "vV", "bB", "nN", "mM", ",<", ".>", "/?", "Shift"],
    &["Space"],
];
