//! French AZERTY.
//!
//! Some number-row legends carry a third AltGr glyph; only the first two
//! characters form the key pair.

/// Display name used in the language selector.
pub const NAME: &str = "Français (AZERTY)";

/// Legend rows; each legend is `unshifted` followed by `shifted`.
pub const ROWS: &[&[&str]] = &[
    &["²~", "&1", "é2~", "\"3#", "'4{", "(5[", "-6|", "è7`", "_8\\", "ç9^", "à0@", ")°]", "=+}", "⌫"],
    &["Tab", "aA", "zZ", "eE€", "rR", "tT", "yY", "uU", "iI", "oO", "pP", "^¨", "$£", "\\*"],
    &["CapsLock", "qQ", "sS", "dD", "fF", "gG", "hH", "jJ", "kK", "lL", "mM", "ù%", "⏎"],
    &["Shift", "<>", "wW", "xX", "cC", "vV", "bB", "nN", ",?", ";.", ":!", "Shift"],
    &["Space"],
];
