// ANSI SGR true-color sequences (\x1b[38;2;R;G;Bm sets the foreground,
// RESET restores the terminal default). One color per token category,
// fixed across languages.
pub const RESET: &str = "\x1b[0m";

// keywords
pub const BLUE: &str = "\x1b[38;2;0;136;255m";
// strings
pub const ORANGE: &str = "\x1b[38;2;255;136;0m";
// comments
pub const GRAY: &str = "\x1b[38;2;136;136;136m";
// numbers
pub const MAGENTA: &str = "\x1b[38;2;255;0;255m";
