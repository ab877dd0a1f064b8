//! Static presentation copy: header art, section banners, and profile fields.

pub const HEADER_ART: [&str; 16] = [
    "                ░░░░░░░░                                        ░░░░░░░░                ",
    "                ░░░░░░░░                                        ░░░░░░░░                ",
    "                        ░░░░░░░░                        ░░░░░░░░                        ",
    "                        ░░░░░░░░                        ░░░░░░░░                        ",
    "                ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒                ",
    "                ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒                ",
    "        ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒        ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒        ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒        ",
    "        ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒        ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒        ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒        ",
    "▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓",
    "▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓",
    "▓▓▓▓▓▓▓▓        ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓        ▓▓▓▓▓▓▓▓",
    "▓▓▓▓▓▓▓▓        ▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓        ▓▓▓▓▓▓▓▓",
    "████████        ████████                                        ████████        ████████",
    "████████        ████████                                        ████████        ████████",
    "                        ████████████████        ████████████████                        ",
    "                        ████████████████        ████████████████                        ",
];

pub const SYSTEM_HEADER: [&str; 3] = [
    "▄▀▀▀ █ █ ▄▀▀▀ ▀█▀ █▀▀▀ █▄▄█    ▀█▀ █▄ █ █▀▀▀ ▄▀▀▄",
    "▀▀▀▄  █  ▀▀▀▄  █  █▀▀  █▀▀█     █  █ ▀█ █▀▀  █  █",
    "▀▀▀   ▀  ▀▀▀   ▀  ▀▀▀▀ ▀  ▀    ▀▀▀ ▀  ▀ ▀     ▀▀ ",
];

pub const CLAUDE_HEADER: [&str; 3] = [
    "▄▀▀▀ █    ▄▀▀▄ █  █ █▀▀▄ █▀▀▀    ▄▀▀▀ ▄▀▀▄ █▀▀▄ █▀▀▀",
    "█    █    █▀▀█ █  █ █  █ █▀▀     █    █  █ █  █ █▀▀ ",
    "▀▀▀▀ ▀▀▀▀ ▀  ▀  ▀▀  ▀▀▀  ▀▀▀▀    ▀▀▀▀  ▀▀  ▀▀▀  ▀▀▀▀",
];

pub const GITHUB_HEADER: [&str; 3] = [
    "▄▀▀▀ ▀█▀ ▀█▀ █  █ █  █ █▀▀▄    ▄▀▀▀ ▀█▀ ▄▀▀▄ ▀█▀ ▄▀▀▀",
    "█ ▀█  █   █  █▀▀█ █  █ █▀▀▄    ▀▀▀▄  █  █▀▀█  █  ▀▀▀▄",
    "▀▀▀▀ ▀▀▀  ▀  ▀  ▀  ▀▀  ▀▀▀     ▀▀▀   ▀  ▀  ▀  ▀  ▀▀▀ ",
];

pub const TAGLINE: &str = "ai developer  ·  context window maximalist  ·  token burner";

pub const PROFILE_FIELDS: [(&str, &str); 4] = [
    ("Location", "localhost:3000"),
    ("Shell", "zsh + tmux, vim keybinds everywhere"),
    ("Languages", "Rust, TypeScript, Python, regret"),
    ("Focus", "AI tooling, developer experience"),
];

pub const FOOTER_GREETZ: &str = "\" greetz to everyone shipping with an llm riding shotgun \"";
