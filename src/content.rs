//! Static copy for every screen
//!
//! Components only index into these tables; nothing here is generated.

/// Opening screen copy
pub struct OpeningCopy {
    pub name: &'static str,
    pub heart_emojis: &'static str,
    pub question: &'static str,
    pub yes_button: &'static str,
    pub no_button: &'static str,
    pub quote: &'static str,
}

pub const OPENING_SCREEN: OpeningCopy = OpeningCopy {
    name: "Abeera",
    heart_emojis: "💗💗",
    question: "Will you be my Valentine? 💖",
    yes_button: "Yes! 💖",
    no_button: "No",
    quote: "Every moment with you feels like a dream come true…",
};

/// Shown in place of the question, cycling, once the user starts declining
pub const NO_MESSAGES: &[&str] = &[
    "Wait… are you sure? 🥺",
    "Really?",
    "Try again!",
    "You sure?",
    "Haha nice try!",
    "No escape!",
    "Nice try! 😏",
    "You can't escape love! 💘",
    "Still no? Really? 😂",
    "You're testing my patience! 😉",
    "Nope, not happening! 🙅🏻‍♂️",
];

/// Celebration screen copy
pub struct CelebrationCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub heart_emojis: &'static [&'static str],
    pub play_music: &'static str,
    pub pause_music: &'static str,
}

pub const CELEBRATION_SCREEN: CelebrationCopy = CelebrationCopy {
    title: "YAYY! 🎉",
    subtitle: "I knew you'd say yes!",
    heart_emojis: &["💕", "💖", "💗", "💘", "💝"],
    play_music: "Play Music",
    pause_music: "Pause Music",
};

/// Glyph used for pop hearts and floating hearts
pub const HEART_GLYPH: &str = "💗";

/// Looping background track for the celebration screen
pub const MUSIC_SRC: &str = "assets/music/romantic.mp3";
