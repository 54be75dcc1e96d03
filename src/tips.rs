//! Fixed study-tip catalog and the session tip selector.
//!
//! Tip order is significant: the mood classifier and session selector refer
//! to specific indices (focus[0], focus[1], focus[3], memory[0],
//! motivation[1], motivation[2]).

use rand::Rng;

pub const FOCUS_TIPS: [&str; 4] = [
    "Find a quiet study space",
    "Use the Pomodoro Technique (25 min study, 5 min break)",
    "Put your phone on silent mode",
    "Take regular short breaks",
];

pub const MEMORY_TIPS: [&str; 4] = [
    "Create mind maps for complex topics",
    "Teach the concept to someone else",
    "Use spaced repetition technique",
    "Write summary notes after each study session",
];

pub const MOTIVATION_TIPS: [&str; 4] = [
    "Set specific, achievable goals",
    "Reward yourself after completing tasks",
    "Study with a friend or study group",
    "Track your progress regularly",
];

/// Tip catalog key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipCategory {
    Focus,
    Memory,
    Motivation,
}

impl TipCategory {
    pub const ALL: [TipCategory; 3] = [TipCategory::Focus, TipCategory::Memory, TipCategory::Motivation];

    pub fn as_str(&self) -> &'static str {
        match self {
            TipCategory::Focus => "focus",
            TipCategory::Memory => "memory",
            TipCategory::Motivation => "motivation",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "focus" => Some(TipCategory::Focus),
            "memory" => Some(TipCategory::Memory),
            "motivation" => Some(TipCategory::Motivation),
            _ => None,
        }
    }

    pub fn tips(&self) -> &'static [&'static str; 4] {
        match self {
            TipCategory::Focus => &FOCUS_TIPS,
            TipCategory::Memory => &MEMORY_TIPS,
            TipCategory::Motivation => &MOTIVATION_TIPS,
        }
    }

    pub fn allowed() -> String {
        Self::ALL.map(|c| c.as_str()).join(", ")
    }
}

/// Pick a tip for a finished study session. Long sessions (over two hours)
/// always get the Pomodoro tip; shorter ones get a random memory technique.
pub fn session_tip<R: Rng>(duration_minutes: u32, rng: &mut R) -> &'static str {
    if duration_minutes > 120 {
        FOCUS_TIPS[1]
    } else {
        MEMORY_TIPS[rng.gen_range(0..MEMORY_TIPS.len())]
    }
}
