#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub complete: bool,
}

/// Reveals a string one character per frame.
pub struct TypingReveal {
    chars: Vec<char>,
    shown: usize,
}

impl TypingReveal {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }
}

impl Iterator for TypingReveal {
    type Item = TypingFrame;

    fn next(&mut self) -> Option<Self::Item> {
        if self.shown >= self.chars.len() {
            return None;
        }

        self.shown += 1;
        Some(TypingFrame {
            text: self.chars[..self.shown].iter().collect(),
            complete: self.shown == self.chars.len(),
        })
    }
}
