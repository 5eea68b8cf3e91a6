//! Typing/deleting cycle for the hero role line.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use crate::config::EffectsConfig;

/// Text to show now and how long to wait before the next tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    words: Vec<Vec<char>>,
    word: usize,
    shown: usize,
    deleting: bool,
    timing: EffectsConfig,
}

impl Typewriter {
    pub fn new(words: &[String], timing: EffectsConfig) -> Self {
        Self {
            words: words
                .iter()
                .filter(|w| !w.is_empty())
                .map(|w| w.chars().collect())
                .collect(),
            word: 0,
            shown: 0,
            deleting: false,
            timing,
        }
    }

    /// Advance one character. `None` when there is nothing to type.
    pub fn tick(&mut self) -> Option<TypeStep> {
        let len = self.words.get(self.word)?.len();
        let delay_ms = if self.deleting {
            self.shown = self.shown.saturating_sub(1);
            if self.shown == 0 {
                self.deleting = false;
                self.timing.pause_ms
            } else {
                self.timing.delete_speed_ms
            }
        } else {
            self.shown = (self.shown + 1).min(len);
            if self.shown == len {
                self.deleting = true;
                self.timing.hold_ms
            } else {
                self.timing.type_speed_ms
            }
        };
        let text = self.words[self.word][..self.shown].iter().collect();
        if !self.deleting && self.shown == 0 {
            self.word = (self.word + 1) % self.words.len();
        }
        Some(TypeStep { text, delay_ms })
    }
}
