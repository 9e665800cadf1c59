//! Rotating selectors for language, layout and typing mode.
//!
//! Each selector is an index into a fixed enumeration. The only way to move
//! it is `advance`, which steps forward modulo the enumeration size.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::layout::LayoutMode;
use crate::notification::Notification;

/// A fixed, ordered enumeration a selector can rotate through.
pub trait Cyclic: Copy + Eq + fmt::Debug + 'static {
    /// Every value, in rotation order. Index 0 is the start value.
    const ALL: &'static [Self];

    /// Label used in indicators and notifications.
    fn label(self) -> &'static str;

    /// Notification announcing that this value became active, if the
    /// selector is visible to the host at all.
    fn notification(self) -> Option<Notification> {
        None
    }
}

/// Dictionary language. Only reported to the host; decoding ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Polish,
}

impl Cyclic for Language {
    const ALL: &'static [Self] = &[Self::English, Self::Polish];

    fn label(self) -> &'static str {
        match self {
            Self::English => "EN",
            Self::Polish => "PL",
        }
    }

    fn notification(self) -> Option<Notification> {
        Some(Notification::Language(self))
    }
}

/// Composition style requested from the suggestion source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TypingMode {
    #[default]
    MultiTap,
    PredictiveT9,
}

impl Cyclic for TypingMode {
    const ALL: &'static [Self] = &[Self::MultiTap, Self::PredictiveT9];

    fn label(self) -> &'static str {
        match self {
            Self::MultiTap => "MT",
            Self::PredictiveT9 => "T9",
        }
    }

    fn notification(self) -> Option<Notification> {
        Some(Notification::Mode(self))
    }
}

/// Result of advancing a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance<T> {
    /// Value that lost the "selected" indicator
    pub old: T,
    /// Value that gained it
    pub new: T,
}

/// A single rotating index over `T::ALL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector<T: Cyclic> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T: Cyclic> Selector<T> {
    pub fn new() -> Self {
        Self {
            index: 0,
            _marker: std::marker::PhantomData,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> T {
        T::ALL[self.index]
    }

    /// Step to the next value, wrapping after the last one.
    pub fn advance(&mut self) -> Advance<T> {
        let old = self.current();
        self.index = (self.index + 1) % T::ALL.len();
        Advance {
            old,
            new: self.current(),
        }
    }
}

impl<T: Cyclic> Default for Selector<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The three independent selectors of a keypad session.
#[derive(Debug, Clone, Default)]
pub struct SelectorState {
    language: Selector<Language>,
    layout: Selector<LayoutMode>,
    mode: Selector<TypingMode>,
}

impl SelectorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(&self) -> Language {
        self.language.current()
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout.current()
    }

    pub fn mode(&self) -> TypingMode {
        self.mode.current()
    }

    pub fn next_language(&mut self) -> Advance<Language> {
        self.language.advance()
    }

    pub fn next_layout(&mut self) -> Advance<LayoutMode> {
        self.layout.advance()
    }

    pub fn next_mode(&mut self) -> Advance<TypingMode> {
        self.mode.advance()
    }
}
