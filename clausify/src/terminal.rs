/*! Colors the sections that `clausify` prints to the standard output. */
use term::{color::Color, Attr};

/// Names the kinds of text that `clausify` prints.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tone {
    /// The heading of a stage.
    Heading,

    /// A formula produced by a stage.
    Formula,

    /// A clause of the result.
    Clause,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Style {
    color: Color,
    bold: bool,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Self::Heading => Style {
                color: 59,
                bold: true,
            },
            Self::Formula => Style {
                color: 252,
                bold: false,
            },
            Self::Clause => Style {
                color: 252,
                bold: true,
            },
        }
    }
}

/// Switches the standard output to the style of a [`Tone`]. A colorless stylus never writes
/// to the terminal, not even to reset it.
pub struct Stylus {
    colored: bool,
}

impl Stylus {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Returns the style that the receiver applies for `tone`, if any.
    pub fn style(&self, tone: Tone) -> Option<Style> {
        if self.colored {
            Some(tone.style())
        } else {
            None
        }
    }

    pub fn set(&self, tone: Tone) {
        if let Some(style) = self.style(tone) {
            if let Some(mut out) = term::stdout() {
                let _ = out.reset();
                let _ = out.fg(style.color);
                if style.bold {
                    let _ = out.attr(Attr::Bold);
                }
            }
        }
    }
}

impl Drop for Stylus {
    fn drop(&mut self) {
        if self.colored {
            if let Some(mut out) = term::stdout() {
                let _ = out.reset();
            }
        }
    }
}
