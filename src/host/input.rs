//! Input events and the scripts that replay them
//!
//! A script holds one event per line as `<frame> <event> <args>`; blank lines
//! and everything after `#` are ignored. Recognized events:
//!
//! ```text
//! 0   key q
//! 10  press 120 80
//! 11  drag 140 90
//! 12  release 140 90
//! 15  press 60 60 right
//! 20  wheel 320 320 -240
//! 30  dblclick 320 320
//! 40  resize 800 600
//! ```
//!
//! `press` and `drag` take an optional trailing `left` or `right` button.

use crate::io::configuration::{DOUBLE_CLICK_DISTANCE, DOUBLE_CLICK_FRAMES};
use crate::io::error::{Result, file_error, script_error};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Mouse button held during a press or drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    /// Left button
    #[default]
    Primary,
    /// Right button
    Secondary,
}

impl FromStr for PointerButton {
    type Err = String;

    fn from_str(text: &str) -> std::result::Result<Self, Self::Err> {
        match text {
            "left" => Ok(Self::Primary),
            "right" => Ok(Self::Secondary),
            other => Err(format!("unknown pointer button '{other}'")),
        }
    }
}

/// Single input event with surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Key press
    Key(char),
    /// Pointer button went down
    PointerPressed {
        /// Surface x
        x: f64,
        /// Surface y
        y: f64,
        /// Button pressed
        button: PointerButton,
    },
    /// Pointer moved with the button held
    PointerDragged {
        /// Surface x
        x: f64,
        /// Surface y
        y: f64,
        /// Button held
        button: PointerButton,
    },
    /// Pointer button went up
    PointerReleased {
        /// Surface x
        x: f64,
        /// Surface y
        y: f64,
    },
    /// Scroll wheel; positive deltas scroll down and zoom out
    Wheel {
        /// Surface x
        x: f64,
        /// Surface y
        y: f64,
        /// Scroll amount
        delta: f64,
    },
    /// Explicit double click
    DoubleClick {
        /// Surface x
        x: f64,
        /// Surface y
        y: f64,
    },
    /// Surface size change
    Resize {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },
}

impl InputEvent {
    /// Parse the `<event> <args>` part of a script line
    ///
    /// # Errors
    ///
    /// Returns a description of the problem for unknown events, missing or
    /// extra arguments and unparsable numbers.
    pub fn parse(text: &str) -> std::result::Result<Self, String> {
        let mut words = text.split_whitespace();
        let name = words.next().ok_or_else(|| "missing event".to_string())?;
        let args: Vec<&str> = words.collect();

        let event = match name {
            "key" => match args.as_slice() {
                [key] => {
                    let mut chars = key.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Self::Key(c),
                        _ => return Err(format!("key expects a single character, got '{key}'")),
                    }
                }
                _ => return Err(arity(name, 1, args.len())),
            },
            "press" | "drag" => {
                let (coordinates, button) = match args.split_at_checked(2) {
                    Some((coordinates, [button])) => (coordinates, button.parse()?),
                    _ => (args.as_slice(), PointerButton::Primary),
                };
                let [x, y] = numbers::<f64, 2>(name, coordinates)?;
                if name == "press" {
                    Self::PointerPressed { x, y, button }
                } else {
                    Self::PointerDragged { x, y, button }
                }
            }
            "release" | "dblclick" => {
                let [x, y] = numbers::<f64, 2>(name, &args)?;
                if name == "release" {
                    Self::PointerReleased { x, y }
                } else {
                    Self::DoubleClick { x, y }
                }
            }
            "wheel" => {
                let [x, y, delta] = numbers::<f64, 3>(name, &args)?;
                Self::Wheel { x, y, delta }
            }
            "resize" => {
                let [width, height] = numbers::<u32, 2>(name, &args)?;
                Self::Resize { width, height }
            }
            other => return Err(format!("unknown event '{other}'")),
        };
        Ok(event)
    }
}

fn arity(name: &str, expected: usize, found: usize) -> String {
    format!("'{name}' expects {expected} argument(s), got {found}")
}

fn numbers<T, const N: usize>(name: &str, args: &[&str]) -> std::result::Result<[T; N], String>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    if args.len() != N {
        return Err(arity(name, N, args.len()));
    }
    let parsed = args
        .iter()
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|error| format!("'{name}' has an invalid number '{arg}': {error}"))
        })
        .collect::<std::result::Result<Vec<T>, String>>()?;
    <[T; N]>::try_from(parsed).map_err(|rest| arity(name, N, rest.len()))
}

/// Event scheduled for a specific frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptedEvent {
    /// Frame before whose update the event is applied
    pub frame: u64,
    /// The event itself
    pub event: InputEvent,
}

/// Ordered list of scheduled events
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputScript {
    events: Vec<ScriptedEvent>,
}

impl InputScript {
    /// Parse script text
    ///
    /// Events are kept in frame order; events sharing a frame keep their
    /// line order.
    ///
    /// # Errors
    ///
    /// Returns `SketchError::Script` naming the first malformed line (1-based).
    pub fn parse(text: &str) -> Result<Self> {
        let mut events = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }
            let line_number = index + 1;
            let (frame, rest) = line
                .split_once(char::is_whitespace)
                .ok_or_else(|| script_error(line_number, &"expected '<frame> <event> <args>'"))?;
            let frame = frame.parse::<u64>().map_err(|error| {
                script_error(line_number, &format!("invalid frame '{frame}': {error}"))
            })?;
            let event =
                InputEvent::parse(rest).map_err(|reason| script_error(line_number, &reason))?;
            events.push(ScriptedEvent { frame, event });
        }
        events.sort_by_key(|scripted| scripted.frame);
        Ok(Self { events })
    }

    /// Read and parse a script file
    ///
    /// # Errors
    ///
    /// Returns `SketchError::FileSystem` if the file cannot be read and
    /// `SketchError::Script` if a line is malformed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(file_error(path, "read script"))?;
        Self::parse(&text)
    }

    /// Key presses applied at frame zero, one per character
    ///
    /// Whitespace is skipped so `--keys "q p t"` reads naturally.
    pub fn from_keys(keys: &str) -> Self {
        let events = keys
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|key| ScriptedEvent {
                frame: 0,
                event: InputEvent::Key(key),
            })
            .collect();
        Self { events }
    }

    /// Append another script, keeping frame order stable
    pub fn merge(&mut self, other: Self) {
        self.events.extend(other.events);
        self.events.sort_by_key(|scripted| scripted.frame);
    }

    /// Events scheduled for `frame`, in order
    pub fn events_at(&self, frame: u64) -> impl Iterator<Item = &InputEvent> {
        let start = self.events.partition_point(|scripted| scripted.frame < frame);
        self.events
            .iter()
            .skip(start)
            .take_while(move |scripted| scripted.frame == frame)
            .map(|scripted| &scripted.event)
    }

    pub fn events(&self) -> &[ScriptedEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct LastPress {
    frame: u64,
    x: f64,
    y: f64,
}

/// Turns pairs of nearby presses into double clicks
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClickTracker {
    last: Option<LastPress>,
}

impl ClickTracker {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Register a press; returns true when it completes a double click
    ///
    /// A completed double click clears the history so a third press starts a
    /// new sequence.
    pub fn press(&mut self, frame: u64, x: f64, y: f64) -> bool {
        let double = self.last.is_some_and(|last| {
            frame.saturating_sub(last.frame) <= DOUBLE_CLICK_FRAMES
                && frame >= last.frame
                && (x - last.x).hypot(y - last.y) <= DOUBLE_CLICK_DISTANCE
        });
        self.last = if double {
            None
        } else {
            Some(LastPress { frame, x, y })
        };
        double
    }

    pub const fn reset(&mut self) {
        self.last = None;
    }
}
