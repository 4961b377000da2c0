//! Toy command interpreter behind the Faky terminal showcase.
//!
//! A [`Session`] owns one transcript: every submitted line is echoed, then
//! dispatched against a closed set of commands ([`CommandName`]) whose
//! handlers are pure functions of `(args, context)`. Some output lines are
//! flagged for specialized rendering (banners, cards, bars); [`render`]
//! turns those into display text for any front end.

pub mod catalog;
pub mod clock;
pub mod command;
pub mod line;
pub mod profile;
pub mod render;
pub mod session;

pub use catalog::{Catalog, Project};
pub use clock::{Clock, FixedClock, SystemClock};
pub use command::{CommandName, Context, Outcome, dispatch};
pub use line::{Effect, LineKind, TranscriptLine};
pub use render::{RenderContext, render_line, render_transcript};
pub use session::Session;
