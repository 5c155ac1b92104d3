//! Reading load files and rendering schedules.
//!
//! - [`parse_loads`] / [`read_loads`] — the `<n> (<x1>,<y1>) (<x2>,<y2>)` text format
//! - [`render_plain`] — one `[3,1,7]` line per schedule
//! - [`render_json`] — the serialized solution

mod parser;
mod render;

pub use parser::{parse_loads, read_loads};
pub use render::{format_schedule, render_json, render_plain};
