//! Terminal output for dash-generate.

use std::path::Path;
use std::time::{Duration, Instant};

use console::{style, Color, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};

const ACCENT: Color = Color::Color256(39);
const GOOD: Color = Color::Color256(78);
const BAD: Color = Color::Color256(203);
const BAR: Color = Color::Color256(141);

/// Outer width of the summary box, borders included.
const BOX_WIDTH: usize = 56;
const METER_CELLS: usize = 10;

/// Kind of a one-line status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Done,
    Note,
    Failed,
}

impl Status {
    fn marker(self) -> StyledObject<&'static str> {
        match self {
            Status::Done => style("\u{2714}").fg(GOOD),         // ✔
            Status::Note => style("\u{2022}").fg(ACCENT),       // •
            Status::Failed => style("\u{2718}").fg(BAD).bold(), // ✘
        }
    }
}

pub fn banner() {
    println!(
        "{} {}\n",
        style("dash-generate").fg(ACCENT).bold(),
        style(concat!("v", env!("CARGO_PKG_VERSION"))).dim()
    );
}

pub fn status(kind: Status, msg: &str) {
    println!("{} {}", kind.marker(), msg);
}

/// Secondary text, indented under the previous line.
pub fn detail(msg: &str) {
    println!("    {}", style(msg).dim());
}

/// Spinner shown while a generator runs.
pub fn working(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&[
            "\u{2801}", "\u{2802}", "\u{2804}", "\u{2840}", "\u{2880}", "\u{2820}", "\u{2810}",
            "\u{2808}", "\u{2714}",
        ]);
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Draws a titled box around `lines`.
pub fn summary_box(title: &str, lines: &[String]) {
    let inner = BOX_WIDTH - 2;
    let heading = format!(" {} ", title);
    let fill = inner.saturating_sub(console::measure_text_width(&heading) + 1);

    println!(
        "{}{}{}{}",
        style("\u{250C}\u{2500}").fg(ACCENT), // ┌─
        style(heading).bold(),
        style("\u{2500}".repeat(fill)).fg(ACCENT),
        style("\u{2510}").fg(ACCENT) // ┐
    );
    for line in lines {
        let pad = (inner - 1).saturating_sub(console::measure_text_width(line));
        println!(
            "{} {}{}{}",
            style("\u{2502}").fg(ACCENT),
            line,
            " ".repeat(pad),
            style("\u{2502}").fg(ACCENT)
        );
    }
    // └───┘
    println!(
        "{}",
        style(format!("\u{2514}{}\u{2518}", "\u{2500}".repeat(inner))).fg(ACCENT)
    );
}

/// Lists written files relative to `root` as a tree.
pub fn file_tree<P: AsRef<Path>>(root: &Path, files: &[P]) {
    for (i, file) in files.iter().enumerate() {
        let file = file.as_ref();
        let shown = file.strip_prefix(root).unwrap_or(file);
        let branch = if i + 1 == files.len() {
            "\u{2514}\u{2500}"
        } else {
            "\u{251C}\u{2500}"
        };
        println!("  {} {}", style(branch).dim(), shown.display());
    }
}

/// Bar of `value` relative to `max`.
pub fn meter(value: usize, max: usize) -> String {
    let filled = (value * METER_CELLS / max.max(1)).min(METER_CELLS);
    format!(
        "{}{}",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(METER_CELLS - filled)
    )
}

/// One row of the `inspect` listing.
pub fn component_row(name: &str, props: usize, required: usize, max_props: usize) {
    println!(
        "  {:<20} {:>3} props {:>3} required  {}",
        style(name).bold(),
        props,
        required,
        style(meter(props, max_props)).fg(BAR)
    );
}

pub fn elapsed(start: Instant) {
    println!(
        "\n{}",
        style(format!("finished in {}ms", start.elapsed().as_millis())).dim()
    );
}
