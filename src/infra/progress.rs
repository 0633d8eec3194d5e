// ============================================================
// Layer 6 — Progress Bars
// ============================================================
// Both pipeline stages report progress through indicatif bars:
//
//   Extracting data_chunks_3.zip  [====>     ] 1.2 MiB/4.0 MiB
//   Overall progress              [==>       ] 1/3 file
//   Loading chunks                [=======>  ] 7/9 file  chunk_7
//
// Progress is a side channel only. Nothing reads a bar back,
// so a hidden bar behaves exactly like a visible one.
//
// indicatif already hides itself when stderr is not a terminal,
// the `visible` flag lets the CLI turn bars off explicitly.
//
// Reference: indicatif crate documentation

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

const BYTES_TEMPLATE: &str =
    "{msg:30} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})";

const FILES_TEMPLATE: &str =
    "{prefix:30} [{elapsed_precise}] [{bar:40.green}] {pos}/{len} file {msg}";

/// Progress bar counting bytes written out of one archive.
pub fn byte_bar(total_bytes: u64, label: impl Into<String>, visible: bool) -> ProgressBar {
    let pb = new_bar(total_bytes, visible);
    pb.set_style(style(BYTES_TEMPLATE));
    pb.set_message(label.into());
    pb
}

/// Progress bar counting whole files (archives or chunk files).
pub fn file_bar(total_files: usize, label: impl Into<String>, visible: bool) -> ProgressBar {
    let pb = new_bar(total_files as u64, visible);
    pb.set_style(style(FILES_TEMPLATE).progress_chars("=> "));
    pb.set_prefix(label.into());
    pb
}

/// Container that stacks the per-archive byte bar under the
/// overall bar. Log lines go through `MultiProgress::suspend`.
pub fn multi(visible: bool) -> MultiProgress {
    if visible {
        MultiProgress::new()
    } else {
        MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
    }
}

/// Retire `bar` once the work it tracked is over. A finished run
/// clears the line, a failed one freezes it where it stopped.
pub fn close<T, E>(bar: &ProgressBar, result: Result<T, E>) -> Result<T, E> {
    match &result {
        Ok(_)  => bar.finish_and_clear(),
        Err(_) => bar.abandon(),
    }
    result
}

fn new_bar(len: u64, visible: bool) -> ProgressBar {
    if visible {
        ProgressBar::new(len)
    } else {
        ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::hidden())
    }
}

// A bad template is a programming error, but it should never
// take a data run down with it.
fn style(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template).unwrap_or_else(|_| ProgressStyle::default_bar())
}
