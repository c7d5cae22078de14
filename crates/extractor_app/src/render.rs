use std::fmt::Write;

use extractor_core::{AppViewModel, Appearance, Status, ThemeContext, ToastLevel, View};

const RATING_LABELS: [&str; 5] = [
    "1 - The fitment is way too off",
    "2 - Not close",
    "3 - It's close enough to real fit",
    "4 - Very close",
    "5 - This was perfect fit!",
];

pub fn render(view: &AppViewModel, theme: &ThemeContext) -> String {
    let mut out = String::new();
    let rule = match theme.effective() {
        Appearance::Light => "-",
        Appearance::Dark => "=",
    }
    .repeat(60);

    let _ = writeln!(out, "{rule}");
    match view.view {
        View::Landing => {
            let _ = writeln!(out, "Welcome to Kloth.me");
            let _ = writeln!(out, "Extract images from any URL with ease");
            let _ = writeln!(out, "Press Enter to get started.");
        }
        View::Dashboard => render_dashboard(&mut out, view),
    }
    let _ = writeln!(out, "{rule}");
    out
}

fn render_dashboard(out: &mut String, view: &AppViewModel) {
    let _ = writeln!(out, "Image Extractor");
    let lock = if view.input_enabled { "" } else { " (locked)" };
    let _ = writeln!(out, "URL{lock}: {}", view.input);

    match &view.status {
        Status::Idle => {
            let _ = writeln!(out, "Paste a URL to extract images");
        }
        Status::Loading => {
            let _ = writeln!(out, "Extracting... (:cancel to abort)");
        }
        Status::Failure { message } => {
            let _ = writeln!(out, "Error: {message}");
        }
        Status::Success => {}
    }

    let Some(image) = &view.displayed_image else {
        return;
    };
    let _ = writeln!(out, "Image: {image}");

    if !view.gallery.is_empty() {
        if view.gallery_visible {
            let _ = writeln!(out, "More images (:select N, :gallery to hide):");
            for (index, url) in view.gallery.iter().enumerate() {
                let marker = if Some(url) == view.displayed_image.as_ref() {
                    "*"
                } else {
                    " "
                };
                let _ = writeln!(out, " {marker}{:>3}. {url}", index + 1);
            }
        } else {
            let _ = writeln!(
                out,
                "{} more images available (:gallery to show)",
                view.gallery.len()
            );
        }
    }

    let _ = writeln!(out, "Rate the fitment (:rate N):");
    for (index, label) in RATING_LABELS.iter().enumerate() {
        let selected = view.rating == Some(index as u8 + 1);
        let _ = writeln!(out, "  [{}] {label}", if selected { "x" } else { " " });
    }
    let _ = writeln!(
        out,
        "Feedback (:feedback TEXT, {} characters left): {}",
        view.feedback_remaining, view.feedback
    );
}

pub fn toast_line(level: ToastLevel, message: &str) -> String {
    match level {
        ToastLevel::Error => format!("[error] {message}"),
        ToastLevel::Info => format!("[info] {message}"),
    }
}

pub const HELP: &str = "\
Paste or type a URL to extract its images.
Commands:
  :submit            extract the URL in the field again
  :cancel            abandon the running extraction
  :gallery           show or hide the gallery
  :select N          display gallery image N
  :rate N            rate the fitment from 1 to 5
  :feedback TEXT     leave feedback (max 500 characters)
  :theme MODE        light, dark or system
  :system-theme A    platform appearance changed to light or dark
  :help              show this help
  :quit              exit";
