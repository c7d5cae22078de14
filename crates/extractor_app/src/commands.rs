use anyhow::{anyhow, bail, Context};
use extractor_core::{Appearance, Msg, ThemeMode, View};

/// What a line typed by the user asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Msg(Msg),
    Theme(ThemeMode),
    SystemTheme(Appearance),
    Help,
    Quit,
}

pub fn parse_line(line: &str, view: View) -> anyhow::Result<Command> {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix(':') else {
        return Ok(match view {
            View::Landing => Command::Msg(Msg::GetStartedClicked),
            View::Dashboard => Command::Msg(Msg::InputChanged(trimmed.to_string())),
        });
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    let command = match name {
        "quit" | "q" => Command::Quit,
        "help" | "h" => Command::Help,
        "theme" => Command::Theme(arg.parse()?),
        "system-theme" => Command::SystemTheme(arg.parse()?),
        "start" => Command::Msg(Msg::GetStartedClicked),
        "submit" => Command::Msg(Msg::SubmitClicked),
        "cancel" => Command::Msg(Msg::CancelClicked),
        "gallery" => Command::Msg(Msg::GalleryToggled),
        "select" => {
            let number: usize = arg
                .parse()
                .with_context(|| format!("expected an image number, got {arg:?}"))?;
            let index = number
                .checked_sub(1)
                .ok_or_else(|| anyhow!("image numbers start at 1"))?;
            Command::Msg(Msg::GalleryImageSelected { index })
        }
        "rate" => {
            let rating: u8 = arg
                .parse()
                .with_context(|| format!("expected a rating from 1 to 5, got {arg:?}"))?;
            Command::Msg(Msg::RatingSelected(rating))
        }
        // Keep the user's spacing inside the feedback text.
        "feedback" => Command::Msg(Msg::FeedbackChanged(
            rest["feedback".len()..].trim_start().to_string(),
        )),
        other => bail!("unknown command :{other} (try :help)"),
    };
    Ok(command)
}
