use pawview_core::Msg;

use super::UiEvent;

pub const HELP: &str = "\
Commands:
  n         next photo (fetches a new one)
  p         previous photo
  f         forward to an already seen photo
  l         like the current photo
  d / c     toggle the Dog / Cat filter
  filter X  toggle the filter for provider X
  a         show all animals (clear filter)
  t         toggle light / dark theme
  s         surprise me
  o         open / close the enlarged view of the current photo
  h         this help
  q         quit";

/// Maps one line typed by the user to a UI event. A blank line means "next".
/// Filter commands only accept names from `providers`, matched without regard
/// to case.
pub fn parse_command(line: &str, providers: &[String]) -> UiEvent {
    let line = line.trim();
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };

    match (command.to_ascii_lowercase().as_str(), argument) {
        ("" | "n" | "next", "") => UiEvent::Msg(Msg::NextClicked),
        ("p" | "prev", "") => UiEvent::Msg(Msg::PrevClicked),
        ("f" | "forward", "") => UiEvent::Msg(Msg::ForwardClicked),
        ("l" | "like", "") => UiEvent::Msg(Msg::LikeClicked),
        ("d" | "dog", "") => filter_event("Dog", providers, line),
        ("c" | "cat", "") => filter_event("Cat", providers, line),
        ("filter", name) if !name.is_empty() => filter_event(name, providers, line),
        ("a" | "all", "") => UiEvent::Msg(Msg::FilterCleared),
        ("t" | "theme", "") => UiEvent::Msg(Msg::ThemeToggled),
        ("s" | "surprise", "") => UiEvent::Msg(Msg::SurpriseClicked),
        ("h" | "help" | "?", "") => UiEvent::Help,
        ("q" | "quit" | "exit", "") => UiEvent::Quit,
        ("o" | "open", "") => UiEvent::Msg(Msg::LightboxToggled),
        _ => UiEvent::Unknown(line.to_string()),
    }
}

fn filter_event(name: &str, providers: &[String], line: &str) -> UiEvent {
    match providers
        .iter()
        .find(|provider| provider.eq_ignore_ascii_case(name))
    {
        Some(provider) => UiEvent::Msg(Msg::FilterToggled(provider.clone())),
        None => UiEvent::Unknown(line.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> UiEvent {
        let providers = ["Dog".to_string(), "Cat".to_string()];
        parse_command(line, &providers)
    }

    #[test]
    fn single_letter_commands() {
        assert_eq!(parse("n"), UiEvent::Msg(Msg::NextClicked));
        assert_eq!(parse("  P \n"), UiEvent::Msg(Msg::PrevClicked));
        assert_eq!(parse("l"), UiEvent::Msg(Msg::LikeClicked));
        assert_eq!(
            parse("d"),
            UiEvent::Msg(Msg::FilterToggled("Dog".to_string()))
        );
        assert_eq!(parse("t"), UiEvent::Msg(Msg::ThemeToggled));
        assert_eq!(parse("q"), UiEvent::Quit);
    }

    #[test]
    fn blank_line_fetches_next() {
        assert_eq!(parse(""), UiEvent::Msg(Msg::NextClicked));
        assert_eq!(parse("   "), UiEvent::Msg(Msg::NextClicked));
    }

    #[test]
    fn filter_takes_provider_name_verbatim() {
        assert_eq!(
            parse("filter Cat"),
            UiEvent::Msg(Msg::FilterToggled("Cat".to_string()))
        );
        assert_eq!(parse("filter"), UiEvent::Unknown("filter".to_string()));
    }

    #[test]
    fn filter_rejects_providers_outside_the_registry() {
        assert_eq!(parse("filter Bird"), UiEvent::Unknown("filter Bird".to_string()));
        assert_eq!(
            parse("filter cat"),
            UiEvent::Msg(Msg::FilterToggled("Cat".to_string()))
        );
        assert_eq!(
            parse_command("d", &["Cat".to_string()]),
            UiEvent::Unknown("d".to_string())
        );
    }

    #[test]
    fn open_toggles_the_enlarged_view() {
        assert_eq!(parse("o"), UiEvent::Msg(Msg::LightboxToggled));
        assert_eq!(parse("open"), UiEvent::Msg(Msg::LightboxToggled));
    }

    #[test]
    fn unknown_input_is_reported() {
        assert_eq!(parse("fly"), UiEvent::Unknown("fly".to_string()));
        assert_eq!(parse("n 3"), UiEvent::Unknown("n 3".to_string()));
    }
}
