use pawview_core::{AppViewModel, FetchFailureKind, Theme};

struct Palette {
    rule: char,
    theme_button: &'static str,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            rule: '─',
            theme_button: "🌙 Dark Mode",
        },
        Theme::Dark => Palette {
            rule: '═',
            theme_button: "☀️ Light Mode",
        },
    }
}

/// Renders the whole screen for `view`. Rendering the same view twice yields
/// the same lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let palette = palette(view.theme);
    let rule = palette.rule.to_string().repeat(48);

    if view.lightbox {
        if let Some(item) = &view.current {
            return vec![
                rule.clone(),
                format!("🔍 {} [{}]", item.provider, position(view)),
                String::new(),
                format!("    {}", item.url),
                String::new(),
                format!("❤ {}   [o] close", item.likes),
                rule,
            ];
        }
    }

    let mut lines = Vec::new();
    lines.push(rule.clone());

    match &view.current {
        Some(item) => {
            lines.push(format!("{} [{}]", item.provider, position(view)));
            lines.push(item.url.clone());
        }
        None if view.loading => lines.push("Fetching a furry friend...".to_string()),
        None => lines.push("No photo yet".to_string()),
    }

    if let Some(failure) = &view.failure {
        let headline = match failure.kind {
            FetchFailureKind::FetchFailed => "Failed to load 😿",
            FetchFailureKind::RetryExhausted => "No displayable photo found 😿",
        };
        lines.push(format!("{} ({})", headline, failure.message));
    }

    lines.push(format!(
        "❤ {}   Total Paw Power: {} 🐾",
        view.like_count(),
        view.total_likes
    ));

    let filter = view.active_filter.as_deref().unwrap_or("all animals");
    let status = if view.loading && view.current.is_some() {
        " | loading..."
    } else {
        ""
    };
    lines.push(format!(
        "Showing: {} | [t] {}{}",
        filter, palette.theme_button, status
    ));

    lines.push(navigation_hint(view));

    if let Some(surprise) = &view.surprise {
        lines.push(format!("✨ Surprise {}! {}", surprise.provider, surprise.url));
    }

    lines.push(rule);
    lines
}

fn position(view: &AppViewModel) -> String {
    view.cursor
        .map(|cursor| format!("{}/{}", cursor + 1, view.history_len))
        .unwrap_or_default()
}

fn navigation_hint(view: &AppViewModel) -> String {
    let mut hints = Vec::new();
    if !view.is_at_start {
        hints.push("[p] prev");
    }
    if view.can_go_forward {
        hints.push("[f] forward");
    }
    hints.push("[n] next");
    if view.current.is_some() {
        hints.push("[l] like");
        hints.push("[o] open");
    }
    hints.push("[h] help");
    hints.join("  ")
}
