use pawview_core::Theme;
use pawview_engine::FlagStore;
use pawview_logging::{paw_error, paw_info};

pub(crate) const DARK_MODE_FLAG: &str = "dark_mode";

pub(crate) fn load_theme(flags: &FlagStore) -> Theme {
    let dark = flags.read_flag(DARK_MODE_FLAG).unwrap_or(false);
    paw_info!("Loaded theme preference dark_mode={} from {:?}", dark, flags.path());
    Theme::from_dark_mode(dark)
}

pub(crate) fn save_theme(flags: &FlagStore, theme: Theme) {
    if let Err(err) = flags.persist_flag(DARK_MODE_FLAG, theme.is_dark()) {
        paw_error!(
            "Failed to persist theme to {:?}: {}",
            flags.path(),
            err
        );
    }
}
