//! Pawview engine: provider registry, HTTP fetching and effect execution.
mod animal;
mod engine;
mod fetch;
mod persist;
mod providers;
mod types;

pub use animal::{
    fetch_animal, fetch_candidate, fetch_surprise, select_provider, ValidationPolicy,
    DEFAULT_MAX_ATTEMPTS,
};
pub use engine::{ChannelEventSink, EngineConfig, EngineHandle, EventSink};
pub use fetch::{FetchSettings, JsonSource, ReqwestFetcher};
pub use persist::{ensure_state_dir, FlagStore, PersistError};
pub use providers::{
    accept_any, extract_first_url_field, extract_url_field, is_still_image, ExtractFn, Provider,
    ProviderRegistry, RegistryError, ValidateFn,
};
pub use types::{AnimalPhoto, EngineEvent, FailureKind, FetchError, RequestId};
