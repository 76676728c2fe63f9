use pawview_logging::{paw_debug, paw_warn};
use rand::Rng;

use crate::fetch::JsonSource;
use crate::providers::{Provider, ProviderRegistry};
use crate::{AnimalPhoto, FailureKind, FetchError};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// How hard to try for a URL the provider itself considers displayable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// Take the first extracted URL as is.
    Lenient,
    /// Re-select and re-fetch until the provider's predicate passes, giving
    /// up after `max_attempts` requests.
    Strict { max_attempts: u32 },
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        ValidationPolicy::Strict {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Filtered provider if one is named, otherwise a uniformly random one.
pub fn select_provider<'a, R: Rng + ?Sized>(
    registry: &'a ProviderRegistry,
    filter: Option<&str>,
    rng: &mut R,
) -> Result<&'a Provider, FetchError> {
    if let Some(name) = filter {
        return registry.find_by_name(name).map_err(|err| {
            FetchError::new(
                FailureKind::UnknownProvider {
                    name: name.to_string(),
                },
                err.to_string(),
            )
        });
    }
    let providers = registry.list();
    if providers.is_empty() {
        return Err(FetchError::new(
            FailureKind::UnknownProvider {
                name: String::new(),
            },
            "registry is empty",
        ));
    }
    Ok(&providers[rng.random_range(0..providers.len())])
}

/// One request against `provider`, returning the extracted candidate URL.
pub async fn fetch_candidate(
    source: &dyn JsonSource,
    provider: &Provider,
) -> Result<AnimalPhoto, FetchError> {
    let payload = source.get_json(&provider.endpoint).await?;
    let url = provider.extract(&payload).ok_or_else(|| {
        FetchError::new(
            FailureKind::MissingImageUrl {
                provider: provider.name.clone(),
            },
            payload.to_string(),
        )
    })?;
    Ok(AnimalPhoto {
        url,
        provider: provider.name.clone(),
    })
}

/// Selects a provider, fetches one photo and applies `policy`.
///
/// Request and payload failures end the operation immediately; only a
/// candidate rejected by the provider's validity predicate is retried.
pub async fn fetch_animal<R: Rng + Send + ?Sized>(
    source: &dyn JsonSource,
    registry: &ProviderRegistry,
    filter: Option<&str>,
    policy: ValidationPolicy,
    rng: &mut R,
) -> Result<AnimalPhoto, FetchError> {
    let max_attempts = match policy {
        ValidationPolicy::Lenient => {
            let provider = select_provider(registry, filter, rng)?;
            return fetch_candidate(source, provider).await;
        }
        ValidationPolicy::Strict { max_attempts } => max_attempts.max(1),
    };

    for attempt in 1..=max_attempts {
        let provider = select_provider(registry, filter, rng)?;
        let photo = fetch_candidate(source, provider).await?;
        if provider.is_valid(&photo.url) {
            return Ok(photo);
        }
        paw_debug!(
            "attempt {}/{}: {} rejected {}",
            attempt,
            max_attempts,
            provider.name,
            photo.url
        );
    }

    paw_warn!(
        "gave up after {} attempts (filter {:?})",
        max_attempts,
        filter
    );
    Err(FetchError::new(
        FailureKind::RetryExhausted {
            attempts: max_attempts,
        },
        "every candidate failed validation",
    ))
}

/// Random provider, no filter, no validation.
pub async fn fetch_surprise<R: Rng + Send + ?Sized>(
    source: &dyn JsonSource,
    registry: &ProviderRegistry,
    rng: &mut R,
) -> Result<AnimalPhoto, FetchError> {
    let provider = select_provider(registry, None, rng)?;
    fetch_candidate(source, provider).await
}
