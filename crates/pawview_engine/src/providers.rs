use serde_json::Value;
use thiserror::Error;

/// Pulls the candidate image URL out of a provider's JSON payload.
pub type ExtractFn = fn(&Value) -> Option<String>;
/// Decides whether an extracted URL is displayable.
pub type ValidateFn = fn(&str) -> bool;

#[derive(Debug, Clone)]
pub struct Provider {
    pub name: String,
    pub endpoint: String,
    extract: ExtractFn,
    validate: ValidateFn,
}

impl Provider {
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>, extract: ExtractFn) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            extract,
            validate: accept_any,
        }
    }

    pub fn with_validator(mut self, validate: ValidateFn) -> Self {
        self.validate = validate;
        self
    }

    pub fn extract(&self, payload: &Value) -> Option<String> {
        (self.extract)(payload)
    }

    pub fn is_valid(&self, url: &str) -> bool {
        (self.validate)(url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no provider named {0}")]
    NotFound(String),
}

/// Fixed, ordered set of image providers.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    providers: Vec<Provider>,
}

impl ProviderRegistry {
    pub fn new(providers: Vec<Provider>) -> Self {
        Self { providers }
    }

    pub fn list(&self) -> &[Provider] {
        &self.providers
    }

    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn find_by_name(&self, name: &str) -> Result<&Provider, RegistryError> {
        self.providers
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Points an existing provider at another endpoint.
    pub fn with_endpoint(mut self, name: &str, endpoint: impl Into<String>) -> Result<Self, RegistryError> {
        let provider = self
            .providers
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        provider.endpoint = endpoint.into();
        Ok(self)
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new(vec![
            Provider::new("Dog", "https://random.dog/woof.json", extract_url_field)
                .with_validator(is_still_image),
            Provider::new(
                "Cat",
                "https://api.thecatapi.com/v1/images/search",
                extract_first_url_field,
            ),
        ])
    }
}

/// `{"url": "..."}`
pub fn extract_url_field(payload: &Value) -> Option<String> {
    payload.get("url")?.as_str().map(ToOwned::to_owned)
}

/// `[{"url": "..."}, ...]`
pub fn extract_first_url_field(payload: &Value) -> Option<String> {
    extract_url_field(payload.get(0)?)
}

pub fn accept_any(_url: &str) -> bool {
    true
}

const STILL_IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Accepts URLs whose path ends in a still-image extension; rejects
/// animations and video clips.
pub fn is_still_image(url: &str) -> bool {
    let path = match url::Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        // Relative or bare file names.
        Err(_) => url.split(['?', '#']).next().unwrap_or(url).to_string(),
    };
    path.rsplit_once('.').is_some_and(|(_, ext)| {
        STILL_IMAGE_EXTENSIONS
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ext))
    })
}
