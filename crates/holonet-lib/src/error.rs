use thiserror::Error;

/// Convenient result alias for the Holonet library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The remote catalog has no entity at the requested URL.
    #[error("no resource found at {url}")]
    NotFound { url: String },

    /// The payload at `url` could not be decoded into the expected shape.
    #[error("malformed response from {url}: {message}")]
    MalformedResponse { url: String, message: String },

    /// Transport-level failure (connection, timeout, unexpected status).
    #[error("network failure fetching {url}: {message}")]
    Network { url: String, message: String },

    /// A keyword search returned no vehicle.
    #[error("no vehicle matches '{query}'")]
    NoMatch { query: String },

    /// Raised when a film title is absent from the loaded film catalog.
    #[error("unknown film title: {title}{}", format_suggestions(.suggestions))]
    FilmNotFound {
        title: String,
        suggestions: Vec<String>,
    },

    /// Every planet in the catalog had an unknown or non-numeric population.
    #[error("no planet with a known population was found")]
    NoPopulatedPlanetFound,

    /// The configured base URL could not be parsed.
    #[error("invalid base url {url}: {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// A configuration value (usually from the environment) was rejected.
    #[error("invalid value for {key}: {value}")]
    InvalidConfig { key: String, value: String },

    /// Wrapper for HTTP client construction errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// True for aggregator outcomes that mean "nothing found" rather than a fault.
    pub fn is_empty_outcome(&self) -> bool {
        matches!(
            self,
            Error::NoMatch { .. } | Error::FilmNotFound { .. } | Error::NoPopulatedPlanetFound
        )
    }

    /// True when re-invoking the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Network { .. })
    }

    pub(crate) fn malformed(url: &str, err: impl std::fmt::Display) -> Self {
        Error::MalformedResponse {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn network(url: &str, err: impl std::fmt::Display) -> Self {
        Error::Network {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn film_not_found_lists_suggestions() {
        let err = Error::FilmNotFound {
            title: "A New Hop".to_string(),
            suggestions: vec!["A New Hope".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown film title: A New Hop. Did you mean 'A New Hope'?"
        );

        let err = Error::FilmNotFound {
            title: "Return".to_string(),
            suggestions: vec![
                "Return of the Jedi".to_string(),
                "The Phantom Menace".to_string(),
            ],
        };
        assert!(err
            .to_string()
            .ends_with("Did you mean one of: 'Return of the Jedi', 'The Phantom Menace'?"));
    }

    #[test]
    fn film_not_found_without_suggestions_is_bare() {
        let err = Error::FilmNotFound {
            title: "Holiday Special".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown film title: Holiday Special");
    }

    #[test]
    fn classifies_empty_outcomes_and_retryable_failures() {
        assert!(Error::NoPopulatedPlanetFound.is_empty_outcome());
        assert!(Error::NoMatch {
            query: "x".to_string()
        }
        .is_empty_outcome());

        let network = Error::network("http://example.test/", "connection reset");
        assert!(network.is_retryable());
        assert!(!network.is_empty_outcome());

        let malformed = Error::malformed("http://example.test/", "expected value");
        assert!(!malformed.is_retryable());
    }
}
