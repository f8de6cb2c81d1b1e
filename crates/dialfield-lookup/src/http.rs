use crate::service::{LookupOutcome, LookupService};
use crate::{LookupError, Result};

#[cfg(feature = "http-lookup")]
mod imp {
    use super::{LookupError, LookupOutcome, LookupService, Result};
    use reqwest::blocking::Client;
    use reqwest::StatusCode;
    use std::time::Duration;
    use url::Url;

    /// Blocking HTTP backend: GET `<endpoint>?number=<value>` returning a
    /// JSON body `{ "id": ..., "valid": ... }`. A 404 means the backend has
    /// no data for the number.
    #[derive(Debug, Clone)]
    pub struct HttpLookupService {
        endpoint: String,
        timeout: Duration,
        user_agent: Option<String>,
    }

    impl HttpLookupService {
        pub fn new(endpoint: String, timeout_secs: u64, user_agent: Option<String>) -> Self {
            Self {
                endpoint,
                timeout: Duration::from_secs(timeout_secs),
                user_agent,
            }
        }
    }

    impl LookupService for HttpLookupService {
        fn service_name(&self) -> &'static str {
            "http"
        }

        fn lookup(&mut self, number: &str) -> Result<Option<LookupOutcome>> {
            fetch_outcome(
                &self.endpoint,
                number,
                self.timeout,
                self.user_agent.as_deref(),
            )
        }
    }

    pub fn fetch_outcome(
        endpoint: &str,
        number: &str,
        timeout: Duration,
        user_agent: Option<&str>,
    ) -> Result<Option<LookupOutcome>> {
        let mut url = Url::parse(endpoint)?;
        if url.scheme() != "https" {
            return Err(LookupError::Endpoint(
                "lookup endpoint must use https".to_string(),
            ));
        }
        url.query_pairs_mut().append_pair("number", number);

        let client = Client::builder()
            .user_agent(user_agent.unwrap_or("dialfield"))
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let response = client
            .get(url)
            .header("Accept", "application/json")
            .send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = response.error_for_status()?;
        let outcome: LookupOutcome = response.json()?;
        Ok(Some(outcome))
    }
}

#[cfg(not(feature = "http-lookup"))]
mod imp {
    use super::{LookupError, LookupOutcome, LookupService, Result};
    use std::time::Duration;

    #[derive(Debug, Clone)]
    pub struct HttpLookupService {
        endpoint: String,
        timeout: Duration,
        user_agent: Option<String>,
    }

    impl HttpLookupService {
        pub fn new(endpoint: String, timeout_secs: u64, user_agent: Option<String>) -> Self {
            Self {
                endpoint,
                timeout: Duration::from_secs(timeout_secs),
                user_agent,
            }
        }
    }

    impl LookupService for HttpLookupService {
        fn service_name(&self) -> &'static str {
            "http"
        }

        fn lookup(&mut self, _number: &str) -> Result<Option<LookupOutcome>> {
            let _ = (&self.endpoint, &self.timeout, &self.user_agent);
            Err(LookupError::Unavailable(
                "remote lookup requires the http-lookup feature".to_string(),
            ))
        }
    }
}

pub use imp::HttpLookupService;
#[cfg(feature = "http-lookup")]
pub use imp::fetch_outcome;
