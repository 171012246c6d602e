use std::fmt;

use url::Url;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server route a command targets, relative to the configured server URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `functions/<name>`
    Function(String),
}

impl Endpoint {
    fn segments(&self) -> Result<[&str; 2]> {
        match self {
            // dot segments would be dropped by the url crate rather than encoded
            Endpoint::Function(name) if matches!(name.as_str(), "" | "." | "..") => {
                Err(Error::InvalidFunctionName(name.clone()))
            }
            Endpoint::Function(name) => Ok(["functions", name.as_str()]),
        }
    }

    /// Resolve against `server_url`. Each segment is percent-encoded on its
    /// own, so a name can never escape its path segment.
    pub fn url(&self, server_url: &Url) -> Result<Url> {
        let segments = self.segments()?;

        let mut url = server_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidServerUrl(server_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
