use derive_more::derive::Display;

// route keys in the data set are short country/airport codes ("DE", "UAE")
const MAX_TOKEN_LEN: usize = 12;

#[derive(Debug, Display)]
#[display("invalid route token {token:?}: {reason}")]
pub struct InvalidToken {
    pub token: String,
    pub reason: &'static str,
}

impl std::error::Error for InvalidToken {}

/// A validated origin or destination code. Construction is the only way in,
/// so anything holding a RouteToken is safe to bind into a query.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{}", value)]
pub struct RouteToken {
    value: String,
}

impl RouteToken {
    pub fn parse(raw: &str) -> Result<Self, InvalidToken> {
        if raw.is_empty() {
            return Err(InvalidToken {
                token: raw.to_string(),
                reason: "empty",
            });
        }
        if raw.len() > MAX_TOKEN_LEN {
            return Err(InvalidToken {
                token: raw.to_string(),
                reason: "too long",
            });
        }
        if !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(InvalidToken {
                token: raw.to_string(),
                reason: "not alphanumeric",
            });
        }

        Ok(Self {
            value: raw.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// An origin/destination pair. Tokens are matched exactly against the store,
/// no case folding or fuzzy matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteKey {
    pub origin: RouteToken,
    pub destination: RouteToken,
}

impl RouteKey {
    pub fn parse(origin: &str, destination: &str) -> Result<Self, InvalidToken> {
        Ok(Self {
            origin: RouteToken::parse(origin)?,
            destination: RouteToken::parse(destination)?,
        })
    }
}
