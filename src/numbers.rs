use std::convert::TryFrom;
use std::num::ParseFloatError;

use log::debug;
use thiserror::Error;

use crate::error::{Result, ServiceError};

#[derive(Debug, Error, PartialEq)]
pub enum ParseNumberError {
    #[error("`{0}` is not a decimal number")]
    Malformed(String, #[source] ParseFloatError),
    #[error("`{0}` is not a finite number")]
    NotFinite(String),
}

/// Parse a single comma-delimited token. The token is taken as-is, so
/// surrounding whitespace makes it invalid.
pub fn parse_token(token: &str) -> std::result::Result<f64, ParseNumberError> {
    let value = token
        .parse::<f64>()
        .map_err(|err| ParseNumberError::Malformed(token.to_string(), err))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseNumberError::NotFinite(token.to_string()))
    }
}

/// Non-empty, ordered list of finite numbers taken from one request.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberSequence(Vec<f64>);

impl NumberSequence {
    /// Validate the raw `nums` parameter.
    ///
    /// Every token must parse, otherwise all offending tokens are reported
    /// together in [ServiceError::InvalidNumbers].
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let raw = match raw {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Err(ServiceError::MissingParameter),
        };

        let mut values = Vec::new();
        let mut invalid = Vec::new();
        for token in raw.split(',') {
            match parse_token(token) {
                Ok(value) => values.push(value),
                Err(err) => {
                    debug!("Rejected token: {}", err);
                    invalid.push(token.to_string());
                }
            }
        }

        if !invalid.is_empty() {
            return Err(ServiceError::InvalidNumbers(invalid));
        }
        NumberSequence::try_from(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed sequence.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl TryFrom<Vec<f64>> for NumberSequence {
    type Error = ServiceError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            Err(ServiceError::EmptySequence)
        } else {
            Ok(NumberSequence(values))
        }
    }
}
