//! Advertisement gating for the `object-info` capability.
//!
//! Consulted once per connection while the advertisement is assembled; an
//! absent configuration key advertises.

use crate::error::Error;

/// The token included in the capability advertisement.
pub const CAPABILITY: &str = "object-info";

/// The configuration key that gates advertisement.
pub const CONFIG_KEY: &str = "objectinfo.advertise";

/// The advertisement state as configured in the repository.
///
/// An unset key is kept distinct from an explicit `true` so callers can tell
/// operator intent apart from the default, but both advertise.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Advertise {
    /// The key is not present in the configuration.
    #[default]
    Unset,
    /// The key is explicitly set to a true value.
    Enabled,
    /// The key is explicitly set to a false value.
    Disabled,
}

impl Advertise {
    /// Read the advertisement state from `config`.
    ///
    /// A value that is not a recognized boolean is a configuration error and
    /// is reported rather than defaulted; connection setup decides whether
    /// that is fatal.
    pub fn from_config(config: &gix_config::File<'_>) -> Result<Self, Error> {
        match config.boolean(CONFIG_KEY) {
            None => Ok(Advertise::Unset),
            Some(Ok(true)) => Ok(Advertise::Enabled),
            Some(Ok(false)) => Ok(Advertise::Disabled),
            Some(Err(err)) => Err(Error::Config {
                key: CONFIG_KEY,
                message: err.to_string(),
            }),
        }
    }

    /// Return `true` unless advertisement is explicitly disabled.
    pub fn is_enabled(self) -> bool {
        !matches!(self, Advertise::Disabled)
    }
}

/// Whether the [`CAPABILITY`] token should be part of the advertised capability set.
pub fn should_advertise(config: &gix_config::File<'_>) -> Result<bool, Error> {
    Advertise::from_config(config).map(Advertise::is_enabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_and_enabled_advertise_disabled_does_not() {
        assert!(Advertise::Unset.is_enabled());
        assert!(Advertise::Enabled.is_enabled());
        assert!(!Advertise::Disabled.is_enabled());
    }
}
