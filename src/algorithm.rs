//! Algorithm registry: resolves identifiers to measurable work units.
//!
//! The supported set is closed. Each [`Algorithm`] variant binds one
//! password-hashing primitive together with its fixed parameters (plaintext
//! length, salt length, derived-key length, digest choice); the work-factor
//! parameter is the only knob left open, and its meaning is
//! algorithm-dependent:
//!
//! | Identifier      | Primitive          | Work factor            |
//! |-----------------|--------------------|------------------------|
//! | `bcrypt`        | bcrypt             | logarithmic cost, 4-31 |
//! | `pbkdf2-sha256` | PBKDF2-HMAC-SHA256 | iteration count, >= 1  |
//! | `pbkdf2-sha512` | PBKDF2-HMAC-SHA512 | iteration count, >= 1  |

use std::fmt;
use std::hint::black_box;
use std::str::FromStr;
use std::time::Duration;

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Sha256, Sha512};

use crate::error::{Error, PrimitiveError};
use crate::measurement::Timer;

/// A positive integer work-factor parameter.
///
/// Its meaning is algorithm-dependent (see the module table). Callers are
/// responsible for supplying sane upper bounds; the crate enforces only the
/// primitive's own domain.
pub type WorkFactor = u32;

/// Bytes of fresh random plaintext hashed per measured call.
pub const PLAINTEXT_LEN: usize = 32;

/// Bytes of fresh random salt per PBKDF2 call.
///
/// bcrypt generates its own 16-byte salt internally, so no salt is drawn
/// for it here.
pub const SALT_LEN: usize = 8;

/// Derived-key length for the PBKDF2 variants.
pub const PBKDF2_OUTPUT_LEN: usize = 64;

/// Lowest bcrypt cost the primitive accepts.
pub const BCRYPT_MIN_COST: WorkFactor = 4;

/// Highest bcrypt cost the primitive accepts.
pub const BCRYPT_MAX_COST: WorkFactor = 31;

/// The closed set of supported password-hashing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// bcrypt with a logarithmic cost factor.
    Bcrypt,
    /// PBKDF2-HMAC-SHA256 with a linear iteration count.
    Pbkdf2Sha256,
    /// PBKDF2-HMAC-SHA512 with a linear iteration count.
    Pbkdf2Sha512,
}

impl Algorithm {
    /// Every supported algorithm, in display order.
    pub const ALL: [Algorithm; 3] =
        [Algorithm::Bcrypt, Algorithm::Pbkdf2Sha256, Algorithm::Pbkdf2Sha512];

    /// Resolve a human-readable identifier to an algorithm.
    ///
    /// Pure lookup with no side effects. Callers run this before any
    /// sampling starts so an unknown identifier never wastes clock time.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedAlgorithm`] carrying the offending identifier
    /// when it is not in the supported set.
    pub fn resolve(identifier: &str) -> Result<Self, Error> {
        match identifier {
            "bcrypt" => Ok(Algorithm::Bcrypt),
            "pbkdf2-sha256" => Ok(Algorithm::Pbkdf2Sha256),
            "pbkdf2-sha512" => Ok(Algorithm::Pbkdf2Sha512),
            _ => Err(Error::UnsupportedAlgorithm { identifier: identifier.to_string() }),
        }
    }

    /// The identifier this algorithm resolves from.
    pub fn identifier(&self) -> &'static str {
        match self {
            Algorithm::Bcrypt => "bcrypt",
            Algorithm::Pbkdf2Sha256 => "pbkdf2-sha256",
            Algorithm::Pbkdf2Sha512 => "pbkdf2-sha512",
        }
    }

    /// Identifiers of every supported algorithm, in display order.
    pub fn identifiers() -> Vec<&'static str> {
        Self::ALL.iter().map(Algorithm::identifier).collect()
    }

    /// Check a work factor against the primitive's accepted domain.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] naming the value and the domain it
    /// violates.
    pub fn validate_work_factor(&self, work_factor: WorkFactor) -> Result<(), Error> {
        match self {
            Algorithm::Bcrypt => {
                if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&work_factor) {
                    return Err(Error::InvalidParameter {
                        algorithm: *self,
                        work_factor,
                        reason: "cost must be between 4 and 31",
                    });
                }
            }
            Algorithm::Pbkdf2Sha256 | Algorithm::Pbkdf2Sha512 => {
                if work_factor == 0 {
                    return Err(Error::InvalidParameter {
                        algorithm: *self,
                        work_factor,
                        reason: "iteration count must be positive",
                    });
                }
            }
        }
        Ok(())
    }

    /// Bind this algorithm into a measurable [`WorkUnit`].
    pub fn work_unit(&self) -> WorkUnit {
        WorkUnit::new(*self)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::resolve(s)
    }
}

/// One algorithm bound to its fixed parameters, ready to be measured.
///
/// A work unit is stateless between invocations: every call to
/// [`measure`](WorkUnit::measure) draws fresh random input material from
/// the operating system's CSPRNG, so no two calls ever hash the same bytes.
/// The timestamps are taken immediately around the primitive call itself,
/// which runs synchronously to completion; input generation is excluded
/// from the measured window.
#[derive(Debug, Clone, Copy)]
pub struct WorkUnit {
    algorithm: Algorithm,
    timer: Timer,
}

impl WorkUnit {
    /// Create a work unit for `algorithm` with a fresh monotonic timer.
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm, timer: Timer::new() }
    }

    /// The algorithm this unit is bound to.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Perform one hash operation at `work_factor` and return its elapsed
    /// wall-clock time.
    ///
    /// The work factor is passed to the primitive as-is; run it through
    /// [`Algorithm::validate_work_factor`] first if it comes from an
    /// untrusted source, otherwise an out-of-domain value surfaces here as
    /// the primitive's own error.
    ///
    /// # Errors
    ///
    /// The underlying primitive's error, type-erased. PBKDF2 derivation is
    /// infallible; bcrypt can reject a cost outside its domain.
    pub fn measure(&self, work_factor: WorkFactor) -> Result<Duration, PrimitiveError> {
        let mut plaintext = [0u8; PLAINTEXT_LEN];
        OsRng.fill_bytes(&mut plaintext);

        match self.algorithm {
            Algorithm::Bcrypt => {
                let (result, elapsed) = self.timer.measure(|| bcrypt::hash(plaintext, work_factor));
                black_box(result?);
                Ok(elapsed)
            }
            Algorithm::Pbkdf2Sha256 => {
                let mut salt = [0u8; SALT_LEN];
                OsRng.fill_bytes(&mut salt);
                let mut derived = [0u8; PBKDF2_OUTPUT_LEN];
                let ((), elapsed) = self.timer.measure(|| {
                    pbkdf2::pbkdf2_hmac::<Sha256>(&plaintext, &salt, work_factor, &mut derived);
                });
                black_box(derived);
                Ok(elapsed)
            }
            Algorithm::Pbkdf2Sha512 => {
                let mut salt = [0u8; SALT_LEN];
                OsRng.fill_bytes(&mut salt);
                let mut derived = [0u8; PBKDF2_OUTPUT_LEN];
                let ((), elapsed) = self.timer.measure(|| {
                    pbkdf2::pbkdf2_hmac::<Sha512>(&plaintext, &salt, work_factor, &mut derived);
                });
                black_box(derived);
                Ok(elapsed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_supported_identifiers() {
        assert_eq!(Algorithm::resolve("bcrypt").unwrap(), Algorithm::Bcrypt);
        assert_eq!(Algorithm::resolve("pbkdf2-sha256").unwrap(), Algorithm::Pbkdf2Sha256);
        assert_eq!(Algorithm::resolve("pbkdf2-sha512").unwrap(), Algorithm::Pbkdf2Sha512);
    }

    #[test]
    fn resolve_rejects_unknown_identifier() {
        let err = Algorithm::resolve("md5").unwrap_err();
        match err {
            Error::UnsupportedAlgorithm { identifier } => assert_eq!(identifier, "md5"),
            other => panic!("expected UnsupportedAlgorithm, got {other:?}"),
        }
    }

    #[test]
    fn resolve_is_case_sensitive() {
        assert!(Algorithm::resolve("Bcrypt").is_err());
        assert!(Algorithm::resolve("PBKDF2-SHA256").is_err());
    }

    #[test]
    fn from_str_delegates_to_resolve() {
        let parsed: Algorithm = "pbkdf2-sha512".parse().unwrap();
        assert_eq!(parsed, Algorithm::Pbkdf2Sha512);
        assert!("scrypt".parse::<Algorithm>().is_err());
    }

    #[test]
    fn identifier_round_trips() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::resolve(algorithm.identifier()).unwrap(), algorithm);
        }
    }

    #[test]
    fn bcrypt_work_factor_domain() {
        let bcrypt = Algorithm::Bcrypt;
        assert!(bcrypt.validate_work_factor(4).is_ok());
        assert!(bcrypt.validate_work_factor(31).is_ok());
        assert!(bcrypt.validate_work_factor(3).is_err());
        assert!(bcrypt.validate_work_factor(32).is_err());
        assert!(bcrypt.validate_work_factor(0).is_err());
    }

    #[test]
    fn pbkdf2_work_factor_domain() {
        for algorithm in [Algorithm::Pbkdf2Sha256, Algorithm::Pbkdf2Sha512] {
            assert!(algorithm.validate_work_factor(1).is_ok());
            assert!(algorithm.validate_work_factor(1_000_000).is_ok());
            assert!(algorithm.validate_work_factor(0).is_err());
        }
    }

    #[test]
    fn work_units_from_repeated_resolve_are_equivalent() {
        let a = Algorithm::resolve("bcrypt").unwrap().work_unit();
        let b = Algorithm::resolve("bcrypt").unwrap().work_unit();
        assert_eq!(a.algorithm(), b.algorithm());
    }

    #[test]
    fn pbkdf2_measure_returns_nonzero_elapsed() {
        let unit = Algorithm::Pbkdf2Sha256.work_unit();
        let elapsed = unit.measure(10_000).unwrap();
        assert!(elapsed > Duration::ZERO);
    }

    #[test]
    fn serde_identifiers_match_resolve() {
        for algorithm in Algorithm::ALL {
            let json = serde_json::to_string(&algorithm).unwrap();
            assert_eq!(json, format!("\"{}\"", algorithm.identifier()));
        }
    }
}
