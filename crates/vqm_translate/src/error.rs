//! Error taxonomy for a translation run.
//!
//! Every fatal condition is one of:
//! - a [`ValidationError`] (structural violation in the module graph),
//! - a [`ModeHashError`] (catalog miss or a mistyped configuration parameter),
//! - a [`NameError`] (an index that cannot be turned into a net name).
//!
//! [`TranslateError::to_diagnostic`] maps each to a stable diagnostic code:
//! `E1xx` structural, `E2xx` catalog, `E3xx` contract.

use std::fmt;

use vqm_common::InternalError;
use vqm_diagnostics::{Category, Diagnostic, DiagnosticCode};
use vqm_netlist::{ParamKind, PinId};

/// Where in the module a pin reference appears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Connection {
    /// The target of the n-th assignment.
    Assignment {
        /// Zero-based position in the module's assignment list.
        index: usize,
    },
    /// A port association on an instance.
    Port {
        /// The instance name.
        instance: String,
        /// The primitive port name.
        port: String,
    },
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connection::Assignment { index } => write!(f, "assignment #{index}"),
            Connection::Port { instance, port } => {
                write!(f, "port '{port}' of instance '{instance}'")
            }
        }
    }
}

/// A structural violation found by [`validate`](crate::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The parser produced no module.
    #[error("netlist contains no module")]
    MissingModule,

    /// The module has an empty name.
    #[error("module has an empty name")]
    EmptyModuleName,

    /// A pin has an empty name.
    #[error("pin #{} has an empty name", .pin.as_raw())]
    EmptyPinName {
        /// The offending pin.
        pin: PinId,
    },

    /// A connection refers to a pin that does not exist in the module.
    #[error("{site} refers to unknown pin #{}", .pin.as_raw())]
    DanglingPin {
        /// Where the reference appears.
        site: Connection,
        /// The unresolved pin ID.
        pin: PinId,
    },

    /// A bit index lies outside the pin's declared range.
    #[error("{site} uses bit {index} of pin '{pin}', outside its range [{low}:{high}]")]
    IndexOutOfRange {
        /// Where the reference appears.
        site: Connection,
        /// The pin name.
        pin: String,
        /// The offending bit index.
        index: i32,
        /// Lowest valid bit.
        low: i32,
        /// Highest valid bit.
        high: i32,
    },

    /// A whole-pin reference names a multi-bit pin.
    #[error("{site} uses all of pin '{pin}', which is not single-bit ([{left}:{right}])")]
    WholePinNotSingleBit {
        /// Where the reference appears.
        site: Connection,
        /// The pin name.
        pin: String,
        /// Declared left bound.
        left: i32,
        /// Declared right bound.
        right: i32,
    },
}

/// A failure to derive a canonical net name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// A negative bit index other than the whole-pin sentinel.
    #[error("cannot append {index} as index to '{name}'")]
    NegativeIndex {
        /// The bus name.
        name: String,
        /// The offending index.
        index: i64,
    },

    /// A whole-pin name was requested for a multi-bit bus.
    #[error("whole-pin name requested for multi-bit bus '{name}' [{left}:{right}]")]
    WholeBusReference {
        /// The bus name.
        name: String,
        /// Declared left bound.
        left: i32,
        /// Declared right bound.
        right: i32,
    },
}

/// A failure to resolve an instance to an architecture model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModeHashError {
    /// A recognized parameter carries the wrong value type.
    #[error("parameter '{param}' of instance '{instance}' must be {expected}, found {found}")]
    ParamTypeMismatch {
        /// The instance name.
        instance: String,
        /// The parameter name.
        param: String,
        /// The required type.
        expected: ParamKind,
        /// The type actually present.
        found: ParamKind,
    },

    /// A single-port memory name is missing from the catalog.
    #[error("could not find single port memory primitive '{candidate}' in architecture catalog")]
    SinglePortMiss {
        /// The name that was looked up.
        candidate: String,
    },

    /// A same-width dual-port memory name is missing from the catalog.
    #[error(
        "could not find dual port (non-mixed_width) memory primitive '{candidate}' in architecture catalog"
    )]
    DualPortMiss {
        /// The name that was looked up.
        candidate: String,
    },

    /// The final candidate name is missing from the catalog.
    #[error("could not find primitive '{candidate}' in architecture catalog")]
    PrimitiveMiss {
        /// The name that was looked up.
        candidate: String,
    },
}

impl ModeHashError {
    /// Returns the candidate model name for catalog misses.
    pub fn candidate(&self) -> Option<&str> {
        match self {
            ModeHashError::SinglePortMiss { candidate }
            | ModeHashError::DualPortMiss { candidate }
            | ModeHashError::PrimitiveMiss { candidate } => Some(candidate),
            ModeHashError::ParamTypeMismatch { .. } => None,
        }
    }
}

/// Any fatal error of a translation run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    /// The module graph is structurally unsound.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An instance could not be resolved to an architecture model.
    #[error(transparent)]
    ModeHash(#[from] ModeHashError),

    /// A net name could not be built.
    #[error(transparent)]
    Name(#[from] NameError),

    /// An internal contract was broken.
    #[error(transparent)]
    Internal(#[from] InternalError),
}

const fn error_code(number: u16) -> DiagnosticCode {
    DiagnosticCode::new(Category::Error, number)
}

impl TranslateError {
    /// Returns the stable diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            TranslateError::Validation(e) => match e {
                ValidationError::MissingModule => error_code(101),
                ValidationError::EmptyModuleName => error_code(102),
                ValidationError::EmptyPinName { .. } => error_code(103),
                ValidationError::DanglingPin { .. } => error_code(104),
                ValidationError::IndexOutOfRange { .. } => error_code(105),
                ValidationError::WholePinNotSingleBit { .. } => error_code(106),
            },
            TranslateError::ModeHash(e) => match e {
                ModeHashError::PrimitiveMiss { .. } => error_code(201),
                ModeHashError::SinglePortMiss { .. } => error_code(202),
                ModeHashError::DualPortMiss { .. } => error_code(203),
                ModeHashError::ParamTypeMismatch { .. } => error_code(301),
            },
            TranslateError::Name(e) => match e {
                NameError::NegativeIndex { .. } => error_code(302),
                NameError::WholeBusReference { .. } => error_code(303),
            },
            TranslateError::Internal(_) => error_code(399),
        }
    }

    /// Returns the identifier the operator needs to find the problem.
    pub fn subject(&self) -> Option<String> {
        match self {
            TranslateError::Validation(e) => match e {
                ValidationError::MissingModule | ValidationError::EmptyModuleName => None,
                ValidationError::EmptyPinName { pin } => Some(format!("pin #{}", pin.as_raw())),
                ValidationError::DanglingPin { site, .. } => Some(site.to_string()),
                ValidationError::IndexOutOfRange { pin, .. }
                | ValidationError::WholePinNotSingleBit { pin, .. } => Some(pin.clone()),
            },
            TranslateError::ModeHash(e) => match e {
                ModeHashError::ParamTypeMismatch { instance, .. } => Some(instance.clone()),
                other => other.candidate().map(str::to_string),
            },
            TranslateError::Name(e) => match e {
                NameError::NegativeIndex { name, .. } | NameError::WholeBusReference { name, .. } => {
                    Some(name.clone())
                }
            },
            TranslateError::Internal(_) => None,
        }
    }

    /// Builds the single error diagnostic reported for this failure.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code(), self.to_string());
        if let Some(subject) = self.subject() {
            diag = diag.with_subject(subject);
        }
        match self {
            TranslateError::ModeHash(e) if e.candidate().is_some() => diag.with_help(
                "add a model with this exact name to the architecture catalog",
            ),
            TranslateError::Internal(_) => {
                diag.with_note("this indicates a bug in an earlier pipeline stage")
            }
            _ => diag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_display() {
        assert_eq!(
            Connection::Assignment { index: 2 }.to_string(),
            "assignment #2"
        );
        let port = Connection::Port {
            instance: "ram0".to_string(),
            port: "clk0".to_string(),
        };
        assert_eq!(port.to_string(), "port 'clk0' of instance 'ram0'");
    }

    #[test]
    fn catalog_miss_names_candidate() {
        let err: TranslateError = ModeHashError::PrimitiveMiss {
            candidate: "ram.opmode{dual_port}".to_string(),
        }
        .into();
        assert!(err.to_string().contains("'ram.opmode{dual_port}'"));
        let diag = err.to_diagnostic();
        assert_eq!(diag.code.to_string(), "E201");
        assert_eq!(diag.subject.as_deref(), Some("ram.opmode{dual_port}"));
        assert_eq!(diag.help.len(), 1);
    }

    #[test]
    fn out_of_range_names_pin_and_index() {
        let err: TranslateError = ValidationError::IndexOutOfRange {
            site: Connection::Assignment { index: 0 },
            pin: "data".to_string(),
            index: 10,
            low: 0,
            high: 7,
        }
        .into();
        let msg = err.to_string();
        assert!(msg.contains("bit 10"));
        assert!(msg.contains("'data'"));
        assert!(msg.contains("[0:7]"));
        assert_eq!(err.code().to_string(), "E105");
        assert_eq!(err.subject().as_deref(), Some("data"));
    }

    #[test]
    fn negative_index_message() {
        let err = NameError::NegativeIndex {
            name: "a".to_string(),
            index: -3,
        };
        assert_eq!(err.to_string(), "cannot append -3 as index to 'a'");
        assert_eq!(TranslateError::from(err).code().to_string(), "E302");
    }

    #[test]
    fn type_mismatch_message() {
        let err = ModeHashError::ParamTypeMismatch {
            instance: "ram0".to_string(),
            param: "port_a_data_width".to_string(),
            expected: ParamKind::Integer,
            found: ParamKind::String,
        };
        assert!(err.candidate().is_none());
        assert_eq!(
            err.to_string(),
            "parameter 'port_a_data_width' of instance 'ram0' must be integer, found string"
        );
    }

    #[test]
    fn codes_are_distinct() {
        let errors: Vec<TranslateError> = vec![
            ValidationError::MissingModule.into(),
            ValidationError::EmptyModuleName.into(),
            ValidationError::EmptyPinName {
                pin: PinId::from_raw(0),
            }
            .into(),
            ModeHashError::SinglePortMiss {
                candidate: "x".to_string(),
            }
            .into(),
            ModeHashError::DualPortMiss {
                candidate: "x".to_string(),
            }
            .into(),
            InternalError::new("oops").into(),
        ];
        let mut codes: Vec<String> = errors.iter().map(|e| e.code().to_string()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
