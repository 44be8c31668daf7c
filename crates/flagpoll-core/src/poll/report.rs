//! What a probe hands back after one attempt.
//!
//! `Report` is the typed form used by the scheduler. `Signal` is the loose
//! form for probes that still answer with a bare scalar or error value; it is
//! converted with [`Report::from_signal`].

use std::fmt;

/// Result of a single probe attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Report<S, P, E> {
    /// Not done yet. A payload may still be attached; it is recorded and can
    /// be surfaced if every attempt ends up continuing.
    Continue(Option<P>),
    /// Stop now: the probe is satisfied.
    Succeed { status: S, payload: Option<P> },
    /// Stop now: the probe hit a fatal condition.
    Fail(E),
}

impl<S, P, E> Report<S, P, E> {
    /// Continue with no payload.
    pub fn pending() -> Self {
        Report::Continue(None)
    }

    /// Continue, carrying a payload.
    pub fn continue_with(payload: P) -> Self {
        Report::Continue(Some(payload))
    }

    /// Succeed with a status and payload.
    pub fn succeed(status: S, payload: P) -> Self {
        Report::Succeed {
            status,
            payload: Some(payload),
        }
    }

    /// Fail with the given error.
    pub fn fail(error: E) -> Self {
        Report::Fail(error)
    }
}

/// Plain (non-error) value a probe may use as its signal.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Scalar {
    /// `false`, `0`, `NaN` and the empty string are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Bool(b) => *b,
            Scalar::Number(n) => *n != 0.0 && !n.is_nan(),
            Scalar::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

// Only integer types that fit losslessly in an f64; wider values go through `f64` explicitly.
impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Number(f64::from(n))
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Scalar::Number(f64::from(n))
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

/// Loosely typed signal: nothing, a plain scalar, or an error value.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal<E> {
    Absent,
    Scalar(Scalar),
    Error(E),
}

impl<E> Signal<E> {
    pub fn scalar(value: impl Into<Scalar>) -> Self {
        Signal::Scalar(value.into())
    }
}

impl<P, E> Report<Scalar, P, E> {
    /// Map a loose `(signal, payload)` pair onto a typed report.
    ///
    /// Absent or falsy signals continue, error values fail, and any truthy
    /// scalar stops successfully with that scalar as the status. The payload
    /// is kept on continue and success and dropped on failure.
    pub fn from_signal(signal: Signal<E>, payload: Option<P>) -> Self {
        match signal {
            Signal::Error(e) => Report::Fail(e),
            Signal::Scalar(s) if s.is_truthy() => Report::Succeed { status: s, payload },
            Signal::Scalar(_) | Signal::Absent => Report::Continue(payload),
        }
    }
}
