//! Model specifications as tagged data
//!
//! A [`ModelSpec`] is a name plus an ordered list of [`Term`]s. The design
//! matrix builder turns it into columns; an intercept is always implied.

use crate::data::{AdmissionRecord, Gender};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Predictor column of an admission record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Predictor {
    GreV,
    GreQ,
    GreW,
    Gpa,
    /// Treatment coded, `Female` baseline
    Gender,
}

impl Predictor {
    pub const ALL: [Predictor; 5] = [
        Predictor::GreV,
        Predictor::GreQ,
        Predictor::GreW,
        Predictor::Gpa,
        Predictor::Gender,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Predictor::GreV => "gre_v",
            Predictor::GreQ => "gre_q",
            Predictor::GreW => "gre_w",
            Predictor::Gpa => "gpa",
            Predictor::Gender => "gender",
        }
    }

    /// Numeric value of the predictor for one record
    pub fn value(&self, record: &AdmissionRecord) -> f64 {
        match self {
            Predictor::GreV => f64::from(record.gre_v),
            Predictor::GreQ => f64::from(record.gre_q),
            Predictor::GreW => record.gre_w,
            Predictor::Gpa => record.gpa,
            Predictor::Gender => match record.gender {
                Gender::Female => 0.0,
                Gender::Male => 1.0,
            },
        }
    }
}

impl FromStr for Predictor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Predictor::ALL
            .into_iter()
            .find(|p| p.name() == s.trim())
            .ok_or_else(|| {
                format!("unknown predictor '{s}' (expected one of: gre_v, gre_q, gre_w, gpa, gender)")
            })
    }
}

impl fmt::Display for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One design-matrix column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Term {
    Main(Predictor),
    /// Product of two distinct predictors, written `a:b`
    Interaction(Predictor, Predictor),
}

impl Term {
    pub fn value(&self, record: &AdmissionRecord) -> f64 {
        match self {
            Term::Main(p) => p.value(record),
            Term::Interaction(a, b) => a.value(record) * b.value(record),
        }
    }

    /// Same term regardless of interaction operand order
    pub fn canonical(&self) -> Term {
        match *self {
            Term::Interaction(a, b) if b < a => Term::Interaction(b, a),
            other => other,
        }
    }
}

impl FromStr for Term {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((a, b)) => Ok(Term::Interaction(a.parse()?, b.parse()?)),
            None => Ok(Term::Main(s.parse()?)),
        }
    }
}

impl TryFrom<String> for Term {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Term> for String {
    fn from(t: Term) -> Self {
        t.to_string()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Main(p) => write!(f, "{p}"),
            Term::Interaction(a, b) => write!(f, "{a}:{b}"),
        }
    }
}

/// Named candidate model
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSpec {
    pub name: String,
    #[serde(default)]
    pub terms: Vec<Term>,
}

impl ModelSpec {
    pub fn new(name: impl Into<String>, terms: Vec<Term>) -> Self {
        Self {
            name: name.into(),
            terms,
        }
    }

    /// Intercept only
    pub fn empty() -> Self {
        Self::new("empty", Vec::new())
    }

    /// Test scores (with their interaction), writing score and GPA
    pub fn academics() -> Self {
        Self::new(
            "academics",
            vec![
                Term::Main(Predictor::GreV),
                Term::Main(Predictor::GreQ),
                Term::Interaction(Predictor::GreV, Predictor::GreQ),
                Term::Main(Predictor::GreW),
                Term::Main(Predictor::Gpa),
            ],
        )
    }

    /// Academics plus gender
    pub fn full() -> Self {
        let mut spec = Self::academics();
        spec.name = "full".into();
        spec.terms.push(Term::Main(Predictor::Gender));
        spec
    }

    /// The three candidate models compared by default
    pub fn defaults() -> Vec<ModelSpec> {
        vec![Self::empty(), Self::academics(), Self::full()]
    }

    pub fn is_intercept_only(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of coefficients including the intercept
    pub fn n_coefficients(&self) -> usize {
        self.terms.len() + 1
    }

    /// R-style formula, e.g. `admit ~ gre_v + gre_q`
    pub fn formula(&self) -> String {
        if self.terms.is_empty() {
            return "admit ~ 1".into();
        }
        let rhs: Vec<String> = self.terms.iter().map(Term::to_string).collect();
        format!("admit ~ {}", rhs.join(" + "))
    }
}

impl fmt::Display for ModelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.formula())
    }
}
