//! Admission records and the immutable dataset they live in

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Applicant gender category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "female" => Ok(Gender::Female),
            "male" => Ok(Gender::Male),
            other => Err(format!("unknown gender '{other}' (expected Male or Female)")),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Female => write!(f, "Female"),
            Gender::Male => write!(f, "Male"),
        }
    }
}

/// One applicant: binary outcome plus predictors
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdmissionRecord {
    /// Outcome: 1 if admitted
    pub admit: u8,
    /// GRE verbal score (130-170)
    pub gre_v: i32,
    /// GRE quantitative score (130-170)
    pub gre_q: i32,
    /// GRE analytical writing score (0-6 in half points)
    pub gre_w: f64,
    /// Undergraduate GPA
    pub gpa: f64,
    pub gender: Gender,
}

impl AdmissionRecord {
    /// Outcome as a float for likelihood computations
    pub fn outcome(&self) -> f64 {
        f64::from(self.admit)
    }
}

/// Ordered, immutable collection of admission records
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<AdmissionRecord>,
}

impl Dataset {
    /// Wrap already-validated records
    pub fn new(records: Vec<AdmissionRecord>) -> Self {
        Self { records }
    }

    /// Wrap records after checking every outcome is 0 or 1
    pub fn from_records(records: Vec<AdmissionRecord>) -> Result<Self> {
        let dataset = Self::new(records);
        dataset.check_outcomes()?;
        Ok(dataset)
    }

    /// `Error::Schema` naming the first (one-based) row whose `admit` is not 0 or 1
    pub fn check_outcomes(&self) -> Result<()> {
        match self.records.iter().position(|r| r.admit > 1) {
            Some(i) => Err(Error::Schema(format!(
                "row {}: column 'admit' expected 0 or 1, got {}",
                i + 1,
                self.records[i].admit
            ))),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[AdmissionRecord] {
        &self.records
    }

    /// Record at `index`
    ///
    /// # Panics
    /// Panics if `index` is out of bounds. Split indices are always in range.
    pub fn get(&self, index: usize) -> &AdmissionRecord {
        &self.records[index]
    }

    /// Outcomes in dataset order
    pub fn outcomes(&self) -> Vec<u8> {
        self.records.iter().map(|r| r.admit).collect()
    }

    /// Fraction of admitted applicants (0.0 for an empty dataset)
    pub fn admit_rate(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let admitted = self.records.iter().filter(|r| r.admit == 1).count();
        admitted as f64 / self.records.len() as f64
    }
}

impl FromIterator<AdmissionRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = AdmissionRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(admit: u8) -> AdmissionRecord {
        AdmissionRecord {
            admit,
            gre_v: 155,
            gre_q: 160,
            gre_w: 4.0,
            gpa: 3.5,
            gender: Gender::Female,
        }
    }

    #[test]
    fn test_gender_parse_case_insensitive() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" female ".parse::<Gender>().unwrap(), Gender::Female);
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn test_admit_rate() {
        let ds: Dataset = [record(1), record(0), record(0), record(1)].into_iter().collect();
        assert_eq!(ds.len(), 4);
        assert!((ds.admit_rate() - 0.5).abs() < 1e-12);
        assert_eq!(ds.outcomes(), vec![1, 0, 0, 1]);
    }

    #[test]
    fn test_from_records_rejects_out_of_range_outcome() {
        let ds = Dataset::from_records(vec![record(0), record(1)]).unwrap();
        assert_eq!(ds.len(), 2);

        let err = Dataset::from_records(vec![record(0), record(2), record(3)]).unwrap_err();
        match err {
            Error::Schema(msg) => {
                assert!(msg.contains("row 2"), "{msg}");
                assert!(msg.contains("got 2"), "{msg}");
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_dataset_rate() {
        let ds = Dataset::default();
        assert!(ds.is_empty());
        assert_eq!(ds.admit_rate(), 0.0);
    }
}
