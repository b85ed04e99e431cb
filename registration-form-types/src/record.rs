use crate::{Course, Gender, YearLevel};

/// A registration that passed validation.
///
/// Text fields are trimmed; every enumeration field holds a concrete selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub course: Course,
    pub year_level: YearLevel,
    pub gender: Gender,
    pub address: String,
    pub email: String,
    pub contact: String,
}
