use crate::{Choice, Course, Field, Gender, YearLevel};

/// Raw field values read from the UI at the moment of an action.
///
/// Text is kept verbatim (untrimmed); enumeration fields use `None` for the
/// blank entry. `FormSnapshot::default()` is the cleared form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub name: String,
    pub course: Option<Course>,
    pub year_level: Option<YearLevel>,
    pub gender: Option<Gender>,
    pub address: String,
    pub email: String,
    pub contact: String,
}

impl FormSnapshot {
    /// Create an empty snapshot, equal to the cleared form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the string form of a field. Unselected enumeration fields are `""`.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Course => Course::selection_label(self.course.as_ref()),
            Field::YearLevel => YearLevel::selection_label(self.year_level.as_ref()),
            Field::Gender => Gender::selection_label(self.gender.as_ref()),
            Field::Address => &self.address,
            Field::Email => &self.email,
            Field::Contact => &self.contact,
        }
    }

    /// Set a field from its string form.
    ///
    /// Text fields take the value verbatim. Enumeration fields accept their exact
    /// labels or `""` for unselected.
    pub fn set_value(&mut self, field: Field, value: &str) -> Result<(), strum::ParseError> {
        match field {
            Field::Name => self.name = value.to_string(),
            Field::Course => self.course = Course::parse_selection(value)?,
            Field::YearLevel => self.year_level = YearLevel::parse_selection(value)?,
            Field::Gender => self.gender = Gender::parse_selection(value)?,
            Field::Address => self.address = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::Contact => self.contact = value.to_string(),
        }
        Ok(())
    }

    /// Builder-style variant of [`FormSnapshot::set_value`].
    pub fn with_value(mut self, field: Field, value: &str) -> Result<Self, strum::ParseError> {
        self.set_value(field, value)?;
        Ok(self)
    }

    /// Check whether every field is blank and unselected.
    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::VariantArray;

    #[test]
    fn default_is_cleared() {
        let snapshot = FormSnapshot::new();
        assert!(snapshot.is_cleared());
        for field in Field::VARIANTS {
            assert_eq!(snapshot.value(*field), "");
        }
    }

    #[test]
    fn set_value_round_trips_labels() {
        let snapshot = FormSnapshot::new()
            .with_value(Field::Course, "BSCE")
            .and_then(|s| s.with_value(Field::YearLevel, "4th Year"))
            .and_then(|s| s.with_value(Field::Gender, "Female"))
            .and_then(|s| s.with_value(Field::Name, "  Maria "))
            .unwrap();

        assert_eq!(snapshot.course, Some(Course::Bsce));
        assert_eq!(snapshot.value(Field::YearLevel), "4th Year");
        assert_eq!(snapshot.gender, Some(Gender::Female));
        // Text is stored verbatim.
        assert_eq!(snapshot.value(Field::Name), "  Maria ");
        assert!(!snapshot.is_cleared());
    }

    #[test]
    fn set_value_rejects_unknown_choice() {
        let mut snapshot = FormSnapshot::new();
        assert!(snapshot.set_value(Field::Gender, "Other").is_err());
        assert_eq!(snapshot.gender, None);
    }
}
