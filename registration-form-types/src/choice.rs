use std::str::FromStr;

use strum::{AsRefStr, Display, EnumString, VariantArray};

/// A closed set of selectable values whose blank entry means "unselected".
///
/// Selections are carried as `Option<Self>`; `None` is the blank entry and
/// renders as the empty string.
pub trait Choice:
    Copy + Eq + VariantArray + AsRef<str> + FromStr<Err = strum::ParseError> + 'static
{
    /// The label shown for a selection, `""` when nothing is selected.
    fn selection_label(selection: Option<&Self>) -> &str {
        selection.map(|c| c.as_ref()).unwrap_or("")
    }

    /// Parse a label back into a selection. The empty label is "unselected".
    fn parse_selection(label: &str) -> Result<Option<Self>, strum::ParseError> {
        if label.is_empty() {
            Ok(None)
        } else {
            label.parse().map(Some)
        }
    }

    /// All entries in display order, blank entry first.
    fn options() -> impl Iterator<Item = Option<Self>> {
        std::iter::once(None).chain(Self::VARIANTS.iter().copied().map(Some))
    }
}

/// Degree programme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, VariantArray)]
pub enum Course {
    #[strum(to_string = "BSCS-SE")]
    BscsSe,
    #[strum(to_string = "BSIT-AGD")]
    BsitAgd,
    #[strum(to_string = "BSCE")]
    Bsce,
    #[strum(to_string = "BSME")]
    Bsme,
    #[strum(to_string = "BSCpE")]
    Bscpe,
}

impl Choice for Course {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, VariantArray)]
pub enum YearLevel {
    #[strum(to_string = "1st Year")]
    First,
    #[strum(to_string = "2nd Year")]
    Second,
    #[strum(to_string = "3rd Year")]
    Third,
    #[strum(to_string = "4th Year")]
    Fourth,
}

impl Choice for YearLevel {}

/// Mutually exclusive gender choice. There is no default selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, VariantArray)]
pub enum Gender {
    Male,
    Female,
}

impl Choice for Gender {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_labels_match_selector_entries() {
        let labels: Vec<String> = Course::options()
            .map(|c| Course::selection_label(c.as_ref()).to_owned())
            .collect();
        assert_eq!(labels, ["", "BSCS-SE", "BSIT-AGD", "BSCE", "BSME", "BSCpE"]);
    }

    #[test]
    fn year_level_labels_match_selector_entries() {
        let labels: Vec<String> = YearLevel::options()
            .map(|y| YearLevel::selection_label(y.as_ref()).to_owned())
            .collect();
        assert_eq!(labels, ["", "1st Year", "2nd Year", "3rd Year", "4th Year"]);
    }

    #[test]
    fn gender_has_two_entries() {
        assert_eq!(Gender::VARIANTS, &[Gender::Male, Gender::Female]);
        assert_eq!(Gender::Female.to_string(), "Female");
    }

    #[test]
    fn blank_label_parses_to_unselected() {
        assert_eq!(Course::parse_selection("").unwrap(), None);
        assert_eq!(
            YearLevel::parse_selection("3rd Year").unwrap(),
            Some(YearLevel::Third)
        );
        assert_eq!(Gender::parse_selection("Male").unwrap(), Some(Gender::Male));
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!(Course::parse_selection("BSN").is_err());
        // Labels are exact; no case folding.
        assert!(Course::parse_selection("bscpe").is_err());
    }
}
