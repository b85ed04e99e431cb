use strum::{Display, VariantArray};

/// The seven fields of the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, VariantArray)]
pub enum Field {
    Name,
    Course,
    #[strum(to_string = "Year Level")]
    YearLevel,
    Gender,
    Address,
    Email,
    #[strum(to_string = "Contact No")]
    Contact,
}

impl Field {
    /// Label as rendered next to the input, e.g. `"Year Level:"`.
    pub fn label(&self) -> String {
        format!("{self}:")
    }

    /// Whether the field is picked from a closed set rather than typed.
    pub fn is_choice(&self) -> bool {
        matches!(self, Field::Course | Field::YearLevel | Field::Gender)
    }
}
