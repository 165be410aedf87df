//! Delivery address model
//!
//! Saved addresses plus the "add new address" form and its validation.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use strum::{Display, EnumString};
use thiserror::Error;

/// US zip code, optionally with the +4 suffix
fn pincode_regex() -> &'static Regex {
    static PINCODE_REGEX: OnceLock<Regex> = OnceLock::new();
    PINCODE_REGEX.get_or_init(|| Regex::new(r"^\d{5}(-\d{4})?$").unwrap())
}

/// Optional leading +, then at least ten digits, spaces, dashes or parentheses
fn phone_regex() -> &'static Regex {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    PHONE_REGEX.get_or_init(|| Regex::new(r"^\+?[\d\s\-()]{10,}$").unwrap())
}

/// Kind of address
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AddressKind {
    #[default]
    Home,
    Work,
    Other,
}

/// The address an order is delivered to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    pub kind: AddressKind,
    /// "Home", "Work" or the recipient name for a new address
    pub label: String,
    pub full_address: String,
}

/// The two addresses offered before "Add New Address"
pub fn saved_addresses() -> Vec<DeliveryAddress> {
    vec![
        DeliveryAddress {
            kind: AddressKind::Home,
            label: "Home".to_string(),
            full_address: "123 Main St, Apartment 4B, New York, NY 10001".to_string(),
        },
        DeliveryAddress {
            kind: AddressKind::Work,
            label: "Work".to_string(),
            full_address: "456 Business Ave, Suite 200, New York, NY 10002".to_string(),
        },
    ]
}

/// A single failed field of the address form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Full name is required")]
    MissingFullName,
    #[error("Phone number is required")]
    MissingPhoneNumber,
    #[error("Invalid phone number format")]
    InvalidPhoneNumber,
    #[error("Address is required")]
    MissingAddressLine,
    #[error("City is required")]
    MissingCity,
    #[error("State is required")]
    MissingState,
    #[error("Pincode is required")]
    MissingPincode,
    #[error("Invalid pincode format")]
    InvalidPincode,
}

/// Raw input of the "add new address" form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressForm {
    pub kind: AddressKind,
    pub full_name: String,
    pub phone_number: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub landmark: String,
}

impl AddressForm {
    /// Check every field, reporting all problems at once
    pub fn validate(&self) -> Result<(), Vec<AddressError>> {
        let mut errors = Vec::new();

        if self.full_name.trim().is_empty() {
            errors.push(AddressError::MissingFullName);
        }

        if self.phone_number.trim().is_empty() {
            errors.push(AddressError::MissingPhoneNumber);
        } else if !phone_regex().is_match(&self.phone_number) {
            errors.push(AddressError::InvalidPhoneNumber);
        }

        if self.address_line1.trim().is_empty() {
            errors.push(AddressError::MissingAddressLine);
        }
        if self.city.trim().is_empty() {
            errors.push(AddressError::MissingCity);
        }
        if self.state.trim().is_empty() {
            errors.push(AddressError::MissingState);
        }

        if self.pincode.trim().is_empty() {
            errors.push(AddressError::MissingPincode);
        } else if !pincode_regex().is_match(&self.pincode) {
            errors.push(AddressError::InvalidPincode);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// "line1, [line2, ]city, state pincode"
    pub fn full_address(&self) -> String {
        let line2 = if self.address_line2.is_empty() {
            String::new()
        } else {
            format!("{}, ", self.address_line2)
        };
        format!(
            "{}, {}{}, {} {}",
            self.address_line1, line2, self.city, self.state, self.pincode
        )
    }

    /// Validate and turn the form into a delivery address
    pub fn into_address(self) -> Result<DeliveryAddress, Vec<AddressError>> {
        self.validate()?;
        Ok(DeliveryAddress {
            kind: self.kind,
            full_address: self.full_address(),
            label: self.full_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> AddressForm {
        AddressForm {
            kind: AddressKind::Other,
            full_name: "Jane Roe".to_string(),
            phone_number: "+1 (555) 123-4567".to_string(),
            address_line1: "789 Pine Rd".to_string(),
            address_line2: String::new(),
            city: "Boston".to_string(),
            state: "MA".to_string(),
            pincode: "02101".to_string(),
            landmark: String::new(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = AddressForm::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                AddressError::MissingFullName,
                AddressError::MissingPhoneNumber,
                AddressError::MissingAddressLine,
                AddressError::MissingCity,
                AddressError::MissingState,
                AddressError::MissingPincode,
            ]
        );
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let form = AddressForm {
            city: "   ".to_string(),
            ..valid_form()
        };
        assert_eq!(form.validate(), Err(vec![AddressError::MissingCity]));
    }

    #[test]
    fn test_pincode_format() {
        for ok in ["10001", "10001-1234"] {
            let form = AddressForm {
                pincode: ok.to_string(),
                ..valid_form()
            };
            assert!(form.validate().is_ok(), "{} should be accepted", ok);
        }
        for bad in ["1000", "ABCDE", "10001-12", "100011"] {
            let form = AddressForm {
                pincode: bad.to_string(),
                ..valid_form()
            };
            assert_eq!(form.validate(), Err(vec![AddressError::InvalidPincode]));
        }
    }

    #[test]
    fn test_phone_format() {
        let short = AddressForm {
            phone_number: "555-1234".to_string(),
            ..valid_form()
        };
        assert_eq!(short.validate(), Err(vec![AddressError::InvalidPhoneNumber]));

        let letters = AddressForm {
            phone_number: "call me maybe".to_string(),
            ..valid_form()
        };
        assert_eq!(letters.validate(), Err(vec![AddressError::InvalidPhoneNumber]));

        let plain = AddressForm {
            phone_number: "5551234567".to_string(),
            ..valid_form()
        };
        assert!(plain.validate().is_ok());
    }

    #[test]
    fn test_full_address_with_and_without_line2() {
        let form = valid_form();
        assert_eq!(form.full_address(), "789 Pine Rd, Boston, MA 02101");

        let form = AddressForm {
            address_line2: "Unit 5".to_string(),
            ..valid_form()
        };
        assert_eq!(form.full_address(), "789 Pine Rd, Unit 5, Boston, MA 02101");
    }

    #[test]
    fn test_into_address() {
        let address = valid_form().into_address().unwrap();
        assert_eq!(address.kind, AddressKind::Other);
        assert_eq!(address.label, "Jane Roe");
        assert_eq!(address.full_address, "789 Pine Rd, Boston, MA 02101");

        assert!(AddressForm::default().into_address().is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(AddressError::InvalidPincode.to_string(), "Invalid pincode format");
        assert_eq!(AddressError::MissingCity.to_string(), "City is required");
    }

    #[test]
    fn test_saved_addresses() {
        let saved = saved_addresses();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].label, "Home");
        assert_eq!(saved[1].kind, AddressKind::Work);
    }
}
