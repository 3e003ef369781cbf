//! Order enum types and parsers.

use std::fmt;
use std::str::FromStr;

/// Parse error shared by the order choice enums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChoice {
    pub input: String,
}

impl fmt::Display for UnknownChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" is not a valid choice.", self.input)
    }
}

impl std::error::Error for UnknownChoice {}

/// Carrier used to ship an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingMethod {
    Standard,
    Express,
    Tnt,
    Startrak,
}

impl ShippingMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Express => "express",
            Self::Tnt => "tnt",
            Self::Startrak => "startrak",
        }
    }
}

impl fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShippingMethod {
    type Err = UnknownChoice;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "standard" => Ok(Self::Standard),
            "express" => Ok(Self::Express),
            "tnt" => Ok(Self::Tnt),
            "startrak" => Ok(Self::Startrak),
            _ => Err(UnknownChoice {
                input: value.to_owned(),
            }),
        }
    }
}

/// Order lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownChoice;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(UnknownChoice {
                input: value.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipping_methods_round_trip() {
        for method in [
            ShippingMethod::Standard,
            ShippingMethod::Express,
            ShippingMethod::Tnt,
            ShippingMethod::Startrak,
        ] {
            assert_eq!(method.as_str().parse::<ShippingMethod>(), Ok(method));
        }
    }

    #[test]
    fn statuses_round_trip() {
        for status in [OrderStatus::Pending, OrderStatus::Completed, OrderStatus::Cancelled] {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_choice_spells_out_the_input() {
        let error = "invalid_method".parse::<ShippingMethod>().expect_err("unknown");

        assert_eq!(error.to_string(), "\"invalid_method\" is not a valid choice.");
    }

    #[test]
    fn status_defaults_to_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }
}
