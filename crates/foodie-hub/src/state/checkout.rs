//! Checkout State

use crate::checkout::OrderConfirmation;
use crate::domain_models::{status_timeline, DeliveryAddress, PaymentMethod, TimelineStep};

/// The three checkout steps, in order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckoutStep {
    #[default]
    Address,
    Payment,
    Review,
}

impl CheckoutStep {
    pub const ALL: [CheckoutStep; 3] = [Self::Address, Self::Payment, Self::Review];

    /// 1-based step number shown in the progress indicator
    pub fn number(&self) -> u8 {
        match self {
            Self::Address => 1,
            Self::Payment => 2,
            Self::Review => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Address => "Address",
            Self::Payment => "Payment",
            Self::Review => "Review",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Address => Self::Payment,
            Self::Payment | Self::Review => Self::Review,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::Address | Self::Payment => Self::Address,
            Self::Review => Self::Payment,
        }
    }
}

/// Progress through the checkout screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutState {
    pub step: CheckoutStep,
    pub address: Option<DeliveryAddress>,
    pub payment: Option<PaymentMethod>,
    /// Set once the order went through
    pub confirmation: Option<OrderConfirmation>,
}

impl CheckoutState {
    /// Whether `Next` may leave the current step
    pub fn can_advance(&self) -> bool {
        match self.step {
            CheckoutStep::Address => self.address.is_some(),
            CheckoutStep::Payment => self.payment.is_some(),
            CheckoutStep::Review => false,
        }
    }

    /// Ready to place the order
    pub fn is_complete(&self) -> bool {
        self.step == CheckoutStep::Review && self.address.is_some() && self.payment.is_some()
    }

    /// Step indicator: steps up to the current one are completed
    pub fn progress(&self) -> Vec<TimelineStep<CheckoutStep>> {
        status_timeline(&self.step, &CheckoutStep::ALL)
    }
}
