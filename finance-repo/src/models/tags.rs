use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

macro_rules! tag_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $tag:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[serde(rename = $tag)]
                $variant,
            )+
        }

        impl $name {
            pub const TAGS: &'static [&'static str] = &[$($tag),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag,)+
                }
            }

            /// Parses a wire tag, reporting `field` when the tag is not in the declared set.
            pub fn from_tag(field: &'static str, tag: &str) -> Result<Self, ValidationError> {
                match tag {
                    $($tag => Ok($name::$variant),)+
                    _ => Err(ValidationError::InvalidTag {
                        field,
                        value: tag.to_owned(),
                        allowed: Self::TAGS,
                    }),
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

tag_enum!(AccountType {
    Bank => "bank",
    Cash => "cash",
    CreditCard => "credit_card",
    Savings => "savings",
    VirtualWallet => "virtual_wallet",
    Investment => "investment",
    Pension => "pension",
    Other => "other",
});

tag_enum!(CategoryType {
    Income => "income",
    Expense => "expense",
});

tag_enum!(Frequency {
    Daily => "daily",
    Weekly => "weekly",
    Monthly => "monthly",
    Yearly => "yearly",
});

tag_enum!(
    /// Settlement state shared by debts, loans given and installments.
    Status {
        Pending => "pending",
        Paid => "paid",
        Overdue => "overdue",
    }
);

tag_enum!(ReminderType {
    Debt => "debt",
    LoanGiven => "loan_given",
    Subscription => "subscription",
});

impl Default for Status {
    fn default() -> Self {
        Status::Pending
    }
}

/// Parses an optional tag, falling back to `default` when absent.
pub(crate) fn tag_or<T>(
    tag: Option<String>,
    default: T,
    parse: impl FnOnce(&str) -> Result<T, ValidationError>,
) -> Result<T, ValidationError> {
    match tag {
        Some(tag) => parse(&tag),
        None => Ok(default),
    }
}
