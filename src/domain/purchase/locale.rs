//! Notification language.

use serde::{Deserialize, Serialize};

use super::event_type::PurchaseEventType;

/// Language the notification text is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// Localized fragments of a notification message.
pub(crate) struct Labels {
    pub price: &'static str,
    pub country: &'static str,
    pub product: &'static str,
    pub renewals: &'static str,
}

impl Locale {
    /// Header icon and verb phrase for a supported event type.
    ///
    /// Returns `None` for event types that never produce a notification.
    pub(crate) fn header(&self, event_type: &PurchaseEventType) -> Option<(&'static str, &'static str)> {
        let header = match (self, event_type) {
            (Locale::En, PurchaseEventType::InitialPurchase) => ("💵", "Purchase completed in"),
            (Locale::En, PurchaseEventType::NonRenewingPurchase) => {
                ("💵", "Non-renewing purchase completed in")
            }
            (Locale::En, PurchaseEventType::Renewal) => ("🔁", "Subscription renewed in"),
            (Locale::En, PurchaseEventType::Cancellation) => ("✖️", "Subscription cancelled in"),
            (Locale::Ru, PurchaseEventType::InitialPurchase) => ("💵", "Совершена покупка в"),
            (Locale::Ru, PurchaseEventType::NonRenewingPurchase) => {
                ("💵", "Совершена разовая покупка в")
            }
            (Locale::Ru, PurchaseEventType::Renewal) => ("🔁", "Подписка продлена в"),
            (Locale::Ru, PurchaseEventType::Cancellation) => {
                ("✖️", "Совершена отмена подписки в")
            }
            (_, PurchaseEventType::Other(_)) => return None,
        };
        Some(header)
    }

    pub(crate) fn labels(&self) -> Labels {
        match self {
            Locale::En => Labels {
                price: "Price",
                country: "Country",
                product: "Product",
                renewals: "Renewals",
            },
            Locale::Ru => Labels {
                price: "Стоимость",
                country: "Страна",
                product: "Продукт",
                renewals: "Кол-во продлений",
            },
        }
    }
}
