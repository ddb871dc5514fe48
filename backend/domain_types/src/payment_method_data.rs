use hyperswitch_masking::Secret;

/// Card data for the direct flow. Every field stays masked in `Debug` output.
#[derive(Clone, Debug)]
pub struct Card {
    pub card_number: Secret<String>,
    pub card_exp: Secret<String>,
    pub card_cvc: Secret<String>,
    pub card_holder_name: Secret<String>,
}

impl From<api_models::CardInfo> for Card {
    fn from(card: api_models::CardInfo) -> Self {
        Self {
            card_number: card.card_number,
            card_exp: card.expiry_date,
            card_cvc: card.cvv,
            card_holder_name: card.holder_name,
        }
    }
}
