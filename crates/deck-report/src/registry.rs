//! Fixed `CardRegistry` utility compiled into every mod.

/// Source file stem for the registry utility.
pub const CARD_REGISTRY_NAME: &str = "CardRegistry";

const CARD_REGISTRY_SOURCE: &str = r#"using System.Collections.Generic;
using UnboundLib.Cards;

public static class CardRegistry
{
    private static readonly Dictionary<System.Type, CardInfo> cards = new Dictionary<System.Type, CardInfo>();

    public static void RegisterCard<T>() where T : CustomCard
    {
        CustomCard.BuildCard<T>(cardInfo => cards[typeof(T)] = cardInfo);
    }

    public static CardInfo GetCard<T>() where T : CustomCard
    {
        CardInfo cardInfo;
        return cards.TryGetValue(typeof(T), out cardInfo) ? cardInfo : null;
    }
}
"#;

pub fn card_registry_source() -> &'static str {
    CARD_REGISTRY_SOURCE
}
