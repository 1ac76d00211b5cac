use crate::domain::model::{Availability, InventoryLevel, MatchResult, ProductInventory};
use crate::utils::error::{CheckError, Result};

/// 比對用的郵遞區號前綴長度
pub const PREFIX_LEN: usize = 3;

/// Leading `PREFIX_LEN` characters of the pincode, or the whole pincode
/// when it is shorter.
pub fn postal_prefix(pincode: &str) -> &str {
    match pincode.char_indices().nth(PREFIX_LEN) {
        Some((end, _)) => &pincode[..end],
        None => pincode,
    }
}

/// First level, in upstream order, whose postal code starts with the
/// pincode prefix. A level without a postal code never matches.
pub fn find_first_match<'a>(
    levels: &'a [InventoryLevel],
    pincode: &str,
) -> Option<&'a InventoryLevel> {
    let prefix = postal_prefix(pincode);
    levels.iter().find(|level| {
        level
            .location
            .address
            .postal_code
            .as_deref()
            .is_some_and(|code| code.starts_with(prefix))
    })
}

/// Only the first variant's levels are consulted.
pub fn match_inventory(inventory: &ProductInventory, pincode: &str) -> Result<Availability> {
    let first_variant = inventory
        .first_variant
        .as_ref()
        .ok_or_else(|| CheckError::missing_field("product.variants.edges[0]"))?;

    tracing::debug!(
        "Scanning {} inventory levels of '{}' (variant 1 of {}) for prefix '{}'",
        first_variant.levels.len(),
        inventory.title,
        inventory.variant_count,
        postal_prefix(pincode)
    );

    Ok(match find_first_match(&first_variant.levels, pincode) {
        Some(level) => Availability::Matched(MatchResult::from(level)),
        None => Availability::NoMatch,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Address, Location, VariantInventory};
    use crate::utils::error::ErrorKind;

    fn level(name: &str, city: &str, postal_code: &str, available: i64) -> InventoryLevel {
        InventoryLevel {
            available: Some(available),
            location: Location {
                name: name.to_string(),
                address: Address {
                    city: Some(city.to_string()),
                    postal_code: Some(postal_code.to_string()),
                },
            },
        }
    }

    fn inventory(levels: Option<Vec<InventoryLevel>>) -> ProductInventory {
        ProductInventory {
            title: "Blue Mug".to_string(),
            variant_count: usize::from(levels.is_some()),
            first_variant: levels.map(|levels| VariantInventory { levels }),
        }
    }

    #[test]
    fn test_postal_prefix() {
        assert_eq!(postal_prefix("560001"), "560");
        assert_eq!(postal_prefix("560"), "560");
        assert_eq!(postal_prefix("12"), "12");
        assert_eq!(postal_prefix(""), "");
        // 以字元而非位元組計算
        assert_eq!(postal_prefix("ÅÄÖ12"), "ÅÄÖ");
    }

    #[test]
    fn test_first_match_wins_over_later_matches() {
        let levels = vec![
            level("Delhi", "New Delhi", "110001", 3),
            level("Koramangala", "Bengaluru", "560034", 5),
            level("Whitefield", "Bengaluru", "560066", 40),
        ];

        let matched = find_first_match(&levels, "560001").unwrap();
        assert_eq!(matched.location.name, "Koramangala");
    }

    #[test]
    fn test_no_match() {
        let levels = vec![level("Delhi", "New Delhi", "110001", 3)];
        assert!(find_first_match(&levels, "560001").is_none());
        assert!(find_first_match(&[], "560001").is_none());
    }

    #[test]
    fn test_short_pincode_uses_available_characters() {
        let levels = vec![
            level("Mumbai", "Mumbai", "400001", 1),
            level("Chennai", "Chennai", "120045", 2),
        ];
        let matched = find_first_match(&levels, "12").unwrap();
        assert_eq!(matched.location.name, "Chennai");
    }

    #[test]
    fn test_short_postal_code_does_not_match_longer_prefix() {
        let levels = vec![level("Tiny", "Nowhere", "56", 1)];
        assert!(find_first_match(&levels, "560001").is_none());
    }

    #[test]
    fn test_null_postal_code_never_matches() {
        let mut blank = level("Unaddressed", "Nowhere", "", 9);
        blank.location.address.postal_code = None;
        let levels = vec![blank, level("Koramangala", "Bengaluru", "560034", 5)];

        let matched = find_first_match(&levels, "560001").unwrap();
        assert_eq!(matched.location.name, "Koramangala");

        // 空前綴也不會讓缺少郵遞區號的地點成立
        assert!(find_first_match(&levels[..1], "").is_none());
    }

    #[test]
    fn test_match_builds_result() {
        let inventory = inventory(Some(vec![level("Koramangala", "Bengaluru", "560034", 5)]));

        match match_inventory(&inventory, "560001").unwrap() {
            Availability::Matched(result) => {
                assert_eq!(result.warehouse_name, "Koramangala");
                assert_eq!(result.available, Some(5));
                assert_eq!(result.city.as_deref(), Some("Bengaluru"));
                assert_eq!(result.estimated_delivery, "2-3 days");
            }
            Availability::NoMatch => panic!("expected a match"),
        }
    }

    #[test]
    fn test_no_variants_is_unexpected() {
        let err = match_inventory(&inventory(None), "560001").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
    }
}
