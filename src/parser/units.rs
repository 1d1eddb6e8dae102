use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Raw unit token to canonical abbreviation. Plural forms, common
/// abbreviations, and selected capitalized spellings are distinct keys.
static UNIT_MAPPING: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Volume - liquid
        ("tablespoon", "tbsp"),
        ("tablespoons", "tbsp"),
        ("tbsp", "tbsp"),
        ("tbs", "tbsp"),
        ("Tbsp", "tbsp"),
        ("teaspoon", "tsp"),
        ("teaspoons", "tsp"),
        ("tsp", "tsp"),
        ("Tsp", "tsp"),
        ("cup", "cup"),
        ("cups", "cup"),
        ("c", "cup"),
        ("Cup", "cup"),
        ("pint", "pt"),
        ("pints", "pt"),
        ("pt", "pt"),
        ("Pint", "pt"),
        ("quart", "qt"),
        ("quarts", "qt"),
        ("qt", "qt"),
        ("Quart", "qt"),
        ("gallon", "gal"),
        ("gallons", "gal"),
        ("gal", "gal"),
        ("Gallon", "gal"),
        ("liter", "L"),
        ("liters", "L"),
        ("litre", "L"),
        ("litres", "L"),
        ("l", "L"),
        ("L", "L"),
        ("milliliter", "mL"),
        ("milliliters", "mL"),
        ("millilitre", "mL"),
        ("millilitres", "mL"),
        ("ml", "mL"),
        ("mL", "mL"),
        ("fluid ounce", "fl oz"),
        ("fluid ounces", "fl oz"),
        ("fl oz", "fl oz"),
        ("floz", "fl oz"),
        // Weight
        ("pound", "lb"),
        ("pounds", "lb"),
        ("lb", "lb"),
        ("lbs", "lb"),
        ("Pound", "lb"),
        ("ounce", "oz"),
        ("ounces", "oz"),
        ("oz", "oz"),
        ("Ounce", "oz"),
        ("gram", "g"),
        ("grams", "g"),
        ("g", "g"),
        ("Gram", "g"),
        ("kilogram", "kg"),
        ("kilograms", "kg"),
        ("kg", "kg"),
        ("Kilogram", "kg"),
        ("milligram", "mg"),
        ("milligrams", "mg"),
        ("mg", "mg"),
        // Count/portions
        ("piece", "piece"),
        ("pieces", "piece"),
        ("pc", "piece"),
        ("pcs", "piece"),
        ("slice", "slice"),
        ("slices", "slice"),
        ("clove", "clove"),
        ("cloves", "clove"),
        ("sprig", "sprig"),
        ("sprigs", "sprig"),
        ("leaf", "leaf"),
        ("leaves", "leaf"),
        ("stalk", "stalk"),
        ("stalks", "stalk"),
        ("head", "head"),
        ("heads", "head"),
        // Size descriptors
        ("small", "small"),
        ("medium", "medium"),
        ("large", "large"),
        ("whole", "whole"),
        ("half", "half"),
        ("quarter", "quarter"),
        // Length
        ("inch", "in"),
        ("inches", "in"),
        ("in", "in"),
        ("\"", "in"),
        ("foot", "ft"),
        ("feet", "ft"),
        ("ft", "ft"),
        ("'", "ft"),
        ("centimeter", "cm"),
        ("centimeters", "cm"),
        ("cm", "cm"),
        ("millimeter", "mm"),
        ("millimeters", "mm"),
        ("mm", "mm"),
    ])
});

/// Normalize a raw unit token to its canonical abbreviation.
///
/// Lookup is exact first, then against the lowercased token. Unrecognized
/// tokens pass through unchanged; a missing or empty token yields the empty
/// string. Normalization is best-effort and never fails.
pub fn normalize_unit(unit: Option<&str>) -> String {
    let raw = match unit {
        Some(u) if !u.is_empty() => u,
        _ => return String::new(),
    };

    if let Some(canonical) = UNIT_MAPPING.get(raw) {
        return (*canonical).to_string();
    }

    if let Some(canonical) = UNIT_MAPPING.get(raw.to_lowercase().as_str()) {
        return (*canonical).to_string();
    }

    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_missing_tokens() {
        assert_eq!(normalize_unit(None), "");
        assert_eq!(normalize_unit(Some("")), "");
    }

    #[test]
    fn test_exact_lookup() {
        assert_eq!(normalize_unit(Some("tablespoons")), "tbsp");
        assert_eq!(normalize_unit(Some("Tbsp")), "tbsp");
        assert_eq!(normalize_unit(Some("c")), "cup");
        assert_eq!(normalize_unit(Some("leaves")), "leaf");
        assert_eq!(normalize_unit(Some("ml")), "mL");
    }

    #[test]
    fn test_lowercase_fallback() {
        // "CUPS" has no exact key but lowercases to "cups"
        assert_eq!(normalize_unit(Some("CUPS")), "cup");
        assert_eq!(normalize_unit(Some("GRAMS")), "g");
    }

    #[test]
    fn test_canonical_forms_are_idempotent() {
        for canonical in ["tbsp", "tsp", "cup", "pt", "qt", "gal", "g", "kg", "oz", "lb", "slice", "medium", "in", "ft"] {
            assert_eq!(normalize_unit(Some(canonical)), canonical);
        }
        // "L" and "mL" are canonical under their own capitalization
        assert_eq!(normalize_unit(Some("L")), "L");
        assert_eq!(normalize_unit(Some("mL")), "mL");
    }

    #[test]
    fn test_unrecognized_tokens_pass_through() {
        assert_eq!(normalize_unit(Some("pinch")), "pinch");
        assert_eq!(normalize_unit(Some("fresh")), "fresh");
        // No exact key and no lowercased key either
        assert_eq!(normalize_unit(Some("Handful")), "Handful");
    }
}
