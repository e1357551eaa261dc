//! Free-text food name → category label.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

pub const UNKNOWN_CATEGORY: &str = "unknown";

/// Food → category lookup table.
pub const FOOD_CATEGORIES: &[(&str, &str)] = &[
    // fruit
    ("apple", "fruit"),
    ("apples", "fruit"),
    ("banana", "fruit"),
    ("bananas", "fruit"),
    ("orange", "fruit"),
    ("oranges", "fruit"),
    ("grape", "fruit"),
    ("grapes", "fruit"),
    ("strawberry", "fruit"),
    ("strawberries", "fruit"),
    ("blueberry", "fruit"),
    ("blueberries", "fruit"),
    ("raspberry", "fruit"),
    ("raspberries", "fruit"),
    ("mango", "fruit"),
    ("mangoes", "fruit"),
    ("pineapple", "fruit"),
    ("pineapples", "fruit"),
    ("watermelon", "fruit"),
    ("watermelons", "fruit"),
    // vegetables
    ("broccoli", "vegetable"),
    ("carrot", "vegetable"),
    ("carrots", "vegetable"),
    ("spinach", "vegetable"),
    ("lettuce", "vegetable"),
    ("tomato", "vegetable"),
    ("tomatoes", "vegetable"),
    ("cucumber", "vegetable"),
    ("cucumbers", "vegetable"),
    ("bell pepper", "vegetable"),
    ("bell peppers", "vegetable"),
    ("onion", "vegetable"),
    ("onions", "vegetable"),
    ("garlic", "vegetable"),
    ("potato", "vegetable_starchy"),
    ("potatoes", "vegetable_starchy"),
    ("sweet potato", "vegetable_starchy"),
    ("sweet potatoes", "vegetable_starchy"),
    // grains
    ("whole wheat bread", "grain_whole"),
    ("white bread", "grain_refined"),
    ("bread", "grain"),
    ("breads", "grain"),
    ("white rice", "grain_refined"),
    ("brown rice", "grain_whole"),
    ("rice", "grain"),
    ("rices", "grain"),
    ("whole wheat pasta", "grain_whole"),
    ("pasta", "grain"),
    ("pastas", "grain"),
    ("oats", "grain_whole"),
    ("quinoa", "grain_whole"),
    ("cereal", "grain"),
    ("cereals", "grain"),
    ("sugary cereal", "sweets"),
    // proteins
    ("chicken", "protein"),
    ("beef", "protein"),
    ("pork", "protein"),
    ("fish", "protein"),
    ("salmon", "protein"),
    ("tuna", "protein"),
    ("egg", "protein"),
    ("eggs", "protein"),
    ("bean", "protein_plant"),
    ("beans", "protein_plant"),
    ("lentil", "protein_plant"),
    ("lentils", "protein_plant"),
    ("tofu", "protein_plant"),
    ("tempeh", "protein_plant"),
    // dairy and alternatives
    ("milk", "dairy"),
    ("cheese", "dairy"),
    ("yogurt", "dairy"),
    ("almond milk", "dairy_alternative"),
    ("soy milk", "dairy_alternative"),
    ("oat milk", "dairy_alternative"),
    // fats
    ("butter", "fat"),
    ("olive oil", "fat"),
    ("avocado", "fat"),
    ("avocados", "fat"),
    ("nut", "fat_healthy"),
    ("nuts", "fat_healthy"),
    ("seed", "fat_healthy"),
    ("seeds", "fat_healthy"),
    // sweets and processed snacks
    ("cake", "sweets"),
    ("cakes", "sweets"),
    ("cookie", "sweets"),
    ("cookies", "sweets"),
    ("ice cream", "sweets"),
    ("chocolate", "sweets"),
    ("candy", "sweets"),
    ("pastry", "sweets"),
    ("pastries", "sweets"),
    ("chips", "snacks_processed"),
    ("soda", "beverage_sugary"),
    // beverages
    ("water", "beverage"),
    ("coffee", "beverage"),
    ("tea", "beverage"),
];

lazy_static! {
    static ref SPELLED_NUMBER_RE: Regex =
        Regex::new(r"(?i)\b(one|two|three|four|five|six|seven|eight|nine|ten)\b").unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    static ref DEFAULT_CATEGORIZER: FoodCategorizer = FoodCategorizer::new(FOOD_CATEGORIES);
}

struct KeyMatcher {
    pattern: Regex,
    category: &'static str,
}

/// Table-driven categorizer. Whole-word key matches are tried longest key
/// first, then per-word singular/plural lookups.
pub struct FoodCategorizer {
    matchers: Vec<KeyMatcher>,
    lookup: HashMap<&'static str, &'static str>,
}

impl FoodCategorizer {
    pub fn new(table: &[(&'static str, &'static str)]) -> Self {
        let mut entries = table.to_vec();
        // stable: equal-length keys keep table order
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        let matchers = entries
            .iter()
            .filter_map(|(key, category)| {
                RegexBuilder::new(&format!(r"\b{}\b", regex::escape(key)))
                    .case_insensitive(true)
                    .build()
                    .ok()
                    .map(|pattern| KeyMatcher {
                        pattern,
                        category: *category,
                    })
            })
            .collect();

        Self {
            matchers,
            lookup: table.iter().copied().collect(),
        }
    }

    pub fn categorize(&self, food_name: &str) -> &'static str {
        let normalized = normalize(food_name);
        if normalized.is_empty() {
            return UNKNOWN_CATEGORY;
        }

        if let Some(m) = self.matchers.iter().find(|m| m.pattern.is_match(&normalized)) {
            return m.category;
        }

        normalized
            .split(' ')
            .find_map(|word| self.lookup_word_forms(word))
            .unwrap_or(UNKNOWN_CATEGORY)
    }

    fn lookup_word_forms(&self, word: &str) -> Option<&'static str> {
        if word.is_empty() {
            return None;
        }

        let mut forms = vec![word.to_string()];
        if let Some(stem) = word.strip_suffix("es") {
            forms.push(stem.to_string());
        }
        if let Some(stem) = word.strip_suffix('s') {
            forms.push(stem.to_string());
        }
        forms.push(format!("{word}s"));
        forms.push(format!("{word}es"));

        forms
            .iter()
            .find_map(|form| self.lookup.get(form.as_str()).copied())
    }
}

/// Lower-cases and strips digits, spelled-out numbers, punctuation and extra whitespace.
fn normalize(raw: &str) -> String {
    let without_digits: String = raw.chars().filter(|c| !c.is_ascii_digit()).collect();
    let without_numbers = SPELLED_NUMBER_RE.replace_all(&without_digits, "");
    let without_punctuation: String = without_numbers
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    WHITESPACE_RE
        .replace_all(without_punctuation.trim(), " ")
        .to_lowercase()
}

/// Categorizes with the built-in table.
pub fn categorize(food_name: &str) -> &'static str {
    DEFAULT_CATEGORIZER.categorize(food_name)
}

/// Like [`categorize`], with a missing name mapping to `"unknown"`.
pub fn categorize_opt(food_name: Option<&str>) -> &'static str {
    food_name.map_or(UNKNOWN_CATEGORY, categorize)
}

#[cfg(test)]
mod categorizer_tests {
    use super::*;

    #[test]
    fn known_foods() {
        assert_eq!(categorize("apple"), "fruit");
        assert_eq!(categorize("Chicken Breast"), "protein");
        assert_eq!(categorize("sugary cereal"), "sweets");
        assert_eq!(categorize("soda"), "beverage_sugary");
        assert_eq!(categorize("bag of chips"), "snacks_processed");
    }

    #[test]
    fn longer_keys_win() {
        assert_eq!(categorize("white bread"), "grain_refined");
        assert_eq!(categorize("whole wheat bread"), "grain_whole");
        assert_eq!(categorize("bread"), "grain");
        assert_eq!(categorize("white rice"), "grain_refined");
        assert_eq!(categorize("sweet potato fries"), "vegetable_starchy");
        assert_eq!(categorize("oat milk latte"), "dairy_alternative");
    }

    #[test]
    fn no_substring_leakage() {
        assert_eq!(categorize("breadfruit"), UNKNOWN_CATEGORY);
        assert_eq!(categorize("watermelon"), "fruit");
        assert_eq!(categorize("pineapple"), "fruit");
    }

    #[test]
    fn case_and_punctuation_insensitive() {
        assert_eq!(categorize("APPLE"), "fruit");
        assert_eq!(categorize(" apple! "), "fruit");
        assert_eq!(categorize("WhItE BrEaD"), "grain_refined");
        assert_eq!(categorize("Grandma's cookies!!"), "sweets");
    }

    #[test]
    fn quantities_are_ignored() {
        assert_eq!(categorize("2 apples"), "fruit");
        assert_eq!(categorize("three bananas"), "fruit");
        assert_eq!(categorize("Two slices of white bread"), "grain_refined");
    }

    #[test]
    fn plural_and_singular_fallback() {
        assert_eq!(categorize("mangos"), "fruit");
        assert_eq!(categorize("cheeses"), "dairy");
        assert_eq!(categorize("grilled tunas"), "protein");
    }

    #[test]
    fn unknown_inputs() {
        assert_eq!(categorize(""), UNKNOWN_CATEGORY);
        assert_eq!(categorize("   "), UNKNOWN_CATEGORY);
        assert_eq!(categorize("42"), UNKNOWN_CATEGORY);
        assert_eq!(categorize("ten"), UNKNOWN_CATEGORY);
        assert_eq!(categorize("zyxw"), UNKNOWN_CATEGORY);
        assert_eq!(categorize("some new food"), UNKNOWN_CATEGORY);
        assert_eq!(categorize_opt(None), UNKNOWN_CATEGORY);
        assert_eq!(categorize_opt(Some("apple pie")), "fruit");
    }

    #[test]
    fn custom_table() {
        let table: &[(&str, &str)] = &[("kimchi", "vegetable"), ("kimchi fried rice", "grain")];
        let categorizer = FoodCategorizer::new(table);
        assert_eq!(categorizer.categorize("Kimchi Fried Rice"), "grain");
        assert_eq!(categorizer.categorize("kimchi"), "vegetable");
        assert_eq!(categorizer.categorize("rice"), UNKNOWN_CATEGORY);
    }
}
