//! # Ingredient Categorizer
//!
//! Maps a free-text ingredient name to a grocery-store [`Category`].
//!
//! The name is lower-cased and checked in three passes:
//!
//! 1. **Overrides**: the word "frozen" means Frozen; "canned" or "jarred"
//!    means Pantry
//! 2. **Keywords**: the longest keyword contained anywhere in the name wins;
//!    on equal length the first one seen (category order, then list order)
//!    is kept
//! 3. **Modifiers**: processed forms such as "powder" or "dried" fall back
//!    to Pantry
//!
//! Anything else is [`Category::Other`].
//!
//! ```rust
//! use groceries::categorizer::categorize_ingredient;
//! use groceries::ingredient_model::Category;
//!
//! assert_eq!(categorize_ingredient("Garlic powder"), Category::Pantry);
//! assert_eq!(categorize_ingredient("garlic"), Category::Produce);
//! assert_eq!(categorize_ingredient("frozen peas"), Category::Frozen);
//! ```

use crate::ingredient_model::Category;
use log::{debug, trace};

const PRODUCE_KEYWORDS: &[&str] = &[
    // Fruits
    "apple", "banana", "orange", "lemon", "lime", "grapefruit", "grape", "strawberr",
    "blueberr", "raspberr", "blackberr", "cranberr", "cherr", "peach", "pear", "plum",
    "apricot", "mango", "pineapple", "kiwi", "papaya", "pomegranate", "watermelon",
    "cantaloupe", "melon", "avocado",
    // Vegetables
    "tomato", "potato", "sweet potato", "onion", "green onion", "scallion", "shallot",
    "garlic", "leek", "carrot", "celery", "cucumber", "zucchini", "squash", "pumpkin",
    "eggplant", "bell pepper", "jalapeno", "jalapeño", "lettuce", "romaine", "spinach",
    "kale", "arugula", "cabbage", "broccoli", "cauliflower", "brussels sprout", "asparagus",
    "green bean", "peas", "corn", "mushroom", "beet", "radish", "turnip", "parsnip", "fennel",
    "artichoke", "okra", "bok choy", "bean sprout",
    // Fresh herbs and aromatics
    "ginger", "cilantro", "parsley", "basil", "mint", "thyme", "rosemary", "dill", "sage",
    "chives", "lemongrass",
];

const DAIRY_KEYWORDS: &[&str] = &[
    "milk", "buttermilk", "butter", "cream", "heavy cream", "sour cream", "whipping cream",
    "half and half", "half-and-half", "cheese", "cream cheese", "cottage cheese", "cheddar",
    "mozzarella", "parmesan", "ricotta", "feta", "gruyere", "brie", "yogurt", "yoghurt",
    "egg", "ghee", "creme fraiche",
];

const MEAT_SEAFOOD_KEYWORDS: &[&str] = &[
    "chicken", "beef", "ground beef", "steak", "brisket", "pork", "pork chop", "bacon",
    "sausage", "chorizo", "prosciutto", "pancetta", "salami", "pepperoni", "turkey",
    "ground turkey", "lamb", "veal", "duck", "meatball", "fish", "salmon", "tuna", "cod",
    "tilapia", "halibut", "trout", "shrimp", "prawn", "crab", "lobster", "scallop", "clam",
    "mussel", "oyster", "anchov", "sardine",
];

const PANTRY_KEYWORDS: &[&str] = &[
    // Baking
    "flour", "sugar", "brown sugar", "powdered sugar", "baking soda", "baking powder",
    "yeast", "cornstarch", "cornmeal", "cocoa", "chocolate", "chocolate chips",
    "vanilla extract", "cream of tartar", "molasses",
    // Oils, vinegars and condiments
    "oil", "olive oil", "vegetable oil", "sesame oil", "vinegar", "soy sauce", "hot sauce",
    "worcestershire sauce", "fish sauce", "ketchup", "mustard", "mayonnaise", "honey",
    "maple syrup", "syrup", "jam", "peanut butter",
    // Grains, pasta and legumes
    "rice", "pasta", "spaghetti", "penne", "macaroni", "noodle", "oats", "quinoa", "couscous",
    "lentil", "chickpea", "black beans", "kidney beans", "beans", "breadcrumbs",
    "bread crumbs", "panko", "cereal", "crackers",
    // Stocks and sauces
    "broth", "stock", "chicken broth", "chicken stock", "beef broth", "vegetable broth",
    "tomato paste", "tomato sauce", "coconut milk",
    // Nuts and dried fruit
    "almond", "walnut", "pecan", "cashew", "peanut", "pistachio", "raisin", "sesame seeds",
    // Spices and seasonings
    "salt", "black pepper", "pepper", "peppercorn", "cinnamon", "cumin", "paprika", "nutmeg",
    "oregano", "chili powder", "garlic powder", "onion powder", "garlic salt",
    "ground ginger", "curry", "bay leaves", "red pepper flakes", "allspice", "cayenne",
];

const FROZEN_KEYWORDS: &[&str] = &[
    "ice cream", "sorbet", "gelato", "popsicle", "ice cubes", "tater tots", "hash browns",
    "puff pastry", "phyllo", "edamame",
];

const BAKERY_KEYWORDS: &[&str] = &[
    "bread", "baguette", "bagel", "buns", "dinner rolls", "croissant", "muffin",
    "english muffin", "tortilla", "pita", "naan", "sourdough", "brioche", "ciabatta",
    "pie crust", "donut", "doughnut",
];

/// Keyword lists in category order; Other has none
const CATEGORY_KEYWORDS: [(Category, &[&str]); 6] = [
    (Category::Produce, PRODUCE_KEYWORDS),
    (Category::Dairy, DAIRY_KEYWORDS),
    (Category::MeatSeafood, MEAT_SEAFOOD_KEYWORDS),
    (Category::Pantry, PANTRY_KEYWORDS),
    (Category::Frozen, FROZEN_KEYWORDS),
    (Category::Bakery, BAKERY_KEYWORDS),
];

/// Substrings marking a processed (shelf-stable) form of an ingredient
const PROCESSING_MODIFIERS: [&str; 8] = [
    "powder",
    "dried",
    "ground",
    "flakes",
    "extract",
    "seasoning",
    "granulated",
    "granules",
];

/// Categorize an ingredient name
///
/// Total and deterministic: every input yields exactly one category.
pub fn categorize_ingredient(name: &str) -> Category {
    let normalized = name.trim().to_lowercase();

    if let Some(category) = override_category(&normalized) {
        trace!("Override category {} for '{}'", category, name);
        return category;
    }

    if let Some((category, keyword)) = longest_keyword_match(&normalized) {
        debug!("Categorized '{}' as {} via keyword '{}'", name, category, keyword);
        return category;
    }

    if PROCESSING_MODIFIERS
        .iter()
        .any(|modifier| normalized.contains(modifier))
    {
        debug!("Categorized '{}' as Pantry via processing modifier", name);
        return Category::Pantry;
    }

    trace!("No category match for '{}'", name);
    Category::Other
}

/// The category and keyword that decide the keyword pass, if any matches
pub fn best_keyword_match(name: &str) -> Option<(Category, &'static str)> {
    longest_keyword_match(&name.trim().to_lowercase())
}

fn override_category(normalized: &str) -> Option<Category> {
    let words: Vec<&str> = normalized.split_whitespace().collect();

    if words.contains(&"frozen") {
        return Some(Category::Frozen);
    }
    if words.iter().any(|word| *word == "canned" || *word == "jarred") {
        return Some(Category::Pantry);
    }
    None
}

fn longest_keyword_match(normalized: &str) -> Option<(Category, &'static str)> {
    let mut best: Option<(Category, &'static str)> = None;

    for (category, keywords) in CATEGORY_KEYWORDS {
        for &keyword in keywords {
            if !normalized.contains(keyword) {
                continue;
            }
            // Length in characters, so "jalapeño" counts as eight
            let length = keyword.chars().count();
            let longer = best.map_or(true, |(_, current)| length > current.chars().count());
            if longer {
                best = Some((category, keyword));
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_beat_keywords() {
        assert_eq!(categorize_ingredient("frozen peas"), Category::Frozen);
        assert_eq!(categorize_ingredient("Frozen Chicken Breasts"), Category::Frozen);
        assert_eq!(categorize_ingredient("canned tomatoes"), Category::Pantry);
        assert_eq!(categorize_ingredient("jarred roasted peppers"), Category::Pantry);
    }

    #[test]
    fn test_override_needs_whole_word() {
        // "unfrozen" is not the word "frozen"
        assert_eq!(categorize_ingredient("unfrozen shrimp"), Category::MeatSeafood);
    }

    #[test]
    fn test_longest_keyword_wins() {
        assert_eq!(categorize_ingredient("garlic powder"), Category::Pantry);
        assert_eq!(categorize_ingredient("garlic"), Category::Produce);
        assert_eq!(categorize_ingredient("peanut butter"), Category::Pantry);
        assert_eq!(categorize_ingredient("eggplant"), Category::Produce);
        assert_eq!(categorize_ingredient("ice cream"), Category::Frozen);
        assert_eq!(categorize_ingredient("chicken broth"), Category::Pantry);
        assert_eq!(categorize_ingredient("bell pepper"), Category::Produce);
    }

    #[test]
    fn test_equal_length_keeps_first_seen() {
        // "squash" (Produce) and "butter" (Dairy) are both six letters
        assert_eq!(
            best_keyword_match("butternut squash"),
            Some((Category::Produce, "squash"))
        );
    }

    #[test]
    fn test_keyword_length_counts_characters() {
        // "pepperoni" has nine letters, "jalapeño" eight (but nine bytes)
        assert_eq!(
            best_keyword_match("jalapeño pepperoni pizza"),
            Some((Category::MeatSeafood, "pepperoni"))
        );
    }

    #[test]
    fn test_modifier_fallback() {
        assert_eq!(categorize_ingredient("turmeric extract"), Category::Pantry);
        assert_eq!(categorize_ingredient("dried porcini"), Category::Pantry);
        assert_eq!(categorize_ingredient("ranch seasoning"), Category::Pantry);
    }

    #[test]
    fn test_unknown_is_other() {
        assert_eq!(categorize_ingredient("kombucha"), Category::Other);
        assert_eq!(categorize_ingredient(""), Category::Other);
        assert_eq!(categorize_ingredient("   "), Category::Other);
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(categorize_ingredient("  MOZZARELLA  "), Category::Dairy);
        assert_eq!(best_keyword_match("Ground Beef"), Some((Category::MeatSeafood, "ground beef")));
    }
}
