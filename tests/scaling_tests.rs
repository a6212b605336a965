#[cfg(test)]
mod tests {
    use groceries::scaling::{scale_ingredients, scale_quantity, SERVINGS_SENTINEL};

    const COOKIES: &str = "2 cups flour\n1 tsp baking soda\n3 eggs\nsalt to taste";

    #[test]
    fn test_doubling_a_recipe() {
        assert_eq!(
            scale_ingredients("2 cups flour\n1 egg", "4", "2"),
            "4 cup flour\n2 egg"
        );
    }

    #[test]
    fn test_halving_a_recipe() {
        assert_eq!(
            scale_ingredients(COOKIES, "2", "4"),
            "1 cup flour\n1/2 tsp baking soda\n1.5 eggs\nsalt to taste"
        );
    }

    #[test]
    fn test_glyph_quantities_scale() {
        assert_eq!(scale_ingredients("½ cup sugar", "4", "2"), "1 cup sugar");
        assert_eq!(scale_ingredients("¾ cup milk", "2", "1"), "1.5 cup milk");
    }

    #[test]
    fn test_units_are_normalized_in_scaled_lines() {
        assert_eq!(
            scale_ingredients("2 tablespoons butter", "6", "3"),
            "4 tbsp butter"
        );
    }

    #[test]
    fn test_unscaled_inputs_return_the_block_unchanged() {
        for (new, original) in [
            (SERVINGS_SENTINEL, "2"),
            ("4", SERVINGS_SENTINEL),
            ("4", "4"),
            ("4", "4.0"),
            ("a few", "2"),
            ("4", ""),
            ("4", "0"),
        ] {
            assert_eq!(
                scale_ingredients(COOKIES, new, original),
                COOKIES,
                "new '{new}', original '{original}'"
            );
        }
    }

    #[test]
    fn test_non_ascii_digits_are_not_scaled() {
        assert_eq!(
            scale_ingredients("٣ cups flour\n1 cup sugar", "2", "1"),
            "٣ cups flour\n2 cup sugar"
        );
    }

    #[test]
    fn test_blank_lines_are_kept() {
        assert_eq!(
            scale_ingredients("1 cup rice\n\n2 cups water", "2", "1"),
            "2 cup rice\n\n4 cup water"
        );
    }

    #[test]
    fn test_scale_quantity_thirds() {
        assert_eq!(scale_quantity("1", 1.0 / 3.0), "1/3");
        assert_eq!(scale_quantity("2", 1.0 / 3.0), "2/3");
        assert_eq!(scale_quantity("3/4", 2.0), "1.5");
    }
}
