//! A representative 9-ingredient scenario used by the integration tests and
//! the demo binary, grounded on `tests/test_solver.py`'s `_default_ingredients`
//! fixture (same food set and gram bounds; per-100g nutrition values are
//! standard USDA reference figures, not ported from the retrieved source
//! since `food_db.py` itself was not part of the retrieval pack).

use crate::models::{Ingredient, IngredientInput, MacroVector};
use crate::nutrient::MicroKey;
use std::collections::HashMap;

fn ingredient(
    id: u64,
    label: &str,
    calories_kcal: f64,
    protein_g: f64,
    fat_g: f64,
    carbs_g: f64,
    fiber_g: f64,
    category: &str,
    micros: &[(MicroKey, f64)],
) -> Ingredient {
    Ingredient {
        id,
        label: label.to_string(),
        per_100g: MacroVector {
            calories_kcal,
            protein_g,
            fat_g,
            carbs_g,
            fiber_g,
        },
        micros_per_100g: micros.iter().copied().collect::<HashMap<_, _>>(),
        category: category.to_string(),
    }
}

/// The nine-ingredient baseline scenario, with the same gram bounds as the
/// reference test fixture.
pub fn baseline_ingredients() -> Vec<IngredientInput> {
    use MicroKey::*;

    let specs: Vec<(Ingredient, u32, u32)> = vec![
        (
            ingredient(
                1, "White Rice", 130.0, 2.7, 0.3, 28.0, 0.4, "grains",
                &[(IronMg, 0.2), (MagnesiumMg, 12.0), (PotassiumMg, 35.0)],
            ),
            0,
            400,
        ),
        (
            ingredient(
                2, "Broccoli", 34.0, 2.8, 0.4, 7.0, 2.6, "vegetables",
                &[
                    (VitaminCMg, 89.2),
                    (CalciumMg, 47.0),
                    (IronMg, 0.7),
                    (PotassiumMg, 316.0),
                    (FolateMcg, 63.0),
                    (VitaminKMcg, 101.6),
                ],
            ),
            200,
            400,
        ),
        (
            ingredient(
                3, "Carrots", 41.0, 0.9, 0.2, 10.0, 2.8, "vegetables",
                &[(VitaminAMcg, 835.0), (PotassiumMg, 320.0), (VitaminCMg, 5.9)],
            ),
            150,
            300,
        ),
        (
            ingredient(
                4, "Zucchini", 17.0, 1.2, 0.3, 3.1, 1.0, "vegetables",
                &[(VitaminCMg, 17.9), (PotassiumMg, 261.0), (MagnesiumMg, 18.0)],
            ),
            250,
            500,
        ),
        (
            ingredient(
                5, "Avocado Oil", 884.0, 0.0, 100.0, 0.0, 0.0, "fats",
                &[(VitaminEMg, 12.0)],
            ),
            0,
            100,
        ),
        (
            ingredient(
                6, "Black Beans", 132.0, 8.9, 0.5, 23.7, 8.7, "legumes",
                &[
                    (IronMg, 2.1),
                    (MagnesiumMg, 70.0),
                    (ZincMg, 1.1),
                    (FolateMcg, 149.0),
                    (PotassiumMg, 355.0),
                ],
            ),
            150,
            400,
        ),
        (
            ingredient(
                7, "Split Peas", 118.0, 8.3, 0.4, 21.1, 8.3, "legumes",
                &[
                    (IronMg, 1.5),
                    (MagnesiumMg, 28.0),
                    (ZincMg, 1.0),
                    (FolateMcg, 65.0),
                ],
            ),
            60,
            150,
        ),
        (
            ingredient(
                8, "80/20 Ground Beef", 254.0, 17.2, 20.0, 0.0, 0.0, "meat",
                &[
                    (IronMg, 2.0),
                    (ZincMg, 4.0),
                    (VitaminB12Mcg, 2.4),
                    (NiacinMg, 4.4),
                    (PhosphorusMg, 158.0),
                ],
            ),
            0,
            1000,
        ),
        (
            ingredient(
                9, "Chicken Thigh", 209.0, 18.6, 14.5, 0.0, 0.0, "meat",
                &[
                    (IronMg, 1.3),
                    (ZincMg, 1.8),
                    (NiacinMg, 5.5),
                    (VitaminB6Mg, 0.3),
                    (PhosphorusMg, 156.0),
                ],
            ),
            0,
            1000,
        ),
    ];

    specs
        .into_iter()
        .map(|(ing, min_g, max_g)| {
            IngredientInput::new(ing, min_g, max_g).expect("fixture bounds are well-formed")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_has_nine_ingredients_with_valid_bounds() {
        let ings = baseline_ingredients();
        assert_eq!(ings.len(), 9);
        for input in &ings {
            assert!(input.min_g <= input.max_g);
        }
    }
}
