use serde::Deserialize;

/// A single recipe record as returned by TheMealDB search endpoint.
///
/// Every field is optional: the upstream API omits or nulls fields freely,
/// and absence is not an error. Field names follow the API's `str*` naming.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Meal {
    #[serde(rename = "strMeal")]
    pub name: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube")]
    pub youtube: Option<String>,

    #[serde(rename = "strIngredient1")]
    pub ingredient1: Option<String>,
    #[serde(rename = "strIngredient2")]
    pub ingredient2: Option<String>,
    #[serde(rename = "strIngredient3")]
    pub ingredient3: Option<String>,
    #[serde(rename = "strIngredient4")]
    pub ingredient4: Option<String>,
    #[serde(rename = "strIngredient5")]
    pub ingredient5: Option<String>,
    #[serde(rename = "strIngredient6")]
    pub ingredient6: Option<String>,
    #[serde(rename = "strIngredient7")]
    pub ingredient7: Option<String>,
    #[serde(rename = "strIngredient8")]
    pub ingredient8: Option<String>,
    #[serde(rename = "strIngredient9")]
    pub ingredient9: Option<String>,
    #[serde(rename = "strIngredient10")]
    pub ingredient10: Option<String>,

    #[serde(rename = "strMeasure1")]
    pub measure1: Option<String>,
    #[serde(rename = "strMeasure2")]
    pub measure2: Option<String>,
    #[serde(rename = "strMeasure3")]
    pub measure3: Option<String>,
    #[serde(rename = "strMeasure4")]
    pub measure4: Option<String>,
    #[serde(rename = "strMeasure5")]
    pub measure5: Option<String>,
    #[serde(rename = "strMeasure6")]
    pub measure6: Option<String>,
    #[serde(rename = "strMeasure7")]
    pub measure7: Option<String>,
    #[serde(rename = "strMeasure8")]
    pub measure8: Option<String>,
    #[serde(rename = "strMeasure9")]
    pub measure9: Option<String>,
    #[serde(rename = "strMeasure10")]
    pub measure10: Option<String>,
}

impl Meal {
    /// The cuisine area, if present and non-empty.
    pub fn area(&self) -> Option<&str> {
        self.area.as_deref().filter(|a| !a.is_empty())
    }

    /// Pairs the ten (ingredient, measure) slots and renders the entries
    /// where both halves are present and non-empty, in slot order.
    pub fn ingredient_lines(&self) -> Vec<String> {
        let ingredients = [
            &self.ingredient1,
            &self.ingredient2,
            &self.ingredient3,
            &self.ingredient4,
            &self.ingredient5,
            &self.ingredient6,
            &self.ingredient7,
            &self.ingredient8,
            &self.ingredient9,
            &self.ingredient10,
        ];
        let measures = [
            &self.measure1,
            &self.measure2,
            &self.measure3,
            &self.measure4,
            &self.measure5,
            &self.measure6,
            &self.measure7,
            &self.measure8,
            &self.measure9,
            &self.measure10,
        ];

        ingredients
            .iter()
            .zip(measures.iter())
            .filter_map(|(ingredient, measure)| match (ingredient, measure) {
                (Some(i), Some(m)) if !i.is_empty() && !m.is_empty() => {
                    Some(format!("{} of {}", m, i))
                }
                _ => None,
            })
            .collect()
    }

    /// All ingredient lines joined with newlines, ready for display.
    pub fn ingredient_summary(&self) -> String {
        self.ingredient_lines().join("\n")
    }
}

/// Response envelope for the search endpoint: `{ "meals": [...] | null }`.
///
/// `null` means "no match" and is a normal zero-result outcome.
#[derive(Debug, Deserialize)]
pub struct MealResponse {
    pub meals: Option<Vec<Meal>>,
}

impl MealResponse {
    /// Unwraps the envelope, treating a `null` meal list as empty.
    pub fn into_meals(self) -> Vec<Meal> {
        self.meals.unwrap_or_default()
    }
}
