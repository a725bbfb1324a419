use std::collections::BTreeSet;

use crate::model::Meal;

/// Collects the distinct, non-empty area values present in `meals`.
///
/// The ordered set gives the presentation layer a stable chip order
/// regardless of how the endpoint ordered the results.
pub fn extract_areas(meals: &[Meal]) -> BTreeSet<String> {
    meals
        .iter()
        .filter_map(|meal| meal.area())
        .map(str::to_string)
        .collect()
}

/// Returns the meals whose area is a member of `filters`, preserving the
/// original relative order.
///
/// An empty filter set means "no filter applied" and returns all meals.
/// Matching is case-sensitive string equality with no normalization.
pub fn apply_filters(meals: &[Meal], filters: &BTreeSet<String>) -> Vec<Meal> {
    if filters.is_empty() {
        return meals.to_vec();
    }

    meals
        .iter()
        .filter(|meal| meal.area().is_some_and(|area| filters.contains(area)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(name: &str, area: Option<&str>) -> Meal {
        Meal {
            name: Some(name.to_string()),
            area: area.map(str::to_string),
            ..Default::default()
        }
    }

    fn sample_meals() -> Vec<Meal> {
        vec![
            meal("Chicken Fry", Some("Indian")),
            meal("Tacos", Some("Mexican")),
            meal("Pad Thai", Some("Thai")),
            meal("Mystery Stew", None),
        ]
    }

    #[test]
    fn test_empty_filter_set_is_identity() {
        let meals = sample_meals();
        let filtered = apply_filters(&meals, &BTreeSet::new());
        assert_eq!(filtered, meals);
    }

    #[test]
    fn test_filters_preserve_relative_order() {
        let meals = sample_meals();
        let filters: BTreeSet<String> =
            ["Indian".to_string(), "Thai".to_string()].into_iter().collect();

        let filtered = apply_filters(&meals, &filters);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name.as_deref(), Some("Chicken Fry"));
        assert_eq!(filtered[1].name.as_deref(), Some("Pad Thai"));
        assert!(filtered.iter().all(|m| filters.contains(m.area().unwrap())));
    }

    #[test]
    fn test_filters_are_case_sensitive() {
        let meals = sample_meals();
        let filters: BTreeSet<String> = ["indian".to_string()].into_iter().collect();
        assert!(apply_filters(&meals, &filters).is_empty());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let meals = sample_meals();
        let filters: BTreeSet<String> = ["Mexican".to_string()].into_iter().collect();

        let once = apply_filters(&meals, &filters);
        let twice = apply_filters(&once, &filters);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_meal_without_area_never_matches() {
        let meals = sample_meals();
        let filters = extract_areas(&meals);

        let filtered = apply_filters(&meals, &filters);
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|m| m.area().is_some()));
    }

    #[test]
    fn test_extract_areas_distinct_and_non_empty() {
        let mut meals = sample_meals();
        meals.push(meal("Biryani", Some("Indian")));
        meals.push(meal("Plain Rice", Some("")));

        let areas = extract_areas(&meals);
        let expected: BTreeSet<String> = ["Indian", "Mexican", "Thai"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(areas, expected);
    }

    #[test]
    fn test_extract_areas_empty_input() {
        assert!(extract_areas(&[]).is_empty());
    }
}
