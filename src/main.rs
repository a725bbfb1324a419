use std::env;

use mealdb_search::{Meal, MealBrowser, MealSearchClient, SearchConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // First argument is the keyword; any further arguments are area filters.
    let args: Vec<String> = env::args().skip(1).collect();
    let keyword = args.first().map(String::as_str).filter(|k| !k.is_empty());

    let config = SearchConfig::load()?;
    let client = MealSearchClient::from_config(&config)?;

    let mut browser = MealBrowser::new(client);
    browser.search(keyword).await?;

    for area in args.iter().skip(1) {
        browser.toggle_filter(area);
    }

    match browser.item_count() {
        0 => println!("No meals found."),
        1 => {
            if let Some(meal) = browser.item(0) {
                print_detail(meal);
            }
        }
        _ => {
            for index in 0..browser.item_count() {
                if let Some(meal) = browser.item(index) {
                    let name = meal.name.as_deref().unwrap_or("(unnamed)");
                    match meal.area() {
                        Some(area) => println!("{} [{}]", name, area),
                        None => println!("{}", name),
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_detail(meal: &Meal) {
    println!("{}", meal.name.as_deref().unwrap_or("(unnamed)"));
    if let Some(area) = meal.area() {
        println!("Cuisine: {}", area);
    }
    let ingredients = meal.ingredient_summary();
    if !ingredients.is_empty() {
        println!("\nIngredients:\n{}", ingredients);
    }
    if let Some(instructions) = &meal.instructions {
        println!("\nInstructions:\n{}", instructions);
    }
    if let Some(youtube) = &meal.youtube {
        println!("\nVideo: {}", youtube);
    }
}
