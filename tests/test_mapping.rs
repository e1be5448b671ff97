use pretty_assertions::assert_eq;
use recipe_book::client::types::{RecipeInformation, SearchResult};
use recipe_book::model::{
    Recipe, NO_DESCRIPTION, NO_INGREDIENTS, NO_STEPS, NO_TITLE,
};

#[test]
fn test_map_search_result_all_fields_present() {
    let raw: SearchResult = serde_json::from_str(
        r#"{
            "id": 101,
            "title": "Pasta Carbonara",
            "image": "https://img.example/101.jpg",
            "summary": "Classic Roman pasta.",
            "instructions": "Boil, fry, toss.",
            "ingredients": ["spaghetti", "eggs", "guanciale"]
        }"#,
    )
    .expect("valid search result");

    let recipe = Recipe::from_search_result(&raw);
    assert_eq!(recipe.id, 101);
    assert_eq!(recipe.title, "Pasta Carbonara");
    assert_eq!(recipe.description, "Classic Roman pasta.");
    assert_eq!(recipe.ingredients, "spaghetti, eggs, guanciale");
    assert_eq!(recipe.steps, "Boil, fry, toss.");
    assert_eq!(recipe.image, "https://img.example/101.jpg");
}

#[test]
fn test_map_search_result_all_optional_fields_absent() {
    // Only id and title are guaranteed on the wire
    let raw: SearchResult =
        serde_json::from_str(r#"{"id": 7, "title": "Mystery Dish"}"#).expect("valid search result");

    let recipe = Recipe::from_search_result(&raw);
    assert_eq!(recipe.id, 7);
    assert_eq!(recipe.title, "Mystery Dish");
    assert_eq!(recipe.description, NO_DESCRIPTION);
    assert_eq!(recipe.ingredients, NO_INGREDIENTS);
    assert_eq!(recipe.steps, NO_STEPS);
    assert_eq!(recipe.image, "");
}

#[test]
fn test_map_search_result_null_fields_use_placeholders() {
    let raw: SearchResult = serde_json::from_str(
        r#"{
            "id": 8,
            "title": "Sparse Dish",
            "image": null,
            "summary": null,
            "instructions": null,
            "ingredients": null
        }"#,
    )
    .expect("valid search result");

    let recipe = Recipe::from_search_result(&raw);
    assert_eq!(recipe.description, NO_DESCRIPTION);
    assert_eq!(recipe.ingredients, NO_INGREDIENTS);
    assert_eq!(recipe.steps, NO_STEPS);
    assert_eq!(recipe.image, "");
}

#[test]
fn test_map_information_joins_original_ingredient_text() {
    let raw: RecipeInformation = serde_json::from_str(
        r#"{
            "id": 42,
            "title": "Tomato Soup",
            "image": "https://img.example/42.jpg",
            "summary": "Warm and simple.",
            "instructions": "Simmer tomatoes. Blend.",
            "extendedIngredients": [
                {"id": 1, "original": "2 cups of tomatoes"},
                {"id": 2, "original": "1 tbsp olive oil"}
            ]
        }"#,
    )
    .expect("valid detail response");

    let recipe = Recipe::from_information(&raw);
    assert_eq!(recipe.id, 42);
    assert_eq!(recipe.ingredients, "2 cups of tomatoes, 1 tbsp olive oil");
    assert_eq!(recipe.description, "Warm and simple.");
    assert_eq!(recipe.steps, "Simmer tomatoes. Blend.");
}

#[test]
fn test_map_information_without_optional_fields() {
    let raw: RecipeInformation =
        serde_json::from_str(r#"{"id": 9, "title": "Bare Dish"}"#).expect("valid detail response");

    let recipe = Recipe::from_information(&raw);
    assert_eq!(recipe.title, "Bare Dish");
    assert_eq!(recipe.description, NO_DESCRIPTION);
    assert_eq!(recipe.ingredients, NO_INGREDIENTS);
    assert_eq!(recipe.steps, NO_STEPS);
    assert_eq!(recipe.image, "");
}

#[test]
fn test_empty_ingredient_lists_fall_back() {
    let search: SearchResult = serde_json::from_str(
        r#"{"id": 1, "title": "A", "ingredients": []}"#,
    )
    .expect("valid search result");
    assert_eq!(Recipe::from_search_result(&search).ingredients, NO_INGREDIENTS);

    let detail: RecipeInformation = serde_json::from_str(
        r#"{"id": 1, "title": "A", "extendedIngredients": []}"#,
    )
    .expect("valid detail response");
    assert_eq!(Recipe::from_information(&detail).ingredients, NO_INGREDIENTS);
}

#[test]
fn test_fallback_recipe_shape() {
    let recipe = Recipe::fallback(55);
    assert_eq!(
        recipe,
        Recipe {
            id: 55,
            title: NO_TITLE.to_string(),
            description: NO_DESCRIPTION.to_string(),
            ingredients: NO_INGREDIENTS.to_string(),
            steps: NO_STEPS.to_string(),
            image: String::new(),
        }
    );
}

#[test]
fn test_mapping_is_idempotent() {
    let raw: SearchResult = serde_json::from_str(
        r#"{"id": 3, "title": "Stew", "summary": "Hearty.", "ingredients": ["beef", "onion"]}"#,
    )
    .expect("valid search result");

    assert_eq!(
        Recipe::from_search_result(&raw),
        Recipe::from_search_result(&raw)
    );

    let detail: RecipeInformation = serde_json::from_str(
        r#"{"id": 3, "title": "Stew", "extendedIngredients": [{"id": 1, "original": "1 lb beef"}]}"#,
    )
    .expect("valid detail response");

    assert_eq!(
        Recipe::from_information(&detail),
        Recipe::from_information(&detail)
    );
}

#[test]
fn test_unknown_wire_fields_are_ignored() {
    let raw: SearchResult = serde_json::from_str(
        r#"{"id": 4, "title": "Salad", "readyInMinutes": 15, "servings": 2}"#,
    )
    .expect("valid search result");
    assert_eq!(Recipe::from_search_result(&raw).title, "Salad");
}
