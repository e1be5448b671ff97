use std::env;
use std::sync::Arc;

use recipe_book::app::{RecipeApp, Route};
use recipe_book::client::{ApiCredentials, RecipeClient};
use recipe_book::model::INGREDIENT_SEPARATOR;
use recipe_book::screens::{DetailsState, ListState};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get configuration from environment variables
    let base_url = env::var("SPOONACULAR_BASE_URL")
        .unwrap_or_else(|_| "https://api.spoonacular.com".to_string());

    let credentials = match ApiCredentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Recipe API at {}", base_url);
    tracing::info!("Using API key {}", credentials.key_preview());

    let client = Arc::new(RecipeClient::new(base_url, credentials));
    let mut app = RecipeApp::new(client);

    println!("Recipe Book");
    println!("Type a query to search, a result number to open it, 'back' to return, 'quit' to exit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" {
            break;
        }

        match app.route() {
            Route::List => {
                if input == "back" {
                    println!("Already on the recipe list.");
                } else if let Ok(number) = input.parse::<usize>() {
                    if number >= 1 && app.select(number - 1) {
                        if let Some(details) = app.details_mut() {
                            details.tick().await;
                            render_details(details.state());
                        }
                    } else {
                        println!("No result #{}.", number);
                    }
                } else {
                    app.list_mut().set_query(input);
                    app.list_mut().trigger_search();
                    app.list_mut().tick().await;
                    render_list(app.list().state());
                }
            }
            Route::Details { .. } => {
                if input == "back" {
                    app.go_back();
                    render_list(app.list().state());
                } else {
                    println!("Type 'back' to return to the recipe list.");
                }
            }
        }
    }

    Ok(())
}

fn render_list(state: &ListState) {
    if let Some(error) = &state.error {
        println!("{}", error);
        return;
    }
    if state.results.is_empty() {
        println!("No recipes found for {:?}.", state.query);
        return;
    }
    for (index, recipe) in state.results.iter().enumerate() {
        println!("{:>3}. {}", index + 1, recipe.title);
    }
}

fn render_details(state: &DetailsState) {
    if let Some(error) = &state.error {
        println!("{}", error);
        return;
    }
    let Some(recipe) = &state.recipe else {
        return;
    };
    println!("== {} ==", recipe.title);
    if !recipe.image.is_empty() {
        println!("Image: {}", recipe.image);
    }
    println!();
    println!("Description:");
    println!("{}", recipe.description);
    println!();
    println!("Ingredients:");
    for ingredient in recipe.ingredients.split(INGREDIENT_SEPARATOR) {
        println!("- {}", ingredient);
    }
    println!();
    println!("Steps:");
    println!("{}", recipe.steps);
}
