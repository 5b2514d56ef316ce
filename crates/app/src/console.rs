//! The console front end: a fixed menu of nine actions plus exit.
//!
//! The loop reads one trimmed line per prompt, maps the selection through
//! [`Command`], and delegates to the engine. Every engine error is reported
//! and the loop continues; only the quit action ends the process.
use std::io::{self, BufRead, Write};

use engine::{Engine, EngineError, Price};

use crate::parsing::{parse_id, parse_id_list};

/// One menu action, keyed by the digit the operator types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ListCategories,
    ListIngredients,
    ListDishes,
    AddCategory,
    AddIngredient,
    AddDish,
    DeleteCategory,
    DeleteIngredient,
    DeleteDish,
    Quit,
}

impl Command {
    /// Maps a trimmed menu selection to a command. Unknown selections map to
    /// `None` and leave the store untouched.
    pub fn from_choice(choice: &str) -> Option<Command> {
        match choice {
            "1" => Some(Command::ListCategories),
            "2" => Some(Command::ListIngredients),
            "3" => Some(Command::ListDishes),
            "4" => Some(Command::AddCategory),
            "5" => Some(Command::AddIngredient),
            "6" => Some(Command::AddDish),
            "7" => Some(Command::DeleteCategory),
            "8" => Some(Command::DeleteIngredient),
            "9" => Some(Command::DeleteDish),
            "0" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// The menu loop. Owns the engine; holds no other state between actions.
pub struct Console {
    engine: Engine,
}

impl Console {
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    /// Runs the menu loop until the operator picks the exit action.
    pub async fn run(self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();

        loop {
            print_menu();
            let choice = prompt(&mut input, "\nPick an action: ")?;
            match Command::from_choice(&choice) {
                Some(Command::Quit) => {
                    println!("Goodbye!");
                    return Ok(());
                }
                Some(command) => self.dispatch(command, &mut input).await?,
                None => println!("Invalid choice!"),
            }
        }
    }

    async fn dispatch(&self, command: Command, input: &mut impl BufRead) -> io::Result<()> {
        tracing::debug!(?command, "dispatching");
        match command {
            Command::ListCategories => self.print_categories().await,
            Command::ListIngredients => self.print_ingredients().await,
            Command::ListDishes => self.print_dishes().await,
            Command::AddCategory => self.add_category(input).await?,
            Command::AddIngredient => self.add_ingredient(input).await?,
            Command::AddDish => self.add_dish(input).await?,
            Command::DeleteCategory => self.delete_category(input).await?,
            Command::DeleteIngredient => self.delete_ingredient(input).await?,
            Command::DeleteDish => self.delete_dish(input).await?,
            // Handled by the caller before dispatch.
            Command::Quit => {}
        }
        Ok(())
    }

    async fn print_categories(&self) {
        match self.engine.list_categories().await {
            Ok(categories) if categories.is_empty() => println!("\nNo categories yet."),
            Ok(categories) => {
                println!("\nMenu categories:");
                for category in &categories {
                    println!("{}. {}", category.id, category.name);
                }
            }
            Err(err) => println!("Error: {err}"),
        }
    }

    async fn print_ingredients(&self) {
        match self.engine.list_ingredients().await {
            Ok(ingredients) if ingredients.is_empty() => println!("\nNo ingredients yet."),
            Ok(ingredients) => {
                println!("\nIngredients:");
                for ingredient in &ingredients {
                    println!("{}. {}", ingredient.id, ingredient.name);
                }
            }
            Err(err) => println!("Error: {err}"),
        }
    }

    async fn print_dishes(&self) {
        match self.engine.list_dishes().await {
            Ok(dishes) if dishes.is_empty() => println!("\nNo dishes yet."),
            Ok(dishes) => {
                println!("\nRestaurant menu:");
                for dish in &dishes {
                    let ingredients = dish
                        .ingredients
                        .iter()
                        .map(|ingredient| ingredient.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ");
                    println!("\n{}. {}", dish.id, dish.name);
                    println!("   Price: {}", dish.price);
                    println!("   Category: {}", dish.category.name);
                    println!("   Ingredients: {ingredients}");
                    println!(
                        "   Description: {}",
                        dish.description.as_deref().unwrap_or("no description")
                    );
                }
            }
            Err(err) => println!("Error: {err}"),
        }
    }

    async fn add_category(&self, input: &mut impl BufRead) -> io::Result<()> {
        let name = prompt(input, "\nCategory name: ")?;
        match self.engine.create_category(&name).await {
            Ok(category) => println!("Category \"{}\" added!", category.name),
            Err(EngineError::DuplicateName(name)) => {
                println!("Error: category \"{name}\" already exists!")
            }
            Err(err) => println!("Error: {err}"),
        }
        Ok(())
    }

    async fn add_ingredient(&self, input: &mut impl BufRead) -> io::Result<()> {
        let name = prompt(input, "\nIngredient name: ")?;
        match self.engine.create_ingredient(&name).await {
            Ok(ingredient) => println!("Ingredient \"{}\" added!", ingredient.name),
            Err(EngineError::DuplicateName(name)) => {
                println!("Error: ingredient \"{name}\" already exists!")
            }
            Err(err) => println!("Error: {err}"),
        }
        Ok(())
    }

    async fn add_dish(&self, input: &mut impl BufRead) -> io::Result<()> {
        let name = prompt(input, "\nDish name: ")?;
        let price_raw = prompt(input, "Price: ")?;
        let description = prompt(input, "Description (optional): ")?;

        self.print_categories().await;
        let category_raw = prompt(input, "Category id: ")?;

        self.print_ingredients().await;
        let ingredients_raw = prompt(input, "Ingredient ids (comma separated): ")?;

        let price: Price = match price_raw.parse() {
            Ok(price) => price,
            Err(_) => {
                println!("Error: invalid input data!");
                return Ok(());
            }
        };
        let (category_id, ingredient_ids) =
            match (parse_id(&category_raw), parse_id_list(&ingredients_raw)) {
                (Ok(category_id), Ok(ingredient_ids)) => (category_id, ingredient_ids),
                _ => {
                    println!("Error: invalid input data!");
                    return Ok(());
                }
            };

        let description = (!description.is_empty()).then_some(description.as_str());

        match self
            .engine
            .create_dish(&name, price, description, category_id, &ingredient_ids)
            .await
        {
            Ok(dish) => println!("Dish \"{}\" added to the menu!", dish.name),
            Err(EngineError::NotFound(_)) => {
                println!("Error: unknown category or ingredient id!")
            }
            Err(err) => println!("Error: {err}"),
        }
        Ok(())
    }

    async fn delete_category(&self, input: &mut impl BufRead) -> io::Result<()> {
        self.print_categories().await;
        let raw = prompt(input, "\nCategory id to delete: ")?;
        let id = match parse_id(&raw) {
            Ok(id) => id,
            Err(_) => {
                println!("Error: invalid input data!");
                return Ok(());
            }
        };
        match self.engine.delete_category(id).await {
            Ok(()) => println!("Category deleted!"),
            Err(EngineError::NotFound(_)) => println!("Error: category not found!"),
            Err(EngineError::InUse(name)) => {
                println!("Error: category \"{name}\" still has dishes!")
            }
            Err(err) => println!("Error: {err}"),
        }
        Ok(())
    }

    async fn delete_ingredient(&self, input: &mut impl BufRead) -> io::Result<()> {
        self.print_ingredients().await;
        let raw = prompt(input, "\nIngredient id to delete: ")?;
        let id = match parse_id(&raw) {
            Ok(id) => id,
            Err(_) => {
                println!("Error: invalid input data!");
                return Ok(());
            }
        };
        match self.engine.delete_ingredient(id).await {
            Ok(()) => println!("Ingredient deleted!"),
            Err(EngineError::NotFound(_)) => println!("Error: ingredient not found!"),
            Err(EngineError::InUse(name)) => {
                println!("Error: ingredient \"{name}\" is used by a dish!")
            }
            Err(err) => println!("Error: {err}"),
        }
        Ok(())
    }

    async fn delete_dish(&self, input: &mut impl BufRead) -> io::Result<()> {
        self.print_dishes().await;
        let raw = prompt(input, "\nDish id to delete: ")?;
        let id = match parse_id(&raw) {
            Ok(id) => id,
            Err(_) => {
                println!("Error: invalid input data!");
                return Ok(());
            }
        };
        match self.engine.delete_dish(id).await {
            Ok(()) => println!("Dish removed from the menu!"),
            Err(EngineError::NotFound(_)) => println!("Error: dish not found!"),
            Err(err) => println!("Error: {err}"),
        }
        Ok(())
    }
}

fn print_menu() {
    println!("\nRestaurant menu management:");
    println!("1. Show categories");
    println!("2. Show ingredients");
    println!("3. Show all dishes");
    println!("4. Add category");
    println!("5. Add ingredient");
    println!("6. Add dish");
    println!("7. Delete category");
    println!("8. Delete ingredient");
    println!("9. Delete dish");
    println!("0. Quit");
}

/// Prints a prompt and reads one trimmed line.
///
/// A closed stdin surfaces as `UnexpectedEof` instead of spinning on empty
/// reads.
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_string())
}
