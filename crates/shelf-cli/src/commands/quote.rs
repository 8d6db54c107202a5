use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use shelf_application::ShelfUseCase;
use shelf_core::{Pricer, SessionStore};

use super::utils::terminal_text;

pub async fn run(store: Arc<dyn SessionStore>, pricer: Arc<dyn Pricer>, user: &str) -> Result<()> {
    let usecase = ShelfUseCase::new(store, pricer);
    match usecase.summary(user).await? {
        Ok(text) => println!("{}", terminal_text(&text)),
        Err(e) => println!("{}", format!("{}: {}", user, e).yellow()),
    }
    Ok(())
}
