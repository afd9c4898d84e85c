use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use gofinances::{
    Transaction, TransactionType, append_transaction, initialize_db, new_transaction_id,
};

/// A utility for creating a test database for the GoFinances web server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating sample transactions...");

    let now = OffsetDateTime::now_utc();
    let samples = [
        ("Salário", 5000.0, TransactionType::Income, "salary", 20),
        ("Mercado", 432.17, TransactionType::Expense, "purchases", 15),
        ("Almoço", 25.9, TransactionType::Expense, "food", 10),
        ("Gasolina", 210.0, TransactionType::Expense, "car", 7),
        ("Cinema", 32.5, TransactionType::Expense, "leisure", 3),
        ("Curso de Rust", 149.9, TransactionType::Expense, "studies", 1),
    ];

    for (name, amount, transaction_type, category, days_ago) in samples {
        let transaction = Transaction::new(
            new_transaction_id(),
            name,
            amount,
            transaction_type,
            category,
            now - Duration::days(days_ago),
        );

        append_transaction(transaction, &conn)?;
    }

    println!("Success!");

    Ok(())
}
