//! Главный исполняемый файл sqltok

use clap::{Parser, Subcommand};
use sqltok::{tokenize, VERSION};

/// Демонстрационный запрос, разбираемый при запуске без аргументов
const DEMO_QUERY: &str = "SELECT 'abcd' as id, a.name, +12 as num, \r\nFROM activities";

#[derive(Parser)]
#[command(name = "sqltok")]
#[command(about = "Лексический токенизатор SQL на Rust")]
#[command(version = VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Разбивает SQL строку на токены
    Tokenize {
        /// SQL строка для разбора
        sql: String,

        /// Вывести токены в формате JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Tokenize { sql, json }) => print_tokens(sql, *json)?,
        None => print_tokens(DEMO_QUERY, false)?,
    }

    Ok(())
}

/// Разбирает строку и печатает результат
fn print_tokens(sql: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    match tokenize(sql) {
        Ok(tokens) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&tokens)?);
            } else {
                println!("Запрос разобран, токены:");
                for token in &tokens {
                    println!("  {}", token);
                }
            }
        }
        Err(error) => {
            println!("Ошибка разбора запроса: {}", error);
        }
    }

    Ok(())
}
