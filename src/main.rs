use anyhow::Result;
use credcheck::consts::{LOG_FILE, LOG_LEVEL};
use credcheck::validation::{
    evaluate_password, validate_email, validate_username, Email, Password, Username,
    ValidationResult,
};
use derive_more::Display;
use inquire::{Password as PasswordPrompt, Select, Text};
use log::info;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu
trait Menu {
    /// Runs the menu once. Returns None when the menu wants to exit,
    /// or Some(()) to run it again.
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu in a loop, printing errors, until it wants to exit.
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Error: {error}");
            }
        }
    }
}

/// An account that passed every check
struct Account {
    username: Username,
    email: Email,
    password: Password,
}

struct App {
    accounts: Vec<Account>,
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Create an account")]
            Register,
            #[display("List accounts")]
            List,
            #[display("Quit")]
            Exit,
        }

        let choice = Select::new("What do you want to do?", Choice::iter().collect()).prompt()?;

        match choice {
            Choice::Register => {
                let account = register()?;
                info!("Account created for {}", account.username);
                println!("[*] Welcome, {}.", account.username);
                self.accounts.push(account);
                Ok(MENU_LOOP)
            }
            Choice::List => {
                if self.accounts.is_empty() {
                    println!("[*] No account yet");
                }
                for account in &self.accounts {
                    println!("{} <{}> {:?}", account.username, account.email, account.password);
                }
                Ok(MENU_LOOP)
            }
            Choice::Exit => Ok(MENU_EXIT),
        }
    }
}

/// Prompts until the given validator accepts the input.
fn prompt_until_valid(
    mut ask: impl FnMut() -> Result<String>,
    validate: fn(&str) -> ValidationResult,
    secret: bool,
) -> Result<String> {
    loop {
        let input = ask()?;
        let result = validate(&input);
        if result.is_valid() {
            return Ok(input);
        }

        println!("{}", result.message());
        if let (Some(index), false) = (result.error_index(), secret) {
            println!("  {}", input);
            println!("  {}^", " ".repeat(index));
        }
    }
}

fn register() -> Result<Account> {
    let username = prompt_until_valid(
        || Ok(Text::new("Username:").prompt()?),
        validate_username,
        false,
    )?;
    let email = prompt_until_valid(
        || Ok(Text::new("Email address:").prompt()?),
        validate_email,
        false,
    )?;
    let password = prompt_until_valid(
        || {
            Ok(PasswordPrompt::new("Password:")
                .with_display_mode(inquire::PasswordDisplayMode::Masked)
                .prompt()?)
        },
        evaluate_password,
        true,
    )?;

    Ok(Account {
        username: username.try_into()?,
        email: email.try_into()?,
        password: password.try_into()?,
    })
}

fn main() -> Result<()> {
    simple_logging::log_to_file(LOG_FILE, LOG_LEVEL)?;

    println!("Account setup");
    App {
        accounts: Vec::new(),
    }
    .enter_loop();
    Ok(())
}
