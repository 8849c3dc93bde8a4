//! Interactive menu driver.
//!
//! The session reads commands from any `BufRead` and writes to any `Write`,
//! so the same code drives stdin/stdout in the binary and in-memory buffers
//! in tests.

use std::io::{BufRead, Write};

use inventory::{OrderLine, Product, Store};

use crate::error::ShopError;

/// A main-menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ListProducts,
    ShowTotal,
    MakeOrder,
    Quit,
}

impl Command {
    /// All commands in menu order.
    pub const ALL: [Command; 4] = [
        Command::ListProducts,
        Command::ShowTotal,
        Command::MakeOrder,
        Command::Quit,
    ];

    /// Returns the key the user types to pick this command.
    pub fn key(&self) -> &'static str {
        match self {
            Command::ListProducts => "1",
            Command::ShowTotal => "2",
            Command::MakeOrder => "3",
            Command::Quit => "4",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Command::ListProducts => "List all products in store",
            Command::ShowTotal => "Show total amount in store",
            Command::MakeOrder => "Make an order",
            Command::Quit => "Quit",
        }
    }

    /// Parses the user's menu choice.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.into_iter().find(|c| c.key() == input)
    }
}

/// Whether the session keeps running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A shopping session over one store.
pub struct Session<R, W> {
    store: Store,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: Store, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Consumes the session, returning the store and the output sink.
    pub fn into_parts(self) -> (Store, W) {
        (self.store, self.output)
    }

    /// Runs the menu loop until the user quits or input ends.
    pub fn run(&mut self) -> Result<(), ShopError> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Please choose a number: ")? else {
                break;
            };
            writeln!(self.output, "----------")?;

            let flow = match Command::parse(&choice) {
                Some(command) => self.dispatch(command)?,
                None => {
                    writeln!(
                        self.output,
                        "Invalid choice. Please enter a number between 1 and {}.",
                        Command::ALL.len()
                    )?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        writeln!(self.output, "**** You left the shop ****")?;
        Ok(())
    }

    /// Runs a single command.
    pub fn dispatch(&mut self, command: Command) -> Result<Flow, ShopError> {
        tracing::debug!(?command, "dispatching command");
        match command {
            Command::ListProducts => self.list_products().map(|()| Flow::Continue),
            Command::ShowTotal => self.show_total().map(|()| Flow::Continue),
            Command::MakeOrder => self.make_order(),
            Command::Quit => Ok(Flow::Quit),
        }
    }

    fn print_menu(&mut self) -> Result<(), ShopError> {
        writeln!(self.output)?;
        writeln!(self.output, "STORE MENU")?;
        writeln!(self.output, "----------")?;
        for command in Command::ALL {
            writeln!(self.output, "{}. {}", command.key(), command.label())?;
        }
        Ok(())
    }

    /// Writes `text` and reads one trimmed line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, ShopError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn list_products(&mut self) -> Result<(), ShopError> {
        let listed = listed_products(&self.store);
        self.print_products(&listed)
    }

    fn print_products(&mut self, listed: &[Product]) -> Result<(), ShopError> {
        writeln!(self.output, "ALL PRODUCTS IN STORE")?;
        writeln!(self.output, "----------")?;
        for (index, product) in listed.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, product.show())?;
        }
        Ok(())
    }

    fn show_total(&mut self) -> Result<(), ShopError> {
        writeln!(self.output, "TOTAL AMOUNT IN STORE")?;
        writeln!(self.output, "----------")?;
        writeln!(
            self.output,
            "Total of {} items in store.",
            self.store.total_quantity()
        )?;
        Ok(())
    }

    fn make_order(&mut self) -> Result<Flow, ShopError> {
        // Picks refer to this snapshot; the store is untouched until checkout.
        let listed = listed_products(&self.store);
        self.print_products(&listed)?;

        if listed.is_empty() {
            writeln!(self.output, "No products available.")?;
            return Ok(Flow::Continue);
        }

        let mut basket: Vec<(usize, u32)> = Vec::new();
        loop {
            writeln!(self.output, "----------")?;
            writeln!(
                self.output,
                "When you want to finish order, enter empty text."
            )?;
            let Some(choice) = self.prompt("Which product # do you want? ")? else {
                return Ok(Flow::Quit);
            };

            if choice.is_empty() {
                break;
            }

            let index = match choice.parse::<usize>() {
                Ok(n) if (1..=listed.len()).contains(&n) => n - 1,
                _ => {
                    writeln!(
                        self.output,
                        "Please enter a number between 1 and {}.",
                        listed.len()
                    )?;
                    continue;
                }
            };

            let product = &listed[index];
            let in_basket: u32 = basket
                .iter()
                .filter(|(i, _)| *i == index)
                .map(|(_, amount)| amount)
                .sum();
            let available = product.quantity().saturating_sub(in_basket);

            let Some(amount) = self.prompt("What amount do you want? ")? else {
                return Ok(Flow::Quit);
            };
            let amount = match amount.parse::<u32>() {
                Ok(0) | Err(_) => {
                    writeln!(
                        self.output,
                        "Please enter a whole number between 1 and {available}."
                    )?;
                    continue;
                }
                Ok(n) if n > available => {
                    writeln!(self.output, "Only {available} left in stock.")?;
                    continue;
                }
                Ok(n) => n,
            };

            basket.push((index, amount));
            writeln!(self.output, "******")?;
            writeln!(self.output, "PRODUCTS IN YOUR SHOPPING BASKET:")?;
            for (i, amount) in &basket {
                writeln!(self.output, "- {}, amount: {amount}", listed[*i].name())?;
            }
        }

        if basket.is_empty() {
            writeln!(self.output, "No products selected.")?;
            return Ok(Flow::Continue);
        }

        let lines: Vec<OrderLine> = basket
            .iter()
            .map(|(i, amount)| OrderLine::new(listed[*i].id(), *amount))
            .collect();

        match self.store.order(&lines) {
            Ok(total) => writeln!(self.output, "Order made! Total payment: {total}")?,
            Err(err) => {
                let err = ShopError::from(err);
                writeln!(self.output, "Order failed: {}", err.user_message())?;
            }
        }
        writeln!(self.output, "******")?;

        Ok(Flow::Continue)
    }
}

fn listed_products(store: &Store) -> Vec<Product> {
    store.get_all_products().into_iter().cloned().collect()
}
