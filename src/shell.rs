//! Interactive menu shell
//!
//! Reads menu choices and transaction fields line by line, dispatches to the
//! ledger and the report engine, and writes everything to the output.
//! Generic over the reader and writer so it can be driven from stdin/stdout
//! or from in-memory buffers.

use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use log::warn;

use crate::config::Settings;
use crate::display::format_banner;
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{Money, Transaction, TransactionKind};
use crate::reports::ReportEngine;

/// Stored date layout; the month filter keys on its first seven characters
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ViewAll,
    Summary,
    Filter,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Add),
            "2" => Ok(Self::ViewAll),
            "3" => Ok(Self::Summary),
            "4" => Ok(Self::Filter),
            "5" => Ok(Self::Exit),
            other => Err(LedgerError::Validation(format!("Invalid menu choice '{}'", other))),
        }
    }
}

/// Whether the menu loop keeps going
enum Flow {
    Continue,
    Quit,
}

/// The interactive menu loop
pub struct Shell<R, W> {
    ledger: Ledger,
    engine: ReportEngine,
    symbol: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over an opened ledger
    pub fn new(ledger: Ledger, engine: ReportEngine, settings: &Settings, input: R, output: W) -> Self {
        Self {
            ledger,
            engine,
            symbol: settings.currency_symbol.clone(),
            input,
            output,
        }
    }

    /// Hand back the ledger and the writer once the shell is done
    pub fn into_parts(self) -> (Ledger, W) {
        (self.ledger, self.output)
    }

    /// Run the menu until Exit is chosen or the input ends
    pub fn run(&mut self) -> LedgerResult<()> {
        loop {
            self.show_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Add) => self.add_transaction()?,
                Ok(MenuChoice::ViewAll) => self.view_all()?,
                Ok(MenuChoice::Summary) => self.show_summary()?,
                Ok(MenuChoice::Filter) => self.filter_by_month()?,
                Ok(MenuChoice::Exit) => Flow::Quit,
                Err(_) => {
                    writeln!(self.output, "Invalid choice. Try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Quit = flow {
                break;
            }
        }

        writeln!(self.output, "Exiting. Stay financially smart!")?;
        self.output.flush()?;
        Ok(())
    }

    fn show_menu(&mut self) -> LedgerResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", format_banner("Personal Finance Tracker"))?;
        writeln!(self.output, "1. Add Transaction")?;
        writeln!(self.output, "2. View All Transactions")?;
        writeln!(self.output, "3. Show Summary")?;
        writeln!(self.output, "4. Filter by Month/Year")?;
        writeln!(self.output, "5. Exit")?;
        write!(self.output, "Choose an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn add_transaction(&mut self) -> LedgerResult<Flow> {
        let Some(date) = self.prompt_date()? else {
            return Ok(Flow::Quit);
        };
        let Some(kind) = self.prompt_kind()? else {
            return Ok(Flow::Quit);
        };
        let Some(category) = self.prompt_category()? else {
            return Ok(Flow::Quit);
        };
        let Some(amount) = self.prompt_amount()? else {
            return Ok(Flow::Quit);
        };
        let Some(note) = self.prompt("Note: ")? else {
            return Ok(Flow::Quit);
        };

        let txn = Transaction::new(date, kind, category, amount, note);
        match self.ledger.append(txn) {
            Ok(()) => writeln!(self.output, "Transaction added.")?,
            Err(e) => writeln!(self.output, "Failed to save transaction: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn prompt_date(&mut self) -> LedgerResult<Option<String>> {
        let Some(date) = self.prompt("Enter date (YYYY-MM-DD): ")? else {
            return Ok(None);
        };
        let date = date.trim();

        if date.is_empty() {
            return Ok(Some(Local::now().format(DATE_FORMAT).to_string()));
        }

        if NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() {
            warn!("Date '{}' is not in {} form", date, DATE_FORMAT);
            writeln!(
                self.output,
                "Warning: '{}' is not a YYYY-MM-DD date; it is saved as entered.",
                date
            )?;
        }
        Ok(Some(date.to_string()))
    }

    fn prompt_kind(&mut self) -> LedgerResult<Option<TransactionKind>> {
        loop {
            let Some(input) = self.prompt("Type (Income/Expense): ")? else {
                return Ok(None);
            };
            match input.parse::<TransactionKind>() {
                Ok(kind) => return Ok(Some(kind)),
                Err(_) => writeln!(self.output, "Please enter Income or Expense.")?,
            }
        }
    }

    fn prompt_category(&mut self) -> LedgerResult<Option<String>> {
        loop {
            let Some(input) = self.prompt("Category (e.g., Food, Rent): ")? else {
                return Ok(None);
            };
            let category = input.trim();
            if category.is_empty() {
                writeln!(self.output, "Category cannot be empty.")?;
            } else {
                return Ok(Some(category.to_string()));
            }
        }
    }

    fn prompt_amount(&mut self) -> LedgerResult<Option<Money>> {
        let label = format!("Amount ({}): ", self.symbol);
        loop {
            let Some(input) = self.prompt(&label)? else {
                return Ok(None);
            };
            match Money::parse(&input) {
                Ok(amount) if amount.is_negative() => {
                    writeln!(self.output, "Amount cannot be negative.")?
                }
                Ok(amount) => return Ok(Some(amount)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn view_all(&mut self) -> LedgerResult<Flow> {
        let report = self.engine.list(self.ledger.transactions());
        write!(self.output, "\n{}", report.format_terminal(&self.symbol))?;
        Ok(Flow::Continue)
    }

    fn show_summary(&mut self) -> LedgerResult<Flow> {
        match self.engine.summary(self.ledger.transactions()) {
            Ok(report) => write!(self.output, "\n{}", report.format_terminal(&self.symbol))?,
            Err(e) => writeln!(self.output, "Cannot show summary: {}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn filter_by_month(&mut self) -> LedgerResult<Flow> {
        let Some(input) = self.prompt("Enter month and year (YYYY-MM): ")? else {
            return Ok(Flow::Quit);
        };
        let month = match input.trim() {
            "" => Local::now().format("%Y-%m").to_string(),
            month => month.to_string(),
        };

        let report = self.engine.filter_month(self.ledger.transactions(), &month);
        write!(self.output, "\n{}", report.format_terminal(&self.symbol))?;
        Ok(Flow::Continue)
    }

    /// Write a prompt and read the answer
    fn prompt(&mut self, label: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line without its terminator; `None` at end of input
    fn read_line(&mut self) -> LedgerResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
