use std::io::{self, BufRead, Write};

use crate::application::catalog::{Catalog, CatalogError};
use crate::domain::{ItemId, ItemType, LibraryItem};
use crate::ports::NotificationService;

use super::menu::{
    MAIN_MENU, MenuChoice, SPECIALIZED_MENU, SpecializedChoice, TYPE_MENU, item_type_from_number,
    parse_number,
};

const CURRENCY: &str = "rs";

/// Whether the menu loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive menu session over a catalog
///
/// Reads one answer per line from `input` and writes prompts and results to
/// `output`. Catalog errors are reported to the user and never end the session;
/// only `0` or end of input does.
pub struct Session<'a, R, W> {
    catalog: &'a mut Catalog,
    notifier: &'a dyn NotificationService,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        catalog: &'a mut Catalog,
        notifier: &'a dyn NotificationService,
        input: R,
        output: W,
    ) -> Self {
        Self {
            catalog,
            notifier,
            input,
            output,
        }
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        tracing::info!(items = self.catalog.len(), "session started");

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", MAIN_MENU)?;
            let Some(answer) = self.prompt("Enter your choice: ")? else {
                break;
            };

            let Some(number) = parse_number(&answer) else {
                writeln!(self.output, "Please enter a valid number.")?;
                continue;
            };
            let Some(choice) = MenuChoice::from_number(number) else {
                writeln!(self.output, "Invalid choice. Please try again.")?;
                continue;
            };

            tracing::debug!(?choice, "menu choice");
            if self.dispatch(choice)? == Flow::Exit {
                break;
            }
        }

        tracing::info!("session ended");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::DisplayAll => self.display_all(),
            MenuChoice::Borrow => self.borrow_item(),
            MenuChoice::Return => self.return_item(),
            MenuChoice::SearchByTitle => self.search_by_title(),
            MenuChoice::SearchByAuthor => self.search_by_author(),
            MenuChoice::SearchByType => self.search_by_type(),
            MenuChoice::ShowAvailable => {
                let items = self.catalog.available_items();
                write_list(
                    &mut self.output,
                    &items,
                    "Available items:",
                    "No available items at the moment.",
                )?;
                Ok(Flow::Continue)
            }
            MenuChoice::ShowBorrowed => self.show_borrowed(),
            MenuChoice::ShowFines => self.show_fines(),
            MenuChoice::Specialized => self.specialized(),
            MenuChoice::Exit => {
                writeln!(self.output, "Thank you for using LibraNet! Come again.")?;
                Ok(Flow::Exit)
            }
        }
    }

    // ========================================================================
    // Actions
    // ========================================================================

    fn display_all(&mut self) -> io::Result<Flow> {
        let items: Vec<&LibraryItem> = self.catalog.items().collect();
        write_list(
            &mut self.output,
            &items,
            "ALL LIBRARY ITEMS",
            "The catalog is empty.",
        )?;
        Ok(Flow::Continue)
    }

    fn borrow_item(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt_id("Enter item ID to borrow: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = id else {
            return Ok(Flow::Continue);
        };
        let Some(date) = self.prompt("Enter borrow date (YYYY-MM-DD): ")? else {
            return Ok(Flow::Exit);
        };

        match self.catalog.borrow_item(id, &date) {
            Ok(event) => writeln!(
                self.output,
                "Item borrowed successfully. Due date: {}",
                event.due_date
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn return_item(&mut self) -> io::Result<Flow> {
        let Some(id) = self.prompt_id("Enter item ID to return: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = id else {
            return Ok(Flow::Continue);
        };
        let Some(date) = self.prompt("Enter return date (YYYY-MM-DD): ")? else {
            return Ok(Flow::Exit);
        };

        match self.catalog.return_item(id, &date) {
            Ok(event) if event.fine.is_zero() => {
                writeln!(self.output, "Item returned successfully. No fines.")?
            }
            Ok(event) => writeln!(
                self.output,
                "Item returned successfully. {} days overdue. Fine: {} {}",
                event.days_overdue, event.fine, CURRENCY
            )?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn search_by_title(&mut self) -> io::Result<Flow> {
        let Some(query) = self.prompt("Enter title to search: ")? else {
            return Ok(Flow::Exit);
        };
        let results = self.catalog.search_by_title(&query);
        write_list(
            &mut self.output,
            &results,
            "Search results:",
            "No items found with that title.",
        )?;
        Ok(Flow::Continue)
    }

    fn search_by_author(&mut self) -> io::Result<Flow> {
        let Some(query) = self.prompt("Enter author to search: ")? else {
            return Ok(Flow::Exit);
        };
        let results = self.catalog.search_by_author(&query);
        write_list(
            &mut self.output,
            &results,
            "Search results:",
            "No items found by that author.",
        )?;
        Ok(Flow::Continue)
    }

    fn search_by_type(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "{}", TYPE_MENU)?;
        let Some(answer) = self.prompt("Enter your choice: ")? else {
            return Ok(Flow::Exit);
        };

        let Some(number) = parse_number(&answer) else {
            writeln!(self.output, "Please enter a valid number.")?;
            return Ok(Flow::Continue);
        };
        let Some(item_type) = item_type_from_number(number) else {
            writeln!(self.output, "Invalid choice.")?;
            return Ok(Flow::Continue);
        };

        let results = self.catalog.search_by_type(item_type);
        write_list(
            &mut self.output,
            &results,
            "Search results:",
            "No items of this type found.",
        )?;
        Ok(Flow::Continue)
    }

    fn show_borrowed(&mut self) -> io::Result<Flow> {
        let items = self.catalog.borrowed_items();
        if items.is_empty() {
            writeln!(self.output, "No borrowed items at the moment.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "Borrowed items:")?;
        for item in items {
            match item.due_date() {
                Some(due_date) => writeln!(self.output, "{}, Due: {}", item, due_date)?,
                None => writeln!(self.output, "{}", item)?,
            }
        }
        Ok(Flow::Continue)
    }

    fn show_fines(&mut self) -> io::Result<Flow> {
        writeln!(
            self.output,
            "Total fines collected: {} {}",
            self.catalog.total_fines(),
            CURRENCY
        )?;
        for (id, fine) in self.catalog.fine_ledger().entries() {
            writeln!(self.output, "  Item {}: {} {}", id, fine, CURRENCY)?;
        }
        Ok(Flow::Continue)
    }

    fn specialized(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "{}", SPECIALIZED_MENU)?;
        let Some(answer) = self.prompt("Enter your choice: ")? else {
            return Ok(Flow::Exit);
        };

        let Some(number) = parse_number(&answer) else {
            writeln!(self.output, "Please enter a valid number.")?;
            return Ok(Flow::Continue);
        };
        let Some(choice) = SpecializedChoice::from_number(number) else {
            writeln!(self.output, "Invalid choice.")?;
            return Ok(Flow::Continue);
        };

        let label = match choice {
            SpecializedChoice::PageCount => "Enter book ID: ",
            SpecializedChoice::Play => "Enter audiobook ID: ",
            SpecializedChoice::Archive => "Enter e-magazine ID: ",
        };
        let Some(id) = self.prompt_id(label)? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = id else {
            return Ok(Flow::Continue);
        };

        match choice {
            SpecializedChoice::PageCount => match self.catalog.page_count(id) {
                Ok(pages) => writeln!(self.output, "Page count: {}", pages)?,
                Err(e) => self.report(&e)?,
            },
            SpecializedChoice::Play => match self.catalog.play_audiobook(id) {
                Ok(event) => {
                    if let Err(e) = self.notifier.announce_playback(&event) {
                        tracing::warn!(item_id = %id, error = %e, "playback announcement failed");
                    }
                    writeln!(self.output, "Duration: {} hours", event.duration_hours)?;
                }
                Err(e) => self.report(&e)?,
            },
            SpecializedChoice::Archive => match self.catalog.archive_issue(id) {
                Ok(Some(event)) => {
                    if let Err(e) = self.notifier.announce_archive(&event) {
                        tracing::warn!(item_id = %id, error = %e, "archive announcement failed");
                    }
                }
                Ok(None) => writeln!(self.output, "Item {} is already archived.", id)?,
                Err(e) => self.report(&e)?,
            },
        }
        Ok(Flow::Continue)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Print a prompt and read one line; `None` at end of input
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for an item ID
    ///
    /// Outer `None` means end of input; inner `None` means the answer was not
    /// a valid ID and the user has already been told.
    fn prompt_id(&mut self, text: &str) -> io::Result<Option<Option<ItemId>>> {
        let Some(answer) = self.prompt(text)? else {
            return Ok(None);
        };
        match answer.parse::<u32>() {
            Ok(value) => Ok(Some(Some(ItemId::new(value)))),
            Err(_) => {
                writeln!(self.output, "Please enter a valid number for ID.")?;
                Ok(Some(None))
            }
        }
    }

    fn report(&mut self, err: &CatalogError) -> io::Result<()> {
        match err {
            CatalogError::WrongItemType { expected, .. } => {
                writeln!(self.output, "This item is not {}.", with_article(*expected))
            }
            _ => writeln!(self.output, "Error: {}", err),
        }
    }
}

fn write_list(
    out: &mut impl Write,
    items: &[&LibraryItem],
    heading: &str,
    empty: &str,
) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "{}", empty);
    }
    writeln!(out, "{}", heading)?;
    for item in items {
        writeln!(out, "{}", item)?;
    }
    Ok(())
}

fn with_article(item_type: ItemType) -> &'static str {
    match item_type {
        ItemType::Book => "a book",
        ItemType::Audiobook => "an audiobook",
        ItemType::EMagazine => "an e-magazine",
    }
}
