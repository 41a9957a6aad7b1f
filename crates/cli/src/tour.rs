//! The interactive tour: a menu of every prompt kind, repeated until the
//! operator picks `Quit`.

use std::io::{BufRead, Write};

use console_ui_core::config::{CHAR_PROMPT, FLOAT_PROMPT};
use console_ui_core::deck::Deck;
use console_ui_core::error::Result;
use console_ui_core::parsers::array::split_fields;
use console_ui_core::printable::{printable_array, DEFAULT_CONTAINER};
use console_ui_core::random::{random_element, random_int};
use console_ui_core::{AddressForm, Console, MenuOption, Outcome, PromptRequest, Rejection};
use log::{debug, info};

/// One entry of the tour menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourStop {
    Text,
    Integer,
    Decimal,
    Character,
    Letter,
    YesNo,
    Words,
    Numbers,
    Address,
    Shuffle,
    Dice,
    Pick,
}

impl TourStop {
    pub const ALL: [TourStop; 12] = [
        TourStop::Text,
        TourStop::Integer,
        TourStop::Decimal,
        TourStop::Character,
        TourStop::Letter,
        TourStop::YesNo,
        TourStop::Words,
        TourStop::Numbers,
        TourStop::Address,
        TourStop::Shuffle,
        TourStop::Dice,
        TourStop::Pick,
    ];
}

impl MenuOption for TourStop {
    fn description(&self) -> String {
        match self {
            TourStop::Text => "Free text",
            TourStop::Integer => "Integer",
            TourStop::Decimal => "Decimal number",
            TourStop::Character => "Character",
            TourStop::Letter => "Letter",
            TourStop::YesNo => "Yes or no",
            TourStop::Words => "List of words",
            TourStop::Numbers => "List of integers",
            TourStop::Address => "IPv4 address",
            TourStop::Shuffle => "Shuffle and draw",
            TourStop::Dice => "Roll a die",
            TourStop::Pick => "Random pick",
        }
        .to_string()
    }
}

/// Shows the tour menu until the operator quits.
///
/// # Errors
///
/// Returns an error if the console fails, including end-of-input.
pub fn run_tour<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    info!("Starting tour");

    while let Some(&stop) = console.prompt_for_menu_selection_with_quit(&TourStop::ALL, true)? {
        debug!("Visiting {stop:?}");
        let result = visit(console, stop)?;
        console.write_line(format!("You entered: {result}"))?;
    }

    info!("Tour finished");
    Ok(())
}

fn visit<R: BufRead, W: Write>(console: &mut Console<R, W>, stop: TourStop) -> Result<String> {
    let result = match stop {
        TourStop::Text => console.prompt_for_string()?,
        TourStop::Integer => console.prompt_for_int()?.to_string(),
        TourStop::Decimal => console.prompt_for_number::<f64>(FLOAT_PROMPT)?.to_string(),
        TourStop::Character => console.prompt_for_char(CHAR_PROMPT)?.to_string(),
        TourStop::Letter => console.prompt_for_letter()?.to_string(),
        TourStop::YesNo => console.prompt_for_yes_no()?.to_string(),
        TourStop::Words => {
            let words = console.prompt_for_array("Enter words separated by spaces", " ")?;
            printable_array(&words, DEFAULT_CONTAINER)?
        }
        TourStop::Numbers => {
            let numbers = console.prompt_for_int_array("Enter integers separated by commas", ",")?;
            printable_array(&numbers, DEFAULT_CONTAINER)?
        }
        TourStop::Address => visit_address(console)?,
        TourStop::Shuffle => visit_shuffle(console)?,
        TourStop::Dice => {
            let sides = console.prompt_for_number_in("How many sides", 2, 100)?;
            random_int(1, sides)?.to_string()
        }
        TourStop::Pick => {
            let options = prompt_for_items(console, "Enter options separated by commas")?;
            random_element(&options)?.clone()
        }
    };

    Ok(result)
}

/// Reads a comma-separated list holding at least one field.
fn prompt_for_items<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> Result<Vec<String>> {
    let request = PromptRequest::new(prompt)?;
    console.prompt(&request, &|input: &str| -> Outcome<Vec<String>> {
        let items = split_fields(input, ",");
        if items.is_empty() {
            Err(Rejection::NoEntries)
        } else {
            Ok(items)
        }
    })
}

fn visit_address<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<String> {
    let forms = AddressForm::ALL.map(|form| form.to_string());
    let index = console.prompt_for_menu_index(&forms, "")?;

    // No zero option, so the index starts at 1
    console.prompt_for_address_in_form(AddressForm::ALL[index - 1])
}

fn visit_shuffle<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<String> {
    let items = prompt_for_items(console, "Enter items separated by commas")?;
    let mut deck: Deck<String> = items.into_iter().collect();
    deck.shuffle();

    let available = i64::try_from(deck.len()).unwrap_or(i64::MAX);
    let count = console.prompt_for_number_in("How many to draw", 1, available)?;
    let hand = deck.draw_many(usize::try_from(count).unwrap_or_default())?;

    Ok(format!("drew {hand}, {} left", deck.len()))
}
